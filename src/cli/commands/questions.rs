use anyhow::Result;
use clap::Args;
use colored::*;
use std::path::PathBuf;

use uxhf_questionnaire::config::Config;

#[derive(Args)]
pub struct QuestionsCommands {
    /// Question file to list instead of the configured one
    #[arg(long, help = "TOML file with [[questions]] entries")]
    pub questions: Option<PathBuf>,

    /// Print as a question file, ready to edit and pass to --questions
    #[arg(long, help = "Print in the question file format")]
    pub toml: bool,
}

pub fn handle_questions_command(args: QuestionsCommands, mut config: Config) -> Result<()> {
    if let Some(path) = args.questions {
        config.display.questions_file = Some(path);
    }

    let questions = config.question_set()?;

    if args.toml {
        print!("{}", questions.to_toml_string()?);
        return Ok(());
    }

    for (i, question) in questions.iter().enumerate() {
        println!("{:>3}. {}", i + 1, question.prompt.bold());
        for option in &question.options {
            println!("       - {}", option);
        }
    }
    println!();
    println!("{} questions", questions.len().to_string().bright_green());

    Ok(())
}
