//! Interactive questionnaire runner

use anyhow::{Context, Result};
use colored::*;
use is_terminal::IsTerminal;
use log::{debug, info};

use super::RunCommands;
use crate::cli::with_spinner;
use uxhf_questionnaire::api::{AnalysisClient, AnalysisRequest};
use uxhf_questionnaire::config::Config;
use uxhf_questionnaire::questionnaire::{FlowController, View, run_submission};
use uxhf_questionnaire::ui::prompts::{
    FormAction, prompt_form_action, prompt_question, prompt_restart, prompt_start,
    prompt_submit_partial,
};
use uxhf_questionnaire::ui::render::{LOADING_MESSAGE, front_page, result_panel};

const TITLE: &str = "UX & HF Questionnaire";

/// Handle the run command
pub async fn handle_run_command(args: RunCommands, mut config: Config) -> Result<()> {
    if args.no_color {
        colored::control::set_override(false);
    }

    // Command-line flags win over file and environment
    if let Some(url) = args.api_url {
        config.api.url = url;
    }
    if let Some(mode) = args.mode {
        config.display.mode = mode;
    }
    if args.no_front_page {
        config.display.front_page = false;
    }
    if let Some(path) = args.questions {
        config.display.questions_file = Some(path);
    }
    config.warn_on_insecure_endpoint();

    if !std::io::stdin().is_terminal() {
        anyhow::bail!("The questionnaire needs an interactive terminal");
    }

    let questions = config.question_set()?;
    let client = AnalysisClient::new(&config.api).context("Failed to create analysis client")?;
    let mut controller =
        FlowController::new(questions, config.display.mode, config.display.front_page);

    info!(
        "Running questionnaire against {} in {} mode",
        client.url(),
        controller.mode()
    );

    loop {
        let Some(request) = collect_answers(&mut controller)? else {
            println!("{}", "Questionnaire cancelled.".dimmed());
            return Ok(());
        };

        if args.dry_run {
            let body = serde_json::to_string_pretty(&request)
                .context("Failed to serialize request body")?;
            println!("🔍 Request body for {}:", client.url().cyan());
            println!();
            println!("{}", body);
            return Ok(());
        }

        let result = with_spinner(
            LOADING_MESSAGE,
            run_submission(&mut controller, &client, request),
        )
        .await?;

        println!();
        println!("{}", result_panel(result));

        if !prompt_restart()? {
            break;
        }
        controller.restart()?;
    }

    Ok(())
}

/// Prompt until the controller asks for a submission.
/// Returns `None` if the user backs out on the front page.
fn collect_answers(controller: &mut FlowController) -> Result<Option<AnalysisRequest>> {
    let mut cursor = 0;

    loop {
        match controller.view() {
            View::FrontPage => {
                println!("{}", front_page(TITLE, controller.questions().len()));
                if !prompt_start()? {
                    return Ok(None);
                }
                controller.start()?;
            }
            View::Question {
                index,
                total,
                question,
            } => {
                let current = controller.answers().get(&question.prompt);
                let option = prompt_question(index, total, question, current)?;
                if let Some(request) = controller.select_option(index, &option)? {
                    return Ok(Some(request));
                }
            }
            View::Form => {
                match prompt_form_action(controller.questions(), controller.answers(), cursor)? {
                    FormAction::Answer(index) => {
                        let question = controller
                            .questions()
                            .get(index)
                            .cloned()
                            .context("Selected question is out of range")?;
                        let current = controller.answers().get(&question.prompt).map(str::to_string);
                        let option = prompt_question(
                            index,
                            controller.questions().len(),
                            &question,
                            current.as_deref(),
                        )?;
                        controller.select_option(index, &option)?;
                        cursor = index + 1;
                    }
                    FormAction::Submit => {
                        let missing = controller.unanswered().len();
                        if missing > 0 && !prompt_submit_partial(missing)? {
                            continue;
                        }
                        debug!("Submitting form with {} unanswered questions", missing);
                        return Ok(Some(controller.submit()?));
                    }
                }
            }
            View::Loading | View::Result(_) => {
                anyhow::bail!("Questionnaire is not accepting answers");
            }
        }
    }
}
