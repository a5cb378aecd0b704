use anyhow::Result;
use dialoguer::Select;

use super::render::{form_item_label, question_title};
use crate::questionnaire::{AnswerMap, Question, QuestionSet};

/// Interactive confirmation prompt using arrow-key navigable selection
///
/// # Arguments
/// * `prompt` - The question to ask the user
/// * `default_yes` - Whether "Yes" should be the default selection (index 0)
///
/// # Returns
/// * `Ok(true)` if user selects "Yes"
/// * `Ok(false)` if user selects "No"
pub fn prompt_confirmation(prompt: &str, default_yes: bool) -> Result<bool> {
    let items = vec!["Yes", "No"];
    let default_index = if default_yes { 0 } else { 1 };

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(default_index)
        .interact()?;

    Ok(selection == 0)
}

pub fn prompt_start() -> Result<bool> {
    prompt_confirmation("Start the questionnaire?", true)
}

pub fn prompt_restart() -> Result<bool> {
    prompt_confirmation("Start over with a new questionnaire?", false)
}

pub fn prompt_submit_partial(unanswered: usize) -> Result<bool> {
    prompt_confirmation(
        &format!(
            "{} question(s) are still unanswered. Submit anyway?",
            unanswered
        ),
        false,
    )
}

/// Ask one question and return the chosen option.
/// The cursor starts on `current` when the question was answered before.
pub fn prompt_question(
    index: usize,
    total: usize,
    question: &Question,
    current: Option<&str>,
) -> Result<String> {
    let default_index = current
        .and_then(|c| question.options.iter().position(|o| o == c))
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt(question_title(index, total, &question.prompt))
        .items(&question.options)
        .default(default_index)
        .interact()?;

    Ok(question.options[selection].clone())
}

/// What the user picked from the single-page form menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Answer(usize),
    Submit,
}

/// Map a menu position back to an action; the submit entry comes last
pub fn form_action_for(selection: usize, question_count: usize) -> FormAction {
    if selection < question_count {
        FormAction::Answer(selection)
    } else {
        FormAction::Submit
    }
}

/// Show every question with its current answer plus a submit entry
pub fn prompt_form_action(
    questions: &QuestionSet,
    answers: &AnswerMap,
    cursor: usize,
) -> Result<FormAction> {
    let mut items: Vec<String> = questions
        .iter()
        .map(|q| form_item_label(&q.prompt, answers.get(&q.prompt)))
        .collect();
    items.push(format!(
        "Submit answers ({}/{} answered)",
        answers.len(),
        questions.len()
    ));

    let selection = Select::new()
        .with_prompt("Choose a question to answer, or submit")
        .items(&items)
        .default(cursor.min(items.len() - 1))
        .max_length(12)
        .interact()?;

    Ok(form_action_for(selection, questions.len()))
}
