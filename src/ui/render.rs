//! Text rendering for the question card, the form and the result panel

use colored::*;

use crate::api::AnalysisResult;

pub const RESULT_HEADING: &str = "AI-Generated Recommendation";

pub const LOADING_MESSAGE: &str = "Please wait for the response...";

pub fn question_title(index: usize, total: usize, prompt: &str) -> String {
    format!("[{}/{}] {}", index + 1, total, prompt)
}

pub fn form_item_label(prompt: &str, answer: Option<&str>) -> String {
    match answer {
        Some(answer) => format!("{} {}  {}", "✔".green(), prompt, format!("→ {}", answer).cyan()),
        None => format!("{} {}", "·".dimmed(), prompt),
    }
}

pub fn front_page(title: &str, total: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", title.bold()));
    out.push_str(&format!(
        "Answer {} questions about your study and receive a recommended\n\
         statistical analysis together with example R code.\n",
        total
    ));
    out
}

const CODE_MIN_WIDTH: usize = 20;
const CODE_MAX_WIDTH: usize = 100;

/// Frame a code listing so it stands apart from the prose.
///
/// Every body row is padded to the frame width and closed with `│`. Lines
/// longer than the widest frame are wrapped onto continuation rows.
pub fn code_block(code: &str) -> String {
    let width = code
        .lines()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .clamp(CODE_MIN_WIDTH, CODE_MAX_WIDTH);
    let rule = "─".repeat(width + 2);

    let mut out = format!("┌{}┐\n", rule);
    for line in code.lines() {
        let chars: Vec<char> = line.chars().collect();
        let rows: Vec<String> = if chars.is_empty() {
            vec![String::new()]
        } else {
            chars.chunks(width).map(|row| row.iter().collect()).collect()
        };

        for row in rows {
            let padding = " ".repeat(width - row.chars().count());
            out.push_str(&format!("│ {}{} │\n", row.bright_white(), padding));
        }
    }
    out.push_str(&format!("└{}┘\n", rule));
    out
}

/// The result panel: heading, recommendation, explanation if any, code listing
pub fn result_panel(result: &AnalysisResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", RESULT_HEADING.bold().underline()));

    if result.is_failure() {
        out.push_str(&format!("{}\n", result.recommendation().red()));
        return out;
    }

    out.push_str(&format!("{}\n", result.recommendation()));

    if let Some(explanation) = result.explanation() {
        out.push_str(&format!("\n{}\n{}\n", "Explanation".bold(), explanation));
    }

    if let Some(code) = result.code_listing() {
        out.push('\n');
        out.push_str(&code_block(code));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::AnalysisResponse;
    use crate::api::constants::{FAILURE_MESSAGE, NO_CODE, NO_RECOMMENDATION};

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_question_title_is_one_based() {
        assert_eq!(question_title(0, 30, "Q1"), "[1/30] Q1");
    }

    #[test]
    fn test_result_panel_verbatim() {
        plain();
        let result = AnalysisResponse {
            recommendation: Some("X".to_string()),
            r_code: Some("Y".to_string()),
            explanation: None,
        }
        .into_result();

        let panel = result_panel(&result);
        assert!(panel.contains(RESULT_HEADING));
        assert!(panel.contains("X\n"));
        assert!(panel.contains(&format!("│ Y{} │\n", " ".repeat(19))));
        assert!(!panel.contains("Explanation"));
    }

    #[test]
    fn test_result_panel_with_explanation() {
        plain();
        let result = AnalysisResponse {
            recommendation: Some("Use a paired t-test".to_string()),
            r_code: Some("t.test(a, b, paired = TRUE)".to_string()),
            explanation: Some("Two measurements per participant".to_string()),
        }
        .into_result();

        let panel = result_panel(&result);
        let explanation = panel.find("Explanation\nTwo measurements per participant\n");
        let code = panel.find("t.test(a, b, paired = TRUE)");
        assert!(explanation.is_some());
        assert!(explanation < code);
    }

    #[test]
    fn test_code_block_rows_are_closed() {
        plain();
        let block = code_block("library(lme4)\n\nfit <- lmer(y ~ x + (1 | id), data = d)");
        let lines: Vec<&str> = block.lines().collect();

        assert_eq!(lines.len(), 5);
        let width = lines[0].chars().count();
        for line in &lines {
            assert_eq!(line.chars().count(), width);
        }
        assert!(lines[1..4].iter().all(|l| l.starts_with("│ ") && l.ends_with(" │")));
    }

    #[test]
    fn test_code_block_wraps_overlong_lines() {
        plain();
        let long = "x".repeat(CODE_MAX_WIDTH + 5);
        let block = code_block(&long);
        let lines: Vec<&str> = block.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].chars().count(), CODE_MAX_WIDTH + 4);
        assert!(lines.iter().all(|l| l.chars().count() == CODE_MAX_WIDTH + 4));
        assert!(lines[2].starts_with("│ xxxxx "));
    }

    #[test]
    fn test_result_panel_placeholders() {
        plain();
        let panel = result_panel(&AnalysisResponse::default().into_result());
        assert!(panel.contains(NO_RECOMMENDATION));
        assert!(panel.contains(NO_CODE));
    }

    #[test]
    fn test_failure_panel_has_no_code() {
        plain();
        let panel = result_panel(&AnalysisResult::failure());
        assert!(panel.contains(FAILURE_MESSAGE));
        assert!(!panel.contains('┌'));
    }

    #[test]
    fn test_form_item_label() {
        plain();
        assert_eq!(form_item_label("Q1", Some("A")), "✔ Q1  → A");
        assert_eq!(form_item_label("Q2", None), "· Q2");
    }
}
