//! Questionnaire flow controller
//!
//! One controller covers every presentation: a step-by-step wizard or a
//! single-page form, each with or without a front page. The controller
//! never talks to the network itself. When a submission is due it hands
//! back an [`AnalysisRequest`] and waits for [`FlowController::complete`].

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::answers::AnswerMap;
use super::question::{Question, QuestionSet};
use crate::api::{AnalysisRequest, AnalysisResult, Analyzer};

/// How questions are presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayMode {
    /// One question at a time; answering the last one submits
    #[default]
    Wizard,
    /// All questions at once, answered in any order, submitted explicitly
    SinglePage,
}

impl std::fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Wizard => write!(f, "wizard"),
            Self::SinglePage => write!(f, "single-page"),
        }
    }
}

impl std::str::FromStr for DisplayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "wizard" => Ok(Self::Wizard),
            "single-page" | "single_page" | "singlepage" => Ok(Self::SinglePage),
            other => Err(format!("unknown display mode '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowState {
    /// Front page shown, nothing answered yet
    NotStarted,
    /// Wizard showing the question at this index
    AtQuestion(usize),
    /// Single-page form open for answers
    Answering,
    /// Waiting for the analysis service
    Submitting,
    ShowingResult(AnalysisResult),
}

impl FlowState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::NotStarted => "not-started",
            Self::AtQuestion(_) => "at-question",
            Self::Answering => "answering",
            Self::Submitting => "submitting",
            Self::ShowingResult(_) => "showing-result",
        }
    }
}

/// The one thing the front-end should render right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View<'a> {
    FrontPage,
    Question {
        index: usize,
        total: usize,
        question: &'a Question,
    },
    Form,
    Loading,
    Result(&'a AnalysisResult),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FlowError {
    #[error("cannot {operation} while {state}")]
    InvalidState {
        operation: &'static str,
        state: &'static str,
    },

    #[error("no question at index {index} (questionnaire has {len})")]
    UnknownQuestion { index: usize, len: usize },

    #[error("'{option}' is not an option for question '{prompt}'")]
    InvalidOption { prompt: String, option: String },

    #[error("question {index} is not the one currently displayed")]
    NotDisplayed { index: usize },

    #[error("{operation} is not available in {mode} mode")]
    WrongMode {
        operation: &'static str,
        mode: DisplayMode,
    },

    #[error("a submission is already in flight")]
    SubmissionInFlight,
}

#[derive(Debug, Clone)]
pub struct FlowController {
    questions: QuestionSet,
    mode: DisplayMode,
    front_page: bool,
    state: FlowState,
    answers: AnswerMap,
}

impl FlowController {
    pub fn new(questions: QuestionSet, mode: DisplayMode, front_page: bool) -> Self {
        let state = Self::initial_state(mode, front_page);
        debug!(
            "Created {} flow over {} questions (front page: {})",
            mode,
            questions.len(),
            front_page
        );

        Self {
            questions,
            mode,
            front_page,
            state,
            answers: AnswerMap::new(),
        }
    }

    fn initial_state(mode: DisplayMode, front_page: bool) -> FlowState {
        if front_page {
            FlowState::NotStarted
        } else {
            Self::first_active_state(mode)
        }
    }

    fn first_active_state(mode: DisplayMode) -> FlowState {
        match mode {
            DisplayMode::Wizard => FlowState::AtQuestion(0),
            DisplayMode::SinglePage => FlowState::Answering,
        }
    }

    /// Leave the front page
    pub fn start(&mut self) -> Result<(), FlowError> {
        if self.state != FlowState::NotStarted {
            return Err(self.invalid("start"));
        }

        self.state = Self::first_active_state(self.mode);
        info!("Questionnaire started in {} mode", self.mode);
        Ok(())
    }

    /// Record `option` for the question at `index`.
    ///
    /// In wizard mode only the displayed question can be answered; answering
    /// the last one moves to `Submitting` and returns the request to send.
    /// In single-page mode any question can be (re-)answered and nothing is
    /// returned. Rejected calls change nothing.
    pub fn select_option(
        &mut self,
        index: usize,
        option: &str,
    ) -> Result<Option<AnalysisRequest>, FlowError> {
        match self.state {
            FlowState::AtQuestion(_) | FlowState::Answering => {}
            FlowState::Submitting => return Err(FlowError::SubmissionInFlight),
            _ => return Err(self.invalid("select an option")),
        }

        let question = self.questions.get(index).ok_or(FlowError::UnknownQuestion {
            index,
            len: self.questions.len(),
        })?;

        if !question.has_option(option) {
            return Err(FlowError::InvalidOption {
                prompt: question.prompt.clone(),
                option: option.to_string(),
            });
        }

        if let FlowState::AtQuestion(current) = self.state {
            if current != index {
                return Err(FlowError::NotDisplayed { index });
            }
        }

        let prompt = question.prompt.clone();
        if let Some(previous) = self.answers.record(prompt.as_str(), option) {
            debug!("Re-answered '{}': '{}' -> '{}'", prompt, previous, option);
        } else {
            debug!("Answered '{}': '{}'", prompt, option);
        }

        match self.mode {
            DisplayMode::SinglePage => Ok(None),
            DisplayMode::Wizard if index < self.questions.last_index() => {
                self.state = FlowState::AtQuestion(index + 1);
                Ok(None)
            }
            DisplayMode::Wizard => Ok(Some(self.begin_submission())),
        }
    }

    /// Submit the form as it stands. Single-page mode only; unanswered
    /// questions are simply left out of the request.
    pub fn submit(&mut self) -> Result<AnalysisRequest, FlowError> {
        if self.mode != DisplayMode::SinglePage {
            return Err(FlowError::WrongMode {
                operation: "submit",
                mode: self.mode,
            });
        }

        match self.state {
            FlowState::Answering => Ok(self.begin_submission()),
            FlowState::Submitting => Err(FlowError::SubmissionInFlight),
            _ => Err(self.invalid("submit")),
        }
    }

    fn begin_submission(&mut self) -> AnalysisRequest {
        self.state = FlowState::Submitting;
        info!(
            "Submitting {} of {} answers",
            self.answers.len(),
            self.questions.len()
        );
        AnalysisRequest::new(self.answers.clone())
    }

    /// Deliver the outcome of the pending submission
    pub fn complete(&mut self, result: AnalysisResult) -> Result<&AnalysisResult, FlowError> {
        if self.state != FlowState::Submitting {
            return Err(self.invalid("complete a submission"));
        }

        if result.is_failure() {
            info!("Submission failed, showing failure message");
        }
        self.state = FlowState::ShowingResult(result);
        self.result().ok_or_else(|| self.invalid("complete a submission"))
    }

    /// Clear all answers and go back to the beginning. Only from the result view.
    pub fn restart(&mut self) -> Result<(), FlowError> {
        if !matches!(self.state, FlowState::ShowingResult(_)) {
            return Err(self.invalid("restart"));
        }

        self.answers.clear();
        self.state = Self::initial_state(self.mode, self.front_page);
        info!("Questionnaire restarted");
        Ok(())
    }

    fn invalid(&self, operation: &'static str) -> FlowError {
        FlowError::InvalidState {
            operation,
            state: self.state.name(),
        }
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn has_front_page(&self) -> bool {
        self.front_page
    }

    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    pub fn is_loading(&self) -> bool {
        self.state == FlowState::Submitting
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match &self.state {
            FlowState::ShowingResult(result) => Some(result),
            _ => None,
        }
    }

    /// The question the wizard is currently showing
    pub fn current_question(&self) -> Option<(usize, &Question)> {
        match self.state {
            FlowState::AtQuestion(index) => self.questions.get(index).map(|q| (index, q)),
            _ => None,
        }
    }

    /// (answered, total)
    pub fn progress(&self) -> (usize, usize) {
        (self.answers.len(), self.questions.len())
    }

    /// Questions with no recorded answer, in questionnaire order
    pub fn unanswered(&self) -> Vec<(usize, &Question)> {
        self.questions
            .iter()
            .enumerate()
            .filter(|(_, q)| !self.answers.contains(&q.prompt))
            .collect()
    }

    pub fn view(&self) -> View<'_> {
        match &self.state {
            FlowState::NotStarted => View::FrontPage,
            FlowState::AtQuestion(_) => match self.current_question() {
                Some((index, question)) => View::Question {
                    index,
                    total: self.questions.len(),
                    question,
                },
                None => {
                    warn!("Question cursor out of range, showing the front page");
                    View::FrontPage
                }
            },
            FlowState::Answering => View::Form,
            FlowState::Submitting => View::Loading,
            FlowState::ShowingResult(result) => View::Result(result),
        }
    }
}

/// Send a pending submission and feed the outcome back into the controller
pub async fn run_submission<'c, A>(
    controller: &'c mut FlowController,
    analyzer: &A,
    request: AnalysisRequest,
) -> Result<&'c AnalysisResult, FlowError>
where
    A: Analyzer + ?Sized,
{
    if !controller.is_loading() {
        return Err(controller.invalid("send a submission"));
    }

    let result = analyzer.analyze(&request).await;
    controller.complete(result)
}
