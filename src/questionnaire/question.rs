use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Smallest number of options a question may offer
pub const MIN_OPTIONS: usize = 2;

/// Largest number of options a question may offer
pub const MAX_OPTIONS: usize = 6;

/// A single multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<String>,
}

impl Question {
    pub fn new<P, O, I>(prompt: P, options: I) -> Self
    where
        P: Into<String>,
        O: Into<String>,
        I: IntoIterator<Item = O>,
    {
        Self {
            prompt: prompt.into(),
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `option` is one of the configured choices
    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum QuestionSetError {
    #[error("question set is empty")]
    Empty,

    #[error("question {index} has an empty prompt")]
    EmptyPrompt { index: usize },

    #[error("duplicate question prompt: {prompt}")]
    DuplicatePrompt { prompt: String },

    #[error("question '{prompt}' has {count} options, expected 2 to 6")]
    OptionCount { prompt: String, count: usize },

    #[error("question '{prompt}' has an empty option")]
    EmptyOption { prompt: String },

    #[error("question '{prompt}' lists option '{option}' more than once")]
    DuplicateOption { prompt: String, option: String },

    #[error("failed to read question file: {0}")]
    Io(String),

    #[error("failed to parse question file: {0}")]
    Parse(String),
}

/// An ordered, validated list of questions.
///
/// Prompts are unique so they can key the answer map. The set is never
/// mutated once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

/// On-disk layout of a question file
#[derive(Debug, Deserialize, Serialize)]
struct QuestionFile {
    questions: Vec<Question>,
}

impl QuestionSet {
    pub fn new(questions: Vec<Question>) -> Result<Self, QuestionSetError> {
        Self::validate(&questions)?;
        Ok(Self { questions })
    }

    fn validate(questions: &[Question]) -> Result<(), QuestionSetError> {
        if questions.is_empty() {
            return Err(QuestionSetError::Empty);
        }

        let mut prompts = HashSet::new();
        for (index, question) in questions.iter().enumerate() {
            if question.prompt.trim().is_empty() {
                return Err(QuestionSetError::EmptyPrompt { index });
            }
            if !prompts.insert(question.prompt.as_str()) {
                return Err(QuestionSetError::DuplicatePrompt {
                    prompt: question.prompt.clone(),
                });
            }

            let count = question.options.len();
            if !(MIN_OPTIONS..=MAX_OPTIONS).contains(&count) {
                return Err(QuestionSetError::OptionCount {
                    prompt: question.prompt.clone(),
                    count,
                });
            }

            let mut seen = HashSet::new();
            for option in &question.options {
                if option.trim().is_empty() {
                    return Err(QuestionSetError::EmptyOption {
                        prompt: question.prompt.clone(),
                    });
                }
                if !seen.insert(option.as_str()) {
                    return Err(QuestionSetError::DuplicateOption {
                        prompt: question.prompt.clone(),
                        option: option.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Parse a question set from TOML (`[[questions]]` tables with `prompt` and `options`)
    pub fn from_toml_str(content: &str) -> Result<Self, QuestionSetError> {
        let file: QuestionFile =
            toml::from_str(content).map_err(|e| QuestionSetError::Parse(e.to_string()))?;
        Self::new(file.questions)
    }

    /// Load a question set from a TOML file on disk
    pub fn load(path: &Path) -> Result<Self, QuestionSetError> {
        debug!("Loading question set from: {:?}", path);
        let content = fs::read_to_string(path)
            .map_err(|e| QuestionSetError::Io(format!("{}: {}", path.display(), e)))?;
        let set = Self::from_toml_str(&content)?;
        debug!("Loaded {} questions from {:?}", set.len(), path);
        Ok(set)
    }

    /// Serialize back to the TOML file layout
    pub fn to_toml_string(&self) -> Result<String, QuestionSetError> {
        let file = QuestionFile {
            questions: self.questions.clone(),
        };
        toml::to_string_pretty(&file).map_err(|e| QuestionSetError::Parse(e.to_string()))
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.questions.len() - 1
    }

    /// Find a question by its prompt
    pub fn find(&self, prompt: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.prompt == prompt)
    }
}

impl<'a> IntoIterator for &'a QuestionSet {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}
