use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Selected option per question prompt.
///
/// One value per prompt: recording an answer for a prompt that already
/// has one replaces it. Serializes as a flat JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerMap {
    entries: BTreeMap<String, String>,
}

impl AnswerMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, returning the value it replaced
    pub fn record(&mut self, prompt: impl Into<String>, option: impl Into<String>) -> Option<String> {
        self.entries.insert(prompt.into(), option.into())
    }

    pub fn get(&self, prompt: &str) -> Option<&str> {
        self.entries.get(prompt).map(String::as_str)
    }

    pub fn contains(&self, prompt: &str) -> bool {
        self.entries.contains_key(prompt)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
