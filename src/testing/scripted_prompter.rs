use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use crate::domain::AppError;
use crate::ports::Prompter;

/// Prompter double answering by label prefix; unmatched labels take the default.
#[derive(Default)]
#[allow(dead_code)]
pub struct ScriptedPrompter {
    answers: HashMap<String, VecDeque<String>>,
    asked: RefCell<Vec<String>>,
    consumed: RefCell<HashMap<String, usize>>,
}

#[allow(dead_code)]
impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer the next prompt whose label starts with `label_prefix`.
    pub fn answer(mut self, label_prefix: &str, value: &str) -> Self {
        self.answers.entry(label_prefix.to_string()).or_default().push_back(value.to_string());
        self
    }

    /// Labels asked so far, in order.
    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask_with_default(&self, label: &str, default: &str) -> Result<String, AppError> {
        self.asked.borrow_mut().push(label.to_string());

        let matched = self
            .answers
            .keys()
            .filter(|prefix| label.starts_with(prefix.as_str()))
            .max_by_key(|prefix| prefix.len());
        let Some(prefix) = matched else {
            return Ok(default.to_string());
        };

        let mut consumed = self.consumed.borrow_mut();
        let index = consumed.entry(prefix.clone()).or_insert(0);
        let answer = self.answers[prefix].get(*index).cloned();
        *index += 1;

        Ok(match answer {
            Some(value) if !value.trim().is_empty() => value.trim().to_string(),
            _ => default.to_string(),
        })
    }
}
