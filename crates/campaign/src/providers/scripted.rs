use std::collections::VecDeque;

use super::{ChoiceError, DestinationPrompt, DestinationProvider};

/// Provider replaying a fixed list of answers.
///
/// Start and destination questions draw from the same queue, in the order
/// they are asked. Every destination prompt is recorded for inspection.
#[derive(Clone, Debug, Default)]
pub struct ScriptedProvider {
    answers: VecDeque<i64>,
    prompts: Vec<DestinationPrompt>,
    rejections: Vec<i64>,
}

impl ScriptedProvider {
    pub fn new(answers: impl IntoIterator<Item = i64>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            prompts: Vec::new(),
            rejections: Vec::new(),
        }
    }

    /// Destination prompts seen so far, in order.
    pub fn prompts(&self) -> &[DestinationPrompt] {
        &self.prompts
    }

    /// Answers rejected as out of range.
    pub fn rejections(&self) -> &[i64] {
        &self.rejections
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self) -> Result<i64, ChoiceError> {
        self.answers.pop_front().ok_or(ChoiceError::Exhausted)
    }
}

impl DestinationProvider for ScriptedProvider {
    fn choose_destination(&mut self, prompt: &DestinationPrompt) -> Result<i64, ChoiceError> {
        self.prompts.push(*prompt);
        self.next()
    }

    fn choose_start(&mut self, _max: u32) -> Result<i64, ChoiceError> {
        self.next()
    }

    fn rejected(&mut self, value: i64, _min: u32, _max: u32) {
        self.rejections.push(value);
    }
}
