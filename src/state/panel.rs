//! Side panel holding the question draft and the last answer.

use super::types::Region;
use crate::providers::QuestionAnswerer;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationPanel {
    pub visible: bool,
    pub question: String,
    pub answer: String,
}

impl AnnotationPanel {
    pub fn new(visible: bool) -> Self {
        Self {
            visible,
            ..Self::default()
        }
    }

    /// Flip visibility. Question and answer are kept.
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn set_question(&mut self, text: impl Into<String>) {
        self.question = text.into();
    }

    /// Ask `question`. Blank input changes nothing and returns `None`;
    /// otherwise the answer is stored, the panel opens and the answer is
    /// returned.
    pub fn ask(
        &mut self,
        question: &str,
        region: Option<&Region>,
        answerer: &dyn QuestionAnswerer,
    ) -> Option<&str> {
        if question.trim().is_empty() {
            return None;
        }

        self.answer = answerer.answer(question, region);
        self.visible = true;
        Some(&self.answer)
    }

    /// Commit the current draft, as pressing Enter in the input does.
    pub fn submit(
        &mut self,
        region: Option<&Region>,
        answerer: &dyn QuestionAnswerer,
    ) -> Option<&str> {
        let question = self.question.clone();
        self.ask(&question, region, answerer)
    }
}
