use dictionary::{Dictionary, QuizOutcome};
use rand::Rng;

use crate::saved_words::SavedWords;

pub const GRADING_FAILED_MESSAGE: &str = "评分失败，请稍后重试。";

#[derive(Debug, Clone, PartialEq)]
pub enum NotebookView {
    List,
    Quiz(QuizState),
}

#[derive(Debug, Clone, PartialEq)]
pub enum QuizState {
    AwaitingAnswer {
        word: String,
        /// Set when the last grading attempt failed; the same word can be retried.
        error: Option<String>,
    },
    Graded {
        word: String,
        answer: String,
        outcome: QuizOutcome,
    },
}

impl QuizState {
    pub fn word(&self) -> &str {
        match self {
            QuizState::AwaitingAnswer { word, .. } | QuizState::Graded { word, .. } => word,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Nothing was sent: blank answer, or no question awaiting an answer.
    Ignored,
    Graded,
    Failed,
}

/// Overlay over the saved words: a list view and a self-quiz view.
#[derive(Debug, Clone, PartialEq)]
pub struct Notebook {
    view: NotebookView,
}

impl Default for Notebook {
    fn default() -> Self {
        Self::new()
    }
}

impl Notebook {
    pub fn new() -> Self {
        Self {
            view: NotebookView::List,
        }
    }

    pub fn view(&self) -> &NotebookView {
        &self.view
    }

    pub fn quiz(&self) -> Option<&QuizState> {
        match &self.view {
            NotebookView::Quiz(quiz) => Some(quiz),
            NotebookView::List => None,
        }
    }

    /// Picks a saved word at random and waits for a definition.
    /// Returns `false` and stays put when nothing is saved.
    pub fn start_quiz<R: Rng + ?Sized>(&mut self, saved: &SavedWords, rng: &mut R) -> bool {
        let Some(word) = saved.choose_random(rng) else {
            return false;
        };
        tracing::debug!(word, "quiz word chosen");
        self.view = NotebookView::Quiz(QuizState::AwaitingAnswer {
            word: word.to_string(),
            error: None,
        });
        true
    }

    /// Moves on from a graded answer to a fresh random word.
    pub fn next<R: Rng + ?Sized>(&mut self, saved: &SavedWords, rng: &mut R) -> bool {
        self.start_quiz(saved, rng)
    }

    pub fn back_to_list(&mut self) {
        self.view = NotebookView::List;
    }

    pub async fn submit_answer(&mut self, dict: &Dictionary, answer: &str) -> Submission {
        let answer = answer.trim();
        let word = match &self.view {
            NotebookView::Quiz(QuizState::AwaitingAnswer { word, .. }) if !answer.is_empty() => {
                word.clone()
            }
            _ => return Submission::Ignored,
        };
        match dict.evaluate_quiz_answer(&word, answer).await {
            Ok(outcome) => {
                self.view = NotebookView::Quiz(QuizState::Graded {
                    word,
                    answer: answer.to_string(),
                    outcome,
                });
                Submission::Graded
            }
            Err(_) => {
                self.view = NotebookView::Quiz(QuizState::AwaitingAnswer {
                    word,
                    error: Some(GRADING_FAILED_MESSAGE.to_string()),
                });
                Submission::Failed
            }
        }
    }
}
