//! Canned backend for tests.
//!
//! Responses are stored as raw generated text and go through the same strict
//! decoding as a live provider, so malformed payloads fail the same way.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::schema::{decode, CONTRACT_VERSION};
use crate::{
    AnalysisError, EvaluationError, LexiconBackend, ProviderMetadata, QuizOutcome, WordRecord,
};

#[derive(Debug, Clone, PartialEq)]
pub enum MockCall {
    Analyze(String),
    Evaluate { target_word: String, user_answer: String },
}

#[derive(Default, Clone)]
pub struct MockBackend {
    analyses: HashMap<String, String>,
    evaluation: Option<String>,
    calls: Arc<Mutex<Vec<MockCall>>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generated text returned when `word` is analyzed. Lookup is case-insensitive.
    pub fn with_analysis(mut self, word: &str, text: impl Into<String>) -> Self {
        self.analyses.insert(word.to_lowercase(), text.into());
        self
    }

    /// Generated text returned for every quiz evaluation.
    pub fn with_evaluation(mut self, text: impl Into<String>) -> Self {
        self.evaluation = Some(text.into());
        self
    }

    /// Shared handle to the recorded calls; stays valid after the backend is boxed.
    pub fn calls(&self) -> Arc<Mutex<Vec<MockCall>>> {
        Arc::clone(&self.calls)
    }

    fn record(&self, call: MockCall) {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(call);
    }
}

#[async_trait::async_trait]
impl LexiconBackend for MockBackend {
    async fn analyze_word(&self, word: &str) -> Result<WordRecord, AnalysisError> {
        self.record(MockCall::Analyze(word.to_string()));
        let text = self.analyses.get(&word.to_lowercase()).map(String::as_str);
        decode(text).map_err(|cause| AnalysisError::new(word, cause))
    }

    async fn evaluate_quiz_answer(
        &self,
        target_word: &str,
        user_answer: &str,
    ) -> Result<QuizOutcome, EvaluationError> {
        self.record(MockCall::Evaluate {
            target_word: target_word.to_string(),
            user_answer: user_answer.to_string(),
        });
        decode(self.evaluation.as_deref()).map_err(|cause| EvaluationError::new(target_word, cause))
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "mock".to_string(),
            model: "mock".to_string(),
            contract_version: CONTRACT_VERSION,
        }
    }
}
