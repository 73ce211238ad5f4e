mod dictionary;
pub mod gemini;
pub mod mock;
mod prompt;
pub mod schema;

pub use dictionary::{
    Cognate, Etymology, Examples, LiteratureExample, ModernExample, Phonetics, QuizOutcome,
    Synonym, WordRecord, WordUsage,
};
pub use gemini::{GeminiBackend, GeminiConfig};

/// Why a single backend call failed.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("request failed: {0}")]
    Fetch(#[source] reqwest::Error),
    #[error("backend answered with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("could not decode response envelope: {0}")]
    Deserialize(#[source] reqwest::Error),
    #[error("backend returned no text")]
    Empty,
    #[error("response does not match the schema: {0}")]
    Schema(#[source] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
#[error("failed to analyze {word:?}: {cause}")]
pub struct AnalysisError {
    pub word: String,
    #[source]
    pub cause: DictionaryError,
}

impl AnalysisError {
    pub fn new(word: &str, cause: DictionaryError) -> Self {
        Self {
            word: word.to_string(),
            cause,
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("failed to evaluate answer for {target_word:?}: {cause}")]
pub struct EvaluationError {
    pub target_word: String,
    #[source]
    pub cause: DictionaryError,
}

impl EvaluationError {
    pub fn new(target_word: &str, cause: DictionaryError) -> Self {
        Self {
            target_word: target_word.to_string(),
            cause,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProviderMetadata {
    pub name: String,
    pub model: String,
    pub contract_version: u32,
}

/// A generative service able to fill the word-analysis and quiz contracts.
#[async_trait::async_trait]
pub trait LexiconBackend: Send + Sync {
    async fn analyze_word(&self, word: &str) -> Result<WordRecord, AnalysisError>;

    async fn evaluate_quiz_answer(
        &self,
        target_word: &str,
        user_answer: &str,
    ) -> Result<QuizOutcome, EvaluationError>;

    fn metadata(&self) -> ProviderMetadata;
}

pub struct Dictionary {
    backend: Box<dyn LexiconBackend>,
}

impl Dictionary {
    pub fn new(backend: impl LexiconBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    pub fn gemini(config: GeminiConfig) -> Result<Self, DictionaryError> {
        Ok(Self::new(GeminiBackend::new(config)?))
    }

    pub fn metadata(&self) -> ProviderMetadata {
        self.backend.metadata()
    }

    pub async fn analyze_word(&self, word: &str) -> Result<WordRecord, AnalysisError> {
        self.backend.analyze_word(word).await.map_err(|error| {
            tracing::error!(word, error = %error, "error analyzing word");
            error
        })
    }

    pub async fn evaluate_quiz_answer(
        &self,
        target_word: &str,
        user_answer: &str,
    ) -> Result<QuizOutcome, EvaluationError> {
        self.backend
            .evaluate_quiz_answer(target_word, user_answer)
            .await
            .map_err(|error| {
                tracing::error!(target_word, error = %error, "error evaluating quiz");
                error
            })
    }
}
