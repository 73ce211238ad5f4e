// https://ai.google.dev/api/generate-content - structured output via responseSchema

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::prompt::{analysis_prompt, evaluation_prompt, ANALYSIS_TEMPERATURE};
use crate::schema::{decode, quiz_schema, word_analysis_schema, CONTRACT_VERSION};
use crate::{
    AnalysisError, DictionaryError, EvaluationError, LexiconBackend, ProviderMetadata,
    QuizOutcome, WordRecord,
};

pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub api_url: String,
    /// `None` leaves requests unbounded.
    pub timeout: Option<Duration>,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            timeout: None,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_url.trim_end_matches('/'),
            self.model
        )
    }
}

pub struct GeminiBackend {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiBackend {
    pub fn new(config: GeminiConfig) -> Result<Self, DictionaryError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(DictionaryError::Fetch)?;
        Ok(Self { client, config })
    }

    async fn generate(
        &self,
        prompt: String,
        schema: Value,
        temperature: Option<f32>,
    ) -> Result<Option<String>, DictionaryError> {
        let body = GenerateContentRequest::new(prompt, schema, temperature);
        tracing::debug!(model = %self.config.model, "sending generateContent request");
        let res = self
            .client
            .post(self.config.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(DictionaryError::Fetch)?;
        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(DictionaryError::Status {
                status: status.as_u16(),
                body,
            });
        }
        let envelope = res
            .json::<GenerateContentResponse>()
            .await
            .map_err(DictionaryError::Deserialize)?;
        Ok(envelope.text())
    }
}

#[async_trait::async_trait]
impl LexiconBackend for GeminiBackend {
    async fn analyze_word(&self, word: &str) -> Result<WordRecord, AnalysisError> {
        let text = self
            .generate(
                analysis_prompt(word),
                word_analysis_schema(),
                Some(ANALYSIS_TEMPERATURE),
            )
            .await
            .map_err(|cause| AnalysisError::new(word, cause))?;
        decode(text.as_deref()).map_err(|cause| AnalysisError::new(word, cause))
    }

    async fn evaluate_quiz_answer(
        &self,
        target_word: &str,
        user_answer: &str,
    ) -> Result<QuizOutcome, EvaluationError> {
        let text = self
            .generate(
                evaluation_prompt(target_word, user_answer),
                quiz_schema(),
                None,
            )
            .await
            .map_err(|cause| EvaluationError::new(target_word, cause))?;
        decode(text.as_deref()).map_err(|cause| EvaluationError::new(target_word, cause))
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "gemini".to_string(),
            model: self.config.model.clone(),
            contract_version: CONTRACT_VERSION,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    fn new(prompt: String, schema: Value, temperature: Option<f32>) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part { text: Some(prompt) }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: schema,
                temperature,
            },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, with all of its parts joined.
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}
