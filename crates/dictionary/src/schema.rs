//! Response contracts shared by every backend.
//!
//! The schemas use the OpenAPI subset understood by structured-generation
//! services (`OBJECT`, `STRING`, `ARRAY`, `BOOLEAN`). Bump [`CONTRACT_VERSION`]
//! whenever a field is added, removed or changes type.

use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::DictionaryError;

pub const CONTRACT_VERSION: u32 = 1;

pub fn word_analysis_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "word": { "type": "STRING" },
            "phonetics": {
                "type": "OBJECT",
                "properties": {
                    "ipa": { "type": "STRING", "description": "Standard IPA transcription" },
                    "syllables": { "type": "STRING", "description": "Word broken by syllables, e.g., am-BIG-yu-us" },
                    "tip": { "type": "STRING", "description": "Pronunciation tip in English, e.g., Rhymes with..." }
                },
                "required": ["ipa", "syllables", "tip"]
            },
            "etymology": {
                "type": "OBJECT",
                "properties": {
                    "rootAnalysis": { "type": "STRING", "description": "Prefix + Root + Suffix breakdown" },
                    "story": { "type": "STRING", "description": "The origin story in SIMPLIFIED CHINESE. Engaging, storytelling style." }
                },
                "required": ["rootAnalysis", "story"]
            },
            "cognates": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "word": { "type": "STRING" },
                        "connection": { "type": "STRING", "description": "Brief explanation of connection in SIMPLIFIED CHINESE" }
                    },
                    "required": ["word", "connection"]
                }
            },
            "usage": {
                "type": "OBJECT",
                "properties": {
                    "synonyms": {
                        "type": "ARRAY",
                        "items": {
                            "type": "OBJECT",
                            "properties": {
                                "word": { "type": "STRING" },
                                "context": { "type": "STRING", "description": "Usage context in SIMPLIFIED CHINESE" }
                            },
                            "required": ["word", "context"]
                        }
                    },
                    "antonyms": {
                        "type": "ARRAY",
                        "items": { "type": "STRING" }
                    },
                    "examples": {
                        "type": "OBJECT",
                        "properties": {
                            "literature": {
                                "type": "OBJECT",
                                "properties": {
                                    "quote": { "type": "STRING", "description": "Quote from classic literature in English" },
                                    "author": { "type": "STRING", "description": "Name of the author" },
                                    "source": { "type": "STRING", "description": "Title of the book/work" }
                                },
                                "required": ["quote", "author", "source"]
                            },
                            "modern": {
                                "type": "OBJECT",
                                "properties": {
                                    "quote": { "type": "STRING", "description": "Quote from movie/TV/song in English" },
                                    "source": { "type": "STRING", "description": "Title of the movie/show/song" }
                                },
                                "required": ["quote", "source"]
                            }
                        },
                        "required": ["literature", "modern"]
                    }
                },
                "required": ["synonyms", "antonyms", "examples"]
            }
        },
        "required": ["word", "phonetics", "etymology", "cognates", "usage"]
    })
}

pub fn quiz_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "isCorrect": { "type": "BOOLEAN" },
            "feedback": { "type": "STRING", "description": "Feedback in SIMPLIFIED CHINESE regarding the meaning." },
            "etymologyNote": { "type": "STRING", "description": "Etymological explanation in SIMPLIFIED CHINESE." }
        },
        "required": ["isCorrect", "feedback", "etymologyNote"]
    })
}

/// Decodes generated text into a typed response. Empty text counts as no response.
pub fn decode<T: DeserializeOwned>(text: Option<&str>) -> Result<T, DictionaryError> {
    match text {
        Some(text) if !text.trim().is_empty() => {
            serde_json::from_str(text).map_err(DictionaryError::Schema)
        }
        _ => Err(DictionaryError::Empty),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{QuizOutcome, WordRecord};

    const EPHEMERAL: &str = include_str!("../tests/fixtures/ephemeral.json");

    #[test]
    fn decodes_complete_record() {
        let record: WordRecord = decode(Some(EPHEMERAL)).unwrap();
        assert_eq!(record.word, "ephemeral");
        assert_eq!(record.etymology.root_analysis, "epi- (on) + hemera (day) + -al");
        assert_eq!(record.usage.examples.literature.author, "Percy Bysshe Shelley");
        assert_eq!(record.all_antonyms().collect::<Vec<_>>(), vec!["permanent", "enduring"]);
    }

    #[test]
    fn rejects_record_missing_required_field() {
        let mut value: Value = serde_json::from_str(EPHEMERAL).unwrap();
        value["usage"]["examples"]
            .as_object_mut()
            .unwrap()
            .remove("modern");
        let text = value.to_string();
        let result = decode::<WordRecord>(Some(&text));
        assert!(matches!(result, Err(DictionaryError::Schema(_))));
    }

    #[test]
    fn rejects_non_json_text() {
        let result = decode::<WordRecord>(Some("Sorry, I cannot help with that."));
        assert!(matches!(result, Err(DictionaryError::Schema(_))));
    }

    #[test]
    fn missing_or_blank_text_is_empty() {
        assert!(matches!(decode::<QuizOutcome>(None), Err(DictionaryError::Empty)));
        assert!(matches!(decode::<QuizOutcome>(Some("  \n")), Err(DictionaryError::Empty)));
    }

    #[test]
    fn decodes_quiz_outcome_with_camel_case_fields() {
        let outcome: QuizOutcome = decode(Some(
            r#"{"isCorrect":false,"feedback":"不对","etymologyNote":"hemera 意为一天"}"#,
        ))
        .unwrap();
        assert!(!outcome.is_correct);
        assert_eq!(outcome.etymology_note, "hemera 意为一天");
    }

    #[test]
    fn schemas_require_every_field() {
        let analysis = word_analysis_schema();
        assert_eq!(
            analysis["required"],
            json!(["word", "phonetics", "etymology", "cognates", "usage"])
        );
        assert_eq!(
            analysis["properties"]["usage"]["properties"]["examples"]["properties"]["literature"]["required"],
            json!(["quote", "author", "source"])
        );
        assert_eq!(
            quiz_schema()["required"],
            json!(["isCorrect", "feedback", "etymologyNote"])
        );
    }
}
