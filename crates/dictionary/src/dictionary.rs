use serde::{Deserialize, Serialize};

/// Structured analysis of a single English word.
///
/// Every field is required; a backend response missing any of them is rejected
/// as a whole rather than partially accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordRecord {
    pub word: String,
    pub phonetics: Phonetics,
    pub etymology: Etymology,
    pub cognates: Vec<Cognate>,
    pub usage: WordUsage,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phonetics {
    pub ipa: String,
    pub syllables: String,
    pub tip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Etymology {
    pub root_analysis: String,
    pub story: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cognate {
    pub word: String,
    pub connection: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordUsage {
    pub synonyms: Vec<Synonym>,
    pub antonyms: Vec<String>,
    pub examples: Examples,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Synonym {
    pub word: String,
    pub context: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Examples {
    pub literature: LiteratureExample,
    pub modern: ModernExample,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiteratureExample {
    pub quote: String,
    pub author: String,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModernExample {
    pub quote: String,
    pub source: String,
}

/// Graded result of one quiz attempt. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizOutcome {
    pub is_correct: bool,
    pub feedback: String,
    pub etymology_note: String,
}

impl WordRecord {
    pub fn all_antonyms(&self) -> impl Iterator<Item = &str> {
        self.usage.antonyms.iter().map(|antonym| &antonym[..])
    }
}
