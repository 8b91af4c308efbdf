use serde::{Deserialize, Serialize};

/// Placeholder returned when the completion call fails or no translation
/// could be located in the model reply.
pub const TRANSLATION_ERROR_PLACEHOLDER: &str = "Error occurred during translation";
pub const TRANSLATION_NOT_FOUND: &str = "Translation not found";

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub word: String,
}

/// Combined result for `/api/analyze`. Request-scoped; built fresh for each
/// call and discarded once the response is sent.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub translation: String,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

impl AnalysisResult {
    /// The shape returned when the dispatcher fails: the endpoint still
    /// answers 200, so the UI never sees a hard error.
    #[must_use]
    pub fn error_placeholder() -> Self {
        Self {
            translation: TRANSLATION_ERROR_PLACEHOLDER.to_string(),
            synonyms: Vec::new(),
            antonyms: Vec::new(),
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct TranslationResponse {
    pub translation: String,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct DictionaryResponse {
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

impl DictionaryResponse {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            synonyms: Vec::new(),
            antonyms: Vec::new(),
        }
    }
}
