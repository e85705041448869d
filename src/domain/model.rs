use crate::domain::error::TranslationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Source language value meaning "let the model infer it".
pub const AUTO_LANGUAGE: &str = "auto";

/// Label used when language detection cannot produce an answer.
pub const UNKNOWN_LANGUAGE: &str = "Unknown";

/// Detection prompts only ever see this many characters of the sample.
pub const DETECTION_SAMPLE_CHARS: usize = 200;

/// Target languages offered by the selector. Free text is accepted as well.
pub const SUPPORTED_LANGUAGES: &[&str] =
    &["French", "Spanish", "German", "Italian", "Japanese", "Urdu"];

// 翻译请求
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TranslationRequest {
    pub source_text: String,
    pub target_language: String,
    #[serde(default = "default_source_language")]
    pub source_language: String,
}

impl TranslationRequest {
    pub fn new(source_text: impl Into<String>, target_language: impl Into<String>) -> Self {
        Self {
            source_text: source_text.into(),
            target_language: target_language.into(),
            source_language: default_source_language(),
        }
    }

    pub fn from_language(mut self, source_language: impl Into<String>) -> Self {
        self.source_language = source_language.into();
        self
    }

    /// Reject blank text or a blank target language.
    pub fn validate(&self) -> Result<(), TranslationError> {
        if self.source_text.trim().is_empty() {
            return Err(TranslationError::invalid_input("source text is empty"));
        }
        if self.target_language.trim().is_empty() {
            return Err(TranslationError::invalid_input("target language is empty"));
        }
        Ok(())
    }

    /// True when the source language is left for the model to infer.
    /// An empty source language counts as "auto".
    pub fn is_auto_source(&self) -> bool {
        let source = self.source_language.trim();
        source.is_empty() || source.eq_ignore_ascii_case(AUTO_LANGUAGE)
    }
}

fn default_source_language() -> String {
    AUTO_LANGUAGE.to_string()
}

// 翻译结果
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TranslationResult {
    pub translated_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetectionRequest {
    pub sample_text: String,
}

impl DetectionRequest {
    pub fn new(sample_text: impl Into<String>) -> Self {
        Self {
            sample_text: sample_text.into(),
        }
    }

    /// The first `DETECTION_SAMPLE_CHARS` characters of the sample.
    pub fn truncated_sample(&self) -> &str {
        match self.sample_text.char_indices().nth(DETECTION_SAMPLE_CHARS) {
            Some((idx, _)) => &self.sample_text[..idx],
            None => &self.sample_text,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetectionResult {
    pub language_name: String,
}

impl DetectionResult {
    pub fn unknown() -> Self {
        Self {
            language_name: UNKNOWN_LANGUAGE.to_string(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.language_name == UNKNOWN_LANGUAGE
    }
}

/// Secret API key. Never printed in full.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

/// Settings every remote call is made with. Immutable once the service is ready.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub api_key: ApiKey,
    pub model: String,
}

// 一次翻译操作的完整输出 (用于展示和 JSON 输出)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TranslationOutcome {
    pub source_text: String,
    pub source_language: String,
    pub target_language: String,
    pub translated_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_language: Option<String>,
}
