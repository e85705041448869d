// Prompt templates sent to the text-generation provider
use crate::domain::model::{DetectionRequest, TranslationRequest};

const TRANSLATE_INSTRUCTION: &str =
    "Provide only the translation without any additional text or explanations.";

/// Build the translation prompt.
///
/// The `from {language}` clause only appears when the request names an
/// explicit source language; with "auto" the model infers it.
pub fn translation_prompt(request: &TranslationRequest) -> String {
    let direction = if request.is_auto_source() {
        format!("to {}", request.target_language.trim())
    } else {
        format!(
            "from {} to {}",
            request.source_language.trim(),
            request.target_language.trim()
        )
    };

    format!(
        "Translate the following text {}. {}\n\nText to translate: {}",
        direction, TRANSLATE_INSTRUCTION, request.source_text
    )
}

/// Build the language detection prompt from the truncated sample.
pub fn detection_prompt(request: &DetectionRequest) -> String {
    format!(
        "Detect the language of this text and respond with only the language name: {}",
        request.truncated_sample()
    )
}
