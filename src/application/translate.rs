use crate::domain::error::TranslationError;
use crate::domain::model::{DetectionRequest, TranslationOutcome, TranslationRequest};
use crate::state::AppState;

/// One user action: optionally detect the source language, then translate.
///
/// The request is checked before any remote call, detection included.
/// Detection is best effort and never fails the action; it is also never fed
/// back into the translation prompt, which only names a source language the
/// user chose explicitly.
pub async fn translate_text(
    state: &AppState,
    request: TranslationRequest,
    detect: bool,
) -> Result<TranslationOutcome, TranslationError> {
    request.validate()?;

    let detected_language = if detect {
        let detection = state
            .service
            .detect_language_or_unknown(&DetectionRequest::new(request.source_text.clone()))
            .await;
        Some(detection.language_name)
    } else {
        None
    };

    let result = state.service.translate(&request).await?;

    Ok(TranslationOutcome {
        source_text: request.source_text,
        source_language: request.source_language,
        target_language: request.target_language,
        translated_text: result.translated_text,
        detected_language,
    })
}
