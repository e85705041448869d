use crate::application::prompt::{detection_prompt, translation_prompt};
use crate::domain::error::{ConfigError, ErrorKind, TranslationError};
use crate::domain::model::{
    ApiKey, DetectionRequest, DetectionResult, ServiceConfig, TranslationRequest,
    TranslationResult,
};
use crate::domain::traits::TextGenerator;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceState {
    Unconfigured,
    Ready,
}

/// Turns translation and detection requests into single remote calls.
///
/// Starts `Unconfigured`; `configure` is the only way to `Ready` and there is
/// no way back. Once ready the service holds only read-only settings, so a
/// shared `Arc<TranslationService>` can serve independent callers at once.
/// Nothing is cached and nothing is retried.
pub struct TranslationService {
    generator: Arc<dyn TextGenerator>,
    config: Option<ServiceConfig>,
    timeout: Duration,
}

impl TranslationService {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            config: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Upper bound for one remote call before it is reported as `Unavailable`.
    /// A zero duration is ignored.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        if timeout.is_zero() {
            warn!("Ignoring zero timeout, keeping {:?}", self.timeout);
        } else {
            self.timeout = timeout;
        }
        self
    }

    pub fn state(&self) -> ServiceState {
        if self.config.is_some() {
            ServiceState::Ready
        } else {
            ServiceState::Unconfigured
        }
    }

    pub fn model(&self) -> Option<&str> {
        self.config.as_ref().map(|c| c.model.as_str())
    }

    pub fn provider(&self) -> &'static str {
        self.generator.name()
    }

    /// Validate and store the API key and model. Calling again replaces them.
    pub fn configure(
        &mut self,
        api_key: Option<&str>,
        model: &str,
    ) -> Result<ServiceState, ConfigError> {
        let api_key = api_key.map(str::trim).unwrap_or("");
        if api_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        let model = model.trim();
        if model.is_empty() {
            return Err(ConfigError::MissingModel);
        }

        if self.config.is_some() {
            debug!("Reconfiguring translation service");
        }
        self.config = Some(ServiceConfig {
            api_key: ApiKey::new(api_key),
            model: model.to_string(),
        });
        info!(
            provider = self.generator.name(),
            model, "Translation service ready"
        );

        Ok(ServiceState::Ready)
    }

    pub async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, TranslationError> {
        let config = self.ready_config()?;
        request.validate()?;

        let prompt = translation_prompt(request);
        debug!(
            target_language = %request.target_language,
            source_language = %request.source_language,
            chars = request.source_text.chars().count(),
            "Translating"
        );

        let translated_text = self.generate(&prompt, config).await?;
        Ok(TranslationResult { translated_text })
    }

    pub async fn detect_language(
        &self,
        request: &DetectionRequest,
    ) -> Result<DetectionResult, TranslationError> {
        let config = self.ready_config()?;

        if request.sample_text.trim().is_empty() {
            return Err(TranslationError::invalid_input("sample text is empty"));
        }

        let prompt = detection_prompt(request);
        let language_name = self.generate(&prompt, config).await?;
        Ok(DetectionResult { language_name })
    }

    /// Best-effort detection: any failure becomes "Unknown".
    pub async fn detect_language_or_unknown(&self, request: &DetectionRequest) -> DetectionResult {
        match self.detect_language(request).await {
            Ok(result) => result,
            Err(e) => {
                warn!("Language detection failed: {}", e);
                DetectionResult::unknown()
            }
        }
    }

    fn ready_config(&self) -> Result<&ServiceConfig, TranslationError> {
        self.config
            .as_ref()
            .ok_or_else(TranslationError::not_configured)
    }

    async fn generate(
        &self,
        prompt: &str,
        config: &ServiceConfig,
    ) -> Result<String, TranslationError> {
        let call = self.generator.generate(prompt, config);
        let text = match tokio::time::timeout(self.timeout, call).await {
            Ok(Ok(text)) => text,
            Ok(Err(e)) => {
                warn!(provider = self.generator.name(), "Remote call failed: {}", e);
                return Err(e.into());
            }
            Err(_) => {
                warn!(
                    provider = self.generator.name(),
                    "Remote call timed out after {:?}", self.timeout
                );
                return Err(TranslationError::new(
                    ErrorKind::Unavailable,
                    format!("no response within {:?}", self.timeout),
                ));
            }
        };

        let text = text.trim();
        if text.is_empty() {
            return Err(TranslationError::new(
                ErrorKind::EmptyResponse,
                "provider returned no text",
            ));
        }
        Ok(text.to_string())
    }
}
