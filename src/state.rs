use crate::application::TranslationService;
use crate::domain::error::ConfigError;
use crate::infrastructure::config::Config;
use crate::infrastructure::network::build_generator;
use std::sync::Arc;

/// Everything a command handler needs, built once in `main` and passed down.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<TranslationService>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Build the provider client and a ready translation service.
    ///
    /// Fails when no API key is available: the service cannot be used at all.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        let generator = build_generator(&config)?;
        let mut service = TranslationService::new(generator)
            .with_timeout(config.timeout());
        service.configure(config.api_key.as_deref(), config.model())?;

        Ok(Self::with_service(service, config))
    }

    /// Wrap an already configured service (used with custom generators).
    pub fn with_service(service: TranslationService, config: Config) -> Self {
        Self {
            service: Arc::new(service),
            config: Arc::new(config),
        }
    }
}
