pub mod chat;
pub mod gemini;
pub mod http;

use crate::domain::error::ConfigError;
use crate::domain::traits::TextGenerator;
use crate::infrastructure::config::{Config, Provider};
use std::sync::Arc;

pub use chat::ChatCompletionsGenerator;
pub use gemini::GeminiGenerator;

/// Build the provider client selected in the config.
pub fn build_generator(config: &Config) -> Result<Arc<dyn TextGenerator>, ConfigError> {
    let client = http::create_client(config)?;
    let base_url = config.base_url().to_string();

    let generator: Arc<dyn TextGenerator> = match config.provider {
        Provider::Gemini => Arc::new(GeminiGenerator::new(client, base_url)),
        Provider::ChatCompletions => Arc::new(ChatCompletionsGenerator::new(client, base_url)),
    };
    Ok(generator)
}
