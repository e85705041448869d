use crate::domain::error::GenerateError;
use crate::domain::model::ServiceConfig;
use async_trait::async_trait;

/// A hosted model that turns one prompt into generated text.
///
/// Providers are interchangeable behind this trait; the service holds an
/// `Arc<dyn TextGenerator>` and never knows which endpoint it talks to.
/// Each call is independent: no conversation history is kept.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for `prompt` using the key and model in `config`.
    async fn generate(&self, prompt: &str, config: &ServiceConfig)
        -> Result<String, GenerateError>;

    /// Short provider name for logs and status output.
    fn name(&self) -> &'static str;
}
