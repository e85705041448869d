use crate::domain::error::GenerateError;
use crate::domain::model::ServiceConfig;
use crate::domain::traits::TextGenerator;
use crate::infrastructure::network::http::{classify_status, error_message};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [Message<'a>; 1],
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize, Debug)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize, Debug)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize, Debug)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Client for OpenAI-compatible `/chat/completions` endpoints.
///
/// The prompt goes out as a single user message; no history, no system turn.
pub struct ChatCompletionsGenerator {
    client: Client,
    base_url: String,
}

impl ChatCompletionsGenerator {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl TextGenerator for ChatCompletionsGenerator {
    async fn generate(
        &self,
        prompt: &str,
        config: &ServiceConfig,
    ) -> Result<String, GenerateError> {
        let request = ChatRequest {
            model: &config.model,
            messages: [Message {
                role: "user",
                content: prompt,
            }],
        };

        let url = format!("{}/chat/completions", self.base_url);
        debug!(model = %config.model, "Calling chat completions at {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(config.api_key.expose())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(classify_status(status, error_message(&body)));
        }

        parse_reply(&body)
    }

    fn name(&self) -> &'static str {
        "chat_completions"
    }
}

/// Content of the first choice. No choices, or a null content, yields "".
pub fn parse_reply(body: &str) -> Result<String, GenerateError> {
    let response: ChatResponse =
        serde_json::from_str(body).map_err(|e| GenerateError::Malformed(e.to_string()))?;

    Ok(response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .unwrap_or_default())
}
