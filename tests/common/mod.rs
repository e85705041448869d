//! 测试用的文本生成替身

#![allow(dead_code)]

use async_trait::async_trait;
use lingo::domain::error::GenerateError;
use lingo::domain::model::ServiceConfig;
use lingo::domain::traits::TextGenerator;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

type Reply = Box<dyn Fn() -> Result<String, GenerateError> + Send + Sync>;

/// Records every call and answers with a canned reply.
pub struct StubGenerator {
    reply: Reply,
    delay: Option<Duration>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
    models: Mutex<Vec<String>>,
}

impl StubGenerator {
    pub fn replying(text: &str) -> Arc<Self> {
        let text = text.to_string();
        Self::with_reply(Box::new(move || Ok(text.clone())), None)
    }

    pub fn failing(make: fn() -> GenerateError) -> Arc<Self> {
        Self::with_reply(Box::new(move || Err(make())), None)
    }

    pub fn slow(delay: Duration) -> Arc<Self> {
        Self::with_reply(Box::new(|| Ok("too late".to_string())), Some(delay))
    }

    fn with_reply(reply: Reply, delay: Option<Duration>) -> Arc<Self> {
        Arc::new(Self {
            reply,
            delay,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
            models: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }

    pub fn last_model(&self) -> Option<String> {
        self.models.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(
        &self,
        prompt: &str,
        config: &ServiceConfig,
    ) -> Result<String, GenerateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.models.lock().unwrap().push(config.model.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        (self.reply)()
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}
