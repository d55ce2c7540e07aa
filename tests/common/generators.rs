//! Scripted generation providers
//!
//! The live providers talk to external APIs, so the integration suite
//! drives the orchestrator with scripted implementations that play back
//! fixed replies and record everything they were asked.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use nlq_gateway::ChatTurn;
use nlq_gateway::core::generation::providers::{ProviderError, SqlGenerator};

/// Plays back a fixed script of replies in order, recording the prompt,
/// system prompt, and history of every call it receives.
///
/// Once the script runs out every further call fails, so a test that
/// triggers more generation attempts than it scripted fails loudly
/// instead of looping.
pub struct ScriptedGenerator {
    name: &'static str,
    replies: Mutex<VecDeque<Result<String, ProviderError>>>,
    prompts: Mutex<Vec<String>>,
    system_prompts: Mutex<Vec<String>>,
    histories: Mutex<Vec<Vec<ChatTurn>>>,
}

impl ScriptedGenerator {
    /// Provider that answers with the given raw reply texts in order.
    pub fn replies(name: &'static str, replies: &[&str]) -> Arc<Self> {
        Self::script(name, replies.iter().map(|r| Ok(r.to_string())).collect())
    }

    /// Provider with an explicit mixed script of replies and failures.
    pub fn script(name: &'static str, replies: Vec<Result<String, ProviderError>>) -> Arc<Self> {
        Arc::new(Self {
            name,
            replies: Mutex::new(replies.into()),
            prompts: Mutex::new(Vec::new()),
            system_prompts: Mutex::new(Vec::new()),
            histories: Mutex::new(Vec::new()),
        })
    }

    /// Every user prompt the provider has seen, in call order.
    pub async fn prompts(&self) -> Vec<String> {
        self.prompts.lock().await.clone()
    }

    /// Every system prompt the provider has seen, in call order.
    pub async fn system_prompts(&self) -> Vec<String> {
        self.system_prompts.lock().await.clone()
    }

    /// Every conversation history the provider has seen, in call order.
    pub async fn histories(&self) -> Vec<Vec<ChatTurn>> {
        self.histories.lock().await.clone()
    }
}

#[async_trait]
impl SqlGenerator for ScriptedGenerator {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn generate(
        &self,
        system_prompt: &str,
        message: &str,
        history: &[ChatTurn],
    ) -> Result<String, ProviderError> {
        self.prompts.lock().await.push(message.to_string());
        self.system_prompts
            .lock()
            .await
            .push(system_prompt.to_string());
        self.histories.lock().await.push(history.to_vec());
        self.replies
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Err(ProviderError::network(self.name, "script exhausted")))
    }
}
