use std::sync::Arc;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use lawsathi_llm::{ChatClient, ChatOptions, ChatRequest, Message};

use crate::config::LlmConfig;
use crate::prompts::{Language, APOLOGY_MESSAGE, LEGAL_SYSTEM_MESSAGE};

/// Turns a prompt into a natural-language answer
#[async_trait]
pub trait Responder: Send + Sync {
    async fn respond(&self, prompt: &str, session_id: &str) -> Result<String>;
}

/// Responder backed by a chat-completion model with the legal system prompt
pub struct LlmResponder {
    client: Arc<dyn ChatClient>,
    model: String,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
}

impl LlmResponder {
    pub fn new(client: Arc<dyn ChatClient>, config: &LlmConfig) -> Self {
        Self {
            client,
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }
}

#[async_trait]
impl Responder for LlmResponder {
    async fn respond(&self, prompt: &str, session_id: &str) -> Result<String> {
        let mut options = ChatOptions::new().user(session_id);
        if let Some(temperature) = self.temperature {
            options = options.temperature(temperature);
        }
        if let Some(max_tokens) = self.max_tokens {
            options = options.max_tokens(max_tokens);
        }

        let request = ChatRequest::new(
            self.model.clone(),
            vec![
                Message::system(LEGAL_SYSTEM_MESSAGE),
                Message::human(prompt),
            ],
        )
        .with_options(options);

        let response = self.client.chat(request).await?;

        if let Some(usage) = &response.usage {
            tracing::debug!(
                session_id = %session_id,
                input_tokens = usage.input_tokens,
                output_tokens = usage.output_tokens,
                "Model answered"
            );
        }

        response
            .content
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| anyhow!("model returned no content"))
    }
}

/// Ask in the requested language; failures become the apology text
pub async fn ask_legal_assistant(
    responder: &dyn Responder,
    message: &str,
    session_id: &str,
    language: Language,
) -> String {
    let prompt = language.instruct(message);

    match responder.respond(&prompt, session_id).await {
        Ok(answer) => answer,
        Err(e) => {
            tracing::error!(session_id = %session_id, error = %e, "AI response error");
            APOLOGY_MESSAGE.to_string()
        }
    }
}
