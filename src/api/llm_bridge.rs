//! Bridge types for interoperability with the `llm` crate.

use super::error::GatewayError;
use async_trait::async_trait;
use futures::StreamExt;
use llm::builder::{LLMBackend, LLMBuilder};
use llm::chat::ChatMessage;
use llm::LLMProvider;
use std::env;
use std::fmt;
use std::io::Write;
use std::str::FromStr;
use std::time::Duration;

/// The closed set of supported backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    /// Local inference through an Ollama server.
    Ollama,
    /// Hosted OpenAI API.
    OpenAI,
}

impl Provider {
    pub fn name(self) -> &'static str {
        match self {
            Provider::Ollama => "ollama",
            Provider::OpenAI => "openai",
        }
    }

    /// Environment variable holding the API key, if the backend needs one.
    pub fn api_key_env(self) -> Option<&'static str> {
        match self {
            Provider::Ollama => None,
            Provider::OpenAI => Some("OPENAI_API_KEY"),
        }
    }

    fn backend(self) -> LLMBackend {
        match self {
            Provider::Ollama => LLMBackend::Ollama,
            Provider::OpenAI => LLMBackend::OpenAI,
        }
    }
}

impl FromStr for Provider {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ollama" => Ok(Provider::Ollama),
            "openai" => Ok(Provider::OpenAI),
            _ => Err(GatewayError::UnsupportedProvider(s.to_string())),
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Anything that can turn a prompt into a completion.
///
/// When `sink` is given, partial output is written to it as it arrives;
/// the returned string is always the complete response.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn chat(
        &self,
        prompt: &str,
        sink: Option<&mut (dyn Write + Send)>,
    ) -> Result<String, GatewayError>;
}

/// Connection parameters for an `llm` crate backend.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub provider: Provider,
    pub model: String,
    pub temperature: f32,
    pub timeout: Duration,
    pub base_url: Option<String>,
    /// Overrides the provider's default API key variable.
    pub api_key_env: Option<String>,
}

/// A [`ChatBackend`] backed by a provider built with `LLMBuilder`.
pub struct LlmBackend {
    llm: Box<dyn LLMProvider>,
}

impl LlmBackend {
    pub fn build(config: &BackendConfig) -> Result<Self, GatewayError> {
        let provider = config.provider;
        let key_var = config
            .api_key_env
            .as_deref()
            .or_else(|| provider.api_key_env());

        let mut builder = LLMBuilder::new()
            .backend(provider.backend())
            .model(&config.model)
            .temperature(config.temperature)
            .timeout_seconds(config.timeout.as_secs().max(1));

        if let Some(var) = key_var {
            let api_key = env::var(var).map_err(|_| GatewayError::MissingCredentials {
                provider: provider.to_string(),
                var: var.to_string(),
            })?;
            builder = builder.api_key(api_key);
        }
        if let Some(base_url) = &config.base_url {
            builder = builder.base_url(base_url);
        }

        let llm = builder.build().map_err(|e| GatewayError::Init {
            provider: provider.to_string(),
            message: e.to_string(),
        })?;
        log::info!("using provider {} with model {}", provider, config.model);
        Ok(Self { llm })
    }
}

#[async_trait]
impl ChatBackend for LlmBackend {
    async fn chat(
        &self,
        prompt: &str,
        sink: Option<&mut (dyn Write + Send)>,
    ) -> Result<String, GatewayError> {
        let messages = vec![ChatMessage::user().content(prompt).build()];

        let Some(sink) = sink else {
            let response = self.llm.chat(&messages).await?;
            return Ok(response.text().unwrap_or_default());
        };

        let mut stream = self.llm.chat_stream(&messages).await?;
        let mut text = String::new();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            sink.write_all(chunk.as_bytes())?;
            sink.flush()?;
            text.push_str(&chunk);
        }
        Ok(text)
    }
}
