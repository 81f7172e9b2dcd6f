//! Deadline-bounded access to a chat backend.

use super::error::GatewayError;
use super::llm_bridge::{BackendConfig, ChatBackend, LlmBackend, Provider};
use std::io::Write;
use std::time::Duration;

/// Everything needed to reach a model, built once per command.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub provider: String,
    pub model: String,
    pub temperature: f32,
    pub timeout: Duration,
    pub stream: bool,
    pub base_url: Option<String>,
    pub api_key_env: Option<String>,
}

/// Sends prompts to a backend and enforces the configured timeout.
pub struct Gateway {
    backend: Box<dyn ChatBackend>,
    timeout: Duration,
    stream: bool,
}

impl Gateway {
    /// Resolves the provider and builds the matching backend. Unknown
    /// providers and missing credentials fail here, before any request.
    pub fn connect(config: &GatewayConfig) -> Result<Self, GatewayError> {
        let provider: Provider = config.provider.parse()?;
        let backend = LlmBackend::build(&BackendConfig {
            provider,
            model: config.model.clone(),
            temperature: config.temperature,
            timeout: config.timeout,
            base_url: config.base_url.clone(),
            api_key_env: config.api_key_env.clone(),
        })?;
        Ok(Self::with_backend(Box::new(backend), config.timeout).streaming(config.stream))
    }

    pub fn with_backend(backend: Box<dyn ChatBackend>, timeout: Duration) -> Self {
        Self {
            backend,
            timeout,
            stream: false,
        }
    }

    /// Enables incremental output to the sink passed to [`Gateway::complete`].
    pub fn streaming(mut self, stream: bool) -> Self {
        self.stream = stream;
        self
    }

    pub fn is_streaming(&self) -> bool {
        self.stream
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the full completion for `prompt`. Chunks go to `sink` only
    /// when streaming is enabled.
    pub async fn complete(
        &self,
        prompt: &str,
        sink: &mut (dyn Write + Send),
    ) -> Result<String, GatewayError> {
        log::debug!("sending prompt ({} chars)", prompt.len());
        let sink = if self.stream { Some(sink) } else { None };
        match tokio::time::timeout(self.timeout, self.backend.chat(prompt, sink)).await {
            Ok(Ok(text)) => {
                log::debug!("received response ({} chars)", text.len());
                Ok(text)
            }
            Ok(Err(err)) => Err(err),
            Err(_) => Err(GatewayError::Timeout(self.timeout)),
        }
    }
}
