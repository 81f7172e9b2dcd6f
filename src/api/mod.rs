//! Library API for building prompts and talking to an LLM.

mod error;
mod gateway;
mod llm_bridge;
mod pipeline;

pub use error::{DocumentError, GatewayError, RunError, SettingsError, WriteError};
pub use gateway::{Gateway, GatewayConfig};
pub use llm_bridge::{BackendConfig, ChatBackend, LlmBackend, Provider};
pub use pipeline::{build_prompt, PromptBuilder};

#[cfg(test)]
pub(crate) use gateway::testing;
