pub mod api;
pub mod cli;
pub mod commands;
pub mod core;

pub use api::{build_prompt, Gateway, GatewayConfig, PromptBuilder, Provider, RunError};
pub use crate::core::render::render;
