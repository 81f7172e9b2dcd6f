//! Defines the command-line interface structure using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "topic-explorer",
    version,
    about = "Prompt generation + LLM interaction CLI"
)]
pub struct Cli {
    /// Settings file with provider defaults (default: ~/.topic-explorer/config.toml)
    #[arg(long, global = true, env = "TOPIC_EXPLORER_SETTINGS")]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Cmd,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Generate a structured prompt from YAML templates
    Prompt(PromptArgs),
    /// Send a prompt file to an LLM and print the response
    Llm(LlmArgs),
    /// Generate a prompt and get an LLM response
    Chat(ChatArgs),
}

#[derive(Args, Debug)]
pub struct PromptArgs {
    /// Topic name
    #[arg(long)]
    pub topic: String,
    /// Path to template file (default: resources/templates/topic.yaml)
    #[arg(short = 't', long)]
    pub template: Option<String>,
    /// Path to config file (default: based on topic)
    #[arg(short = 'c', long)]
    pub config: Option<String>,
    /// Path to save generated prompt (default: based on topic)
    #[arg(short = 'o', long)]
    pub output: Option<String>,
}

/// Model selection shared by `llm` and `chat`. Unset values come from
/// the settings file.
#[derive(Args, Debug, Default)]
pub struct ModelArgs {
    /// Model name, e.g. phi4 or gpt-4o
    #[arg(short = 'm', long)]
    pub model: Option<String>,
    /// Sampling temperature
    #[arg(long)]
    pub temperature: Option<f32>,
    /// Timeout for the LLM request, e.g. 90s, 2m, 1m30s
    #[arg(short = 'd', long)]
    pub timeout: Option<String>,
    /// Print the response as it is generated
    #[arg(long)]
    pub stream: bool,
}

#[derive(Args, Debug)]
pub struct LlmArgs {
    /// LLM provider [ollama, openai]
    #[arg(short = 'l', long)]
    pub provider: Option<String>,
    /// Path to prompt file (default: resources/default/prompt.txt)
    #[arg(short = 'p', long)]
    pub prompt: Option<String>,
    /// Optional path to save the LLM response
    #[arg(short = 's', long)]
    pub save: Option<String>,
    #[command(flatten)]
    pub model: ModelArgs,
}

#[derive(Args, Debug)]
pub struct ChatArgs {
    /// Topic name for prompt generation
    #[arg(short = 't', long)]
    pub topic: String,
    /// LLM provider [ollama, openai]
    #[arg(short = 'p', long)]
    pub provider: Option<String>,
    /// Path to save generated prompt (default: based on topic)
    #[arg(short = 'o', long = "promptOutput", alias = "prompt-output")]
    pub prompt_output: Option<String>,
    /// Path to template file (default: resources/templates/topic.yaml)
    #[arg(long)]
    pub template: Option<String>,
    /// Path to config file (default: based on topic)
    #[arg(long)]
    pub config: Option<String>,
    /// Path to save the LLM response (default: based on topic)
    #[arg(long)]
    pub answer: Option<String>,
    #[command(flatten)]
    pub model: ModelArgs,
}
