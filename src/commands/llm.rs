use super::{ask, gateway_config};
use crate::api::{Gateway, GatewayConfig, RunError};
use crate::cli::LlmArgs;
use crate::core::config::Settings;
use crate::core::document::load_text;
use crate::core::output::save;
use crate::core::paths;
use std::io::Write;
use std::path::PathBuf;

/// Inputs of one `llm` invocation.
#[derive(Debug, Clone)]
pub struct LlmOptions {
    pub prompt: PathBuf,
    pub save: Option<PathBuf>,
    pub gateway: GatewayConfig,
    pub spinner: bool,
}

impl LlmOptions {
    pub fn from_args(args: &LlmArgs, settings: &Settings, spinner: bool) -> Result<Self, RunError> {
        Ok(Self {
            prompt: paths::prompt_path(args.prompt.as_deref()),
            save: args
                .save
                .as_deref()
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
            gateway: gateway_config(args.provider.as_deref(), &args.model, settings)?,
            spinner,
        })
    }
}

/// Send a prompt file to the model, print the reply and optionally save it.
pub async fn run<W: Write + Send>(
    opts: &LlmOptions,
    gateway: &Gateway,
    out: &mut W,
) -> Result<(), RunError> {
    writeln!(out, "Reading prompt...")?;
    let prompt = load_text(&opts.prompt)?;

    writeln!(
        out,
        "Using Provider: {} | Model: {}",
        opts.gateway.provider, opts.gateway.model
    )?;
    writeln!(out, "Calling LLM...")?;
    let response = ask(gateway, &prompt, opts.spinner, out).await?;

    if let Some(path) = &opts.save {
        writeln!(out, "Saving response to: {}", path.display())?;
        save(path, &response)?;
    }
    Ok(())
}
