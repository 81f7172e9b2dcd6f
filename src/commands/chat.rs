use super::{ask, gateway_config};
use crate::api::{build_prompt, Gateway, GatewayConfig, RunError};
use crate::cli::ChatArgs;
use crate::core::config::Settings;
use crate::core::output::save;
use crate::core::paths::{self, PathOverrides, ResolvedPaths};
use std::io::Write;

/// Inputs of one `chat` invocation.
#[derive(Debug, Clone)]
pub struct ChatOptions {
    pub topic: String,
    pub paths: ResolvedPaths,
    pub gateway: GatewayConfig,
    pub spinner: bool,
}

impl ChatOptions {
    pub fn from_args(args: &ChatArgs, settings: &Settings, spinner: bool) -> Result<Self, RunError> {
        let topic = args.topic.to_lowercase();
        let paths = paths::resolve(
            &topic,
            &PathOverrides {
                config: args.config.clone(),
                template: args.template.clone(),
                output: args.prompt_output.clone(),
                answer: args.answer.clone(),
            },
        );
        Ok(Self {
            topic,
            paths,
            gateway: gateway_config(args.provider.as_deref(), &args.model, settings)?,
            spinner,
        })
    }
}

/// Build the topic prompt, send it to the model and store the answer.
pub async fn run<W: Write + Send>(
    opts: &ChatOptions,
    gateway: &Gateway,
    out: &mut W,
) -> Result<(), RunError> {
    writeln!(out, "Generating prompt...")?;
    let prompt = build_prompt(&opts.paths.template, &opts.paths.config, &opts.paths.output)?;
    writeln!(
        out,
        "Generated prompt saved to: {}",
        opts.paths.output.display()
    )?;

    writeln!(
        out,
        "Calling LLM... (provider: {}, model: {})",
        opts.gateway.provider, opts.gateway.model
    )?;
    let response = ask(gateway, &prompt, opts.spinner, out).await?;

    if opts.topic.is_empty() {
        return Ok(());
    }
    writeln!(out, "Saving response to: {}", opts.paths.answer.display())?;
    save(&opts.paths.answer, &response)?;
    Ok(())
}
