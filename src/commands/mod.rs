use crate::api::{Gateway, GatewayConfig, GatewayError, RunError};
use crate::cli::{Cli, Cmd, ModelArgs};
use crate::core::config::Settings;
use crate::core::utils::parse_duration;
use console::{style, Term};
use spinners::{Spinner, Spinners};
use std::io::{self, Write};

pub mod chat;
pub mod llm;
pub mod prompt;

/// Dispatches the parsed command to the appropriate handler.
pub async fn dispatch(cli: Cli) -> Result<(), RunError> {
    let mut out = io::stdout();
    let spinner = Term::stdout().is_term();

    match cli.command {
        Cmd::Prompt(args) => prompt::run(&prompt::PromptOptions::from_args(&args), &mut out),
        Cmd::Llm(args) => {
            let settings = Settings::load(cli.settings.as_deref())?;
            let opts = llm::LlmOptions::from_args(&args, &settings, spinner)?;
            let gateway = Gateway::connect(&opts.gateway)?;
            llm::run(&opts, &gateway, &mut out).await
        }
        Cmd::Chat(args) => {
            let settings = Settings::load(cli.settings.as_deref())?;
            let opts = chat::ChatOptions::from_args(&args, &settings, spinner)?;
            let gateway = Gateway::connect(&opts.gateway)?;
            chat::run(&opts, &gateway, &mut out).await
        }
    }
}

/// Merges command-line model flags over the settings file.
pub fn gateway_config(
    provider: Option<&str>,
    model: &ModelArgs,
    settings: &Settings,
) -> Result<GatewayConfig, RunError> {
    let timeout = match model.timeout.as_deref() {
        Some(raw) => parse_duration(raw)?,
        None => settings.timeout()?,
    };
    Ok(GatewayConfig {
        provider: provider
            .filter(|p| !p.is_empty())
            .unwrap_or(settings.provider.as_str())
            .to_string(),
        model: model
            .model
            .clone()
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| settings.model.clone()),
        temperature: model.temperature.unwrap_or(settings.temperature),
        timeout,
        stream: model.stream || settings.stream,
        base_url: settings.base_url.clone(),
        api_key_env: settings.api_key_env.clone(),
    })
}

/// Sends `prompt` and prints the response. Streamed output is written as
/// it arrives; otherwise a spinner covers the wait when `spinner` is set.
pub(crate) async fn ask<W: Write + Send>(
    gateway: &Gateway,
    prompt: &str,
    spinner: bool,
    out: &mut W,
) -> Result<String, RunError> {
    if gateway.is_streaming() {
        writeln!(out, "\n{}", style("LLM Response:").bold())?;
        let response = gateway.complete(prompt, &mut *out).await?;
        writeln!(out)?;
        return Ok(response);
    }

    log::debug!("waiting up to {:?} for a response", gateway.timeout());
    let mut sp = spinner.then(|| Spinner::new(Spinners::Dots9, "Waiting for LLM response...".into()));
    let result: Result<String, GatewayError> = gateway.complete(prompt, &mut *out).await;
    if let Some(sp) = sp.as_mut() {
        let message = if result.is_ok() {
            "✔ Response received."
        } else {
            "✖ No response."
        };
        sp.stop_with_message(message.into());
    }
    let response = result?;
    writeln!(out, "\n{}\n{}", style("LLM Response:").bold(), response)?;
    Ok(response)
}
