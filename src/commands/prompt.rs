use crate::api::{build_prompt, RunError};
use crate::cli::PromptArgs;
use crate::core::paths::{self, PathOverrides, ResolvedPaths};
use console::style;
use std::io::Write;

/// Inputs of one `prompt` invocation.
#[derive(Debug, Clone)]
pub struct PromptOptions {
    pub topic: String,
    pub paths: ResolvedPaths,
}

impl PromptOptions {
    pub fn from_args(args: &PromptArgs) -> Self {
        let topic = args.topic.to_lowercase();
        let paths = paths::resolve(
            &topic,
            &PathOverrides {
                config: args.config.clone(),
                template: args.template.clone(),
                output: args.output.clone(),
                answer: None,
            },
        );
        Self { topic, paths }
    }
}

/// Render the topic prompt and write it to the output path.
pub fn run<W: Write>(opts: &PromptOptions, out: &mut W) -> Result<(), RunError> {
    log::info!("generating prompt for topic '{}'", opts.topic);
    build_prompt(&opts.paths.template, &opts.paths.config, &opts.paths.output)?;
    writeln!(
        out,
        "{} Prompt generated and saved to: {}",
        style("✔").green(),
        opts.paths.output.display()
    )?;
    Ok(())
}
