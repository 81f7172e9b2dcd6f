//! Fluent builder for the load → render → write sequence.

use super::error::RunError;
use crate::core::document::{read_config, read_template};
use crate::core::output::save;
use crate::core::render::render;
use std::path::{Path, PathBuf};

/// Renders a template against a topic config and, optionally, persists it.
pub struct PromptBuilder<'a> {
    template: &'a Path,
    config: &'a Path,
    output: Option<PathBuf>,
}

impl<'a> PromptBuilder<'a> {
    pub fn new(template: &'a Path, config: &'a Path) -> Self {
        Self {
            template,
            config,
            output: None,
        }
    }

    /// Writes the rendered prompt to `path` after rendering.
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    /// Loads both documents, renders, then writes. Each stage finishes
    /// before the next starts; the first failure aborts the rest.
    pub fn build(self) -> Result<String, RunError> {
        let template = read_template(self.template)?;
        let config = read_config(self.config)?;
        log::debug!(
            "rendering {} with {}",
            self.template.display(),
            self.config.display()
        );
        let prompt = render(&template.template, &config);
        if let Some(path) = &self.output {
            save(path, &prompt)?;
            log::info!("prompt written to {}", path.display());
        }
        Ok(prompt)
    }
}

/// Shorthand for `PromptBuilder::new(template, config).output(output).build()`.
pub fn build_prompt(template: &Path, config: &Path, output: &Path) -> Result<String, RunError> {
    PromptBuilder::new(template, config).output(output).build()
}
