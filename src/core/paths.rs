//! Default file locations for a topic, with per-artifact overrides.

use std::path::PathBuf;

/// Root of the bundled templates, configs and generated output.
pub const BASE_PATH: &str = "resources/templates";
/// Template used when no `--template` is given.
pub const TEMPLATE_FILE_PATH: &str = "resources/templates/topic.yaml";
/// Raw prompt read by `llm` when no `--prompt` is given.
pub const DEFAULT_PROMPT_PATH: &str = "resources/default/prompt.txt";

/// Locations of every artifact involved in one command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub config: PathBuf,
    pub template: PathBuf,
    pub output: PathBuf,
    pub answer: PathBuf,
}

/// User-supplied replacements for the default locations.
/// Empty strings count as "not supplied".
#[derive(Debug, Clone, Default)]
pub struct PathOverrides {
    pub config: Option<String>,
    pub template: Option<String>,
    pub output: Option<String>,
    pub answer: Option<String>,
}

/// Computes all four paths for `topic`. Never touches the filesystem.
pub fn resolve(topic: &str, overrides: &PathOverrides) -> ResolvedPaths {
    ResolvedPaths {
        config: config_path(topic, overrides.config.as_deref()),
        template: template_path(overrides.template.as_deref()),
        output: output_path(topic, overrides.output.as_deref()),
        answer: answer_path(topic, overrides.answer.as_deref()),
    }
}

pub fn config_path(topic: &str, custom: Option<&str>) -> PathBuf {
    custom_or(custom, || format!("{}/configs/{}.yaml", BASE_PATH, topic))
}

pub fn output_path(topic: &str, custom: Option<&str>) -> PathBuf {
    custom_or(custom, || format!("{}/output/{}/prompt.txt", BASE_PATH, topic))
}

pub fn answer_path(topic: &str, custom: Option<&str>) -> PathBuf {
    custom_or(custom, || format!("{}/output/{}/answer.md", BASE_PATH, topic))
}

/// The template is shared by all topics, so only the override matters.
pub fn template_path(custom: Option<&str>) -> PathBuf {
    custom_or(custom, || TEMPLATE_FILE_PATH.to_string())
}

/// Prompt file consumed by the `llm` command.
pub fn prompt_path(custom: Option<&str>) -> PathBuf {
    custom_or(custom, || DEFAULT_PROMPT_PATH.to_string())
}

fn custom_or(custom: Option<&str>, default: impl FnOnce() -> String) -> PathBuf {
    match custom {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => PathBuf::from(default()),
    }
}
