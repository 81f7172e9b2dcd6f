//! YAML documents consumed by the prompt builder.

use crate::api::DocumentError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::Path;

/// Raw template text with `{name}` placeholders.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TemplateDocument {
    pub template: String,
}

/// Values substituted into a template. Absent or `null` keys decode to
/// empty values.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ConfigDocument {
    #[serde(deserialize_with = "nullable")]
    pub audience: String,
    #[serde(deserialize_with = "nullable")]
    pub learning_stage: String,
    #[serde(deserialize_with = "nullable")]
    pub topic: String,
    #[serde(deserialize_with = "nullable")]
    pub context: String,
    #[serde(deserialize_with = "nullable")]
    pub analogies: String,
    #[serde(deserialize_with = "nullable")]
    pub concepts: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub explanation_requirements: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub formatting: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub constraints: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub output_format: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub purpose: String,
    #[serde(deserialize_with = "nullable")]
    pub tone: String,
}

fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Reads `path` and decodes it as YAML. Every call re-reads the file.
///
/// An empty (or whitespace-only) file has no document and yields `None`;
/// each caller decides what that means for its type.
pub fn load_yaml<T>(path: &Path) -> Result<Option<T>, DocumentError>
where
    T: DeserializeOwned,
{
    let content = load_text(path)?;
    if content.trim().is_empty() {
        return Ok(None);
    }
    serde_yaml::from_str(&content)
        .map(Some)
        .map_err(|source| DocumentError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

/// Reads a plain text file such as a previously rendered prompt.
pub fn load_text(path: &Path) -> Result<String, DocumentError> {
    log::debug!("reading {}", path.display());
    fs::read_to_string(path).map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// An empty file is an empty template. A non-empty document must carry
/// the `template` key.
pub fn read_template(path: &Path) -> Result<TemplateDocument, DocumentError> {
    Ok(load_yaml(path)?.unwrap_or_else(|| {
        log::debug!("{} is empty, rendering an empty template", path.display());
        TemplateDocument {
            template: String::new(),
        }
    }))
}

/// An empty file is a config with every field empty.
pub fn read_config(path: &Path) -> Result<ConfigDocument, DocumentError> {
    Ok(load_yaml(path)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn reads_template_block() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "topic.yaml",
            "template: |\n  Explain {topic} to {audience}.\n  Concepts:{concepts}\n",
        );
        let doc = read_template(&path).unwrap();
        assert_eq!(
            doc.template,
            "Explain {topic} to {audience}.\nConcepts:{concepts}\n"
        );
    }

    #[test]
    fn reads_full_config() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "git.yaml",
            r#"
audience: "Backend engineers"
learning_stage: "Intermediate"
topic: "Git"
context: "Team workflows"
analogies: "Time travel"
concepts:
  - rebase
  - cherry-pick
explanation_requirements:
  - Use examples
formatting:
  - Markdown headings
constraints:
  - Under 500 words
output_format:
  - Summary
  - Details
purpose: "Onboarding"
tone: "Friendly"
"#,
        );
        let cfg = read_config(&path).unwrap();
        assert_eq!(cfg.audience, "Backend engineers");
        assert_eq!(cfg.learning_stage, "Intermediate");
        assert_eq!(cfg.topic, "Git");
        assert_eq!(cfg.context, "Team workflows");
        assert_eq!(cfg.analogies, "Time travel");
        assert_eq!(cfg.concepts, vec!["rebase", "cherry-pick"]);
        assert_eq!(cfg.explanation_requirements, vec!["Use examples"]);
        assert_eq!(cfg.formatting, vec!["Markdown headings"]);
        assert_eq!(cfg.constraints, vec!["Under 500 words"]);
        assert_eq!(cfg.output_format, vec!["Summary", "Details"]);
        assert_eq!(cfg.purpose, "Onboarding");
        assert_eq!(cfg.tone, "Friendly");
    }

    #[test]
    fn absent_and_null_fields_are_empty() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "partial.yaml", "audience: Devs\ntone:\nconcepts: ~\n");
        let cfg = read_config(&path).unwrap();
        assert_eq!(cfg.audience, "Devs");
        assert_eq!(cfg.tone, "");
        assert!(cfg.concepts.is_empty());
        assert!(cfg.constraints.is_empty());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "extra.yaml", "config: mock\ntopic: Rust\n");
        let cfg = read_config(&path).unwrap();
        assert_eq!(cfg.topic, "Rust");
    }

    #[test]
    fn empty_file_decodes_to_default() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "empty.yaml", "\n");
        assert_eq!(read_config(&path).unwrap(), ConfigDocument::default());
    }

    #[test]
    fn empty_template_file_is_empty_template() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "topic.yaml", "  \n");
        assert_eq!(read_template(&path).unwrap().template, "");
        assert!(load_yaml::<TemplateDocument>(&path).unwrap().is_none());
    }

    #[test]
    fn template_without_key_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "topic.yaml", "prompt: Explain {topic}\n");
        let err = read_template(&path).unwrap_err();
        assert!(matches!(err, DocumentError::Parse { .. }));
        assert!(err.to_string().contains("topic.yaml"));
    }

    #[test]
    fn missing_file_is_read_error_with_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.yaml");
        let err = read_template(&path).unwrap_err();
        assert!(matches!(err, DocumentError::Read { .. }));
        assert!(err.to_string().contains("nope.yaml"));
    }

    #[test]
    fn malformed_yaml_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "bad.yaml", "concepts: [one, two\n");
        let err = read_config(&path).unwrap_err();
        assert!(matches!(err, DocumentError::Parse { .. }));
        assert!(err.to_string().contains("bad.yaml"));
    }

    #[test]
    fn wrong_shape_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "shape.yaml", "concepts:\n  nested: map\n");
        assert!(matches!(
            read_config(&path),
            Err(DocumentError::Parse { .. })
        ));
    }

    #[test]
    fn yaml_round_trip_keeps_values() {
        let cfg = ConfigDocument {
            audience: "Students: year 1".into(),
            concepts: vec!["a: b".into(), "- dash".into()],
            tone: "  padded  ".into(),
            ..Default::default()
        };
        let yaml = serde_yaml::to_string(&cfg).unwrap();
        let back: ConfigDocument = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, cfg);
    }
}
