use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::template::DEFAULT_RAW_FIELDS;

/// soplab.toml schema - project-wide conventions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub document: DocumentConfig,
}

/// Data and template directory locations, relative to the project root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_templates_dir")]
    pub templates_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            templates_dir: default_templates_dir(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_templates_dir() -> PathBuf {
    PathBuf::from("templates")
}

/// Rendering policy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Field names whose values are pre-rendered HTML fragments and must
    /// not be escaped. This list is the escaping decision; keep it short.
    #[serde(default = "default_raw_fields")]
    pub raw_fields: Vec<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            raw_fields: default_raw_fields(),
        }
    }
}

fn default_raw_fields() -> Vec<String> {
    DEFAULT_RAW_FIELDS.iter().map(|s| s.to_string()).collect()
}

/// Defaults applied when a document is first built from the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentConfig {
    #[serde(default = "default_copy_type")]
    pub default_copy_type: String,
    #[serde(default = "default_revision")]
    pub default_revision: String,
    #[serde(default = "default_responsibility")]
    pub default_responsibility: String,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            default_copy_type: default_copy_type(),
            default_revision: default_revision(),
            default_responsibility: default_responsibility(),
        }
    }
}

fn default_copy_type() -> String {
    "CONTROLLED".to_string()
}

fn default_revision() -> String {
    "00".to_string()
}

fn default_responsibility() -> String {
    "Laboratory In-charge, faculty members, technical staff, and authorized users \
     are responsible for implementation and compliance of this SOP."
        .to_string()
}
