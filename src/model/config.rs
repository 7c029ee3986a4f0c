use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::task::Bucket;

/// Title given to freshly created tasks
pub const DEFAULT_TITLE: &str = "New Task";

/// Configuration from config.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tasks: TasksConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TasksConfig {
    #[serde(default = "default_title")]
    pub default_title: String,
    #[serde(default)]
    pub start_filter: Bucket,
    /// Start with the sample tasks instead of an empty board
    #[serde(default)]
    pub demo: bool,
}

impl Default for TasksConfig {
    fn default() -> Self {
        TasksConfig {
            default_title: default_title(),
            start_filter: Bucket::Today,
            demo: false,
        }
    }
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub mouse: bool,
    /// Theme overrides, key -> "#RRGGBB"
    #[serde(default)]
    pub colors: BTreeMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            mouse: true,
            colors: BTreeMap::new(),
        }
    }
}

fn default_true() -> bool {
    true
}
