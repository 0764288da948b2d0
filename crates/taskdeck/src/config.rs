/*
[INPUT]:  YAML configuration file and TASKDECK_* environment overrides
[OUTPUT]: Parsed and validated TaskdeckConfig
[POS]:    Configuration layer - labels, seed tasks, UI timing
[UPDATE]: When adding new configuration options
*/

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use ::config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use taskdeck_core::Task;

/// Top-level configuration for the task deck
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TaskdeckConfig {
    /// User-facing strings
    pub labels: Labels,
    /// Tasks present when the session starts
    pub seed_tasks: Vec<Task>,
    /// Terminal UI settings
    pub ui: UiConfig,
}

/// User-facing label strings, supplied from outside the core
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Labels {
    /// Affordance shown on a collapsed row
    pub show_more: String,
    /// Affordance shown on an expanded row
    pub show_less: String,
    pub onboarding_title: String,
    pub continue_label: String,
    pub list_title: String,
    /// Prefix shown before each task name
    pub task_prefix: String,
    pub empty_list: String,
    pub form_title: String,
    pub name_label: String,
    pub detail_label: String,
    pub submit_label: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            show_more: "show more".to_string(),
            show_less: "show less".to_string(),
            onboarding_title: "Welcome to taskdeck!".to_string(),
            continue_label: "Continue".to_string(),
            list_title: "Tasks".to_string(),
            task_prefix: "Task:".to_string(),
            empty_list: "No tasks yet. Press [a] to add one.".to_string(),
            form_title: "New task".to_string(),
            name_label: "Task name".to_string(),
            detail_label: "Task detail".to_string(),
            submit_label: "Continue".to_string(),
        }
    }
}

/// Terminal UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct UiConfig {
    /// Redraw and animation tick in milliseconds
    pub tick_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { tick_ms: 250 }
    }
}

impl TaskdeckConfig {
    /// Load configuration from an optional YAML file, then apply
    /// `TASKDECK_*` environment overrides (`__` separates sections).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Yaml).required(true));
        }
        builder = builder.add_source(
            Environment::with_prefix("TASKDECK")
                .prefix_separator("_")
                .separator("__"),
        );

        let config: Self = builder
            .build()
            .context("build configuration sources")?
            .try_deserialize()
            .context("deserialize configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file without environment overrides
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content).context("parse config yaml")?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("serialize config to yaml")
    }

    pub fn validate(&self) -> Result<()> {
        if self.ui.tick_ms == 0 {
            bail!("ui.tick_ms must be greater than 0");
        }
        if self.labels.show_more.trim().is_empty() || self.labels.show_less.trim().is_empty() {
            bail!("labels.show_more and labels.show_less must not be empty");
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.ui.tick_ms)
    }

    /// `<config dir>/taskdeck/config.yaml`, when the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("taskdeck").join("config.yaml"))
    }
}
