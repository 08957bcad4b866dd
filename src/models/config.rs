//! Configuration model loaded from external sources.

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

use crate::DEFAULT_WINDOW_DELTA;
use crate::domain::screen::ListScreen;
use crate::domain::types::{PageSize, TypeConstraintError};

fn default_window_delta() -> usize {
    DEFAULT_WINDOW_DELTA
}

/// Settings of the list tooling.
#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    /// Directory holding `<collection>.json` snapshots.
    pub data_dir: String,
    /// Page size applied to every built-in screen.
    #[serde(default)]
    pub page_size: Option<PageSize>,
    /// Pages shown on each side of the current one in the pager.
    #[serde(default = "default_window_delta")]
    pub window_delta: usize,
    /// Replaces the built-in screens when present.
    #[serde(default)]
    pub screens: Option<Vec<ListScreen>>,
}

impl AppConfig {
    /// Loads `config/default`, then `config/{app_env}` when it exists, then
    /// `APP_*` environment variables.
    pub fn load(app_env: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default"))
            .add_source(File::with_name(&format!("config/{app_env}")).required(false))
            .add_source(Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()
    }

    /// Parses settings from a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(yaml, FileFormat::Yaml))
            .build()?
            .try_deserialize()
    }

    /// Screens available to the admin back-office.
    pub fn screens(&self) -> Result<Vec<ListScreen>, TypeConstraintError> {
        if let Some(screens) = &self.screens {
            return Ok(screens.clone());
        }

        let screens = ListScreen::builtin()?;
        Ok(match self.page_size {
            Some(size) => screens
                .into_iter()
                .map(|screen| screen.page_size(size))
                .collect(),
            None => screens,
        })
    }
}
