use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::count_up::{DEFAULT_DURATION_MS, DEFAULT_START_DELAY_MS, DEFAULT_TICK_MS};
use crate::error::AppError;
use crate::nav::{MatchPolicy, DEFAULT_MAX_DEPTH};

/// Branding and landing page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    pub name: String,
    /// Route the sidebar logo links to. The `/` redirect is fixed to the
    /// dashboard route and does not read this.
    pub home: String,
    /// Currency code used for revenue figures.
    pub currency: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "Business Registry".to_string(),
            home: "/dashboard".to_string(),
            currency: "GHS".to_string(),
        }
    }
}

/// Sidebar menu behaviour.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NavigationSettings {
    pub group_label: String,
    /// When true, a `/` or empty destination is active only on that exact
    /// location instead of on every page.
    pub root_matches_exactly: bool,
    pub max_depth: usize,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            group_label: "Platform".to_string(),
            root_matches_exactly: true,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl NavigationSettings {
    pub fn match_policy(&self) -> MatchPolicy {
        MatchPolicy::from_root_exact(self.root_matches_exactly)
    }
}

/// Stat card count-up timing, in milliseconds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StatsSettings {
    pub tick_ms: u64,
    pub start_delay_ms: u64,
    pub duration_ms: u64,
}

impl Default for StatsSettings {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_TICK_MS,
            start_delay_ms: DEFAULT_START_DELAY_MS,
            duration_ms: DEFAULT_DURATION_MS,
        }
    }
}

/// Top-level config file structure matching `config.toml`.
///
/// Every field has a default so a missing or partial file still yields a
/// usable dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub navigation: NavigationSettings,
    #[serde(default)]
    pub stats: StatsSettings,
}

impl AppConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, AppError> {
        let config: AppConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        let mut fields = BTreeMap::new();
        if self.stats.tick_ms == 0 {
            fields.insert(
                "stats.tick_ms".to_string(),
                "must be greater than zero".to_string(),
            );
        }
        if self.navigation.max_depth == 0 {
            fields.insert(
                "navigation.max_depth".to_string(),
                "must be at least 1".to_string(),
            );
        }
        if !self.app.home.starts_with('/') {
            fields.insert(
                "app.home".to_string(),
                "must be an absolute path".to_string(),
            );
        }
        if fields.is_empty() {
            Ok(())
        } else {
            Err(AppError::config_fields("invalid config.toml", fields))
        }
    }
}
