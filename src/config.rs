use crate::errors::ServerError;
use crate::table::{TableOptions, DEFAULT_ITEMS_PER_PAGE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_ENV_VAR: &str = "AFFILIATE_DASHBOARD_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "dashboard.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_database_path")]
    pub database_path: String,

    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    #[serde(default = "default_max_workers")]
    pub max_workers: usize,

    /// Insert demo affiliates, commissions and payouts into an empty store.
    #[serde(default = "default_true")]
    pub seed_demo_data: bool,

    #[serde(default)]
    pub table: TableConfig,

    #[serde(default)]
    pub payouts: PayoutConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableConfig {
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,

    /// Jump back to page 1 when a column header is clicked.
    #[serde(default)]
    pub reset_page_on_sort: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoutConfig {
    #[serde(default = "default_minimum_cents")]
    pub minimum_cents: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            bind_addr: default_bind_addr(),
            max_workers: default_max_workers(),
            seed_demo_data: true,
            table: TableConfig::default(),
            payouts: PayoutConfig::default(),
        }
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            items_per_page: default_items_per_page(),
            reset_page_on_sort: false,
        }
    }
}

impl Default for PayoutConfig {
    fn default() -> Self {
        Self {
            minimum_cents: default_minimum_cents(),
        }
    }
}

impl TableConfig {
    pub fn options(&self) -> TableOptions {
        TableOptions {
            items_per_page: self.items_per_page.max(1),
            reset_page_on_sort: self.reset_page_on_sort,
        }
    }
}

fn default_database_path() -> String {
    "affiliate_dashboard.sqlite3".to_string()
}

fn default_bind_addr() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_max_workers() -> usize {
    8
}

fn default_true() -> bool {
    true
}

fn default_items_per_page() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

fn default_minimum_cents() -> i64 {
    5_000
}

impl AppConfig {
    /// Load from `$AFFILIATE_DASHBOARD_CONFIG`, else `./dashboard.toml`.
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self, ServerError> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, ServerError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            ServerError::ConfigError(format!("failed to read {}: {e}", path.display()))
        })?;

        toml::from_str(&content).map_err(|e| {
            ServerError::ConfigError(format!("failed to parse {}: {e}", path.display()))
        })
    }

    pub fn config_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }
}
