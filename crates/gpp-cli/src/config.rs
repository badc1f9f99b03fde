//! Configuration for the `gpp` binary.
//!
//! Looked up in order: `--config <PATH>`, `./gpp.toml`, then
//! `<config dir>/gpp/gpp.toml`. Missing files mean defaults; every section
//! and field is optional.
//!
//! ```toml
//! [data]
//! path = "data_input/power_plant.csv"
//! delimiter = ","
//!
//! [data.columns]
//! start_year = "commissioning_year"
//!
//! [dashboard]
//! default_country = "Indonesia"
//! addr = "127.0.0.1:8050"
//!
//! [logging]
//! level = "info"
//! ```

use gpp_core::{GppError, GppResult};
use gpp_io::{ColumnMap, LoadOptions};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "gpp.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct GppConfig {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataConfig {
    /// Dataset used when a command is given no path
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    #[serde(default)]
    pub columns: ColumnMap,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: default_data_path(),
            delimiter: default_delimiter(),
            columns: ColumnMap::default(),
        }
    }
}

impl DataConfig {
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            delimiter: self.delimiter,
            columns: self.columns.clone(),
        }
    }
}

fn default_data_path() -> PathBuf {
    PathBuf::from("data_input/power_plant.csv")
}

fn default_delimiter() -> char {
    ','
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardConfig {
    #[serde(default = "default_country")]
    pub default_country: String,
    #[serde(default = "default_addr")]
    pub addr: SocketAddr,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_country: default_country(),
            addr: default_addr(),
        }
    }
}

fn default_country() -> String {
    "Indonesia".to_string()
}

fn default_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8050))
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl LoggingConfig {
    pub fn level(&self) -> GppResult<tracing::Level> {
        self.level
            .parse()
            .map_err(|_| GppError::Config(format!("invalid [logging] level '{}'", self.level)))
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Files checked, in order, when no `--config` is given.
pub fn config_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(CONFIG_FILE_NAME)];
    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join("gpp").join(CONFIG_FILE_NAME));
    }
    candidates
}

/// Load the configuration. An explicit path must exist; otherwise the first
/// existing candidate is used, or defaults if there is none.
pub fn load_config(explicit: Option<&Path>) -> GppResult<GppConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match config_candidates().into_iter().find(|p| p.is_file()) {
            Some(path) => path,
            None => return Ok(GppConfig::default()),
        },
    };
    read_config(&path)
}

pub fn read_config(path: &Path) -> GppResult<GppConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|err| GppError::Config(format!("reading config {}: {err}", path.display())))?;
    parse_config(&contents).map_err(|err| match err {
        GppError::Config(msg) => GppError::Config(format!("parsing config {}: {msg}", path.display())),
        other => other,
    })
}

pub fn parse_config(contents: &str) -> GppResult<GppConfig> {
    toml::from_str(contents).map_err(|err| GppError::Config(err.to_string()))
}
