//! Config-file surface for CrudGen (`crudgen.toml`).
//!
//! ```toml
//! [database]
//! name = "appdb"
//!
//! [generator.crud]
//! output_dir = "gen/crud"
//! exceptions = ["migrations"]
//! module_extension = "js"
//! ```

use serde::Deserialize;
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to parse config '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

///
/// Config
///

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    pub database: DatabaseConfig,
    pub generator: GeneratorConfig,
}

impl Config {
    /// Load and parse a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

///
/// DatabaseConfig
///
/// Passed through to the catalog source; the generator core never reads it.
///

#[derive(Clone, Debug, Deserialize)]
pub struct DatabaseConfig {
    pub name: String,
}

///
/// GeneratorConfig
///

#[derive(Clone, Debug, Deserialize)]
pub struct GeneratorConfig {
    pub crud: CrudConfig,
}

///
/// CrudConfig
///

#[derive(Clone, Debug, Deserialize)]
pub struct CrudConfig {
    pub output_dir: PathBuf,

    #[serde(default)]
    pub exceptions: Vec<String>,

    #[serde(default = "default_module_extension")]
    pub module_extension: String,
}

fn default_module_extension() -> String {
    "js".to_string()
}
