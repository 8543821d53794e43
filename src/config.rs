use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::registry::{DEFAULT_ISO_CODES, IsoRegistry};

pub const CONFIG_FILE_NAME: &str = ".locheckrc.json";

/// Shape of an acceptable registry entry: a lowercase 2-3 letter code
/// with an optional region subtag (e.g. "en", "pt-BR").
const ISO_CODE_PATTERN: &str = r"^[a-z]{2,3}(-[a-zA-Z]{2,4})?$";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Path to the JSON snapshot to verify.
    #[serde(default = "default_snapshot")]
    pub snapshot: String,
    /// Registry of allowed ISO codes; order is preserved.
    #[serde(default = "default_valid_isos")]
    pub valid_isos: Vec<String>,
}

fn default_snapshot() -> String {
    "./data/snapshot.json".to_string()
}

fn default_valid_isos() -> Vec<String> {
    DEFAULT_ISO_CODES.iter().map(|code| code.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snapshot: default_snapshot(),
            valid_isos: default_valid_isos(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if the registry is empty or contains entries that
    /// do not look like ISO codes.
    pub fn validate(&self) -> Result<()> {
        if self.valid_isos.is_empty() {
            anyhow::bail!("'validIsos' must not be empty");
        }

        let pattern = Regex::new(ISO_CODE_PATTERN).context("Failed to compile ISO code pattern")?;
        for code in &self.valid_isos {
            if !pattern.is_match(code) {
                anyhow::bail!("Invalid ISO code in 'validIsos': \"{}\"", code);
            }
        }

        Ok(())
    }

    pub fn registry(&self) -> IsoRegistry {
        IsoRegistry::new(self.valid_isos.iter().cloned())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
