use crate::error::{Result, SwitchError};
use crate::naming::{NameCodec, DEFAULT_SEPARATOR};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for modeswap, stored in .modeswap/config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SwitchConfig {
    /// Separator between `component`, `mode` and `variant` in resource names
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Write the document back even when nothing switched
    #[serde(default)]
    pub persist_on_noop: bool,
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

impl Default for SwitchConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            persist_on_noop: false,
        }
    }
}

impl SwitchConfig {
    pub const KEYS: [&'static str; 2] = ["separator", "persist-on-noop"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: SwitchConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub fn codec(&self) -> NameCodec {
        NameCodec::new(self.separator.clone())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "separator" => Some(format!("\"{}\"", self.separator)),
            "persist-on-noop" => Some(self.persist_on_noop.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "separator" => {
                if value.is_empty() {
                    return Err(SwitchError::Config("separator cannot be empty".into()));
                }
                self.separator = value.to_string();
            }
            "persist-on-noop" => {
                self.persist_on_noop = value.parse().map_err(|_| {
                    SwitchError::Config(format!("persist-on-noop expects true or false, got {}", value))
                })?;
            }
            _ => return Err(SwitchError::Config(format!("Unknown config key: {}", key))),
        }
        Ok(())
    }
}
