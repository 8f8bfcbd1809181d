use crate::error::{PhonebookError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::warn;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_NAME_WIDTH: usize = 20;
const DEFAULT_PHONE_WIDTH: usize = 15;

/// Display configuration, read from `config.json` in the config directory.
///
/// Only presentation lives here. Contacts themselves are never written to disk.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PhonebookConfig {
    /// Width of the name column in listings
    #[serde(default = "default_name_width")]
    pub name_width: usize,

    /// Width of the phone column in listings
    #[serde(default = "default_phone_width")]
    pub phone_width: usize,

    /// Color success and error messages
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_name_width() -> usize {
    DEFAULT_NAME_WIDTH
}

fn default_phone_width() -> usize {
    DEFAULT_PHONE_WIDTH
}

fn default_color() -> bool {
    true
}

impl Default for PhonebookConfig {
    fn default() -> Self {
        Self {
            name_width: DEFAULT_NAME_WIDTH,
            phone_width: DEFAULT_PHONE_WIDTH,
            color: true,
        }
    }
}

impl PhonebookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: PhonebookConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`load`](Self::load), but with no directory to look in the
    /// defaults are used and a warning is logged.
    pub fn load_or_default(config_dir: Option<&Path>) -> Result<Self> {
        match config_dir {
            Some(dir) => Self::load(dir),
            None => {
                warn!("no config directory available, using default display settings");
                Ok(Self::default())
            }
        }
    }

    fn validate(&self) -> Result<()> {
        if self.name_width == 0 || self.phone_width == 0 {
            return Err(PhonebookError::Config(
                "column widths must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}
