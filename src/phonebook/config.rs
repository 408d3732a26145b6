use crate::error::{PhonebookError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const DEFAULT_NAME_WIDTH: usize = 10;
const MAX_NAME_WIDTH: usize = 64;
const DEFAULT_PROMPT: &str = "> ";

/// Presentation settings for a session, optionally read from a JSON file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhonebookConfig {
    /// Minimum display width of the name column in listings
    #[serde(default = "default_name_width")]
    pub name_width: usize,

    /// Clear the terminal before each rendered output (interactive sessions only)
    #[serde(default = "default_true")]
    pub clear_screen: bool,

    /// Show the full listing below the message after an add or delete
    #[serde(default = "default_true")]
    pub show_listing_after_change: bool,

    /// Prompt shown before each input line when stdin is a terminal
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Allow ANSI styling. `--no-color` and non-color terminals still switch it off.
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_name_width() -> usize {
    DEFAULT_NAME_WIDTH
}

fn default_true() -> bool {
    true
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

impl Default for PhonebookConfig {
    fn default() -> Self {
        Self {
            name_width: DEFAULT_NAME_WIDTH,
            clear_screen: true,
            show_listing_after_change: true,
            prompt: DEFAULT_PROMPT.to_string(),
            color: true,
        }
    }
}

impl PhonebookConfig {
    /// Load config from `path`, or return defaults if the file does not exist.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(PhonebookError::Io)?;
        let config: PhonebookConfig =
            serde_json::from_str(&content).map_err(PhonebookError::Serialization)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.name_width == 0 || self.name_width > MAX_NAME_WIDTH {
            return Err(PhonebookError::Config(format!(
                "name_width must be between 1 and {}, got {}",
                MAX_NAME_WIDTH, self.name_width
            )));
        }
        Ok(())
    }
}
