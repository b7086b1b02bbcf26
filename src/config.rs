use anyhow::{Result, anyhow};
use std::path::PathBuf;
use std::str::FromStr;

/// How the copy action reaches the clipboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardMode {
    Osc52,
    Off,
}

impl FromStr for ClipboardMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "osc52" | "" => Ok(ClipboardMode::Osc52),
            "off" | "none" => Ok(ClipboardMode::Off),
            other => Err(anyhow!(
                "Unknown MOOD_CURATOR_CLIPBOARD value '{other}' (expected 'osc52' or 'off')"
            )),
        }
    }
}

/// Configuration loaded from environment variables
#[derive(Debug)]
pub struct Config {
    pub data_dir: PathBuf,
    pub clipboard: ClipboardMode,
}

impl Config {
    /// Build configuration from raw variable values, falling back to defaults
    pub fn from_vars(data_dir: Option<String>, clipboard: Option<String>) -> Result<Config> {
        let data_dir = match data_dir {
            Some(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
            _ => default_data_dir(),
        };
        let clipboard = match clipboard {
            Some(mode) => mode.parse()?,
            None => ClipboardMode::Osc52,
        };
        Ok(Config {
            data_dir,
            clipboard,
        })
    }
}

/// Platform local data directory, e.g. `~/.local/share/mood-curator` on Linux
fn default_data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("mood-curator");
    path
}

/// Load configuration from `.env` and environment
pub fn load_config() -> Result<Config> {
    // Load `.env` file if present
    dotenv::dotenv().ok();
    Config::from_vars(
        std::env::var("MOOD_CURATOR_DATA_DIR").ok(),
        std::env::var("MOOD_CURATOR_CLIPBOARD").ok(),
    )
}
