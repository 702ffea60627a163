//! Global cfpdb configuration.

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::Deserialize;

use crate::error::{CfpError, CfpResult};
use crate::html::DEFAULT_TITLE;

/// Global configuration at ~/.config/cfpdb/config.toml.
///
/// Everything here is a default; CLI flags override any of it per run.
#[derive(Debug, Clone, Deserialize)]
pub struct CfpdbConfig {
    #[serde(default = "default_conferences_file")]
    pub conferences_file: PathBuf,
    #[serde(default = "default_html_out")]
    pub html_out: PathBuf,
    #[serde(default = "default_ics_out")]
    pub ics_out: PathBuf,
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_conferences_file() -> PathBuf {
    PathBuf::from("conferences.yaml")
}

fn default_html_out() -> PathBuf {
    PathBuf::from("index.html")
}

fn default_ics_out() -> PathBuf {
    PathBuf::from("conferences.ics")
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

impl Default for CfpdbConfig {
    fn default() -> Self {
        CfpdbConfig {
            conferences_file: default_conferences_file(),
            html_out: default_html_out(),
            ics_out: default_ics_out(),
            title: default_title(),
        }
    }
}

impl CfpdbConfig {
    pub fn config_path() -> CfpResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CfpError::Config("Could not determine config directory".into()))?
            .join("cfpdb");

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> CfpResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| CfpError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CfpError::Config(e.to_string()))
    }

    /// A configured path with `~` expanded.
    pub fn expand(path: &Path) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CfpResult<()> {
        let contents = format!(
            "\
# cfpdb configuration

# The conference database to read:
# conferences_file = \"~/cfpdb/conferences.yaml\"

# Where generated output goes:
# html_out = \"index.html\"
# ics_out = \"conferences.ics\"

# Page title for the generated HTML:
# title = \"{DEFAULT_TITLE}\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| CfpError::Config(format!("Could not create config directory: {e}")))?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CfpError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
