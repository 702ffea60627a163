pub mod check;
pub mod generate;
pub mod list;

use std::path::PathBuf;

use anyhow::Result;
use cfpdb_core::{CfpdbConfig, ConferenceDb};

/// Resolve the database path (flag over config default) and load it.
pub fn load_database(input: Option<PathBuf>, config: &CfpdbConfig) -> Result<ConferenceDb> {
    let path = input.unwrap_or_else(|| config.conferences_file.clone());
    let path = CfpdbConfig::expand(&path);
    log::debug!("loading conference database from {}", path.display());
    Ok(cfpdb_core::load_conferences(&path)?)
}
