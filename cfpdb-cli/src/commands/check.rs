use std::path::PathBuf;

use anyhow::Result;
use cfpdb_core::CfpdbConfig;

pub fn run(input: Option<PathBuf>) -> Result<()> {
    let config = CfpdbConfig::load()?;
    let db = super::load_database(input, &config)?;

    let today = chrono::Local::now().date_naive();
    let ranked = cfpdb_core::rank(&db, today)?;

    println!("OK: {} conferences validated", ranked.len());
    Ok(())
}
