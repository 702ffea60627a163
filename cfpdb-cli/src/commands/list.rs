use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use cfpdb_core::{partition, rank, CfpdbConfig};
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(input: Option<PathBuf>, show_past: bool, today: NaiveDate) -> Result<()> {
    let config = CfpdbConfig::load()?;
    let db = super::load_database(input, &config)?;

    let ranked = rank(&db, today)?;
    let (past, future) = partition(ranked, today);

    if future.is_empty() && !(show_past && !past.is_empty()) {
        println!("No upcoming conferences.");
        return Ok(());
    }

    for conf in &future {
        println!("{}", conf.render(today));
    }

    if show_past && !past.is_empty() {
        println!();
        println!("{}", "Past...".bold());
        for conf in &past {
            println!("{}", conf.render(today));
        }
    }

    Ok(())
}
