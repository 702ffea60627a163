use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use cfpdb_core::{build_events, partition, rank, CfpdbConfig};

pub fn run(
    input: Option<PathBuf>,
    html: Option<PathBuf>,
    ics: Option<PathBuf>,
    today: NaiveDate,
) -> Result<()> {
    let config = CfpdbConfig::load()?;
    let db = super::load_database(input, &config)?;

    let ranked = rank(&db, today)?;
    let (past, future) = partition(ranked, today);
    log::debug!(
        "ranked {} upcoming and {} past conferences as of {}",
        future.len(),
        past.len(),
        today
    );

    let page = cfpdb_core::html::render_page(&past, &future, &config.title);
    let html_out = CfpdbConfig::expand(&html.unwrap_or_else(|| config.html_out.clone()));
    fs::write(&html_out, page)?;

    // The feed covers every conference, future and past alike.
    let mut events = Vec::new();
    for conf in future.iter().chain(past.iter()) {
        events.extend(build_events(&conf.name, &conf.record, &conf.timeline));
    }
    let feed = cfpdb_core::ics::calendar_feed(&events);
    let ics_out = CfpdbConfig::expand(&ics.unwrap_or_else(|| config.ics_out.clone()));
    fs::write(&ics_out, feed)?;

    println!(
        "Wrote {} conferences to {} and {}",
        db.len(),
        html_out.display(),
        ics_out.display()
    );

    Ok(())
}
