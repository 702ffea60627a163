//! Terminal rendering for ranked conferences.
//!
//! Extension trait adding colored output to cfpdb-core types, colored per
//! deadline kind the same way the HTML page highlights them.

use cfpdb_core::{DeadlineKind, RankedConference};
use chrono::NaiveDate;
use owo_colors::OwoColorize;

pub trait Render {
    fn render(&self, today: NaiveDate) -> String;
}

impl Render for RankedConference {
    fn render(&self, today: NaiveDate) -> String {
        let chosen = &self.selection;

        let days = (chosen.date - today).num_days();
        let when = match days {
            0 => "today".to_string(),
            d if d > 0 => format!("in {d} days"),
            d => format!("{} days ago", -d),
        };

        let field = format!("{}: {}", chosen.kind, chosen.date);
        let field = match chosen.kind {
            DeadlineKind::Submission => field.red().to_string(),
            DeadlineKind::Notification => field.yellow().to_string(),
            _ => field.green().to_string(),
        };

        format!(
            "{} {} ({})",
            self.name.bold(),
            field,
            when.dimmed()
        )
    }
}
