//! Whole-collection ordering into a past/future timeline.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::conference::ConferenceRecord;
use crate::error::CfpResult;
use crate::selection::{next_deadline, SelectionResult};
use crate::timeline::ResolvedTimeline;

/// One conference with its derived resolution and selection results.
#[derive(Debug, Clone)]
pub struct RankedConference {
    pub name: String,
    pub record: ConferenceRecord,
    pub timeline: ResolvedTimeline,
    pub selection: SelectionResult,
}

impl RankedConference {
    /// Composite sort key: chosen date, then chosen-field priority, then
    /// name. The name breaks any residual tie, so the order is total.
    fn sort_key(&self) -> (NaiveDate, usize, &str) {
        (
            self.selection.date,
            self.selection.kind.index(),
            self.name.as_str(),
        )
    }
}

/// Resolve and select for every conference in the database.
///
/// Per-record work is independent; only [`partition`] establishes a global
/// order. Any resolution failure aborts the whole batch.
pub fn rank(
    conferences: &BTreeMap<String, ConferenceRecord>,
    today: NaiveDate,
) -> CfpResult<Vec<RankedConference>> {
    conferences
        .iter()
        .map(|(name, record)| {
            let timeline = ResolvedTimeline::build(name, record)?;
            let selection = next_deadline(&timeline, today);
            Ok(RankedConference {
                name: name.clone(),
                record: record.clone(),
                timeline,
                selection,
            })
        })
        .collect()
}

/// Split the ranked collection into (past, future) reading sequences.
///
/// A conference is past iff its chosen date is strictly before `today`.
/// The future sequence is ascending (soonest first); the past sequence is
/// reversed to most-recently-concluded first.
pub fn partition(
    mut ranked: Vec<RankedConference>,
    today: NaiveDate,
) -> (Vec<RankedConference>, Vec<RankedConference>) {
    ranked.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));

    let (mut past, future): (Vec<_>, Vec<_>) = ranked
        .into_iter()
        .partition(|conf| conf.selection.date < today);

    past.reverse();
    (past, future)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conference::DeadlineKind;

    fn record(
        submission: Option<&str>,
        begin: &str,
        end: &str,
    ) -> ConferenceRecord {
        ConferenceRecord {
            url: None,
            location: "Online".to_string(),
            submission: submission.map(String::from),
            notification: None,
            camera_ready: None,
            begin: Some(begin.to_string()),
            end: Some(end.to_string()),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn db(entries: Vec<(&str, ConferenceRecord)>) -> BTreeMap<String, ConferenceRecord> {
        entries
            .into_iter()
            .map(|(name, rec)| (name.to_string(), rec))
            .collect()
    }

    #[test]
    fn future_ascending_past_descending() {
        let today = date(2024, 6, 1);
        let conferences = db(vec![
            ("Old-A", record(None, "2023-03-01", "2023-03-03")),
            ("Old-B", record(None, "2024-01-10", "2024-01-12")),
            ("Soon", record(Some("2024-06-20"), "2024-10-01", "2024-10-03")),
            ("Later", record(Some("2024-08-01"), "2024-12-01", "2024-12-03")),
        ]);

        let ranked = rank(&conferences, today).unwrap();
        let (past, future) = partition(ranked, today);

        let future_names: Vec<&str> = future.iter().map(|c| c.name.as_str()).collect();
        let past_names: Vec<&str> = past.iter().map(|c| c.name.as_str()).collect();

        assert_eq!(future_names, vec!["Soon", "Later"]);
        // Most recently concluded first.
        assert_eq!(past_names, vec!["Old-B", "Old-A"]);
    }

    #[test]
    fn same_date_different_field_sorts_by_priority() {
        let today = date(2024, 6, 1);
        // Both choose 2024-06-15, but via different fields.
        let conferences = db(vec![
            ("ByBegin", record(None, "2024-06-15", "2024-06-17")),
            ("BySubmission", record(Some("2024-06-15"), "2024-11-01", "2024-11-03")),
        ]);

        let ranked = rank(&conferences, today).unwrap();
        assert!(ranked
            .iter()
            .all(|c| c.selection.date == date(2024, 6, 15)));

        let (_, future) = partition(ranked, today);
        let names: Vec<&str> = future.iter().map(|c| c.name.as_str()).collect();
        // Submission has the lower priority index, so it sorts first.
        assert_eq!(names, vec!["BySubmission", "ByBegin"]);
    }

    #[test]
    fn name_breaks_residual_ties_deterministically() {
        let today = date(2024, 6, 1);
        let twin =
            |name: &'static str| (name, record(Some("2024-06-15"), "2024-11-01", "2024-11-03"));
        let conferences = db(vec![twin("Zeta"), twin("Alpha"), twin("Mid")]);

        let ranked = rank(&conferences, today).unwrap();
        let (_, future) = partition(ranked, today);
        let names: Vec<&str> = future.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Mid", "Zeta"]);
    }

    #[test]
    fn conference_ending_today_is_future() {
        let today = date(2024, 6, 1);
        let conferences = db(vec![("EndsToday", record(None, "2024-05-30", "2024-06-01"))]);

        let ranked = rank(&conferences, today).unwrap();
        assert_eq!(ranked[0].selection.kind, DeadlineKind::End);

        let (past, future) = partition(ranked, today);
        assert!(past.is_empty());
        assert_eq!(future.len(), 1);
    }
}
