//! Selection of the single next-actionable deadline per conference.

use chrono::NaiveDate;

use crate::conference::DeadlineKind;
use crate::timeline::ResolvedTimeline;

/// The chosen field and date for one conference: the "next thing that
/// matters". Drives both the sort key and downstream highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionResult {
    pub kind: DeadlineKind,
    pub date: NaiveDate,
}

/// Refinement walk order: from just below `end` up to `submission`.
///
/// The walk goes from low priority to high priority and replaces on `<=`,
/// so among fields sharing the same nearest upcoming date, the one walked
/// last wins: submission beats notification beats camera-ready beats begin
/// beats end. This last-write-wins order is load-bearing, not incidental.
const WALK: [DeadlineKind; 4] = [
    DeadlineKind::Begin,
    DeadlineKind::CameraReady,
    DeadlineKind::Notification,
    DeadlineKind::Submission,
];

/// Pick the next-actionable field of `timeline` as of `today`.
///
/// `end` is the default, so a choice always exists: a conference entirely in
/// the past keeps `end` and later sorts by its end date.
pub fn next_deadline(timeline: &ResolvedTimeline, today: NaiveDate) -> SelectionResult {
    let mut chosen = SelectionResult {
        kind: DeadlineKind::End,
        date: timeline.date(DeadlineKind::End),
    };

    for kind in WALK {
        let date = timeline.date(kind);
        if today <= date && date <= chosen.date {
            chosen = SelectionResult { kind, date };
        }
    }

    chosen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conference::ConferenceRecord;

    fn timeline(
        submission: Option<&str>,
        notification: Option<&str>,
        camera_ready: Option<&str>,
        begin: &str,
        end: &str,
    ) -> ResolvedTimeline {
        let record = ConferenceRecord {
            url: None,
            location: "Lisbon, Portugal".to_string(),
            submission: submission.map(String::from),
            notification: notification.map(String::from),
            camera_ready: camera_ready.map(String::from),
            begin: Some(begin.to_string()),
            end: Some(end.to_string()),
        };
        ResolvedTimeline::build("SelConf", &record).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn picks_nearest_field_at_or_after_today() {
        let timeline = timeline(
            Some("2024-05-01"),
            Some("2024-06-15"),
            Some("2024-07-01"),
            "2024-09-01",
            "2024-09-03",
        );

        let chosen = next_deadline(&timeline, date(2024, 6, 1));
        assert_eq!(chosen.kind, DeadlineKind::Notification);
        assert_eq!(chosen.date, date(2024, 6, 15));
    }

    #[test]
    fn a_deadline_today_is_still_upcoming() {
        let timeline = timeline(
            Some("2024-06-01"),
            None,
            None,
            "2024-09-01",
            "2024-09-03",
        );

        let chosen = next_deadline(&timeline, date(2024, 6, 1));
        assert_eq!(chosen.kind, DeadlineKind::Submission);
    }

    #[test]
    fn fully_past_conference_keeps_end() {
        let timeline = timeline(
            Some("2020-01-01"),
            Some("2020-02-01"),
            Some("2020-03-01"),
            "2020-05-01",
            "2020-05-03",
        );

        let chosen = next_deadline(&timeline, date(2024, 6, 1));
        assert_eq!(chosen.kind, DeadlineKind::End);
        assert_eq!(chosen.date, date(2020, 5, 3));
    }

    #[test]
    fn ties_prefer_the_higher_priority_field() {
        // Submission and notification on the same day: submission wins.
        let timeline = timeline(
            Some("2024-06-15"),
            Some("2024-06-15"),
            None,
            "2024-09-01",
            "2024-09-03",
        );

        let chosen = next_deadline(&timeline, date(2024, 6, 1));
        assert_eq!(chosen.kind, DeadlineKind::Submission);
    }

    #[test]
    fn begin_on_end_date_outranks_end() {
        let timeline = timeline(None, None, None, "2024-09-01", "2024-09-01");

        let chosen = next_deadline(&timeline, date(2024, 6, 1));
        assert_eq!(chosen.kind, DeadlineKind::Begin);
        assert_eq!(chosen.date, date(2024, 9, 1));
    }

    #[test]
    fn sentinel_deadlines_never_outrank_the_span() {
        // No CFP fields at all: the nearest real field is begin.
        let timeline = timeline(None, None, None, "2024-09-01", "2024-09-03");

        let chosen = next_deadline(&timeline, date(2024, 6, 1));
        assert_eq!(chosen.kind, DeadlineKind::Begin);
    }
}
