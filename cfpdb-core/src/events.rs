//! Derivation of calendar events from a resolved timeline.

use chrono::NaiveDate;

use crate::conference::{ConferenceRecord, DeadlineKind};
use crate::partial_date;
use crate::timeline::ResolvedTimeline;

/// One all-day calendar event, ready for feed serialization.
///
/// `end` is the last *included* day; the serializer is responsible for the
/// exclusive-DTEND convention of the wire format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEventSpec {
    pub uid: String,
    pub summary: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub location: String,
    pub url: Option<String>,
}

/// Derive the discrete events for one conference: one per real CFP deadline
/// plus one for the conference's own date span.
///
/// Deadlines that resolved to the sentinel are skipped. A span whose `end`
/// precedes `begin` is clamped to a zero-length span rather than rejected.
pub fn build_events(
    name: &str,
    record: &ConferenceRecord,
    timeline: &ResolvedTimeline,
) -> Vec<CalendarEventSpec> {
    let mut events = Vec::new();

    for kind in DeadlineKind::CFP {
        let date = timeline.date(kind);
        if date < partial_date::sentinel() {
            events.push(CalendarEventSpec {
                uid: event_uid(kind.label(), name),
                summary: format!("{}: {}", kind.label().to_uppercase(), name),
                start: date,
                end: date,
                location: record.location.clone(),
                url: record.url.clone(),
            });
        }
    }

    let begin = timeline.date(DeadlineKind::Begin);
    if begin < partial_date::sentinel() {
        let end = timeline.date(DeadlineKind::End).max(begin);
        events.push(CalendarEventSpec {
            uid: event_uid("conference", name),
            summary: name.to_string(),
            start: begin,
            end,
            location: record.location.clone(),
            url: record.url.clone(),
        });
    }

    events
}

/// Deterministic UID so repeated runs over unchanged input produce an
/// identical feed.
fn event_uid(prefix: &str, name: &str) -> String {
    format!("{}-{}@cfpdb", prefix, slug::slugify(name))
}
