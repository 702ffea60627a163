//! Calendar-feed serialization.

use chrono::Duration;
use icalendar::{Calendar, Component, Event, EventLike};

use crate::events::CalendarEventSpec;

/// Serialize the event list into an iCalendar feed.
///
/// Every event is all-day: `DTSTART`/`DTEND` carry date values only, and
/// `DTEND` is exclusive per RFC 5545, hence the one-day shift past the last
/// included day. `DTSTAMP` is pinned to the event start instead of the wall
/// clock so the feed is byte-identical across runs over unchanged input.
pub fn calendar_feed(events: &[CalendarEventSpec]) -> String {
    let mut cal = Calendar::new();
    cal.name("Conference CFP deadlines");

    for spec in events {
        let mut ics_event = Event::new();
        ics_event.uid(&spec.uid);
        ics_event.summary(&spec.summary);
        ics_event.starts(spec.start);
        ics_event.ends(spec.end + Duration::days(1));
        ics_event.add_property(
            "DTSTAMP",
            spec.start.format("%Y%m%dT000000Z").to_string(),
        );

        if !spec.location.is_empty() {
            ics_event.location(&spec.location);
        }
        if let Some(ref url) = spec.url {
            ics_event.add_property("URL", url);
        }

        cal.push(ics_event.done());
    }

    cal.done().to_string()
}
