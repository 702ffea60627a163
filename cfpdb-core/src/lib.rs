//! Core engine for the cfpdb conference-deadline site generator.
//!
//! Takes a YAML database of conferences (each with CFP deadlines and a date
//! span, possibly with wildcard digits), resolves every field to a concrete
//! date, picks the next-actionable deadline per conference, orders the whole
//! collection into a past/future timeline, and renders the result as an HTML
//! page and an iCalendar feed.

pub mod conference;
pub mod config;
pub mod error;
pub mod events;
pub mod html;
pub mod ics;
pub mod input;
pub mod partial_date;
pub mod ranking;
pub mod selection;
pub mod timeline;

pub use conference::{ConferenceRecord, DeadlineKind};
pub use config::CfpdbConfig;
pub use error::{CfpError, CfpResult};
pub use events::{build_events, CalendarEventSpec};
pub use input::{load_conferences, parse_conferences, ConferenceDb};
pub use ranking::{partition, rank, RankedConference};
pub use selection::{next_deadline, SelectionResult};
pub use timeline::ResolvedTimeline;
