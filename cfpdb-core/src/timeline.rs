//! Per-conference resolution of all tracked date fields.

use chrono::NaiveDate;

use crate::conference::{ConferenceRecord, DeadlineKind};
use crate::error::{CfpError, CfpResult};
use crate::partial_date;

/// All five date fields of one conference, resolved to concrete dates.
///
/// Derived from exactly one [`ConferenceRecord`] and immutable once built.
/// CFP deadline fields that were absent or unresolvable hold the sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTimeline {
    dates: [NaiveDate; 5],
}

impl ResolvedTimeline {
    /// Resolve every field of `record`.
    ///
    /// The event's own span is strict: `begin` and `end` must be present and
    /// must be complete `YYYY-MM-DD` dates. Wildcards are only meaningful for
    /// deadlines that may genuinely be unannounced; a conference without a
    /// concrete date span is a broken database entry.
    pub fn build(name: &str, record: &ConferenceRecord) -> CfpResult<Self> {
        let mut dates = [partial_date::sentinel(); 5];

        for kind in DeadlineKind::CFP {
            dates[kind.index()] = partial_date::resolve(record.field(kind))?;
        }

        for kind in [DeadlineKind::Begin, DeadlineKind::End] {
            let raw = record.field(kind).ok_or_else(|| CfpError::MissingField {
                conference: name.to_string(),
                field: kind.label(),
            })?;
            dates[kind.index()] =
                partial_date::parse_exact(raw).ok_or_else(|| CfpError::UnresolvedSpan {
                    conference: name.to_string(),
                    field: kind.label(),
                    value: raw.to_string(),
                })?;
        }

        Ok(ResolvedTimeline { dates })
    }

    /// The resolved date for the given field kind.
    pub fn date(&self, kind: DeadlineKind) -> NaiveDate {
        self.dates[kind.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ConferenceRecord {
        ConferenceRecord {
            url: Some("https://example.org/conf".to_string()),
            location: "Prague, Czech Republic".to_string(),
            submission: Some("2024-05-01".to_string()),
            notification: Some("2024-06-XX".to_string()),
            camera_ready: None,
            begin: Some("2024-09-01".to_string()),
            end: Some("2024-09-03".to_string()),
        }
    }

    #[test]
    fn resolves_all_five_fields() {
        let timeline = ResolvedTimeline::build("TestConf", &record()).unwrap();

        assert_eq!(
            timeline.date(DeadlineKind::Submission),
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
        );
        // Wildcard day defaults to the last day of the month.
        assert_eq!(
            timeline.date(DeadlineKind::Notification),
            NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
        );
        // Absent deadline resolves to the sentinel.
        assert_eq!(
            timeline.date(DeadlineKind::CameraReady),
            partial_date::sentinel()
        );
        assert_eq!(
            timeline.date(DeadlineKind::End),
            NaiveDate::from_ymd_opt(2024, 9, 3).unwrap()
        );
    }

    #[test]
    fn missing_span_field_is_fatal() {
        let mut broken = record();
        broken.end = None;

        let err = ResolvedTimeline::build("TestConf", &broken).unwrap_err();
        match err {
            CfpError::MissingField { conference, field } => {
                assert_eq!(conference, "TestConf");
                assert_eq!(field, "end");
            }
            other => panic!("expected MissingField, got {other}"),
        }
    }

    #[test]
    fn wildcarded_span_field_is_fatal() {
        let mut broken = record();
        broken.begin = Some("2024-09-XX".to_string());

        let err = ResolvedTimeline::build("TestConf", &broken).unwrap_err();
        assert!(matches!(err, CfpError::UnresolvedSpan { field: "begin", .. }));
    }
}
