//! Conference records and the deadline-field ordering domain.

use std::fmt;

use serde::Deserialize;

/// The five tracked date fields of a conference, in fixed priority order.
///
/// The discriminant doubles as the priority index: `submission` (0) outranks
/// `notification` (1), and so on down to `end` (4). Tie-breaking in selection
/// and sorting leans on this order, so it is a process-wide constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DeadlineKind {
    Submission,
    Notification,
    CameraReady,
    Begin,
    End,
}

impl DeadlineKind {
    /// All field kinds, in priority order.
    pub const ALL: [DeadlineKind; 5] = [
        DeadlineKind::Submission,
        DeadlineKind::Notification,
        DeadlineKind::CameraReady,
        DeadlineKind::Begin,
        DeadlineKind::End,
    ];

    /// The three CFP deadline fields (everything except the event span).
    pub const CFP: [DeadlineKind; 3] = [
        DeadlineKind::Submission,
        DeadlineKind::Notification,
        DeadlineKind::CameraReady,
    ];

    /// Priority index of this kind (0 = submission .. 4 = end).
    pub fn index(self) -> usize {
        self as usize
    }

    /// The field name as it appears in the YAML database.
    pub fn label(self) -> &'static str {
        match self {
            DeadlineKind::Submission => "submission",
            DeadlineKind::Notification => "notification",
            DeadlineKind::CameraReady => "camera-ready",
            DeadlineKind::Begin => "begin",
            DeadlineKind::End => "end",
        }
    }
}

impl fmt::Display for DeadlineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One conference entry as it appears in the YAML database.
///
/// Date fields are kept as raw strings: they may be complete `YYYY-MM-DD`
/// dates or carry wildcard digits ("201X-XX-XX") that the resolver turns
/// into concrete dates later.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConferenceRecord {
    #[serde(default)]
    pub url: Option<String>,
    pub location: String,
    #[serde(default)]
    pub submission: Option<String>,
    #[serde(default)]
    pub notification: Option<String>,
    #[serde(default, rename = "camera-ready")]
    pub camera_ready: Option<String>,
    #[serde(default)]
    pub begin: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

impl ConferenceRecord {
    /// The raw spec string for the given field kind, if present.
    pub fn field(&self, kind: DeadlineKind) -> Option<&str> {
        match kind {
            DeadlineKind::Submission => self.submission.as_deref(),
            DeadlineKind::Notification => self.notification.as_deref(),
            DeadlineKind::CameraReady => self.camera_ready.as_deref(),
            DeadlineKind::Begin => self.begin.as_deref(),
            DeadlineKind::End => self.end.as_deref(),
        }
    }
}
