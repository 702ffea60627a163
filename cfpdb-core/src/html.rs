//! HTML timeline page rendering.
//!
//! Produces a single self-contained page: an "Upcoming..." section in
//! ascending order, then a "Past..." section in descending order. Within the
//! upcoming section the chosen field of each conference is highlighted.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::conference::DeadlineKind;
use crate::ranking::RankedConference;

/// Default page title, overridable through the config file.
pub const DEFAULT_TITLE: &str = "Academic Conference Deadlines";

/// Highlight color per field kind, indexed by priority.
const HIGHLIGHT: [&str; 5] = ["#ffd0d0", "#f1f1a3", "#d0f0d0", "#d0f0d0", "#d0f0d0"];

/// Render the full page from the partitioned timeline.
pub fn render_page(
    past: &[RankedConference],
    future: &[RankedConference],
    title: &str,
) -> String {
    let mut lines: Vec<String> = vec![
        "<!DOCTYPE html>".to_string(),
        "<html lang=\"en\">".to_string(),
        "<head>".to_string(),
        "<meta http-equiv=\"Content-Type\" content=\"text/html; charset=utf-8\"/>".to_string(),
        format!("<title>{title}</title>"),
        "</head>".to_string(),
        "<body style=\"font-family: Verdana, Helvetica, sans-serif; margin: 1em; width: 780px\">"
            .to_string(),
    ];

    // A single running position keeps the row shading alternating across
    // section headings, matching entry order on the page.
    let mut position = 0;

    if !future.is_empty() {
        position += 1;
        lines.push(
            "<span style=\"font-size: larger; font-weight: bold\">Upcoming...</span>".to_string(),
        );
    }
    for conf in future {
        position += 1;
        lines.push(render_entry(conf, position, true));
    }

    if !past.is_empty() {
        position += 1;
        lines.push(
            "<span style=\"font-size: larger; font-weight: bold\">Past...</span>".to_string(),
        );
    }
    for conf in past {
        position += 1;
        lines.push(render_entry(conf, position, false));
    }

    lines.push("</body>".to_string());
    lines.push("</html>".to_string());
    lines.push(String::new());
    lines.join("\n")
}

/// Render one conference entry. `alert` enables highlighting of the chosen
/// field; it is only set for the upcoming section.
fn render_entry(conf: &RankedConference, position: usize, alert: bool) -> String {
    let background = if position % 2 == 0 {
        "background: #f4f4f4"
    } else {
        ""
    };

    let mut name = format!("<span style=\"font-style: italic\">{}</span>", conf.name);
    if let Some(url) = conf.record.url.as_deref() {
        if !url.is_empty() {
            name = format!("<a href=\"{url}\">{name}</a>");
        }
    }

    let begin = field_cell(conf, DeadlineKind::Begin, alert);
    let end = if conf.record.begin != conf.record.end {
        format!(" \u{2013} {}", field_cell(conf, DeadlineKind::End, alert))
    } else {
        String::new()
    };

    let submission = field_cell(conf, DeadlineKind::Submission, alert);
    let notification = field_cell(conf, DeadlineKind::Notification, alert);
    let camera_ready = field_cell(conf, DeadlineKind::CameraReady, alert);

    let location = &conf.record.location;
    let maps = maps_url(location);

    [
        format!(
            "<div style=\"margin-bottom: 0.5em;{background}\">{name} ({begin}{end}, <a href=\"{maps}\">{location}</a>)"
        ),
        "<br/>".to_string(),
        format!("<span style=\"font-size: smaller\">submission:</span> {submission} \u{2013}"),
        format!("<span style=\"font-size: smaller\">notification:</span> {notification} \u{2013}"),
        format!("<span style=\"font-size: smaller\">camera ready:</span> {camera_ready}"),
        "</div>".to_string(),
    ]
    .join("\n")
}

/// The raw field value, wrapped in a highlight span when it is the chosen
/// field of an alerted entry. Absent fields render as empty text.
fn field_cell(conf: &RankedConference, kind: DeadlineKind, alert: bool) -> String {
    let value = conf.record.field(kind).unwrap_or("");
    if alert && conf.selection.kind == kind {
        format!(
            "<span style=\"background: {}\">{}</span>",
            HIGHLIGHT[kind.index()],
            value
        )
    } else {
        value.to_string()
    }
}

/// Escapes everything in the maps query except unreserved characters and
/// '/', so spaces come out as %20 rather than '+'.
const MAPS_QUERY: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

fn maps_url(location: &str) -> String {
    format!(
        "http://maps.google.com/maps?q={}",
        utf8_percent_encode(location, MAPS_QUERY)
    )
}
