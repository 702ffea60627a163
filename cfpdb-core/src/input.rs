//! Conference database loading.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::conference::ConferenceRecord;
use crate::error::{CfpError, CfpResult};

/// The full conference database, keyed by conference name.
pub type ConferenceDb = BTreeMap<String, ConferenceRecord>;

/// Load and deserialize the conference database file.
pub fn load_conferences(path: &Path) -> CfpResult<ConferenceDb> {
    let text = fs::read_to_string(path)?;
    parse_conferences(&text)
}

/// Deserialize the conference database from raw file content.
pub fn parse_conferences(text: &str) -> CfpResult<ConferenceDb> {
    let document = extract_document(text)?;
    log::debug!("parsing {} bytes of conference YAML", document.len());
    Ok(serde_yaml::from_str(&document)?)
}

/// Cut the YAML document out of the file.
///
/// The database file must carry an explicit `%YAML 1.1` start line and a
/// `...` end marker; anything outside the markers (editing notes, trailing
/// scratch content) is ignored. A missing marker is a fatal input error.
fn extract_document(text: &str) -> CfpResult<String> {
    let lines: Vec<&str> = text.lines().collect();

    let start = lines
        .iter()
        .position(|line| line.trim_end() == "%YAML 1.1")
        .ok_or_else(|| CfpError::Input("no document start marker found".to_string()))?;
    let end = lines
        .iter()
        .rposition(|line| line.trim_end() == "...")
        .ok_or_else(|| CfpError::Input("no document end marker found".to_string()))?;

    if end < start {
        return Err(CfpError::Input(
            "document end marker precedes start marker".to_string(),
        ));
    }

    Ok(lines[start..=end].join("\n"))
}
