//! Parse a single submission file name.

use anyhow::Result;

use crate::submission::SubmissionInfo;

/// Parses the file name and renders the record as pretty JSON. The
/// `version` key is present only for CRT style names.
pub fn parse(filename: &str) -> Result<String> {
    let info = SubmissionInfo::from_file_name(filename)?;

    Ok(serde_json::to_string_pretty(&info)?)
}

// -- Tests -------------------------------------------------------------------
