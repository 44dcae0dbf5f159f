//! Submission records and filtering.

pub mod filename;

use std::path::PathBuf;

pub use filename::{FormatError, SubmissionInfo};

/// A parsed submission file name together with its location relative to the
/// scanned root.
#[derive(Debug, Clone)]
pub struct SubmissionFile {
    pub info: SubmissionInfo,
    pub path: PathBuf,
}

impl SubmissionFile {
    pub fn matches(&self, party: Option<&str>, submission_year: Option<u16>) -> bool {
        party.map_or(true, |p| self.info.party == p)
            && submission_year.map_or(true, |y| self.info.submission_year == y)
    }
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {

    use super::*;

    fn file_fixture(name: &str) -> SubmissionFile {
        SubmissionFile {
            info: SubmissionInfo::from_file_name(name).unwrap(),
            path: PathBuf::from(name),
        }
    }

    #[test]
    fn should_match_party_and_year() {
        let file = file_fixture("BLR_2021_1990_30032021_192048.xlsx");

        assert!(file.matches(None, None));
        assert!(file.matches(Some("BLR"), None));
        assert!(file.matches(Some("BLR"), Some(2021)));
        assert!(file.matches(None, Some(2021)));
        assert!(!file.matches(Some("GUY"), None));
        assert!(!file.matches(Some("BLR"), Some(2022)));
    }
}
