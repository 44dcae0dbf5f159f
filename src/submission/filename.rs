//! Submission file name parsing.
//!
//! Two naming conventions are in circulation. Legacy CRF files are
//! underscore separated (`BLR_2021_1990_30032021_192048.xlsx`), newer CRT
//! files are hyphen separated and carry a version tag
//! (`GUY-CRT-2024-V0.3-1992-20240927-191031_started.xlsx`).

use std::fmt;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionInfo {
    pub party: String,
    pub submission_year: u16,
    pub data_year: u16,
    pub date: String,
    pub extra: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognised submission file name `{file_name}`: {kind}")]
pub struct FormatError {
    pub file_name: String,
    pub kind: FormatErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatErrorKind {
    /// Wrong number of separator delimited fields.
    TokenCount {
        separator: char,
        expected: usize,
        found: usize,
    },
    /// A hyphenated name without the literal `CRT` marker in second position.
    MissingMarker,
    /// A positional field that failed validation.
    Field { field: &'static str, token: String },
}

impl fmt::Display for FormatErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatErrorKind::TokenCount {
                separator,
                expected,
                found,
            } => write!(
                f,
                "expected at least {} `{}` separated fields, found {}",
                expected, separator, found
            ),
            FormatErrorKind::MissingMarker => write!(f, "missing `CRT` marker in second field"),
            FormatErrorKind::Field { field, token } => {
                write!(f, "invalid {} field `{}`", field, token)
            }
        }
    }
}

impl SubmissionInfo {
    /// Parses a submission file name into its structured fields.
    ///
    /// A leading directory path is ignored and the extension is stripped on
    /// the last dot. `version` is populated exactly when the name follows
    /// the CRT convention.
    pub fn from_file_name(name: &str) -> Result<Self, FormatError> {
        let base = Path::new(name)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(name);
        let stem = strip_extension(base);

        if stem.contains("-CRT-") {
            Self::from_crt_stem(stem, name)
        } else {
            Self::from_crf_stem(stem, name)
        }
    }

    /// Legacy convention: `{party}_{submission_year}_{data_year}_{date}_{extra}`.
    fn from_crf_stem(stem: &str, name: &str) -> Result<Self, FormatError> {
        let tokens: Vec<&str> = stem.split('_').collect();
        if tokens.len() < 5 {
            return Err(fail(
                name,
                FormatErrorKind::TokenCount {
                    separator: '_',
                    expected: 5,
                    found: tokens.len(),
                },
            ));
        }

        Ok(SubmissionInfo {
            party: parse_party(tokens[0], name)?,
            submission_year: parse_year(tokens[1], "submission year", name)?,
            data_year: parse_year(tokens[2], "data year", name)?,
            date: parse_date(tokens[3], name)?,
            extra: tokens[4..].join("_"),
            version: None,
        })
    }

    /// CRT convention:
    /// `{party}-CRT-{submission_year}-V{maj}.{min}-{data_year}-{date}-{extra}`.
    fn from_crt_stem(stem: &str, name: &str) -> Result<Self, FormatError> {
        let tokens: Vec<&str> = stem.split('-').collect();
        if tokens.len() < 7 {
            return Err(fail(
                name,
                FormatErrorKind::TokenCount {
                    separator: '-',
                    expected: 7,
                    found: tokens.len(),
                },
            ));
        }
        if tokens[1] != "CRT" {
            return Err(fail(name, FormatErrorKind::MissingMarker));
        }
        if !is_version(tokens[3]) {
            return Err(fail(
                name,
                FormatErrorKind::Field {
                    field: "version",
                    token: tokens[3].to_string(),
                },
            ));
        }

        Ok(SubmissionInfo {
            party: parse_party(tokens[0], name)?,
            submission_year: parse_year(tokens[2], "submission year", name)?,
            data_year: parse_year(tokens[4], "data year", name)?,
            date: parse_date(tokens[5], name)?,
            extra: tokens[6..].join("-"),
            version: Some(tokens[3].to_string()),
        })
    }

    /// Re-serializes the positional fields in file name order, without the
    /// extension. Parsing the result yields an equal record.
    pub fn file_stem(&self) -> String {
        match &self.version {
            Some(version) => format!(
                "{}-CRT-{}-{}-{}-{}-{}",
                self.party, self.submission_year, version, self.data_year, self.date, self.extra
            ),
            None => format!(
                "{}_{}_{}_{}_{}",
                self.party, self.submission_year, self.data_year, self.date, self.extra
            ),
        }
    }
}

// Strips the extension on the last dot, but only when the trailing segment
// looks like one. A CRT name arriving without an extension keeps the dot of
// its `V0.3` version token intact.
fn strip_extension(base: &str) -> &str {
    match base.rsplit_once('.') {
        Some((stem, ext)) if !ext.is_empty() && ext.bytes().all(|b| b.is_ascii_alphanumeric()) => {
            stem
        }
        _ => base,
    }
}

fn fail(name: &str, kind: FormatErrorKind) -> FormatError {
    FormatError {
        file_name: name.to_string(),
        kind,
    }
}

fn parse_party(token: &str, name: &str) -> Result<String, FormatError> {
    if token.len() == 3 && token.bytes().all(|b| b.is_ascii_alphabetic()) {
        Ok(token.to_ascii_uppercase())
    } else {
        Err(fail(
            name,
            FormatErrorKind::Field {
                field: "party",
                token: token.to_string(),
            },
        ))
    }
}

fn parse_year(token: &str, field: &'static str, name: &str) -> Result<u16, FormatError> {
    if token.len() == 4 && token.bytes().all(|b| b.is_ascii_digit()) {
        // Four ascii digits always fit a u16
        Ok(token.parse().unwrap())
    } else {
        Err(fail(
            name,
            FormatErrorKind::Field {
                field,
                token: token.to_string(),
            },
        ))
    }
}

// The date field stays a string to preserve leading zeros.
fn parse_date(token: &str, name: &str) -> Result<String, FormatError> {
    if token.len() == 8 && token.bytes().all(|b| b.is_ascii_digit()) {
        Ok(token.to_string())
    } else {
        Err(fail(
            name,
            FormatErrorKind::Field {
                field: "date",
                token: token.to_string(),
            },
        ))
    }
}

fn is_version(token: &str) -> bool {
    let Some(rest) = token.strip_prefix('V') else {
        return false;
    };
    let Some((major, minor)) = rest.split_once('.') else {
        return false;
    };
    !major.is_empty()
        && !minor.is_empty()
        && major.bytes().all(|b| b.is_ascii_digit())
        && minor.bytes().all(|b| b.is_ascii_digit())
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn should_parse_crf_file_name() {
        let info = SubmissionInfo::from_file_name("BLR_2021_1990_30032021_192048.xlsx").unwrap();

        assert_eq!(info.party, "BLR");
        assert_eq!(info.submission_year, 2021);
        assert_eq!(info.data_year, 1990);
        assert_eq!(info.date, "30032021");
        assert_eq!(info.extra, "192048");
        assert_eq!(info.version, None);
    }

    #[test]
    fn should_parse_crt_file_name() {
        let info =
            SubmissionInfo::from_file_name("GUY-CRT-2024-V0.3-1992-20240927-191031_started.xlsx")
                .unwrap();

        assert_eq!(info.party, "GUY");
        assert_eq!(info.submission_year, 2024);
        assert_eq!(info.data_year, 1992);
        assert_eq!(info.date, "20240927");
        assert_eq!(info.extra, "191031_started");
        assert_eq!(info.version, Some("V0.3".to_string()));
    }

    #[test]
    fn should_strip_leading_path() {
        let info =
            SubmissionInfo::from_file_name("downloads/belarus/BLR_2021_1990_30032021_192048.xlsx")
                .unwrap();

        assert_eq!(info.party, "BLR");
    }

    #[test]
    fn should_parse_without_extension() {
        let info = SubmissionInfo::from_file_name("BLR_2021_1990_30032021_192048").unwrap();
        assert_eq!(info.extra, "192048");

        // The version dot must not be mistaken for an extension separator
        let info =
            SubmissionInfo::from_file_name("GUY-CRT-2024-V0.3-1992-20240927-191031_started")
                .unwrap();
        assert_eq!(info.version, Some("V0.3".to_string()));
        assert_eq!(info.extra, "191031_started");
    }

    #[test]
    fn should_strip_extension_on_last_dot() {
        let info =
            SubmissionInfo::from_file_name("BLR_2021_1990_30032021_192048.backup.xlsx").unwrap();

        assert_eq!(info.date, "30032021");
        assert_eq!(info.extra, "192048.backup");
    }

    #[test]
    fn should_keep_multi_token_extra() {
        let info =
            SubmissionInfo::from_file_name("AUS_2023_2005_12052023_air_con_recalc.xlsx").unwrap();
        assert_eq!(info.extra, "air_con_recalc");

        let info = SubmissionInfo::from_file_name(
            "GUY-CRT-2024-V0.3-1992-20240927-191031-re_submitted.xlsx",
        )
        .unwrap();
        assert_eq!(info.extra, "191031-re_submitted");
    }

    #[test]
    fn should_round_trip() {
        for name in [
            "BLR_2021_1990_30032021_192048.xlsx",
            "GUY-CRT-2024-V0.3-1992-20240927-191031_started.xlsx",
        ] {
            let info = SubmissionInfo::from_file_name(name).unwrap();
            let reparsed = SubmissionInfo::from_file_name(&info.file_stem()).unwrap();
            assert_eq!(info, reparsed);
        }
    }

    #[test]
    fn should_reject_invalid_name() {
        let err = SubmissionInfo::from_file_name("not_a_valid_name.xlsx").unwrap_err();

        assert_eq!(err.file_name, "not_a_valid_name.xlsx");
        assert_eq!(
            err.kind,
            FormatErrorKind::TokenCount {
                separator: '_',
                expected: 5,
                found: 4
            }
        );
    }

    #[test]
    fn should_reject_non_numeric_year() {
        let err = SubmissionInfo::from_file_name("BLR_20x1_1990_30032021_192048.xlsx").unwrap_err();
        assert_eq!(
            err.kind,
            FormatErrorKind::Field {
                field: "submission year",
                token: "20x1".to_string()
            }
        );

        let err = SubmissionInfo::from_file_name("BLR_2021_1990_300321_192048.xlsx").unwrap_err();
        assert_eq!(
            err.kind,
            FormatErrorKind::Field {
                field: "date",
                token: "300321".to_string()
            }
        );
    }

    #[test]
    fn should_reject_bad_party() {
        let err =
            SubmissionInfo::from_file_name("BLRX_2021_1990_30032021_192048.xlsx").unwrap_err();
        assert_eq!(
            err.kind,
            FormatErrorKind::Field {
                field: "party",
                token: "BLRX".to_string()
            }
        );
    }

    #[test]
    fn should_reject_bad_version() {
        let err =
            SubmissionInfo::from_file_name("GUY-CRT-2024-V03-1992-20240927-191031.xlsx")
                .unwrap_err();
        assert_eq!(
            err.kind,
            FormatErrorKind::Field {
                field: "version",
                token: "V03".to_string()
            }
        );
    }

    #[test]
    fn should_reject_short_crt_name() {
        let err = SubmissionInfo::from_file_name("GUY-CRT-2024-V0.3-1992.xlsx").unwrap_err();
        assert_eq!(
            err.kind,
            FormatErrorKind::TokenCount {
                separator: '-',
                expected: 7,
                found: 5
            }
        );
    }

    #[test]
    fn should_format_error_message() {
        let err = SubmissionInfo::from_file_name("not_a_valid_name.xlsx").unwrap_err();
        assert_eq!(
            err.to_string(),
            "unrecognised submission file name `not_a_valid_name.xlsx`: \
             expected at least 5 `_` separated fields, found 4"
        );
    }
}
