//! List the submissions of one party.

use std::path::Path;

use anyhow::Result;

use crate::{scan::scan_submissions, submission::SubmissionFile};

use super::normalise_party;

pub async fn submissions(
    folder: &Path,
    party: &str,
    submission_year: Option<u16>,
) -> Result<String> {
    let party = normalise_party(party)?;

    let outcome = scan_submissions(folder).await?;
    let files: Vec<_> = outcome
        .files
        .iter()
        .filter(|f| f.matches(Some(&party), submission_year))
        .collect();

    for file in &files {
        println!("{}", describe(file));
    }

    Ok(format!("{} submissions for {}", files.len(), party))
}

fn describe(file: &SubmissionFile) -> String {
    let version = file.info.version.as_deref().unwrap_or("-");
    format!(
        "{} {} data year {} {} {} {}",
        file.info.party,
        file.info.submission_year,
        file.info.data_year,
        version,
        file.info.date,
        file.path.display()
    )
}

// -- Tests -------------------------------------------------------------------
