//! Build a parquet index of the submission files in a folder.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};

use crate::{
    parquet,
    scan::scan_submissions,
    submission::SubmissionFile,
};

use super::{make_parquet_file_name, normalise_party};

pub async fn index(
    folder: &Path,
    party: Option<&str>,
    submission_year: Option<u16>,
    output: Option<PathBuf>,
) -> Result<String> {
    let party = party.map(normalise_party).transpose()?;

    let outcome = scan_submissions(folder).await?;
    report_skipped(&outcome.skipped);

    let files: Vec<SubmissionFile> = outcome
        .files
        .into_iter()
        .filter(|f| f.matches(party.as_deref(), submission_year))
        .collect();

    if files.is_empty() {
        return Err(anyhow!(
            "no matching submission files found in `{}`",
            folder.display()
        ));
    }

    let parquet_file_name = output.unwrap_or_else(make_parquet_file_name);
    parquet::save_inventory(&files, &parquet_file_name)?;

    Ok(parquet_file_name.to_string_lossy().to_string())
}

fn report_skipped(skipped: &[(PathBuf, String)]) {
    for (path, reason) in skipped {
        eprintln!("Skipping `{}`: {}", path.display(), reason);
    }
}

// -- Tests -------------------------------------------------------------------
