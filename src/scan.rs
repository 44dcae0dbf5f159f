//! Walks a folder of submission files and parses every file name.

use std::fs;
use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use anyhow::Result;
use futures::future::join_all;
use indicatif::{ProgressBar, ProgressStyle};

use crate::folders::MAPPING_FILE_NAME;
use crate::submission::{SubmissionFile, SubmissionInfo};

/// Result of a folder scan. Files whose names match neither naming
/// convention end up in `skipped` with their failure reason.
#[derive(Debug)]
pub struct ScanOutcome {
    pub files: Vec<SubmissionFile>,
    pub skipped: Vec<(PathBuf, String)>,
}

/// Scan a folder tree for submission files and parse their names.
pub async fn scan_submissions(root: &Path) -> Result<ScanOutcome> {
    let candidates = collect_files(root)?;

    let progress_bar = Arc::new(Mutex::new(
        ProgressBar::new(candidates.len() as u64).with_message("Parsing file names"),
    ));
    progress_bar.lock().unwrap().set_style(
        ProgressStyle::with_template("[{eta_precise}] {bar:40.cyan/blue} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    let tasks: Vec<_> = candidates
        .into_iter()
        .map(|path| {
            let root = root.to_path_buf();
            let pb = Arc::clone(&progress_bar);
            tokio::spawn(async move { parse_entry(&root, path, pb) })
        })
        .collect();

    let mut files = Vec::new();
    let mut skipped = Vec::new();
    for result in join_all(tasks).await {
        match result {
            Ok(Ok(file)) => files.push(file),
            Ok(Err(skip)) => skipped.push(skip),
            Err(e) => eprintln!("Task join error: {:?}", e),
        }
    }
    progress_bar
        .lock()
        .unwrap()
        .finish_with_message("File names parsed");

    files.sort_by(|a, b| {
        a.info
            .party
            .cmp(&b.info.party)
            .then_with(|| a.info.submission_year.cmp(&b.info.submission_year))
            .then_with(|| a.info.data_year.cmp(&b.info.data_year))
            .then_with(|| a.path.cmp(&b.path))
    });
    skipped.sort();

    Ok(ScanOutcome { files, skipped })
}

fn parse_entry(
    root: &Path,
    path: PathBuf,
    progress_bar: Arc<Mutex<ProgressBar>>,
) -> Result<SubmissionFile, (PathBuf, String)> {
    let relative = path.strip_prefix(root).unwrap_or(&path).to_path_buf();

    let result = match path.file_name().and_then(|n| n.to_str()) {
        Some(name) => match SubmissionInfo::from_file_name(name) {
            Ok(info) => Ok(SubmissionFile {
                info,
                path: relative.clone(),
            }),
            Err(e) => Err((relative, e.kind.to_string())),
        },
        None => Err((relative, "file name is not valid unicode".to_string())),
    };

    {
        let pb = progress_bar.lock().unwrap();
        pb.inc(1);
    }

    result
}

// Collects candidate files, ignoring hidden entries and the mapping file.
fn collect_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    walk(root, &mut files)?;
    Ok(files)
}

fn walk(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let name = entry.file_name();
        let name = name.to_string_lossy();

        if name.starts_with('.') || name == MAPPING_FILE_NAME {
            continue;
        }
        if path.is_dir() {
            walk(&path, files)?;
        } else {
            files.push(path);
        }
    }

    Ok(())
}

// -- Tests -------------------------------------------------------------------
