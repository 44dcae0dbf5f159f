//! Maps download folders to the party codes of the submissions they hold.

use std::{
    collections::{BTreeMap, BTreeSet},
    fs,
    path::Path,
};

use anyhow::{anyhow, Result};

use crate::submission::SubmissionInfo;

pub const MAPPING_FILE_NAME: &str = "folder-mapping.json";

/// Folder name to the sorted party codes found inside it.
pub type FolderMapping = BTreeMap<String, Vec<String>>;

/// Builds the mapping for every sub-folder of `root` and writes it to
/// `folder-mapping.json` inside `root`. An existing mapping file is only
/// overwritten when `force` is set.
pub fn create_folder_mapping(root: &Path, force: bool) -> Result<FolderMapping> {
    let mapping_path = root.join(MAPPING_FILE_NAME);
    if mapping_path.exists() && !force {
        return Err(anyhow!(
            "mapping file `{}` already exists, pass --force to overwrite it",
            mapping_path.display()
        ));
    }

    let mut mapping = FolderMapping::new();
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().to_string();

        if path.is_dir() && !name.starts_with('.') {
            mapping.insert(name, parties_in_folder(&path)?);
        }
    }

    let json = serde_json::to_string_pretty(&mapping)?;
    fs::write(&mapping_path, json)?;

    Ok(mapping)
}

// Party codes are taken from the parseable file names, not the folder name.
fn parties_in_folder(dir: &Path) -> Result<Vec<String>> {
    let mut parties = BTreeSet::new();
    collect_parties(dir, &mut parties)?;

    Ok(parties.into_iter().collect())
}

fn collect_parties(dir: &Path, parties: &mut BTreeSet<String>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            collect_parties(&path, parties)?;
        } else if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if let Ok(info) = SubmissionInfo::from_file_name(name) {
                parties.insert(info.party);
            }
        }
    }

    Ok(())
}

// -- Tests -------------------------------------------------------------------
