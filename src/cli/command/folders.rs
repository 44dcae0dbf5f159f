//! Create the folder to party code mapping.

use std::path::Path;

use anyhow::Result;

use crate::{
    cli::create_spinner,
    folders::{create_folder_mapping, MAPPING_FILE_NAME},
};

pub fn folders(folder: &Path, force: bool) -> Result<String> {
    let bar = create_spinner("Mapping folders...".to_string());
    let mapping = create_folder_mapping(folder, force)?;
    bar.finish_with_message(format!("{} folders mapped", mapping.len()));

    let mapping_path = folder.join(MAPPING_FILE_NAME);

    Ok(mapping_path.to_string_lossy().to_string())
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod test {

    use std::fs::{self, File};

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn should_write_mapping_file() {
        let tmp_dir = TempDir::new().unwrap();
        let root = tmp_dir.path();

        fs::create_dir(root.join("Belarus")).unwrap();
        File::create(root.join("Belarus/BLR_2021_1990_30032021_192048.xlsx")).unwrap();

        let mapping_path = folders(root, false).unwrap();

        let json = fs::read_to_string(mapping_path).unwrap();
        assert!(json.contains("\"Belarus\""));
        assert!(json.contains("\"BLR\""));
    }
}
