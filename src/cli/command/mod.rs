pub mod folders;
pub mod index;
pub mod parse;
pub mod submissions;

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use chrono::{Datelike, Local};
pub use folders::folders;
pub use index::index;
pub use parse::parse;
pub use submissions::submissions;

pub fn make_parquet_file_name() -> PathBuf {
    let today = Local::now();
    let file_name = format!(
        "unfccc-index-{}-{:02}-{:02}.parquet",
        today.year(),
        today.month(),
        today.day()
    );

    dirs::home_dir().unwrap().join(file_name)
}

/// Trims and upper-cases a party argument, rejecting anything that is not a
/// three letter code.
pub fn normalise_party(party: &str) -> Result<String> {
    let code = party.trim().to_ascii_uppercase();
    if code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase()) {
        Ok(code)
    } else {
        Err(anyhow!(
            "invalid party code `{}`: expected a three letter code such as BLR",
            party
        ))
    }
}

// -- Tests -------------------------------------------------------------------
