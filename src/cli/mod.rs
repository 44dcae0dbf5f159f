//! Command line interface.

pub mod command;

use std::path::PathBuf;
use std::time::Duration;

use clap::{command, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

#[derive(Parser)]
#[command(version, about, long_about = None)]
/// Contains the commands
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a submission file name and print the record
    Parse {
        /// File name following the CRF or CRT naming convention
        filename: String,
    },
    /// Build a parquet index of the submission files in a folder
    Index {
        /// Folder holding the downloaded submission files
        folder: PathBuf,
        /// Only index submissions of this party, e.g. BLR
        #[arg(long)]
        party: Option<String>,
        /// Only index submissions of this submission year
        #[arg(long)]
        submission_year: Option<u16>,
        /// Where to write the parquet file
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Map download folders to the party codes they contain
    Folders {
        /// Folder whose sub-folders hold the submission files
        folder: PathBuf,
        /// Overwrite an existing mapping file
        #[arg(long)]
        force: bool,
    },
    /// List the submissions of one party
    Submissions {
        /// Folder holding the downloaded submission files
        folder: PathBuf,
        /// Three letter party code, e.g. BLR
        party: String,
        /// Only list submissions of this submission year
        #[arg(long)]
        submission_year: Option<u16>,
    },
}

/// Creates a spinner.
pub fn create_spinner(message: String) -> ProgressBar {
    let bar = ProgressBar::new_spinner().with_message(message);
    bar.enable_steady_tick(Duration::from_millis(100));

    bar
}

/// Creates a progress bar.
pub fn create_progress_bar(size: u64, message: String) -> ProgressBar {
    ProgressBar::new(size).with_message(message).with_style(
        ProgressStyle::with_template("[{eta_precise}] {bar:40.cyan/blue} {msg}")
            .unwrap()
            .progress_chars("##-"),
    )
}
