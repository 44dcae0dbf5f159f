mod cli;
mod folders;
mod parquet;
mod scan;
mod submission;

use std::process;

use anyhow::{Error, Result};
use clap::Parser;
use cli::{command, Cli, Commands};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Parse { filename } => match command::parse(filename) {
            Ok(record) => println!("{}", record),
            Err(e) => fail(e),
        },
        Commands::Index {
            folder,
            party,
            submission_year,
            output,
        } => match command::index(folder, party.as_deref(), *submission_year, output.clone()).await
        {
            Ok(filename) => println!("File saved to `{}`", filename),
            Err(e) => fail(e),
        },
        Commands::Folders { folder, force } => match command::folders(folder, *force) {
            Ok(filename) => println!("Mapping saved to `{}`", filename),
            Err(e) => fail(e),
        },
        Commands::Submissions {
            folder,
            party,
            submission_year,
        } => match command::submissions(folder, party, *submission_year).await {
            Ok(summary) => println!("{}", summary),
            Err(e) => fail(e),
        },
    }

    Ok(())
}

fn fail(e: Error) -> ! {
    eprintln!("Error: {}", e);
    process::exit(1);
}
