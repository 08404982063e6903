use anyhow::Result;
use clap::Parser;

mod commands;

use commands::{Args, Commands};
use person_roster::roster;

const DATA_DIR: &str = "./data";
const FILE_NAME: &str = "./data/people.csv";
const ROSTER_NAME: &str = "./data/roster.txt";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Args::parse();
    match cli.command {
        Some(Commands::CreateFile { number_rows }) => {
            tokio::fs::create_dir_all(DATA_DIR).await?;
            roster::create_csv(FILE_NAME, number_rows).await?
        }
        Some(Commands::BuildRoster) => roster::build_roster(FILE_NAME, ROSTER_NAME).await?,
        None => {
            println!("Run with --help to see instructions");
        }
    }

    Ok(())
}
