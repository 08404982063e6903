use clap::{Parser, Subcommand, command};

#[derive(Parser)]
#[command()]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the people data file
    CreateFile {
        /// The number of people in the CSV file
        number_rows: u32,
    },
    /// Build the full-name roster from the data file
    BuildRoster,
}
