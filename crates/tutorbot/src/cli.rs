use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tutorbot")]
#[command(author, version, about = "Telegram bot that hands out theory and practice documents per topic", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the bot (long polling)
    Run,

    /// Print the topic catalog and report duplicate titles or keys
    Topics {
        /// Print the catalog as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
