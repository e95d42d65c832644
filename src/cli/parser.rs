use clap::{Parser, Subcommand};

/// Command-line interface definition for jornada
/// CLI to validate driver day blocks, build the confirmation table and
/// submit it to the journey store
#[derive(Parser)]
#[command(
    name = "jornada",
    version = env!("CARGO_PKG_VERSION"),
    about = "Driver journey analysis: validate day blocks, derive driving-time metrics and reconcile them with persisted records",
    long_about = None
)]
pub struct Cli {
    /// Override the store directory (useful for tests or a custom store)
    #[arg(global = true, long = "store")]
    pub store: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and the store directory
    Init,

    /// Manage the configuration file
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Validate the day blocks of an entry file without touching the store
    Validate {
        /// Entry file (JSON) with the page of day blocks
        file: String,
    },

    /// Build and print the confirmation table (new days merged with
    /// persisted records)
    Table {
        /// Entry file (JSON) with the page of day blocks
        file: String,
    },

    /// Build the confirmation table and save the new rows to the store
    Submit {
        /// Entry file (JSON) with the page of day blocks
        file: String,

        /// Replace conflicting records without asking
        #[arg(long = "yes", help = "Assume yes on the conflict confirmation")]
        assume_yes: bool,
    },
}
