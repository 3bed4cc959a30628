use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for medcabinet
/// Terminal medicine cabinet over an in-memory prescription list
#[derive(Parser)]
#[command(
    name = "medcabinet",
    version = env!("CARGO_PKG_VERSION"),
    about = "A terminal medicine cabinet: browse, filter and manage your prescriptions",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Skip the low quantity check at startup
    #[arg(global = true, long = "no-alert")]
    pub no_alert: bool,

    /// Increase diagnostic output (-v info, -vv debug)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the prescriptions in the cabinet
    List {
        #[arg(long, short, help = "Show only this category (or All)")]
        category: Option<String>,

        #[arg(long, short, help = "Status filter: active, inactive or all")]
        status: Option<String>,

        #[arg(long = "json", help = "Print the list as JSON")]
        json: bool,

        #[arg(long = "cabinet", conflicts_with = "json", help = "Draw bottles on shelves")]
        cabinet: bool,
    },

    /// List the selectable categories
    Categories,

    /// Show the details of one prescription
    Show {
        /// Prescription id
        id: String,
    },

    /// Turn auto-refill on or off for an eligible prescription
    AutoRefill {
        /// Prescription id
        id: String,

        /// on | off
        state: String,
    },

    /// Delete a prescription after confirmation
    Del {
        /// Prescription id
        id: String,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Show prescriptions that are running low
    Alerts,

    /// View or create the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "init", help = "Write a default configuration file")]
        init: bool,

        #[arg(long = "force", requires = "init", help = "Overwrite an existing file")]
        force: bool,
    },

    /// Start an interactive session
    Shell,
}
