//! CLI subcommand definitions

use clap::Subcommand;

/// Main CLI commands
#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Open the status menu: New Entry / Quit (default)
    Menu,
    /// Open the entry form once
    New,
    /// Append an entry without prompting
    Add {
        /// Entry text; words are joined with spaces. Omit or use "-" to read stdin
        #[arg(value_name = "MESSAGE")]
        message: Vec<String>,

        /// Optional project tag
        #[arg(short, long)]
        project: Option<String>,
    },
    /// Show recent entries, newest first
    List {
        /// Show at most this many entries
        #[arg(
            short = 'n',
            long,
            value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
        )]
        limit: Option<usize>,
    },
    /// Create the log store if missing and print its location
    Init,
}
