//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigColorMode};
use crate::store::Store;

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Debug, Parser)]
#[command(name = "braglog")]
#[command(about = "Jot down what you shipped, one brag at a time", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Path to the SQLite log store
    #[arg(long, global = true, env = "BRAGLOG_DB", value_name = "PATH")]
    pub(crate) db: Option<PathBuf>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Timezone for displaying entry times (e.g., "UTC", "Europe/Berlin")
    #[arg(long, global = true, value_name = "TZ")]
    pub(crate) timezone: Option<String>,

    /// Enable debug output (show store operations)
    #[arg(long, global = true)]
    pub(crate) debug: bool,

    /// Suppress status messages on stderr
    #[arg(short, long, global = true)]
    pub(crate) quiet: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }
        if !self.quiet && config.quiet {
            self.quiet = true;
        }

        if let Some(color) = config.color
            && self.color == ColorMode::Auto
        {
            self.color = match color {
                ConfigColorMode::Auto => ColorMode::Auto,
                ConfigColorMode::Always => ColorMode::Always,
                ConfigColorMode::Never => ColorMode::Never,
            };
        }

        if self.db.is_none() {
            self.db = config.db_path.clone();
        }
        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }

        self
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }

    /// Resolved store location: `--db`, then config, then the platform default
    pub(crate) fn db_path(&self) -> PathBuf {
        self.db.clone().unwrap_or_else(Store::default_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("braglog").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_subcommand_parses() {
        let cli = parse(&[]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn add_collects_words_and_project() {
        let cli = parse(&["add", "Shipped", "feature", "X", "-p", "ProjA"]);
        match cli.command {
            Some(Commands::Add { message, project }) => {
                assert_eq!(message, ["Shipped", "feature", "X"]);
                assert_eq!(project.as_deref(), Some("ProjA"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["list", "-n", "5", "--json", "--db", "/tmp/x.db"]);
        assert!(cli.json);
        assert_eq!(cli.db, Some(PathBuf::from("/tmp/x.db")));
        assert!(matches!(cli.command, Some(Commands::List { limit: Some(5) })));
    }

    #[test]
    fn list_limit_must_be_positive() {
        let zero = Cli::try_parse_from(["braglog", "list", "-n", "0"]);
        assert!(zero.is_err());

        let cli = parse(&["list", "--limit", "1"]);
        assert!(matches!(cli.command, Some(Commands::List { limit: Some(1) })));
    }

    #[test]
    fn config_fills_unset_values() {
        let config = Config {
            db_path: Some(PathBuf::from("/data/log.db")),
            color: Some(ConfigColorMode::Never),
            timezone: Some("UTC".to_string()),
            debug: true,
            ..Config::default()
        };
        let cli = parse(&["--db", "/cli/log.db"]).with_config(&config);

        assert_eq!(cli.db_path(), PathBuf::from("/cli/log.db"));
        assert_eq!(cli.color, ColorMode::Never);
        assert_eq!(cli.timezone.as_deref(), Some("UTC"));
        assert!(cli.debug);
    }

    #[test]
    fn explicit_color_beats_config() {
        let config = Config {
            color: Some(ConfigColorMode::Never),
            ..Config::default()
        };
        let cli = parse(&["--color", "always"]).with_config(&config);
        assert!(cli.use_color());
    }

    #[test]
    fn no_color_wins() {
        let cli = parse(&["--color", "always", "--no-color"]);
        assert!(!cli.use_color());
    }
}
