mod app;
mod cli;
mod config;
mod consts;
mod error;
mod output;
mod store;
mod ui;
mod utils;

use clap::Parser;

use app::{CommandContext, handle_command};
use cli::Cli;
use config::Config;
use error::AppError;
use store::Store;
use utils::{Timezone, debug_log, set_debug};

fn run(cli: &Cli) -> Result<(), AppError> {
    let timezone = Timezone::parse(cli.timezone.as_deref())?;

    let store = Store::new(cli.db_path());
    debug_log(format_args!("using store {}", store.path().display()));
    store.ensure()?;

    let ctx = CommandContext {
        cli,
        store: &store,
        timezone,
    };
    handle_command(cli.command.as_ref(), &ctx)
}

fn main() {
    let cli = Cli::parse();

    let config = if cli.quiet {
        Config::load_quiet()
    } else {
        Config::load()
    };
    let cli = cli.with_config(&config);
    set_debug(cli.debug);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
