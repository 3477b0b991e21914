use std::io::{self, Read};

use crate::cli::{Cli, Commands};
use crate::error::AppError;
use crate::output::{EntryTableOptions, output_entries_json, print_entries_table};
use crate::store::Store;
use crate::ui::{EntryForm, StatusMenu};
use crate::utils::Timezone;

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) store: &'a Store,
    pub(crate) timezone: Timezone,
}

impl CommandContext<'_> {
    fn status(&self, message: &str) {
        if !self.cli.quiet {
            eprintln!("{message}");
        }
    }
}

/// Whether the `add` message comes from stdin instead of arguments
fn reads_stdin(message: &[String]) -> bool {
    message.is_empty() || (message.len() == 1 && message[0] == "-")
}

fn handle_add(
    message: &[String],
    project: Option<&str>,
    ctx: &CommandContext<'_>,
) -> Result<(), AppError> {
    let text = if reads_stdin(message) {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(AppError::Terminal)?;
        buf
    } else {
        message.join(" ")
    };

    if text.trim().is_empty() {
        ctx.status("Nothing to save (empty message).");
        return Ok(());
    }
    ctx.store.append(&text, project)?;
    ctx.status("Saved.");
    Ok(())
}

fn handle_new(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let mut form = EntryForm::new(ctx.store);
    form.prompt(&mut io::stdin().lock(), &mut io::stdout().lock())
        .map_err(AppError::Terminal)?;

    let empty = form.message().trim().is_empty();
    if let Err(e) = form.save() {
        eprintln!("Unsaved text:\n{}", form.message());
        return Err(e.into());
    }
    ctx.status(if empty {
        "Nothing to save (empty message)."
    } else {
        "Saved."
    });
    Ok(())
}

fn handle_menu(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    StatusMenu::new(ctx.store, ctx.cli.quiet).run(
        &mut io::stdin().lock(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )
}

fn handle_list(limit: Option<usize>, ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let entries = ctx.store.recent(limit)?;
    if ctx.cli.json {
        println!("{}", output_entries_json(&entries, ctx.timezone));
        return Ok(());
    }
    if entries.is_empty() {
        println!("No entries yet.");
        return Ok(());
    }
    print_entries_table(
        &entries,
        EntryTableOptions {
            use_color: ctx.cli.use_color(),
            timezone: ctx.timezone,
        },
    );
    Ok(())
}

fn handle_init(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let count = ctx.store.count()?;
    println!("{}", ctx.store.path().display());
    ctx.status(&format!("Log store ready ({count} stored)."));
    Ok(())
}

/// Dispatch the parsed command; no subcommand opens the menu
pub(crate) fn handle_command(
    command: Option<&Commands>,
    ctx: &CommandContext<'_>,
) -> Result<(), AppError> {
    match command {
        None | Some(Commands::Menu) => handle_menu(ctx),
        Some(Commands::New) => handle_new(ctx),
        Some(Commands::Add { message, project }) => handle_add(message, project.as_deref(), ctx),
        Some(Commands::List { limit }) => handle_list(*limit, ctx),
        Some(Commands::Init) => handle_init(ctx),
    }
}
