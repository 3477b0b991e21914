mod entries;
mod format;

pub(crate) use entries::{EntryTableOptions, output_entries_json, print_entries_table};
