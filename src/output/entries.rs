use comfy_table::Color;

use crate::output::format::{
    create_styled_table, entry_count_label, header_cell, right_cell, styled_cell,
};
use crate::store::LogEntry;
use crate::utils::Timezone;

#[derive(Debug, Clone, Copy)]
pub(crate) struct EntryTableOptions {
    pub(crate) use_color: bool,
    pub(crate) timezone: Timezone,
}

/// Placeholder shown for entries without a project tag
const NO_PROJECT: &str = "-";

pub(crate) fn print_entries_table(entries: &[LogEntry], opts: EntryTableOptions) {
    println!("{}", render_entries_table(entries, opts));
}

fn render_entries_table(entries: &[LogEntry], opts: EntryTableOptions) -> String {
    let c = opts.use_color;
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("#", c),
        header_cell("When", c),
        header_cell("Project", c),
        header_cell("Entry", c),
    ]);

    let dim = if c { Some(Color::DarkGrey) } else { None };
    let tag = if c { Some(Color::Green) } else { None };

    for entry in entries {
        let project = entry.project.as_deref().unwrap_or(NO_PROJECT);
        table.add_row(vec![
            right_cell(&entry.id.to_string(), dim),
            styled_cell(&opts.timezone.format_short(entry.created_at), dim, false),
            styled_cell(project, tag, entry.project.is_some()),
            styled_cell(&entry.message, None, false),
        ]);
    }

    format!(
        "\n  Brag Log\n\n{table}\n\n  {}\n",
        entry_count_label(entries.len())
    )
}

pub(crate) fn output_entries_json(entries: &[LogEntry], timezone: Timezone) -> String {
    let output: Vec<serde_json::Value> = entries
        .iter()
        .map(|entry| {
            serde_json::json!({
                "id": entry.id,
                "message": entry.message,
                "project": entry.project,
                "created_at": timezone.format_rfc3339(entry.created_at),
            })
        })
        .collect();

    serde_json::to_string_pretty(&output).unwrap_or_else(|e| {
        eprintln!("Failed to serialize JSON output: {}", e);
        "[]".to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn entry(id: i64, message: &str, project: Option<&str>) -> LogEntry {
        LogEntry {
            id,
            message: message.to_string(),
            project: project.map(str::to_string),
            created_at: "2026-03-01T09:30:00Z".parse::<DateTime<Utc>>().unwrap(),
        }
    }

    fn utc_opts() -> EntryTableOptions {
        EntryTableOptions {
            use_color: false,
            timezone: Timezone::Named(chrono_tz::UTC),
        }
    }

    #[test]
    fn table_lists_entries_and_count() {
        let entries = vec![
            entry(2, "Fixed bug", None),
            entry(1, "Shipped feature X", Some("ProjA")),
        ];
        let out = render_entries_table(&entries, utc_opts());

        assert!(out.contains("Brag Log"));
        assert!(out.contains("Shipped feature X"));
        assert!(out.contains("ProjA"));
        assert!(out.contains("2026-03-01 09:30"));
        assert!(out.contains("2 entries"));
    }

    #[test]
    fn table_marks_missing_project() {
        let out = render_entries_table(&[entry(1, "Fixed bug", None)], utc_opts());
        assert!(out.contains(&format!(" {NO_PROJECT} ")));
        assert!(out.contains("1 entry"));
    }

    #[test]
    fn json_keeps_null_project() {
        let json = output_entries_json(
            &[entry(7, "Fixed bug", None)],
            Timezone::Named(chrono_tz::UTC),
        );
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let arr = value.as_array().unwrap();
        assert_eq!(arr.len(), 1);
        assert_eq!(arr[0]["id"].as_i64(), Some(7));
        assert_eq!(arr[0]["message"].as_str(), Some("Fixed bug"));
        assert!(arr[0]["project"].is_null());
        assert_eq!(arr[0]["created_at"].as_str(), Some("2026-03-01T09:30:00+00:00"));
    }

    #[test]
    fn json_empty_is_empty_array() {
        let json = output_entries_json(&[], Timezone::Named(chrono_tz::UTC));
        assert_eq!(json, "[]");
    }
}
