use comfy_table::Cell;

use super::format::{create_styled_table, header_cell, one_line, status_cell};
use crate::app::{Mode, Preview, RunSummary};
use crate::consts::DATE_FORMAT;

pub(crate) fn output_run_json(summary: &RunSummary) -> String {
    serde_json::to_string_pretty(summary).unwrap_or_else(|_| "{}".to_string())
}

pub(crate) fn output_preview_json(preview: &Preview) -> String {
    serde_json::to_string_pretty(preview).unwrap_or_else(|_| "{}".to_string())
}

fn run_rows(summary: &RunSummary) -> Vec<(&'static str, String)> {
    let mode = match summary.mode {
        Mode::Verse => "verse",
        Mode::Prayer => "prayer",
    };
    let mut rows = vec![
        ("Mode", mode.to_string()),
        ("Date", summary.date.format(DATE_FORMAT).to_string()),
    ];
    if let Some(slot) = summary.slot {
        rows.push(("Slot", slot.to_string()));
    }
    rows.push(("Reference", summary.reference.clone()));
    rows.push(("Verse", summary.text.clone()));
    if let Some(prayer) = &summary.prayer {
        rows.push(("Prayer", one_line(prayer)));
    }
    if let Some(attempts) = summary.attempts {
        let note = if summary.repeated { " (repeat)" } else { "" };
        rows.push(("Attempts", format!("{attempts}{note}")));
    }
    rows.push(("Caption", one_line(&summary.caption)));
    rows.push(("Image", summary.asset.display().to_string()));
    rows
}

fn publish_status(summary: &RunSummary) -> (String, bool) {
    match (&summary.publish, summary.dry_run) {
        (_, true) => ("dry run, not published".to_string(), false),
        (Some(receipt), false) => (
            format!(
                "HTTP {} post {}",
                receipt.status,
                receipt.post_id.as_deref().unwrap_or("-")
            ),
            true,
        ),
        (None, false) => ("not published".to_string(), false),
    }
}

pub(crate) fn print_run_summary(summary: &RunSummary, use_color: bool) {
    let mut table = create_styled_table();
    table.set_header(vec![header_cell("Field", use_color), header_cell("Value", use_color)]);
    for (field, value) in run_rows(summary) {
        table.add_row(vec![Cell::new(field), Cell::new(value)]);
    }
    let (status, ok) = publish_status(summary);
    table.add_row(vec![Cell::new("Published"), status_cell(&status, ok, use_color)]);
    println!("{table}");
}

pub(crate) fn print_preview(preview: &Preview, use_color: bool) {
    let mut table = create_styled_table();
    table.set_header(vec![header_cell("Field", use_color), header_cell("Value", use_color)]);
    let rows = [
        ("Date", preview.date.format(DATE_FORMAT).to_string()),
        ("Day number", preview.day_number.to_string()),
        (
            "Index",
            format!("{} of {}", preview.index, preview.pool_size),
        ),
        ("Reference", preview.reference.clone()),
        (
            "Text",
            preview
                .text
                .clone()
                .unwrap_or_else(|| "(fetched at run time)".to_string()),
        ),
    ];
    for (field, value) in rows {
        table.add_row(vec![Cell::new(field), Cell::new(value)]);
    }
    println!("{table}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::TimeOfDay;
    use crate::remote::PublishReceipt;
    use chrono::NaiveDate;
    use std::path::PathBuf;

    fn prayer_summary() -> RunSummary {
        RunSummary {
            mode: Mode::Prayer,
            date: NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
            slot: Some(TimeOfDay::Evening),
            reference: "Ps 4:8".to_string(),
            text: "I will lie down in peace.".to_string(),
            prayer: Some("Line one.\nAmen.".to_string()),
            caption: "I will lie down in peace. (Ps 4:8)\n\nLine one.\nAmen.".to_string(),
            asset: PathBuf::from("output.png"),
            attempts: Some(12),
            repeated: true,
            dry_run: false,
            publish: Some(PublishReceipt {
                status: 200,
                post_id: Some("1_2".to_string()),
            }),
        }
    }

    #[test]
    fn json_uses_lowercase_enums_and_iso_date() {
        let json: serde_json::Value =
            serde_json::from_str(&output_run_json(&prayer_summary())).unwrap();
        assert_eq!(json["mode"], "prayer");
        assert_eq!(json["slot"], "evening");
        assert_eq!(json["date"], "2026-10-18");
        assert_eq!(json["attempts"], 12);
        assert_eq!(json["repeated"], true);
        assert_eq!(json["publish"]["post_id"], "1_2");
    }

    #[test]
    fn rows_flag_repeats_and_flatten_prayer() {
        let rows = run_rows(&prayer_summary());
        let get = |name: &str| {
            rows.iter()
                .find(|(field, _)| *field == name)
                .map(|(_, v)| v.clone())
        };
        assert_eq!(get("Attempts").as_deref(), Some("12 (repeat)"));
        assert_eq!(get("Prayer").as_deref(), Some("Line one. ⏎ Amen."));
        assert_eq!(get("Slot").as_deref(), Some("evening"));
    }

    #[test]
    fn publish_status_variants() {
        let mut summary = prayer_summary();
        assert_eq!(publish_status(&summary), ("HTTP 200 post 1_2".to_string(), true));

        summary.dry_run = true;
        summary.publish = None;
        assert_eq!(
            publish_status(&summary),
            ("dry run, not published".to_string(), false)
        );
    }
}
