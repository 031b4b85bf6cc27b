//! Terminal tables for the record and change listings.

use dns_maintenance_route53::{Change, ResourceRecordSet};
use unicode_width::UnicodeWidthStr;

const HEADERS: [&str; 3] = ["Record", "Alias Target", "Weight"];
const COLUMN_GAP: usize = 2;

/// Announce and render the records about to change.
pub fn print_records(records: &[ResourceRecordSet], profile: &str) {
    println!("You are going to make changes in this environment: {profile}");
    println!("The following records will be changed: ");
    print!("{}", render_table(&record_rows(records)));
}

/// Announce and render the applied changes.
pub fn print_changes(changes: &[Change], profile: &str) {
    println!("Records have been changed in this environment: {profile}");
    println!("The following records have been changed: ");
    let rows: Vec<[String; 3]> = changes
        .iter()
        .map(|change| row_for(&change.resource_record_set))
        .collect();
    print!("{}", render_table(&rows));
}

fn record_rows(records: &[ResourceRecordSet]) -> Vec<[String; 3]> {
    records.iter().map(row_for).collect()
}

fn row_for(record: &ResourceRecordSet) -> [String; 3] {
    [
        record.name.clone(),
        record.alias_dns_name().unwrap_or("-").to_string(),
        record
            .weight
            .map_or_else(|| "-".to_string(), |weight| weight.to_string()),
    ]
}

/// Header, separator and rows, with columns sized to the widest cell by
/// display width (alias targets can be punycode or CJK).
fn render_table(rows: &[[String; 3]]) -> String {
    let mut widths = HEADERS.map(UnicodeWidthStr::width);
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.width());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS.map(String::from), &widths);
    let total = widths.iter().sum::<usize>() + COLUMN_GAP * (HEADERS.len() - 1);
    out.push_str(&"-".repeat(total));
    out.push('\n');
    for row in rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String; 3], widths: &[usize; 3]) {
    for (index, (cell, width)) in cells.iter().zip(widths.iter()).enumerate() {
        out.push_str(cell);
        if index + 1 < cells.len() {
            out.push_str(&" ".repeat(width - cell.width() + COLUMN_GAP));
        }
    }
    out.push('\n');
}
