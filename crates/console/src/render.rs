//! Plain-text rendering of requests, sessions and availability grids.

use std::fmt::Write;

use shiftboard_core::{
    dates::{DATE_FORMAT, format_date_for_display, hour_label},
    grid::{Grid, GroupAxis, GroupKey},
    models::{Request, SessionUser, format::DATETIME_FORMAT},
};

const PRESENT: &str = "#";
const ABSENT: &str = ".";

/// Left-aligned table with a dashed rule under the header.
pub fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (column, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(column) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let mut out = String::new();
    push_row(&mut out, headers.iter().copied(), &widths);
    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    push_row(&mut out, rule.iter().map(String::as_str), &widths);
    for row in rows {
        push_row(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(cell, &width)| pad(cell, width))
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}

fn pad(cell: &str, width: usize) -> String {
    let fill = width.saturating_sub(cell.chars().count());
    format!("{cell}{}", " ".repeat(fill))
}

pub fn requests(requests: &[Request]) -> String {
    if requests.is_empty() {
        return "No requests yet.\n".to_string();
    }
    let rows: Vec<Vec<String>> = requests
        .iter()
        .map(|request| {
            vec![
                request.id.to_string(),
                request.creator.name.clone(),
                request.start_date.format(DATE_FORMAT).to_string(),
                request.end_date.format(DATE_FORMAT).to_string(),
                request.deadline.format(DATETIME_FORMAT).to_string(),
                request.created_at.format(DATETIME_FORMAT).to_string(),
            ]
        })
        .collect();
    table(&["ID", "Creator", "Start", "End", "Deadline", "Created"], &rows)
}

pub fn request_summary(request: &Request, entry_count: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Request #{} by {}", request.id, request.creator.name);
    let _ = writeln!(
        out,
        "  period:   {} .. {}",
        format_date_for_display(request.start_date),
        format_date_for_display(request.end_date)
    );
    let _ = writeln!(out, "  deadline: {}", request.deadline.format(DATETIME_FORMAT));
    let _ = writeln!(out, "  created:  {}", request.created_at.format(DATETIME_FORMAT));
    let _ = writeln!(out, "  entries:  {entry_count}");
    out
}

pub fn session(user: &SessionUser) -> String {
    let roles = if user.roles.is_empty() {
        "none".to_string()
    } else {
        user.roles.join(", ")
    };
    format!("{} (id {})\n  roles: {}\n", user.name, user.id, roles)
}

/// Renders every row as a block: a heading, an hour header, then one line
/// of cells per date (by submitter) or per submitter (by date).
pub fn grid(grid: &Grid) -> String {
    if grid.is_empty() {
        return "No availability to show.\n".to_string();
    }

    let corner = match grid.axis() {
        Some(GroupAxis::Date) => "submitter",
        _ => "date",
    };
    let label_width = grid
        .rows()
        .iter()
        .flat_map(|row| row.lines.iter().map(|line| line.label.chars().count()))
        .chain(std::iter::once(corner.len()))
        .max()
        .unwrap_or(0);
    let hours: Vec<String> = grid.hours().iter().map(|&h| hour_label(h)).collect();

    let mut out = String::new();
    for (index, row) in grid.rows().iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        let heading = match row.key {
            GroupKey::Date(date) => format_date_for_display(date),
            GroupKey::Submitter(_) => row.label.clone(),
        };
        let _ = writeln!(out, "{heading}");
        let _ = writeln!(out, "  {}  {}", pad(corner, label_width), hours.join(" "));

        if row.lines.is_empty() {
            let _ = writeln!(out, "  (no submitters)");
            continue;
        }
        for line in &row.lines {
            let cells: Vec<String> = line
                .cells
                .iter()
                .map(|&present| format!("{:>2}", if present { PRESENT } else { ABSENT }))
                .collect();
            let _ = writeln!(out, "  {}  {}", pad(&line.label, label_width), cells.join(" "));
        }
    }
    out
}
