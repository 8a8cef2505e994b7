//! Plain-text destination cards.

use chrono::{DateTime, Local};

use crate::types::destination::Destination;

/// Shown in place of the grid when nothing matches.
pub const EMPTY_MESSAGE: &str = "No destinations yet.";

/// Renders `date_added` in local time, falling back to the raw string.
pub fn format_added(date_added: &str) -> String {
    match DateTime::parse_from_rfc3339(date_added) {
        Ok(dt) => dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => date_added.to_string(),
    }
}

pub fn render_card(item: &Destination) -> String {
    let mark = if item.visited { "[x]" } else { "[ ]" };
    let id = item.id.map(|id| format!("#{id}")).unwrap_or_else(|| "#-".to_string());
    let mut out = format!("{mark} {id} {}\n", item.name);
    if let Some(notes) = &item.notes {
        for line in notes.lines() {
            out.push_str(&format!("    {line}\n"));
        }
    }
    if let Some(url) = &item.image_url {
        out.push_str(&format!("    image: {url}\n"));
    }
    out.push_str(&format!("    Added {}\n", format_added(&item.date_added)));
    out
}

pub fn render_grid(items: &[&Destination]) -> String {
    if items.is_empty() {
        return format!("{EMPTY_MESSAGE}\n");
    }
    items
        .iter()
        .map(|item| render_card(item))
        .collect::<Vec<_>>()
        .join("\n")
}
