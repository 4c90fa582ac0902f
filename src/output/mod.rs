//! Output formatting for CLI display
//!
//! This module provides utilities for formatting listing rows, the page
//! window, tag groups and model details for the non-interactive commands.

use crate::api::{FileInfo, ModelDetail};
use crate::pagination::{PageEntry, Paginator};
use crate::query::CatalogItem;
use crate::tags::TagGroup;
use byte_unit::{Byte, UnitType};
use chrono::{DateTime, Utc};
use colored::Colorize;

/// Format a listing row
///
/// Quiet mode prints only the path so output can be piped.
#[must_use]
pub fn item_line(item: &CatalogItem, quiet: bool) -> String {
    if quiet {
        return item.path().to_string();
    }

    let mut line = format!(
        "  {} {}  ♥ {}  ↓ {}",
        item.title().bold(),
        format!("({})", item.path()).dimmed(),
        item.likes(),
        item.downloads()
    );
    if !item.updated_at().is_empty() {
        line.push_str(&format!("  {}", format_date(item.updated_at()).dimmed()));
    }
    if !item.description().is_empty() {
        line.push_str(&format!("\n      {}", item.description()));
    }
    line
}

/// Page window as plain text, current page in brackets
///
/// e.g. `1 … 4 5 [6] 7 8 … 10`
#[must_use]
pub fn window_text(entries: &[PageEntry], current: u32) -> String {
    entries
        .iter()
        .map(|entry| match entry {
            PageEntry::Page(p) if *p == current => format!("[{p}]"),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Footer under a listing, or `None` when everything fits on one page
#[must_use]
pub fn page_footer(paginator: &Paginator) -> Option<String> {
    if !paginator.is_visible() {
        return None;
    }
    let window = window_text(&paginator.window(), paginator.current_page());
    Some(format!(
        "  {}  {}",
        window.cyan(),
        format!("({})", paginator.summary()).dimmed()
    ))
}

/// Format a tag category with its tags on one line
#[must_use]
pub fn tag_group(group: &TagGroup, quiet: bool) -> String {
    let names: Vec<&str> = group.tags.iter().map(|t| t.display_name()).collect();
    if quiet {
        names.join("\n")
    } else {
        format!("  {}: {}", group.label().bold(), names.join(", "))
    }
}

/// Human-readable size, binary units
#[must_use]
pub fn format_size(bytes: u64) -> String {
    Byte::from_u64(bytes)
        .get_appropriate_unit(UnitType::Binary)
        .to_string()
}

/// Calendar date of an RFC 3339 timestamp, or the input unchanged
#[must_use]
pub fn format_date(timestamp: &str) -> String {
    DateTime::parse_from_rfc3339(timestamp).map_or_else(
        |_| timestamp.to_string(),
        |dt| dt.with_timezone(&Utc).format("%Y-%m-%d").to_string(),
    )
}

/// Format one repository tree entry
#[must_use]
pub fn file_entry(file: &FileInfo) -> String {
    if file.is_dir() {
        format!("  {}/", file.name.blue().bold())
    } else {
        let mut line = format!("  {:<40} {:>12}", file.name, format_size(file.size));
        if file.lfs {
            line.push_str(&format!(" {}", "LFS".yellow()));
        }
        if !file.commit.message.is_empty() {
            line.push_str(&format!("  {}", file.commit.message.dimmed()));
        }
        line
    }
}

/// Header block of a model detail page
#[must_use]
pub fn model_detail(detail: &ModelDetail) -> String {
    let model = &detail.model;
    let title = if model.nickname.is_empty() {
        &model.name
    } else {
        &model.nickname
    };

    let mut lines = vec![
        format!("{} {}", title.bold().green(), format!("({})", model.path).dimmed()),
    ];
    if !model.description.is_empty() {
        lines.push(model.description.clone());
    }
    lines.push(format!(
        "♥ {}  ↓ {}  updated {}",
        model.likes,
        model.downloads,
        format_date(&model.updated_at)
    ));

    let fields = [
        ("License", model.license.as_str()),
        ("Base model", model.base_model.as_str()),
        ("Architecture", detail.metadata.architecture.as_str()),
        ("Tensor type", detail.metadata.tensor_type.as_str()),
        ("Clone", model.repository.http_clone_url.as_str()),
    ];
    for (label, value) in fields {
        if !value.is_empty() {
            lines.push(format!("{}: {value}", label.bold()));
        }
    }
    if detail.metadata.model_params > 0.0 {
        lines.push(format!(
            "{}: {:.2}B",
            "Parameters".bold(),
            detail.metadata.model_params
        ));
    }
    if detail.metadata.mini_gpu_memory_gb > 0.0 {
        lines.push(format!(
            "{}: {:.1} GB",
            "Min GPU memory".bold(),
            detail.metadata.mini_gpu_memory_gb
        ));
    }

    lines.join("\n")
}
