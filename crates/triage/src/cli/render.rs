//! Terminal output for command results.

use chrono::{DateTime, Local};
use colored::Colorize;
use serde::Serialize;
use std::path::{Path, PathBuf};
use timeago::Formatter;
use triageapp::commands::{CmdMessage, MessageLevel, TaskStatus};
use triageapp::config::TriageConfig;
use triageapp::metadata::FileInfo;
use triageapp::model::Category;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const NAME_WIDTH: usize = 28;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

/// Like [`print_messages`], skipping info-level chatter.
pub(super) fn print_notable_messages(messages: &[CmdMessage]) {
    let notable: Vec<CmdMessage> = messages
        .iter()
        .filter(|m| m.level != MessageLevel::Info)
        .cloned()
        .collect();
    print_messages(&notable);
}

pub(super) fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(super) fn print_status(status: &TaskStatus) {
    let progress = match (status.init_file_count, status.percent_complete) {
        (Some(init), Some(pct)) => format!(
            "{} remaining of {} ({:.2}% done)",
            status.remaining, init, pct
        ),
        _ => format!("{} remaining", status.remaining),
    };
    println!("{}", progress.bold());
    println!(
        "{}",
        format!(
            "{} reviewed, {} categories",
            status.reviewed, status.category_count
        )
        .dimmed()
    );

    print_path_line("current", status.current.as_deref());
    print_path_line("last", status.last_reviewed.as_deref());
    if let Some(root) = &status.source_root {
        print_path_line("source", Some(root));
    }
    if let Some(record) = &status.record_path {
        print_path_line("task", Some(record));
    }
}

/// One-line summary printed after a traversal command.
pub(super) fn print_position(status: &TaskStatus) {
    match &status.current {
        Some(current) => println!(
            "{} {} {}",
            "→".cyan(),
            truncate_to_width(&current.display().to_string(), LINE_WIDTH - 20),
            format!("({} left)", status.remaining).dimmed()
        ),
        None => println!("{}", "Nothing left to review".dimmed()),
    }
}

fn print_path_line(label: &str, path: Option<&Path>) {
    let value = path
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "-".to_string());
    println!(
        "  {:<8} {}",
        label.dimmed(),
        truncate_to_width(&value, LINE_WIDTH - 11)
    );
}

pub(super) fn print_file_info(info: &FileInfo) {
    println!("{} {}", info.name.bold(), format!("[{}]", info.kind).dimmed());
    println!("  {:<10} {}", "path".dimmed(), info.path.display());
    println!("  {:<10} {}", "size".dimmed(), format_size(info.size));
    if let Some(dimensions) = info.dimensions {
        println!("  {:<10} {}", "dimensions".dimmed(), dimensions);
    }
    if let Some(secs) = info.duration_secs {
        println!(
            "  {:<10} {}:{:02}",
            "duration".dimmed(),
            secs / 60,
            secs % 60
        );
    }
    if let (Some(display), Some(at)) = (info.last_modified_display(), info.last_modified) {
        println!(
            "  {:<10} {} {}",
            "modified".dimmed(),
            display,
            format!("({})", format_time_ago(at)).dimmed()
        );
    }
    if let Some(display) = info.last_opened_display() {
        println!("  {:<10} {}", "opened".dimmed(), display);
    }
}

pub(super) fn print_categories(categories: &[Category]) {
    if categories.is_empty() {
        println!("No categories.");
        return;
    }
    for category in categories {
        let name = truncate_to_width(&category.name, NAME_WIDTH);
        let padding = NAME_WIDTH.saturating_sub(name.width());
        println!(
            "  {}{}  {}",
            name.yellow(),
            " ".repeat(padding),
            category.path.display().to_string().dimmed()
        );
    }
}

pub(super) fn print_paths(paths: &[PathBuf]) {
    for path in paths {
        println!("  {}", path.display());
    }
}

pub(super) fn print_config(config: &TriageConfig, trash_dir: &Path, config_dir: &Path) {
    println!("image_extensions = {}", config.image_extensions.join(" "));
    println!("video_extensions = {}", config.video_extensions.join(" "));
    println!("random_name_length = {}", config.random_name_length);
    println!("favorite_mark = {}", config.favorite_mark);
    println!("trash_dir = {}", trash_dir.display());
    println!(
        "{}",
        format!("# config file: {}", config_dir.join(triageapp::config::CONFIG_FILENAME).display())
            .dimmed()
    );
}

fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} B", bytes)
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}

fn format_time_ago(timestamp: DateTime<Local>) -> String {
    let duration = Local::now().signed_duration_since(timestamp);
    Formatter::new().convert(duration.to_std().unwrap_or_default())
}

pub(super) fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
