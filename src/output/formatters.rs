//! Reusable formatting utilities for CLI output
//!
//! Timestamps, relative ages and placeholder values shared by the display
//! models and the detail views.

use chrono::{DateTime, Local, Utc};

/// Placeholder for absent values
pub const NONE: &str = "--";

/// Format a UTC timestamp in local time with a zone abbreviation.
///
/// # Example output
/// `01/15/2025 14:30 PST`
pub fn format_timestamp_local(timestamp: DateTime<Utc>) -> String {
    let local = timestamp.with_timezone(&Local);
    let date_time = local.format("%m/%d/%Y %H:%M").to_string();
    let tz_abbrev = offset_to_tz_abbrev(local.offset().local_minus_utc());
    format!("{} {}", date_time, tz_abbrev)
}

/// Calendar date only, e.g. `2024-03-01`
pub fn format_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d").to_string()
}

/// Convert UTC offset (seconds) to timezone abbreviation.
///
/// Maps common UTC offsets to standard timezone abbreviations. Falls back to
/// `UTC+N` format for uncommon offsets.
pub fn offset_to_tz_abbrev(offset_secs: i32) -> String {
    let offset_hours = offset_secs / 3600;
    let abbrev = match offset_hours {
        -10 => "HST",
        -9 => "AKST",
        -8 => "PST",
        -7 => "MST",
        -6 => "CST",
        -5 => "EST",
        -4 => "AST",
        0 => "UTC",
        1 => "CET",
        2 => "EET",
        3 => "MSK",
        9 => "JST",
        10 => "AEST",
        12 => "NZST",
        _ => return format!("UTC{:+}", offset_hours),
    };
    abbrev.to_string()
}

/// Human age of a timestamp relative to `now`, e.g. `3h ago`.
///
/// `None` renders as `Never`; anything older than 30 days shows the date.
pub fn format_relative(timestamp: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(ts) = timestamp else {
        return "Never".to_string();
    };

    let elapsed = now.signed_duration_since(ts);
    let minutes = elapsed.num_minutes();

    if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{}m ago", minutes)
    } else if elapsed.num_hours() < 24 {
        format!("{}h ago", elapsed.num_hours())
    } else if elapsed.num_days() <= 30 {
        format!("{}d ago", elapsed.num_days())
    } else {
        format_date(ts)
    }
}

/// Optional text or the placeholder
pub fn or_none(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => NONE.to_string(),
    }
}

/// Format an inclusive numeric range, omitting missing bounds
pub fn format_range<T: std::fmt::Display>(min: Option<T>, max: Option<T>) -> String {
    match (min, max) {
        (Some(min), Some(max)) => format!("{}-{}", min, max),
        (Some(min), None) => format!("{}+", min),
        (None, Some(max)) => format!("up to {}", max),
        (None, None) => NONE.to_string(),
    }
}
