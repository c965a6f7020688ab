//! Formatting helpers shared by every view
//!
//! All output is fixed to en-US conventions. These are total functions, any
//! stored value formats without panicking.

use chrono::{NaiveDate, NaiveDateTime};

/// Convert a snake_case value into a display label
///
/// Underscores become spaces and the first letter of each word is
/// capitalized. Characters after the first keep their stored case.
pub fn title_case(value: &str) -> String {
    value
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Format a date as e.g. "Mar 5, 2024"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Format a date and time as e.g. "Mar 5, 2024, 3:04 PM"
pub fn format_date_time(date_time: NaiveDateTime) -> String {
    date_time.format("%b %-d, %Y, %-I:%M %p").to_string()
}

/// Name shown for a livestock row, preferring the common name
pub fn livestock_display_name<'a>(common_name: Option<&'a str>, species: &'a str) -> &'a str {
    match common_name {
        Some(name) if !name.is_empty() => name,
        _ => species,
    }
}

/// Visual tone assigned to a free-form status string
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Positive,
    Cautionary,
    Critical,
    Neutral,
}

impl StatusTone {
    /// Map a status to its tone, case-insensitively
    ///
    /// Unknown statuses get the neutral tone rather than an error so new
    /// status vocabulary never breaks rendering.
    pub fn from_status(status: &str) -> Self {
        match status.to_lowercase().as_str() {
            "active" | "healthy" | "running" => StatusTone::Positive,
            "inactive" | "sick" | "maintenance" => StatusTone::Cautionary,
            "dead" | "broken" => StatusTone::Critical,
            _ => StatusTone::Neutral,
        }
    }

    /// DaisyUI badge class for this tone
    pub fn badge_class(&self) -> &'static str {
        match self {
            StatusTone::Positive => "badge-success",
            StatusTone::Cautionary => "badge-warning",
            StatusTone::Critical => "badge-error",
            StatusTone::Neutral => "badge-ghost",
        }
    }
}
