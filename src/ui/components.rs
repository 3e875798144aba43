//! Reusable UI components and display formatting
//!
//! The formatting helpers are plain functions so the page projection can
//! use them without an egui context.

use crate::constants::*;
use crate::theme;
use crate::types::Timestamp;
use chrono::{DateTime, NaiveDateTime, TimeZone};
use eframe::egui;
use std::fmt::Display;

/// Format a 0..1 confidence as a percentage with two decimals
pub fn format_confidence(confidence: f64) -> String {
    if confidence.is_finite() {
        format!("{:.2}%", confidence * 100.0)
    } else {
        MISSING_VALUE.to_string()
    }
}

/// First `SNIPPET_MAX_CHARS` characters of the input, marked when cut
pub fn snippet(input: Option<&str>) -> String {
    let Some(text) = input.filter(|t| !t.is_empty()) else {
        return MISSING_VALUE.to_string();
    };
    let mut chars = text.char_indices();
    match chars.nth(SNIPPET_MAX_CHARS) {
        Some((cut, _)) => format!("{}{}", &text[..cut], SNIPPET_ELLIPSIS),
        None => text.to_string(),
    }
}

/// Render a backend timestamp in the given zone, `N/A` when absent
pub fn format_timestamp<Tz>(timestamp: Option<&Timestamp>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let Some(timestamp) = timestamp else {
        return MISSING_VALUE.to_string();
    };
    match timestamp {
        Timestamp::Epoch(value) => match epoch_to_utc(*value) {
            Some(utc) => utc.with_timezone(tz).format(TIMESTAMP_FORMAT).to_string(),
            None => MISSING_VALUE.to_string(),
        },
        Timestamp::Text(text) => {
            if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
                return parsed.with_timezone(tz).format(TIMESTAMP_FORMAT).to_string();
            }
            // Offset-less ISO strings are wall-clock times in the viewer's zone
            if let Some(local) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .and_then(|naive| tz.from_local_datetime(&naive).earliest())
            {
                return local.format(TIMESTAMP_FORMAT).to_string();
            }
            if let Ok(value) = text.trim().parse::<f64>() {
                if let Some(utc) = epoch_to_utc(value) {
                    return utc.with_timezone(tz).format(TIMESTAMP_FORMAT).to_string();
                }
            }
            text.clone()
        }
    }
}

// Values past 1e11 can only be milliseconds for any date before year 5138
fn epoch_to_utc(value: f64) -> Option<DateTime<chrono::Utc>> {
    if !value.is_finite() {
        return None;
    }
    let millis = if value.abs() >= 1e11 { value } else { value * 1000.0 };
    DateTime::from_timestamp_millis(millis as i64)
}

/// Colored pill with the classification label
pub fn classification_badge(ui: &mut egui::Ui, classification: &str) -> egui::Response {
    let (bg, fg) = theme::classification_colors(classification);
    egui::Frame::new()
        .fill(bg)
        .corner_radius(theme::RADIUS_DEFAULT)
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(classification)
                    .size(theme::FONT_LABEL)
                    .strong()
                    .color(fg),
            );
        })
        .response
}

/// Bold label followed by a value, on one line
pub fn field_row(ui: &mut egui::Ui, label: &str, add_value: impl FnOnce(&mut egui::Ui)) {
    ui.horizontal_wrapped(|ui| {
        ui.label(
            egui::RichText::new(label)
                .strong()
                .color(theme::TEXT_SECONDARY),
        );
        add_value(ui);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn confidence_is_a_two_decimal_percentage() {
        assert_eq!(format_confidence(0.8734), "87.34%");
        assert_eq!(format_confidence(0.97), "97.00%");
        assert_eq!(format_confidence(1.0), "100.00%");
        assert_eq!(format_confidence(0.0), "0.00%");
        assert_eq!(format_confidence(f64::NAN), "N/A");
    }

    #[test]
    fn short_input_is_shown_unmodified() {
        assert_eq!(snippet(Some("Lunch at noon?")), "Lunch at noon?");
        let exact = "x".repeat(SNIPPET_MAX_CHARS);
        assert_eq!(snippet(Some(&exact)), exact);
    }

    #[test]
    fn long_input_is_truncated_with_marker() {
        let long = "y".repeat(SNIPPET_MAX_CHARS + 1);
        let shown = snippet(Some(&long));
        assert_eq!(shown, format!("{}...", "y".repeat(SNIPPET_MAX_CHARS)));
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let long = "é".repeat(150);
        let shown = snippet(Some(&long));
        assert_eq!(shown.chars().count(), SNIPPET_MAX_CHARS + SNIPPET_ELLIPSIS.len());
        assert!(shown.ends_with("..."));
    }

    #[test]
    fn missing_input_uses_sentinel() {
        assert_eq!(snippet(None), "N/A");
        assert_eq!(snippet(Some("")), "N/A");
    }

    #[test]
    fn timestamps_render_in_the_viewer_zone() {
        let ts = Timestamp::Text("2024-05-01T10:15:30+00:00".into());
        assert_eq!(format_timestamp(Some(&ts), &Utc), "2024-05-01 10:15:30");

        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(format_timestamp(Some(&ts), &plus_two), "2024-05-01 12:15:30");
    }

    #[test]
    fn offsetless_iso_is_wall_clock_time() {
        let ts = Timestamp::Text("2024-05-01T10:15:30.123456".into());
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(format_timestamp(Some(&ts), &plus_two), "2024-05-01 10:15:30");
    }

    #[test]
    fn epoch_seconds_and_millis_are_both_understood() {
        let secs = Timestamp::Epoch(1_714_558_530.0);
        let millis = Timestamp::Epoch(1_714_558_530_000.0);
        assert_eq!(format_timestamp(Some(&secs), &Utc), "2024-05-01 10:15:30");
        assert_eq!(format_timestamp(Some(&millis), &Utc), "2024-05-01 10:15:30");
    }

    #[test]
    fn absent_or_unparsable_timestamps() {
        assert_eq!(format_timestamp(None, &Utc), "N/A");
        let odd = Timestamp::Text("last tuesday".into());
        assert_eq!(format_timestamp(Some(&odd), &Utc), "last tuesday");
    }
}
