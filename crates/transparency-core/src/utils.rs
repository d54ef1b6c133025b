//! Formatting and pagination helpers shared by the console views

use chrono::{DateTime, Utc};

/// Placeholder shown when a server-computed value is absent
pub const MISSING: &str = "—";

/// Number of pages needed to show `total` rows at `per_page` rows each
///
/// A `per_page` of zero is treated as one row per page.
#[must_use]
pub const fn total_pages(total: u64, per_page: u32) -> u64 {
    let per_page = if per_page == 0 { 1 } else { per_page as u64 };
    total.div_ceil(per_page)
}

/// Format a byte count with binary units, e.g. `1.5 MB`
#[must_use]
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["KB", "MB", "GB", "TB", "PB"];

    if bytes < 1024 {
        return format!("{bytes} B");
    }

    #[allow(clippy::cast_precision_loss)]
    let mut value = bytes as f64 / 1024.0;
    let mut units = UNITS.iter().copied();
    let mut unit = units.next().unwrap_or("KB");
    for next in units {
        if value < 1024.0 {
            break;
        }
        value /= 1024.0;
        unit = next;
    }

    format!("{value:.1} {unit}")
}

/// Format an integer with thousands separators, e.g. `1,234,567`
#[must_use]
pub fn format_number(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Format a percentage with one decimal, e.g. `42.5%`
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Format a server-computed score with one decimal, or a placeholder
#[must_use]
pub fn format_score(score: Option<f64>) -> String {
    score.map_or_else(|| MISSING.to_string(), |s| format!("{s:.1}"))
}

/// Format an uptime in seconds as `3d 4h 12m`
#[must_use]
pub fn format_uptime(seconds: u64) -> String {
    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3600;
    let minutes = (seconds % 3600) / 60;

    if days > 0 {
        format!("{days}d {hours}h {minutes}m")
    } else if hours > 0 {
        format!("{hours}h {minutes}m")
    } else if minutes > 0 {
        format!("{minutes}m")
    } else {
        format!("{seconds}s")
    }
}

/// Format a timestamp for table cells
#[must_use]
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M").to_string()
}

/// Format an optional timestamp, or a placeholder
#[must_use]
pub fn format_optional_timestamp(timestamp: Option<&DateTime<Utc>>) -> String {
    timestamp.map_or_else(|| MISSING.to_string(), format_timestamp)
}

/// Shorten text to `max` characters, appending an ellipsis when cut
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}…")
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0, 20, 0)]
    #[case(1, 20, 1)]
    #[case(20, 20, 1)]
    #[case(21, 20, 2)]
    #[case(5, 0, 5)]
    fn test_total_pages(#[case] total: u64, #[case] per_page: u32, #[case] expected: u64) {
        assert_eq!(total_pages(total, per_page), expected);
    }

    #[rstest]
    #[case(0, "0 B")]
    #[case(1023, "1023 B")]
    #[case(1024, "1.0 KB")]
    #[case(1536, "1.5 KB")]
    #[case(5 * 1024 * 1024, "5.0 MB")]
    #[case(3 * 1024 * 1024 * 1024, "3.0 GB")]
    fn test_format_bytes(#[case] bytes: u64, #[case] expected: &str) {
        assert_eq!(format_bytes(bytes), expected);
    }

    #[rstest]
    #[case(0, "0")]
    #[case(999, "999")]
    #[case(1000, "1,000")]
    #[case(1_234_567, "1,234,567")]
    fn test_format_number(#[case] value: u64, #[case] expected: &str) {
        assert_eq!(format_number(value), expected);
    }

    #[rstest]
    #[case(42, "42s")]
    #[case(125, "2m")]
    #[case(3 * 3600 + 5 * 60, "3h 5m")]
    #[case(2 * 86_400 + 4 * 3600 + 12 * 60, "2d 4h 12m")]
    fn test_format_uptime(#[case] seconds: u64, #[case] expected: &str) {
        assert_eq!(format_uptime(seconds), expected);
    }

    #[test]
    fn test_format_score_and_percent() {
        assert_eq!(format_score(Some(87.26)), "87.3");
        assert_eq!(format_score(None), MISSING);
        assert_eq!(format_percent(12.345), "12.3%");
    }

    #[test]
    fn test_format_timestamp() {
        let ts = "2024-03-01T10:05:00Z".parse::<DateTime<Utc>>().unwrap();
        assert_eq!(format_timestamp(&ts), "2024-03-01 10:05");
        assert_eq!(format_optional_timestamp(None), MISSING);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a long subject line", 8), "a long …");
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: removing separators gives back the plain number
            #[test]
            fn format_number_round_trips(value in any::<u64>()) {
                let formatted = format_number(value);
                prop_assert_eq!(formatted.replace(',', ""), value.to_string());
            }

            /// Property: separator groups are exactly three digits after the first
            #[test]
            fn format_number_groups_of_three(value in any::<u64>()) {
                let formatted = format_number(value);
                let groups: Vec<&str> = formatted.split(',').collect();
                prop_assert!(groups[0].len() <= 3 && !groups[0].is_empty());
                for group in &groups[1..] {
                    prop_assert_eq!(group.len(), 3);
                }
            }

            /// Property: every row fits in the computed page count
            #[test]
            fn total_pages_covers_all_rows(total in 0u64..1_000_000, per_page in 1u32..500) {
                let pages = total_pages(total, per_page);
                prop_assert!(pages * u64::from(per_page) >= total);
                prop_assert!(pages == 0 || (pages - 1) * u64::from(per_page) < total);
            }
        }
    }
}
