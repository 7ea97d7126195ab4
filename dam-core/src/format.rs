//! Shared formatting helpers for timestamps and volumes.

/// Timestamp helpers for the `M/DD/YY HH:MM` layout used by the sample table.
pub mod dates {
    use crate::error::{DashboardError, Result};
    use chrono::NaiveDateTime;

    /// Layout accepted when parsing. Chrono accepts a single-digit month here.
    pub const TIMESTAMP_PARSE_FORMAT: &str = "%m/%d/%y %H:%M";

    /// Layout used when writing: unpadded month, padded day (`2/09/23 12:00`).
    pub const TIMESTAMP_WRITE_FORMAT: &str = "%-m/%d/%y %H:%M";

    /// Parse a timestamp such as `2/09/23 12:00`.
    pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime> {
        NaiveDateTime::parse_from_str(s.trim(), TIMESTAMP_PARSE_FORMAT).map_err(|source| {
            DashboardError::TimestampParse {
                value: s.to_string(),
                source,
            }
        })
    }

    /// Format a timestamp back into the source layout.
    pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
        timestamp.format(TIMESTAMP_WRITE_FORMAT).to_string()
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::NaiveDate;

        #[test]
        fn test_parse_single_digit_month() {
            let parsed = parse_timestamp("2/09/23 12:00").unwrap();
            let expected = NaiveDate::from_ymd_opt(2023, 2, 9)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap();
            assert_eq!(parsed, expected);
        }

        #[test]
        fn test_format_matches_source_layout() {
            let timestamp = NaiveDate::from_ymd_opt(2023, 2, 9)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap();
            assert_eq!(format_timestamp(&timestamp), "2/09/23 12:00");

            let december = NaiveDate::from_ymd_opt(2022, 12, 25)
                .unwrap()
                .and_hms_opt(8, 5, 0)
                .unwrap();
            assert_eq!(format_timestamp(&december), "12/25/22 08:05");
        }

        #[test]
        fn test_parse_rejects_garbage() {
            let err = parse_timestamp("yesterday").unwrap_err();
            assert!(matches!(err, DashboardError::TimestampParse { .. }));
        }
    }
}

/// Volume helpers (acre-feet).
pub mod volume {
    /// Format a volume the way it appears in the source table: whole numbers
    /// without a trailing `.0`.
    pub fn format_volume(value: f64) -> String {
        value.to_string()
    }

    /// Format a volume rounded to whole acre-feet with thousands separators,
    /// e.g. `304083.0` -> `304,083`.
    pub fn format_with_separators(value: f64) -> String {
        let rounded = value.round();
        let digits = format!("{:.0}", rounded.abs());
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
        if rounded < 0.0 {
            out.push('-');
        }
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        out
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_format_volume_whole() {
            assert_eq!(format_volume(304083.0), "304083");
            assert_eq!(format_volume(12.5), "12.5");
        }

        #[test]
        fn test_format_with_separators() {
            assert_eq!(format_with_separators(304083.0), "304,083");
            assert_eq!(format_with_separators(999.0), "999");
            assert_eq!(format_with_separators(1000.0), "1,000");
            assert_eq!(format_with_separators(4552000.0), "4,552,000");
            assert_eq!(format_with_separators(0.0), "0");
            assert_eq!(format_with_separators(-1234.4), "-1,234");
        }
    }
}
