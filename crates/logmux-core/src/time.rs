//! Timestamp formatting for log line prefixes.

use chrono::{DateTime, Utc};

/// Layout of the timestamp at the start of every line.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S%.6f";

/// Current UTC time formatted as `year/mo/dy hr:mn:sc.fractional`.
pub fn timestamp() -> String {
    format_timestamp(Utc::now())
}

/// Format an arbitrary instant the same way [`timestamp`] does.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_timestamp() {
        let at = Utc.with_ymd_and_hms(2024, 3, 5, 9, 5, 3).unwrap()
            + chrono::Duration::microseconds(250_000);
        assert_eq!(format_timestamp(at), "2024/03/05 09:05:03.250000");
    }

    #[test]
    fn test_timestamp_shape() {
        let re = regex::Regex::new(r"^\d{4}/\d{2}/\d{2} \d{2}:\d{2}:\d{2}\.\d{6}$").unwrap();
        assert!(re.is_match(&timestamp()));
    }
}
