use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

static ISO_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(?:Z|[+-]\d{2}:\d{2})?")
        .expect("Invalid timestamp regex")
});

/// Parse a story age attribute into a UTC instant.
///
/// Hacker News puts either a bare ISO timestamp ("2024-05-01T10:00:00") or an
/// ISO timestamp followed by the matching unix epoch
/// ("2024-05-01T10:00:00 1714557600") into the title attribute. A bare
/// timestamp carries no zone and is taken as UTC. Anything without a
/// recognizable ISO token yields None.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let candidate = ISO_REGEX.find(raw)?.as_str();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(candidate) {
        return Some(parsed.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(candidate, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn parses_iso_with_trailing_epoch() {
        assert_eq!(
            parse_timestamp("2024-05-01T10:00:00 1714557600"),
            Some(utc(2024, 5, 1, 10, 0, 0))
        );
    }

    #[test]
    fn parses_bare_iso_as_utc() {
        assert_eq!(
            parse_timestamp("2024-05-01T10:00:00"),
            Some(utc(2024, 5, 1, 10, 0, 0))
        );
    }

    #[test]
    fn parses_rfc3339_with_zone() {
        assert_eq!(
            parse_timestamp("2024-01-03T00:00:00Z"),
            Some(utc(2024, 1, 3, 0, 0, 0))
        );
        assert_eq!(
            parse_timestamp("2024-05-01T10:00:00+02:00"),
            Some(utc(2024, 5, 1, 8, 0, 0))
        );
    }

    #[test]
    fn rejects_text_without_an_iso_token() {
        assert_eq!(parse_timestamp("5 minutes ago"), None);
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("2024-05-01"), None);
    }
}
