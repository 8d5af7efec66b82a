use time::format_description::FormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

/// Zero-padded ISO 8601 calendar date. Parsing with this description rejects
/// unpadded or reordered inputs, so any string that parses is already in the
/// canonical form the tables sort lexicographically.
const DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

pub fn parse(s: &str) -> Option<Date> {
    Date::parse(s, DATE_FORMAT).ok()
}

pub fn today() -> String {
    OffsetDateTime::now_utc().date().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_padded_iso_dates() {
        assert!(parse("2024-01-31").is_some());
        assert!(parse("1999-12-01").is_some());
    }

    #[test]
    fn rejects_unpadded_and_reordered_dates() {
        assert!(parse("2024-1-31").is_none());
        assert!(parse("31-01-2024").is_none());
        assert!(parse("2024/01/31").is_none());
        assert!(parse("not-a-date").is_none());
    }

    #[test]
    fn rejects_out_of_range_components() {
        assert!(parse("2024-13-01").is_none());
        assert!(parse("2024-02-30").is_none());
    }

    #[test]
    fn today_is_canonical_form() {
        let today = today();
        assert_eq!(today.len(), 10);
        assert!(parse(&today).is_some());
    }
}
