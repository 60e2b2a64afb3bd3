/// Template ids are PostgreSQL BIGSERIAL values.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Parse an id taken from a URL path segment.
///
/// Returns `None` for anything that is not a valid id, so callers can
/// treat malformed ids the same as missing records.
pub fn parse_id(raw: &str) -> Option<DbId> {
    raw.trim().parse::<DbId>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_ids() {
        assert_eq!(parse_id("42"), Some(42));
        assert_eq!(parse_id(" 7 "), Some(7));
    }

    #[test]
    fn rejects_malformed_ids() {
        assert_eq!(parse_id("65f1c0ffee"), None);
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("1.5"), None);
    }
}
