use chrono::DateTime;

/// Returns if two RFC3339 timestamps denote the same instant.
///
/// Either side failing to parse means the difference is real.
pub fn suppress_rfc3339_time(old: &str, new: &str) -> bool {
    let (Ok(old), Ok(new)) = (
        DateTime::parse_from_rfc3339(old),
        DateTime::parse_from_rfc3339(new),
    ) else {
        return false;
    };

    old == new
}
