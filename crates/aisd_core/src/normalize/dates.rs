use time::format_description::well_known::Rfc3339;
use time::{format_description, Date, OffsetDateTime, PrimitiveDateTime, UtcOffset};

const DATE_FORMAT: &str = "[year]-[month]-[day]";

fn parse_date(raw: &str) -> Option<Date> {
    let items = format_description::parse(DATE_FORMAT).ok()?;
    Date::parse(raw, &items).ok()
}

/// Parse a date-picker value (`YYYY-MM-DD`) into UTC midnight of that day.
///
/// Blank or unparseable input yields `None`, which the list pipeline treats as "no bound".
pub fn parse_date_bound(raw: &str) -> Option<OffsetDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match parse_date(trimmed) {
        Some(date) => Some(date.midnight().assume_utc()),
        None => {
            tracing::debug!(value = trimmed, "ignoring unparseable date bound");
            None
        }
    }
}

/// Parse a timestamp, accepting RFC3339 or a zone-less ISO form that is read as UTC.
///
/// Deterministic allowlist only; anything else is `None`.
pub fn parse_timestamp_utc(raw: &str) -> Option<OffsetDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = OffsetDateTime::parse(trimmed, &Rfc3339) {
        return Some(dt.to_offset(UtcOffset::UTC));
    }

    for fmt in [
        "[year]-[month]-[day]T[hour]:[minute]:[second]",
        "[year]-[month]-[day]T[hour]:[minute]",
        "[year]-[month]-[day] [hour]:[minute]:[second]",
    ] {
        let Ok(items) = format_description::parse(fmt) else {
            continue;
        };
        if let Ok(pdt) = PrimitiveDateTime::parse(trimmed, &items) {
            return Some(pdt.assume_utc());
        }
    }

    parse_date(trimmed).map(|d| d.midnight().assume_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_bound_is_utc_midnight() {
        let dt = parse_date_bound("2025-03-16").unwrap();
        assert_eq!(dt.format(&Rfc3339).unwrap(), "2025-03-16T00:00:00Z");
    }

    #[test]
    fn blank_and_garbage_bounds_are_absent() {
        assert_eq!(parse_date_bound(""), None);
        assert_eq!(parse_date_bound("   "), None);
        assert_eq!(parse_date_bound("16/03/2025"), None);
        assert_eq!(parse_date_bound("2025-13-40"), None);
    }

    #[test]
    fn zone_less_timestamp_is_read_as_utc() {
        let dt = parse_timestamp_utc("2025-03-15T15:30:00").unwrap();
        assert_eq!(dt.format(&Rfc3339).unwrap(), "2025-03-15T15:30:00Z");

        let shifted = parse_timestamp_utc("2025-03-15T17:30:00+02:00").unwrap();
        assert_eq!(shifted, dt);
    }
}
