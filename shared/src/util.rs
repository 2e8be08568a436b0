//! Pure formatting and time utilities

use chrono::{Duration, Local, NaiveDate, NaiveTime};

/// Current UTC timestamp in milliseconds. Order ids are stamped from this.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Strip a phone string down to its digits.
pub fn canonical_phone(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Format a canonical 11-digit phone for display: `+7 (XXX) XXX-XX-XX`.
///
/// Idempotent: already-formatted input reduces to the same 11 digits and
/// formats back to itself. Input with any other digit count is returned
/// unchanged rather than mangled.
pub fn format_phone(phone: &str) -> String {
    let digits = canonical_phone(phone);
    if digits.len() != 11 {
        return phone.to_string();
    }
    format!(
        "+7 ({}) {}-{}-{}",
        &digits[1..4],
        &digits[4..7],
        &digits[7..9],
        &digits[9..11]
    )
}

/// Normalize an article code on line-item confirmation.
pub fn format_article(article: &str) -> String {
    article.trim().to_uppercase()
}

/// Render an ISO-8601 delivery date as `DD.MM.YYYY`.
///
/// Unparseable input is returned unchanged; display formatting must never
/// fail an otherwise valid order row.
pub fn format_delivery_date(iso: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(iso)
        .map(|dt| dt.format("%d.%m.%Y").to_string())
        .unwrap_or_else(|_| iso.to_string())
}

/// Stored representation of a delivery date: midnight UTC, ISO-8601.
pub fn delivery_date_iso(date: NaiveDate) -> String {
    date.and_time(NaiveTime::MIN).and_utc().to_rfc3339()
}

/// Today in the operator's local timezone.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

// Quick-pick labels for the delivery date widget.

pub fn is_today(date: NaiveDate) -> bool {
    date == local_today()
}

pub fn is_tomorrow(date: NaiveDate) -> bool {
    date == local_today() + Duration::days(1)
}

pub fn is_day_after_tomorrow(date: NaiveDate) -> bool {
    date == local_today() + Duration::days(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_canonical_phone() {
        assert_eq!(format_phone("79001112233"), "+7 (900) 111-22-33");
        assert_eq!(format_phone("89001112233"), "+7 (900) 111-22-33");
    }

    #[test]
    fn format_phone_is_idempotent() {
        let once = format_phone("79991234567");
        assert_eq!(format_phone(&once), once);
    }

    #[test]
    fn format_phone_leaves_unexpected_input_alone() {
        assert_eq!(format_phone("112"), "112");
        assert_eq!(format_phone(""), "");
    }

    #[test]
    fn canonical_phone_strips_formatting() {
        assert_eq!(canonical_phone("+7 (900) 111-22-33"), "79001112233");
    }

    #[test]
    fn article_is_trimmed_and_uppercased() {
        assert_eq!(format_article("  ab-12 "), "AB-12");
    }

    #[test]
    fn delivery_date_round_trips_to_display() {
        let iso = delivery_date_iso(NaiveDate::from_ymd_opt(2025, 3, 7).unwrap());
        assert_eq!(format_delivery_date(&iso), "07.03.2025");
    }

    #[test]
    fn unparseable_date_renders_verbatim() {
        assert_eq!(format_delivery_date("soon"), "soon");
    }

    #[test]
    fn quick_pick_helpers_track_local_today() {
        let today = local_today();
        assert!(is_today(today));
        assert!(is_tomorrow(today + Duration::days(1)));
        assert!(is_day_after_tomorrow(today + Duration::days(2)));
        assert!(!is_tomorrow(today));
    }
}
