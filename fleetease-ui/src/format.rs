//! Display and form-input conversions shared by the pages

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Pickup time assumed when only a date is picked
const DEFAULT_HOUR: u32 = 10;

/// Parse an `<input type="date">` or `datetime-local` value
pub fn parse_date_input(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(datetime) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M") {
        return Some(datetime.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(DEFAULT_HOUR, 0, 0))
        .map(|datetime| datetime.and_utc())
}

/// Value for an `<input type="date">`
pub fn date_input_value(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

pub fn format_date(value: DateTime<Utc>) -> String {
    value.format("%d.%m.%Y").to_string()
}

pub fn format_money(amount: f64) -> String {
    format!("₺{:.2}", amount)
}

/// Trimmed text, `None` when blank
pub fn optional(value: String) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Parse a number field, `None` when blank or malformed
pub fn parse_number<T: std::str::FromStr>(value: &str) -> Option<T> {
    value.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_date_input() {
        assert_eq!(
            parse_date_input("2024-07-01"),
            Some(Utc.with_ymd_and_hms(2024, 7, 1, 10, 0, 0).unwrap())
        );
        assert_eq!(
            parse_date_input("2024-07-01T08:30"),
            Some(Utc.with_ymd_and_hms(2024, 7, 1, 8, 30, 0).unwrap())
        );
        assert_eq!(parse_date_input(""), None);
        assert_eq!(parse_date_input("01.07.2024"), None);
    }

    #[test]
    fn test_date_input_value() {
        let date = Utc.with_ymd_and_hms(2024, 7, 1, 10, 0, 0).unwrap();
        assert_eq!(date_input_value(Some(date)), "2024-07-01");
        assert_eq!(date_input_value(None), "");
        assert_eq!(format_date(date), "01.07.2024");
    }

    #[test]
    fn test_money_and_numbers() {
        assert_eq!(format_money(1500.0), "₺1500.00");
        assert_eq!(parse_number::<f64>(" 12.5 "), Some(12.5));
        assert_eq!(parse_number::<u32>("many"), None);
        assert_eq!(optional("  ".to_string()), None);
        assert_eq!(optional(" Ankara ".to_string()).as_deref(), Some("Ankara"));
    }
}
