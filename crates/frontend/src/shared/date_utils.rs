/// Utilities for date and time formatting
///
/// Backend dates arrive as ISO strings; screens show them as `YYYY/MM/DD`.

/// Format ISO date string to YYYY/MM/DD
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "2024/03/15"
pub fn format_date(date_str: &str) -> String {
    format_date_with(date_str, "YYYY/MM/DD")
}

/// Format ISO datetime string to YYYY/MM/DD HH:MM
/// Example: "2024-03-15T14:02:26.123Z" -> "2024/03/15 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        let date = format_date(date_part);
        if date != date_part {
            let time: String = time_part.chars().take(5).collect();
            return format!("{} {}", date, time);
        }
    }
    format_date(datetime_str)
}

/// Format an ISO date with one of the user selectable patterns
/// (`YYYY/MM/DD`, `DD/MM/YYYY`, `MM/DD/YYYY`). Unparseable input is returned as is.
pub fn format_date_with(date_str: &str, pattern: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    let mut parts = date_part.splitn(3, '-');
    let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) else {
        return date_str.to_string();
    };
    if year.len() != 4 || month.len() != 2 || day.len() != 2 {
        return date_str.to_string();
    }
    match pattern {
        "DD/MM/YYYY" => format!("{}/{}/{}", day, month, year),
        "MM/DD/YYYY" => format!("{}/{}/{}", month, day, year),
        _ => format!("{}/{}/{}", year, month, day),
    }
}

/// Today's date in the browser's local time zone.
pub fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "2024/03/15");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "2024/03/15");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "2024/03/15 14:02");
        assert_eq!(format_datetime("2024-12-31"), "2024/12/31");
    }

    #[test]
    fn test_patterns() {
        assert_eq!(format_date_with("2024-03-05", "DD/MM/YYYY"), "05/03/2024");
        assert_eq!(format_date_with("2024-03-05", "MM/DD/YYYY"), "03/05/2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("2024/03/05"), "2024/03/05");
    }
}
