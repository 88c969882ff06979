//! Number formatting for yen amounts and counts.

/// Groups the integer part with commas: `1234567` -> `"1,234,567"`.
pub fn format_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if n < 0 {
        format!("-{}", out)
    } else {
        out
    }
}

/// Yen amount rounded to whole yen: `1234.6` -> `"¥1,235"`.
pub fn format_yen(amount: f64) -> String {
    let rounded = amount.round() as i64;
    if rounded < 0 {
        format!("-¥{}", format_thousands(-rounded))
    } else {
        format!("¥{}", format_thousands(rounded))
    }
}

/// Count with a unit suffix: `(1200, "件")` -> `"1,200件"`.
pub fn format_count(n: i64, unit: &str) -> String {
    format!("{}{}", format_thousands(n), unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(1234567), "1,234,567");
        assert_eq!(format_thousands(-45000), "-45,000");
    }

    #[test]
    fn test_format_yen() {
        assert_eq!(format_yen(0.0), "¥0");
        assert_eq!(format_yen(5000.0), "¥5,000");
        assert_eq!(format_yen(1234.6), "¥1,235");
        assert_eq!(format_yen(-300.0), "-¥300");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(1200, "件"), "1,200件");
    }
}
