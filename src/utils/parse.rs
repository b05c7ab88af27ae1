//! 宽松的整数解析

/// 按前导数字解析整数：忽略前导空白，允许一个正负号，读到第一个非数字为止。
///
/// 没有任何数字时返回 `None`，调用方据此回落到默认值。
pub fn parse_int(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// 解析路径中的资源 ID
pub fn parse_id(input: &str) -> Option<i64> {
    parse_int(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_int("42"), Some(42));
        assert_eq!(parse_int("-7"), Some(-7));
        assert_eq!(parse_int("+3"), Some(3));
    }

    #[test]
    fn test_parse_leading_digits_only() {
        assert_eq!(parse_int("  12abc"), Some(12));
        assert_eq!(parse_int("3.9"), Some(3));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("abc"), None);
        assert_eq!(parse_int("-"), None);
        assert_eq!(parse_int("x1"), None);
    }

    #[test]
    fn test_parse_overflow_is_none() {
        assert_eq!(parse_int("99999999999999999999"), None);
    }
}
