//! Brazilian Real (BRL) currency formatting and parsing.
//!
//! Formatting follows the `pt-BR` convention: `.` groups thousands, `,`
//! separates the two decimal digits, and the symbol is written as `R$ `.
//! Parsing is deliberately lenient and never fails: anything that cannot be
//! read as a number becomes `0.0`.

const SYMBOL: &str = "R$ ";

/// Format a value as BRL currency, e.g. `1234.56` → `"R$ 1.234,56"`.
///
/// Negative values get a leading minus (`"-R$ 1.234,56"`), including those
/// that round to zero cents. Rounding is half away from zero on the shortest
/// decimal representation of the value, so `1.005` becomes `"R$ 1,01"`.
pub fn format_brl(value: f64) -> String {
    if value.is_nan() {
        return format!("{SYMBOL}NaN");
    }
    let sign = if value < 0.0 { "-" } else { "" };
    if value.is_infinite() {
        return format!("{sign}{SYMBOL}∞");
    }

    let (reais, centavos) = round_to_cents(value.abs());
    format!("{sign}{SYMBOL}{},{centavos}", group_thousands(&reais))
}

/// Split a non-negative finite value into whole reais and two cent digits.
fn round_to_cents(value: f64) -> (String, String) {
    // `Display` never uses exponent notation for f64
    let text = value.to_string();
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(2))
        .collect();

    if frac_part.as_bytes().get(2).is_some_and(|&d| d >= b'5') {
        increment_decimal(&mut digits);
    }

    let split = digits.len() - 2;
    let cents = digits.split_off(split);
    (
        String::from_utf8_lossy(&digits).into_owned(),
        String::from_utf8_lossy(&cents).into_owned(),
    )
}

/// Add one to a string of ASCII decimal digits.
fn increment_decimal(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

/// Insert `.` every three digits from the right.
fn group_thousands(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Parse user-entered BRL text (e.g. `"R$ 100.000,50"`) into a number.
///
/// Keeps only digits, `,`, `.` and `-`; drops every `.` (thousands
/// separators); turns the first `,` into the decimal point; then reads the
/// longest numeric prefix. Returns `0.0` when nothing numeric remains.
///
/// Inputs written with the `en-US` convention (`"1,234.56"`) are misread as
/// `1.23456`; only the Brazilian convention is supported.
pub fn parse_brl(text: &str) -> f64 {
    if text.is_empty() {
        return 0.0;
    }

    let normalized: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, ',' | '-'))
        .collect::<String>()
        .replacen(',', ".", 1);

    let prefix = numeric_prefix(&normalized);
    match prefix.parse::<f64>() {
        Ok(value) if !value.is_nan() => value,
        _ => 0.0,
    }
}

/// Longest prefix of the form `-?digits*(.digits*)?` containing at least one digit.
fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut end = 0;

    if bytes.first() == Some(&b'-') {
        end = 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut has_digits = end > int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > frac_start {
            has_digits = true;
            end = frac_end;
        } else if has_digits {
            // "5." reads as 5
            end = frac_start - 1;
        }
    }

    if has_digits { &s[..end] } else { "" }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_format_basic_values() {
        assert_eq!(format_brl(1234.56), "R$ 1.234,56");
        assert_eq!(format_brl(0.0), "R$ 0,00");
        assert_eq!(format_brl(-1234.56), "-R$ 1.234,56");
    }

    #[test]
    fn test_format_grouping() {
        assert_eq!(format_brl(999.0), "R$ 999,00");
        assert_eq!(format_brl(1000.0), "R$ 1.000,00");
        assert_eq!(format_brl(1_234_567.891), "R$ 1.234.567,89");
        assert_eq!(format_brl(100_000.0), "R$ 100.000,00");
    }

    #[test]
    fn test_format_rounds_to_cents() {
        assert_eq!(format_brl(8791.588723), "R$ 8.791,59");
        assert_eq!(format_brl(0.999), "R$ 1,00");
        assert_eq!(format_brl(0.004), "R$ 0,00");
    }

    #[test]
    fn test_format_rounds_half_cents_up() {
        // Both sit just below the half cent in binary
        assert_eq!(format_brl(1.005), "R$ 1,01");
        assert_eq!(format_brl(2.675), "R$ 2,68");
        assert_eq!(format_brl(-1.005), "-R$ 1,01");
        assert_eq!(format_brl(999.995), "R$ 1.000,00");
        assert_eq!(format_brl(1.0049), "R$ 1,00");
    }

    #[test]
    fn test_format_negative_rounding_to_zero_keeps_sign() {
        assert_eq!(format_brl(-0.001), "-R$ 0,00");
        assert_eq!(format_brl(-0.0), "R$ 0,00");
    }

    #[test]
    fn test_format_huge_values_keep_every_digit() {
        assert_eq!(format_brl(1e21), "R$ 1.000.000.000.000.000.000.000,00");
    }

    #[test]
    fn test_format_non_finite_does_not_panic() {
        assert_eq!(format_brl(f64::NAN), "R$ NaN");
        assert_eq!(format_brl(f64::INFINITY), "R$ ∞");
        assert_eq!(format_brl(f64::NEG_INFINITY), "-R$ ∞");
    }

    #[test]
    fn test_parse_formatted_values() {
        assert_close(parse_brl("R$ 1.234,56"), 1234.56);
        assert_close(parse_brl("1.234,56"), 1234.56);
        assert_close(parse_brl("R$ 100.000,50"), 100_000.5);
        assert_close(parse_brl("-R$ 1.234,56"), -1234.56);
    }

    #[test]
    fn test_parse_plain_numbers() {
        assert_close(parse_brl("100000"), 100_000.0);
        assert_close(parse_brl("100.000"), 100_000.0);
        assert_close(parse_brl(",5"), 0.5);
        assert_close(parse_brl("5,"), 5.0);
    }

    #[test]
    fn test_parse_garbage_is_zero() {
        assert_eq!(parse_brl(""), 0.0);
        assert_eq!(parse_brl("abc"), 0.0);
        assert_eq!(parse_brl("R$"), 0.0);
        assert_eq!(parse_brl("-"), 0.0);
        assert_eq!(parse_brl(","), 0.0);
    }

    #[test]
    fn test_parse_reads_leading_number_only() {
        // Second comma is not a decimal point, parsing stops there
        assert_close(parse_brl("12,34,56"), 12.34);
        assert_close(parse_brl("1-2"), 1.0);
    }

    #[test]
    fn test_parse_us_format_is_misread() {
        // Brazilian locale only: the first comma becomes the decimal point
        assert_close(parse_brl("1,234.56"), 1.23456);
    }

    #[test]
    fn test_format_then_parse_recovers_value() {
        let value = 98_765.43;
        assert_close(parse_brl(&format_brl(value)), value);
    }
}
