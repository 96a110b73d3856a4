use jiff::civil::Date;

/// Date format used on screen and on the command line
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Parse a DD/MM/YYYY date. Anything else, including impossible dates, is `None`.
pub fn parse_birth_date(text: &str) -> Option<Date> {
    let text = text.trim();
    // Require the full zero-padded form so "1/2/1990" is not half-typed input
    if text.len() != 10 {
        return None;
    }
    Date::strptime(DATE_FORMAT, text).ok()
}

pub fn format_birth_date(date: Date) -> String {
    date.strftime(DATE_FORMAT).to_string()
}

/// Format an annual rate given in percent, e.g. `3.0` -> "3,00% a.a."
pub fn format_annual_rate(percent: f64) -> String {
    let number = format!("{:.2}", percent).replace('.', ",");
    format!("{}% a.a.", number)
}

/// Format a currency value in compact form (e.g., R$ 2,1 mi, R$ 450 mil, R$ 50)
pub fn format_compact_brl(value: f64) -> String {
    let abs_value = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };

    if abs_value >= 1_000_000.0 {
        let millions = format!("{:.1}", abs_value / 1_000_000.0).replace('.', ",");
        format!("{}R$ {} mi", sign, millions)
    } else if abs_value >= 1_000.0 {
        format!("{}R$ {:.0} mil", sign, abs_value / 1_000.0)
    } else {
        format!("{}R$ {:.0}", sign, abs_value)
    }
}

/// Singular/plural month count, e.g. "1 mês", "12 meses"
pub fn format_months(months: i32) -> String {
    if months == 1 {
        "1 mês".to_string()
    } else {
        format!("{} meses", months)
    }
}
