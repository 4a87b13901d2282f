/// Display convention for a currency, taken from its canonical locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyStyle {
    pub code: &'static str,
    pub symbol: &'static str,
    pub grouping: char,
    pub decimal: char,
    /// Either 0 or 2.
    pub decimals: u32,
}

const fn style(
    code: &'static str,
    symbol: &'static str,
    grouping: char,
    decimal: char,
    decimals: u32,
) -> CurrencyStyle {
    CurrencyStyle {
        code,
        symbol,
        grouping,
        decimal,
        decimals,
    }
}

const US_STYLE: CurrencyStyle = style("USD", "$", ',', '.', 2);

const STYLES: &[CurrencyStyle] = &[
    style("IDR", "Rp", '.', ',', 2),
    US_STYLE,
    style("EUR", "€", '.', ',', 2),
    style("GBP", "£", ',', '.', 2),
    style("JPY", "¥", ',', '.', 0),
    style("KRW", "₩", ',', '.', 0),
    style("VND", "₫", '.', ',', 0),
    style("CNY", "¥", ',', '.', 2),
    style("SGD", "S$", ',', '.', 2),
    style("MYR", "RM", ',', '.', 2),
    style("THB", "฿", ',', '.', 2),
    style("PHP", "₱", ',', '.', 2),
    style("INR", "₹", ',', '.', 2),
    style("AUD", "A$", ',', '.', 2),
    style("CAD", "C$", ',', '.', 2),
    style("CHF", "CHF", '\'', '.', 2),
    style("HKD", "HK$", ',', '.', 2),
    style("BRL", "R$", '.', ',', 2),
];

impl CurrencyStyle {
    /// Case-insensitive lookup; unknown codes get the US convention.
    pub fn lookup(code: &str) -> CurrencyStyle {
        let code = code.trim();
        STYLES
            .iter()
            .find(|s| s.code.eq_ignore_ascii_case(code))
            .copied()
            .unwrap_or(US_STYLE)
    }

    pub fn is_known(code: &str) -> bool {
        STYLES.iter().any(|s| s.code.eq_ignore_ascii_case(code.trim()))
    }
}

/// Renders a minor-unit amount as a major-unit decimal in the currency's
/// own grouping and decimal convention, e.g. `123456` USD -> `1,234.56`.
pub fn format_currency(minor: i64, code: &str) -> String {
    let style = CurrencyStyle::lookup(code);
    let (negative, body) = unsigned_body(minor, &style);
    if negative {
        format!("-{}", body)
    } else {
        body
    }
}

/// Same as [`format_currency`] with the currency symbol in front,
/// e.g. `-Rp 1.234,56`.
pub fn format_currency_with_symbol(minor: i64, code: &str) -> String {
    let style = CurrencyStyle::lookup(code);
    let (negative, body) = unsigned_body(minor, &style);
    let sign = if negative { "-" } else { "" };
    format!("{}{} {}", sign, style.symbol, body)
}

/// Profit figures always carry a sign: `+1,234.56`, `-5.00`, `0.00`.
pub fn format_signed(minor: i64, code: &str) -> String {
    let formatted = format_currency(minor, code);
    if minor > 0 {
        format!("+{}", formatted)
    } else {
        formatted
    }
}

/// Abbreviates a whole-unit amount to K/M/B with one decimal.
///
/// The currency code is accepted for symmetry with [`format_currency`] but
/// does not change the output.
pub fn format_compact(amount: i64, _code: &str) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let magnitude = amount.unsigned_abs();
    let value = magnitude as f64;

    if value >= 1e9 {
        format!("{}{:.1}B", sign, value / 1e9)
    } else if value >= 1e6 {
        format!("{}{:.1}M", sign, value / 1e6)
    } else if value >= 1e3 {
        format!("{}{:.1}K", sign, value / 1e3)
    } else {
        format!("{}{}", sign, magnitude)
    }
}

/// Splits `minor` into a sign flag and the unsigned formatted body. Rounding
/// for zero-decimal currencies is half away from zero, done on integers.
fn unsigned_body(minor: i64, style: &CurrencyStyle) -> (bool, String) {
    let abs = minor.unsigned_abs();

    let (whole, cents) = if style.decimals == 0 {
        (abs.saturating_add(50) / 100, 0)
    } else {
        (abs / 100, abs % 100)
    };

    let mut body = group_digits(whole, style.grouping);
    if style.decimals > 0 {
        body.push(style.decimal);
        body.push_str(&format!("{:02}", cents));
    }

    // "-0" never shows up, even when a small negative rounds to zero
    let negative = minor < 0 && (whole > 0 || cents > 0);
    (negative, body)
}

fn group_digits(n: u64, separator: char) -> String {
    let digits = n.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
