//! Number formatting shared by the prompt templates

/// Two decimals with thousands separators: `1234.5` → `1,234.50`.
///
/// `value` must be finite; the metrics layer rejects anything else.
pub fn amount(value: f64) -> String {
    debug_assert!(value.is_finite(), "cannot format non-finite amount {}", value);
    let raw = format!("{:.2}", value.abs());
    let (whole, cents) = raw.split_once('.').unwrap_or((raw.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && raw != "0.00" { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, cents)
}

/// Currency symbol followed by [`amount`].
pub fn money(currency: &str, value: f64) -> String {
    format!("{}{}", currency, amount(value))
}

/// One decimal, as used for percentages.
pub fn percent(value: f64) -> String {
    format!("{:.1}", value)
}
