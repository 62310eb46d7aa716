use regex::Regex;
use std::sync::LazyLock;

/// Currency symbol recognised in scraped text and used when formatting
pub const CURRENCY_SYMBOL: &str = "£";

/// A pound sign followed by one or more digits, optionally followed by a
/// period and exactly two digits. Matches "£10" as well as "£10.99".
pub const PRICE_PATTERN: &str = r"£([0-9]+(\.[0-9]{2})?)";

static PRICE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PRICE_PATTERN).expect("Price pattern should be valid"));

/// Extracts the first currency-prefixed amount from a piece of text
///
/// Returns `None` when the text holds no amount.
pub fn extract_price(text: &str) -> Option<f64> {
    let captures = PRICE_REGEX.captures(text)?;
    let amount = captures.get(1)?.as_str();

    match amount.parse::<f64>() {
        Ok(value) => Some(value),
        Err(e) => {
            ::log::debug!("Discarding unparseable amount '{}': {}", amount, e);
            None
        }
    }
}

/// Formats an amount with two decimal places and the currency symbol.
/// The sign goes in front of the symbol, e.g. `-£1.69`.
pub fn format_money(value: f64) -> String {
    // Negative zero prints as "-0.00"
    let value = if value == 0.0 { 0.0 } else { value };

    if value < 0.0 {
        format!("-{}{:.2}", CURRENCY_SYMBOL, value.abs())
    } else {
        format!("{}{:.2}", CURRENCY_SYMBOL, value)
    }
}
