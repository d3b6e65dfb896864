const CURRENCY_SYMBOL: &str = "$";

/// Two-decimal rendering without a symbol, as shown in table cells.
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", normalize_zero(amount))
}

/// Two-decimal rendering with a leading dollar sign; negatives read `-$50.00`.
pub fn format_currency(amount: f64) -> String {
    let amount = normalize_zero(amount);
    if amount < 0.0 {
        format!("-{CURRENCY_SYMBOL}{:.2}", amount.abs())
    } else {
        format!("{CURRENCY_SYMBOL}{:.2}", amount)
    }
}

// Avoids printing "-0.00" for values that round to zero.
fn normalize_zero(amount: f64) -> f64 {
    if amount.abs() < 0.005 {
        0.0
    } else {
        amount
    }
}
