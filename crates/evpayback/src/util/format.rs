//! Display formatting for money, distances and payback years

/// Insert thousands separators into a whole number
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a currency value with cents, e.g. `-$1,234.50`
pub fn format_currency(value: f64) -> String {
    // Round on total cents so 0.999 becomes $1.00 rather than $0.100
    let total_cents = (value.abs() * 100.0).round() as u64;
    let dollars = group_thousands(total_cents / 100);
    let cents = total_cents % 100;

    if value < 0.0 {
        format!("-${dollars}.{cents:02}")
    } else {
        format!("${dollars}.{cents:02}")
    }
}

/// Format a currency value without cents (shorter format for KPIs and tables)
pub fn format_currency_short(value: f64) -> String {
    let dollars = group_thousands(value.abs().round() as u64);

    if value < 0.0 {
        format!("-${dollars}")
    } else {
        format!("${dollars}")
    }
}

/// Format an annual distance, e.g. `15,000`
pub fn format_km(km: u32) -> String {
    group_thousands(u64::from(km))
}

/// Format a payback period in years.
///
/// - no payback (or a non-finite value): `N/A`
/// - above `cap`: `>15`
/// - under 10 years: one decimal, trailing `.0` dropped
/// - otherwise: whole years
pub fn format_years(years: Option<f64>, cap: f64) -> String {
    match years {
        Some(y) if y.is_finite() => {
            if y > cap {
                format!(">{cap}")
            } else if y < 10.0 {
                // + 0.0 turns -0.0 into 0.0
                format!("{}", (y * 10.0).round() / 10.0 + 0.0)
            } else {
                format!("{}", y.round())
            }
        }
        _ => "N/A".to_string(),
    }
}
