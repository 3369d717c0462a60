//! Cell and card value formatting

/// Table currency cell: `$1,200,000` (no decimals, negatives as `$-720,000`)
pub fn format_currency(value: f64) -> String {
    format!("${}", group_thousands(value))
}

/// Metric card currency: `$ 1,200,000`
pub fn format_currency_card(value: f64) -> String {
    format!("$ {}", group_thousands(value))
}

/// Percentage with two decimals: `40.00%`
pub fn format_pct(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Signed one-decimal delta: `+5.0%` / `-12.3%`, `n/a` when undefined
pub fn format_delta(delta: Option<f64>) -> String {
    match delta {
        Some(d) => format!("{:+.1}%", d),
        None => "n/a".to_string(),
    }
}

/// Round to whole units and insert thousands separators
fn group_thousands(value: f64) -> String {
    let rounded = format!("{:.0}", value);
    let (sign, digits) = match rounded.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rounded.as_str()),
    };

    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    format!("{}{}", sign, out)
}
