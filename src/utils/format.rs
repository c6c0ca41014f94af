use rust_decimal::{Decimal, RoundingStrategy};

/// Format a monetary amount for terminal display: thousands grouped with
/// spaces, fractional kopecks shown only when non-zero.
pub fn format_money(amount: Decimal, symbol: &str) -> String {
    let rounded = amount
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let text = rounded.to_string();

    match text.split_once('.') {
        Some((int_part, frac_part)) => {
            format!("{}.{:0<2} {}", group_thousands(int_part), frac_part, symbol)
        }
        None => format!("{} {}", group_thousands(&text), symbol),
    }
}

fn group_thousands(digits: &str) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    format!("{}{}", sign, grouped)
}
