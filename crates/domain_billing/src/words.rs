//! Amount in words, Indian numbering
//!
//! Converts a rupee amount to the "Rupees ... Only" phrase printed on an
//! invoice, grouped by crore, lakh, and thousand. Paise are dropped; the
//! grand total is already rounded to a whole amount by the time it is
//! spelled out.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

const ONES: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

fn two_digits(n: u64) -> String {
    debug_assert!(n < 100);
    if n < 20 {
        ONES[n as usize].to_string()
    } else if n % 10 == 0 {
        TENS[(n / 10) as usize].to_string()
    } else {
        format!("{} {}", TENS[(n / 10) as usize], ONES[(n % 10) as usize])
    }
}

fn hundreds(n: u64) -> String {
    debug_assert!(n < 1000);
    if n < 100 {
        two_digits(n)
    } else if n % 100 == 0 {
        format!("{} Hundred", ONES[(n / 100) as usize])
    } else {
        format!("{} Hundred {}", ONES[(n / 100) as usize], two_digits(n % 100))
    }
}

/// Spells out a whole rupee amount in the Indian numbering system
///
/// Any fractional part is truncated. Negative amounts read as their
/// absolute value; the callers never produce one.
pub fn amount_in_words(amount: Decimal) -> String {
    let rupees = amount.abs().trunc().to_u64().unwrap_or(0);
    if rupees == 0 {
        return "Rupees Zero Only".to_string();
    }

    let mut parts: Vec<String> = Vec::new();
    let mut remaining = rupees;

    let crore = remaining / 10_000_000;
    remaining %= 10_000_000;
    if crore > 0 {
        // crores above 99 recurse through the same grouping
        if crore >= 100 {
            parts.push(format!(
                "{} Crore",
                amount_in_words(Decimal::from(crore))
                    .trim_start_matches("Rupees ")
                    .trim_end_matches(" Only")
            ));
        } else {
            parts.push(format!("{} Crore", two_digits(crore)));
        }
    }

    let lakh = remaining / 100_000;
    remaining %= 100_000;
    if lakh > 0 {
        parts.push(format!("{} Lakh", two_digits(lakh)));
    }

    let thousand = remaining / 1_000;
    remaining %= 1_000;
    if thousand > 0 {
        parts.push(format!("{} Thousand", two_digits(thousand)));
    }

    if remaining > 0 {
        parts.push(hundreds(remaining));
    }

    format!("Rupees {} Only", parts.join(" "))
}
