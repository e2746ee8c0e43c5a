//! Invoice numbering
//!
//! The next invoice number is one past the highest number already in use:
//! every existing invoice number is stripped of an optional literal
//! `INV-` prefix and parsed as an integer, unparsable numbers are
//! ignored, and the result is zero-padded to at least three digits.
//! Neither path here can fail; when the bill collection is unreadable the
//! caller falls back to incrementing whatever number is currently shown.

/// The optional literal prefix tolerated on invoice numbers
const INVOICE_PREFIX: &str = "INV-";

/// Strips the optional `INV-` prefix, leaving the sequence part
pub fn canonical_invoice_no(raw: &str) -> &str {
    raw.strip_prefix(INVOICE_PREFIX).unwrap_or(raw)
}

fn parse_sequence(raw: &str) -> Option<u64> {
    canonical_invoice_no(raw).trim().parse().ok()
}

fn format_sequence(sequence: u64) -> String {
    // minimum three digits, never truncated: 1000 renders as "1000"
    format!("{:03}", sequence)
}

/// Computes the next invoice number from the existing numbers
///
/// An empty collection, or one with no parseable number at all, yields
/// `"001"`.
///
/// # Example
///
/// ```
/// use domain_billing::next_invoice_number;
///
/// let next = next_invoice_number(["001", "INV-003", "abc"]);
/// assert_eq!(next, "004");
/// ```
pub fn next_invoice_number<'a>(existing: impl IntoIterator<Item = &'a str>) -> String {
    let max = existing
        .into_iter()
        .filter_map(parse_sequence)
        .max()
        .unwrap_or(0);
    format_sequence(max + 1)
}

/// Fallback when the bill collection cannot be read: increments the
/// currently displayed number, or starts over at `"001"`
pub fn fallback_invoice_number(displayed: &str) -> String {
    match parse_sequence(displayed) {
        Some(current) => format_sequence(current + 1),
        None => format_sequence(1),
    }
}
