//! Currency display helpers for the presentation layer.
//!
//! The core works in plain integers; these only exist so view models can carry
//! a ready-made label next to each amount.

pub const CURRENCY_SYMBOL: &str = "₹";

/// Group digits the Indian way: last three, then pairs (`1,50,000`).
pub fn group_digits(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{tail}", groups.join(","))
}

/// `₹1,50,000`.
pub fn price_label(amount: u64) -> String {
    format!("{CURRENCY_SYMBOL}{}", group_digits(amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_like_en_in() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(1_000), "1,000");
        assert_eq!(group_digits(25_000), "25,000");
        assert_eq!(group_digits(150_000), "1,50,000");
        assert_eq!(group_digits(500_000), "5,00,000");
        assert_eq!(group_digits(12_345_678), "1,23,45,678");
    }

    #[test]
    fn label_has_rupee_sign() {
        assert_eq!(price_label(120_000), "₹1,20,000");
    }
}
