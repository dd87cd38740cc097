//! Display formatting for rupee amounts.

/// Format a whole-rupee amount with Indian digit grouping.
///
/// The last three digits form one group, the rest are grouped in pairs.
///
/// # Examples
/// ```
/// use pandit_pricing::pricing::format_currency;
///
/// assert_eq!(format_currency(1234567, true), "₹12,34,567");
/// assert_eq!(format_currency(950, false), "950");
/// ```
pub fn format_currency(amount: i64, show_symbol: bool) -> String {
    let digits = amount.unsigned_abs().to_string();

    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut groups: Vec<&str> = Vec::new();
        let mut rest = head;
        while rest.len() > 2 {
            let (left, pair) = rest.split_at(rest.len() - 2);
            groups.push(pair);
            rest = left;
        }
        groups.push(rest);
        groups.reverse();
        format!("{},{}", groups.join(","), tail)
    };

    let sign = if amount < 0 { "-" } else { "" };
    let symbol = if show_symbol { "₹" } else { "" };
    format!("{sign}{symbol}{grouped}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_small_amounts() {
        assert_eq!(format_currency(0, true), "₹0");
        assert_eq!(format_currency(7, false), "7");
        assert_eq!(format_currency(999, true), "₹999");
    }

    #[test]
    fn test_format_indian_grouping() {
        assert_eq!(format_currency(1000, false), "1,000");
        assert_eq!(format_currency(10774, true), "₹10,774");
        assert_eq!(format_currency(200000, false), "2,00,000");
        assert_eq!(format_currency(1234567, false), "12,34,567");
        assert_eq!(format_currency(123456789, false), "12,34,56,789");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(format_currency(-1500, true), "-₹1,500");
        assert_eq!(format_currency(i64::MIN, false), "-92,23,37,20,36,85,47,75,808");
    }
}
