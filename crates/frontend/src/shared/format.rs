/// Display formatting shared by list pages and dashboards
use chrono::NaiveDate;

/// Format a date as DD.MM.YYYY
/// Example: 2024-03-15 -> "15.03.2024"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Format an amount in rupees with Indian digit grouping
/// Example: 1234567.5 -> "₹12,34,567.50"
pub fn format_inr(amount: f64) -> String {
    let negative = amount < 0.0;
    let paise = (amount.abs() * 100.0).round() as u64;
    let rupees = (paise / 100).to_string();
    let fraction = paise % 100;

    let grouped = if rupees.len() <= 3 {
        rupees
    } else {
        let (head, last3) = rupees.split_at(rupees.len() - 3);
        let mut groups: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 2 {
            groups.push(&head[end - 2..end]);
            end -= 2;
        }
        groups.push(&head[..end]);
        groups.reverse();
        format!("{},{}", groups.join(","), last3)
    };

    format!("{}₹{}.{:02}", if negative { "-" } else { "" }, grouped, fraction)
}

/// Compact integer with a no-break space every three digits, used on stat cards.
pub fn format_count(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('\u{00a0}');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(format_date(date), "15.03.2024");
    }

    #[test]
    fn test_format_inr_grouping() {
        assert_eq!(format_inr(0.0), "₹0.00");
        assert_eq!(format_inr(999.0), "₹999.00");
        assert_eq!(format_inr(1000.0), "₹1,000.00");
        assert_eq!(format_inr(123456.0), "₹1,23,456.00");
        assert_eq!(format_inr(1234567.5), "₹12,34,567.50");
        assert_eq!(format_inr(-2500.25), "-₹2,500.25");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(7), "7");
        assert_eq!(format_count(12500), "12\u{00a0}500");
    }
}
