use chrono::NaiveDate;

use super::aggregate::Order;
use crate::enums::order_status::OrderStatus;

fn order(
    id: &str,
    customer: &str,
    product: &str,
    quantity: u32,
    amount: f64,
    status: OrderStatus,
    ordered_on: (i32, u32, u32),
) -> Order {
    Order {
        id: id.to_string(),
        customer: customer.to_string(),
        product: product.to_string(),
        quantity,
        amount,
        status,
        ordered_on: NaiveDate::from_ymd_opt(ordered_on.0, ordered_on.1, ordered_on.2)
            .unwrap_or_default(),
    }
}

pub fn sample_orders() -> Vec<Order> {
    use OrderStatus::*;
    vec![
        order("ORD-5001", "Sai Auto Testing Centre", "Headlight Aligner", 1, 42000.0, Delivered, (2024, 9, 2)),
        order("ORD-5002", "Ganesh Motors Workshop", "Exhaust Gas Analyzer", 1, 96500.0, Shipped, (2024, 9, 10)),
        order("ORD-5003", "Shree Fitness Station", "Tyre Tread Gauge", 10, 8500.0, Pending, (2024, 9, 14)),
        order("ORD-5004", "Metro Vehicle Inspection", "Brake Tester Roller Set", 1, 185000.0, Pending, (2024, 9, 18)),
        order("ORD-5005", "Sai Auto Testing Centre", "Sound Level Meter", 2, 31000.0, Cancelled, (2024, 9, 21)),
        order("ORD-5006", "Highway ATS Pvt Ltd", "Side Slip Tester", 1, 64000.0, Shipped, (2024, 10, 1)),
        order("ORD-5007", "Ganesh Motors Workshop", "Suspension Tester", 1, 158000.0, Delivered, (2024, 10, 4)),
        order("ORD-5008", "Metro Vehicle Inspection", "Speedometer Calibrator", 1, 72000.0, Pending, (2024, 10, 9)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_order::aggregate::{advance_order, open_orders, total_revenue};
    use crate::shared::list_query::filter_records;

    #[test]
    fn test_search_by_status_label() {
        let orders = sample_orders();
        assert_eq!(filter_records(&orders, "pending").len(), 3);
        assert_eq!(filter_records(&orders, "sai auto").len(), 2);
    }

    #[test]
    fn test_advance_stops_at_terminal_state() {
        let mut orders = sample_orders();
        assert_eq!(advance_order(&mut orders, "ORD-5003"), Some(OrderStatus::Shipped));
        assert_eq!(advance_order(&mut orders, "ORD-5003"), Some(OrderStatus::Delivered));
        assert_eq!(advance_order(&mut orders, "ORD-5003"), Some(OrderStatus::Delivered));
        assert_eq!(advance_order(&mut orders, "ORD-5005"), Some(OrderStatus::Cancelled));
    }

    #[test]
    fn test_revenue_skips_cancelled() {
        let orders = sample_orders();
        let all: f64 = orders.iter().map(|o| o.amount).sum();
        assert_eq!(total_revenue(&orders), all - 31000.0);
        assert_eq!(open_orders(&orders), 5);
    }
}
