use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::order_status::OrderStatus;
use crate::shared::list_query::Searchable;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer: String,
    pub product: String,
    pub quantity: u32,
    pub amount: f64,
    pub status: OrderStatus,
    pub ordered_on: NaiveDate,
}

impl Searchable for Order {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.id.as_str(),
            self.customer.as_str(),
            self.product.as_str(),
            self.status.display_name(),
        ]
    }
}

pub fn advance_order(orders: &mut [Order], id: &str) -> Option<OrderStatus> {
    let order = orders.iter_mut().find(|o| o.id == id)?;
    order.status = order.status.advanced();
    Some(order.status)
}

/// Revenue of all non-cancelled orders.
pub fn total_revenue(orders: &[Order]) -> f64 {
    orders
        .iter()
        .filter(|o| o.status != OrderStatus::Cancelled)
        .map(|o| o.amount)
        .sum()
}

pub fn open_orders(orders: &[Order]) -> usize {
    orders.iter().filter(|o| !o.status.is_terminal()).count()
}
