use serde::{Deserialize, Serialize};

/// Status of an order in the vendor storefront
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Next status in the fulfilment chain. Terminal states stay put.
    pub fn advanced(&self) -> Self {
        match self {
            OrderStatus::Pending => OrderStatus::Shipped,
            OrderStatus::Shipped => OrderStatus::Delivered,
            other => *other,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}
