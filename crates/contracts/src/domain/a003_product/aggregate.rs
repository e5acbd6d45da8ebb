use serde::{Deserialize, Serialize};

use crate::shared::list_query::Searchable;

/// Vendor product listed in the storefront
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub sku: String,
    pub price: f64,
    pub stock: u32,
}

impl Product {
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

impl Searchable for Product {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.category.as_str(),
            self.sku.as_str(),
        ]
    }
}

/// Remove a product from the local list. Returns the removed record.
pub fn remove_product(products: &mut Vec<Product>, id: &str) -> Option<Product> {
    let pos = products.iter().position(|p| p.id == id)?;
    Some(products.remove(pos))
}

pub fn inventory_value(products: &[Product]) -> f64 {
    products.iter().map(|p| p.price * p.stock as f64).sum()
}
