use super::aggregate::Product;

fn product(id: &str, name: &str, category: &str, sku: &str, price: f64, stock: u32) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        sku: sku.to_string(),
        price,
        stock,
    }
}

pub fn sample_products() -> Vec<Product> {
    vec![
        product("P-201", "Brake Tester Roller Set", "Testing Equipment", "BT-RS-01", 185000.0, 4),
        product("P-202", "Headlight Aligner", "Testing Equipment", "HL-AL-02", 42000.0, 11),
        product("P-203", "Exhaust Gas Analyzer", "Emission", "EG-AN-03", 96500.0, 6),
        product("P-204", "Smoke Opacity Meter", "Emission", "SO-MT-04", 78000.0, 0),
        product("P-205", "Side Slip Tester", "Testing Equipment", "SS-TS-05", 64000.0, 3),
        product("P-206", "Sound Level Meter", "Noise", "SL-MT-06", 15500.0, 20),
        product("P-207", "Speedometer Calibrator", "Calibration", "SP-CL-07", 72000.0, 2),
        product("P-208", "Tyre Tread Gauge", "Hand Tools", "TT-GA-08", 850.0, 140),
        product("P-209", "Axle Load Scale", "Weighing", "AX-LS-09", 210000.0, 1),
        product("P-210", "Suspension Tester", "Testing Equipment", "SU-TS-10", 158000.0, 5),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_product::aggregate::{inventory_value, remove_product};
    use crate::shared::list_query::filter_records;

    #[test]
    fn test_category_search() {
        let products = sample_products();
        assert_eq!(filter_records(&products, "emission").len(), 2);
        assert_eq!(filter_records(&products, "tt-ga").len(), 1);
    }

    #[test]
    fn test_remove_product() {
        let mut products = sample_products();
        let removed = remove_product(&mut products, "P-204").unwrap();
        assert!(!removed.in_stock());
        assert_eq!(products.len(), 9);
        assert!(remove_product(&mut products, "P-204").is_none());
    }

    #[test]
    fn test_inventory_value() {
        let products = vec![
            product("a", "A", "c", "s", 10.0, 3),
            product("b", "B", "c", "s", 2.5, 4),
        ];
        assert_eq!(inventory_value(&products), 40.0);
    }
}
