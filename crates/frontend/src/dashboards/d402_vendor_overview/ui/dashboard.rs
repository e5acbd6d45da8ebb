use contracts::domain::a003_product::aggregate::{inventory_value, Product};
use contracts::domain::a003_product::seed::sample_products;
use contracts::domain::a004_order::aggregate::{open_orders, total_revenue, Order};
use contracts::domain::a004_order::seed::sample_orders;
use contracts::system::views::{PortalView, VendorView};
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::format::{format_count, format_inr};
use crate::shared::i18n::tr;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::system::session::context::use_session;

#[derive(Debug, Clone, PartialEq)]
pub struct VendorSummary {
    pub products: usize,
    pub out_of_stock: usize,
    pub inventory_value: f64,
    pub orders: usize,
    pub open_orders: usize,
    pub revenue: f64,
}

impl VendorSummary {
    pub fn compute(products: &[Product], orders: &[Order]) -> Self {
        Self {
            products: products.len(),
            out_of_stock: products.iter().filter(|p| !p.in_stock()).count(),
            inventory_value: inventory_value(products),
            orders: orders.len(),
            open_orders: open_orders(orders),
            revenue: total_revenue(orders),
        }
    }
}

#[component]
pub fn VendorOverview() -> impl IntoView {
    let session = use_session();
    let summary = VendorSummary::compute(&sample_products(), &sample_orders());

    let stock_tone = if summary.out_of_stock == 0 {
        StatTone::Good
    } else {
        StatTone::Warning
    };

    let go = move |view: VendorView| {
        let _ = session.navigate(PortalView::Vendor(view));
    };

    view! {
        <PageFrame page_id="d402_vendor_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title=Signal::derive(tr("dashboard")) subtitle={"Marketplace storefront".to_string()}>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| go(VendorView::Orders)>
                    {tr("orders")}
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| go(VendorView::AddSupplier)>
                    {tr("add_supplier")}
                </Button>
            </PageHeader>

            <div class="stat-grid">
                <StatCard
                    label={"Revenue".to_string()}
                    icon_name="dollar-sign"
                    value={format_inr(summary.revenue)}
                    subtitle={"Excluding cancelled orders".to_string()}
                />
                <StatCard
                    label={"Open orders".to_string()}
                    icon_name="shopping-cart"
                    value={format_count(summary.open_orders)}
                    subtitle={format!("of {} total", summary.orders)}
                />
                <StatCard
                    label={"Products".to_string()}
                    icon_name="package"
                    value={format_count(summary.products)}
                    tone=stock_tone
                    subtitle={format!("{} out of stock", summary.out_of_stock)}
                />
                <StatCard
                    label={"Inventory value".to_string()}
                    icon_name="store"
                    value={format_inr(summary.inventory_value)}
                />
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_from_samples() {
        let s = VendorSummary::compute(&sample_products(), &sample_orders());
        assert!(s.open_orders <= s.orders);
        assert!(s.out_of_stock <= s.products);
        assert!(s.revenue >= 0.0);
    }

    #[test]
    fn test_empty_storefront() {
        let s = VendorSummary::compute(&[], &[]);
        assert_eq!(s.products, 0);
        assert_eq!(s.revenue, 0.0);
        assert_eq!(s.inventory_value, 0.0);
    }
}
