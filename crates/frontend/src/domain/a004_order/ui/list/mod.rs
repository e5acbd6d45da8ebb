use contracts::domain::a004_order::aggregate::{advance_order, open_orders, total_revenue, Order};
use contracts::domain::a004_order::seed::sample_orders;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::list_toolbar::ListToolbar;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::config::use_app_config;
use crate::shared::format::{format_date, format_inr};
use crate::shared::i18n::tr;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, ListController};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

#[component]
pub fn OrderList() -> impl IntoView {
    let page_size = use_app_config().list.default_page_size;
    let list = ListController::new(sample_orders(), page_size);
    let filter = list.query_text();

    let advance = move |id: String| {
        match list.mutate(|orders| advance_order(orders, &id)).flatten() {
            Some(status) => log::info!("order {} -> {}", id, status.display_name()),
            None => log::warn!("order {} not found", id),
        }
    };

    let summary = move || {
        list.records.with(|r| {
            format!("{} open, revenue {}", open_orders(r), format_inr(total_revenue(r)))
        })
    };

    view! {
        <PageFrame page_id="a004_order--list" category=PAGE_CAT_LIST>
            <PageHeader
                title=Signal::derive(tr("orders"))
                subtitle=Signal::derive(move || Some(summary()))
            />

            <div class="page__content">
                <ListToolbar controller=list placeholder="Order, customer, product or status..." />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=100.0>"Order"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Date"</TableHeaderCell>
                                <TableHeaderCell min_width=160.0>"Customer"</TableHeaderCell>
                                <TableHeaderCell min_width=180.0>"Product"</TableHeaderCell>
                                <TableHeaderCell min_width=60.0>"Qty"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Amount"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>{tr("status")}</TableHeaderCell>
                                <TableHeaderCell min_width=60.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || list.items()
                                key=|o: &Order| (o.id.clone(), o.status)
                                children=move |order: Order| {
                                    let id = order.id.clone();
                                    let order_no = order.id.clone();
                                    let customer = order.customer.clone();
                                    let product = order.product.clone();
                                    let terminal = order.status.is_terminal();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{move || highlight_matches(&order_no, &filter.get())}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_date(order.ordered_on)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {move || highlight_matches(&customer, &filter.get())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {move || highlight_matches(&product, &filter.get())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{order.quantity}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_inr(order.amount)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <StatusBadge status=order.status />
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    disabled=terminal
                                                    on_click=move |_| advance(id.clone())
                                                    attr:title="Advance status"
                                                >
                                                    {icon("arrow-right")}
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>

                    <Show when=move || list.state.with(|s| s.total_count == 0)>
                        <div class="empty-state">{tr("no_records")}</div>
                    </Show>
                </div>
            </div>
        </PageFrame>
    }
}
