use contracts::domain::a003_product::aggregate::{inventory_value, remove_product, Product};
use contracts::domain::a003_product::seed::sample_products;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::list_toolbar::ListToolbar;
use crate::shared::components::page_header::PageHeader;
use crate::shared::config::use_app_config;
use crate::shared::format::format_inr;
use crate::shared::i18n::tr;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, ListController};
use crate::shared::modal::Modal;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

#[component]
pub fn ProductList() -> impl IntoView {
    let page_size = use_app_config().list.default_page_size;
    let list = ListController::new(sample_products(), page_size);
    let filter = list.query_text();
    let pending_delete: RwSignal<Option<Product>> = RwSignal::new(None);

    let confirm_delete = move |_| {
        let Some(product) = pending_delete.get_untracked() else {
            return;
        };
        if let Some(Some(removed)) = list.mutate(|products| remove_product(products, &product.id)) {
            log::info!("product {} removed", removed.sku);
        }
        pending_delete.set(None);
    };

    let value = move || list.records.with(|r| format!("Inventory value {}", format_inr(inventory_value(r))));

    view! {
        <PageFrame page_id="a003_product--list" category=PAGE_CAT_LIST>
            <PageHeader
                title=Signal::derive(tr("products"))
                subtitle=Signal::derive(move || Some(value()))
            />

            <div class="page__content">
                <ListToolbar controller=list placeholder="Name, category or SKU..." />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=110.0>"SKU"</TableHeaderCell>
                                <TableHeaderCell min_width=200.0>"Product"</TableHeaderCell>
                                <TableHeaderCell min_width=140.0>"Category"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Price"</TableHeaderCell>
                                <TableHeaderCell min_width=80.0>"Stock"</TableHeaderCell>
                                <TableHeaderCell min_width=60.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || list.items()
                                key=|p: &Product| p.id.clone()
                                children=move |product: Product| {
                                    let name = product.name.clone();
                                    let category = product.category.clone();
                                    let sku = product.sku.clone();
                                    let stock_class = if product.in_stock() { "" } else { "text-error" };
                                    let for_delete = product.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{move || highlight_matches(&sku, &filter.get())}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{move || highlight_matches(&name, &filter.get())}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{move || highlight_matches(&category, &filter.get())}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_inr(product.price)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class=stock_class>{product.stock}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| pending_delete.set(Some(for_delete.clone()))
                                                    attr:title="Delete"
                                                >
                                                    {icon("trash")}
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

                {move || pending_delete.get().map(|product| view! {
                    <Modal title="Delete product" on_close=Callback::new(move |_| pending_delete.set(None))>
                        <p>{format!("Remove {} ({}) from the catalogue?", product.name, product.sku)}</p>
                        <Flex gap=FlexGap::Small justify=FlexJustify::End>
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| pending_delete.set(None)>
                                "Cancel"
                            </Button>
                            <Button appearance=ButtonAppearance::Primary on_click=confirm_delete>
                                "Delete"
                            </Button>
                        </Flex>
                    </Modal>
                })}
            </div>
        </PageFrame>
    }
}
