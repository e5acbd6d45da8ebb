use contracts::domain::a005_workshop::aggregate::{count_by_status, set_workshop_status, Workshop};
use contracts::domain::a005_workshop::seed::sample_workshops;
use contracts::enums::workshop_status::WorkshopStatus;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::list_toolbar::ListToolbar;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::config::use_app_config;
use crate::shared::i18n::tr;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, ListController};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

/// Registered workshops. Applicants see the list read-only; admins can
/// approve or reject pending applications.
#[component]
pub fn WorkshopList(#[prop(optional)] can_review: bool) -> impl IntoView {
    let page_size = use_app_config().list.default_page_size;
    let list = ListController::new(sample_workshops(), page_size);
    let filter = list.query_text();

    let review = move |id: String, status: WorkshopStatus| {
        if list.mutate(|w| set_workshop_status(w, &id, status)) == Some(true) {
            log::info!("workshop {} -> {}", id, status.display_name());
        } else {
            log::warn!("workshop {} not found", id);
        }
    };

    let pending = move || list.records.with(|r| count_by_status(r, WorkshopStatus::Pending));

    view! {
        <PageFrame page_id="a005_workshop--list" category=PAGE_CAT_LIST>
            <PageHeader
                title=Signal::derive(tr("workshops"))
                subtitle=Signal::derive(move || Some(format!("{} pending review", pending())))
            />

            <div class="page__content">
                <ListToolbar controller=list placeholder="Name, owner, city or licence..." />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=180.0>"Workshop"</TableHeaderCell>
                                <TableHeaderCell min_width=150.0>"Owner"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"City"</TableHeaderCell>
                                <TableHeaderCell min_width=130.0>"Licence"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>{tr("status")}</TableHeaderCell>
                                {can_review.then(|| view! {
                                    <TableHeaderCell min_width=90.0>{tr("actions")}</TableHeaderCell>
                                })}
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || list.items()
                                key=|w: &Workshop| (w.id.clone(), w.status)
                                children=move |workshop: Workshop| {
                                    let name = workshop.name.clone();
                                    let owner = workshop.owner.clone();
                                    let city = workshop.city.clone();
                                    let licence = workshop.license_no.clone();
                                    let is_pending = workshop.status == WorkshopStatus::Pending;
                                    let approve_id = workshop.id.clone();
                                    let reject_id = workshop.id.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{move || highlight_matches(&name, &filter.get())}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {move || highlight_matches(&owner, &filter.get())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{move || highlight_matches(&city, &filter.get())}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{move || highlight_matches(&licence, &filter.get())}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <StatusBadge status=workshop.status />
                                                </TableCellLayout>
                                            </TableCell>
                                            {can_review.then(|| view! {
                                                <TableCell>
                                                    <Flex gap=FlexGap::Small>
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            disabled={!is_pending}
                                                            on_click=move |_| review(approve_id.clone(), WorkshopStatus::Approved)
                                                            attr:title="Approve"
                                                        >
                                                            {icon("check")}
                                                        </Button>
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            disabled={!is_pending}
                                                            on_click=move |_| review(reject_id.clone(), WorkshopStatus::Rejected)
                                                            attr:title="Reject"
                                                        >
                                                            {icon("x")}
                                                        </Button>
                                                    </Flex>
                                                </TableCell>
                                            })}
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
