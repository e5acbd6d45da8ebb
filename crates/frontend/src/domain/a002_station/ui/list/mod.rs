use contracts::domain::a002_station::aggregate::{count_by_status, toggle_station_status, Station};
use contracts::domain::a002_station::seed::sample_stations;
use contracts::enums::station_status::StationStatus;
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

#[component]
pub fn StationList() -> impl IntoView {
    let page_size = use_app_config().list.default_page_size;
    let list = ListController::new(sample_stations(), page_size);
    let filter = list.query_text();

    let toggle_status = move |id: String| {
        match list.mutate(|stations| toggle_station_status(stations, &id)).flatten() {
            Some(status) => log::info!("station {} -> {}", id, status.display_name()),
            None => log::warn!("station {} not found", id),
        }
    };

    let summary = move || {
        list.records.with(|r| {
            format!(
                "{} online, {} offline, {} in maintenance",
                count_by_status(r, StationStatus::Online),
                count_by_status(r, StationStatus::Offline),
                count_by_status(r, StationStatus::Maintenance),
            )
        })
    };

    view! {
        <PageFrame page_id="a002_station--list" category=PAGE_CAT_LIST>
            <PageHeader
                title=Signal::derive(tr("stations"))
                subtitle=Signal::derive(move || Some(summary()))
            />

            <div class="page__content">
                <ListToolbar controller=list placeholder="Name, location or connector..." />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=90.0>"ID"</TableHeaderCell>
                                <TableHeaderCell min_width=180.0>"Station"</TableHeaderCell>
                                <TableHeaderCell min_width=160.0>"Location"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Connector"</TableHeaderCell>
                                <TableHeaderCell min_width=80.0>"Power"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>{tr("status")}</TableHeaderCell>
                                <TableHeaderCell min_width=60.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || list.items()
                                key=|s: &Station| (s.id.clone(), s.status)
                                children=move |station: Station| {
                                    let id = station.id.clone();
                                    let name = station.name.clone();
                                    let location = station.location.clone();
                                    let connector = station.connector_type.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{station.id.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{move || highlight_matches(&name, &filter.get())}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {move || highlight_matches(&location, &filter.get())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{move || highlight_matches(&connector, &filter.get())}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format!("{:.0} kW", station.power_kw)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <StatusBadge status=station.status />
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| toggle_status(id.clone())
                                                    attr:title={if station.status == StationStatus::Online { "Take offline" } else { "Bring online" }}
                                                >
                                                    {icon("power")}
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
