use contracts::domain::a001_user::aggregate::{toggle_user_active, UserAccount};
use contracts::domain::a001_user::seed::sample_users;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::list_toolbar::ListToolbar;
use crate::shared::components::page_header::PageHeader;
use crate::shared::config::use_app_config;
use crate::shared::format::format_date;
use crate::shared::i18n::tr;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, ListController};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

/// Operator accounts. Used by VICS user management and the LAW-MIS admin
/// users page, each with its own page id.
#[component]
pub fn UserList(page_id: &'static str) -> impl IntoView {
    let page_size = use_app_config().list.default_page_size;
    let list = ListController::new(sample_users(), page_size);
    let filter = list.query_text();

    let toggle_active = move |id: String| {
        if list.mutate(|users| toggle_user_active(users, &id)) != Some(true) {
            log::warn!("user {} not found", id);
        }
    };

    let active_count = move || list.records.with(|r| r.iter().filter(|u| u.is_active).count());

    view! {
        <PageFrame page_id=page_id category=PAGE_CAT_LIST>
            <PageHeader
                title=Signal::derive(tr("users"))
                subtitle=Signal::derive(move || Some(format!("{} active", active_count())))
            />

            <div class="page__content">
                <ListToolbar controller=list placeholder="Name, email or role..." />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=160.0>"Name"</TableHeaderCell>
                                <TableHeaderCell min_width=180.0>{tr("email")}</TableHeaderCell>
                                <TableHeaderCell min_width=130.0>{tr("phone")}</TableHeaderCell>
                                <TableHeaderCell min_width=130.0>"Role"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Joined"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>{tr("status")}</TableHeaderCell>
                                <TableHeaderCell min_width=60.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || list.items()
                                key=|u: &UserAccount| (u.id.clone(), u.is_active)
                                children=move |user: UserAccount| {
                                    let id = user.id.clone();
                                    let name = user.name.clone();
                                    let email = user.email.clone();
                                    let role = user.role.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{move || highlight_matches(&name, &filter.get())}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {move || highlight_matches(&email, &filter.get())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{user.phone.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{move || highlight_matches(&role, &filter.get())}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_date(user.joined_on)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {if user.is_active {
                                                        view! { <span class="badge badge--success">"Active"</span> }.into_any()
                                                    } else {
                                                        view! { <span class="badge badge--error">"Blocked"</span> }.into_any()
                                                    }}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| toggle_active(id.clone())
                                                    attr:title={if user.is_active { "Block" } else { "Activate" }}
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
