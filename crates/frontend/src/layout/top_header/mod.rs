//! TopHeader: drawer toggle, portal title, breadcrumbs and account actions.

pub mod breadcrumbs;

use crate::layout::global_context::use_global_context;
use crate::shared::i18n::tr;
use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;
use crate::system::session::context::use_session;
use breadcrumbs::Breadcrumbs;
use contracts::system::profile::ProfileInfo;
use contracts::system::views::PortalView;
use leptos::prelude::*;

#[component]
pub fn TopHeader(#[prop(into)] title: Signal<String>) -> impl IntoView {
    let ctx = use_global_context();
    let session = use_session();

    let is_sidebar_visible = move || ctx.left_open.get();

    let user_label = move || {
        session
            .role()
            .map(|role| ProfileInfo::for_context(role, session.sub_role()).display_name)
            .unwrap_or_default()
    };

    let go_to = move |pick: fn(&PortalView) -> PortalView| {
        if let Some(current) = session.session.with_untracked(|s| s.current_view()) {
            let _ = session.navigate(pick(&current));
        }
    };

    let logout = move |_| {
        ctx.clear_session_data();
        session.logout();
    };

    let settings_title = tr("settings");
    let logout_title = tr("logout");

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Collapse navigation" } else { "Expand navigation" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">{move || title.get()}</span>
            </div>

            <div class="top-header__crumbs">
                <Breadcrumbs />
            </div>

            <div class="top-header__actions">
                <ThemeToggle />

                <button
                    class="top-header__icon-btn"
                    title=settings_title
                    on:click=move |_| go_to(|v| v.settings_view())
                >
                    {icon("settings")}
                </button>

                <button
                    class="top-header__user"
                    on:click=move |_| go_to(|v| v.profile_view())
                >
                    {icon("user")}
                    <span>{user_label}</span>
                </button>

                <button class="top-header__icon-btn" on:click=logout title=logout_title>
                    {icon("log-out")}
                </button>
            </div>
        </header>
    }
}
