//! Sidebar with one level of collapsible groups.

use super::nav::{menu_for, ExpandState, NavAction, NavItem};
use crate::layout::global_context::use_global_context;
use crate::shared::config::use_app_config;
use crate::shared::icons::icon;
use crate::shared::theme::use_settings;
use crate::system::session::context::use_session;
use contracts::shared::i18n::translate;
use contracts::system::views::PortalView;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let session = use_session();
    let ctx = use_global_context();
    let settings = use_settings();
    let breakpoint = use_app_config().shell.narrow_breakpoint_px;

    let expand = RwSignal::new(ExpandState::default());

    // Groups holding the current view start expanded.
    Effect::new(move |_| {
        let items = session.session.with(menu_for);
        expand.update(|state| {
            for item in items.iter().filter(|i| i.has_children() && i.selected) {
                state.expand(&item.id);
            }
        });
    });

    let on_navigate = Callback::new(move |target: PortalView| {
        if session.navigate(target).is_ok() {
            ctx.close_left_if_narrow(breakpoint);
        }
    });

    let render_item = move |item: NavItem, depth: usize| {
        let label = move || translate(settings.language(), item.label);
        let action = item.click_action();
        let group_id = item.id.clone();
        let is_group = item.has_children();
        let icon_name = item.icon;
        let selected = item.selected;

        view! {
            <div
                class="app-sidebar__item"
                class:app-sidebar__item--active={selected && !is_group}
                class:app-sidebar__item--parent-active={selected && is_group}
                style:padding-left={format!("{}px", 12 + depth * 12)}
                on:click=move |_| match action.clone() {
                    NavAction::Toggle(id) => expand.update(|state| state.toggle(&id)),
                    NavAction::Navigate(target) => on_navigate.run(target),
                    NavAction::Nothing => {}
                }
            >
                <div class="app-sidebar__item-content">
                    {icon(icon_name)}
                    <span class="app-sidebar__label">{label}</span>
                </div>
                {is_group.then(|| view! {
                    <div
                        class="app-sidebar__chevron"
                        class:app-sidebar__chevron--expanded=move || expand.with(|s| s.is_expanded(&group_id))
                    >
                        {icon("chevron-right")}
                    </div>
                })}
            </div>
        }
    };

    view! {
        <nav class="app-sidebar__content">
            {move || {
                session.session.with(menu_for).into_iter().map(|item| {
                    let children = item.children.clone();
                    let group_id = item.id.clone();
                    view! {
                        <div>
                            {render_item(item, 0)}
                            {(!children.is_empty()).then(|| {
                                let children = StoredValue::new(children);
                                view! {
                                    <Show when=move || expand.with(|s| s.is_expanded(&group_id))>
                                        <div class="app-sidebar__children">
                                            {children.get_value().into_iter()
                                                .map(|child| render_item(child, 1))
                                                .collect_view()}
                                        </div>
                                    </Show>
                                }
                            })}
                        </div>
                    }
                }).collect_view()
            }}
        </nav>
    }
}
