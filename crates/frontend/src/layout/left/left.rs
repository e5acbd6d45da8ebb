use crate::layout::global_context::use_global_context;
use leptos::prelude::*;

/// Drawer around the sidebar. Closed means the narrow icon rail.
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = use_global_context();
    let is_open = move || ctx.left_open.get();

    view! {
        <div
            data-zone="left"
            class="app-sidebar"
            class:app-sidebar--collapsed=move || !is_open()
            style:width=move || if is_open() { "var(--sidebar-open)" } else { "var(--sidebar-closed)" }
        >
            {children()}
        </div>
    }
}
