use crate::system::session::context::use_session;
use leptos::prelude::*;

#[component]
pub fn Center(children: Children) -> impl IntoView {
    let session = use_session();
    // lets the stylesheet and DOM inspection see which view is mounted
    let view_key = move || session.current_view().map(|v| v.key()).unwrap_or_default();

    view! {
        <div data-zone="center" data-view=view_key class="app-content" style="flex: 1; overflow: auto;">
            {children()}
        </div>
    }
}
