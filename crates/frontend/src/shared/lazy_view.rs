//! Deferred mounting of heavy page content.
//!
//! The wrapped view is built only after one timer tick, so navigation
//! renders the shell and a spinner first. The delay is not cancellable and
//! has no timeout; unmounting before it fires simply drops the result.

use crate::shared::config::use_app_config;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn LazyView(children: ChildrenFn) -> impl IntoView {
    let delay_ms = use_app_config().lazy.spinner_delay_ms;
    let ready = RwSignal::new(false);

    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        // the signal may already be disposed if the page was left
        let _ = ready.try_set(true);
    });

    view! {
        <Show
            when=move || ready.get()
            fallback=|| view! {
                <div class="lazy-view__placeholder">
                    <Flex justify=FlexJustify::Center align=FlexAlign::Center gap=FlexGap::Small>
                        <Spinner />
                        "Loading..."
                    </Flex>
                </div>
            }
        >
            {children()}
        </Show>
    }
}
