use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::config::provide_app_config;
use crate::shared::theme::ThemeProvider;
use crate::system::auth::context::AuthService;
use crate::system::session::context::SessionContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = provide_app_config();

    // Session is the single source of truth for what is on screen.
    provide_context(SessionContext::new());
    provide_context(AuthService::from_config(config));
    provide_context(AppGlobalContext::new());

    view! {
        <ThemeProvider>
            <AppRoutes />
        </ThemeProvider>
    }
}
