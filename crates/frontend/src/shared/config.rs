use contracts::shared::config::{app_config, AppConfig};
use leptos::prelude::*;

/// Parse the embedded configuration once and expose it to the component tree.
pub fn provide_app_config() -> &'static AppConfig {
    let config = app_config();
    provide_context(config);
    config
}

pub fn use_app_config() -> &'static AppConfig {
    use_context::<&'static AppConfig>().expect("AppConfig context not found")
}
