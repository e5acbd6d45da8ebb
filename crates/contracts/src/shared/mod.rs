pub mod config;
pub mod i18n;
pub mod list_query;
pub mod settings;
pub mod theme;
pub mod wizard;
