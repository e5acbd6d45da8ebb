pub mod components;
pub mod config;
pub mod format;
pub mod i18n;
pub mod icons;
pub mod lazy_view;
pub mod list_utils;
pub mod modal;
pub mod page_frame;
pub mod page_standard;
pub mod theme;
