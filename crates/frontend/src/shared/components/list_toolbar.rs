use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::use_app_config;
use crate::shared::list_utils::{ListController, SearchInput};
use contracts::shared::list_query::Searchable;
use leptos::prelude::*;

/// Filter panel of a list page: search box on the left, pagination on the
/// right.
#[component]
pub fn ListToolbar<T>(
    controller: ListController<T>,
    #[prop(into)]
    placeholder: String,
) -> impl IntoView
where
    T: Searchable + Clone + Send + Sync + 'static,
{
    let state = controller.state;
    let page_size_options = use_app_config().list.page_size_options.clone();

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div class="filter-panel-header__left">
                    <SearchInput
                        value=controller.query_text()
                        on_change=Callback::new(move |q: String| controller.set_query(q))
                        placeholder=placeholder
                    />
                </div>
                <div class="filter-panel-header__center">
                    <PaginationControls
                        current_page=Signal::derive(move || state.with(|s| s.query.page))
                        total_pages=Signal::derive(move || state.with(|s| s.total_pages))
                        total_count=Signal::derive(move || state.with(|s| s.total_count))
                        page_size=Signal::derive(move || state.with(|s| s.query.page_size))
                        on_page_change=Callback::new(move |page| controller.go_to_page(page))
                        on_page_size_change=Callback::new(move |size| controller.change_page_size(size))
                        page_size_options=page_size_options
                    />
                </div>
            </div>
        </div>
    }
}
