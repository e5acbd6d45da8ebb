/// List page plumbing: paged state over a local record copy, the search box
/// and match highlighting.
use crate::shared::icons::icon;
use contracts::shared::list_query::{paginate, ListQuery, Searchable};
use leptos::prelude::*;

/// Visible slice of a list page plus the query that produced it.
#[derive(Clone, Debug, PartialEq)]
pub struct ListState<T> {
    pub query: ListQuery,
    pub items: Vec<T>,
    pub total_count: usize,
    pub total_pages: usize,
}

impl<T: Searchable + Clone> ListState<T> {
    pub fn new(page_size: usize) -> Self {
        Self {
            query: ListQuery::new(page_size),
            items: Vec::new(),
            total_count: 0,
            total_pages: 1,
        }
    }

    /// Recompute the visible slice. The page is clamped when the records
    /// shrank under it.
    pub fn refresh(&mut self, records: &[T]) {
        let page = paginate(records, &self.query);
        self.query.page = page.page;
        self.items = page.items;
        self.total_count = page.total_count;
        self.total_pages = page.total_pages;
    }
}

/// Local record copy and its paged view. Row actions mutate the copy only;
/// it is dropped with the page.
pub struct ListController<T: Send + Sync + 'static> {
    pub records: RwSignal<Vec<T>>,
    pub state: RwSignal<ListState<T>>,
}

impl<T: Send + Sync + 'static> Clone for ListController<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListController<T> {}

impl<T> ListController<T>
where
    T: Searchable + Clone + Send + Sync + 'static,
{
    pub fn new(records: Vec<T>, page_size: usize) -> Self {
        let mut state = ListState::new(page_size);
        state.refresh(&records);
        Self {
            records: RwSignal::new(records),
            state: RwSignal::new(state),
        }
    }

    pub fn refresh_view(&self) {
        let records = self.records;
        self.state
            .update(|s| records.with_untracked(|r| s.refresh(r)));
    }

    pub fn set_query(&self, query: String) {
        self.state.update(|s| s.query.set_query(query));
        self.refresh_view();
    }

    pub fn go_to_page(&self, page: usize) {
        self.state.update(|s| s.query.set_page(page));
        self.refresh_view();
    }

    pub fn change_page_size(&self, size: usize) {
        self.state.update(|s| s.query.set_page_size(size));
        self.refresh_view();
    }

    /// Apply a row action to the local copy and refresh the page. `None`
    /// once the page is gone.
    pub fn mutate<R>(&self, action: impl FnOnce(&mut Vec<T>) -> R) -> Option<R> {
        let result = self.records.try_update(action);
        self.refresh_view();
        result
    }

    pub fn query_text(&self) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.query.query.clone()))
    }

    pub fn items(&self) -> Vec<T> {
        self.state.with(|s| s.items.clone())
    }
}

/// Split `text` into `(segment, is_match)` pieces for a case-insensitive
/// filter. Match positions found in the lowercase form are mapped back to
/// char boundaries of `text`.
pub fn match_segments<'a>(text: &'a str, filter: &str) -> Vec<(&'a str, bool)> {
    let filter = filter.to_lowercase();
    if filter.is_empty() {
        return vec![(text, false)];
    }

    // origin[i]: byte offset in `text` of the char that produced byte i of `lower`
    let mut lower = String::with_capacity(text.len());
    let mut origin = Vec::with_capacity(text.len() + 1);
    for (offset, ch) in text.char_indices() {
        let before = lower.len();
        lower.extend(ch.to_lowercase());
        origin.extend(std::iter::repeat(offset).take(lower.len() - before));
    }
    origin.push(text.len());

    let mut parts = Vec::new();
    let mut last_lower = 0;
    let mut last = 0;
    while let Some(pos) = lower[last_lower..].find(&filter) {
        let start_lower = last_lower + pos;
        let end_lower = start_lower + filter.len();
        let (start, end) = (origin[start_lower].max(last), origin[end_lower].max(last));
        if start > last {
            parts.push((&text[last..start], false));
        }
        if end > start {
            parts.push((&text[start..end], true));
        }
        last = end;
        last_lower = end_lower;
    }
    if parts.is_empty() {
        return vec![(text, false)];
    }
    if last < text.len() {
        parts.push((&text[last..], false));
    }
    parts
}

/// Highlight matches of `filter` in `text`.
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let parts = match_segments(text, filter)
        .into_iter()
        .map(|(segment, hit)| {
            let segment = segment.to_string();
            if hit {
                view! { <mark class="search-hit">{segment}</mark> }.into_any()
            } else {
                view! { <span>{segment}</span> }.into_any()
            }
        })
        .collect::<Vec<_>>();
    view! { <>{parts}</> }.into_any()
}

/// Search field that reports every keystroke.
#[component]
pub fn SearchInput(
    /// Current filter value
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let is_filter_active = move || !value.get().trim().is_empty();

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=is_filter_active>
                <button
                    class="search-input__clear"
                    title="Clear"
                    on:click=move |_| on_change.run(String::new())
                >
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct City(&'static str);

    impl Searchable for City {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.0]
        }
    }

    fn cities() -> Vec<City> {
        ["Pune", "Delhi", "Mumbai", "Nagpur", "Indore", "Patna", "Surat"]
            .into_iter()
            .map(City)
            .collect()
    }

    #[test]
    fn test_list_state_pages_filtered_records() {
        let mut state = ListState::new(2);
        state.query.set_query("p");
        state.refresh(&cities());
        assert_eq!(state.total_count, 3);
        assert_eq!(state.total_pages, 2);
        assert_eq!(state.items, vec![City("Pune"), City("Nagpur")]);
    }

    #[test]
    fn test_list_state_clamps_page_after_records_shrink() {
        let mut records = cities();
        let mut state = ListState::new(3);
        state.query.set_page(2);
        state.refresh(&records);
        assert_eq!(state.items, vec![City("Surat")]);

        records.pop();
        state.refresh(&records);
        assert_eq!(state.query.page, 1);
        assert_eq!(state.items.len(), 3);
    }

    #[test]
    fn test_segments_case_insensitive() {
        assert_eq!(
            match_segments("Pune Central", "CEN"),
            vec![("Pune ", false), ("Cen", true), ("tral", false)]
        );
    }

    #[test]
    fn test_segments_every_occurrence() {
        assert_eq!(
            match_segments("aXa", "a"),
            vec![("a", true), ("X", false), ("a", true)]
        );
    }

    #[test]
    fn test_no_filter_or_no_match_is_one_piece() {
        assert_eq!(match_segments("Delhi", ""), vec![("Delhi", false)]);
        assert_eq!(match_segments("Delhi", "xyz"), vec![("Delhi", false)]);
    }

    #[test]
    fn test_segments_stay_on_char_boundaries() {
        // "ẞ" shrinks and "İ" grows when lowercased
        let text = "ẞİx";
        let parts = match_segments(text, "x");
        assert_eq!(parts, vec![("ẞİ", false), ("x", true)]);
        assert_eq!(match_segments(text, "ß"), vec![("ẞ", true), ("İx", false)]);
        assert_eq!(
            match_segments("Śrī Ganesh", "rī g"),
            vec![("Ś", false), ("rī G", true), ("anesh", false)]
        );
    }
}
