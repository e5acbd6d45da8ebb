use leptos::prelude::*;

/// Page title row with an actions slot on the right.
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: Signal<String>,

    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Action buttons
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">{move || title.get()}</h1>
                {move || subtitle.get().map(|s| view! {
                    <div class="page__subtitle">{s}</div>
                })}
            </div>
            <div class="page__header-right">
                {children.map(|c| c())}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_without_actions() {
        let owner = Owner::new();
        owner.with(|| {
            let props = PageHeaderProps::builder()
                .title(Signal::stored("Users".to_string()))
                .build();
            assert!(props.children.is_none());
            assert_eq!(props.title.get_untracked(), "Users");
        });
    }
}
