use crate::shared::theme::use_settings;
use crate::system::session::context::use_session;
use contracts::shared::i18n::{translate, Language};
use contracts::system::views::{breadcrumbs_for_path, Crumb, LawMisView, PortalView, VendorView};
use leptos::prelude::*;

/// Translation key of a LAW-MIS or vendor view title.
pub fn law_mis_title_key(view: LawMisView) -> &'static str {
    match view {
        LawMisView::Dashboard => "dashboard",
        LawMisView::AddWorkshop => "add_workshop",
        LawMisView::Workshops => "workshops",
        LawMisView::Users => "users",
        LawMisView::Profile => "profile",
        LawMisView::ChangePassword => "change_password",
        LawMisView::Settings => "settings",
    }
}

pub fn vendor_title_key(view: VendorView) -> &'static str {
    match view {
        VendorView::Dashboard => "dashboard",
        VendorView::Products => "products",
        VendorView::Orders => "orders",
        VendorView::VendorRegistration => "vendor_registration",
        VendorView::AddSupplier => "add_supplier",
        VendorView::Profile => "profile",
        VendorView::ChangePassword => "change_password",
        VendorView::Settings => "settings",
    }
}

/// Breadcrumbs of a view. VICS views use their path form; the other
/// families show one translated segment, and dashboards show none.
pub fn crumbs_for(view: PortalView, language: Language) -> Vec<Crumb> {
    let single = |key: &'static str| {
        vec![Crumb {
            label: translate(language, key),
            navigable: false,
            current: true,
        }]
    };
    match view {
        PortalView::Vics(v) => breadcrumbs_for_path(&v.as_path()),
        _ if view.is_dashboard() => Vec::new(),
        PortalView::LawMis(v) => single(law_mis_title_key(v)),
        PortalView::Vendor(v) => single(vendor_title_key(v)),
    }
}

#[component]
pub fn Breadcrumbs() -> impl IntoView {
    let session = use_session();
    let settings = use_settings();

    let crumbs = move || {
        session
            .current_view()
            .map(|view| crumbs_for(view, settings.language()))
            .unwrap_or_default()
    };

    view! {
        <Show when=move || !crumbs().is_empty()>
            <nav class="breadcrumbs" aria-label="breadcrumb">
                {move || {
                    crumbs().into_iter().enumerate().map(|(i, crumb)| {
                        view! {
                            {(i > 0).then(|| view! { <span class="breadcrumbs__sep">"/"</span> })}
                            <span
                                class="breadcrumbs__item"
                                class:breadcrumbs__item--current={crumb.current}
                                class:breadcrumbs__item--disabled={!crumb.navigable}
                                aria-current={crumb.current.then_some("page")}
                            >
                                {crumb.label}
                            </span>
                        }
                    }).collect_view()
                }}
            </nav>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::views::{ManagementView, VicsView};

    #[test]
    fn test_vics_management_has_parent_and_child() {
        let crumbs = crumbs_for(
            PortalView::Vics(VicsView::Management(ManagementView::Station)),
            Language::En,
        );
        let labels: Vec<_> = crumbs.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Management", "Station"]);
        assert!(!crumbs[0].navigable);
    }

    #[test]
    fn test_dashboards_have_no_crumbs() {
        assert!(crumbs_for(PortalView::Vics(VicsView::Dashboard), Language::En).is_empty());
        assert!(crumbs_for(PortalView::Vendor(VendorView::Dashboard), Language::Hi).is_empty());
    }

    #[test]
    fn test_law_mis_crumb_is_translated() {
        let crumbs = crumbs_for(PortalView::LawMis(LawMisView::Workshops), Language::Hi);
        assert_eq!(crumbs.len(), 1);
        assert_eq!(crumbs[0].label, "वर्कशॉप");
        assert!(crumbs[0].current);
    }
}
