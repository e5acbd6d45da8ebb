//! Authenticated portals: the shell plus a content switch over the current
//! view of the session.

use crate::dashboards::d400_vics_overview::VicsOverview;
use crate::dashboards::d401_law_mis_overview::LawMisOverview;
use crate::dashboards::d402_vendor_overview::VendorOverview;
use crate::domain::a001_user::ui::list::UserList;
use crate::domain::a002_station::ui::list::StationList;
use crate::domain::a003_product::ui::list::ProductList;
use crate::domain::a004_order::ui::list::OrderList;
use crate::domain::a005_workshop::ui::list::WorkshopList;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use crate::shared::config::use_app_config;
use crate::shared::lazy_view::LazyView;
use crate::system::pages::change_password::ChangePasswordPage;
use crate::system::pages::profile::ProfilePage;
use crate::system::pages::settings::SettingsPage;
use crate::system::session::context::use_session;
use crate::usecases::u501_workshop_registration::WorkshopRegistrationPage;
use crate::usecases::u502_vendor_registration::VendorRegistrationPage;
use crate::usecases::u503_supplier_form::SupplierFormPage;
use contracts::system::session::SubRole;
use contracts::system::views::{LawMisView, ManagementView, PortalView, VendorView, VicsView};
use leptos::prelude::*;

fn render_vics(view: VicsView) -> AnyView {
    match view {
        VicsView::Dashboard => view! { <VicsOverview /> }.into_any(),
        VicsView::Management(ManagementView::User) => {
            view! { <LazyView><UserList page_id="a001_user--list" /></LazyView> }.into_any()
        }
        VicsView::Management(ManagementView::Station) => {
            view! { <LazyView><StationList /></LazyView> }.into_any()
        }
        VicsView::Profile => view! { <ProfilePage /> }.into_any(),
        VicsView::ChangePassword => view! { <ChangePasswordPage /> }.into_any(),
        VicsView::Settings => view! { <SettingsPage /> }.into_any(),
    }
}

fn render_law_mis(view: LawMisView, sub_role: SubRole) -> AnyView {
    let is_admin = sub_role == SubRole::Admin;
    match view {
        LawMisView::Dashboard => view! { <LawMisOverview sub_role=sub_role /> }.into_any(),
        LawMisView::AddWorkshop => view! {
            <LazyView><WorkshopRegistrationPage /></LazyView>
        }
        .into_any(),
        LawMisView::Workshops => view! {
            <LazyView><WorkshopList can_review=is_admin /></LazyView>
        }
        .into_any(),
        LawMisView::Users => view! {
            <LazyView><UserList page_id="a001_user_law_mis--list" /></LazyView>
        }
        .into_any(),
        LawMisView::Profile => view! { <ProfilePage /> }.into_any(),
        LawMisView::ChangePassword => view! { <ChangePasswordPage /> }.into_any(),
        LawMisView::Settings => view! { <SettingsPage /> }.into_any(),
    }
}

fn render_vendor(view: VendorView) -> AnyView {
    match view {
        VendorView::Dashboard => view! { <VendorOverview /> }.into_any(),
        VendorView::Products => view! { <LazyView><ProductList /></LazyView> }.into_any(),
        VendorView::Orders => view! { <LazyView><OrderList /></LazyView> }.into_any(),
        VendorView::VendorRegistration => view! {
            <LazyView><VendorRegistrationPage /></LazyView>
        }
        .into_any(),
        VendorView::AddSupplier => view! { <LazyView><SupplierFormPage /></LazyView> }.into_any(),
        VendorView::Profile => view! { <ProfilePage /> }.into_any(),
        VendorView::ChangePassword => view! { <ChangePasswordPage /> }.into_any(),
        VendorView::Settings => view! { <SettingsPage /> }.into_any(),
    }
}

/// Content of the current view, or nothing while the session is switching.
fn current_content(sub_role: Option<SubRole>) -> impl Fn() -> AnyView + Send + 'static {
    let session = use_session();
    move || match (session.current_view(), sub_role) {
        (Some(PortalView::Vics(v)), _) => render_vics(v),
        (Some(PortalView::LawMis(v)), Some(sub_role)) => render_law_mis(v, sub_role),
        (Some(PortalView::Vendor(v)), _) => render_vendor(v),
        _ => ().into_any(),
    }
}

#[component]
pub fn VicsPortal() -> impl IntoView {
    let title = use_app_config().shell.vics_title.clone();
    let content = current_content(None);

    view! {
        <Shell
            title=title
            left=|| view! { <Sidebar /> }.into_any()
            center=content
        />
    }
}

#[component]
pub fn LawMisPortal(sub_role: SubRole) -> impl IntoView {
    let title = format!("{} - {}", use_app_config().shell.law_mis_title, sub_role.as_str());
    let content = current_content(Some(sub_role));

    view! {
        <Shell
            title=title
            left=|| view! { <Sidebar /> }.into_any()
            center=content
        />
    }
}

#[component]
pub fn VendorPortal() -> impl IntoView {
    let title = format!(
        "{} - {}",
        use_app_config().shell.law_mis_title,
        SubRole::Vendor.as_str()
    );
    let content = current_content(Some(SubRole::Vendor));

    view! {
        <Shell
            title=title
            left=|| view! { <Sidebar /> }.into_any()
            center=content
        />
    }
}
