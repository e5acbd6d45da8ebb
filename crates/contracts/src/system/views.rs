//! Content views that can be shown inside an authenticated shell.
//!
//! Each authenticated context has its own view family. VICS management pages
//! are a two-level variant instead of `"Management/User"` style strings; the
//! string form is still produced and parsed for labels and breadcrumbs.

use serde::{Deserialize, Serialize};

/// Parent segment that is rendered as a non-navigable breadcrumb.
pub const MANAGEMENT_PARENT: &str = "Management";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ManagementView {
    User,
    Station,
}

impl ManagementView {
    pub fn as_str(&self) -> &'static str {
        match self {
            ManagementView::User => "User",
            ManagementView::Station => "Station",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "User" => Some(ManagementView::User),
            "Station" => Some(ManagementView::Station),
            _ => None,
        }
    }

    pub fn all() -> [ManagementView; 2] {
        [ManagementView::User, ManagementView::Station]
    }
}

/// VICS (charging station administration) views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VicsView {
    #[default]
    Dashboard,
    Management(ManagementView),
    Profile,
    ChangePassword,
    Settings,
}

impl VicsView {
    /// Path form, e.g. `"Dashboard"` or `"Management/Station"`.
    pub fn as_path(&self) -> String {
        match self {
            VicsView::Dashboard => "Dashboard".to_string(),
            VicsView::Management(sub) => format!("{}/{}", MANAGEMENT_PARENT, sub.as_str()),
            VicsView::Profile => "Profile".to_string(),
            VicsView::ChangePassword => "ChangePassword".to_string(),
            VicsView::Settings => "Settings".to_string(),
        }
    }

    /// Parse the path form. Only `Management/<child>` is split; any other
    /// name containing a slash is not a known view.
    pub fn parse(path: &str) -> Option<Self> {
        if let Some((parent, child)) = path.split_once('/') {
            if parent == MANAGEMENT_PARENT {
                return ManagementView::from_str(child).map(VicsView::Management);
            }
            return None;
        }
        match path {
            "Dashboard" => Some(VicsView::Dashboard),
            "Profile" => Some(VicsView::Profile),
            "ChangePassword" => Some(VicsView::ChangePassword),
            "Settings" => Some(VicsView::Settings),
            _ => None,
        }
    }

    pub fn breadcrumbs(&self) -> Vec<Crumb> {
        breadcrumbs_for_path(&self.as_path())
    }
}

/// LAW-MIS views shared by the USER and ADMIN sub-roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LawMisView {
    #[default]
    Dashboard,
    AddWorkshop,
    Workshops,
    Users,
    Profile,
    ChangePassword,
    Settings,
}

impl LawMisView {
    pub fn as_str(&self) -> &'static str {
        match self {
            LawMisView::Dashboard => "DASHBOARD",
            LawMisView::AddWorkshop => "ADD_WORKSHOP",
            LawMisView::Workshops => "WORKSHOPS",
            LawMisView::Users => "USERS",
            LawMisView::Profile => "PROFILE",
            LawMisView::ChangePassword => "CHANGE_PASSWORD",
            LawMisView::Settings => "SETTINGS",
        }
    }
}

/// Vendor marketplace views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VendorView {
    #[default]
    Dashboard,
    Products,
    Orders,
    VendorRegistration,
    AddSupplier,
    Profile,
    ChangePassword,
    Settings,
}

impl VendorView {
    pub fn as_str(&self) -> &'static str {
        match self {
            VendorView::Dashboard => "DASHBOARD",
            VendorView::Products => "PRODUCTS",
            VendorView::Orders => "ORDERS",
            VendorView::VendorRegistration => "VENDOR_REGISTRATION",
            VendorView::AddSupplier => "ADD_SUPPLIER",
            VendorView::Profile => "PROFILE",
            VendorView::ChangePassword => "CHANGE_PASSWORD",
            VendorView::Settings => "SETTINGS",
        }
    }
}

/// Target of a navigation command, tagged by view family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PortalView {
    Vics(VicsView),
    LawMis(LawMisView),
    Vendor(VendorView),
}

impl PortalView {
    /// Stable key, used for sidebar item ids and selection checks.
    pub fn key(&self) -> String {
        match self {
            PortalView::Vics(v) => format!("vics:{}", v.as_path()),
            PortalView::LawMis(v) => format!("law_mis:{}", v.as_str()),
            PortalView::Vendor(v) => format!("vendor:{}", v.as_str()),
        }
    }
}

impl PortalView {
    /// Settings view of the same family.
    pub fn settings_view(&self) -> PortalView {
        match self {
            PortalView::Vics(_) => PortalView::Vics(VicsView::Settings),
            PortalView::LawMis(_) => PortalView::LawMis(LawMisView::Settings),
            PortalView::Vendor(_) => PortalView::Vendor(VendorView::Settings),
        }
    }

    /// Profile view of the same family.
    pub fn profile_view(&self) -> PortalView {
        match self {
            PortalView::Vics(_) => PortalView::Vics(VicsView::Profile),
            PortalView::LawMis(_) => PortalView::LawMis(LawMisView::Profile),
            PortalView::Vendor(_) => PortalView::Vendor(VendorView::Profile),
        }
    }

    /// Change-password view of the same family.
    pub fn change_password_view(&self) -> PortalView {
        match self {
            PortalView::Vics(_) => PortalView::Vics(VicsView::ChangePassword),
            PortalView::LawMis(_) => PortalView::LawMis(LawMisView::ChangePassword),
            PortalView::Vendor(_) => PortalView::Vendor(VendorView::ChangePassword),
        }
    }

    pub fn is_dashboard(&self) -> bool {
        matches!(
            self,
            PortalView::Vics(VicsView::Dashboard)
                | PortalView::LawMis(LawMisView::Dashboard)
                | PortalView::Vendor(VendorView::Dashboard)
        )
    }
}

/// One breadcrumb segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    /// Parent segments are shown but cannot be clicked
    pub navigable: bool,
    pub current: bool,
}

/// Breadcrumbs for a view path.
///
/// - `"Dashboard"`: no breadcrumbs
/// - `"Management/<child>"`: the parent (disabled) and the child (current)
/// - anything else: a single current segment with the full name
pub fn breadcrumbs_for_path(path: &str) -> Vec<Crumb> {
    if path == "Dashboard" {
        return Vec::new();
    }
    if let Some((parent, child)) = path.split_once('/') {
        if parent == MANAGEMENT_PARENT {
            return vec![
                Crumb {
                    label: parent.to_string(),
                    navigable: false,
                    current: false,
                },
                Crumb {
                    label: child.to_string(),
                    navigable: false,
                    current: true,
                },
            ];
        }
    }
    vec![Crumb {
        label: path.to_string(),
        navigable: false,
        current: true,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_management_station_has_two_crumbs() {
        let crumbs = breadcrumbs_for_path("Management/Station");
        assert_eq!(crumbs.len(), 2);
        assert_eq!(crumbs[0].label, "Management");
        assert!(!crumbs[0].navigable);
        assert!(!crumbs[0].current);
        assert_eq!(crumbs[1].label, "Station");
        assert!(crumbs[1].current);
    }

    #[test]
    fn test_dashboard_has_no_crumbs() {
        assert!(breadcrumbs_for_path("Dashboard").is_empty());
        assert!(VicsView::Dashboard.breadcrumbs().is_empty());
    }

    #[test]
    fn test_other_slash_names_are_not_split() {
        let crumbs = breadcrumbs_for_path("Reports/Monthly");
        assert_eq!(crumbs.len(), 1);
        assert_eq!(crumbs[0].label, "Reports/Monthly");
        assert!(crumbs[0].current);
    }

    #[test]
    fn test_split_on_first_slash_only() {
        let crumbs = breadcrumbs_for_path("Management/User/Extra");
        assert_eq!(crumbs.len(), 2);
        assert_eq!(crumbs[1].label, "User/Extra");
    }

    #[test]
    fn test_path_roundtrip_for_known_views() {
        for view in [
            VicsView::Dashboard,
            VicsView::Management(ManagementView::User),
            VicsView::Management(ManagementView::Station),
            VicsView::Profile,
            VicsView::ChangePassword,
            VicsView::Settings,
        ] {
            assert_eq!(VicsView::parse(&view.as_path()), Some(view));
        }
    }

    #[test]
    fn test_parse_rejects_unknown_parent() {
        assert_eq!(VicsView::parse("Reports/User"), None);
        assert_eq!(VicsView::parse("Management/Area"), None);
    }

    #[test]
    fn test_sibling_views_stay_in_family() {
        let v = PortalView::Vendor(VendorView::Orders);
        assert_eq!(v.settings_view(), PortalView::Vendor(VendorView::Settings));
        assert_eq!(v.profile_view(), PortalView::Vendor(VendorView::Profile));
        let l = PortalView::LawMis(LawMisView::Users);
        assert_eq!(
            l.change_password_view(),
            PortalView::LawMis(LawMisView::ChangePassword)
        );
        assert!(PortalView::Vics(VicsView::Dashboard).is_dashboard());
        assert!(!l.is_dashboard());
    }

    #[test]
    fn test_portal_view_keys_are_distinct_per_family() {
        let a = PortalView::LawMis(LawMisView::Dashboard).key();
        let b = PortalView::Vendor(VendorView::Dashboard).key();
        assert_ne!(a, b);
    }
}
