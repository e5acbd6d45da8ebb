//! Declarative sidebar menus.
//!
//! One nesting level only. Parent items toggle their own expand flag, leaf
//! items navigate. Labels are translation keys.

use contracts::system::session::{LawMisAuth, LawMisSession, Session, VicsSession};
use contracts::system::views::{
    LawMisView, ManagementView, PortalView, VendorView, VicsView,
};
use std::collections::HashMap;

#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub id: String,
    /// Translation key
    pub label: &'static str,
    pub icon: &'static str,
    pub target: Option<PortalView>,
    pub selected: bool,
    pub children: Vec<NavItem>,
}

impl NavItem {
    pub fn leaf(label: &'static str, icon: &'static str, target: PortalView) -> Self {
        Self {
            id: target.key(),
            label,
            icon,
            target: Some(target),
            selected: false,
            children: Vec::new(),
        }
    }

    pub fn group(id: &str, label: &'static str, icon: &'static str, children: Vec<NavItem>) -> Self {
        Self {
            id: id.to_string(),
            label,
            icon,
            target: None,
            selected: false,
            children,
        }
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn click_action(&self) -> NavAction {
        if self.has_children() {
            NavAction::Toggle(self.id.clone())
        } else if let Some(target) = self.target {
            NavAction::Navigate(target)
        } else {
            NavAction::Nothing
        }
    }

    fn mark_selected(&mut self, current: Option<PortalView>) {
        for child in &mut self.children {
            child.mark_selected(current);
        }
        self.selected = (current.is_some() && self.target == current)
            || self.children.iter().any(|c| c.selected);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum NavAction {
    Toggle(String),
    Navigate(PortalView),
    Nothing,
}

/// Expand flags keyed by item id. Missing ids are collapsed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpandState(HashMap<String, bool>);

impl ExpandState {
    pub fn is_expanded(&self, id: &str) -> bool {
        self.0.get(id).copied().unwrap_or(false)
    }

    pub fn toggle(&mut self, id: &str) {
        let next = !self.is_expanded(id);
        self.0.insert(id.to_string(), next);
    }

    pub fn expand(&mut self, id: &str) {
        self.0.insert(id.to_string(), true);
    }
}

fn account_group(profile: PortalView, change_password: PortalView, settings: PortalView) -> NavItem {
    NavItem::group(
        "account",
        "account",
        "user",
        vec![
            NavItem::leaf("profile", "user", profile),
            NavItem::leaf("change_password", "key", change_password),
            NavItem::leaf("settings", "settings", settings),
        ],
    )
}

pub fn vics_menu() -> Vec<NavItem> {
    let v = PortalView::Vics;
    vec![
        NavItem::leaf("dashboard", "layout-dashboard", v(VicsView::Dashboard)),
        NavItem::group(
            "vics:Management",
            "management",
            "folder",
            vec![
                NavItem::leaf("users", "users", v(VicsView::Management(ManagementView::User))),
                NavItem::leaf(
                    "stations",
                    "zap",
                    v(VicsView::Management(ManagementView::Station)),
                ),
            ],
        ),
        account_group(
            v(VicsView::Profile),
            v(VicsView::ChangePassword),
            v(VicsView::Settings),
        ),
    ]
}

pub fn law_mis_user_menu() -> Vec<NavItem> {
    let v = PortalView::LawMis;
    vec![
        NavItem::leaf("dashboard", "layout-dashboard", v(LawMisView::Dashboard)),
        NavItem::leaf("add_workshop", "plus", v(LawMisView::AddWorkshop)),
        NavItem::leaf("workshops", "building", v(LawMisView::Workshops)),
        account_group(
            v(LawMisView::Profile),
            v(LawMisView::ChangePassword),
            v(LawMisView::Settings),
        ),
    ]
}

pub fn law_mis_admin_menu() -> Vec<NavItem> {
    let v = PortalView::LawMis;
    vec![
        NavItem::leaf("dashboard", "layout-dashboard", v(LawMisView::Dashboard)),
        NavItem::leaf("workshops", "building", v(LawMisView::Workshops)),
        NavItem::leaf("users", "users", v(LawMisView::Users)),
        account_group(
            v(LawMisView::Profile),
            v(LawMisView::ChangePassword),
            v(LawMisView::Settings),
        ),
    ]
}

pub fn vendor_menu() -> Vec<NavItem> {
    let v = PortalView::Vendor;
    vec![
        NavItem::leaf("dashboard", "layout-dashboard", v(VendorView::Dashboard)),
        NavItem::leaf("products", "package", v(VendorView::Products)),
        NavItem::leaf("orders", "shopping-cart", v(VendorView::Orders)),
        NavItem::leaf("vendor_registration", "store", v(VendorView::VendorRegistration)),
        NavItem::leaf("add_supplier", "truck", v(VendorView::AddSupplier)),
        account_group(
            v(VendorView::Profile),
            v(VendorView::ChangePassword),
            v(VendorView::Settings),
        ),
    ]
}

/// Menu for the authenticated context, with `selected` flags set for the
/// current view. Unauthenticated sessions get an empty menu.
pub fn menu_for(session: &Session) -> Vec<NavItem> {
    let mut items = match session {
        Session::Vics(VicsSession::Authenticated { .. }) => vics_menu(),
        Session::LawMis(LawMisSession::Authenticated(auth)) => match auth {
            LawMisAuth::User { .. } => law_mis_user_menu(),
            LawMisAuth::Admin { .. } => law_mis_admin_menu(),
            LawMisAuth::Vendor { .. } => vendor_menu(),
        },
        _ => Vec::new(),
    };
    let current = session.current_view();
    for item in &mut items {
        item.mark_selected(current);
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::session::Role;

    fn vics_at(view: VicsView) -> Session {
        Session::Vics(VicsSession::Authenticated { view })
    }

    #[test]
    fn test_unauthenticated_menu_is_empty() {
        assert!(menu_for(&Session::RoleSelection).is_empty());
        let mut s = Session::new();
        s.select_role(Some(Role::LawMis));
        assert!(menu_for(&s).is_empty());
    }

    #[test]
    fn test_selected_flags_follow_current_view() {
        let menu = menu_for(&vics_at(VicsView::Management(ManagementView::Station)));
        let management = menu.iter().find(|i| i.id == "vics:Management").unwrap();
        assert!(management.selected);
        assert!(!management.children[0].selected);
        assert!(management.children[1].selected);
        assert!(!menu[0].selected);
    }

    #[test]
    fn test_parent_click_toggles_leaf_click_navigates() {
        let menu = vics_menu();
        assert_eq!(
            menu[1].click_action(),
            NavAction::Toggle("vics:Management".to_string())
        );
        assert_eq!(
            menu[0].click_action(),
            NavAction::Navigate(PortalView::Vics(VicsView::Dashboard))
        );
        let empty = NavItem::group("x", "x", "x", Vec::new());
        assert_eq!(empty.click_action(), NavAction::Nothing);
    }

    #[test]
    fn test_expand_state_is_independent_per_item() {
        let mut state = ExpandState::default();
        assert!(!state.is_expanded("a"));
        state.toggle("a");
        state.toggle("b");
        state.toggle("b");
        assert!(state.is_expanded("a"));
        assert!(!state.is_expanded("b"));
    }

    #[test]
    fn test_every_leaf_targets_its_own_family() {
        for (menu, family) in [
            (vics_menu(), "vics:"),
            (law_mis_user_menu(), "law_mis:"),
            (law_mis_admin_menu(), "law_mis:"),
            (vendor_menu(), "vendor:"),
        ] {
            for item in menu.iter().flat_map(|i| std::iter::once(i).chain(i.children.iter())) {
                if let Some(target) = item.target {
                    assert!(target.key().starts_with(family), "{}", target.key());
                }
            }
        }
    }
}
