//! Session / navigation state machine.
//!
//! The whole cross-cutting UI state is one tagged value. A LAW-MIS sub-role
//! cannot be authenticated while VICS is the selected portal, and a view only
//! exists inside an authenticated context.
//!
//! ```text
//! RoleSelection ──select_role──▶ Vics(Login) ──login_success──▶ Vics(Authenticated{view})
//!       ▲                 └────▶ LawMis(Pending{sub_role, flow}) ──login_success──▶ LawMis(Authenticated)
//!       └──────────── logout (from anywhere) ─────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::views::{LawMisView, PortalView, VendorView, VicsView};

/// Top-level portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Vics,
    LawMis,
}

impl Role {
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Vics => "VICS",
            Role::LawMis => "LAW-MIS",
        }
    }
}

/// LAW-MIS sub-role, chosen on the login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubRole {
    User,
    Admin,
    Vendor,
}

impl SubRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubRole::User => "USER",
            SubRole::Admin => "ADMIN",
            SubRole::Vendor => "VENDOR",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "USER" => Some(SubRole::User),
            "ADMIN" => Some(SubRole::Admin),
            "VENDOR" => Some(SubRole::Vendor),
            _ => None,
        }
    }

    pub fn all() -> [SubRole; 3] {
        [SubRole::User, SubRole::Admin, SubRole::Vendor]
    }
}

/// Unauthenticated LAW-MIS/USER screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UserFlow {
    #[default]
    Login,
    Register,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VicsSession {
    #[default]
    Login,
    Authenticated { view: VicsView },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LawMisAuth {
    User { view: LawMisView },
    Admin { view: LawMisView },
    Vendor { view: VendorView },
}

impl LawMisAuth {
    fn landing(sub_role: SubRole) -> Self {
        match sub_role {
            SubRole::User => LawMisAuth::User {
                view: LawMisView::Dashboard,
            },
            SubRole::Admin => LawMisAuth::Admin {
                view: LawMisView::Dashboard,
            },
            SubRole::Vendor => LawMisAuth::Vendor {
                view: VendorView::Dashboard,
            },
        }
    }

    pub fn sub_role(&self) -> SubRole {
        match self {
            LawMisAuth::User { .. } => SubRole::User,
            LawMisAuth::Admin { .. } => SubRole::Admin,
            LawMisAuth::Vendor { .. } => SubRole::Vendor,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LawMisSession {
    Pending {
        sub_role: Option<SubRole>,
        flow: UserFlow,
    },
    Authenticated(LawMisAuth),
}

impl Default for LawMisSession {
    fn default() -> Self {
        LawMisSession::Pending {
            sub_role: None,
            flow: UserFlow::Login,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Session {
    #[default]
    RoleSelection,
    Vics(VicsSession),
    LawMis(LawMisSession),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no portal selected")]
    NoRole,
    #[error("already authenticated")]
    AlreadyAuthenticated,
    #[error("not authenticated")]
    NotAuthenticated,
    #[error("select a login type first")]
    SubRoleNotSelected,
    #[error("not on the LAW-MIS login screen")]
    NotOnLawMisLogin,
    #[error("registration is only available to LAW-MIS users")]
    RegistrationUnavailable,
    #[error("view {0:?} does not belong to the current portal")]
    ForeignView(PortalView),
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn role(&self) -> Option<Role> {
        match self {
            Session::RoleSelection => None,
            Session::Vics(_) => Some(Role::Vics),
            Session::LawMis(_) => Some(Role::LawMis),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(
            self,
            Session::Vics(VicsSession::Authenticated { .. })
                | Session::LawMis(LawMisSession::Authenticated(_))
        )
    }

    /// Sub-role selected on the LAW-MIS login form, or the authenticated one.
    pub fn sub_role(&self) -> Option<SubRole> {
        match self {
            Session::LawMis(LawMisSession::Pending { sub_role, .. }) => *sub_role,
            Session::LawMis(LawMisSession::Authenticated(auth)) => Some(auth.sub_role()),
            _ => None,
        }
    }

    pub fn authenticated_as(&self) -> Option<SubRole> {
        match self {
            Session::LawMis(LawMisSession::Authenticated(auth)) => Some(auth.sub_role()),
            _ => None,
        }
    }

    pub fn user_flow(&self) -> Option<UserFlow> {
        match self {
            Session::LawMis(LawMisSession::Pending { flow, .. }) => Some(*flow),
            _ => None,
        }
    }

    /// Currently rendered content view, if any.
    pub fn current_view(&self) -> Option<PortalView> {
        match self {
            Session::Vics(VicsSession::Authenticated { view }) => Some(PortalView::Vics(*view)),
            Session::LawMis(LawMisSession::Authenticated(auth)) => Some(match auth {
                LawMisAuth::User { view } | LawMisAuth::Admin { view } => {
                    PortalView::LawMis(*view)
                }
                LawMisAuth::Vendor { view } => PortalView::Vendor(*view),
            }),
            _ => None,
        }
    }

    /// Enter a portal (or go back to role selection with `None`).
    /// Always drops everything left from the previous context.
    pub fn select_role(&mut self, role: Option<Role>) {
        *self = match role {
            None => Session::RoleSelection,
            Some(Role::Vics) => Session::Vics(VicsSession::default()),
            Some(Role::LawMis) => Session::LawMis(LawMisSession::default()),
        };
    }

    /// Full reset, same as selecting no role.
    pub fn logout(&mut self) {
        self.select_role(None);
    }

    /// Called by the login form after the credentials were accepted.
    pub fn login_success(&mut self) -> Result<(), SessionError> {
        match self {
            Session::RoleSelection => Err(SessionError::NoRole),
            Session::Vics(VicsSession::Login) => {
                *self = Session::Vics(VicsSession::Authenticated {
                    view: VicsView::Dashboard,
                });
                Ok(())
            }
            Session::LawMis(LawMisSession::Pending { sub_role, .. }) => {
                let sub_role = sub_role.ok_or(SessionError::SubRoleNotSelected)?;
                *self = Session::LawMis(LawMisSession::Authenticated(LawMisAuth::landing(
                    sub_role,
                )));
                Ok(())
            }
            _ => Err(SessionError::AlreadyAuthenticated),
        }
    }

    /// Jump to any view of the current authenticated context.
    pub fn navigate(&mut self, target: PortalView) -> Result<(), SessionError> {
        match (self, target) {
            (Session::Vics(VicsSession::Authenticated { view }), PortalView::Vics(next)) => {
                *view = next;
                Ok(())
            }
            (
                Session::LawMis(LawMisSession::Authenticated(
                    LawMisAuth::User { view } | LawMisAuth::Admin { view },
                )),
                PortalView::LawMis(next),
            ) => {
                *view = next;
                Ok(())
            }
            (
                Session::LawMis(LawMisSession::Authenticated(LawMisAuth::Vendor { view })),
                PortalView::Vendor(next),
            ) => {
                *view = next;
                Ok(())
            }
            (session, target) => {
                if session.is_authenticated() {
                    Err(SessionError::ForeignView(target))
                } else {
                    Err(SessionError::NotAuthenticated)
                }
            }
        }
    }

    /// Change the LAW-MIS "login as" selection before authenticating.
    pub fn change_login_sub_role(&mut self, next: SubRole) -> Result<(), SessionError> {
        match self {
            Session::LawMis(LawMisSession::Pending { sub_role, flow }) => {
                *sub_role = Some(next);
                *flow = UserFlow::Login;
                Ok(())
            }
            Session::LawMis(LawMisSession::Authenticated(_)) => {
                Err(SessionError::AlreadyAuthenticated)
            }
            _ => Err(SessionError::NotOnLawMisLogin),
        }
    }

    pub fn register_click(&mut self) -> Result<(), SessionError> {
        self.set_user_flow(UserFlow::Register)
    }

    /// Registration never authenticates; it lands back on the login form.
    pub fn register_success(&mut self) -> Result<(), SessionError> {
        self.set_user_flow(UserFlow::Login)
    }

    pub fn go_back_to_login(&mut self) -> Result<(), SessionError> {
        self.set_user_flow(UserFlow::Login)
    }

    fn set_user_flow(&mut self, next: UserFlow) -> Result<(), SessionError> {
        match self {
            Session::LawMis(LawMisSession::Pending {
                sub_role: Some(SubRole::User),
                flow,
            }) => {
                *flow = next;
                Ok(())
            }
            Session::LawMis(LawMisSession::Authenticated(_))
            | Session::Vics(VicsSession::Authenticated { .. }) => {
                Err(SessionError::AlreadyAuthenticated)
            }
            _ => Err(SessionError::RegistrationUnavailable),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::views::ManagementView;

    fn authenticated_samples() -> Vec<Session> {
        vec![
            Session::Vics(VicsSession::Authenticated {
                view: VicsView::ChangePassword,
            }),
            Session::Vics(VicsSession::Authenticated {
                view: VicsView::Management(ManagementView::Station),
            }),
            Session::LawMis(LawMisSession::Authenticated(LawMisAuth::User {
                view: LawMisView::ChangePassword,
            })),
            Session::LawMis(LawMisSession::Authenticated(LawMisAuth::Admin {
                view: LawMisView::Users,
            })),
            Session::LawMis(LawMisSession::Authenticated(LawMisAuth::Vendor {
                view: VendorView::Orders,
            })),
        ]
    }

    fn all_samples() -> Vec<Session> {
        let mut samples = authenticated_samples();
        samples.push(Session::RoleSelection);
        samples.push(Session::Vics(VicsSession::Login));
        samples.push(Session::LawMis(LawMisSession::Pending {
            sub_role: Some(SubRole::User),
            flow: UserFlow::Register,
        }));
        samples.push(Session::LawMis(LawMisSession::Pending {
            sub_role: Some(SubRole::Vendor),
            flow: UserFlow::Login,
        }));
        samples
    }

    #[test]
    fn test_select_role_resets_every_axis() {
        for prior in all_samples() {
            for role in [Role::Vics, Role::LawMis] {
                let mut session = prior;
                session.select_role(Some(role));
                assert_eq!(session.role(), Some(role));
                assert!(!session.is_authenticated());
                assert_eq!(session.authenticated_as(), None);
                assert_eq!(session.current_view(), None);
                match role {
                    Role::Vics => assert_eq!(session, Session::Vics(VicsSession::Login)),
                    Role::LawMis => {
                        assert_eq!(session.sub_role(), None);
                        assert_eq!(session.user_flow(), Some(UserFlow::Login));
                    }
                }
            }
        }
    }

    #[test]
    fn test_logout_returns_to_role_selection_from_anywhere() {
        for prior in all_samples() {
            let mut session = prior;
            session.logout();
            assert_eq!(session, Session::RoleSelection);
        }
    }

    #[test]
    fn test_relogin_after_logout_lands_on_dashboard() {
        let mut session = Session::Vics(VicsSession::Authenticated {
            view: VicsView::ChangePassword,
        });
        session.logout();
        session.select_role(Some(Role::Vics));
        session.login_success().unwrap();
        assert_eq!(
            session.current_view(),
            Some(PortalView::Vics(VicsView::Dashboard))
        );
    }

    #[test]
    fn test_law_mis_login_uses_selected_sub_role() {
        let mut session = Session::new();
        session.select_role(Some(Role::LawMis));
        session.change_login_sub_role(SubRole::Vendor).unwrap();
        session.login_success().unwrap();
        assert_eq!(session.authenticated_as(), Some(SubRole::Vendor));
        assert_eq!(
            session.current_view(),
            Some(PortalView::Vendor(VendorView::Dashboard))
        );
    }

    #[test]
    fn test_law_mis_login_without_sub_role_is_rejected() {
        let mut session = Session::new();
        session.select_role(Some(Role::LawMis));
        let before = session;
        assert_eq!(
            session.login_success(),
            Err(SessionError::SubRoleNotSelected)
        );
        assert_eq!(session, before);
    }

    #[test]
    fn test_navigate_requires_authentication() {
        let mut session = Session::Vics(VicsSession::Login);
        assert_eq!(
            session.navigate(PortalView::Vics(VicsView::Profile)),
            Err(SessionError::NotAuthenticated)
        );
        assert_eq!(session, Session::Vics(VicsSession::Login));
    }

    #[test]
    fn test_navigate_is_flat_within_a_family() {
        let mut session = Session::LawMis(LawMisSession::Authenticated(LawMisAuth::User {
            view: LawMisView::Dashboard,
        }));
        session
            .navigate(PortalView::LawMis(LawMisView::ChangePassword))
            .unwrap();
        session
            .navigate(PortalView::LawMis(LawMisView::AddWorkshop))
            .unwrap();
        assert_eq!(
            session.current_view(),
            Some(PortalView::LawMis(LawMisView::AddWorkshop))
        );
    }

    #[test]
    fn test_navigate_rejects_foreign_family() {
        let mut session = Session::LawMis(LawMisSession::Authenticated(LawMisAuth::Vendor {
            view: VendorView::Dashboard,
        }));
        let target = PortalView::LawMis(LawMisView::Workshops);
        assert_eq!(
            session.navigate(target),
            Err(SessionError::ForeignView(target))
        );
    }

    #[test]
    fn test_register_flow_toggles_and_never_authenticates() {
        let mut session = Session::new();
        session.select_role(Some(Role::LawMis));
        session.change_login_sub_role(SubRole::User).unwrap();
        session.register_click().unwrap();
        assert_eq!(session.user_flow(), Some(UserFlow::Register));
        session.register_success().unwrap();
        assert_eq!(session.user_flow(), Some(UserFlow::Login));
        assert!(!session.is_authenticated());
        session.register_click().unwrap();
        session.go_back_to_login().unwrap();
        assert_eq!(session.user_flow(), Some(UserFlow::Login));
    }

    #[test]
    fn test_register_only_for_user_sub_role() {
        let mut session = Session::new();
        session.select_role(Some(Role::LawMis));
        session.change_login_sub_role(SubRole::Admin).unwrap();
        assert_eq!(
            session.register_click(),
            Err(SessionError::RegistrationUnavailable)
        );
        let mut vics = Session::Vics(VicsSession::Login);
        assert!(vics.register_click().is_err());
    }

    #[test]
    fn test_changing_sub_role_returns_to_login_flow() {
        let mut session = Session::LawMis(LawMisSession::Pending {
            sub_role: Some(SubRole::User),
            flow: UserFlow::Register,
        });
        session.change_login_sub_role(SubRole::Admin).unwrap();
        assert_eq!(
            session,
            Session::LawMis(LawMisSession::Pending {
                sub_role: Some(SubRole::Admin),
                flow: UserFlow::Login,
            })
        );
    }

    #[test]
    fn test_login_success_twice_is_rejected() {
        let mut session = Session::Vics(VicsSession::Login);
        session.login_success().unwrap();
        session
            .navigate(PortalView::Vics(VicsView::Settings))
            .unwrap();
        assert_eq!(
            session.login_success(),
            Err(SessionError::AlreadyAuthenticated)
        );
        assert_eq!(
            session.current_view(),
            Some(PortalView::Vics(VicsView::Settings))
        );
    }
}
