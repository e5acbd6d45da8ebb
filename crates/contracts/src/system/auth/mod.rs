//! Authentication collaborator.
//!
//! There is no auth service behind the portals: credentials are compared
//! against the plaintext pairs from the embedded configuration. Everything
//! that checks credentials goes through [`Authenticator`] so a real service
//! can replace [`StaticCredentials`] later.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::config::{AppConfig, CredentialEntry};
use crate::system::session::{Role, Session, SessionError, SubRole};

/// Which login form the credentials were entered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginPortal {
    Vics,
    LawMisUser,
    LawMisAdmin,
    LawMisVendor,
}

impl From<SubRole> for LoginPortal {
    fn from(sub_role: SubRole) -> Self {
        match sub_role {
            SubRole::User => LoginPortal::LawMisUser,
            SubRole::Admin => LoginPortal::LawMisAdmin,
            SubRole::Vendor => LoginPortal::LawMisVendor,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Please select a login type")]
    SubRoleNotSelected,
    #[error(transparent)]
    Session(#[from] SessionError),
}

pub trait Authenticator: Send + Sync {
    fn authenticate(
        &self,
        portal: LoginPortal,
        username: &str,
        password: &str,
    ) -> Result<(), AuthError>;
}

/// Hard-coded credential pairs checked by plain equality.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials {
    entries: Vec<CredentialEntry>,
}

impl StaticCredentials {
    pub fn new(entries: Vec<CredentialEntry>) -> Self {
        Self { entries }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.credentials.clone())
    }
}

impl Authenticator for StaticCredentials {
    fn authenticate(
        &self,
        portal: LoginPortal,
        username: &str,
        password: &str,
    ) -> Result<(), AuthError> {
        let matched = self
            .entries
            .iter()
            .any(|e| e.portal == portal && e.username == username && e.password == password);
        if matched {
            Ok(())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

/// Local state of a login form. Lives in the login component, never in the
/// session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub sub_role: Option<SubRole>,
    pub error: Option<String>,
}

impl LoginForm {
    /// Switching the "login as" selector discards whatever was typed.
    pub fn change_sub_role(&mut self, sub_role: SubRole) {
        self.sub_role = Some(sub_role);
        self.username.clear();
        self.password.clear();
        self.error = None;
    }

    fn portal_for(&self, role: Role) -> Result<LoginPortal, AuthError> {
        match role {
            Role::Vics => Ok(LoginPortal::Vics),
            Role::LawMis => self
                .sub_role
                .map(LoginPortal::from)
                .ok_or(AuthError::SubRoleNotSelected),
        }
    }

    /// Check the typed credentials. On failure the message is kept on the
    /// form and nothing else changes.
    pub fn submit(
        &mut self,
        auth: &dyn Authenticator,
        role: Role,
    ) -> Result<LoginPortal, AuthError> {
        let result = self.check(auth, role);
        match &result {
            Ok(portal) => {
                log::info!("login accepted for {:?}", portal);
                self.error = None;
            }
            Err(e) => {
                log::warn!("login rejected for user '{}': {}", self.username, e);
                self.error = Some(e.to_string());
            }
        }
        result
    }

    /// [`submit`](Self::submit), then authenticate `session` when the
    /// credentials were accepted. A rejected login leaves `session` as it was.
    pub fn submit_into(
        &mut self,
        session: &mut Session,
        auth: &dyn Authenticator,
        role: Role,
    ) -> Result<LoginPortal, AuthError> {
        let portal = self.submit(auth, role)?;
        if let Err(e) = session.login_success() {
            log::warn!("session refused login for {:?}: {}", portal, e);
            self.error = Some(e.to_string());
            return Err(e.into());
        }
        Ok(portal)
    }

    /// The "login as" selector: clears the typed credentials and moves the
    /// pending sub-role of `session`.
    pub fn switch_sub_role(
        &mut self,
        session: &mut Session,
        sub_role: SubRole,
    ) -> Result<(), SessionError> {
        self.change_sub_role(sub_role);
        session.change_login_sub_role(sub_role)
    }

    fn check(&self, auth: &dyn Authenticator, role: Role) -> Result<LoginPortal, AuthError> {
        let portal = self.portal_for(role)?;
        if self.username.trim().is_empty() {
            return Err(AuthError::MissingField("Username"));
        }
        if self.password.is_empty() {
            return Err(AuthError::MissingField("Password"));
        }
        auth.authenticate(portal, &self.username, &self.password)?;
        Ok(portal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::load_config;
    use crate::system::session::UserFlow;
    use crate::system::views::{PortalView, VicsView};

    fn credentials() -> StaticCredentials {
        StaticCredentials::from_config(&load_config().unwrap())
    }

    fn form(username: &str, password: &str) -> LoginForm {
        LoginForm {
            username: username.to_string(),
            password: password.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_vics_admin_admin_is_accepted() {
        let auth = credentials();
        let mut f = form("admin", "admin");
        assert_eq!(f.submit(&auth, Role::Vics), Ok(LoginPortal::Vics));
        assert_eq!(f.error, None);
    }

    #[test]
    fn test_vics_admin_admin_authenticates_session() {
        let auth = credentials();
        let mut session = Session::new();
        session.select_role(Some(Role::Vics));

        let mut f = form("admin", "admin");
        assert_eq!(
            f.submit_into(&mut session, &auth, Role::Vics),
            Ok(LoginPortal::Vics)
        );
        assert!(session.is_authenticated());
        assert_eq!(
            session.current_view(),
            Some(PortalView::Vics(VicsView::Dashboard))
        );
    }

    #[test]
    fn test_vics_wrong_pair_sets_error_only() {
        let auth = credentials();
        let mut session = Session::new();
        session.select_role(Some(Role::Vics));
        let before = session;

        let mut f = form("admin", "wrong");
        assert_eq!(
            f.submit_into(&mut session, &auth, Role::Vics),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(f.error.as_deref(), Some("Invalid username or password"));
        assert_eq!(session, before);
    }

    #[test]
    fn test_login_on_authenticated_session_is_refused() {
        let auth = credentials();
        let mut session = Session::new();
        session.select_role(Some(Role::Vics));
        session.login_success().unwrap();
        let before = session;

        let mut f = form("admin", "admin");
        assert_eq!(
            f.submit_into(&mut session, &auth, Role::Vics),
            Err(AuthError::Session(SessionError::AlreadyAuthenticated))
        );
        assert!(f.error.is_some());
        assert_eq!(session, before);
    }

    #[test]
    fn test_credentials_are_scoped_per_portal() {
        let auth = credentials();
        assert!(auth
            .authenticate(LoginPortal::LawMisAdmin, "admin", "admin")
            .is_err());
        assert!(auth
            .authenticate(LoginPortal::LawMisAdmin, "admin", "admin123")
            .is_ok());
    }

    #[test]
    fn test_law_mis_requires_sub_role() {
        let auth = credentials();
        let mut f = form("user", "user123");
        assert_eq!(
            f.submit(&auth, Role::LawMis),
            Err(AuthError::SubRoleNotSelected)
        );
        f.sub_role = Some(SubRole::User);
        assert_eq!(f.submit(&auth, Role::LawMis), Ok(LoginPortal::LawMisUser));
    }

    #[test]
    fn test_change_sub_role_clears_typed_credentials() {
        let mut session = Session::new();
        session.select_role(Some(Role::LawMis));

        let mut f = form("vendor", "secret");
        f.error = Some("Invalid username or password".to_string());
        f.switch_sub_role(&mut session, SubRole::Vendor).unwrap();

        assert_eq!(f.username, "");
        assert_eq!(f.password, "");
        assert_eq!(f.error, None);
        assert_eq!(f.sub_role, Some(SubRole::Vendor));
        assert_eq!(session.sub_role(), Some(SubRole::Vendor));
        assert_eq!(session.user_flow(), Some(UserFlow::Login));
        assert!(!session.is_authenticated());
        assert_eq!(session.current_view(), None);
    }

    #[test]
    fn test_law_mis_login_lands_on_selected_sub_role() {
        let auth = credentials();
        let mut session = Session::new();
        session.select_role(Some(Role::LawMis));

        let mut f = LoginForm::default();
        f.switch_sub_role(&mut session, SubRole::User).unwrap();
        f.username = "user".to_string();
        f.password = "user123".to_string();

        assert_eq!(
            f.submit_into(&mut session, &auth, Role::LawMis),
            Ok(LoginPortal::LawMisUser)
        );
        assert_eq!(session.authenticated_as(), Some(SubRole::User));
    }

    #[test]
    fn test_empty_username_is_reported() {
        let auth = credentials();
        let mut f = form("  ", "admin");
        assert_eq!(
            f.submit(&auth, Role::Vics),
            Err(AuthError::MissingField("Username"))
        );
    }
}
