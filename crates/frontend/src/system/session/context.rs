//! Navigation context shared by every page.
//!
//! Components never mutate the session directly: they call the transition
//! methods here, which apply the change on a copy and only publish it when
//! the transition is legal for the current state.

use contracts::system::auth::{AuthError, Authenticator, LoginForm, LoginPortal};
use contracts::system::session::{Role, Session, SessionError, SubRole};
use contracts::system::views::PortalView;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct SessionContext {
    pub session: RwSignal<Session>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(Session::new()),
        }
    }

    fn apply<F>(&self, action: &'static str, transition: F) -> Result<(), SessionError>
    where
        F: FnOnce(&mut Session) -> Result<(), SessionError>,
    {
        let mut next = self.session.get_untracked();
        match transition(&mut next) {
            Ok(()) => {
                log::info!("session {}: {:?}", action, next);
                self.session.set(next);
                Ok(())
            }
            Err(e) => {
                log::warn!("session {} rejected: {}", action, e);
                Err(e)
            }
        }
    }

    pub fn select_role(&self, role: Option<Role>) {
        let _ = self.apply("select_role", |s| {
            s.select_role(role);
            Ok(())
        });
    }

    pub fn logout(&self) {
        let _ = self.apply("logout", |s| {
            s.logout();
            Ok(())
        });
    }

    /// Check `form` and authenticate when the credentials are accepted. The
    /// session is published only on success.
    pub fn submit_login(
        &self,
        form: &mut LoginForm,
        auth: &dyn Authenticator,
        role: Role,
    ) -> Result<LoginPortal, AuthError> {
        let mut next = self.session.get_untracked();
        let portal = form.submit_into(&mut next, auth, role)?;
        log::info!("session login: {:?}", next);
        self.session.set(next);
        Ok(portal)
    }

    /// "Login as" selector on the LAW-MIS login screen.
    pub fn switch_login_sub_role(
        &self,
        form: &mut LoginForm,
        sub_role: SubRole,
    ) -> Result<(), SessionError> {
        self.apply("change_login_sub_role", |s| form.switch_sub_role(s, sub_role))
    }

    pub fn navigate(&self, target: PortalView) -> Result<(), SessionError> {
        self.apply("navigate", |s| s.navigate(target))
    }

    pub fn register_click(&self) -> Result<(), SessionError> {
        self.apply("register_click", Session::register_click)
    }

    pub fn register_success(&self) -> Result<(), SessionError> {
        self.apply("register_success", Session::register_success)
    }

    pub fn go_back_to_login(&self) -> Result<(), SessionError> {
        self.apply("go_back_to_login", Session::go_back_to_login)
    }

    // Tracked readers

    pub fn role(&self) -> Option<Role> {
        self.session.with(|s| s.role())
    }

    pub fn sub_role(&self) -> Option<SubRole> {
        self.session.with(|s| s.sub_role())
    }

    pub fn current_view(&self) -> Option<PortalView> {
        self.session.with(|s| s.current_view())
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext not found")
}
