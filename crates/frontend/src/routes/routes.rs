//! Top-level screen switch. There is no URL routing: what is on screen is a
//! pure function of the session.

use super::portals::{LawMisPortal, VendorPortal, VicsPortal};
use crate::system::pages::login::{LawMisLoginPage, VicsLoginPage};
use crate::system::pages::register::RegisterPage;
use crate::system::pages::role_select::RoleSelectPage;
use crate::system::session::context::use_session;
use contracts::system::session::{
    LawMisSession, Session, SubRole, UserFlow, VicsSession,
};
use leptos::prelude::*;

/// Which top-level screen a session shows. Views inside a portal are not
/// part of it, so navigating does not rebuild the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    RoleSelect,
    VicsLogin,
    VicsPortal,
    LawMisLogin,
    LawMisRegister,
    LawMisPortal(SubRole),
}

impl Screen {
    pub fn of(session: &Session) -> Self {
        match session {
            Session::RoleSelection => Screen::RoleSelect,
            Session::Vics(VicsSession::Login) => Screen::VicsLogin,
            Session::Vics(VicsSession::Authenticated { .. }) => Screen::VicsPortal,
            Session::LawMis(LawMisSession::Pending { flow, .. }) => match flow {
                UserFlow::Login => Screen::LawMisLogin,
                UserFlow::Register => Screen::LawMisRegister,
            },
            Session::LawMis(LawMisSession::Authenticated(auth)) => {
                Screen::LawMisPortal(auth.sub_role())
            }
        }
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let session = use_session();
    let screen = Memo::new(move |_| session.session.with(Screen::of));

    move || match screen.get() {
        Screen::RoleSelect => view! { <RoleSelectPage /> }.into_any(),
        Screen::VicsLogin => view! { <VicsLoginPage /> }.into_any(),
        Screen::VicsPortal => view! { <VicsPortal /> }.into_any(),
        Screen::LawMisLogin => view! { <LawMisLoginPage /> }.into_any(),
        Screen::LawMisRegister => view! { <RegisterPage /> }.into_any(),
        Screen::LawMisPortal(SubRole::Vendor) => view! { <VendorPortal /> }.into_any(),
        Screen::LawMisPortal(sub_role) => view! { <LawMisPortal sub_role=sub_role /> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::session::Role;
    use contracts::system::views::{PortalView, VicsView};

    #[test]
    fn test_screen_follows_session() {
        let mut s = Session::new();
        assert_eq!(Screen::of(&s), Screen::RoleSelect);

        s.select_role(Some(Role::Vics));
        assert_eq!(Screen::of(&s), Screen::VicsLogin);
        s.login_success().unwrap();
        assert_eq!(Screen::of(&s), Screen::VicsPortal);
        s.navigate(PortalView::Vics(VicsView::Settings)).unwrap();
        assert_eq!(Screen::of(&s), Screen::VicsPortal);

        s.select_role(Some(Role::LawMis));
        assert_eq!(Screen::of(&s), Screen::LawMisLogin);
        s.change_login_sub_role(SubRole::User).unwrap();
        s.register_click().unwrap();
        assert_eq!(Screen::of(&s), Screen::LawMisRegister);
        s.register_success().unwrap();
        s.login_success().unwrap();
        assert_eq!(Screen::of(&s), Screen::LawMisPortal(SubRole::User));

        s.logout();
        assert_eq!(Screen::of(&s), Screen::RoleSelect);
    }
}
