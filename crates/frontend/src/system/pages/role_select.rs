use crate::shared::i18n::tr;
use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;
use crate::system::session::context::use_session;
use contracts::system::session::Role;
use leptos::prelude::*;

/// Entry screen: pick which portal to sign in to.
#[component]
pub fn RoleSelectPage() -> impl IntoView {
    let session = use_session();

    let card = move |role: Role, icon_name: &'static str, hint: &'static str| {
        view! {
            <button class="role-card" on:click=move |_| session.select_role(Some(role))>
                <div class="role-card__icon">{icon(icon_name)}</div>
                <div class="role-card__title">{role.display_name()}</div>
                <div class="role-card__hint">{hint}</div>
            </button>
        }
    };

    view! {
        <div class="login-container">
            <div class="login-box login-box--wide">
                <div class="login-box__toolbar">
                    <ThemeToggle />
                </div>
                <h2>{tr("select_role")}</h2>
                <div class="role-cards">
                    {card(Role::Vics, "zap", "Charging stations and operators")}
                    {card(Role::LawMis, "building", "Workshops, users and vendors")}
                </div>
            </div>
        </div>
    }
}
