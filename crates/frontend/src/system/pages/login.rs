use crate::shared::i18n::tr;
use crate::shared::theme::ThemeToggle;
use crate::system::auth::context::use_auth;
use crate::system::session::context::use_session;
use contracts::system::auth::LoginForm;
use contracts::system::session::{Role, SubRole};
use leptos::prelude::*;

/// Username and password inputs plus the submit button. The caller owns the
/// form signal so it can reset it when the sub-role changes.
#[component]
fn CredentialsForm(role: Role, form: RwSignal<LoginForm>) -> impl IntoView {
    let session = use_session();
    let auth = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let mut next = form.get_untracked();
        // the error message stays on the form either way
        let _ = session.submit_login(&mut next, auth.authenticator(), role);
        form.set(next);
    };

    view! {
        <Show when=move || form.with(|f| f.error.is_some())>
            <div class="error-message">
                {move || form.with(|f| f.error.clone().unwrap_or_default())}
            </div>
        </Show>

        <form on:submit=on_submit>
            <div class="form-group">
                <label for="username">{tr("username")}</label>
                <input
                    type="text"
                    id="username"
                    autocomplete="username"
                    prop:value=move || form.with(|f| f.username.clone())
                    on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label for="password">{tr("password")}</label>
                <input
                    type="password"
                    id="password"
                    autocomplete="current-password"
                    prop:value=move || form.with(|f| f.password.clone())
                    on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                />
            </div>

            <button type="submit" class="btn-primary">
                {tr("login")}
            </button>
        </form>
    }
}

#[component]
fn LoginFrame(title: String, children: Children) -> impl IntoView {
    let session = use_session();

    view! {
        <div class="login-container">
            <div class="login-box">
                <div class="login-box__toolbar">
                    <button class="btn-link" on:click=move |_| session.select_role(None)>
                        "← " {tr("select_role")}
                    </button>
                    <ThemeToggle />
                </div>
                <h1>{title}</h1>
                <h2>{tr("login")}</h2>
                {children()}
            </div>
        </div>
    }
}

#[component]
pub fn VicsLoginPage() -> impl IntoView {
    let form = RwSignal::new(LoginForm::default());

    view! {
        <LoginFrame title={Role::Vics.display_name().to_string()}>
            <CredentialsForm role=Role::Vics form=form />
        </LoginFrame>
    }
}

#[component]
pub fn LawMisLoginPage() -> impl IntoView {
    let session = use_session();
    let form = RwSignal::new(LoginForm {
        sub_role: session.session.with_untracked(|s| s.sub_role()),
        ..Default::default()
    });

    let on_sub_role = move |ev: leptos::ev::Event| {
        let Some(sub_role) = SubRole::from_str(&event_target_value(&ev)) else {
            return;
        };
        let mut next = form.get_untracked();
        let _ = session.switch_login_sub_role(&mut next, sub_role);
        form.set(next);
    };

    let selected = move || form.with(|f| f.sub_role.map(|r| r.as_str()).unwrap_or_default());
    let is_user = move || form.with(|f| f.sub_role == Some(SubRole::User));

    view! {
        <LoginFrame title={Role::LawMis.display_name().to_string()}>
            <div class="form-group">
                <label for="login-as">{tr("login_as")}</label>
                <select id="login-as" prop:value=selected on:change=on_sub_role>
                    <option value="" disabled=true>"-"</option>
                    {SubRole::all()
                        .into_iter()
                        .map(|r| view! { <option value={r.as_str()}>{r.as_str()}</option> })
                        .collect_view()}
                </select>
            </div>

            <CredentialsForm role=Role::LawMis form=form />

            <Show when=is_user>
                <div class="login-info">
                    <button
                        class="btn-link"
                        on:click=move |_| {
                            let _ = session.register_click();
                        }
                    >
                        {tr("register")}
                    </button>
                </div>
            </Show>
        </LoginFrame>
    }
}
