use crate::shared::i18n::tr;
use crate::system::session::context::use_session;
use contracts::usecases::u504_user_registration::RegistrationForm;
use leptos::prelude::*;

/// LAW-MIS USER self-registration. A valid form returns to the login
/// screen; nothing is stored.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session();
    let form = RwSignal::new(RegistrationForm::default());
    let (error, set_error) = signal::<Option<String>>(None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.with_untracked(|f| f.validate()) {
            Ok(()) => {
                log::info!(
                    "registration accepted for '{}'",
                    form.with_untracked(|f| f.username.clone())
                );
                set_error.set(None);
                let _ = session.register_success();
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    let field = move |id: &'static str,
                      label_key: &'static str,
                      input_type: &'static str,
                      get: fn(&RegistrationForm) -> String,
                      set: fn(&mut RegistrationForm, String)| {
        view! {
            <div class="form-group">
                <label for=id>{tr(label_key)}</label>
                <input
                    type=input_type
                    id=id
                    prop:value=move || form.with(get)
                    on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
                />
            </div>
        }
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"LAW-MIS"</h1>
                <h2>{tr("create_account")}</h2>

                <Show when=move || error.get().is_some()>
                    <div class="error-message">
                        {move || error.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    {field("reg-full-name", "full_name", "text", |f| f.full_name.clone(), |f, v| f.full_name = v)}
                    {field("reg-email", "email", "email", |f| f.email.clone(), |f, v| f.email = v)}
                    {field("reg-phone", "phone", "tel", |f| f.phone.clone(), |f, v| f.phone = v)}
                    {field("reg-username", "username", "text", |f| f.username.clone(), |f, v| f.username = v)}
                    {field("reg-password", "password", "password", |f| f.password.clone(), |f, v| f.password = v)}
                    {field(
                        "reg-confirm",
                        "confirm_password",
                        "password",
                        |f| f.confirm_password.clone(),
                        |f, v| f.confirm_password = v,
                    )}

                    <button type="submit" class="btn-primary">
                        {tr("register")}
                    </button>
                </form>

                <div class="login-info">
                    <button
                        class="btn-link"
                        on:click=move |_| {
                            let _ = session.go_back_to_login();
                        }
                    >
                        {tr("back_to_login")}
                    </button>
                </div>
            </div>
        </div>
    }
}
