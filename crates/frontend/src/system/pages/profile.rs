use crate::shared::components::page_header::PageHeader;
use crate::shared::i18n::tr;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::session::context::use_session;
use contracts::system::profile::ProfileInfo;
use leptos::prelude::*;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = use_session();

    let info = Memo::new(move |_| {
        session
            .role()
            .map(|role| ProfileInfo::for_context(role, session.sub_role()))
    });

    let row = move |label_key: &'static str, value: fn(&ProfileInfo) -> String| {
        view! {
            <div class="profile-card__row">
                <span class="profile-card__label">{tr(label_key)}</span>
                <span class="profile-card__value">
                    {move || info.with(|i| i.as_ref().map(value).unwrap_or_default())}
                </span>
            </div>
        }
    };

    view! {
        <PageFrame page_id="profile--system" category=PAGE_CAT_SYSTEM>
            <PageHeader title=Signal::derive(tr("profile")) />

            <div class="page__content">
                <div class="profile-card">
                    {row("full_name", |i| i.display_name.clone())}
                    {row("email", |i| i.email.clone())}
                    {row("login_as", |i| i.role_label.clone())}
                </div>
            </div>
        </PageFrame>
    }
}
