use crate::shared::components::page_header::PageHeader;
use crate::shared::i18n::tr;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use contracts::system::profile::ChangePasswordForm;
use leptos::prelude::*;
use thaw::*;

/// Validation-only password form. A valid submit shows a confirmation and
/// clears the inputs; no credential is changed.
#[component]
pub fn ChangePasswordPage() -> impl IntoView {
    let current = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saved, set_saved) = signal(false);

    let on_save = move |_| {
        let form = ChangePasswordForm {
            current: current.get_untracked(),
            new_password: new_password.get_untracked(),
            confirm: confirm.get_untracked(),
        };
        match form.validate() {
            Ok(()) => {
                log::info!("password change accepted");
                set_error.set(None);
                set_saved.set(true);
                current.set(String::new());
                new_password.set(String::new());
                confirm.set(String::new());
            }
            Err(e) => {
                set_saved.set(false);
                set_error.set(Some(e.to_string()));
            }
        }
    };

    view! {
        <PageFrame page_id="change_password--system" category=PAGE_CAT_SYSTEM>
            <PageHeader title=Signal::derive(tr("change_password")) />

            <div class="page__content form-narrow">
                <Show when=move || error.get().is_some()>
                    <MessageBar intent=MessageBarIntent::Error>
                        {move || error.get().unwrap_or_default()}
                    </MessageBar>
                </Show>
                <Show when=move || saved.get()>
                    <MessageBar intent=MessageBarIntent::Success>
                        "Password updated"
                    </MessageBar>
                </Show>

                <Flex vertical=true gap=FlexGap::Medium>
                    <div class="form-group">
                        <Label>{tr("current_password")}</Label>
                        <Input value=current input_type=InputType::Password />
                    </div>
                    <div class="form-group">
                        <Label>{tr("new_password")}</Label>
                        <Input value=new_password input_type=InputType::Password />
                    </div>
                    <div class="form-group">
                        <Label>{tr("confirm_password")}</Label>
                        <Input value=confirm input_type=InputType::Password />
                    </div>
                    <div>
                        <Button appearance=ButtonAppearance::Primary on_click=on_save>
                            {tr("save")}
                        </Button>
                    </div>
                </Flex>
            </div>
        </PageFrame>
    }
}
