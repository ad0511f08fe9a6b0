use api::{HttpLoginService, LoginService};
use dioxus::prelude::*;

use super::state::{FormAction, SignInStore};
use crate::app_shell::use_portal_config;
use crate::icons::{FaEye, FaEyeSlash, FaSpinner};
use crate::navigation::BrowserNavigator;
use crate::password_strength::PasswordStrength;
use crate::platform::make_store;
use crate::role_selector::RoleSelector;
use crate::Icon;

/// Email/password sign-in form with role selection.
#[component]
pub fn SignInForm() -> Element {
    let config = use_portal_config();
    let mut store = use_signal(SignInStore::new);
    let login = use_hook(|| HttpLoginService::from_config(&config));

    let submit_config = config.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let begun = store.write().begin_submit();
        let Ok(request) = begun else {
            return;
        };
        let login = login.clone();
        let config = submit_config.clone();
        spawn(async move {
            let result = login.login(&request).await;
            let storage = make_store();
            let outcome =
                store
                    .write()
                    .complete_submit(result, &storage, &BrowserNavigator, &config);
            tracing::debug!(?outcome, "Sign-in attempt finished");
        });
    };

    let snapshot = store();
    let form = snapshot.form();
    let errors = snapshot.errors();
    let submit_label = form.submit_label();
    let password_toggle_label = if form.show_password {
        "Hide password"
    } else {
        "Show password"
    };

    rsx! {
        form {
            class: "sign-in-form",
            onsubmit: handle_submit,

            RoleSelector {
                value: form.role,
                on_change: move |role| store.write().dispatch(FormAction::SelectRole(role)),
                error: errors.role.clone(),
            }

            div {
                label {
                    class: "field-label",
                    r#for: "email",
                    "Email Address "
                    span { class: "required", "*" }
                }
                input {
                    id: "email",
                    class: "field-input",
                    r#type: "email",
                    value: form.email.clone(),
                    placeholder: form.email_placeholder(),
                    required: true,
                    "aria-describedby": "email-error",
                    oninput: move |evt: FormEvent| store.write().dispatch(FormAction::SetEmail(evt.value())),
                }
                if !errors.email.is_empty() {
                    p { class: "field-error", id: "email-error", "{errors.email}" }
                }
            }

            div {
                label {
                    class: "field-label",
                    r#for: "password",
                    "Password "
                    span { class: "required", "*" }
                }
                div {
                    class: "password-wrapper",
                    input {
                        id: "password",
                        class: "field-input",
                        r#type: form.password_input_type(),
                        value: form.password.clone(),
                        required: true,
                        "aria-describedby": "password-error",
                        oninput: move |evt: FormEvent| store.write().dispatch(FormAction::SetPassword(evt.value())),
                    }
                    button {
                        class: "password-toggle",
                        r#type: "button",
                        "aria-label": password_toggle_label,
                        onclick: move |_| store.write().dispatch(FormAction::TogglePasswordVisibility),
                        if form.show_password {
                            Icon { icon: FaEyeSlash, width: 20, height: 20 }
                        } else {
                            Icon { icon: FaEye, width: 20, height: 20 }
                        }
                    }
                }
                if form.shows_strength_meter() {
                    PasswordStrength { password: form.password.clone() }
                }
                if !errors.password.is_empty() {
                    p { class: "field-error", id: "password-error", "{errors.password}" }
                }
            }

            div {
                class: "remember",
                input {
                    id: "remember",
                    r#type: "checkbox",
                    checked: form.remember_device,
                    onchange: move |evt: FormEvent| store.write().dispatch(FormAction::SetRememberDevice(evt.checked())),
                }
                label { r#for: "remember", "Remember this device" }
            }

            button {
                class: "submit-button",
                r#type: "submit",
                disabled: form.is_submitting,
                if form.is_submitting {
                    span {
                        class: "submit-busy",
                        Icon { icon: FaSpinner, width: 20, height: 20, class: "spin" }
                        "{submit_label}"
                    }
                } else {
                    "{submit_label}"
                }
            }

            div {
                class: "form-links",
                a { href: "#", "Forgot Password?" }
                a { href: "{config.registration_url}", "New User Registration" }
                a { href: "#", "Help Center" }
            }
        }
    }
}
