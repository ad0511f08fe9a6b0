use api::Role;
use dioxus::prelude::*;

use crate::icons::{FaStethoscope, FaUser};
use crate::Icon;

fn role_icon(role: Role) -> Element {
    match role {
        Role::Patient => rsx! {
            Icon { icon: FaUser, width: 32, height: 32, class: "role-option-icon" }
        },
        Role::Doctor => rsx! {
            Icon { icon: FaStethoscope, width: 32, height: 32, class: "role-option-icon" }
        },
    }
}

/// Patient/Doctor toggle. Selection is owned by the caller.
#[component]
pub fn RoleSelector(
    #[props(!optional)] value: Option<Role>,
    on_change: EventHandler<Role>,
    #[props(default)] error: String,
) -> Element {
    let options = Role::ALL
        .iter()
        .map(|&role| (role, role.label(), value == Some(role)));

    rsx! {
        div {
            label {
                class: "field-label",
                "Select Role "
                span { class: "required", "*" }
            }
            div {
                class: "role-options",
                for (role, label, selected) in options {
                    button {
                        key: "{role}",
                        r#type: "button",
                        class: if selected { "role-option role-option--selected" } else { "role-option" },
                        "aria-pressed": if selected { "true" } else { "false" },
                        onclick: move |_| on_change.call(role),
                        {role_icon(role)}
                        span { class: "role-option-label", "{label}" }
                    }
                }
            }
            if !error.is_empty() {
                p { class: "field-error", "{error}" }
            }
        }
    }
}
