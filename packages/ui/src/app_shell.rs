//! Page chrome around the sign-in form, and the config context it provides.

use api::PortalConfig;
use dioxus::prelude::*;

use crate::icons::FaStethoscope;
use crate::sign_in::SignInForm;
use crate::Icon;

/// Get the portal configuration provided by [`AppShell`].
pub fn use_portal_config() -> PortalConfig {
    use_context::<PortalConfig>()
}

/// Centered card with the portal header and the sign-in form.
#[component]
pub fn AppShell(#[props(default)] config: PortalConfig) -> Element {
    use_context_provider(|| config.clone());

    rsx! {
        div {
            class: "shell",
            div {
                class: "card",
                div {
                    class: "card-header",
                    div {
                        class: "brand-icon",
                        Icon { icon: FaStethoscope, width: 48, height: 48 }
                    }
                    h1 { "Welcome to Medi-Guardian Portal" }
                    p { "Secure access to your healthcare dashboard" }
                }

                SignInForm {}
            }
        }
    }
}
