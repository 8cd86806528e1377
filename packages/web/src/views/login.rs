//! Login page view with the name/email entry form.

use dioxus::prelude::*;
use ui::{use_session, LoginForm};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let session = use_session();
    let nav = use_navigator();

    // Already signed in: skip straight to the catalog
    if session().authenticated {
        nav.replace(Route::Browse {});
        return rsx! {};
    }

    rsx! {
        div {
            class: "login-container",

            h1 { class: "login-title", "Pawfinder" }
            p { class: "login-subtitle", "Sign in to browse adoptable dogs" }

            LoginForm {
                on_login: move |_| {
                    nav.push(Route::Browse {});
                },
            }
        }
    }
}
