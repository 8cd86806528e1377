//! Name/email entry form that establishes the session.

use api::User;
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Input};
use crate::session::{use_client, use_session};

/// The sign-in form. On a successful login it flips the session's
/// authenticated flag and calls `on_login`; on failure it logs and leaves
/// the user on the form. No retry, no email-shape validation.
#[component]
pub fn LoginForm(on_login: EventHandler<()>) -> Element {
    let mut session = use_session();
    let client = use_client();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            let n = name().trim().to_string();
            let e = email().trim().to_string();
            if n.is_empty() || e.is_empty() {
                return;
            }

            let user = User { name: n, email: e };
            loading.set(true);
            match client.login(&user).await {
                Ok(()) => {
                    let mut state = session();
                    state.user = Some(user);
                    state.authenticated = true;
                    session.set(state);
                    on_login.call(());
                }
                Err(err) => {
                    loading.set(false);
                    tracing::error!("login failed: {err}");
                }
            }
        });
    };

    rsx! {
        form {
            class: "auth-form",
            onsubmit: handle_login,

            Input {
                class: "w-full",
                r#type: "text",
                placeholder: "Name",
                value: name(),
                oninput: move |evt: FormEvent| name.set(evt.value()),
            }

            Input {
                class: "w-full",
                r#type: "email",
                placeholder: "Email",
                value: email(),
                oninput: move |evt: FormEvent| email.set(evt.value()),
            }

            Button {
                variant: ButtonVariant::Primary,
                class: "w-full",
                r#type: "submit",
                disabled: loading(),
                if loading() { "Signing in..." } else { "Login" }
            }
        }
    }
}
