//! Session context and hooks for the UI.

use api::{ShelterClient, User};
use dioxus::prelude::*;

/// Session state for the application.
///
/// There is no state machine beyond this flag: the remote service has no
/// whoami endpoint, so the gate flips on a successful login and stays up for
/// the lifetime of the page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub authenticated: bool,
}

/// Get the current session state.
/// Returns a signal that updates when the user logs in.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Get the shared shelter-service client.
pub fn use_client() -> ShelterClient {
    use_context::<ShelterClient>()
}

/// Provider component that owns the session state and the HTTP client.
/// Wrap the app with this component so every view sees the same session.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let session = use_signal(SessionState::default);
    use_context_provider(|| session);
    use_context_provider(ShelterClient::default);

    rsx! {
        {children}
    }
}
