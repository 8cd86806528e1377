//! Shared UI for the dog browser: session context, form controls, and the
//! catalog building blocks the views compose.

pub mod components;

mod session;
pub use session::{use_client, use_session, SessionProvider, SessionState};

mod login_form;
pub use login_form::LoginForm;

mod dog_card;
pub use dog_card::DogCard;

mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod match_dialog;
pub use match_dialog::{MatchDialog, MatchOutcome};
