//! Modal that surfaces the result of a match request.

use api::Dog;
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::dog_card::DogCard;
use crate::modal_overlay::ModalOverlay;

/// A completed match: the id the service picked, plus the resolved record
/// when the follow-up lookup succeeded.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchOutcome {
    pub id: String,
    pub dog: Option<Dog>,
}

/// Blocking modal shown once the match endpoint answers. Displays the
/// matched dog's card, falling back to the bare id when resolution failed.
#[component]
pub fn MatchDialog(outcome: MatchOutcome, on_close: EventHandler<()>) -> Element {
    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            div {
                class: "match-dialog",
                h2 { "Your match" }

                if let Some(dog) = outcome.dog {
                    DogCard {
                        dog: dog,
                        favorite: false,
                        on_toggle: move |_| {},
                    }
                } else {
                    p { "Your match is: {outcome.id}" }
                }

                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_close.call(()),
                    "Close"
                }
            }
        }
    }
}
