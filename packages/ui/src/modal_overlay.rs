use dioxus::prelude::*;

/// Dimmed backdrop that blocks the catalog behind it and centers its
/// children in a card. A click anywhere on the backdrop fires `on_close`;
/// clicks on the card itself do not bubble up.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}
