use api::Dog;
use dioxus::prelude::*;

/// Card for a single dog with its favorite toggle.
///
/// The record is display-only; the toggle reports the dog's id back to the
/// owner, which holds the favorite set.
#[component]
pub fn DogCard(dog: Dog, favorite: bool, on_toggle: EventHandler<String>) -> Element {
    let id = dog.id.clone();
    let toggle_class = if favorite {
        "favorite-button favorite-button--active"
    } else {
        "favorite-button"
    };

    rsx! {
        div {
            class: "dog-card",
            img {
                class: "dog-card__img",
                src: "{dog.img}",
                alt: "{dog.name}",
            }
            div {
                class: "dog-card__info",
                h3 { "{dog.name}" }
                p { strong { "Breed: " } "{dog.breed}" }
                p { strong { "Age: " } "{dog.age}" }
                p { strong { "Zip: " } "{dog.zip_code}" }
                button {
                    class: "{toggle_class}",
                    onclick: move |_| on_toggle.call(id.clone()),
                    if favorite { "Unfavorite" } else { "Favorite" }
                }
            }
        }
    }
}
