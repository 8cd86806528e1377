//! Catalog view: the searchable, pageable dog grid plus the match flow.

use api::Dog;
use dioxus::prelude::*;
use store::{FavoriteSet, Selector, SortDirection};
use ui::{use_client, use_session, DogCard, MatchDialog, MatchOutcome};

use crate::Route;

/// The catalog page. Only renders for an authenticated session; everyone
/// else is sent back to the login form.
#[component]
pub fn Browse() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let client = use_client();

    let mut selector = use_signal(Selector::new);
    let mut favorites = use_signal(FavoriteSet::new);
    let mut dogs = use_signal(Vec::<Dog>::new);
    let mut total = use_signal(|| 0u64);
    let mut match_result = use_signal(|| Option::<MatchOutcome>::None);

    // Breed list for the filter dropdown, fetched once the session is up.
    // On failure the dropdown keeps only the "All breeds" option.
    let breeds_client = client.clone();
    let breeds = use_resource(move || {
        let client = breeds_client.clone();
        let authenticated = session().authenticated;
        async move {
            if !authenticated {
                return Vec::new();
            }
            match client.breeds().await {
                Ok(breeds) => breeds,
                Err(err) => {
                    tracing::error!("fetching breeds failed: {err}");
                    Vec::new()
                }
            }
        }
    });

    // The two-step catalog fetch, keyed on the selector. Restarting the
    // resource drops any in-flight request, so a stale response can never
    // overwrite a newer page. Grid and total commit together only when both
    // steps succeed; on any failure the view keeps its prior state.
    let catalog_client = client.clone();
    let _catalog = use_resource(move || {
        let client = catalog_client.clone();
        let authenticated = session().authenticated;
        let sel = selector();
        async move {
            if !authenticated {
                return;
            }
            match client.search_dogs(&sel).await {
                Ok((list, result_total)) => {
                    dogs.set(list);
                    total.set(result_total);
                }
                Err(err) => tracing::error!("catalog fetch failed: {err}"),
            }
        }
    });

    let match_client = client.clone();
    let handle_match = move |_| {
        let client = match_client.clone();
        spawn(async move {
            let ids = favorites().ids().to_vec();
            match client.request_match(&ids).await {
                Ok(id) => {
                    // Resolve the winner for display; fall back to the bare id.
                    let dog = client
                        .dogs(std::slice::from_ref(&id))
                        .await
                        .ok()
                        .and_then(|mut found| found.pop());
                    match_result.set(Some(MatchOutcome { id, dog }));
                }
                Err(err) => tracing::error!("match request failed: {err}"),
            }
        });
    };

    if !session().authenticated {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    let sel = selector();
    let favorite_count = favorites().len();
    let page_count = (total() / u64::from(Selector::PAGE_SIZE))
        + u64::from(total() % u64::from(Selector::PAGE_SIZE) != 0);
    let sort_label = match sel.sort {
        SortDirection::Asc => "Ascending",
        SortDirection::Desc => "Descending",
    };

    rsx! {
        div {
            class: "browse-layout",

            header {
                class: "browse-header",
                h1 { "Pawfinder" }
                if let Some(user) = session().user {
                    p { class: "browse-welcome", "Welcome, {user.name}" }
                }
            }

            div {
                class: "browse-controls",

                button {
                    class: "sort-button",
                    onclick: move |_| selector.write().toggle_sort(),
                    "Sort by Breed ({sort_label})"
                }

                select {
                    class: "breed-filter",
                    value: sel.breed.clone().unwrap_or_default(),
                    onchange: move |evt| selector.write().set_breed(&evt.value()),
                    option { value: "", "All breeds" }
                    for breed in breeds().unwrap_or_default() {
                        option {
                            key: "{breed}",
                            value: "{breed}",
                            "{breed}"
                        }
                    }
                }

                button {
                    class: "find-match",
                    onclick: handle_match,
                    "Find Your Match ({favorite_count})"
                }
            }

            div {
                class: "dog-grid",
                for dog in dogs() {
                    DogCard {
                        key: "{dog.id}",
                        dog: dog.clone(),
                        favorite: favorites().contains(&dog.id),
                        on_toggle: move |id: String| favorites.write().toggle(&id),
                    }
                }
            }

            div {
                class: "pagination",
                button {
                    onclick: move |_| selector.write().prev_page(),
                    "Previous"
                }
                span {
                    class: "pagination__page",
                    if page_count > 0 {
                        "Page {sel.page} of {page_count}"
                    } else {
                        "Page {sel.page}"
                    }
                }
                button {
                    onclick: move |_| selector.write().next_page(),
                    "Next"
                }
            }

            if let Some(outcome) = match_result() {
                MatchDialog {
                    outcome: outcome,
                    on_close: move |_| match_result.set(None),
                }
            }
        }
    }
}
