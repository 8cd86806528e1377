//! Pure client-side state for the dog browser.
//!
//! Nothing in this crate talks to the network. It holds the two pieces of
//! state the catalog view mutates in place: the set of favorited dog ids and
//! the selector (sort direction, breed filter, page) that determines the next
//! catalog fetch.

pub mod favorites;
pub mod selector;

pub use favorites::FavoriteSet;
pub use selector::{Selector, SortDirection};
