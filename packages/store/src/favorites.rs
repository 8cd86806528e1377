//! The set of dog ids the user has favorited this session.

use serde::{Deserialize, Serialize};

/// An ordered set of favorited dog ids.
///
/// Insertion order is preserved: the match endpoint receives the ids in the
/// order the user favorited them, not in display order. The set is never
/// cleared; it lives exactly as long as the page does.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteSet {
    ids: Vec<String>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership for `id`: remove it if present, append it otherwise.
    pub fn toggle(&mut self, id: &str) {
        if let Some(pos) = self.ids.iter().position(|fav| fav == id) {
            self.ids.remove(pos);
        } else {
            self.ids.push(id.to_string());
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|fav| fav == id)
    }

    /// The favorited ids in insertion order. This slice is what gets posted
    /// verbatim to the match endpoint.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
