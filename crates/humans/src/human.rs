use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A favorite meal, identified by the meal's id.
///
/// Serializes as `{"id": n}`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Favorite {
    #[serde(rename = "id")]
    pub meal_id: u64,
}

impl Favorite {
    pub fn of(meal_id: u64) -> Self {
        Self { meal_id }
    }
}

/// A human and their favorite meals.
///
/// Plain immutable value: every modification produces a new `Human`.
/// A missing `favorites` field in JSON deserializes to an empty set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Human {
    pub name: String,
    #[serde(default)]
    pub favorites: BTreeSet<Favorite>,
}

impl Human {
    pub fn new(name: impl Into<String>, favorites: impl IntoIterator<Item = Favorite>) -> Self {
        Self {
            name: name.into(),
            favorites: favorites.into_iter().collect(),
        }
    }

    /// Overlay the fields present in `patch`, keep the rest.
    pub fn merge(&self, patch: &HumanPatch) -> Human {
        Human {
            name: patch.name.clone().unwrap_or_else(|| self.name.clone()),
            favorites: patch
                .favorites
                .clone()
                .unwrap_or_else(|| self.favorites.clone()),
        }
    }

    /// Returns a copy with `favorite` included. Adding an existing
    /// favorite is a no-op, not an error.
    pub fn with_favorite(&self, favorite: Favorite) -> Human {
        let mut favorites = self.favorites.clone();
        favorites.insert(favorite);
        Human {
            name: self.name.clone(),
            favorites,
        }
    }

    /// Returns a copy with `favorite` excluded. Removing an absent
    /// favorite is a no-op, not an error.
    pub fn without_favorite(&self, favorite: Favorite) -> Human {
        let mut favorites = self.favorites.clone();
        favorites.remove(&favorite);
        Human {
            name: self.name.clone(),
            favorites,
        }
    }
}

/// Partial update payload: `None` means "keep the existing field".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HumanPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub favorites: Option<BTreeSet<Favorite>>,
}
