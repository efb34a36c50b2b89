//! `foodlab-humans` — domain model for the Humans resource.

pub mod human;

pub use human::{Favorite, Human, HumanPatch};
