//! # Tower Rules
//!
//! The rules crate of the Cursed Tower - the items the player can carry, the
//! story achievements they earn and the actions they can take.
//! This crate is the single source of truth for player state and does not contain any presentation logic.

pub mod items;
pub mod mechanics;
pub mod player_state;

pub use items::*;
pub use mechanics::*;
pub use player_state::*;
