//! # Narrative Core
//!
//! The game engine of "The Cursed Tower": a short text adventure played on a
//! small monochrome screen with a d-pad and two buttons. This crate builds on
//! `tower_rules` and turns the player's state into a scrolling page of
//! description followed by a menu of choices.
//!
//! ## Core Components
//!
//! - **events** / **story**: scenes as values, and the tower's content
//! - **history**: the last events visited, with their scroll positions
//! - **text_box** / **menu**: word-wrapped description and packed menu
//! - **screen**: one scrollable column holding both, driven by the d-pad
//! - **presenter**: the menu flow that ties player input to the story
//! - **headless**: a character grid standing in for the hardware display
//!
//! ## Design Philosophy
//!
//! - **Fixed Memory**: text and menus live in fixed-capacity buffers
//! - **Values, Not Mutation**: resolving an action returns revised events
//! - **Hardware Behind Traits**: drawing and buttons are plain traits

pub mod buffer;
pub mod config;
pub mod display;
pub mod events;
pub mod headless;
pub mod history;
pub mod input;
pub mod menu;
pub mod presenter;
pub mod screen;
pub mod story;
pub mod text_box;

pub use buffer::{Description, Label, MenuLabels, TextBuffer};
pub use config::{ConfigError, EngineConfig, InputTiming};
pub use display::{Cursor, Display, Pen, Rect, ScreenGeometry};
pub use events::{Event, LocalTags, Resolution, Scene};
pub use headless::TextGrid;
pub use history::{EventHistory, HISTORY_DEPTH};
pub use input::{Button, ButtonState, Buttons};
pub use menu::{ChoiceMenu, MenuSignal};
pub use presenter::{GamePresenter, MenuMode};
pub use screen::{GameScreen, Viewport};
pub use story::SceneId;
pub use text_box::DescriptionBox;
