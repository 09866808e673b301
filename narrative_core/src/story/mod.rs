//! The Cursed Tower - every scene of the game and how they connect.
//!
//! Floors from the bottom up: the cellar with its well, the entrance hall, the
//! angel gallery, the laboratory with the key machine, and the locked room at
//! the top. The prelude holds the beats that frame a playthrough.

mod cellar;
mod entrance;
mod gallery;
mod prelude;
mod summit;
mod workshop;

use crate::buffer::MenuLabels;
use crate::events::{Event, Scene};

pub use prelude::EMPTY_INVENTORY;
pub use summit::PINK_VIAL_DEATH;

/// Identity of a scene. Dispatches to the scene's behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneId {
    Intro,
    Resurrection,
    Victory,
    ReturnToTitle,
    /// The player died; the text says how.
    Death,
    YellowVialCure,
    /// Inert beat of text.
    Narration,
    DarkStairs,
    BatAttack,
    BatSlain,
    Storeroom,
    WellInterior,
    EntranceHall,
    AngelHall,
    Laboratory,
    OakDoor,
    DoorUnlocked,
    ChestRoom,
    ChestCopiedKey,
    ChestModifiedKey,
    ChestCopperKey,
}

impl SceneId {
    pub const ALL: [SceneId; 21] = [
        SceneId::Intro,
        SceneId::Resurrection,
        SceneId::Victory,
        SceneId::ReturnToTitle,
        SceneId::Death,
        SceneId::YellowVialCure,
        SceneId::Narration,
        SceneId::DarkStairs,
        SceneId::BatAttack,
        SceneId::BatSlain,
        SceneId::Storeroom,
        SceneId::WellInterior,
        SceneId::EntranceHall,
        SceneId::AngelHall,
        SceneId::Laboratory,
        SceneId::OakDoor,
        SceneId::DoorUnlocked,
        SceneId::ChestRoom,
        SceneId::ChestCopiedKey,
        SceneId::ChestModifiedKey,
        SceneId::ChestCopperKey,
    ];

    pub fn behavior(self) -> &'static dyn Scene {
        match self {
            SceneId::Intro => &prelude::Intro,
            SceneId::Resurrection => &prelude::Resurrection,
            SceneId::Victory => &prelude::Victory,
            SceneId::ReturnToTitle => &prelude::ReturnToTitle,
            SceneId::Death => &prelude::Death,
            SceneId::YellowVialCure => &summit::YellowVialCure,
            SceneId::Narration => &prelude::Narration,
            SceneId::DarkStairs => &cellar::DarkStairs,
            SceneId::BatAttack => &cellar::BatAttack,
            SceneId::BatSlain => &cellar::BatSlain,
            SceneId::Storeroom => &cellar::Storeroom,
            SceneId::WellInterior => &cellar::WellInterior,
            SceneId::EntranceHall => &entrance::EntranceHall,
            SceneId::AngelHall => &gallery::AngelHall,
            SceneId::Laboratory => &workshop::Laboratory,
            SceneId::OakDoor => &summit::OakDoor,
            SceneId::DoorUnlocked => &summit::DoorUnlocked,
            SceneId::ChestRoom => &summit::ChestRoom,
            SceneId::ChestCopiedKey => &summit::ChestCopiedKey,
            SceneId::ChestModifiedKey => &summit::ChestModifiedKey,
            SceneId::ChestCopperKey => &summit::ChestCopperKey,
        }
    }

    /// A fresh visit of this scene.
    pub fn event(self) -> Event {
        Event::new(self)
    }
}

/// The event a new game starts with.
pub fn first_event() -> Event {
    Event::new(SceneId::Intro)
}

/// Narration for entry `index` of a scene's texts, or the inert event.
fn describe(texts: &[&'static str], index: usize) -> Event {
    texts
        .get(index)
        .copied()
        .map_or_else(Event::default, Event::narration)
}

/// Labels `list[..count]`, for scenes whose optional objects sit at the end.
fn load_objects(list: &[&str], count: usize, out: &mut MenuLabels) {
    out.extend(list.iter().take(count).copied());
}
