//! Game mechanics: player actions and story achievements.

use serde::{Deserialize, Serialize};

/// Actions the player can choose from the action menu.
///
/// The discriminant is the action's position in the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Action {
    #[default]
    Look = 0,
    Take = 1,
    Use = 2,
    /// Use a carried item on an object.
    Item = 3,
}

impl Action {
    /// Actions in menu order.
    pub const STANDARD: [Action; 4] = [Action::Look, Action::Take, Action::Use, Action::Item];

    /// Map a menu index back to its action.
    pub fn from_index(index: usize) -> Option<Action> {
        Self::STANDARD.get(index).copied()
    }

    /// Label shown in the action menu.
    pub fn label(self) -> &'static str {
        match self {
            Action::Look => "Look",
            Action::Take => "Take",
            Action::Use => "Use",
            Action::Item => "Item",
        }
    }
}

/// Persistent story-progress flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Achievement {
    /// The bat in the cellar has been killed.
    BatSlain = 0,
    /// The angel statue dropped its sword.
    SwordReleased = 1,
    /// The curtain was pulled off the key-cutting machine.
    KeyMachineUncovered = 2,
    /// The rope hangs from the well.
    RopeTiedToWell = 3,
    /// The crystal opened the oak door at the top of the tower.
    OakDoorOpened = 4,
}

impl Achievement {
    pub const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Fixed-width bit set of achievements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct AchievementSet(u8);

impl AchievementSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, achievement: Achievement) {
        self.0 |= achievement.bit();
    }

    pub fn remove(&mut self, achievement: Achievement) {
        self.0 &= !achievement.bit();
    }

    pub fn contains(&self, achievement: Achievement) -> bool {
        self.0 & achievement.bit() != 0
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}
