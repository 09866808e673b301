//! Player state - the items carried and the story flags earned.

use serde::{Deserialize, Serialize};

use crate::items::{Item, ItemSet};
use crate::mechanics::{Achievement, AchievementSet};

/// Everything the story remembers about the player between scenes.
///
/// Only scene transition logic mutates this. Dying, winning and starting a new
/// game clear it completely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlayerState {
    items_carried: ItemSet,
    achievements: AchievementSet,
}

impl PlayerState {
    /// Create a player carrying nothing.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item(&mut self, item: Item) {
        self.items_carried.insert(item);
    }

    pub fn remove_item(&mut self, item: Item) {
        self.items_carried.remove(item);
    }

    pub fn has_item(&self, item: Item) -> bool {
        self.items_carried.contains(item)
    }

    pub fn add_achievement(&mut self, achievement: Achievement) {
        self.achievements.insert(achievement);
    }

    pub fn remove_achievement(&mut self, achievement: Achievement) {
        self.achievements.remove(achievement);
    }

    pub fn has_achievement(&self, achievement: Achievement) -> bool {
        self.achievements.contains(achievement)
    }

    /// The item at position `index` among the items currently carried.
    ///
    /// Returns `None` when fewer than `index + 1` items are carried.
    pub fn item_by_index(&self, index: usize) -> Option<Item> {
        self.items_carried.iter().nth(index)
    }

    /// Carried items in menu order.
    pub fn carried_items(&self) -> impl Iterator<Item = Item> + '_ {
        self.items_carried.iter()
    }

    pub fn item_count(&self) -> usize {
        self.items_carried.len()
    }

    /// Forget every item and achievement.
    pub fn clear(&mut self) {
        self.items_carried.clear();
        self.achievements.clear();
    }

    pub fn is_cleared(&self) -> bool {
        self.items_carried.is_empty() && self.achievements.is_empty()
    }
}
