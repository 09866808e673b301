//! Item definitions for things the player can carry.

use serde::{Deserialize, Serialize};

/// Every kind of item the player can carry.
///
/// The discriminant is the item's bit index inside an [`ItemSet`]. It is also
/// the ordering key when carried items are listed in a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Item {
    Crystal = 0,
    Lamp = 1,
    SilverSword = 2,
    BrokenKey = 3,
    BlankKey = 4,
    ModifiedKey = 5,
    Curtain = 6,
    CopiedKey = 7,
    CopperKey = 8,
    Rope = 9,
}

impl Item {
    /// All items in ascending bit order.
    pub const ALL: [Item; 10] = [
        Item::Crystal,
        Item::Lamp,
        Item::SilverSword,
        Item::BrokenKey,
        Item::BlankKey,
        Item::ModifiedKey,
        Item::Curtain,
        Item::CopiedKey,
        Item::CopperKey,
        Item::Rope,
    ];

    /// Bit index of this item.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Single-bit mask of this item.
    pub const fn bit(self) -> u16 {
        1 << self.index()
    }

    /// Name shown in the item menu.
    pub fn name(self) -> &'static str {
        match self {
            Item::Crystal => "Crystal",
            Item::Lamp => "Lamp",
            Item::SilverSword => "Silver Sword",
            Item::BrokenKey => "Broken Key",
            Item::BlankKey => "Blank Key",
            Item::ModifiedKey => "Modified Key",
            Item::Curtain => "Curtain",
            Item::CopiedKey => "Copied Key",
            Item::CopperKey => "Copper Key",
            Item::Rope => "Rope",
        }
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Fixed-width bit set of carried items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ItemSet(u16);

impl ItemSet {
    /// An empty set.
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, item: Item) {
        self.0 |= item.bit();
    }

    pub fn remove(&mut self, item: Item) {
        self.0 &= !item.bit();
    }

    pub fn contains(&self, item: Item) -> bool {
        self.0 & item.bit() == item.bit()
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Number of items in the set.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate over the held items in ascending bit order.
    pub fn iter(&self) -> impl Iterator<Item = Item> + '_ {
        Item::ALL.into_iter().filter(move |item| self.contains(*item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_bits_are_distinct() {
        let mut seen = 0u16;
        for item in Item::ALL {
            assert_eq!(seen & item.bit(), 0, "{item} shares a bit");
            seen |= item.bit();
        }
        assert_eq!(seen.count_ones(), 10);
    }

    #[test]
    fn test_item_set_insert_remove() {
        let mut set = ItemSet::empty();
        assert!(set.is_empty());

        set.insert(Item::Rope);
        set.insert(Item::Lamp);
        assert!(set.contains(Item::Rope));
        assert!(set.contains(Item::Lamp));
        assert!(!set.contains(Item::Crystal));
        assert_eq!(set.len(), 2);

        set.remove(Item::Rope);
        assert!(!set.contains(Item::Rope));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_item_set_iterates_in_bit_order() {
        let mut set = ItemSet::empty();
        set.insert(Item::Rope);
        set.insert(Item::Crystal);
        set.insert(Item::Curtain);

        let items: Vec<_> = set.iter().collect();
        assert_eq!(items, vec![Item::Crystal, Item::Curtain, Item::Rope]);
    }

    #[test]
    fn test_item_names_fit_menu_labels() {
        for item in Item::ALL {
            assert!(item.name().len() <= 12, "{item} is too long for a label");
        }
    }
}
