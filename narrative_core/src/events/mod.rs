//! Events - the nodes of the narrative graph.
//!
//! An [`Event`] is a small `Copy` value: which scene it shows, the prose it was
//! created with, and the scratch flags of the current visit. All behaviour lives
//! in the scene's [`Scene`] implementation, looked up through [`SceneId`].
//!
//! Resolving an action never changes a stored event. The scene works on a
//! [`Visit`] and the result is handed back as a [`Resolution`]: the revised
//! current event plus the event to show next.

use tower_rules::{Action, Item, PlayerState};

use crate::buffer::{Description, MenuLabels};
use crate::story::SceneId;

/// Text of the inert event.
pub const NOTHING_HAPPENS: &str = "Nothing happens.";

/// Scratch flags remembered for one visit of a scene, such as "the player has
/// looked at the table". Their meaning is private to each scene.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LocalTags(u8);

impl LocalTags {
    pub const EMPTY: Self = Self(0);

    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// All flags of `other` are set.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Any flag of `other` is set.
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// What a scene may touch while resolving a choice.
#[derive(Debug)]
pub struct Visit<'a> {
    pub player: &'a mut PlayerState,
    pub tags: LocalTags,
}

impl Visit<'_> {
    pub fn has_tag(&self, tag: LocalTags) -> bool {
        self.tags.intersects(tag)
    }

    pub fn mark(&mut self, tag: LocalTags) {
        self.tags.insert(tag);
    }
}

/// Behaviour of one kind of scene.
///
/// Every method has an inert default: no extra prose, no objects, and
/// "Nothing happens." for any choice.
pub trait Scene: Sync {
    /// Prose the scene starts from.
    fn text(&self) -> &'static str {
        NOTHING_HAPPENS
    }

    /// `false` offers a single "Continue" instead of the action menu.
    fn allows_actions(&self) -> bool {
        false
    }

    /// On continue, go back one step in history instead of moving on.
    fn returns_to_previous(&self) -> bool {
        true
    }

    fn load_description(&self, event: &Event, _player: &PlayerState, out: &mut Description) {
        out.append(event.text());
    }

    fn load_object_menu(&self, _event: &Event, _player: &PlayerState, _out: &mut MenuLabels) {}

    fn process_action_on_object(&self, _visit: &mut Visit<'_>, _action: Action, _object: usize) -> Event {
        Event::default()
    }

    fn process_item_on_object(&self, _visit: &mut Visit<'_>, _item: Item, _object: usize) -> Event {
        Event::default()
    }

    fn continue_event(&self, _event: &Event, _player: &mut PlayerState) -> Event {
        Event::default()
    }
}

/// Outcome of a choice made in an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// The event the choice was made in, with its visit flags updated.
    pub current: Event,
    /// The event to show next.
    pub next: Event,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    scene: SceneId,
    text: &'static str,
    tags: LocalTags,
}

impl Default for Event {
    fn default() -> Self {
        Self::narration(NOTHING_HAPPENS)
    }
}

impl Event {
    /// A fresh visit of `scene` with its own prose.
    pub fn new(scene: SceneId) -> Self {
        Self::with_text(scene, scene.behavior().text())
    }

    /// A fresh visit of `scene` with replacement prose.
    pub const fn with_text(scene: SceneId, text: &'static str) -> Self {
        Self {
            scene,
            text,
            tags: LocalTags::EMPTY,
        }
    }

    /// An inert beat of text that returns to the previous event.
    pub const fn narration(text: &'static str) -> Self {
        Self::with_text(SceneId::Narration, text)
    }

    pub fn scene(&self) -> SceneId {
        self.scene
    }

    pub fn text(&self) -> &'static str {
        self.text
    }

    pub fn local_tags(&self) -> LocalTags {
        self.tags
    }

    pub fn actions_are_allowed(&self) -> bool {
        self.scene.behavior().allows_actions()
    }

    pub fn should_return_to_previous_event(&self) -> bool {
        self.scene.behavior().returns_to_previous()
    }

    /// Write the prose shown for this event, truncated to the buffer.
    pub fn load_description(&self, player: &PlayerState, out: &mut Description) {
        out.clear();
        self.scene.behavior().load_description(self, player, out);
    }

    /// Write the labels of the objects the player can interact with right now.
    pub fn load_object_menu(&self, player: &PlayerState, out: &mut MenuLabels) {
        out.clear();
        self.scene.behavior().load_object_menu(self, player, out);
    }

    pub fn object_count(&self, player: &PlayerState) -> usize {
        let mut labels = MenuLabels::new();
        self.load_object_menu(player, &mut labels);
        labels.len()
    }

    /// Resolve `action` on the object at menu position `object`.
    ///
    /// An object index outside the current menu resolves to the inert event and
    /// leaves the visit flags alone.
    pub fn process_action_on_object(
        &self,
        player: &mut PlayerState,
        action: Action,
        object: usize,
    ) -> Resolution {
        if object >= self.object_count(player) {
            return self.unchanged();
        }

        let mut visit = Visit {
            player,
            tags: self.tags,
        };
        let next = self
            .scene
            .behavior()
            .process_action_on_object(&mut visit, action, object);
        self.revised(visit.tags, next)
    }

    /// Resolve using the carried `item` on the object at menu position `object`.
    pub fn process_item_on_object(
        &self,
        player: &mut PlayerState,
        item: Item,
        object: usize,
    ) -> Resolution {
        if object >= self.object_count(player) {
            return self.unchanged();
        }

        let mut visit = Visit {
            player,
            tags: self.tags,
        };
        let next = self
            .scene
            .behavior()
            .process_item_on_object(&mut visit, item, object);
        self.revised(visit.tags, next)
    }

    /// The event that follows once the player acknowledges this one.
    pub fn continue_event(&self, player: &mut PlayerState) -> Event {
        self.scene.behavior().continue_event(self, player)
    }

    fn unchanged(&self) -> Resolution {
        Resolution {
            current: *self,
            next: Event::default(),
        }
    }

    fn revised(&self, tags: LocalTags, next: Event) -> Resolution {
        Resolution {
            current: Event { tags, ..*self },
            next,
        }
    }
}
