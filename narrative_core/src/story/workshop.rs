//! Third floor: the laboratory and its key-cutting machine.
//!
//! The machine takes a key to copy, then a key to cut. What was placed in the
//! machine is part of the visit, so leaving the room empties it.

use tower_rules::{Achievement, Action, Item, PlayerState};

use crate::buffer::{Description, MenuLabels};
use crate::events::{Event, LocalTags, Scene, Visit};

use super::{describe, load_objects, SceneId};

pub struct Laboratory;

const OBJECTS: [&str; 5] = ["Table", "Curtain", "Stairs up", "Stairs down", "Key"];
const MACHINE_LABEL: &str = "Key Machine";

const TABLE: usize = 0;
const MACHINE: usize = 1;
const STAIRS_UP: usize = 2;
const STAIRS_DOWN: usize = 3;
const COPPER_KEY: usize = 4;

const NOTICE_KEY: LocalTags = LocalTags::from_bits(1 << 0);
const CUT_COPPER_KEY: LocalTags = LocalTags::from_bits(1 << 1);
const CUT_BLANK_KEY: LocalTags = LocalTags::from_bits(1 << 2);
const COPY_COPPER_KEY: LocalTags = LocalTags::from_bits(1 << 3);
const COPY_BROKEN_KEY: LocalTags = LocalTags::from_bits(1 << 4);
const CUT_SLOT: LocalTags = CUT_COPPER_KEY.union(CUT_BLANK_KEY);
const COPY_SLOT: LocalTags = COPY_COPPER_KEY.union(COPY_BROKEN_KEY);

const LOOKS: [&str; 5] = [
    "The table is stained with spilled chemicals. The tools and instruments are rusted and broken. In amongst the mess there is a copper key.",
    "The elegant red curtain with gold trim completely covers something large and box shaped.",
    "The stairs wind up to the next floor.",
    "The stairs lead down to the faint light of the hall below.",
    "The key is small and made of copper. It has an elegant floral pattern on the handle.",
];

const TABLE_WITHOUT_KEY: &str = "The table is stained with spilled chemicals. The tools and instruments are rusted and broken.";
const MACHINE_LOOK: &str = "The key cutting machine seems to take first the key you wish to copy and then the cut you wish to cut.";

fn machine_uncovered(player: &PlayerState) -> bool {
    player.has_achievement(Achievement::KeyMachineUncovered)
}

fn machine_ready(tags: LocalTags) -> bool {
    tags.intersects(COPY_SLOT) && tags.intersects(CUT_SLOT)
}

/// Replace the key in the cut slot with its newly cut version.
fn cut_new_key(visit: &mut Visit<'_>) {
    let slot = visit.tags.intersection(CUT_SLOT);
    if slot == CUT_COPPER_KEY {
        visit.player.remove_item(Item::CopperKey);
        visit.player.add_item(Item::ModifiedKey);
    } else if slot == CUT_BLANK_KEY {
        visit.player.remove_item(Item::BlankKey);
        visit.player.add_item(Item::CopiedKey);
    }
}

impl Scene for Laboratory {
    fn text(&self) -> &'static str {
        "At opposite ends of the room are stairs; one leads up, one leads down. There is a table of alchemical instruments and broken glass."
    }

    fn allows_actions(&self) -> bool {
        true
    }

    fn load_description(&self, event: &Event, player: &PlayerState, out: &mut Description) {
        out.append(event.text());
        if machine_uncovered(player) {
            out.append(" Next to it is a key-cutting machine.");
        } else {
            out.append(" Next to it a dusty curtain covers something large.");
        }
    }

    fn load_object_menu(&self, event: &Event, player: &PlayerState, out: &mut MenuLabels) {
        let mut objects = OBJECTS;
        if machine_uncovered(player) {
            objects[MACHINE] = MACHINE_LABEL;
        }

        let key_seen = event.local_tags().intersects(NOTICE_KEY) && !player.has_item(Item::CopperKey);
        let count = if key_seen { objects.len() } else { objects.len() - 1 };

        load_objects(&objects, count, out);
    }

    fn process_action_on_object(&self, visit: &mut Visit<'_>, action: Action, object: usize) -> Event {
        match (action, object) {
            (Action::Look, TABLE) => {
                visit.mark(NOTICE_KEY);
                if visit.player.has_item(Item::CopperKey) {
                    Event::narration(TABLE_WITHOUT_KEY)
                } else {
                    describe(&LOOKS, TABLE)
                }
            }
            (Action::Look, MACHINE) if machine_uncovered(visit.player) => Event::narration(MACHINE_LOOK),
            (Action::Look, _) => describe(&LOOKS, object),
            (Action::Use, STAIRS_UP) => {
                if visit.player.has_achievement(Achievement::OakDoorOpened) {
                    SceneId::ChestRoom.event()
                } else {
                    SceneId::OakDoor.event()
                }
            }
            (Action::Use, STAIRS_DOWN) => SceneId::AngelHall.event(),
            (Action::Use, MACHINE) => {
                if machine_ready(visit.tags) {
                    cut_new_key(visit);
                    Event::narration("You use the machine and get a new key.")
                } else if machine_uncovered(visit.player) {
                    Event::narration("First place a key to copy then one to cut. To reset choices, leave and return to this room.")
                } else {
                    Event::default()
                }
            }
            (Action::Take, MACHINE) if !machine_uncovered(visit.player) => {
                visit.player.add_achievement(Achievement::KeyMachineUncovered);
                visit.player.add_item(Item::Curtain);
                Event::narration("You collect the curtain and uncover what seems to be a key cutting machine.")
            }
            (Action::Take, COPPER_KEY) => {
                visit.player.add_item(Item::CopperKey);
                Event::narration("You pick up the small copper key.")
            }
            _ => Event::default(),
        }
    }

    fn process_item_on_object(&self, visit: &mut Visit<'_>, item: Item, object: usize) -> Event {
        if object != MACHINE || !machine_uncovered(visit.player) {
            return Event::default();
        }

        if !visit.has_tag(COPY_SLOT) {
            match item {
                Item::CopperKey => Event::narration("This key looks okay. It doesn't need copying."),
                Item::BrokenKey => {
                    visit.mark(COPY_BROKEN_KEY);
                    Event::narration("You place the broken key in the machine for copying.")
                }
                _ => Event::default(),
            }
        } else if !visit.has_tag(CUT_SLOT) {
            match item {
                Item::CopperKey => {
                    visit.mark(CUT_COPPER_KEY);
                    Event::narration("You place the copper key in the machine for cutting.")
                }
                Item::BlankKey => {
                    visit.mark(CUT_BLANK_KEY);
                    Event::narration("You place the blank key in the machine for cutting.")
                }
                _ => Event::default(),
            }
        } else {
            Event::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uncovered_lab(player: &mut PlayerState) -> Event {
        player.add_achievement(Achievement::KeyMachineUncovered);
        SceneId::Laboratory.event()
    }

    #[test]
    fn test_copper_key_found_on_table() {
        let mut player = PlayerState::new();
        let lab = SceneId::Laboratory.event();
        assert_eq!(lab.object_count(&player), 4);

        let looked = lab.process_action_on_object(&mut player, Action::Look, TABLE);
        assert_eq!(looked.current.object_count(&player), 5);

        looked
            .current
            .process_action_on_object(&mut player, Action::Take, COPPER_KEY);
        assert!(player.has_item(Item::CopperKey));

        let again = looked
            .current
            .process_action_on_object(&mut player, Action::Look, TABLE);
        assert_eq!(again.next.text(), TABLE_WITHOUT_KEY);
        assert_eq!(again.current.object_count(&player), 4);
    }

    #[test]
    fn test_curtain_can_only_be_taken_once() {
        let mut player = PlayerState::new();
        let lab = SceneId::Laboratory.event();

        lab.process_action_on_object(&mut player, Action::Take, MACHINE);
        player.remove_item(Item::Curtain);

        let next = lab.process_action_on_object(&mut player, Action::Take, MACHINE).next;
        assert_eq!(next, Event::default());
        assert!(!player.has_item(Item::Curtain));
    }

    #[test]
    fn test_copper_key_cut_from_broken_key() {
        let mut player = PlayerState::new();
        player.add_item(Item::CopperKey);
        let lab = uncovered_lab(&mut player);

        let lab = lab.process_item_on_object(&mut player, Item::BrokenKey, MACHINE).current;
        let placed = lab.process_item_on_object(&mut player, Item::CopperKey, MACHINE);
        assert!(placed.next.text().contains("for cutting"));

        placed
            .current
            .process_action_on_object(&mut player, Action::Use, MACHINE);
        assert!(player.has_item(Item::ModifiedKey));
        assert!(!player.has_item(Item::CopperKey));
    }

    #[test]
    fn test_machine_slots_reset_on_new_visit() {
        let mut player = PlayerState::new();
        let lab = uncovered_lab(&mut player);

        let loaded = lab
            .process_item_on_object(&mut player, Item::BrokenKey, MACHINE)
            .current;
        assert!(loaded.local_tags().intersects(COPY_SLOT));

        let fresh = SceneId::Laboratory.event();
        assert!(!fresh.local_tags().intersects(COPY_SLOT));
    }

    #[test]
    fn test_machine_ignores_items_while_covered() {
        let mut player = PlayerState::new();
        let lab = SceneId::Laboratory.event();
        let resolution = lab.process_item_on_object(&mut player, Item::BrokenKey, MACHINE);
        assert_eq!(resolution.next, Event::default());
        assert_eq!(resolution.current.local_tags(), LocalTags::EMPTY);
    }
}
