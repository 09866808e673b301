//! Top floor: the oak door, the chest and the vials inside it.

use tower_rules::{Achievement, Action, Item, PlayerState};

use crate::buffer::{Description, MenuLabels};
use crate::events::{Event, Scene, Visit};

use super::{describe, SceneId};

pub const PINK_VIAL_DEATH: &str = "You take the pink vial and drink it. It tastes foul. A few moments later, you start coughing blood violently and collapse. Everything goes dark.";

const DOOR_SHUT: &str = "The door is shut tight. You cannot open it.";
const PINK_VIAL_LOOK: &str = "The small vial contains a pink liquid.";

pub struct OakDoor;

impl Scene for OakDoor {
    fn text(&self) -> &'static str {
        "You ascend the stairs to the next floor. A solid oak door awaits you at the top of the stairs."
    }

    fn allows_actions(&self) -> bool {
        true
    }

    fn load_object_menu(&self, _event: &Event, _player: &PlayerState, out: &mut MenuLabels) {
        out.extend(["Stairs Down", "Door"]);
    }

    fn process_action_on_object(&self, _visit: &mut Visit<'_>, action: Action, object: usize) -> Event {
        match (action, object) {
            (Action::Look, _) => describe(
                &[
                    "The stairs lead down to the hall below.",
                    "The solid oak door is sturdy and is locked. A magic circle with strange symbols mark the door. In the centre is a diamond shaped hole.",
                ],
                object,
            ),
            (Action::Use, 0) => SceneId::Laboratory.event(),
            _ => Event::default(),
        }
    }

    fn process_item_on_object(&self, visit: &mut Visit<'_>, item: Item, object: usize) -> Event {
        match (item, object) {
            (Item::Crystal, 1) => {
                visit.player.add_achievement(Achievement::OakDoorOpened);
                SceneId::DoorUnlocked.event()
            }
            _ => Event::default(),
        }
    }
}

pub struct DoorUnlocked;

impl Scene for DoorUnlocked {
    fn text(&self) -> &'static str {
        "You place the crystal in the door. The magic circle and the symbols glow faintly and hum with energy. With a loud grinding sound, the door swings open to reveal the room beyond."
    }

    fn returns_to_previous(&self) -> bool {
        false
    }

    fn continue_event(&self, _event: &Event, _player: &mut PlayerState) -> Event {
        SceneId::ChestRoom.event()
    }
}

pub struct ChestRoom;

impl Scene for ChestRoom {
    fn text(&self) -> &'static str {
        "Four arrow-slit windows cast a dim light in this room. A chest stands in the middle of the room."
    }

    fn allows_actions(&self) -> bool {
        true
    }

    fn load_object_menu(&self, _event: &Event, _player: &PlayerState, out: &mut MenuLabels) {
        out.extend(["Chest", "Stairs down"]);
    }

    fn process_action_on_object(&self, _visit: &mut Visit<'_>, action: Action, object: usize) -> Event {
        match (action, object) {
            (Action::Look, _) => describe(
                &[
                    "The chest is sturdy with iron bands and a lock built in. Could this have the cure you are looking for?",
                    "The stairs lead down to the floor below.",
                ],
                object,
            ),
            (Action::Use, 1) => SceneId::Laboratory.event(),
            (Action::Take, 0) => Event::narration(
                "You try to move the chest, but it won't budge. It is like it is held in place by some force.",
            ),
            _ => Event::default(),
        }
    }

    fn process_item_on_object(&self, _visit: &mut Visit<'_>, item: Item, object: usize) -> Event {
        match (item, object) {
            (Item::CopperKey, 0) => SceneId::ChestCopperKey.event(),
            (Item::ModifiedKey, 0) => SceneId::ChestModifiedKey.event(),
            (Item::CopiedKey, 0) => SceneId::ChestCopiedKey.event(),
            _ => Event::default(),
        }
    }
}

/// The chest opened with some key. Each key reveals a different set of vials;
/// the door locks behind the player, so the only ways out are the vials.
struct OpenChest {
    contents: &'static str,
    objects: &'static [&'static str],
    looks: &'static [&'static str],
    /// What drinking the vial at each index leads to.
    drinks: &'static [fn() -> Event],
}

const OPEN_CHEST_TEXT: &str = "The key slots in and turns. The chest unlocks and you open it. The door slams shut behind you. Inside you see ";

fn drink_pink() -> Event {
    Event::with_text(SceneId::Death, PINK_VIAL_DEATH)
}

fn drink_yellow() -> Event {
    SceneId::YellowVialCure.event()
}

impl OpenChest {
    fn load_description(&self, event: &Event, out: &mut Description) {
        out.append(event.text());
        out.append(self.contents);
    }

    fn process_action_on_object(&self, action: Action, object: usize) -> Event {
        match action {
            Action::Look => describe(self.looks, object),
            Action::Use | Action::Take => match self.drinks.get(object) {
                Some(drink) => drink(),
                None => describe(self.looks, object),
            },
            Action::Item => Event::default(),
        }
    }
}

const COPIED_KEY_CHEST: OpenChest = OpenChest {
    contents: "two vials, each containing a different coloured liquid.",
    objects: &["Pink Vial", "Yellow Vial", "Door"],
    looks: &[PINK_VIAL_LOOK, "The small vial contains a yellow liquid.", DOOR_SHUT],
    drinks: &[drink_pink, drink_yellow],
};

const MODIFIED_KEY_CHEST: OpenChest = OpenChest {
    contents: "a vial containing a pink liquid.",
    objects: &["Pink Vial", "Door"],
    looks: &[PINK_VIAL_LOOK, DOOR_SHUT],
    drinks: &[drink_pink],
};

const COPPER_KEY_CHEST: OpenChest = OpenChest {
    contents: "a vial containing a pink liquid.",
    objects: &["Vial", "Door"],
    looks: &[PINK_VIAL_LOOK, DOOR_SHUT],
    drinks: &[drink_pink],
};

macro_rules! open_chest_scene {
    ($name:ident, $chest:expr) => {
        pub struct $name;

        impl Scene for $name {
            fn text(&self) -> &'static str {
                OPEN_CHEST_TEXT
            }

            fn allows_actions(&self) -> bool {
                true
            }

            fn load_description(&self, event: &Event, _player: &PlayerState, out: &mut Description) {
                $chest.load_description(event, out);
            }

            fn load_object_menu(&self, _event: &Event, _player: &PlayerState, out: &mut MenuLabels) {
                out.extend($chest.objects.iter().copied());
            }

            fn process_action_on_object(&self, _visit: &mut Visit<'_>, action: Action, object: usize) -> Event {
                $chest.process_action_on_object(action, object)
            }
        }
    };
}

open_chest_scene!(ChestCopiedKey, COPIED_KEY_CHEST);
open_chest_scene!(ChestModifiedKey, MODIFIED_KEY_CHEST);
open_chest_scene!(ChestCopperKey, COPPER_KEY_CHEST);

pub struct YellowVialCure;

impl Scene for YellowVialCure {
    fn text(&self) -> &'static str {
        "You take the yellow vial and drink it. It tastes foul. A few moments later, you feel warmth return to your body. You starting breathing again. The potion has cured you of the curse of undeath!"
    }

    fn returns_to_previous(&self) -> bool {
        false
    }

    fn continue_event(&self, _event: &Event, _player: &mut PlayerState) -> Event {
        SceneId::Victory.event()
    }
}
