//! Below the entrance hall: the dark stairs, the bat, the store room and the well.

use tower_rules::{Achievement, Action, Item, PlayerState};

use crate::buffer::{Description, MenuLabels};
use crate::events::{Event, LocalTags, Scene, Visit};

use super::{describe, load_objects, SceneId};

const STOREROOM_TEXT: &str = "The light from your lamp shows this is a store room with many barrels. There is a well in the middle of the room.";

const STAIRS_UP_LOOK: &str = "The stairs lead up to the light of the entrance room.";

/// The crystal lies in the well until taken or set in the oak door.
fn crystal_in_well(player: &PlayerState) -> bool {
    !player.has_item(Item::Crystal) && !player.has_achievement(Achievement::OakDoorOpened)
}

pub struct DarkStairs;

impl Scene for DarkStairs {
    fn text(&self) -> &'static str {
        "You descend several steps, but it quickly gets too dark to proceed further."
    }

    fn allows_actions(&self) -> bool {
        true
    }

    fn load_object_menu(&self, _event: &Event, _player: &PlayerState, out: &mut MenuLabels) {
        out.extend(["Stairs up", "Darkness"]);
    }

    fn process_action_on_object(&self, _visit: &mut Visit<'_>, action: Action, object: usize) -> Event {
        match (action, object) {
            (Action::Look, _) => describe(
                &[STAIRS_UP_LOOK, "This area is too dark to see anything."],
                object,
            ),
            (Action::Use, 0) => SceneId::EntranceHall.event(),
            _ => Event::default(),
        }
    }

    fn process_item_on_object(&self, visit: &mut Visit<'_>, item: Item, object: usize) -> Event {
        match (item, object) {
            (Item::Lamp, 1) if visit.player.has_achievement(Achievement::BatSlain) => {
                SceneId::Storeroom.event()
            }
            (Item::Lamp, 1) => SceneId::BatAttack.event(),
            _ => Event::default(),
        }
    }
}

pub struct BatAttack;

const BAT: usize = 3;

const KILLED_BY_BAT: &str = "While distracted the bat grabs you and sinks its fangs deep into your neck. Everything goes dark.";

impl Scene for BatAttack {
    fn text(&self) -> &'static str {
        STOREROOM_TEXT
    }

    fn allows_actions(&self) -> bool {
        true
    }

    fn load_description(&self, event: &Event, _player: &PlayerState, out: &mut Description) {
        out.append(event.text());
        out.append(" Your light disturbs a large black creature, hanging from the ceiling. The large bat unfolds its wings and attacks you!");
    }

    fn load_object_menu(&self, _event: &Event, _player: &PlayerState, out: &mut MenuLabels) {
        out.extend(["Stairs up", "Barrels", "Well", "Large Bat"]);
    }

    /// Anything but studying the bat gets the player bitten.
    fn process_action_on_object(&self, _visit: &mut Visit<'_>, action: Action, object: usize) -> Event {
        match (action, object) {
            (Action::Look, BAT) => {
                Event::narration("The bat has a five foot wing span and very sharp fangs.")
            }
            _ => Event::with_text(SceneId::Death, KILLED_BY_BAT),
        }
    }

    fn process_item_on_object(&self, visit: &mut Visit<'_>, item: Item, object: usize) -> Event {
        match (item, object) {
            (Item::SilverSword, BAT) => {
                visit.player.add_achievement(Achievement::BatSlain);
                SceneId::BatSlain.event()
            }
            (_, BAT) => Event::default(),
            _ => Event::with_text(SceneId::Death, KILLED_BY_BAT),
        }
    }
}

pub struct BatSlain;

impl Scene for BatSlain {
    fn text(&self) -> &'static str {
        "The bat flies towards you, fangs ready to bite you. You quickly draw your sword and swing at the creature. The sword cuts the creature and the fell beast screeches and bursts into flames before evaporating into mist."
    }

    fn returns_to_previous(&self) -> bool {
        false
    }

    fn continue_event(&self, _event: &Event, _player: &mut PlayerState) -> Event {
        SceneId::Storeroom.event()
    }
}

pub struct Storeroom;

const STOREROOM_OBJECTS: [&str; 4] = ["Stairs up", "Barrels", "Well", "Rope"];

const BARRELS: usize = 1;
const WELL: usize = 2;
const ROPE: usize = 3;

const NOTICE_ROPE: LocalTags = LocalTags::from_bits(1 << 0);

const GLITTER_IN_WELL: &str = "There seems to be water in the well. Something glitters in the light under the shallow water.";

impl Storeroom {
    /// Rope spotted in a barrel, or hanging from the well.
    fn shows_rope(event_tags: LocalTags, player: &PlayerState) -> bool {
        let noticed = event_tags.intersects(NOTICE_ROPE) && !player.has_item(Item::Rope);
        noticed || player.has_achievement(Achievement::RopeTiedToWell)
    }
}

impl Scene for Storeroom {
    fn text(&self) -> &'static str {
        STOREROOM_TEXT
    }

    fn allows_actions(&self) -> bool {
        true
    }

    fn load_object_menu(&self, event: &Event, player: &PlayerState, out: &mut MenuLabels) {
        let mut count = STOREROOM_OBJECTS.len() - 1;
        if Self::shows_rope(event.local_tags(), player) {
            count += 1;
        }
        load_objects(&STOREROOM_OBJECTS, count, out);
    }

    fn process_action_on_object(&self, visit: &mut Visit<'_>, action: Action, object: usize) -> Event {
        match (action, object) {
            (Action::Look, BARRELS)
                if !visit.player.has_item(Item::Rope)
                    && !visit.player.has_achievement(Achievement::RopeTiedToWell) =>
            {
                visit.mark(NOTICE_ROPE);
                Event::narration("One of the barrels contains some rope.")
            }
            (Action::Look, WELL) if crystal_in_well(visit.player) => Event::narration(GLITTER_IN_WELL),
            (Action::Look, _) => describe(
                &[
                    STAIRS_UP_LOOK,
                    "The barrels contain grain.",
                    "There seems to be water in the well.",
                    "The long length of rope is made of hemp and looks strong.",
                ],
                object,
            ),
            (Action::Use, 0) => SceneId::EntranceHall.event(),
            (Action::Use, ROPE) if visit.player.has_achievement(Achievement::RopeTiedToWell) => {
                SceneId::WellInterior.event()
            }
            (Action::Take, ROPE) => {
                visit.player.add_item(Item::Rope);
                visit.player.remove_achievement(Achievement::RopeTiedToWell);
                Event::narration("You gather the rope.")
            }
            _ => Event::default(),
        }
    }

    fn process_item_on_object(&self, visit: &mut Visit<'_>, item: Item, object: usize) -> Event {
        match (item, object) {
            (Item::Rope, WELL) => {
                visit.player.add_achievement(Achievement::RopeTiedToWell);
                visit.player.remove_item(Item::Rope);
                Event::narration("You tie the rope around the well.")
            }
            (Item::Lamp, WELL) if crystal_in_well(visit.player) => Event::narration(GLITTER_IN_WELL),
            (Item::Lamp, WELL) => Event::narration("The water is still."),
            _ => Event::default(),
        }
    }
}

pub struct WellInterior;

const WELL_OBJECTS: [&str; 4] = ["Water", "Rope", "Crystal", "Key"];

const WATER: usize = 0;
const CLIMB_ROPE: usize = 1;
const CRYSTAL: usize = 2;
const BLANK_KEY: usize = 3;

const NOTICE_KEY: LocalTags = LocalTags::from_bits(1 << 0);

impl WellInterior {
    /// The blank key only shows in the crystal's light, once spotted.
    fn shows_key(event_tags: LocalTags, player: &PlayerState) -> bool {
        event_tags.intersects(NOTICE_KEY)
            && !player.has_item(Item::BlankKey)
            && !player.has_item(Item::CopiedKey)
            && crystal_in_well(player)
    }
}

impl Scene for WellInterior {
    fn text(&self) -> &'static str {
        "The water comes up to your waist, it feels cold."
    }

    fn allows_actions(&self) -> bool {
        true
    }

    fn load_description(&self, event: &Event, player: &PlayerState, out: &mut Description) {
        out.append(event.text());
        if crystal_in_well(player) {
            out.append(" You can see what looks like a crystal in the water.");
        }
    }

    fn load_object_menu(&self, event: &Event, player: &PlayerState, out: &mut MenuLabels) {
        let mut count = 2;
        if crystal_in_well(player) {
            count += 1;
            if Self::shows_key(event.local_tags(), player) {
                count += 1;
            }
        }
        load_objects(&WELL_OBJECTS, count, out);
    }

    fn process_action_on_object(&self, visit: &mut Visit<'_>, action: Action, object: usize) -> Event {
        match (action, object) {
            (Action::Look, WATER) if crystal_in_well(visit.player) => {
                visit.mark(NOTICE_KEY);
                Event::narration("You notice in the light of the crystal there is a key in water.")
            }
            (Action::Look, _) => describe(
                &[
                    "The water is clear and stagnant.",
                    "The rope hangs down from above.",
                    "The diamond-shaped crystal seems to glow with magical energy.",
                    "The key is has a no cuttings on its head. It is like a blank key.",
                ],
                object,
            ),
            (Action::Use, CLIMB_ROPE) => SceneId::Storeroom.event(),
            (Action::Take, CRYSTAL) => {
                let key_fades = Self::shows_key(visit.tags, visit.player);
                visit.player.add_item(Item::Crystal);
                if key_fades {
                    Event::narration("You take the diamond-shaped crystal. The key in the water fades into nothingness.")
                } else {
                    Event::narration("You take the diamond-shaped crystal.")
                }
            }
            (Action::Take, BLANK_KEY) => {
                visit.player.add_item(Item::BlankKey);
                Event::narration("You take the blank key.")
            }
            _ => Event::default(),
        }
    }
}
