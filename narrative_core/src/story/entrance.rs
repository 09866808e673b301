//! First floor: the entrance hall, where every playthrough starts.

use tower_rules::{Action, Item, PlayerState};

use crate::buffer::MenuLabels;
use crate::events::{Event, Scene, Visit};

use super::{describe, load_objects, SceneId};

pub struct EntranceHall;

const OBJECTS: [&str; 4] = ["Entrance", "Stairs up", "Stairs down", "Lamp"];

const ENTRANCE: usize = 0;
const STAIRS_UP: usize = 1;
const STAIRS_DOWN: usize = 2;
const LAMP: usize = 3;

const LOOKS: [&str; 4] = [
    "The doors are made of old oak. Patterns of trees and falling leaves are carved into the doors.",
    "The wooden stairs go up as they wind around the wall, leading to the next floor.",
    "The stone stairs hug the wall as they descend into darkness.",
    "The lamps are still running; though, they have not been touched for a long time.",
];

impl Scene for EntranceHall {
    fn text(&self) -> &'static str {
        "A red carpet leads between the entrance door and stairs that lead up and down. The oil lamps on the wall dimly light the room in dancing shadows."
    }

    fn allows_actions(&self) -> bool {
        true
    }

    fn load_object_menu(&self, _event: &Event, _player: &PlayerState, out: &mut MenuLabels) {
        load_objects(&OBJECTS, OBJECTS.len(), out);
    }

    fn process_action_on_object(&self, visit: &mut Visit<'_>, action: Action, object: usize) -> Event {
        match (action, object) {
            (Action::Look, _) => describe(&LOOKS, object),
            (Action::Use, ENTRANCE) => Event::narration("The door is shut tight. You cannot open it."),
            (Action::Use, STAIRS_UP) => SceneId::AngelHall.event(),
            (Action::Use, STAIRS_DOWN) => SceneId::DarkStairs.event(),
            (Action::Take, LAMP) => {
                if visit.player.has_item(Item::Lamp) {
                    Event::narration("You already have a lamp!")
                } else {
                    visit.player.add_item(Item::Lamp);
                    Event::narration("You take one of the lamps off the wall.")
                }
            }
            _ => Event::default(),
        }
    }
}
