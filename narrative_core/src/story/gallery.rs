//! Second floor: the angel statue holding the silver sword.

use tower_rules::{Achievement, Action, Item, PlayerState};

use crate::buffer::{Description, MenuLabels};
use crate::events::{Event, LocalTags, Scene, Visit};

use super::{describe, load_objects, SceneId};

pub struct AngelHall;

const OBJECTS: [&str; 6] = [
    "Window",
    "Angel Statue",
    "Stairs up",
    "Stairs down",
    "Silver Sword",
    "Key",
];

const WINDOW: usize = 0;
const STATUE: usize = 1;
const STAIRS_UP: usize = 2;
const STAIRS_DOWN: usize = 3;
const SWORD: usize = 4;
const BROKEN_KEY: usize = 5;

const NOTICE_SWORD: LocalTags = LocalTags::from_bits(1 << 0);
const NOTICE_KEY: LocalTags = LocalTags::from_bits(1 << 1);

const LOOKS: [&str; 6] = [
    "The lonely window has rusted iron bars. A broken rail clings to the wall above the window.",
    "The statue is of an angelic knight kneeling before the light of the window. One hand on its breast plate the other holding a silver sword up-side-down.",
    "The stairs lead up to the next floor.",
    "Stairs lead down to a warm glow.",
    "The sword glitters beautifully in the light. It carries a sharp edge.",
    SWORD_ON_FLOOR,
];

const STATUE_WITHOUT_SWORD: &str = "The statue is of an angelic knight kneeling before the window. One hand on its breast plate the other reaching out in despair.";

const SWORD_ON_FLOOR: &str = "The sword is lying on the stone floor, light reflects off it onto the wall, which becomes translucent revealing a cache. In the cache you see a key.";

fn sword_on_floor(player: &PlayerState) -> bool {
    player.has_achievement(Achievement::SwordReleased) && !player.has_item(Item::SilverSword)
}

/// The cache behind the wall is lit while the sword lies on the floor.
fn key_reachable(player: &PlayerState) -> bool {
    sword_on_floor(player) && !player.has_item(Item::BrokenKey)
}

impl Scene for AngelHall {
    fn text(&self) -> &'static str {
        "A barred window casts a ray of light over a statue of a knightly angel. Stairs continue to lead up as well as down."
    }

    fn allows_actions(&self) -> bool {
        true
    }

    fn load_description(&self, event: &Event, player: &PlayerState, out: &mut Description) {
        out.append(event.text());
        if sword_on_floor(player) {
            out.append(" The sword is lying on the ground before the statue.");
        }
    }

    fn load_object_menu(&self, event: &Event, player: &PlayerState, out: &mut MenuLabels) {
        let tags = event.local_tags();
        let mut count = OBJECTS.len() - 2;

        let sword_seen = player.has_achievement(Achievement::SwordReleased) || tags.intersects(NOTICE_SWORD);
        if sword_seen && !player.has_item(Item::SilverSword) {
            count += 1;
        }
        if key_reachable(player) && tags.intersects(NOTICE_KEY) {
            count += 1;
        }

        load_objects(&OBJECTS, count, out);
    }

    fn process_action_on_object(&self, visit: &mut Visit<'_>, action: Action, object: usize) -> Event {
        match (action, object) {
            (Action::Look, STATUE) => {
                if !visit.player.has_item(Item::SilverSword) {
                    visit.mark(NOTICE_SWORD);
                }
                if visit.player.has_achievement(Achievement::SwordReleased) {
                    Event::narration(STATUE_WITHOUT_SWORD)
                } else {
                    describe(&LOOKS, STATUE)
                }
            }
            (Action::Look, SWORD) if key_reachable(visit.player) => {
                visit.mark(NOTICE_KEY);
                Event::narration(SWORD_ON_FLOOR)
            }
            (Action::Look, _) => describe(&LOOKS, object),
            (Action::Use, STAIRS_UP) => SceneId::Laboratory.event(),
            (Action::Use, STAIRS_DOWN) => SceneId::EntranceHall.event(),
            (Action::Take, SWORD) => {
                if visit.player.has_achievement(Achievement::SwordReleased) {
                    visit.player.add_item(Item::SilverSword);
                    Event::narration("The sword is in perfect condition and glistens silver in the light.")
                } else {
                    Event::narration("You are unable to release the sword from the statue's grip.")
                }
            }
            (Action::Take, BROKEN_KEY) => {
                visit.player.add_item(Item::BrokenKey);
                Event::narration("The key's handle is broken off and missing.")
            }
            _ => Event::default(),
        }
    }

    fn process_item_on_object(&self, visit: &mut Visit<'_>, item: Item, object: usize) -> Event {
        match (item, object) {
            (Item::Curtain, WINDOW) => {
                visit.player.add_achievement(Achievement::SwordReleased);
                visit.player.remove_item(Item::Curtain);
                Event::narration("You cover the window with the curtain. The room is cloaked in darkness. A high pitch scream echoes in the room and then a clang of metal. You drop the curtain to see the sword is now lying on the floor.")
            }
            (Item::Curtain, STATUE) => Event::narration("The curtain is too small to cover the statue."),
            _ => Event::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sword_hidden_until_statue_studied() {
        let mut player = PlayerState::new();
        let hall = SceneId::AngelHall.event();
        assert_eq!(hall.object_count(&player), 4);

        let studied = hall
            .process_action_on_object(&mut player, Action::Look, STATUE)
            .current;
        assert_eq!(studied.object_count(&player), 5);

        // a fresh visit forgets what was studied
        assert_eq!(SceneId::AngelHall.event().object_count(&player), 4);
    }

    #[test]
    fn test_statue_changes_once_sword_released() {
        let mut player = PlayerState::new();
        player.add_achievement(Achievement::SwordReleased);
        let hall = SceneId::AngelHall.event();

        let next = hall
            .process_action_on_object(&mut player, Action::Look, STATUE)
            .next;
        assert_eq!(next.text(), STATUE_WITHOUT_SWORD);
    }

    #[test]
    fn test_curtain_too_small_for_statue() {
        let mut player = PlayerState::new();
        player.add_item(Item::Curtain);
        let hall = SceneId::AngelHall.event();

        let next = hall
            .process_item_on_object(&mut player, Item::Curtain, STATUE)
            .next;
        assert!(next.text().contains("too small"));
        assert!(player.has_item(Item::Curtain));
    }
}
