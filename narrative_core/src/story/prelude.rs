//! Beats that frame a playthrough: the intro, dying, waking up again and winning.

use tower_rules::PlayerState;

use crate::events::{Event, Scene};

use super::SceneId;

pub const EMPTY_INVENTORY: &str = "You are carrying no useful items!";

/// Inert text that returns to where the player was.
pub struct Narration;

impl Scene for Narration {}

pub struct Intro;

impl Scene for Intro {
    fn text(&self) -> &'static str {
        "Stairs lead up to the first floor of the abandoned tower. A tower flowing with what Angels fear; the dark. You ascend hoping to find a way to break the curse of undeath that has come upon you. The tower's doors close behind you. You are trapped!"
    }

    fn returns_to_previous(&self) -> bool {
        false
    }

    fn continue_event(&self, _event: &Event, player: &mut PlayerState) -> Event {
        player.clear();
        SceneId::EntranceHall.event()
    }
}

pub struct Death;

impl Scene for Death {
    fn text(&self) -> &'static str {
        ""
    }

    fn returns_to_previous(&self) -> bool {
        false
    }

    /// Everything carried and achieved is lost.
    fn continue_event(&self, _event: &Event, player: &mut PlayerState) -> Event {
        player.clear();
        SceneId::Resurrection.event()
    }
}

pub struct Resurrection;

impl Scene for Resurrection {
    fn text(&self) -> &'static str {
        "You wake up in the entrance hall of the tower. Not sure of what has happened, you find you have lost your items!"
    }

    fn returns_to_previous(&self) -> bool {
        false
    }

    fn continue_event(&self, _event: &Event, _player: &mut PlayerState) -> Event {
        SceneId::EntranceHall.event()
    }
}

pub struct Victory;

impl Scene for Victory {
    fn text(&self) -> &'static str {
        "You leave the tower feeling reborn. The ordeal of the tower may well live with you forever, but now no longer bearing the curse of undeath you can explore and enjoy everything the world has to offer."
    }

    fn returns_to_previous(&self) -> bool {
        false
    }

    fn continue_event(&self, _event: &Event, _player: &mut PlayerState) -> Event {
        SceneId::ReturnToTitle.event()
    }
}

pub struct ReturnToTitle;

impl Scene for ReturnToTitle {
    fn text(&self) -> &'static str {
        "Well Done! You have won! If you would like to play again, then please continue."
    }

    fn returns_to_previous(&self) -> bool {
        false
    }

    fn continue_event(&self, _event: &Event, _player: &mut PlayerState) -> Event {
        super::first_event()
    }
}
