//! Game Presenter - walks the player through the menus and feeds the results
//! into the event history and the screen.
//!
//! Menu flow:
//!
//! ```text
//! Action ──Look/Take/Use──> Object ──select──> resolve, push result
//!    │
//!    └──Item──> Item ──select──> ObjectForItem ──select──> resolve, push result
//!
//! Continue ──select or cancel──> back one step, or push the follow-up event
//! ```
//!
//! Cancelling any sub-menu returns to the action menu without touching history.

use tower_rules::{Action, Item, PlayerState};
use tracing::{debug, info};

use crate::buffer::MenuLabels;
use crate::config::{ConfigError, EngineConfig};
use crate::display::Display;
use crate::events::{Event, Resolution};
use crate::history::{EventHistory, HISTORY_DEPTH};
use crate::input::Buttons;
use crate::menu::MenuSignal;
use crate::screen::GameScreen;
use crate::story::{self, EMPTY_INVENTORY};

pub const CONTINUE_LABEL: &str = "Continue";
pub const ACTION_TITLE: &str = "Select action";
pub const OBJECT_TITLE: &str = "Which object?";
pub const ITEM_TITLE: &str = "Use what?";
pub const OBJECT_FOR_ITEM_TITLE: &str = "On what?";

/// Which menu is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuMode {
    /// Look, Take, Use, Item.
    Action,
    /// A single "Continue" for events without actions.
    Continue,
    /// Objects for the chosen action.
    Object,
    /// Items carried.
    Item,
    /// Objects to use the chosen item on.
    ObjectForItem,
}

type SelectionHandler = fn(&mut GamePresenter, usize);
type CancelHandler = fn(&mut GamePresenter);

pub struct GamePresenter {
    player: PlayerState,
    history: EventHistory<HISTORY_DEPTH>,
    screen: GameScreen,
    menu_labels: MenuLabels,
    mode: MenuMode,
    selected_action: Action,
    selected_item: Option<Item>,
    on_selection: Option<SelectionHandler>,
    on_cancel: Option<CancelHandler>,
}

impl GamePresenter {
    /// Create a presenter with a new game already loaded.
    ///
    /// Fails if the configured screen cannot hold any text.
    pub fn new(config: &EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut presenter = Self {
            player: PlayerState::new(),
            history: EventHistory::new(),
            screen: GameScreen::new(config.screen, config.timing),
            menu_labels: MenuLabels::new(),
            mode: MenuMode::Continue,
            selected_action: Action::default(),
            selected_item: None,
            on_selection: None,
            on_cancel: None,
        };
        presenter.new_game();
        Ok(presenter)
    }

    /// Forget the player's progress and show the intro.
    pub fn new_game(&mut self) {
        info!("starting new game");
        self.player.clear();
        self.screen.set_scroll_position(0);
        self.history.reset(story::first_event());
        self.switch_to_event();
    }

    /// Apply one frame of input.
    pub fn update<B: Buttons + ?Sized>(&mut self, input: &B) {
        if let Some(signal) = self.screen.update(input) {
            self.dispatch(signal);
        }
    }

    pub fn render<D: Display + ?Sized>(&mut self, display: &mut D) {
        self.screen.render(display);
    }

    /// Update, then render.
    pub fn frame<B, D>(&mut self, input: &B, display: &mut D)
    where
        B: Buttons + ?Sized,
        D: Display + ?Sized,
    {
        self.update(input);
        self.render(display);
    }

    /// Deliver a menu signal to the handler registered for the current menu.
    ///
    /// Signals without a registered handler are ignored.
    pub fn dispatch(&mut self, signal: MenuSignal) {
        match signal {
            MenuSignal::Selected(index) => {
                if let Some(handler) = self.on_selection {
                    handler(self, index);
                }
            }
            MenuSignal::Cancelled => {
                if let Some(handler) = self.on_cancel {
                    handler(self);
                }
            }
        }
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn current_event(&self) -> &Event {
        self.history.current()
    }

    pub fn history_depth(&self) -> usize {
        self.history.depth()
    }

    pub fn mode(&self) -> MenuMode {
        self.mode
    }

    pub fn screen(&self) -> &GameScreen {
        &self.screen
    }

    pub fn menu_labels(&self) -> &MenuLabels {
        &self.menu_labels
    }

    pub fn selected_action(&self) -> Action {
        self.selected_action
    }

    pub fn selected_item(&self) -> Option<Item> {
        self.selected_item
    }

    fn set_mode(&mut self, mode: MenuMode, title: Option<&'static str>) {
        if self.mode != mode {
            debug!(from = ?self.mode, to = ?mode, "menu mode");
        }
        self.mode = mode;
        self.screen.load_menu(title, &self.menu_labels);
    }

    fn switch_to_event(&mut self) {
        let event = *self.history.current();
        self.screen.load_event(&event, &self.player);
        self.switch_to_action_menu();
        self.screen.set_scroll_position(self.history.saved_scroll());
    }

    fn switch_to_action_menu(&mut self) {
        self.menu_labels.clear();

        if self.current_event().actions_are_allowed() {
            self.menu_labels
                .extend(Action::STANDARD.iter().map(|action| action.label()));
            self.on_selection = Some(Self::handle_action_selection);
            self.on_cancel = None;
            self.set_mode(MenuMode::Action, Some(ACTION_TITLE));
        } else {
            self.menu_labels.push(CONTINUE_LABEL);
            self.on_selection = Some(Self::handle_continue_selection);
            self.on_cancel = Some(Self::handle_continue);
            self.set_mode(MenuMode::Continue, None);
        }
    }

    fn switch_to_object_menu(&mut self) {
        let event = *self.history.current();
        event.load_object_menu(&self.player, &mut self.menu_labels);
        self.on_selection = Some(Self::handle_object_selection);
        self.on_cancel = Some(Self::handle_sub_menu_cancel);
        self.set_mode(MenuMode::Object, Some(OBJECT_TITLE));
    }

    fn switch_to_item_menu(&mut self) {
        self.menu_labels.clear();
        self.menu_labels
            .extend(self.player.carried_items().map(Item::name));

        if self.menu_labels.is_empty() {
            self.load_new_event(Event::narration(EMPTY_INVENTORY));
            self.switch_to_event();
            return;
        }

        self.on_selection = Some(Self::handle_item_selection);
        self.on_cancel = Some(Self::handle_sub_menu_cancel);
        self.set_mode(MenuMode::Item, Some(ITEM_TITLE));
    }

    fn switch_to_object_for_item_menu(&mut self) {
        let event = *self.history.current();
        event.load_object_menu(&self.player, &mut self.menu_labels);
        self.on_selection = Some(Self::handle_object_for_item_selection);
        self.on_cancel = Some(Self::handle_sub_menu_cancel);
        self.set_mode(MenuMode::ObjectForItem, Some(OBJECT_FOR_ITEM_TITLE));
    }

    fn load_new_event(&mut self, event: Event) {
        let from = self.current_event().scene();
        self.history.advance(event, self.screen.scroll_position());
        debug!(
            ?from,
            to = ?event.scene(),
            depth = self.history.depth(),
            "advance"
        );
    }

    fn load_previous_event(&mut self) {
        self.history.go_back();
        debug!(
            to = ?self.current_event().scene(),
            depth = self.history.depth(),
            "back"
        );
    }

    /// Store the revised current event, then move on to the next one.
    fn apply(&mut self, resolution: Resolution) {
        self.history.revise_current(resolution.current);
        self.load_new_event(resolution.next);
        self.switch_to_event();
    }

    fn handle_action_selection(&mut self, index: usize) {
        match Action::from_index(index) {
            Some(Action::Item) => self.switch_to_item_menu(),
            Some(action) => {
                self.selected_action = action;
                self.switch_to_object_menu();
            }
            None => {}
        }
    }

    fn handle_object_selection(&mut self, index: usize) {
        let event = *self.history.current();
        let resolution = event.process_action_on_object(&mut self.player, self.selected_action, index);
        self.apply(resolution);
    }

    fn handle_item_selection(&mut self, index: usize) {
        self.selected_item = self.player.item_by_index(index);
        self.switch_to_object_for_item_menu();
    }

    fn handle_object_for_item_selection(&mut self, index: usize) {
        let event = *self.history.current();
        let resolution = match self.selected_item {
            Some(item) => event.process_item_on_object(&mut self.player, item, index),
            None => Resolution {
                current: event,
                next: Event::default(),
            },
        };
        self.apply(resolution);
    }

    fn handle_continue(&mut self) {
        let event = *self.history.current();
        if event.should_return_to_previous_event() {
            self.load_previous_event();
        } else {
            let next = event.continue_event(&mut self.player);
            self.load_new_event(next);
        }
        self.switch_to_event();
    }

    fn handle_continue_selection(&mut self, _index: usize) {
        self.handle_continue();
    }

    fn handle_sub_menu_cancel(&mut self) {
        self.switch_to_action_menu();
    }
}
