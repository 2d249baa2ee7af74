use crate::config::GameConfig;
use crate::engine::GameEngine;
use crate::game::{ActionError, Game, GameError, GameState};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Menu,
    Table,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    MenuNext,
    MenuPrev,
    MenuInc,
    MenuDec,
    MenuApply,
    MenuCancel,
    ToggleMenu,
    ToggleHelp,
    ToggleScores,
    Deal,
    BidDigit(u8),
    BidBackspace,
    BidSubmit,
    CursorLeft,
    CursorRight,
    SelectCard(usize),
    PlaySelected,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    pub game: Game,
    // Selected card in the active hand
    pub cursor: usize,
    // Menu config being edited
    pub menu_index: usize,
    pub cfg_num_players: usize,
    pub cfg_rounds: u32,
    help_open: bool,
    scores_open: bool,
    bid_entry: String,
    last_event: Option<String>,
    action_error: Option<String>,
    action_error_at: Option<Instant>,
}

impl Default for AppState {
    fn default() -> Self {
        let cfg_num_players = Self::DEFAULT_PLAYERS;
        let cfg_rounds = Self::DEFAULT_ROUNDS;
        let game = Game::seated(cfg_num_players, cfg_rounds);
        Self {
            scene: Scene::Menu,
            game,
            cursor: 0,
            menu_index: 0,
            cfg_num_players,
            cfg_rounds,
            help_open: false,
            scores_open: false,
            bid_entry: String::new(),
            last_event: None,
            action_error: None,
            action_error_at: None,
        }
    }
}

impl AppState {
    pub const DEFAULT_PLAYERS: usize = 4;
    pub const DEFAULT_ROUNDS: u32 = 7;
    pub const MAX_PLAYERS: usize = 8;
    const ACTION_ERROR_TTL: Duration = Duration::from_secs(3);
    const MAX_BID_DIGITS: usize = 2;

    pub(crate) fn build_game(players: usize, rounds: u32) -> Result<Game, GameError> {
        let names: Vec<String> = (1..=players).map(|i| format!("P{i}")).collect();
        Game::with_config(names, GameConfig::new().with_rounds(rounds))
    }

    /// Read-only view of the match for rendering.
    pub fn engine(&self) -> &dyn GameEngine {
        &self.game
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn scores_open(&self) -> bool {
        self.scores_open
    }

    pub(crate) fn close_popups(&mut self) {
        self.help_open = false;
        self.scores_open = false;
    }

    pub fn bid_entry_text(&self) -> &str {
        &self.bid_entry
    }

    pub fn last_event(&self) -> Option<&str> {
        self.last_event.as_deref()
    }

    pub fn action_error(&self) -> Option<&str> {
        self.action_error.as_deref()
    }

    fn set_action_error(&mut self, msg: impl Into<String>) {
        self.action_error = Some(msg.into());
        self.action_error_at = Some(Instant::now());
    }

    fn clear_action_error(&mut self) {
        self.action_error = None;
        self.action_error_at = None;
    }

    fn report(&mut self, err: ActionError) {
        self.set_action_error(err.to_string());
    }

    fn on_table(&self) -> bool {
        self.scene == Scene::Table
    }

    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleMenu => {
                self.toggle_menu();
                false
            }
            InputAction::ToggleHelp => {
                if self.on_table() {
                    self.scores_open = false;
                    self.help_open = !self.help_open;
                }
                false
            }
            InputAction::ToggleScores => {
                if self.on_table() {
                    self.help_open = false;
                    self.scores_open = !self.scores_open;
                }
                false
            }
            InputAction::MenuNext => {
                if self.scene == Scene::Menu {
                    self.menu_next();
                }
                false
            }
            InputAction::MenuPrev => {
                if self.scene == Scene::Menu {
                    self.menu_prev();
                }
                false
            }
            InputAction::MenuInc => {
                if self.scene == Scene::Menu {
                    self.menu_inc();
                }
                false
            }
            InputAction::MenuDec => {
                if self.scene == Scene::Menu {
                    self.menu_dec();
                }
                false
            }
            InputAction::MenuApply => {
                if self.scene == Scene::Menu {
                    self.apply_menu();
                }
                false
            }
            InputAction::MenuCancel => {
                if self.scene == Scene::Menu {
                    self.cancel_menu();
                }
                false
            }
            InputAction::Deal => self.on_table() && self.deal(),
            InputAction::BidDigit(d) => {
                self.bid_entry_push_digit(d);
                false
            }
            InputAction::BidBackspace => {
                self.bid_entry.pop();
                false
            }
            InputAction::BidSubmit => self.on_table() && self.bid_submit(),
            InputAction::CursorLeft => {
                self.move_cursor(-1);
                false
            }
            InputAction::CursorRight => {
                self.move_cursor(1);
                false
            }
            InputAction::SelectCard(idx) => {
                if idx < self.game.current_hand().len() {
                    self.cursor = idx;
                }
                false
            }
            InputAction::PlaySelected => self.on_table() && self.play_selected(),
        }
    }

    fn deal(&mut self) -> bool {
        let engine: &mut dyn GameEngine = &mut self.game;
        match engine.action_deal() {
            Ok(()) => {
                let msg = format!(
                    "Round {} dealt: {} cards each",
                    engine.round_number(),
                    engine.cards_per_hand()
                );
                self.cursor = 0;
                self.bid_entry.clear();
                self.clear_action_error();
                self.last_event = Some(msg);
                true
            }
            Err(err) => {
                self.report(err);
                false
            }
        }
    }

    fn bid_entry_push_digit(&mut self, digit: u8) {
        if self.game.state() != GameState::Planning || self.bid_entry.len() >= Self::MAX_BID_DIGITS
        {
            return;
        }
        self.bid_entry.push(char::from(b'0' + digit));
    }

    fn bid_submit(&mut self) -> bool {
        let Ok(bid) = self.bid_entry.parse::<u32>() else {
            self.set_action_error("Enter a bid first");
            return false;
        };
        let engine: &mut dyn GameEngine = &mut self.game;
        let seat = engine.current();
        match engine.action_plan(bid) {
            Ok(()) => {
                self.bid_entry.clear();
                self.clear_action_error();
                self.last_event = Some(format!("P{} bids {bid}", seat + 1));
                true
            }
            Err(err) => {
                self.report(err);
                false
            }
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.game.current_hand().len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let cur = self.cursor.min(len - 1) as isize;
        self.cursor = (cur + delta).rem_euclid(len as isize) as usize;
    }

    fn play_selected(&mut self) -> bool {
        let engine: &mut dyn GameEngine = &mut self.game;
        let seat = engine.current();
        match engine.action_play(self.cursor) {
            Ok(outcome) => {
                self.clear_action_error();
                self.cursor = 0;
                self.last_event = Some(match (outcome.trick_winner, outcome.state) {
                    (_, GameState::Finished) => "Match over".to_string(),
                    (Some(_), GameState::Dealing) => "Round over: press Space to deal".to_string(),
                    (Some(w), _) => format!("P{} takes the trick", w + 1),
                    (None, _) => format!("P{} plays {}", seat + 1, outcome.card),
                });
                true
            }
            Err(err) => {
                self.report(err);
                false
            }
        }
    }

    /// Expire stale error messages; called by the controller every tick.
    pub fn on_tick(&mut self) {
        if let Some(at) = self.action_error_at {
            if at.elapsed() >= Self::ACTION_ERROR_TTL {
                self.clear_action_error();
            }
        }
    }
}
