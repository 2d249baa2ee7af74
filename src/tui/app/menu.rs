use crate::config::GameConfig;

use super::AppState;

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    Players,
    Rounds,
}

const MENU_ITEMS: [MenuItem; 2] = [MenuItem::Players, MenuItem::Rounds];

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        match self {
            MenuItem::Players => format!("Players: {}", app.cfg_num_players),
            MenuItem::Rounds => format!(
                "Rounds: {} (max {})",
                app.cfg_rounds,
                GameConfig::max_rounds(app.cfg_num_players)
            ),
        }
    }

    fn inc(self, app: &mut AppState) {
        match self {
            MenuItem::Players => {
                if app.cfg_num_players < AppState::MAX_PLAYERS {
                    app.cfg_num_players += 1;
                    app.clamp_cfg_rounds();
                }
            }
            MenuItem::Rounds => {
                if app.cfg_rounds < GameConfig::max_rounds(app.cfg_num_players) {
                    app.cfg_rounds += 1;
                }
            }
        }
    }

    fn dec(self, app: &mut AppState) {
        match self {
            MenuItem::Players => {
                if app.cfg_num_players > 2 {
                    app.cfg_num_players -= 1;
                }
            }
            MenuItem::Rounds => {
                if app.cfg_rounds > 1 {
                    app.cfg_rounds -= 1;
                }
            }
        }
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    pub fn toggle_menu(&mut self) {
        self.close_popups();
        self.scene = match self.scene {
            super::Scene::Menu => super::Scene::Table,
            _ => {
                self.open_menu();
                super::Scene::Menu
            }
        };
    }

    // --- Menu operations ---
    pub fn open_menu(&mut self) {
        self.close_popups();
        self.menu_index = 0;
        self.cfg_num_players = self.game.players().len();
        self.cfg_rounds = self.game.total_rounds();
        self.scene = super::Scene::Menu;
    }

    pub(crate) fn clamp_cfg_rounds(&mut self) {
        let max = GameConfig::max_rounds(self.cfg_num_players);
        self.cfg_rounds = self.cfg_rounds.clamp(1, max.max(1));
    }

    /// Start a fresh match with the edited settings.
    pub fn apply_menu(&mut self) {
        self.cfg_num_players = self.cfg_num_players.clamp(2, Self::MAX_PLAYERS);
        self.clamp_cfg_rounds();
        match Self::build_game(self.cfg_num_players, self.cfg_rounds) {
            Ok(game) => {
                self.game = game;
                self.cursor = 0;
                self.scene = super::Scene::Table;
            }
            Err(err) => {
                tracing::warn!(%err, "menu settings rejected");
            }
        }
    }

    pub fn cancel_menu(&mut self) {
        self.scene = super::Scene::Table;
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
    }
    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }
    pub fn menu_inc(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.inc(self);
    }
    pub fn menu_dec(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.dec(self);
    }
}
