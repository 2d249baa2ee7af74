mod layout;
mod menu;
mod table;

use crate::tui::app::{AppState, Scene};
use ratatui::prelude::Frame;

/// Render the current scene, with any open popup on top of the table.
pub fn draw(f: &mut Frame, app: &AppState) {
    match app.scene {
        Scene::Menu => menu::draw_menu(f, app),
        Scene::Table => {
            table::draw_table(f, app);
            if app.help_open() {
                table::draw_help(f);
            } else if app.scores_open() {
                table::draw_scores(f, app);
            }
        }
    }
}
