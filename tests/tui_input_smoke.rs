use crossterm::event::KeyCode;
use oh_hell_rs::game::GameState;
use oh_hell_rs::tui::app::{AppState, InputAction, Scene};
use oh_hell_rs::tui::{controller, ui};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn setup_table_app() -> AppState {
    let mut app = AppState::default();
    app.apply_menu();
    app
}

fn submit_bid(app: &mut AppState) {
    for bid in [0u8, 1] {
        let _ = app.handle_input(InputAction::BidDigit(bid));
        if app.handle_input(InputAction::BidSubmit) {
            return;
        }
        let _ = app.handle_input(InputAction::BidBackspace);
    }
    panic!("neither 0 nor 1 was accepted");
}

#[test]
fn menu_navigation_and_apply() {
    let mut app = AppState::default();
    assert!(matches!(app.scene, Scene::Menu));
    let start = app.menu_index;
    let _ = app.handle_input(InputAction::MenuNext);
    assert_ne!(app.menu_index, start);
    let _ = app.handle_input(InputAction::MenuPrev);
    assert_eq!(app.menu_index, start);
    let _ = app.handle_input(InputAction::MenuApply);
    assert!(matches!(app.scene, Scene::Table));
}

#[test]
fn menu_settings_rebuild_the_match() {
    let mut app = AppState::default();
    let _ = app.handle_input(InputAction::MenuDec);
    assert_eq!(app.cfg_num_players, AppState::DEFAULT_PLAYERS - 1);
    let _ = app.handle_input(InputAction::MenuNext);
    let _ = app.handle_input(InputAction::MenuInc);
    let _ = app.handle_input(InputAction::MenuApply);
    assert_eq!(app.game.players().len(), AppState::DEFAULT_PLAYERS - 1);
    assert_eq!(app.game.total_rounds(), AppState::DEFAULT_ROUNDS + 1);
    assert_eq!(app.game.state(), GameState::Dealing);
}

#[test]
fn rounds_clamp_when_players_grow() {
    let mut app = AppState::default();
    for _ in 0..8 {
        let _ = app.handle_input(InputAction::MenuInc);
    }
    assert_eq!(app.cfg_num_players, AppState::MAX_PLAYERS);
    let _ = app.handle_input(InputAction::MenuNext);
    for _ in 0..20 {
        let _ = app.handle_input(InputAction::MenuInc);
    }
    assert_eq!(app.cfg_rounds, 6);
}

#[test]
fn help_and_scores_toggle() {
    let mut app = setup_table_app();
    let _ = app.handle_input(InputAction::ToggleHelp);
    assert!(app.help_open());
    let _ = app.handle_input(InputAction::ToggleScores);
    assert!(!app.help_open());
    assert!(app.scores_open());
    let _ = app.handle_input(InputAction::ToggleScores);
    assert!(!app.scores_open());
}

#[test]
fn bid_entry_edit() {
    let mut app = setup_table_app();
    assert!(app.handle_input(InputAction::Deal));
    let _ = app.handle_input(InputAction::BidDigit(1));
    let _ = app.handle_input(InputAction::BidDigit(2));
    let _ = app.handle_input(InputAction::BidDigit(3));
    assert_eq!(app.bid_entry_text(), "12");
    let _ = app.handle_input(InputAction::BidBackspace);
    assert_eq!(app.bid_entry_text(), "1");
}

#[test]
fn full_round_through_inputs() {
    let mut app = setup_table_app();
    assert!(app.handle_input(InputAction::Deal));
    while app.game.state() == GameState::Planning {
        submit_bid(&mut app);
    }
    assert_eq!(app.game.state(), GameState::Playing);
    while app.game.state() == GameState::Playing {
        let idx = app.game.legal_card_indices()[0];
        let _ = app.handle_input(InputAction::SelectCard(idx));
        assert!(app.handle_input(InputAction::PlaySelected));
    }
    assert_eq!(app.game.state(), GameState::Dealing);
    assert_eq!(app.game.round_history().len(), 1);
    assert!(app.last_event().is_some());
}

#[test]
fn deal_during_play_reports_an_error() {
    let mut app = setup_table_app();
    let _ = app.handle_input(InputAction::Deal);
    while app.game.state() == GameState::Planning {
        submit_bid(&mut app);
    }
    assert!(!app.handle_input(InputAction::Deal));
    assert!(app.action_error().is_some());
}

#[test]
fn off_suit_card_is_refused_with_a_message() {
    for _ in 0..50 {
        let mut app = setup_table_app();
        let _ = app.handle_input(InputAction::Deal);
        while app.game.state() == GameState::Planning {
            submit_bid(&mut app);
        }
        while app.game.state() == GameState::Playing {
            let hand = app.game.current_hand().to_vec();
            let off = app.game.lead_suit().and_then(|lead| {
                let holds_lead = hand.iter().any(|c| c.suit() == lead);
                hand.iter().position(|c| c.suit() != lead).filter(|_| holds_lead)
            });
            if let Some(off) = off {
                let _ = app.handle_input(InputAction::SelectCard(off));
                assert!(!app.handle_input(InputAction::PlaySelected));
                assert_eq!(app.game.current_hand(), hand.as_slice());
                assert!(app.action_error().is_some_and(|e| e.contains("must follow suit")));
                return;
            }
            let idx = app.game.legal_card_indices()[0];
            let _ = app.handle_input(InputAction::SelectCard(idx));
            assert!(app.handle_input(InputAction::PlaySelected));
        }
    }
    panic!("no deal produced a follow-suit situation");
}

#[test]
fn keys_drive_the_controller() {
    let mut app = AppState::default();
    assert!(!controller::handle_key(&mut app, KeyCode::Enter));
    assert!(matches!(app.scene, Scene::Table));
    assert!(!controller::handle_key(&mut app, KeyCode::Char(' ')));
    assert_eq!(app.game.state(), GameState::Planning);
    assert!(!controller::handle_key(&mut app, KeyCode::Char('?')));
    assert!(app.help_open());
    assert!(!controller::handle_key(&mut app, KeyCode::Esc));
    assert!(!app.help_open());
    assert!(!controller::handle_key(&mut app, KeyCode::Char('m')));
    assert!(matches!(app.scene, Scene::Menu));
    assert!(controller::handle_key(&mut app, KeyCode::Char('q')));
}

#[test]
fn screens_render_without_panicking() {
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
    let mut app = AppState::default();
    terminal.draw(|f| ui::draw(f, &app)).unwrap();
    app.apply_menu();
    let _ = app.handle_input(InputAction::Deal);
    terminal.draw(|f| ui::draw(f, &app)).unwrap();
    let _ = app.handle_input(InputAction::ToggleScores);
    terminal.draw(|f| ui::draw(f, &app)).unwrap();
}
