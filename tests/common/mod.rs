#![allow(dead_code)]

use oh_hell_rs::config::GameConfig;
use oh_hell_rs::game::{Game, GameState};

pub fn mk_game(n: usize, rounds: u32, seed: u64) -> Game {
    let names: Vec<String> = (1..=n).map(|i| format!("P{i}")).collect();
    Game::with_config(names, GameConfig::new().with_rounds(rounds).with_seed(seed)).unwrap()
}

/// Place the lowest bid the hook rule allows for every player.
pub fn bid_everyone(g: &mut Game) {
    while g.state() == GameState::Planning {
        assert!(g.plan(0) || g.plan(1), "one of 0 or 1 is always a legal bid");
    }
}

/// Play the first legal card until the round or match ends.
pub fn play_out_round(g: &mut Game) {
    while g.state() == GameState::Playing {
        let idx = g.legal_card_indices()[0];
        assert!(g.play_card_at(idx));
    }
}

/// Deal, bid and play every remaining round.
pub fn play_match(g: &mut Game) {
    while g.state() != GameState::Finished {
        g.deal_cards().unwrap();
        bid_everyone(g);
        play_out_round(g);
    }
}
