//! oh-hell-rs: rules engine for the Oh Hell trick-taking game
//!
//! Goals:
//! - Deterministic state machine: Dealing → Planning → Playing → Dealing/Finished
//! - Injectable shuffle RNG for reproducible matches
//! - No panics for invalid input; rejected actions leave the game untouched
//!
//! ## Quick start: play one round
//! ```
//! use oh_hell_rs::config::GameConfig;
//! use oh_hell_rs::game::{Game, GameState};
//!
//! let cfg = GameConfig::new().with_rounds(1).with_seed(7);
//! let mut game = Game::with_config(["ann", "bob", "cy"], cfg).unwrap();
//! game.deal_cards().unwrap();
//!
//! assert!(game.plan(0));
//! assert!(game.plan(0));
//! assert!(!game.plan(1), "the last bid may not make the total equal the hand size");
//! assert!(game.plan(0));
//!
//! while game.state() == GameState::Playing {
//!     let idx = game.legal_card_indices()[0];
//!     assert!(game.play_card_at(idx));
//! }
//! assert_eq!(game.state(), GameState::Finished);
//! ```
//!
//! ## TUI
//! Run the hot-seat TUI with:
//! ```sh
//! cargo run --bin oh-hell
//! ```

pub mod cards;
pub mod config;
pub mod deck;
pub mod engine;
pub mod game;
pub mod roster;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
