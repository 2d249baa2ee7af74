// Game engine API boundary. This trait exposes the three player actions and
// the read-only queries a front end needs to render the table, so UIs can
// drive a match without reaching into `Game` internals. It is implemented for
// the core `Game` type.

use crate::cards::{Card, Suit};
use crate::game::{ActionError, CompletedTrick, GameState, PlayOutcome, PlayedCard, RoundSummary};
use crate::roster::Player;
use rand::Rng;

pub trait GameEngine {
    // Actions
    fn action_deal(&mut self) -> Result<(), ActionError>;
    fn action_plan(&mut self, estimated_wins: u32) -> Result<(), ActionError>;
    fn action_play(&mut self, index: usize) -> Result<PlayOutcome, ActionError>;

    // Queries
    fn state(&self) -> GameState;
    fn current(&self) -> usize;
    fn dealer(&self) -> usize;
    fn num_players(&self) -> usize;
    fn player(&self, seat: usize) -> Option<&Player>;
    fn current_hand(&self) -> &[Card];
    fn legal_card_indices(&self) -> Vec<usize>;
    fn played_cards(&self) -> &[PlayedCard];
    fn last_trick(&self) -> Option<&CompletedTrick>;
    fn round_history(&self) -> &[RoundSummary];
    fn round_number(&self) -> u32;
    fn total_rounds(&self) -> u32;
    fn rounds_left(&self) -> u32;
    fn cards_per_hand(&self) -> u32;
    fn total_estimated_wins(&self) -> u32;
    fn estimated_wins_count(&self) -> usize;
    fn lead_suit(&self) -> Option<Suit>;
    fn winners(&self) -> Vec<usize>;
}

impl<R: Rng> GameEngine for crate::game::Game<R> {
    fn action_deal(&mut self) -> Result<(), ActionError> {
        self.deal_cards()
    }
    fn action_plan(&mut self, estimated_wins: u32) -> Result<(), ActionError> {
        self.try_plan(estimated_wins)
    }
    fn action_play(&mut self, index: usize) -> Result<PlayOutcome, ActionError> {
        self.try_play_card_at(index)
    }

    fn state(&self) -> GameState {
        self.state
    }
    fn current(&self) -> usize {
        self.roster.active()
    }
    fn dealer(&self) -> usize {
        self.roster.dealer()
    }
    fn num_players(&self) -> usize {
        self.roster.len()
    }
    fn player(&self, seat: usize) -> Option<&Player> {
        self.roster.at(seat)
    }
    fn current_hand(&self) -> &[Card] {
        self.roster.current().hand()
    }
    fn legal_card_indices(&self) -> Vec<usize> {
        self.legal_card_indices()
    }
    fn played_cards(&self) -> &[PlayedCard] {
        &self.played_cards
    }
    fn last_trick(&self) -> Option<&CompletedTrick> {
        self.last_trick()
    }
    fn round_history(&self) -> &[RoundSummary] {
        self.round_history()
    }
    fn round_number(&self) -> u32 {
        self.round_number()
    }
    fn total_rounds(&self) -> u32 {
        self.total_rounds
    }
    fn rounds_left(&self) -> u32 {
        self.rounds_left
    }
    fn cards_per_hand(&self) -> u32 {
        self.cards_per_hand
    }
    fn total_estimated_wins(&self) -> u32 {
        self.total_estimated_wins
    }
    fn estimated_wins_count(&self) -> usize {
        self.estimated_wins_count
    }
    fn lead_suit(&self) -> Option<Suit> {
        self.lead_suit()
    }
    fn winners(&self) -> Vec<usize> {
        self.winners()
    }
}
