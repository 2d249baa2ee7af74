use crate::cards::{Card, Suit, DECK_SIZE};
use crate::config::{ConfigError, GameConfig};
use crate::deck::Deck;
use crate::roster::{Player, Roster};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;
use tracing::{debug, info};

/// Phase of the match. Each action is only valid in one phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameState {
    Dealing,
    Planning,
    Playing,
    Finished,
}

impl GameState {
    pub fn label(self) -> &'static str {
        match self {
            GameState::Dealing => "Dealing",
            GameState::Planning => "Bidding",
            GameState::Playing => "Playing",
            GameState::Finished => "Finished",
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("at least two players are required, got {0}")]
    NotEnoughPlayers(usize),
    #[error("duplicate player name: '{0}'")]
    DuplicatePlayer(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActionError {
    #[error("action not allowed while {}", .0.label())]
    WrongState(GameState),
    #[error("bid too high: max {max}, got {got}")]
    BidTooHigh { max: u32, got: u32 },
    #[error("last bid may not bring the total to {cards_per_hand}")]
    HookRule { cards_per_hand: u32 },
    #[error("no card at index {index} (hand holds {len})")]
    CardIndexOutOfRange { index: usize, len: usize },
    #[error("must follow suit {lead}")]
    MustFollowSuit { lead: Suit },
}

/// One card on the table in the current trick.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct PlayedCard {
    pub seat: usize,
    pub player: String,
    pub card: Card,
}

/// A resolved trick.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct CompletedTrick {
    pub plays: Vec<PlayedCard>,
    /// Seat of the player who took the trick.
    pub winner: usize,
}

/// What happened as a result of an accepted card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct PlayOutcome {
    pub card: Card,
    /// Set when this card completed the trick.
    pub trick_winner: Option<usize>,
    /// Set when this card completed the round.
    pub round_finished: bool,
    /// Phase after the play.
    pub state: GameState,
}

/// Per-round results, in seat order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct RoundSummary {
    pub round: u32,
    pub cards_per_hand: u32,
    pub dealer: usize,
    pub bids: Vec<u32>,
    pub wins: Vec<u32>,
    pub awards: Vec<u32>,
}

/// Value a card scores in a trick led with `lead`. Off-suit cards score 0.
pub fn comparison_value(card: Card, lead: Suit) -> u8 {
    if card.suit() == lead {
        card.value()
    } else {
        0
    }
}

/// Index of the winning card in a trick, given cards in play order.
///
/// The first card sets the lead suit. The highest lead-suit card wins and the
/// earliest play wins any tie.
///
/// ```
/// use oh_hell_rs::cards::parse_cards;
/// use oh_hell_rs::game::trick_winner;
///
/// let trick = parse_cards("5s Ah Ks").unwrap();
/// assert_eq!(trick_winner(&trick), Some(2));
/// ```
pub fn trick_winner(cards: &[Card]) -> Option<usize> {
    let lead = cards.first()?.suit();
    let mut best = 0;
    let mut best_value = 0;
    for (i, &card) in cards.iter().enumerate() {
        let v = comparison_value(card, lead);
        if v > best_value {
            best = i;
            best_value = v;
        }
    }
    Some(best)
}

fn rejected(err: ActionError) -> ActionError {
    debug!(%err, "action rejected");
    err
}

/// A match of Oh Hell. `R` is the shuffle RNG.
#[derive(Debug)]
#[non_exhaustive]
pub struct Game<R = ChaCha8Rng> {
    pub(crate) roster: Roster,
    pub(crate) state: GameState,
    pub(crate) deck: Deck,
    rng: R,
    pub(crate) total_rounds: u32,
    pub(crate) rounds_left: u32,
    pub(crate) cards_per_hand: u32,
    pub(crate) total_estimated_wins: u32,
    pub(crate) estimated_wins_count: usize,
    pub(crate) played_cards: Vec<PlayedCard>,
    started: bool,
    last_trick: Option<CompletedTrick>,
    round_history: Vec<RoundSummary>,
}

impl Game<ChaCha8Rng> {
    /// Start a match with default configuration.
    ///
    /// ```
    /// use oh_hell_rs::game::{Game, GameError, GameState};
    ///
    /// let game = Game::new(["ann", "bob", "cy"]).unwrap();
    /// assert_eq!(game.state(), GameState::Dealing);
    /// assert_eq!(game.cards_per_hand(), 17);
    /// assert!(matches!(Game::new(["solo"]), Err(GameError::NotEnoughPlayers(1))));
    /// ```
    pub fn new<I, S>(names: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_config(names, GameConfig::default())
    }

    pub fn with_config<I, S>(names: I, config: GameConfig) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        Self::with_rng(names, config, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Hot-seat table of `P1..Pn`, clamping the seat count and rounds into
    /// what the deck supports instead of failing.
    pub fn seated(players: usize, rounds: u32) -> Self {
        let players = players.clamp(2, DECK_SIZE);
        let rounds = rounds.clamp(1, GameConfig::max_rounds(players));
        let names = (1..=players).map(|i| format!("P{i}")).collect();
        Self::assemble(names, rounds, ChaCha8Rng::seed_from_u64(rand::rng().random()))
    }
}

impl<R: Rng> Game<R> {
    /// Start a match shuffling with a caller-supplied RNG.
    pub fn with_rng<I, S>(names: I, config: GameConfig, rng: R) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.len() < 2 {
            return Err(GameError::NotEnoughPlayers(names.len()));
        }
        let mut seen = HashSet::new();
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(GameError::DuplicatePlayer(name.clone()));
            }
        }
        let rounds = config.resolve_rounds(names.len())?;
        Ok(Self::assemble(names, rounds, rng))
    }

    fn assemble(names: Vec<String>, rounds: u32, rng: R) -> Self {
        debug!(players = names.len(), rounds, "new game");
        Self {
            roster: Roster::new(names),
            state: GameState::Dealing,
            deck: Deck::standard(),
            rng,
            total_rounds: rounds,
            rounds_left: rounds,
            cards_per_hand: rounds,
            total_estimated_wins: 0,
            estimated_wins_count: 0,
            played_cards: Vec::new(),
            started: false,
            last_trick: None,
            round_history: Vec::new(),
        }
    }

    /// Shuffle and deal the next round, then open bidding at the dealer.
    ///
    /// The opening round keeps the initial hand size; every later round is
    /// one card smaller.
    pub fn deal_cards(&mut self) -> Result<(), ActionError> {
        match self.state {
            GameState::Dealing => {}
            GameState::Planning | GameState::Playing | GameState::Finished => {
                return Err(rejected(ActionError::WrongState(self.state)));
            }
        }
        if self.started {
            self.rounds_left = self.rounds_left.saturating_sub(1).max(1);
            self.cards_per_hand = self.rounds_left;
        } else {
            self.started = true;
        }
        self.deck.shuffle_with(&mut self.rng);
        let hands = self.deck.deal(self.cards_per_hand as usize, self.roster.len());
        self.roster.set_hands(hands);

        self.total_estimated_wins = 0;
        self.estimated_wins_count = 0;
        self.roster.set_active_to_dealer();
        self.played_cards.clear();
        self.last_trick = None;
        self.state = GameState::Planning;
        debug!(
            round = self.round_number(),
            cards_per_hand = self.cards_per_hand,
            dealer = self.roster.dealer(),
            "cards dealt"
        );
        Ok(())
    }

    /// Record the active player's bid; `false` means retry with another bid.
    pub fn plan(&mut self, estimated_wins: u32) -> bool {
        self.try_plan(estimated_wins).is_ok()
    }

    /// Record the active player's bid, or say why it was refused.
    ///
    /// The last bidder may not make the bids add up to the hand size.
    pub fn try_plan(&mut self, estimated_wins: u32) -> Result<(), ActionError> {
        match self.state {
            GameState::Planning => {}
            GameState::Dealing | GameState::Playing | GameState::Finished => {
                return Err(rejected(ActionError::WrongState(self.state)));
            }
        }
        if estimated_wins > self.cards_per_hand {
            return Err(rejected(ActionError::BidTooHigh {
                max: self.cards_per_hand,
                got: estimated_wins,
            }));
        }
        let last_bidder = self.estimated_wins_count + 1 == self.roster.len();
        if last_bidder && self.total_estimated_wins + estimated_wins == self.cards_per_hand {
            return Err(rejected(ActionError::HookRule { cards_per_hand: self.cards_per_hand }));
        }

        let seat = self.roster.active();
        self.roster.current_mut().estimated_wins = estimated_wins;
        self.total_estimated_wins += estimated_wins;
        self.estimated_wins_count += 1;
        self.roster.next();
        debug!(seat, estimated_wins, total = self.total_estimated_wins, "bid placed");

        if last_bidder {
            self.state = GameState::Playing;
        }
        Ok(())
    }

    /// Play the card at `index` of the active hand; `false` means illegal.
    pub fn play_card_at(&mut self, index: usize) -> bool {
        self.try_play_card_at(index).is_ok()
    }

    /// Play the card at `index` of the active hand, resolving the trick and
    /// round when this card completes them.
    pub fn try_play_card_at(&mut self, index: usize) -> Result<PlayOutcome, ActionError> {
        match self.state {
            GameState::Playing => {}
            GameState::Dealing | GameState::Planning | GameState::Finished => {
                return Err(rejected(ActionError::WrongState(self.state)));
            }
        }
        let hand = self.roster.current().hand();
        if index >= hand.len() {
            return Err(rejected(ActionError::CardIndexOutOfRange { index, len: hand.len() }));
        }
        if let Some(lead) = self.lead_suit() {
            if hand[index].suit() != lead && hand.iter().any(|c| c.suit() == lead) {
                return Err(rejected(ActionError::MustFollowSuit { lead }));
            }
        }

        let seat = self.roster.active();
        let player = self.roster.current_mut();
        let card = player.hand.remove(index);
        let name = player.name.clone();
        debug!(seat, %card, "card played");
        self.played_cards.push(PlayedCard { seat, player: name, card });
        self.roster.next();

        let mut outcome =
            PlayOutcome { card, trick_winner: None, round_finished: false, state: self.state };
        if self.played_cards.len() == self.roster.len() {
            outcome.trick_winner = Some(self.finish_trick());
            if self.roster.current().has_empty_hand() {
                self.finish_round();
                outcome.round_finished = true;
            }
        }
        outcome.state = self.state;
        Ok(outcome)
    }

    fn finish_trick(&mut self) -> usize {
        let plays = std::mem::take(&mut self.played_cards);
        let cards: Vec<Card> = plays.iter().map(|p| p.card).collect();
        let best = trick_winner(&cards).unwrap_or(0);
        let winner = plays[best].seat;
        self.roster.record_win(&plays[best].player);
        debug!(winner, card = %plays[best].card, "trick taken");
        self.last_trick = Some(CompletedTrick { plays, winner });
        winner
    }

    fn finish_round(&mut self) {
        let bids: Vec<u32> = self.roster.players().iter().map(Player::estimated_wins).collect();
        let wins: Vec<u32> = self.roster.players().iter().map(Player::wins).collect();
        let dealer = self.roster.dealer();
        let awards = self.roster.finish_round();
        let round = self.round_number();
        info!(round, ?bids, ?wins, ?awards, "round scored");
        self.round_history.push(RoundSummary {
            round,
            cards_per_hand: self.cards_per_hand,
            dealer,
            bids,
            wins,
            awards,
        });
        self.state = if self.rounds_left == 1 { GameState::Finished } else { GameState::Dealing };
        if self.state == GameState::Finished {
            info!(winners = ?self.winners(), "match finished");
        }
    }
}

impl<R> Game<R> {
    /// Returns the current phase
    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state == GameState::Finished
    }

    /// Returns all players in seat order
    pub fn players(&self) -> &[Player] {
        self.roster.players()
    }

    /// Returns the player whose turn it is
    pub fn current_player(&self) -> &Player {
        self.roster.current()
    }

    /// Returns the active player's hand
    pub fn current_hand(&self) -> &[Card] {
        self.roster.current().hand()
    }

    /// Returns the seat index whose turn it is
    pub fn active(&self) -> usize {
        self.roster.active()
    }

    /// Returns the dealer seat index
    pub fn dealer(&self) -> usize {
        self.roster.dealer()
    }

    /// Returns the cards on the table in the current trick
    pub fn played_cards(&self) -> &[PlayedCard] {
        &self.played_cards
    }

    /// Returns the most recently completed trick in this round
    pub fn last_trick(&self) -> Option<&CompletedTrick> {
        self.last_trick.as_ref()
    }

    /// Returns scoring results for every completed round
    pub fn round_history(&self) -> &[RoundSummary] {
        &self.round_history
    }

    pub fn rounds_left(&self) -> u32 {
        self.rounds_left
    }

    pub fn total_rounds(&self) -> u32 {
        self.total_rounds
    }

    pub fn cards_per_hand(&self) -> u32 {
        self.cards_per_hand
    }

    pub fn total_estimated_wins(&self) -> u32 {
        self.total_estimated_wins
    }

    pub fn estimated_wins_count(&self) -> usize {
        self.estimated_wins_count
    }

    /// 1-based number of the round in progress, 0 before the first deal.
    pub fn round_number(&self) -> u32 {
        if !self.started {
            return 0;
        }
        self.total_rounds - self.rounds_left + 1
    }

    /// Cumulative score of each player, in seat order.
    pub fn points(&self) -> Vec<u32> {
        self.roster.players().iter().map(Player::points).collect()
    }

    /// Suit of the first card in the current trick.
    pub fn lead_suit(&self) -> Option<Suit> {
        self.played_cards.first().map(|p| p.card.suit())
    }

    /// Indices of the active hand that may be played right now.
    pub fn legal_card_indices(&self) -> Vec<usize> {
        if self.state != GameState::Playing {
            return Vec::new();
        }
        let hand = self.roster.current().hand();
        match self.lead_suit() {
            Some(lead) if hand.iter().any(|c| c.suit() == lead) => hand
                .iter()
                .enumerate()
                .filter(|(_, c)| c.suit() == lead)
                .map(|(i, _)| i)
                .collect(),
            _ => (0..hand.len()).collect(),
        }
    }

    /// Seats holding the top score once the match is over.
    pub fn winners(&self) -> Vec<usize> {
        if self.state != GameState::Finished {
            return Vec::new();
        }
        let points = self.points();
        let top = points.iter().copied().max().unwrap_or(0);
        points.iter().enumerate().filter(|&(_, &p)| p == top).map(|(i, _)| i).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn mk_game(n: usize, rounds: u32) -> Game {
        let names: Vec<String> = (1..=n).map(|i| format!("P{i}")).collect();
        Game::with_config(names, GameConfig::new().with_rounds(rounds).with_seed(11)).unwrap()
    }

    fn hand(s: &str) -> Vec<Card> {
        parse_cards(s).unwrap()
    }

    /// Deal, bid without tripping the hook rule, then replace the hands.
    fn playing_with_hands(hands: &[&str]) -> Game {
        let cards = hands[0].split_whitespace().count() as u32;
        let mut g = mk_game(hands.len(), cards);
        g.deal_cards().unwrap();
        for _ in 0..hands.len() {
            assert!(g.plan(0) || g.plan(1));
        }
        assert_eq!(g.state, GameState::Playing);
        g.roster.set_hands(hands.iter().map(|h| hand(h)).collect());
        g
    }

    #[test]
    fn off_suit_ace_cannot_win() {
        let mut g = playing_with_hands(&["5s 2d", "Ah 3d", "Ks 4d"]);
        assert!(g.play_card_at(0));
        assert!(g.play_card_at(0), "P2 has no spades so any card is legal");
        let outcome = g.try_play_card_at(0).unwrap();
        assert_eq!(outcome.trick_winner, Some(2));
        assert_eq!(g.active(), 2);
        assert_eq!(g.players()[2].wins(), 1);
        assert!(g.played_cards().is_empty());
        assert_eq!(g.last_trick().map(|t| t.winner), Some(2));
    }

    #[test]
    fn must_follow_suit_when_able() {
        let mut g = playing_with_hands(&["5s 2d", "Ah 3s", "Ks 4d"]);
        assert!(g.play_card_at(0));
        let before = g.current_hand().to_vec();
        assert_eq!(
            g.try_play_card_at(0),
            Err(ActionError::MustFollowSuit { lead: Suit::Spades })
        );
        assert_eq!(g.current_hand(), before.as_slice());
        assert_eq!(g.legal_card_indices(), vec![1]);
        assert!(g.play_card_at(1));
    }

    #[test]
    fn removing_a_card_keeps_hand_order() {
        let mut g = playing_with_hands(&["5s 2d 9c", "Ah 3s 8c", "Ks 4d 7c"]);
        assert!(g.play_card_at(1));
        assert_eq!(g.players()[0].hand(), hand("5s 9c").as_slice());
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let mut g = playing_with_hands(&["5s", "Ah", "Ks"]);
        assert_eq!(
            g.try_play_card_at(3),
            Err(ActionError::CardIndexOutOfRange { index: 3, len: 1 })
        );
        assert_eq!(g.played_cards().len(), 0);
    }

    #[test]
    fn last_trick_finishes_round_and_scores() {
        let mut g = mk_game(2, 1);
        g.deal_cards().unwrap();
        assert!(g.plan(1));
        assert!(!g.plan(0), "hook rule: 1 + 0 == 1");
        assert!(g.plan(1));
        g.roster.set_hands(vec![hand("Qh"), hand("Kh")]);
        assert!(g.play_card_at(0));
        let outcome = g.try_play_card_at(0).unwrap();
        assert!(outcome.round_finished);
        assert_eq!(outcome.state, GameState::Finished);
        assert_eq!(g.points(), vec![0, 11]);
        assert_eq!(g.winners(), vec![1]);
        let summary = &g.round_history()[0];
        assert_eq!(summary.bids, vec![1, 1]);
        assert_eq!(summary.wins, vec![0, 1]);
        assert_eq!(summary.awards, vec![0, 11]);
    }

    #[test]
    fn actions_outside_their_phase_are_rejected() {
        let mut g = mk_game(3, 2);
        assert_eq!(g.try_plan(0), Err(ActionError::WrongState(GameState::Dealing)));
        assert!(!g.play_card_at(0));
        g.deal_cards().unwrap();
        assert_eq!(g.deal_cards(), Err(ActionError::WrongState(GameState::Planning)));
        assert!(!g.play_card_at(0));
    }

    #[test]
    fn trick_winner_keeps_first_of_equal_values() {
        let cards = hand("9c 2h 3d");
        assert_eq!(trick_winner(&cards), Some(0));
        assert_eq!(trick_winner(&[]), None);
        assert_eq!(comparison_value(cards[1], Suit::Clubs), 0);
    }

    #[test]
    fn duplicate_names_are_rejected() {
        assert_eq!(
            Game::new(["a", "b", "a"]).map(|_| ()),
            Err(GameError::DuplicatePlayer("a".into()))
        );
    }

    #[test]
    fn seated_clamps_into_the_deck() {
        let g = Game::seated(4, 7);
        assert_eq!(g.players().len(), 4);
        assert_eq!(g.total_rounds(), 7);
        assert_eq!(g.players()[3].name(), "P4");

        let g = Game::seated(1, 0);
        assert_eq!(g.players().len(), 2);
        assert_eq!(g.total_rounds(), 1);

        let g = Game::seated(80, 9);
        assert_eq!(g.players().len(), 52);
        assert_eq!(g.total_rounds(), 1);
    }
}
