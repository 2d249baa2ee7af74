use crate::cards::{Card, DECK_SIZE};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A standard 52-card deck, kept in identifier order until shuffled.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use oh_hell_rs::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// assert_eq!(deck.as_slice()[0].id(), 0);
    /// ```
    pub fn standard() -> Self {
        let cards = (0..DECK_SIZE).filter_map(|id| Card::try_from_id(id).ok()).collect();
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Fisher-Yates shuffle with the provided RNG.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Split the deck into `player_count` contiguous hands of `cards_per_hand`.
    ///
    /// Player `i` receives `[i * cards_per_hand, (i + 1) * cards_per_hand)`.
    /// Cards past `player_count * cards_per_hand` stay undealt. Callers must
    /// keep that product within the deck; a short deck yields short hands.
    ///
    /// ```
    /// use oh_hell_rs::deck::Deck;
    ///
    /// let mut deck = Deck::standard();
    /// deck.shuffle_seeded(3);
    /// let hands = deck.deal(5, 4);
    /// assert_eq!(hands.len(), 4);
    /// assert!(hands.iter().all(|h| h.len() == 5));
    /// ```
    pub fn deal(&self, cards_per_hand: usize, player_count: usize) -> Vec<Vec<Card>> {
        (0..player_count)
            .map(|i| {
                let start = (i * cards_per_hand).min(self.cards.len());
                let end = ((i + 1) * cards_per_hand).min(self.cards.len());
                self.cards[start..end].to_vec()
            })
            .collect()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}
