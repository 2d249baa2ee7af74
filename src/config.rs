//! Match configuration.

use crate::cards::DECK_SIZE;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("rounds out of range for {players} players: max {max}, got {got}")]
    RoundsOutOfRange { players: usize, max: u32, got: u32 },
    #[error("{players} players cannot each receive a card from a {deck}-card deck")]
    TooManyPlayers { players: usize, deck: usize },
}

/// Options for a new match.
///
/// The hand size starts at the number of rounds and drops by one card each
/// round, so the first round is the largest deal.
///
/// ```
/// use oh_hell_rs::config::GameConfig;
///
/// let cfg = GameConfig::default().with_rounds(5).with_seed(9);
/// assert_eq!(cfg.resolve_rounds(4).unwrap(), 5);
/// assert_eq!(GameConfig::default().resolve_rounds(4).unwrap(), 13);
/// assert!(GameConfig::default().with_rounds(14).resolve_rounds(4).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct GameConfig {
    /// Rounds to play; `None` plays the most the deck allows.
    pub rounds: Option<u32>,
    /// Shuffle seed; `None` draws one from the thread RNG.
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = Some(rounds);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Largest opening hand every one of `players` can receive.
    pub fn max_rounds(players: usize) -> u32 {
        if players == 0 {
            return 0;
        }
        (DECK_SIZE / players) as u32
    }

    /// Number of rounds to play for `players`, validated against the deck.
    pub fn resolve_rounds(&self, players: usize) -> Result<u32, ConfigError> {
        let max = Self::max_rounds(players);
        if max == 0 {
            return Err(ConfigError::TooManyPlayers { players, deck: DECK_SIZE });
        }
        match self.rounds {
            None => Ok(max),
            Some(got) if (1..=max).contains(&got) => Ok(got),
            Some(got) => Err(ConfigError::RoundsOutOfRange { players, max, got }),
        }
    }
}
