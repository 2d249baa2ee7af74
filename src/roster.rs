//! Players seated around the table, with rotating active and dealer pointers.

use crate::cards::Card;

/// Points awarded for a made bid of zero.
pub const ZERO_BID_BONUS: u32 = 20;
/// Base bonus added to the bid for any other made bid.
pub const MADE_BID_BONUS: u32 = 10;

/// Points a player earns for a round given their bid and tricks taken.
///
/// ```
/// use oh_hell_rs::roster::round_score;
///
/// assert_eq!(round_score(0, 0), 20);
/// assert_eq!(round_score(2, 2), 12);
/// assert_eq!(round_score(2, 3), 0);
/// ```
pub fn round_score(estimated_wins: u32, wins: u32) -> u32 {
    if wins != estimated_wins {
        0
    } else if estimated_wins == 0 {
        ZERO_BID_BONUS
    } else {
        estimated_wins + MADE_BID_BONUS
    }
}

#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Player {
    pub(crate) name: String,
    pub(crate) hand: Vec<Card>,
    pub(crate) estimated_wins: u32,
    pub(crate) wins: u32,
    pub(crate) points: u32,
}

impl Player {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), hand: Vec::new(), estimated_wins: 0, wins: 0, points: 0 }
    }

    /// Returns the player's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cards still in hand, in dealt order
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Returns the bid for the current round
    pub fn estimated_wins(&self) -> u32 {
        self.estimated_wins
    }

    /// Returns tricks won so far this round
    pub fn wins(&self) -> u32 {
        self.wins
    }

    /// Returns the cumulative score
    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn has_empty_hand(&self) -> bool {
        self.hand.is_empty()
    }

    /// Score the round, reset the per-round counters and return the award.
    fn settle_round(&mut self) -> u32 {
        let award = round_score(self.estimated_wins, self.wins);
        self.points += award;
        self.estimated_wins = 0;
        self.wins = 0;
        award
    }
}

/// Ordered players plus the `active` (whose turn) and `dealer` pointers.
#[derive(Debug, Clone)]
pub struct Roster {
    players: Vec<Player>,
    active: usize,
    dealer: usize,
}

impl Roster {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { players: names.into_iter().map(Player::new).collect(), active: 0, dealer: 0 }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn at(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.players.iter().position(|p| p.name == name)
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn dealer(&self) -> usize {
        self.dealer
    }

    /// Advance the active pointer by one seat, wrapping around.
    pub fn next(&mut self) {
        if !self.players.is_empty() {
            self.active = (self.active + 1) % self.players.len();
        }
    }

    pub fn current(&self) -> &Player {
        &self.players[self.active]
    }

    pub fn current_mut(&mut self) -> &mut Player {
        &mut self.players[self.active]
    }

    pub(crate) fn set_active_to_dealer(&mut self) {
        self.active = self.dealer;
    }

    pub(crate) fn set_hands(&mut self, hands: Vec<Vec<Card>>) {
        for (p, hand) in self.players.iter_mut().zip(hands) {
            p.hand = hand;
        }
    }

    /// Credit a trick to `name`; the winner becomes active and leads next.
    pub fn record_win(&mut self, name: &str) {
        if let Some(idx) = self.index_of(name) {
            self.active = idx;
            self.players[idx].wins += 1;
        }
    }

    /// Score every player, reset round counters and pass the deal on.
    ///
    /// Returns the points each player earned this round, in seat order.
    pub fn finish_round(&mut self) -> Vec<u32> {
        let awards = self.players.iter_mut().map(Player::settle_round).collect();
        if !self.players.is_empty() {
            self.dealer = (self.dealer + 1) % self.players.len();
        }
        awards
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(n: usize) -> Roster {
        Roster::new((1..=n).map(|i| format!("P{i}")))
    }

    #[test]
    fn scoring_rule() {
        assert_eq!(round_score(0, 0), 20);
        assert_eq!(round_score(2, 2), 12);
        assert_eq!(round_score(2, 1), 0);
        assert_eq!(round_score(2, 3), 0);
        assert_eq!(round_score(0, 1), 0);
    }

    #[test]
    fn next_wraps_around() {
        let mut r = roster(3);
        r.next();
        r.next();
        assert_eq!(r.active(), 2);
        r.next();
        assert_eq!(r.active(), 0);
    }

    #[test]
    fn record_win_moves_active_to_winner() {
        let mut r = roster(3);
        r.record_win("P3");
        assert_eq!(r.active(), 2);
        assert_eq!(r.current().wins(), 1);
        r.record_win("nobody");
        assert_eq!(r.active(), 2);
    }

    #[test]
    fn finish_round_scores_resets_and_rotates_dealer() {
        let mut r = roster(3);
        r.players[0].estimated_wins = 0;
        r.players[1].estimated_wins = 2;
        r.players[1].wins = 2;
        r.players[2].estimated_wins = 1;
        r.players[2].wins = 0;
        let awards = r.finish_round();
        assert_eq!(awards, vec![20, 12, 0]);
        assert_eq!(r.dealer(), 1);
        for p in r.players() {
            assert_eq!(p.wins(), 0);
            assert_eq!(p.estimated_wins(), 0);
        }
        r.finish_round();
        r.finish_round();
        assert_eq!(r.dealer(), 0);
        assert_eq!(r.players()[0].points(), 60);
    }
}
