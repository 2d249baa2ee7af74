mod common;

use common::{bid_everyone, mk_game};
use oh_hell_rs::cards::parse_cards;
use oh_hell_rs::game::{trick_winner, ActionError, GameState};

#[test]
fn lead_suit_decides_trick_winner() {
    let cards = parse_cards("5s Ah Ks").unwrap();
    assert_eq!(trick_winner(&cards), Some(2));
    let cards = parse_cards("9d 2d Ad").unwrap();
    assert_eq!(trick_winner(&cards), Some(2));
    let cards = parse_cards("2c Ah As Kd").unwrap();
    assert_eq!(trick_winner(&cards), Some(0), "off-suit cards never beat the lead");
    assert_eq!(trick_winner(&[]), None);
}

#[test]
fn off_suit_card_is_refused_while_holding_the_lead_suit() {
    let mut checked = false;
    'seeds: for seed in 0..64 {
        let mut g = mk_game(4, 8, seed);
        g.deal_cards().unwrap();
        bid_everyone(&mut g);
        while g.state() == GameState::Playing {
            if let Some(lead) = g.lead_suit() {
                let hand = g.current_hand().to_vec();
                let off = hand.iter().position(|c| c.suit() != lead);
                if let (Some(off), true) = (off, hand.iter().any(|c| c.suit() == lead)) {
                    let before = hand.len();
                    assert_eq!(g.try_play_card_at(off), Err(ActionError::MustFollowSuit { lead }));
                    assert_eq!(g.current_hand().len(), before);
                    checked = true;
                    break 'seeds;
                }
            }
            let idx = g.legal_card_indices()[0];
            assert!(g.play_card_at(idx));
        }
    }
    assert!(checked, "no seed produced a follow-suit situation");
}

#[test]
fn any_card_goes_when_void_in_the_lead_suit() {
    let mut checked = false;
    'seeds: for seed in 0..64 {
        let mut g = mk_game(4, 8, seed);
        g.deal_cards().unwrap();
        bid_everyone(&mut g);
        while g.state() == GameState::Playing {
            if let Some(lead) = g.lead_suit() {
                let hand = g.current_hand();
                if !hand.iter().any(|c| c.suit() == lead) {
                    let last = hand.len() - 1;
                    assert_eq!(g.legal_card_indices(), (0..=last).collect::<Vec<_>>());
                    assert!(g.play_card_at(last));
                    checked = true;
                    break 'seeds;
                }
            }
            let idx = g.legal_card_indices()[0];
            assert!(g.play_card_at(idx));
        }
    }
    assert!(checked, "no seed produced a void hand");
}

#[test]
fn trick_winner_collects_the_trick_and_leads_next() {
    let mut g = mk_game(3, 5, 21);
    g.deal_cards().unwrap();
    bid_everyone(&mut g);

    for _ in 0..3 {
        let idx = g.legal_card_indices()[0];
        assert!(g.play_card_at(idx));
    }
    let trick = g.last_trick().expect("a full trick was played");
    let cards: Vec<_> = trick.plays.iter().map(|p| p.card).collect();
    let best = trick_winner(&cards).unwrap();
    assert_eq!(trick.winner, trick.plays[best].seat);
    assert_eq!(g.active(), trick.winner);
    assert_eq!(g.players()[trick.winner].wins(), 1);
    assert!(g.played_cards().is_empty());
    assert_eq!(g.state(), GameState::Playing);
}

#[test]
fn played_card_leaves_the_hand_and_turn_passes() {
    let mut g = mk_game(3, 5, 2);
    g.deal_cards().unwrap();
    bid_everyone(&mut g);
    let seat = g.active();
    let hand = g.current_hand().to_vec();
    let outcome = g.try_play_card_at(1).unwrap();
    assert_eq!(outcome.card, hand[1]);
    assert_eq!(outcome.trick_winner, None);
    assert_eq!(g.players()[seat].hand().len(), hand.len() - 1);
    assert!(!g.players()[seat].hand().contains(&hand[1]));
    assert_eq!(g.active(), (seat + 1) % 3);
    assert_eq!(g.played_cards()[0].seat, seat);
    assert_eq!(g.lead_suit(), Some(hand[1].suit()));
}

#[test]
fn bad_index_changes_nothing() {
    let mut g = mk_game(2, 3, 9);
    g.deal_cards().unwrap();
    bid_everyone(&mut g);
    let active = g.active();
    assert_eq!(
        g.try_play_card_at(3),
        Err(ActionError::CardIndexOutOfRange { index: 3, len: 3 })
    );
    assert!(!g.play_card_at(usize::MAX));
    assert_eq!(g.active(), active);
    assert_eq!(g.current_hand().len(), 3);
    assert!(g.played_cards().is_empty());
}
