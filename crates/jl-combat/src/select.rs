//! Picking the hand cards that may be spent as an attack value.

use serde::{Deserialize, Serialize};

use jl_core::{Card, CardKind, Hand, HandSlot, Suit};

/// A hand card that can be spent in combat, with where it sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibleCard {
    /// The card.
    pub card: Card,
    /// Its slot in the hand.
    pub slot: HandSlot,
}

/// Returns true for red number cards and for Queens or Kings of the player's suit.
pub fn is_value_card(card: &Card, player_suit: Suit) -> bool {
    card.kind() == CardKind::Equipment || card.is_friendly_to(player_suit)
}

/// The eligible value cards in the hand, in row-major order.
pub fn eligible_value_cards(hand: &Hand, player_suit: Suit) -> Vec<EligibleCard> {
    hand.iter_slots()
        .filter(|(_, card)| is_value_card(card, player_suit))
        .map(|(slot, card)| EligibleCard { card, slot })
        .collect()
}
