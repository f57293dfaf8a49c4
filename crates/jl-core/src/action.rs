//! What happens when the player acts on a revealed card.

use serde::{Deserialize, Serialize};

use crate::card::{Card, CardKind, Suit};

/// The action a face-up card calls for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardAction {
    /// Pick the card up into the hand (jokers, equipment, friendly NPCs).
    TakeIntoHand,
    /// The card must be fought (hazards, hostile NPCs).
    Fight,
    /// Nothing to do; the cell is simply resolved (Aces, stray Jacks).
    Inert,
}

/// Decide what acting on `card` means for a player of `player_suit`.
pub fn classify(card: &Card, player_suit: Suit) -> CardAction {
    match card.kind() {
        CardKind::Joker | CardKind::Equipment => CardAction::TakeIntoHand,
        CardKind::Hazard => CardAction::Fight,
        CardKind::Npc if card.is_friendly_to(player_suit) => CardAction::TakeIntoHand,
        CardKind::Npc => CardAction::Fight,
        CardKind::Ace | CardKind::Jack => CardAction::Inert,
    }
}
