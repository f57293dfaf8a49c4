//! Combat values of cards.

use jl_core::{Card, Rank};

/// The combat value of a card, or of no card at all.
///
/// Number cards count their face value, Queens 12 and Kings 13. Aces, Jacks,
/// jokers and the absence of a card are worth nothing.
pub fn combat_value(card: Option<&Card>) -> u8 {
    let Some(card) = card else {
        return 0;
    };
    if card.suit().is_joker() {
        return 0;
    }
    let rank = card.rank();
    match rank {
        Rank::QUEEN | Rank::KING => rank.value(),
        _ if rank.is_number() => rank.value(),
        _ => 0,
    }
}
