//! Deck construction, shuffling, and the dungeon deal.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::board::{Board, CellState, GRID_COLS, GRID_ROWS, Position};
use crate::card::{Card, Color, Rank, Suit};
use crate::error::{CoreError, CoreResult};

/// An ordered pile of cards. Cards are drawn from the end.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Create an empty deck.
    pub fn new() -> Self {
        Self::default()
    }

    /// The 52-card standard deck, unshuffled, suit by suit.
    pub fn standard() -> Self {
        let cards = Suit::STANDARD
            .iter()
            .flat_map(|&suit| (1..=13).filter_map(move |rank| Card::new(suit, rank).ok()))
            .collect();
        Self { cards }
    }

    /// Shuffle the deck in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draw the top card, if any.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Put a card on top of the deck.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Number of cards left.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The cards in draw order (last is drawn first).
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

/// The result of dealing a fresh dungeon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dungeon {
    /// The 7x7 grid, every cell face-down.
    pub board: Board,
    /// The four Jacks, one per possible player identity.
    pub jacks: Vec<Card>,
    /// The black 10 that is set aside before the deal.
    pub set_aside: Option<Card>,
}

/// Deal a new dungeon.
///
/// From a standard deck, the Jacks and the first black 10 are separated, the
/// black joker is shuffled in, the red joker goes face-down in the centre, and
/// the remaining 48 cards fill the other cells face-down.
pub fn deal_dungeon<R: Rng + ?Sized>(rng: &mut R) -> CoreResult<Dungeon> {
    let mut source = Deck::standard();
    source.shuffle(rng);

    let mut jacks = Vec::new();
    let mut set_aside = None;
    let mut grid_deck = Deck::new();

    for card in source.cards.drain(..) {
        if card.rank() == Rank::JACK {
            jacks.push(card);
        } else if set_aside.is_none() && card.rank().value() == 10 && card.color() == Color::Black
        {
            set_aside = Some(card);
        } else {
            grid_deck.push(card);
        }
    }
    grid_deck.push(Card::black_joker());
    grid_deck.shuffle(rng);

    let center = Board::center();
    let mut board = Board::new();
    for row in 0..GRID_ROWS {
        for col in 0..GRID_COLS {
            let position = Position::new(row, col);
            let card = if position == center {
                Card::red_joker()
            } else {
                grid_deck
                    .draw()
                    .ok_or(CoreError::DeckExhausted(position))?
            };
            board.place(position, card, CellState::FaceDown)?;
        }
    }

    log::debug!(
        "dealt dungeon: {} jacks separated, set aside {:?}, {} cards left over",
        jacks.len(),
        set_aside,
        grid_deck.len()
    );

    Ok(Dungeon {
        board,
        jacks,
        set_aside,
    })
}
