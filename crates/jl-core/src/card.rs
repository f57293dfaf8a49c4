//! Playing cards and their classification.
//!
//! A dungeon card is identified by its suit and rank alone. Everything else
//! the game cares about (color, what kind of encounter it represents, whether
//! a face card is friendly) is derived from those two fields.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// The suit of a card. Jokers carry their own two suits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Suit {
    /// Red suit.
    Hearts,
    /// Red suit.
    Diamonds,
    /// Black suit.
    Clubs,
    /// Black suit.
    Spades,
    /// The red joker, dealt face-down into the centre of the dungeon.
    RedJoker,
    /// The black joker, shuffled into the dungeon.
    BlackJoker,
}

impl Suit {
    /// The four standard suits in deck-construction order.
    pub const STANDARD: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// The color of cards in this suit.
    pub fn color(self) -> Color {
        match self {
            Self::Hearts | Self::Diamonds => Color::Red,
            Self::Clubs | Self::Spades => Color::Black,
            Self::RedJoker | Self::BlackJoker => Color::Joker,
        }
    }

    /// Returns true for the two joker suits.
    pub fn is_joker(self) -> bool {
        matches!(self, Self::RedJoker | Self::BlackJoker)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hearts => write!(f, "Hearts"),
            Self::Diamonds => write!(f, "Diamonds"),
            Self::Clubs => write!(f, "Clubs"),
            Self::Spades => write!(f, "Spades"),
            Self::RedJoker => write!(f, "Red Joker"),
            Self::BlackJoker => write!(f, "Black Joker"),
        }
    }
}

/// Card color, derived from the suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    /// Hearts and Diamonds.
    Red,
    /// Clubs and Spades.
    Black,
    /// Either joker.
    Joker,
}

/// A card rank: 1 (Ace) through 13 (King), or 14 for jokers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

impl Rank {
    /// Ace.
    pub const ACE: Rank = Rank(1);
    /// Jack. Jacks are the player identities and never appear in the dungeon.
    pub const JACK: Rank = Rank(11);
    /// Queen.
    pub const QUEEN: Rank = Rank(12);
    /// King.
    pub const KING: Rank = Rank(13);
    /// Sentinel rank shared by both jokers.
    pub const JOKER: Rank = Rank(14);

    /// Create a rank from its numeric value (1-14).
    pub fn new(value: u8) -> Option<Self> {
        (1..=14).contains(&value).then_some(Self(value))
    }

    /// The numeric value of the rank.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Returns true for the number ranks 2 through 10.
    pub fn is_number(self) -> bool {
        (2..=10).contains(&self.0)
    }

    /// Returns true for Queens and Kings, the NPC ranks.
    pub fn is_npc(self) -> bool {
        self == Self::QUEEN || self == Self::KING
    }
}

impl TryFrom<u8> for Rank {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("rank {value} is outside 1-14"))
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank.0
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            1 => write!(f, "Ace"),
            11 => write!(f, "Jack"),
            12 => write!(f, "Queen"),
            13 => write!(f, "King"),
            14 => write!(f, "Joker"),
            n => write!(f, "{n}"),
        }
    }
}

/// What a card represents when it is turned up in the dungeon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    /// A red number card (2-10) that can be carried and spent in combat.
    Equipment,
    /// A black number card (2-10) that blocks the way and must be fought.
    Hazard,
    /// An Ace.
    Ace,
    /// A Jack.
    Jack,
    /// A Queen or King. Friendly or hostile depending on the player's suit.
    Npc,
    /// Either joker.
    Joker,
}

/// A single playing card. Equality is by suit and rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCard", into = "RawCard")]
pub struct Card {
    suit: Suit,
    rank: Rank,
}

/// Serialized form of a card, checked by [`Card::new`] on the way in.
#[derive(Clone, Copy, Serialize, Deserialize)]
struct RawCard {
    suit: Suit,
    rank: u8,
}

impl TryFrom<RawCard> for Card {
    type Error = CoreError;

    fn try_from(raw: RawCard) -> Result<Self, Self::Error> {
        Card::new(raw.suit, raw.rank)
    }
}

impl From<Card> for RawCard {
    fn from(card: Card) -> Self {
        Self {
            suit: card.suit,
            rank: card.rank.value(),
        }
    }
}

impl Card {
    /// Create a card, rejecting suit/rank pairs that do not exist.
    ///
    /// Standard suits take ranks 1-13; the joker suits take only rank 14.
    pub fn new(suit: Suit, rank: u8) -> CoreResult<Self> {
        let valid = if suit.is_joker() {
            rank == Rank::JOKER.value()
        } else {
            (1..=13).contains(&rank)
        };
        if !valid {
            return Err(CoreError::InvalidCard { suit, rank });
        }
        Ok(Self {
            suit,
            rank: Rank(rank),
        })
    }

    /// The red joker.
    pub fn red_joker() -> Self {
        Self {
            suit: Suit::RedJoker,
            rank: Rank::JOKER,
        }
    }

    /// The black joker.
    pub fn black_joker() -> Self {
        Self {
            suit: Suit::BlackJoker,
            rank: Rank::JOKER,
        }
    }

    /// The card's suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// The card's rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// The card's color.
    pub fn color(&self) -> Color {
        self.suit.color()
    }

    /// Classify the card by what it represents in the dungeon.
    pub fn kind(&self) -> CardKind {
        if self.suit.is_joker() {
            return CardKind::Joker;
        }
        match self.rank {
            Rank::ACE => CardKind::Ace,
            Rank::JACK => CardKind::Jack,
            Rank::QUEEN | Rank::KING => CardKind::Npc,
            _ if self.color() == Color::Red => CardKind::Equipment,
            _ => CardKind::Hazard,
        }
    }

    /// Returns true if this is a Queen or King of the player's own suit.
    pub fn is_friendly_to(&self, player_suit: Suit) -> bool {
        self.rank.is_npc() && self.suit == player_suit
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.suit.is_joker() {
            write!(f, "{}", self.suit)
        } else {
            write!(f, "{} of {}", self.rank, self.suit)
        }
    }
}

/// Parses short codes: rank then suit letter ("7D", "10C", "QH", "AS"),
/// or "RJ" / "BJ" for the jokers. Case-insensitive.
impl FromStr for Card {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_uppercase();
        let unknown = || CoreError::UnknownCardCode(s.to_string());

        match code.as_str() {
            "RJ" => return Ok(Self::red_joker()),
            "BJ" => return Ok(Self::black_joker()),
            _ => {}
        }

        let suit_char = code.chars().last().ok_or_else(unknown)?;
        let suit = match suit_char {
            'H' => Suit::Hearts,
            'D' => Suit::Diamonds,
            'C' => Suit::Clubs,
            'S' => Suit::Spades,
            _ => return Err(unknown()),
        };
        let rank = match &code[..code.len() - 1] {
            "A" => 1,
            "J" => 11,
            "Q" => 12,
            "K" => 13,
            digits => match digits.parse::<u8>() {
                Ok(n) if (2..=10).contains(&n) => n,
                _ => return Err(unknown()),
            },
        };
        Self::new(suit, rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(code: &str) -> Card {
        code.parse().unwrap()
    }

    #[test]
    fn suit_colors() {
        assert_eq!(Suit::Hearts.color(), Color::Red);
        assert_eq!(Suit::Diamonds.color(), Color::Red);
        assert_eq!(Suit::Clubs.color(), Color::Black);
        assert_eq!(Suit::Spades.color(), Color::Black);
        assert_eq!(Suit::RedJoker.color(), Color::Joker);
        assert_eq!(Suit::BlackJoker.color(), Color::Joker);
    }

    #[test]
    fn card_new_validates_pairs() {
        assert!(Card::new(Suit::Hearts, 1).is_ok());
        assert!(Card::new(Suit::Hearts, 13).is_ok());
        assert!(Card::new(Suit::Hearts, 0).is_err());
        assert!(Card::new(Suit::Hearts, 14).is_err());
        assert!(Card::new(Suit::RedJoker, 14).is_ok());
        assert_eq!(
            Card::new(Suit::BlackJoker, 5),
            Err(CoreError::InvalidCard {
                suit: Suit::BlackJoker,
                rank: 5
            })
        );
    }

    #[test]
    fn kinds() {
        assert_eq!(card("7D").kind(), CardKind::Equipment);
        assert_eq!(card("10H").kind(), CardKind::Equipment);
        assert_eq!(card("9C").kind(), CardKind::Hazard);
        assert_eq!(card("2S").kind(), CardKind::Hazard);
        assert_eq!(card("AS").kind(), CardKind::Ace);
        assert_eq!(card("JH").kind(), CardKind::Jack);
        assert_eq!(card("QH").kind(), CardKind::Npc);
        assert_eq!(card("KC").kind(), CardKind::Npc);
        assert_eq!(Card::red_joker().kind(), CardKind::Joker);
    }

    #[test]
    fn friendliness_needs_matching_face_card() {
        assert!(card("KS").is_friendly_to(Suit::Spades));
        assert!(card("QS").is_friendly_to(Suit::Spades));
        assert!(!card("QH").is_friendly_to(Suit::Spades));
        assert!(!card("9S").is_friendly_to(Suit::Spades));
        assert!(!card("JS").is_friendly_to(Suit::Spades));
    }

    #[test]
    fn display() {
        assert_eq!(card("7D").to_string(), "7 of Diamonds");
        assert_eq!(card("QH").to_string(), "Queen of Hearts");
        assert_eq!(card("AS").to_string(), "Ace of Spades");
        assert_eq!(Card::red_joker().to_string(), "Red Joker");
        assert_eq!(Card::black_joker().to_string(), "Black Joker");
    }

    #[test]
    fn parse_codes() {
        assert_eq!(card("10c"), Card::new(Suit::Clubs, 10).unwrap());
        assert_eq!(card(" ks "), Card::new(Suit::Spades, 13).unwrap());
        assert_eq!(card("bj"), Card::black_joker());
        assert!("1H".parse::<Card>().is_err());
        assert!("11H".parse::<Card>().is_err());
        assert!("7X".parse::<Card>().is_err());
        assert!("".parse::<Card>().is_err());
    }

    #[test]
    fn equality_is_by_suit_and_rank() {
        assert_eq!(card("7D"), Card::new(Suit::Diamonds, 7).unwrap());
        assert_ne!(card("7D"), card("7H"));
    }

    #[test]
    fn rank_serde_rejects_out_of_range() {
        let json = serde_json::to_string(&Rank::QUEEN).unwrap();
        assert_eq!(json, "12");
        assert!(serde_json::from_str::<Rank>("15").is_err());
        let c: Card = serde_json::from_str(r#"{"suit":"hearts","rank":7}"#).unwrap();
        assert_eq!(c, card("7H"));
    }

    #[test]
    fn card_serde_validates_pairs() {
        assert!(serde_json::from_str::<Card>(r#"{"suit":"red_joker","rank":5}"#).is_err());
        assert!(serde_json::from_str::<Card>(r#"{"suit":"spades","rank":14}"#).is_err());
        assert!(serde_json::from_str::<Card>(r#"{"suit":"clubs","rank":0}"#).is_err());

        let joker: Card = serde_json::from_str(r#"{"suit":"red_joker","rank":14}"#).unwrap();
        assert_eq!(joker, Card::red_joker());
        let json = serde_json::to_string(&card("QH")).unwrap();
        assert_eq!(json, r#"{"suit":"hearts","rank":12}"#);
    }
}
