// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A Poker card.
///
/// A card is represented with a 32 bits integer with the following format:
///
/// ```text
///   +--------+--------+
///   |xxxxcdhs|rrrrxxxx|
///   +--------+--------+
///   r = rank of card (deuce=0,trey=1,four=2,five=3,...,ace=12)
///   cdhs = suit of card (clubs=0x8000,diamonds=0x4000,hearts=0x2000,spades=0x1000)
/// ```
///
/// The value 0 is reserved as the "no card" sentinel, a valid card always has
/// exactly one suit bit set.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card(u32);

impl Card {
    /// Creates a card given a rank and a suit.
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Self(((suit as u32) << 12) | ((rank as u32) << 8))
    }

    /// Decodes a card from its raw encoding.
    ///
    /// Returns `None` for the 0 "no card" sentinel, for rank fields above the
    /// ace, and for suit bits that are not exactly one of the four suit masks.
    /// Bits outside the rank and suit fields are ignored.
    pub fn from_raw(raw: u32) -> Option<Card> {
        if raw == 0 {
            return None;
        }

        let rank = (raw >> 8) & 0xf;
        if rank > Rank::Ace as u32 {
            return None;
        }

        match (raw >> 12) & 0xf {
            suit @ (0x8 | 0x4 | 0x2 | 0x1) => Some(Self((suit << 12) | (rank << 8))),
            _ => None,
        }
    }

    /// This card raw encoding.
    pub fn raw(&self) -> u32 {
        self.0
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        match (self.0 >> 8) & 0xf {
            0 => Rank::Deuce,
            1 => Rank::Trey,
            2 => Rank::Four,
            3 => Rank::Five,
            4 => Rank::Six,
            5 => Rank::Seven,
            6 => Rank::Eight,
            7 => Rank::Nine,
            8 => Rank::Ten,
            9 => Rank::Jack,
            10 => Rank::Queen,
            11 => Rank::King,
            12 => Rank::Ace,
            _ => unreachable!("Invalid rank 0x{:x}", self.0),
        }
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        match (self.0 >> 12) & 0xf {
            0x8 => Suit::Clubs,
            0x4 => Suit::Diamonds,
            0x2 => Suit::Hearts,
            0x1 => Suit::Spades,
            _ => unreachable!("Invalid suit 0x{:x}", self.0),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

/// Error parsing a card from a string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid card {0:?}")]
pub struct ParseCardError(String);

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses a card from its display form, a rank and a suit letter (`"KD"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCardError(s.to_string());

        let mut chars = s.chars();
        let (rank, suit) = chars
            .next()
            .zip(chars.next())
            .filter(|_| chars.next().is_none())
            .ok_or_else(err)?;

        let rank = match rank.to_ascii_uppercase() {
            '2' => Rank::Deuce,
            '3' => Rank::Trey,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return Err(err()),
        };

        let suit = match suit.to_ascii_uppercase() {
            'C' => Suit::Clubs,
            'D' => Suit::Diamonds,
            'H' => Suit::Hearts,
            'S' => Suit::Spades,
            _ => return Err(err()),
        };

        Ok(Card::new(rank, suit))
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// The rank numeric value, deuce=2 up to ace=14.
    pub fn value(self) -> u8 {
        self as u8 + 2
    }

    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 8,
    /// Diamonds suit.
    Diamonds = 4,
    /// Hearts suit.
    Hearts = 2,
    /// Spades suit.
    Spades = 1,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

/// A cards Deck.
///
/// The deck is regenerated from the 13 ranks and 4 suits every time it is
/// needed, it is never persisted.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the deck.
    ///
    /// Panics if the deck is empty.
    pub fn deal(&mut self) -> Card {
        self.cards.pop().expect("dealing from an empty deck")
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn card_encoding() {
        let mut cards = HashSet::default();
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());

        while !deck.is_empty() {
            let card = deck.deal();
            assert_eq!((card.raw() >> 8) & 0xF, card.rank() as u32);
            assert_eq!((card.raw() >> 12) & 0xF, card.suit() as u32);
            assert_eq!(card.raw() & !0xFF00, 0);
            cards.insert(card.raw());
        }

        // Check uniqueness.
        assert_eq!(cards.len(), Deck::SIZE);

        let kd = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(kd.raw(), 0x4B00);

        let fs = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(fs.raw(), 0x1300);

        let jc = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(jc.raw(), 0x8900);
    }

    #[test]
    fn card_round_trip() {
        for suit in Suit::suits() {
            for rank in Rank::ranks() {
                let card = Card::new(rank, suit);
                assert_eq!(Card::from_raw(card.raw()), Some(card));
            }
        }
    }

    #[test]
    fn card_from_raw_rejects_no_card() {
        assert_eq!(Card::from_raw(0), None);
    }

    #[test]
    fn card_from_raw_rejects_corrupt_values() {
        // Rank field above the ace.
        assert_eq!(Card::from_raw(0x1D00), None);
        // No suit bit.
        assert_eq!(Card::from_raw(0x0900), None);
        // More than one suit bit.
        assert_eq!(Card::from_raw(0xC900), None);
    }

    #[test]
    fn card_from_raw_ignores_extra_bits() {
        // The client may carry flags outside the rank and suit fields.
        let kd = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(Card::from_raw(kd.raw() | 0xFFFF_0000), Some(kd));
        assert_eq!(Card::from_raw(kd.raw() | 0x25), Some(kd));
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(c.to_string(), "JC");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "TH");

        let c = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(c.to_string(), "AH");
    }

    #[test]
    fn card_from_string() {
        for suit in Suit::suits() {
            for rank in Rank::ranks() {
                let card = Card::new(rank, suit);
                assert_eq!(card.to_string().parse(), Ok(card));
            }
        }

        assert_eq!("th".parse::<Card>(), Ok(Card::new(Rank::Ten, Suit::Hearts)));

        assert!("".parse::<Card>().is_err());
        assert!("K".parse::<Card>().is_err());
        assert!("KDD".parse::<Card>().is_err());
        assert!("1D".parse::<Card>().is_err());
        assert!("KX".parse::<Card>().is_err());
    }

    #[test]
    fn rank_values() {
        assert_eq!(Rank::Deuce.value(), 2);
        assert_eq!(Rank::Ten.value(), 10);
        assert_eq!(Rank::Ace.value(), 14);
    }

    #[test]
    fn deck_remove() {
        let mut deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        deck.remove(Card::new(Rank::Ace, Suit::Diamonds));
        deck.remove(Card::new(Rank::King, Suit::Diamonds));
        assert_eq!(deck.count(), Deck::SIZE - 2);

        // Removing a card not in the deck has no effect.
        deck.remove(Card::new(Rank::Ace, Suit::Diamonds));
        assert_eq!(deck.count(), Deck::SIZE - 2);

        let ad = Card::new(Rank::Ace, Suit::Diamonds);
        assert!(deck.into_iter().all(|c| c != ad));
    }
}
