//! Hand state and the pure scoring function.

use alloc::vec::Vec;

use crate::card::{Card, Rank};

/// Computes the best total for a sequence of cards.
///
/// Each card contributes its base point value (ace = 11). While the total
/// exceeds 21 and an ace has not yet been down-valued, 10 is subtracted,
/// re-counting that ace as 1. The result is the best total at or below 21
/// when achievable, otherwise the minimal total above 21.
///
/// # Example
///
/// ```
/// use twentyone::{Card, Rank, Suit, score};
///
/// let cards = [
///     Card::new(Suit::Spades, Rank::Ace),
///     Card::new(Suit::Hearts, Rank::Ace),
/// ];
/// assert_eq!(score(&cards), 12);
/// ```
#[must_use]
pub fn score(cards: &[Card]) -> u8 {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.rank == Rank::Ace {
            aces += 1;
        }
        value = value.saturating_add(card.points());
    }

    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    value
}

/// An append-only sequence of cards held by the player or the dealer.
///
/// The score is recomputed from the current contents on every call; nothing
/// is cached.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    /// Cards in the hand, in the order received.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Appends a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the first card received (the dealer's face-up card).
    #[must_use]
    pub fn first_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Computes the hand's current score via [`score`].
    #[must_use]
    pub fn score(&self) -> u8 {
        score(&self.cards)
    }

    /// Returns whether the hand is bust (score over 21).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score() > 21
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
