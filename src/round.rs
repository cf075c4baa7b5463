//! Round engine: dealing, player actions, dealer auto-play, and resolution.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{ActionError, DealError};
use crate::hand::Hand;
use crate::result::{Outcome, RoundResult};

/// The dealer keeps drawing while below this score.
pub const DEALER_STAND_MIN: u8 = 15;

/// Number of cards dealt up front (two each to player and dealer).
const INITIAL_DEAL: usize = 4;

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Waiting for the initial deal.
    Dealing,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// The round has resolved.
    Over,
}

/// A single round of blackjack against the dealer.
///
/// The round owns the deck and both hands and moves through
/// `Dealing → PlayerTurn → Over`. The caller drives it with
/// [`Round::deal_initial`], then [`Round::hit`] and [`Round::stand`].
///
/// # Example
///
/// ```no_run
/// use twentyone::Round;
///
/// let mut round = Round::new("Tom", 42);
/// round.deal_initial()?;
/// let drawn = round.stand()?;
/// let _ = (drawn, round.result());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Round {
    /// Cards not yet dealt.
    deck: Deck,
    /// The player's hand.
    player: Hand,
    /// The dealer's hand.
    dealer: Hand,
    /// The player's name tag.
    player_name: String,
    /// Current round state.
    state: RoundState,
    /// Result once the round is over.
    result: Option<RoundResult>,
}

impl Round {
    /// Creates a round with a fresh 52-card deck shuffled from `seed`.
    #[must_use]
    pub fn new(player_name: impl Into<String>, seed: u64) -> Self {
        Self::with_deck(player_name, Deck::new(seed))
    }

    /// Creates a round over an existing deck.
    ///
    /// Useful with [`Deck::from_cards`] for deterministic rounds.
    #[must_use]
    pub fn with_deck(player_name: impl Into<String>, deck: Deck) -> Self {
        Self {
            deck,
            player: Hand::new(),
            dealer: Hand::new(),
            player_name: player_name.into(),
            state: RoundState::Dealing,
            result: None,
        }
    }

    /// Deals two cards each to the player and the dealer, alternating,
    /// starting with the player. Moves the round to the player's turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is past the dealing stage or fewer than
    /// four cards remain.
    pub fn deal_initial(&mut self) -> Result<(), DealError> {
        if self.state != RoundState::Dealing {
            return Err(DealError::InvalidState);
        }

        if self.deck.len() < INITIAL_DEAL {
            return Err(DealError::NotEnoughCards);
        }

        for _ in 0..2 {
            // Length was checked above, so these deals cannot fail.
            if let Ok(card) = self.deck.deal() {
                self.player.add_card(card);
            }
            if let Ok(card) = self.deck.deal() {
                self.dealer.add_card(card);
            }
        }

        self.state = RoundState::PlayerTurn;
        Ok(())
    }

    /// Player action: hit (draw one card).
    ///
    /// If the player's score goes over 21 the round ends immediately with
    /// [`Outcome::PlayerBust`].
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        if self.state != RoundState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        let card = self.deck.deal().map_err(|_| ActionError::NoCards)?;
        self.player.add_card(card);

        if self.player.is_bust() {
            self.finish(Outcome::PlayerBust);
        }

        Ok(card)
    }

    /// Player action: stand (end the player's turn).
    ///
    /// The dealer draws while its score is below [`DEALER_STAND_MIN`], then
    /// the round resolves by comparing final scores. Returns the cards the
    /// dealer drew.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, or if the deck runs
    /// out while the dealer must draw (the round is left unresolved).
    pub fn stand(&mut self) -> Result<Vec<Card>, ActionError> {
        if self.state != RoundState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        let mut drawn = Vec::new();
        while self.dealer.score() < DEALER_STAND_MIN {
            let card = self.deck.deal().map_err(|_| ActionError::NoCards)?;
            self.dealer.add_card(card);
            drawn.push(card);
        }

        self.finish(Outcome::from_scores(
            self.player.score(),
            self.dealer.score(),
        ));

        Ok(drawn)
    }

    /// Records the result and closes the round.
    fn finish(&mut self, outcome: Outcome) {
        self.result = Some(RoundResult {
            outcome,
            player_score: self.player.score(),
            dealer_score: self.dealer.score(),
        });
        self.state = RoundState::Over;
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the result once the round is over.
    #[must_use]
    pub const fn result(&self) -> Option<RoundResult> {
        self.result
    }

    /// Returns the player's name tag.
    #[must_use]
    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the player's current score.
    #[must_use]
    pub fn player_score(&self) -> u8 {
        self.player.score()
    }

    /// Returns the dealer's current score.
    #[must_use]
    pub fn dealer_score(&self) -> u8 {
        self.dealer.score()
    }

    /// Returns the dealer's face-up card (the card dealt first).
    #[must_use]
    pub fn dealer_up_card(&self) -> Option<&Card> {
        self.dealer.first_card()
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }
}
