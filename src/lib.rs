//! A single-player blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Round`] type that plays one round against the
//! dealer: it shuffles a 52-card [`Deck`], deals the opening hands, applies
//! hit/stand actions with ace down-valuation, and resolves a
//! win/lose/tie [`Outcome`].
//!
//! # Example
//!
//! ```no_run
//! use twentyone::Round;
//!
//! let mut round = Round::new("Tom", 42);
//! round.deal_initial().expect("fresh deck has enough cards");
//! let _ = round;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod result;
pub mod round;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, DealError, DeckError, ParseCardError};
pub use hand::{Hand, score};
pub use result::{Outcome, RoundResult};
pub use round::{DEALER_STAND_MIN, Round, RoundState};
