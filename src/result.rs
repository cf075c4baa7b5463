//! Round outcome types.

/// Final outcome of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player wins (dealer busts or the player has the higher score).
    PlayerWin,
    /// Dealer wins (dealer has the higher score).
    DealerWin,
    /// Scores are equal.
    Tie,
    /// Player went over 21 and lost immediately.
    PlayerBust,
}

impl Outcome {
    /// Resolves a finished round from both final scores.
    ///
    /// Assumes the player has not busted (a player bust ends the round before
    /// the dealer plays). The dealer busting or holding the lower score is a
    /// player win; the higher score is a dealer win; equal scores tie.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::Outcome;
    ///
    /// assert_eq!(Outcome::from_scores(20, 18), Outcome::PlayerWin);
    /// assert_eq!(Outcome::from_scores(19, 19), Outcome::Tie);
    /// ```
    #[must_use]
    pub const fn from_scores(player_score: u8, dealer_score: u8) -> Self {
        if dealer_score > 21 || dealer_score < player_score {
            Self::PlayerWin
        } else if dealer_score > player_score {
            Self::DealerWin
        } else {
            Self::Tie
        }
    }
}

/// Result of a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: Outcome,
    /// The player's final score.
    pub player_score: u8,
    /// The dealer's final score.
    pub dealer_score: u8,
}
