//! Round integration tests.

use std::collections::HashSet;

use twentyone::{
    ActionError, Card, DECK_SIZE, DealError, Deck, DeckError, Outcome, ParseCardError, Rank, Round,
    RoundState, Suit, score,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

/// Builds an unshuffled deck whose deals come out in `draws` order.
fn deck_from_draws(draws: &[Card]) -> Deck {
    let mut cards = draws.to_vec();
    cards.reverse();
    Deck::from_cards(cards)
}

#[test]
fn every_suit_rank_pair_has_the_fixed_points() {
    let expected: [u8; 13] = [11, 2, 3, 4, 5, 6, 7, 8, 9, 10, 10, 10, 10];

    let mut seen = HashSet::new();
    for suit in Suit::ALL {
        for (rank, points) in Rank::ALL.into_iter().zip(expected) {
            let card = card(suit, rank);
            assert_eq!(card.points(), points);
            assert!(seen.insert(card));
        }
    }
    assert_eq!(seen.len(), DECK_SIZE);
}

#[test]
fn parsing_accepts_the_fixed_sets_only() {
    for name in ["Spades", "Hearts", "Clubs", "Diamonds", "hearts"] {
        assert!(name.parse::<Suit>().is_ok());
    }
    assert_eq!(
        "Swords".parse::<Suit>().unwrap_err(),
        ParseCardError::InvalidSuit
    );

    for symbol in ["A", "2", "9", "10", "J", "Q", "K", "a", "k"] {
        assert!(symbol.parse::<Rank>().is_ok());
    }
    assert_eq!("1".parse::<Rank>().unwrap_err(), ParseCardError::InvalidRank);
    assert_eq!(
        "11".parse::<Rank>().unwrap_err(),
        ParseCardError::InvalidRank
    );

    assert_eq!("A".parse::<Rank>().unwrap(), Rank::Ace);
    assert_eq!("10".parse::<Rank>().unwrap(), Rank::Ten);
}

#[test]
fn card_display_names_rank_and_suit() {
    let card = card(Suit::Spades, Rank::Ace);
    assert_eq!(card.to_string(), "A of Spades");
}

#[test]
fn new_deck_holds_fifty_two_unique_cards() {
    let mut deck = Deck::new(7);
    assert_eq!(deck.len(), DECK_SIZE);

    let mut seen = HashSet::new();
    for remaining in (0..DECK_SIZE).rev() {
        let card = deck.deal().unwrap();
        assert!(seen.insert(card), "card dealt twice: {card}");
        assert_eq!(deck.len(), remaining);
    }

    assert!(deck.is_empty());
    assert_eq!(deck.deal().unwrap_err(), DeckError::Empty);
}

#[test]
fn shuffle_preserves_deck_size() {
    let mut deck = Deck::new(3);
    deck.shuffle();
    assert_eq!(deck.len(), DECK_SIZE);

    deck.deal().unwrap();
    deck.shuffle();
    assert_eq!(deck.len(), DECK_SIZE - 1);
}

#[test]
fn scorer_down_values_aces_greedily() {
    let ace = card(Suit::Spades, Rank::Ace);

    assert_eq!(score(&[ace, card(Suit::Hearts, Rank::King)]), 21);
    assert_eq!(score(&[ace, card(Suit::Hearts, Rank::Ace)]), 12);
    assert_eq!(
        score(&[ace, card(Suit::Hearts, Rank::Ace), card(Suit::Clubs, Rank::Ace)]),
        13
    );
    assert_eq!(
        score(&[
            card(Suit::Spades, Rank::Ten),
            card(Suit::Hearts, Rank::Nine),
            card(Suit::Clubs, Rank::Five),
        ]),
        24
    );
    assert_eq!(
        score(&[ace, card(Suit::Hearts, Rank::Two), card(Suit::Clubs, Rank::Three)]),
        16
    );

    let eight_aces = [ace; 8];
    assert_eq!(score(&eight_aces), 18);

    assert_eq!(score(&[]), 0);
}

#[test]
fn outcome_comparison_rules() {
    assert_eq!(Outcome::from_scores(20, 18), Outcome::PlayerWin);
    assert_eq!(Outcome::from_scores(12, 22), Outcome::PlayerWin);
    assert_eq!(Outcome::from_scores(19, 19), Outcome::Tie);
    assert_eq!(Outcome::from_scores(15, 17), Outcome::DealerWin);
}

#[test]
fn initial_deal_alternates_and_starts_player_turn() {
    let deck = deck_from_draws(&[
        card(Suit::Hearts, Rank::Eight),  // player
        card(Suit::Clubs, Rank::Six),     // dealer up
        card(Suit::Diamonds, Rank::Seven), // player
        card(Suit::Spades, Rank::Ten),    // dealer hole
    ]);
    let mut round = Round::with_deck("Tom", deck);

    assert_eq!(round.state(), RoundState::Dealing);
    round.deal_initial().unwrap();

    assert_eq!(round.state(), RoundState::PlayerTurn);
    assert_eq!(round.player_hand().len(), 2);
    assert_eq!(round.dealer_hand().len(), 2);
    assert_eq!(round.player_score(), 15);
    assert_eq!(
        round.dealer_up_card(),
        Some(&card(Suit::Clubs, Rank::Six))
    );
    assert_eq!(round.cards_remaining(), 0);
}

#[test]
fn deal_initial_rejects_wrong_state_and_short_deck() {
    let mut round = Round::new("Tom", 42);
    round.deal_initial().unwrap();
    assert_eq!(round.deal_initial().unwrap_err(), DealError::InvalidState);

    let short = deck_from_draws(&[
        card(Suit::Hearts, Rank::Nine),
        card(Suit::Clubs, Rank::Five),
        card(Suit::Diamonds, Rank::Seven),
    ]);
    let mut round = Round::with_deck("Tom", short);
    assert_eq!(
        round.deal_initial().unwrap_err(),
        DealError::NotEnoughCards
    );
}

#[test]
fn actions_rejected_before_the_deal() {
    let mut round = Round::new("Tom", 9);
    assert_eq!(round.hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(round.stand().unwrap_err(), ActionError::InvalidState);
}

#[test]
fn player_bust_ends_the_round_immediately() {
    let deck = deck_from_draws(&[
        card(Suit::Hearts, Rank::Ten),   // player
        card(Suit::Clubs, Rank::Six),    // dealer up
        card(Suit::Diamonds, Rank::Nine), // player
        card(Suit::Spades, Rank::Ten),   // dealer hole
        card(Suit::Clubs, Rank::Five),   // player hit
    ]);
    let mut round = Round::with_deck("Tom", deck);
    round.deal_initial().unwrap();

    let hit_card = round.hit().unwrap();
    assert_eq!(hit_card.rank, Rank::Five);
    assert_eq!(round.state(), RoundState::Over);

    let result = round.result().unwrap();
    assert_eq!(result.outcome, Outcome::PlayerBust);
    assert_eq!(result.player_score, 24);

    assert_eq!(round.hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(round.stand().unwrap_err(), ActionError::InvalidState);
}

#[test]
fn dealer_stands_at_fifteen_or_more() {
    let deck = deck_from_draws(&[
        card(Suit::Hearts, Rank::Ten),  // player
        card(Suit::Clubs, Rank::Two),   // dealer up
        card(Suit::Diamonds, Rank::Nine), // player
        card(Suit::Spades, Rank::Three), // dealer hole
        card(Suit::Clubs, Rank::Four),  // dealer draw (9)
        card(Suit::Hearts, Rank::Six),  // dealer draw (15, stands)
        card(Suit::Spades, Rank::King), // must stay in the deck
    ]);
    let mut round = Round::with_deck("Tom", deck);
    round.deal_initial().unwrap();

    let drawn = round.stand().unwrap();
    assert_eq!(drawn.len(), 2);
    assert_eq!(round.cards_remaining(), 1);

    let result = round.result().unwrap();
    assert_eq!(result.dealer_score, 15);
    assert_eq!(result.player_score, 19);
    assert_eq!(result.outcome, Outcome::PlayerWin);
}

#[test]
fn dealer_bust_is_a_player_win() {
    let deck = deck_from_draws(&[
        card(Suit::Hearts, Rank::Seven), // player
        card(Suit::Clubs, Rank::Ten),    // dealer up
        card(Suit::Diamonds, Rank::Five), // player
        card(Suit::Spades, Rank::Four),  // dealer hole (14)
        card(Suit::Clubs, Rank::King),   // dealer draw (24, bust)
    ]);
    let mut round = Round::with_deck("Tom", deck);
    round.deal_initial().unwrap();

    round.stand().unwrap();
    let result = round.result().unwrap();
    assert_eq!(result.dealer_score, 24);
    assert_eq!(result.outcome, Outcome::PlayerWin);
}

#[test]
fn equal_scores_tie() {
    let deck = deck_from_draws(&[
        card(Suit::Hearts, Rank::Ten),  // player
        card(Suit::Clubs, Rank::Ten),   // dealer up
        card(Suit::Diamonds, Rank::Nine), // player
        card(Suit::Spades, Rank::Nine), // dealer hole
    ]);
    let mut round = Round::with_deck("Tom", deck);
    round.deal_initial().unwrap();

    let drawn = round.stand().unwrap();
    assert!(drawn.is_empty());
    assert_eq!(round.result().unwrap().outcome, Outcome::Tie);
}

#[test]
fn higher_dealer_score_wins() {
    let deck = deck_from_draws(&[
        card(Suit::Hearts, Rank::Ten),  // player
        card(Suit::Clubs, Rank::Ten),   // dealer up
        card(Suit::Diamonds, Rank::Five), // player
        card(Suit::Spades, Rank::Seven), // dealer hole
    ]);
    let mut round = Round::with_deck("Tom", deck);
    round.deal_initial().unwrap();

    round.stand().unwrap();
    let result = round.result().unwrap();
    assert_eq!(result.player_score, 15);
    assert_eq!(result.dealer_score, 17);
    assert_eq!(result.outcome, Outcome::DealerWin);
}

#[test]
fn hit_with_empty_deck_returns_error() {
    let deck = deck_from_draws(&[
        card(Suit::Hearts, Rank::Five),  // player
        card(Suit::Clubs, Rank::Nine),   // dealer up
        card(Suit::Spades, Rank::Six),   // player
        card(Suit::Diamonds, Rank::Seven), // dealer hole
    ]);
    let mut round = Round::with_deck("Tom", deck);
    round.deal_initial().unwrap();

    assert_eq!(round.hit().unwrap_err(), ActionError::NoCards);
    // The failed hit consumed nothing and the round is still open.
    assert_eq!(round.player_hand().len(), 2);
    assert_eq!(round.state(), RoundState::PlayerTurn);
}

#[test]
fn stand_with_empty_deck_while_dealer_must_draw_returns_error() {
    let deck = deck_from_draws(&[
        card(Suit::Hearts, Rank::Ten),  // player
        card(Suit::Clubs, Rank::Two),   // dealer up
        card(Suit::Diamonds, Rank::Nine), // player
        card(Suit::Spades, Rank::Three), // dealer hole (5, must draw)
    ]);
    let mut round = Round::with_deck("Tom", deck);
    round.deal_initial().unwrap();

    assert_eq!(round.stand().unwrap_err(), ActionError::NoCards);
    assert!(round.result().is_none());
}

#[test]
fn hands_are_append_only_and_rescored() {
    let mut hand = twentyone::Hand::new();
    assert!(hand.is_empty());
    assert_eq!(hand.score(), 0);

    hand.add_card(card(Suit::Spades, Rank::Ace));
    assert_eq!(hand.score(), 11);
    assert!(!hand.is_bust());

    hand.add_card(card(Suit::Hearts, Rank::King));
    assert_eq!(hand.score(), 21);

    hand.add_card(card(Suit::Clubs, Rank::Ace));
    assert_eq!(hand.score(), 12);
    assert_eq!(hand.len(), 3);
    assert_eq!(hand.first_card(), Some(&card(Suit::Spades, Rank::Ace)));
}
