//! Interactive single-round blackjack CLI.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{Card, Hand, Outcome, Round, RoundState, Suit};

fn main() -> ExitCode {
    println!("Blackjack: one round against the dealer (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let name = {
        let input = prompt_line("Your name: ");
        if input.is_empty() {
            "Player".to_string()
        } else {
            input
        }
    };

    let mut round = Round::new(name.clone(), seed);
    if let Err(err) = round.deal_initial() {
        println!("Deal error: {err}");
        return ExitCode::FAILURE;
    }

    // Opening deal alternates player/dealer; announce in that order, keeping
    // the dealer's cards hidden.
    for card in round.player_hand().cards() {
        println!("{name} got new card: {}", format_card(card));
        println!("Dealer got a new card.");
    }

    while round.state() == RoundState::PlayerTurn {
        print_table(&round);

        match prompt_line("Deal a new card? (y/n): ").as_str() {
            "y" => match round.hit() {
                Ok(card) => {
                    println!("{name} got new card: {}", format_card(&card));
                    if round.state() == RoundState::Over {
                        println!(
                            "{name} busted with {} points! Dealer wins.",
                            round.player_score()
                        );
                    }
                }
                Err(err) => {
                    println!("Deal error: {err}");
                    return ExitCode::FAILURE;
                }
            },
            "n" => match round.stand() {
                Ok(drawn) => {
                    for _ in &drawn {
                        println!("Dealer got a new card.");
                    }
                    print_showdown(&round);
                }
                Err(err) => {
                    println!("Dealer error: {err}");
                    return ExitCode::FAILURE;
                }
            },
            "q" | "quit" => return ExitCode::SUCCESS,
            _ => println!("wrong input. Expected y or n."),
        }
    }

    ExitCode::SUCCESS
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_table(round: &Round) {
    println!(
        "\n{} has: {} | value {}",
        round.player_name(),
        format_hand(round.player_hand()),
        round.player_score()
    );

    if let Some(card) = round.dealer_up_card() {
        let hidden = round.dealer_hand().len() - 1;
        println!(
            "Dealer shows one card: {} (points {}), {hidden} hidden\n",
            format_card(card),
            card.points()
        );
    }
}

fn print_showdown(round: &Round) {
    println!(
        "\nDealer has: {} | value {}",
        format_hand(round.dealer_hand()),
        round.dealer_score()
    );
    println!(
        "{} has: {} | value {}",
        round.player_name(),
        format_hand(round.player_hand()),
        round.player_score()
    );

    if let Some(result) = round.result() {
        match result.outcome {
            Outcome::PlayerWin => println!("{} wins!", round.player_name()),
            Outcome::DealerWin => println!("Dealer wins!"),
            Outcome::Tie => println!("It's a tie!"),
            Outcome::PlayerBust => println!("Dealer wins!"),
        }
    }
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = card.rank.symbol();
    let colored_suit = colorize(suit, color_code);
    format!("{rank}{colored_suit}")
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
