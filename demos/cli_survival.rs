//! CLI Survival Blackjack example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use survival_blackjack::{Card, Deck, GameState, Suit, TurnStage, score_hand};

fn main() {
    println!("Survival Blackjack CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let deck = Deck::new(seed);
    let mut draw = deck.cursor();

    let mut game = GameState::new().reduce(TurnStage::Start, &mut draw);
    println!("Resources: {}", format_hand(&game.resources));
    println!("Win rounds to survive. The deck is not reshuffled; when it runs out, the totals stand.");

    loop {
        if draw.remaining() < 4 {
            println!("The deck is spent.");
            game = game.set_stage(TurnStage::Endgame);
            break;
        }

        game = game.reduce(TurnStage::PlayerTurn, &mut draw);
        print_table(&game);

        // Player hits until they stand, bust, or the deck runs out.
        loop {
            let total = score_hand(&game.player_hand);
            if total > 21 {
                println!("Bust at {total}.");
                break;
            }

            match prompt_line("Hit or stand? (h/s/q): ").as_str() {
                "h" | "hit" => {
                    game = game.reduce(TurnStage::Hit, &mut draw);
                    if game.stage == TurnStage::Endgame {
                        println!("The deck ran out mid-hit.");
                        break;
                    }
                    println!(
                        "You drew: {} ({})",
                        format_hand(&game.player_hand),
                        score_hand(&game.player_hand)
                    );
                }
                "s" | "stand" => break,
                "q" | "quit" => {
                    println!("Goodbye.");
                    return;
                }
                _ => println!("Please answer h, s, or q."),
            }
        }

        if game.stage == TurnStage::Endgame {
            break;
        }

        game = game.reduce(TurnStage::DealerTurn, &mut draw);
        println!(
            "Dealer: {} ({})",
            format_hand(&game.dealer_hand),
            score_hand(&game.dealer_hand)
        );

        game = game.reduce(TurnStage::Score, &mut draw);
        println!(
            "Score - you {} : {} dealer (losing streak {})",
            game.player_score, game.dealer_score, game.losing_streak
        );
        println!();
    }

    println!(
        "Final score - you {} : {} dealer",
        game.player_score, game.dealer_score
    );
    if game.player_score > game.dealer_score {
        println!("You survived.");
    } else {
        println!("The odds caught up with you.");
    }
}

fn print_table(game: &GameState) {
    println!(
        "Your hand: {} ({})",
        format_hand(&game.player_hand),
        score_hand(&game.player_hand)
    );
    println!("Dealer shows: {}", format_hand(&game.dealer_hand[..1]));
}

fn format_hand(cards: &[Card]) -> String {
    let names: Vec<String> = cards.iter().map(format_card).collect();
    names.join(", ")
}

fn format_card(card: &Card) -> String {
    let suit = match card.suit {
        Suit::Clubs => "♣",
        Suit::Diamonds => "♦",
        Suit::Spades => "♠",
        Suit::Hearts => "♥",
        Suit::Joker => return "Joker".to_string(),
    };
    let rank = match card.rank {
        1 => "A".to_string(),
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        n => n.to_string(),
    };
    format!("{rank}{suit}")
}

fn prompt_line(message: &str) -> String {
    print!("{message}");
    let _ = io::stdout().flush();
    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return "q".to_string();
    }
    input.trim().to_lowercase()
}
