use std::fmt;

use crate::core::Card;
use crate::history::{HandAction, HandHistory, HandResult, Session};
use crate::holdem::{Action, Street};

/// Returned instead of an export when there is nothing to export.
pub const NO_HANDS_MESSAGE: &str = "No hands to export in current session.";
/// Name printed on the table line of every hand.
pub const TABLE_NAME: &str = "Training Table";
/// Stack printed next to every seat. Stacks aren't tracked.
pub const SEAT_STACK: u32 = 1000;

/// Render a session as PokerStars style hand history text.
///
/// ```
/// use holdem_trainer::export::export_session_to_pokerstars;
/// use holdem_trainer::history::Session;
///
/// assert_eq!(
///     "No hands to export in current session.",
///     export_session_to_pokerstars(Some(&Session::new()))
/// );
/// ```
pub fn export_session_to_pokerstars(session: Option<&Session>) -> String {
    match session {
        Some(session) if !session.is_empty() => session
            .hands
            .iter()
            .map(|hand| PokerStarsHand(hand).to_string())
            .collect(),
        _ => NO_HANDS_MESSAGE.to_string(),
    }
}

/// One hand in PokerStars format, followed by a blank line.
pub struct PokerStarsHand<'a>(pub &'a HandHistory);

impl fmt::Display for PokerStarsHand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hand = self.0;
        writeln!(
            f,
            "PokerStars Hand #{}: Hold'em No Limit (${}/${}) - {} ET",
            hand.hand_id,
            hand.blinds.small_blind,
            hand.blinds.big_blind,
            hand.timestamp.format("%Y-%m-%d %H:%M:%S")
        )?;
        writeln!(f, "Table '{TABLE_NAME}' 6-max Seat #1 is the button")?;
        for (idx, player) in hand.players.iter().enumerate() {
            writeln!(f, "Seat {}: {} (${SEAT_STACK} in chips)", idx + 1, player.name)?;
        }
        if let Some(sb) = hand.player_at("SB") {
            writeln!(f, "{}: posts small blind ${}", sb.name, hand.blinds.small_blind)?;
        }
        if let Some(bb) = hand.player_at("BB") {
            writeln!(f, "{}: posts big blind ${}", bb.name, hand.blinds.big_blind)?;
        }

        writeln!(f, "*** HOLE CARDS ***")?;
        if let Some(hero) = hand.hero() {
            writeln!(f, "Dealt to {} [{}]", hero.name, cards(&hero.cards))?;
        }
        write_actions(f, hand, Street::Preflop)?;

        let mut board: Vec<Card> = vec![];
        if let Some(flop) = hand.community.flop {
            board.extend_from_slice(&flop);
            writeln!(f, "*** FLOP *** [{}]", cards(&board))?;
            write_actions(f, hand, Street::Flop)?;
        }
        if let Some(turn) = hand.community.turn {
            board.push(turn);
            writeln!(f, "*** TURN *** [{}]", cards(&board))?;
            write_actions(f, hand, Street::Turn)?;
        }
        if let Some(river) = hand.community.river {
            board.push(river);
            writeln!(f, "*** RIVER *** [{}]", cards(&board))?;
            write_actions(f, hand, Street::River)?;
        }

        let showdown = hand.reached_showdown();
        if showdown {
            writeln!(f, "*** SHOW DOWN ***")?;
            writeln!(f, "Board [{}]", cards(&board))?;
            for player in &hand.players {
                writeln!(f, "{}: shows [{}]", player.name, cards(&player.cards))?;
            }
        }

        writeln!(f, "*** SUMMARY ***")?;
        writeln!(f, "Total pot ${}", hand.pot)?;
        if showdown {
            writeln!(f, "Board [{}]", cards(&board))?;
        }
        let hero_name = hand.hero().map(|h| h.name.as_str()).unwrap_or("Hero");
        match (hand.result, hand.hero_won) {
            (HandResult::Folded, _) => writeln!(f, "{hero_name} folded")?,
            (HandResult::Completed, Some(true)) => writeln!(f, "{hero_name} wins the pot")?,
            (HandResult::Completed, Some(false)) => writeln!(f, "{hero_name} loses the hand")?,
            (HandResult::Completed, None) => {}
        }
        write!(f, "\n\n")
    }
}

fn write_actions(f: &mut fmt::Formatter<'_>, hand: &HandHistory, street: Street) -> fmt::Result {
    for action in hand.actions_on(street) {
        writeln!(f, "{}: {}", action.player, describe(action))?;
    }
    Ok(())
}

/// Preflop raises read as raises. After the flop the first aggression on a
/// street is a bet.
fn describe(action: &HandAction) -> String {
    match action.action {
        Action::Check => "checks".to_string(),
        Action::Fold => "folds".to_string(),
        Action::Call => format!("calls ${}", action.amount),
        Action::Raise if action.street == Street::Preflop => format!("raises ${}", action.amount),
        Action::Raise => format!("bets ${}", action.amount),
    }
}

fn cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_pokerstars)
        .collect::<Vec<_>>()
        .join(" ")
}
