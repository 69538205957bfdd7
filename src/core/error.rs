use thiserror::Error;

/// This is the core error type for the trainer. It uses `thiserror` to
/// provide readable error messages.
///
/// `DeckExhausted` means a caller asked for more cards than the hand can
/// structurally need. It is a sequencing bug and must not be retried.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum TrainerError {
    #[error("Unable to parse value")]
    UnexpectedValueChar,
    #[error("Unable to parse suit")]
    UnexpectedSuitChar,
    #[error("Error reading characters while parsing")]
    TooFewChars,
    #[error("Extra un-used characters found after parsing")]
    UnparsedCharsRemaining,
    #[error("Deck exhausted: needed {needed} cards but only {remaining} remain")]
    DeckExhausted { needed: usize, remaining: usize },
    #[error("A table can't be dealt with {0} seats")]
    InvalidSeatCount(usize),
    #[error("Hero seat {hero_seat} doesn't exist at a table of {num_players}")]
    InvalidHeroSeat { hero_seat: usize, num_players: usize },
    #[error("Big blind of {0} is outside the playable range")]
    InvalidBigBlind(u32),
    #[error("No hand is waiting on a hero action")]
    NoHandInProgress,
}
