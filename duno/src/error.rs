use std::fmt::Debug;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum UnoError {
    #[error("No colored card left to open the discard pile")]
    NoStartingCard,
    #[error("Card index {0} is not a legal move")]
    IllegalCardIndex(usize),
    #[error("Wild card was played without a color")]
    UncoloredWild,
    #[error("The match is already finished")]
    MatchFinished,
    #[error("No more input available")]
    InputClosed,
    #[error("Input error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = UnoError> = std::result::Result<T, E>;
