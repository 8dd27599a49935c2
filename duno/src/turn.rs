use crate::card::{Card, CardColor};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnActionResult {
    /// A card without effect was played.
    Neutral,
    /// The opponent is skipped; the same player moves again.
    Skip,
    /// Accepted but without effect in a two-player match.
    Reverse,
    /// The opponent drew `drawn` cards (at most two).
    DrawTwo { drawn: usize },
    Wild { color: CardColor },
    /// The opponent drew `drawn` cards (at most four).
    WildDrawFour { color: CardColor, drawn: usize },
    /// No legal card; the player drew `card` (if the deck had one).
    SelfDraw { card: Option<Card>, playable: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayTurnResult {
    /// Index of the player who took the turn.
    pub player_index: usize,
    /// The card played this turn, with its wild color assigned.
    pub played: Option<Card>,
    pub turn_action_result: TurnActionResult,
    pub won: bool,
}
