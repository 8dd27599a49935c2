//! The seam between the engine and whoever answers for a human player.
//!
//! The engine never reads a terminal itself; it asks a [`PlayerInput`] which
//! card to play and which color to name after a wild. Re-prompting on bad
//! input is the implementor's job.

use std::collections::VecDeque;

use crate::card::{Card, CardColor};
use crate::error::{Result, UnoError};
use crate::player::Player;

pub trait PlayerInput {
    /// Picks one of `legal` (0-based hand indices, never empty) for `player`
    /// to play on `discard_top`.
    fn choose_card(
        &mut self,
        player: &Player,
        discard_top: &Card,
        legal: &[usize],
    ) -> Result<usize>;

    /// Names the color for a wild card `player` just played.
    fn choose_color(&mut self, player: &Player, played: &Card) -> Result<CardColor>;
}

/// Answers from a fixed queue of choices, for tests and replays.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    cards: VecDeque<usize>,
    colors: VecDeque<CardColor>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cards(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.cards.extend(indices);
        self
    }

    pub fn with_colors(mut self, colors: impl IntoIterator<Item = CardColor>) -> Self {
        self.colors.extend(colors);
        self
    }

    pub fn is_exhausted(&self) -> bool {
        self.cards.is_empty() && self.colors.is_empty()
    }
}

impl PlayerInput for ScriptedInput {
    fn choose_card(
        &mut self,
        _player: &Player,
        _discard_top: &Card,
        _legal: &[usize],
    ) -> Result<usize> {
        self.cards.pop_front().ok_or(UnoError::InputClosed)
    }

    fn choose_color(&mut self, _player: &Player, _played: &Card) -> Result<CardColor> {
        self.colors.pop_front().ok_or(UnoError::InputClosed)
    }
}
