use core::fmt;
use std::fmt::Display;

use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};

/// The four concrete colors. Declaration order is significant: it breaks ties
/// when the bot picks a color for a wild card.
#[derive(
    Clone, Copy, Debug, Display, EnumString, EnumCountMacro, EnumIter, PartialEq, Eq, Hash,
)]
#[strum(ascii_case_insensitive)]
pub enum CardColor {
    Red,
    Blue,
    Green,
    Yellow,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardValue {
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

impl CardValue {
    pub fn is_wild(&self) -> bool {
        matches!(self, CardValue::Wild | CardValue::WildDrawFour)
    }
}

impl Display for CardValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardValue::Number(number) => write!(f, "{number}"),
            CardValue::Skip => write!(f, "Skip"),
            CardValue::Reverse => write!(f, "Reverse"),
            CardValue::DrawTwo => write!(f, "DrawTwo"),
            CardValue::Wild => write!(f, "Wild"),
            CardValue::WildDrawFour => write!(f, "WildDrawFour"),
        }
    }
}

/// A single card. Wild cards carry no color while in a hand or the deck and
/// get one assigned at the moment they are played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Card {
    pub color: Option<CardColor>,
    pub value: CardValue,
}

impl Card {
    pub fn colored(color: CardColor, value: CardValue) -> Self {
        Self {
            color: Some(color),
            value,
        }
    }

    pub fn number(color: CardColor, number: u8) -> Self {
        Self::colored(color, CardValue::Number(number))
    }

    pub fn wild() -> Self {
        Self {
            color: None,
            value: CardValue::Wild,
        }
    }

    pub fn wild_draw_four() -> Self {
        Self {
            color: None,
            value: CardValue::WildDrawFour,
        }
    }

    pub fn is_wild(&self) -> bool {
        self.value.is_wild()
    }

    /// Returns this card with `color` assigned, used when a wild is played.
    pub fn with_color(self, color: CardColor) -> Self {
        Self {
            color: Some(color),
            ..self
        }
    }

    /// Whether this card may be played on top of `top`: same color, same value
    /// or any wild.
    pub fn can_be_played_on(&self, top: &Card) -> bool {
        if self.is_wild() {
            return true;
        }
        let same_color = self.color.is_some() && self.color == top.color;
        same_color || self.value == top.value
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.color {
            Some(color) => write!(f, "{} {}", color, self.value),
            None => write!(f, "{}", self.value),
        }
    }
}
