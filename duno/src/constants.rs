use strum::EnumCount;

use crate::card::CardColor;

pub(crate) const NUMBER_CARDS_PER_COLOR: &[u8] = &[1, 2, 3, 4, 5, 6, 7, 8, 9];
pub(crate) const SKIP_CARDS_PER_COLOR: u8 = 1;
pub(crate) const DRAW_TWO_CARDS_PER_COLOR: u8 = 1;

pub(crate) const NUMBER_CARDS_IN_DECK: u8 = (NUMBER_CARDS_PER_COLOR.len() * CardColor::COUNT) as u8;
pub(crate) const SKIP_CARDS_IN_DECK: u8 = SKIP_CARDS_PER_COLOR * CardColor::COUNT as u8;
pub(crate) const DRAW_TWO_CARDS_IN_DECK: u8 = DRAW_TWO_CARDS_PER_COLOR * CardColor::COUNT as u8;

pub(crate) const WILD_CARDS_IN_DECK: u8 = 4;
pub(crate) const WILD_DRAW_FOUR_CARDS_IN_DECK: u8 = 4;

pub const TOTAL_CARDS_IN_DECK: u8 = NUMBER_CARDS_IN_DECK
    + SKIP_CARDS_IN_DECK
    + DRAW_TWO_CARDS_IN_DECK
    + WILD_CARDS_IN_DECK
    + WILD_DRAW_FOUR_CARDS_IN_DECK;

pub const STARTING_HAND_SIZE: usize = 7;
pub const DRAW_TWO_PENALTY: usize = 2;
pub const WILD_DRAW_FOUR_PENALTY: usize = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_card_count_constants() {
        assert_eq!(NUMBER_CARDS_PER_COLOR.len(), 9);
        assert_eq!(NUMBER_CARDS_IN_DECK, 36);

        assert_eq!(SKIP_CARDS_IN_DECK, 4);

        assert_eq!(DRAW_TWO_CARDS_IN_DECK, 4);

        assert_eq!(TOTAL_CARDS_IN_DECK, 52);
    }
}
