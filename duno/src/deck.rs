use rand::{seq::SliceRandom, thread_rng, Rng};
use strum::IntoEnumIterator;
use tracing::debug;

use crate::{
    card::{Card, CardColor, CardValue},
    constants::*,
};

/// The draw pile. The last element is the top of the pile.
#[derive(Debug, Clone)]
pub struct Deck(pub(crate) Vec<Card>);

impl Deck {
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(TOTAL_CARDS_IN_DECK.into());

        // Colored Cards
        for color in CardColor::iter() {
            // Number Cards
            for number in NUMBER_CARDS_PER_COLOR {
                cards.push(Card::number(color, *number));
            }

            // Skip Cards
            for _ in 0..SKIP_CARDS_PER_COLOR {
                cards.push(Card::colored(color, CardValue::Skip));
            }

            // Draw Two Cards
            for _ in 0..DRAW_TWO_CARDS_PER_COLOR {
                cards.push(Card::colored(color, CardValue::DrawTwo));
            }
        }

        for _ in 0..WILD_CARDS_IN_DECK {
            cards.push(Card::wild());
        }

        for _ in 0..WILD_DRAW_FOUR_CARDS_IN_DECK {
            cards.push(Card::wild_draw_four());
        }

        Self(cards)
    }

    /// Builds a deck from an explicit pile; the last card is drawn first.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self(cards)
    }

    pub fn shuffle(&mut self) {
        let mut rng = thread_rng();
        self.shuffle_with(&mut rng);
    }

    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.0.shuffle(rng);
        debug!(cards = self.0.len(), "shuffled deck");
    }

    /// Pops the top card. An exhausted deck yields `None`.
    pub fn draw(&mut self) -> Option<Card> {
        self.0.pop()
    }

    /// Removes the topmost non-wild card to open the discard pile. Wild cards
    /// above it stay in the deck.
    pub fn draw_starting_card(&mut self) -> Option<Card> {
        self.0
            .iter()
            .rposition(|card| !card.is_wild())
            .map(|pos| self.0.remove(pos))
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    pub fn cards_count(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
