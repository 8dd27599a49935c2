use strum::IntoEnumIterator;

use crate::card::{Card, CardColor};

/// Cards held by a player, kept in the order they were received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand(pub(crate) Vec<Card>);

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self(cards)
    }

    pub fn push(&mut self, card: Card) {
        self.0.push(card);
    }

    /// Removes the card at `index`, or returns `None` if it is out of bounds.
    pub fn play_at(&mut self, index: usize) -> Option<Card> {
        (index < self.0.len()).then(|| self.0.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.0.get(index)
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.0.iter()
    }

    /// Indices (0-based, hand order) of every card playable on `top`.
    pub fn legal_indices(&self, top: &Card) -> Vec<usize> {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, card)| card.can_be_played_on(top))
            .map(|(index, _)| index)
            .collect()
    }

    /// One display string per card, in hand order. The iterator can be cloned
    /// to walk the hand again.
    pub fn display(&self) -> impl Iterator<Item = String> + Clone + '_ {
        self.0.iter().map(|card| card.to_string())
    }

    pub fn count_color(&self, color: CardColor) -> usize {
        self.0
            .iter()
            .filter(|card| card.color == Some(color))
            .count()
    }

    /// The color held most often. Ties go to the color declared first in
    /// [`CardColor`], so an all-wild hand yields `Red`.
    pub fn dominant_color(&self) -> CardColor {
        let mut best = CardColor::Red;
        let mut best_count = 0;
        for color in CardColor::iter() {
            let count = self.count_color(color);
            if count > best_count {
                best = color;
                best_count = count;
            }
        }
        best
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::CardValue;

    #[test]
    fn play_at_removes_in_bounds_card() {
        let mut hand = Hand::from_cards(vec![
            Card::number(CardColor::Red, 1),
            Card::number(CardColor::Blue, 2),
            Card::number(CardColor::Green, 3),
        ]);

        assert_eq!(hand.play_at(1), Some(Card::number(CardColor::Blue, 2)));
        assert_eq!(
            hand.cards(),
            &[
                Card::number(CardColor::Red, 1),
                Card::number(CardColor::Green, 3)
            ]
        );
    }

    #[test]
    fn play_at_out_of_bounds_returns_none() {
        let mut hand = Hand::from_cards(vec![Card::wild()]);
        assert_eq!(hand.play_at(1), None);
        assert_eq!(hand.len(), 1);
    }

    #[test]
    fn display_is_restartable_and_ordered() {
        let hand = Hand::from_cards(vec![
            Card::number(CardColor::Yellow, 8),
            Card::wild(),
            Card::colored(CardColor::Red, CardValue::Skip),
        ]);

        let display = hand.display();
        let first: Vec<String> = display.clone().collect();
        let second: Vec<String> = display.collect();

        assert_eq!(first, vec!["Yellow 8", "Wild", "Red Skip"]);
        assert_eq!(first, second);
    }

    #[test]
    fn legal_indices_follow_hand_order() {
        let hand = Hand::from_cards(vec![
            Card::number(CardColor::Blue, 4),
            Card::number(CardColor::Red, 9),
            Card::wild_draw_four(),
            Card::number(CardColor::Green, 3),
        ]);

        let top = Card::number(CardColor::Red, 3);
        assert_eq!(hand.legal_indices(&top), vec![1, 2, 3]);
    }

    #[test]
    fn dominant_color_picks_highest_count() {
        let hand = Hand::from_cards(vec![
            Card::number(CardColor::Blue, 1),
            Card::number(CardColor::Red, 2),
            Card::number(CardColor::Red, 3),
            Card::number(CardColor::Red, 4),
        ]);
        assert_eq!(hand.dominant_color(), CardColor::Red);

        let hand = Hand::from_cards(vec![
            Card::number(CardColor::Yellow, 1),
            Card::number(CardColor::Yellow, 2),
            Card::number(CardColor::Green, 3),
        ]);
        assert_eq!(hand.dominant_color(), CardColor::Yellow);
    }

    #[test]
    fn dominant_color_breaks_ties_in_declaration_order() {
        let hand = Hand::from_cards(vec![
            Card::number(CardColor::Blue, 1),
            Card::number(CardColor::Blue, 2),
            Card::number(CardColor::Red, 3),
            Card::number(CardColor::Red, 4),
        ]);
        assert_eq!(hand.dominant_color(), CardColor::Red);

        let hand = Hand::from_cards(vec![
            Card::number(CardColor::Yellow, 1),
            Card::number(CardColor::Green, 2),
        ]);
        assert_eq!(hand.dominant_color(), CardColor::Green);
    }

    #[test]
    fn dominant_color_of_wild_only_hand_is_red() {
        let hand = Hand::from_cards(vec![Card::wild(), Card::wild_draw_four()]);
        assert_eq!(hand.dominant_color(), CardColor::Red);
    }
}
