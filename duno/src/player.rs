use tracing::{debug, warn};

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{Result, UnoError};
use crate::hand::Hand;
use crate::input::PlayerInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    /// Moves come from a [`PlayerInput`].
    Human,
    /// Moves come from the greedy policy in [`Player::choose_move`].
    Bot,
}

#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    pub hand: Hand,
    kind: PlayerKind,
}

impl Player {
    pub fn new(name: impl Into<String>, kind: PlayerKind) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
            kind,
        }
    }

    pub fn human(name: impl Into<String>) -> Self {
        Self::new(name, PlayerKind::Human)
    }

    pub fn bot(name: impl Into<String>) -> Self {
        Self::new(name, PlayerKind::Bot)
    }

    pub fn with_hand(mut self, cards: Vec<Card>) -> Self {
        self.hand = Hand::from_cards(cards);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    pub fn is_bot(&self) -> bool {
        self.kind == PlayerKind::Bot
    }

    pub fn cards_count(&self) -> usize {
        self.hand.len()
    }

    /// Draws up to `count` cards, stopping early if the deck runs out.
    /// Returns how many cards were actually added.
    pub fn draw_n(&mut self, deck: &mut Deck, count: usize) -> usize {
        let mut drawn = 0;
        for _ in 0..count {
            match deck.draw() {
                Some(card) => {
                    self.hand.push(card);
                    drawn += 1;
                }
                None => break,
            }
        }
        debug!(player = %self.name, requested = count, drawn, "drew cards");
        drawn
    }

    /// Draws a single card and returns a copy of it.
    pub fn draw_one(&mut self, deck: &mut Deck) -> Option<Card> {
        let card = deck.draw()?;
        self.hand.push(card);
        Some(card)
    }

    pub fn play_at(&mut self, index: usize) -> Option<Card> {
        self.hand.play_at(index)
    }

    /// The bot policy: play the first legal wild (colored after the hand's
    /// dominant color), otherwise the first legal card. `None` means the bot
    /// has to draw.
    pub fn choose_move(&mut self, discard_top: &Card) -> Option<Card> {
        let legal = self.hand.legal_indices(discard_top);

        let wild_index = legal
            .iter()
            .copied()
            .find(|index| self.hand.0[*index].is_wild());

        match wild_index {
            Some(index) => {
                let color = self.hand.dominant_color();
                debug!(player = %self.name, %color, "bot picked a color");
                self.hand.play_at(index).map(|card| card.with_color(color))
            }
            None => {
                let index = *legal.first()?;
                self.hand.play_at(index)
            }
        }
    }

    /// Decides this player's move against `discard_top` and removes the card
    /// from the hand. Wild cards come back with their color already set.
    pub fn decide_move(
        &mut self,
        discard_top: &Card,
        input: &mut dyn PlayerInput,
    ) -> Result<Option<Card>> {
        match self.kind {
            PlayerKind::Bot => Ok(self.choose_move(discard_top)),
            PlayerKind::Human => {
                let legal = self.hand.legal_indices(discard_top);
                if legal.is_empty() {
                    return Ok(None);
                }

                let index = input.choose_card(self, discard_top, &legal)?;
                let card = match self.hand.get(index) {
                    Some(card) if legal.contains(&index) => *card,
                    _ => {
                        warn!(player = %self.name, index, "rejected illegal card index");
                        return Err(UnoError::IllegalCardIndex(index));
                    }
                };

                let card = if card.is_wild() {
                    card.with_color(input.choose_color(self, &card)?)
                } else {
                    card
                };

                self.hand.play_at(index);
                Ok(Some(card))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{CardColor, CardValue};
    use crate::input::ScriptedInput;

    #[test]
    fn draw_n_stops_when_deck_runs_out() {
        let mut deck = Deck::from_cards(vec![
            Card::number(CardColor::Red, 1),
            Card::number(CardColor::Red, 2),
        ]);
        let mut player = Player::human("Player 1");

        assert_eq!(player.draw_n(&mut deck, 4), 2);
        assert_eq!(player.cards_count(), 2);
        assert!(deck.is_empty());
        assert_eq!(
            player.hand.cards(),
            &[
                Card::number(CardColor::Red, 2),
                Card::number(CardColor::Red, 1)
            ]
        );
    }

    #[test]
    fn bot_plays_first_legal_card_without_wilds() {
        let mut bot = Player::bot("Bot").with_hand(vec![
            Card::number(CardColor::Blue, 4),
            Card::number(CardColor::Red, 8),
            Card::number(CardColor::Red, 1),
        ]);

        let played = bot.choose_move(&Card::number(CardColor::Red, 3));

        assert_eq!(played, Some(Card::number(CardColor::Red, 8)));
        assert_eq!(bot.cards_count(), 2);
    }

    #[test]
    fn bot_prefers_wild_over_earlier_legal_card() {
        let mut bot = Player::bot("Bot").with_hand(vec![
            Card::number(CardColor::Red, 8),
            Card::number(CardColor::Blue, 1),
            Card::wild_draw_four(),
            Card::number(CardColor::Blue, 2),
            Card::number(CardColor::Blue, 6),
        ]);

        let played = bot.choose_move(&Card::number(CardColor::Red, 3));

        assert_eq!(
            played,
            Some(Card::wild_draw_four().with_color(CardColor::Blue))
        );
        assert_eq!(bot.cards_count(), 4);
    }

    #[test]
    fn bot_color_choice_prefers_majority_then_enumeration_order() {
        let top = Card::number(CardColor::Yellow, 9);

        let mut bot = Player::bot("Bot").with_hand(vec![
            Card::number(CardColor::Red, 1),
            Card::number(CardColor::Red, 2),
            Card::number(CardColor::Red, 3),
            Card::number(CardColor::Blue, 4),
            Card::wild(),
        ]);
        assert_eq!(bot.choose_move(&top).and_then(|c| c.color), Some(CardColor::Red));

        let mut bot = Player::bot("Bot").with_hand(vec![
            Card::number(CardColor::Blue, 1),
            Card::number(CardColor::Blue, 2),
            Card::number(CardColor::Red, 3),
            Card::number(CardColor::Red, 4),
            Card::wild(),
        ]);
        assert_eq!(bot.choose_move(&top).and_then(|c| c.color), Some(CardColor::Red));
    }

    #[test]
    fn bot_without_legal_card_must_draw() {
        let mut bot = Player::bot("Bot").with_hand(vec![
            Card::number(CardColor::Blue, 4),
            Card::colored(CardColor::Green, CardValue::Skip),
        ]);

        assert_eq!(bot.choose_move(&Card::number(CardColor::Red, 3)), None);
        assert_eq!(bot.cards_count(), 2);
    }

    #[test]
    fn human_move_uses_input_choice() {
        let mut human = Player::human("Alice").with_hand(vec![
            Card::number(CardColor::Red, 8),
            Card::number(CardColor::Blue, 3),
        ]);
        let mut input = ScriptedInput::new().with_cards([1]);

        let played = human
            .decide_move(&Card::number(CardColor::Red, 3), &mut input)
            .unwrap();

        assert_eq!(played, Some(Card::number(CardColor::Blue, 3)));
        assert_eq!(human.hand.cards(), &[Card::number(CardColor::Red, 8)]);
    }

    #[test]
    fn human_wild_gets_color_from_input() {
        let mut human = Player::human("Alice").with_hand(vec![Card::wild()]);
        let mut input = ScriptedInput::new()
            .with_cards([0])
            .with_colors([CardColor::Yellow]);

        let played = human
            .decide_move(&Card::number(CardColor::Red, 3), &mut input)
            .unwrap();

        assert_eq!(played, Some(Card::wild().with_color(CardColor::Yellow)));
        assert!(human.hand.is_empty());
    }

    #[test]
    fn human_illegal_index_is_rejected_without_changing_hand() {
        let mut human = Player::human("Alice").with_hand(vec![
            Card::number(CardColor::Blue, 4),
            Card::number(CardColor::Red, 8),
        ]);
        let mut input = ScriptedInput::new().with_cards([0]);

        let result = human.decide_move(&Card::number(CardColor::Red, 3), &mut input);

        assert!(matches!(result, Err(UnoError::IllegalCardIndex(0))));
        assert_eq!(human.cards_count(), 2);
    }

    #[test]
    fn human_without_legal_card_is_not_asked() {
        let mut human = Player::human("Alice").with_hand(vec![Card::number(CardColor::Blue, 4)]);
        let mut input = ScriptedInput::new();

        let played = human
            .decide_move(&Card::number(CardColor::Red, 3), &mut input)
            .unwrap();

        assert_eq!(played, None);
    }
}
