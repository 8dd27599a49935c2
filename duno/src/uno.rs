use rand::{thread_rng, Rng};
use tracing::{debug, info};

use crate::card::{Card, CardValue};
use crate::constants::{DRAW_TWO_PENALTY, STARTING_HAND_SIZE, WILD_DRAW_FOUR_PENALTY};
use crate::deck::Deck;
use crate::error::{Result, UnoError};
use crate::input::PlayerInput;
use crate::player::Player;
use crate::turn::{PlayTurnResult, TurnActionResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    InProgress,
    Finished { winner: usize },
}

/// A two-player match: the draw pile, both players, the discard-top and
/// whose turn it is.
#[derive(Debug)]
pub struct Uno {
    deck: Deck,
    players: [Player; 2],
    discard_top: Card,
    active_index: usize,
    state: MatchState,
}

impl Uno {
    /// Starts a match on a freshly shuffled deck.
    pub fn new(players: [Player; 2]) -> Result<Self> {
        Self::new_with_rng(players, &mut thread_rng())
    }

    pub fn new_with_rng<R: Rng + ?Sized>(players: [Player; 2], rng: &mut R) -> Result<Self> {
        let mut deck = Deck::new();
        deck.shuffle_with(rng);
        Self::new_with_deck(players, deck)
    }

    /// Deals seven cards to each player from `deck` as given (no shuffle) and
    /// opens the discard pile with the topmost non-wild card.
    pub fn new_with_deck(mut players: [Player; 2], mut deck: Deck) -> Result<Self> {
        for player in &mut players {
            player.draw_n(&mut deck, STARTING_HAND_SIZE);
        }

        let discard_top = deck
            .draw_starting_card()
            .ok_or(UnoError::NoStartingCard)?;
        debug!(%discard_top, remaining = deck.cards_count(), "opened discard pile");

        Ok(Self::from_parts(deck, players, discard_top))
    }

    /// Assembles a match from existing state without dealing. The first
    /// player moves first. A wild `discard_top` must already carry a color.
    pub fn from_parts(deck: Deck, players: [Player; 2], discard_top: Card) -> Self {
        let mut uno = Uno {
            deck,
            players,
            discard_top,
            active_index: 0,
            state: MatchState::InProgress,
        };
        uno.check_winner();
        uno
    }

    /// Plays one turn for the active player: a card if they have a legal one,
    /// otherwise a single draw. Then hands the turn over (unless a Skip was
    /// played) and checks for a winner.
    pub fn take_turn(&mut self, input: &mut dyn PlayerInput) -> Result<PlayTurnResult> {
        if self.is_finished() {
            return Err(UnoError::MatchFinished);
        }

        let player_index = self.active_index;
        let played = self.players[player_index].decide_move(&self.discard_top, input)?;

        let (turn_action_result, skip_next) = match played {
            Some(card) => {
                info!(player = %self.players[player_index].name(), %card, "played card");
                self.resolve_card(player_index, card)?
            }
            None => (self.draw_when_stuck(player_index), false),
        };

        if skip_next {
            debug!(player = %self.players[player_index].name(), "opponent skipped");
        } else {
            self.advance_turn();
        }

        let won = self.check_winner() == Some(player_index);

        Ok(PlayTurnResult {
            player_index,
            played,
            turn_action_result,
            won,
        })
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, MatchState::Finished { .. })
    }

    /// The deck is empty and neither player can play on the discard-top, so
    /// no further turn can change anything.
    pub fn is_stalemate(&self) -> bool {
        !self.is_finished()
            && self.deck.is_empty()
            && self
                .players
                .iter()
                .all(|player| player.hand.legal_indices(&self.discard_top).is_empty())
    }

    pub fn winner_index(&self) -> Option<usize> {
        match self.state {
            MatchState::Finished { winner } => Some(winner),
            MatchState::InProgress => None,
        }
    }

    pub fn winner(&self) -> Option<&Player> {
        self.winner_index().map(|index| &self.players[index])
    }

    pub fn discard_top(&self) -> &Card {
        &self.discard_top
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn active_player(&self) -> &Player {
        &self.players[self.active_index]
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    pub fn player_mut(&mut self, index: usize) -> Option<&mut Player> {
        self.players.get_mut(index)
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Applies the effect of `card` and makes it the discard-top. Returns the
    /// result and whether the opponent is skipped.
    fn resolve_card(
        &mut self,
        player_index: usize,
        card: Card,
    ) -> Result<(TurnActionResult, bool)> {
        let opponent_index = 1 - player_index;

        let resolved = match card.value {
            CardValue::Number(_) => (TurnActionResult::Neutral, false),
            CardValue::Skip => (TurnActionResult::Skip, true),
            CardValue::Reverse => (TurnActionResult::Reverse, false),
            CardValue::DrawTwo => {
                let drawn = self.draw_cards_to_player(opponent_index, DRAW_TWO_PENALTY);
                (TurnActionResult::DrawTwo { drawn }, false)
            }
            CardValue::Wild => {
                let color = card.color.ok_or(UnoError::UncoloredWild)?;
                info!(%color, "wild color chosen");
                (TurnActionResult::Wild { color }, false)
            }
            CardValue::WildDrawFour => {
                let color = card.color.ok_or(UnoError::UncoloredWild)?;
                info!(%color, "wild color chosen");
                let drawn = self.draw_cards_to_player(opponent_index, WILD_DRAW_FOUR_PENALTY);
                (TurnActionResult::WildDrawFour { color, drawn }, false)
            }
        };

        self.discard_top = card;
        Ok(resolved)
    }

    fn draw_when_stuck(&mut self, player_index: usize) -> TurnActionResult {
        let player = &mut self.players[player_index];
        let card = player.draw_one(&mut self.deck);
        let playable = card.map_or(false, |card| card.can_be_played_on(&self.discard_top));
        info!(player = %player.name(), drawn = card.is_some(), playable, "no legal card, drew");
        TurnActionResult::SelfDraw { card, playable }
    }

    fn draw_cards_to_player(&mut self, player_index: usize, count: usize) -> usize {
        let drawn = self.players[player_index].draw_n(&mut self.deck, count);
        info!(player = %self.players[player_index].name(), drawn, "penalty draw");
        drawn
    }

    fn advance_turn(&mut self) {
        self.active_index = 1 - self.active_index;
    }

    fn check_winner(&mut self) -> Option<usize> {
        if let Some(winner) = self.players.iter().position(|player| player.hand.is_empty()) {
            if !self.is_finished() {
                info!(winner = %self.players[winner].name(), "match finished");
            }
            self.state = MatchState::Finished { winner };
        }
        self.winner_index()
    }
}
