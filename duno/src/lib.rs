//! Two-player UNO: cards, deck, hands, a greedy bot and the turn engine.

pub mod card;
pub mod constants;
pub mod deck;
pub mod error;
pub mod hand;
pub mod input;
pub mod player;
pub mod turn;
pub mod uno;
