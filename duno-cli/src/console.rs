use std::io::{BufRead, Write};
use std::str::FromStr;

use duno::{
    card::{Card, CardColor},
    error::{Result, UnoError},
    input::PlayerInput,
    player::Player,
    turn::{PlayTurnResult, TurnActionResult},
    uno::Uno,
};
use strum::IntoEnumIterator;
use tracing::debug;

use crate::GameMode;

const SEPARATOR: &str = "************************************************************";

/// Terminal front-end: prompts on `reader`, prints on `writer`.
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn prompt(&mut self, prompt: &str) -> Result<String> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(UnoError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    pub fn ask_mode(&mut self) -> Result<GameMode> {
        loop {
            let answer =
                self.prompt("Do you want to play against (1) another player or (2) the bot? ")?;
            match answer.to_lowercase().as_str() {
                "1" | "human" => return Ok(GameMode::Human),
                "2" | "bot" => return Ok(GameMode::Bot),
                _ => writeln!(self.writer, "Please enter 1 or 2.")?,
            }
        }
    }

    pub fn ask_name(&mut self) -> Result<String> {
        loop {
            let name = self.prompt("Enter your name: ")?;
            if !name.is_empty() {
                return Ok(name);
            }
            writeln!(self.writer, "The name must not be empty.")?;
        }
    }

    pub fn announce_turn(&mut self, uno: &Uno) -> Result<()> {
        writeln!(self.writer, "{SEPARATOR}")?;
        writeln!(self.writer, "It's {}'s turn.", uno.active_player().name())?;
        Ok(())
    }

    fn show_table(&mut self, player: &Player, discard_top: &Card) -> Result<()> {
        writeln!(self.writer, "Top card: {discard_top}")?;
        writeln!(self.writer, "{}, your cards are:", player.name())?;
        for (index, card) in player.hand.display().enumerate() {
            writeln!(self.writer, "{}: {}", index + 1, card)?;
        }
        Ok(())
    }

    pub fn report_turn(&mut self, uno: &Uno, result: &PlayTurnResult) -> Result<()> {
        let players = uno.players();
        let name = players[result.player_index].name();
        let opponent = players[1 - result.player_index].name();

        if let Some(card) = result.played {
            writeln!(self.writer, "{name} played {card}.")?;
        }

        match &result.turn_action_result {
            TurnActionResult::Neutral => {}
            TurnActionResult::Skip => writeln!(self.writer, "{opponent} is skipped!")?,
            TurnActionResult::Reverse => {
                writeln!(self.writer, "Reverse! Nothing changes with two players.")?
            }
            TurnActionResult::DrawTwo { drawn } => {
                writeln!(self.writer, "{opponent} draws {drawn} card(s).")?
            }
            TurnActionResult::Wild { color } => {
                writeln!(self.writer, "{name} chose the color {color}.")?
            }
            TurnActionResult::WildDrawFour { color, drawn } => {
                writeln!(self.writer, "{name} chose the color {color}.")?;
                writeln!(self.writer, "{opponent} draws {drawn} card(s).")?;
            }
            TurnActionResult::SelfDraw { card, playable } => {
                writeln!(self.writer, "{name} has no card to play and draws.")?;
                match card {
                    Some(card) => {
                        writeln!(self.writer, "{name} drew {card}.")?;
                        if *playable {
                            writeln!(self.writer, "{name} can play the drawn card next turn.")?;
                        } else {
                            writeln!(self.writer, "{name} cannot play the drawn card.")?;
                        }
                    }
                    None => writeln!(self.writer, "The deck is empty.")?,
                }
            }
        }
        Ok(())
    }

    pub fn report_winner(&mut self, winner: &Player) -> Result<()> {
        writeln!(self.writer, "{SEPARATOR}")?;
        writeln!(self.writer, "{} has won the game!", winner.name())?;
        Ok(())
    }

    pub fn report_stalemate(&mut self) -> Result<()> {
        writeln!(self.writer, "{SEPARATOR}")?;
        writeln!(
            self.writer,
            "The deck is empty and nobody can play. The game ends without a winner."
        )?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> PlayerInput for Console<R, W> {
    fn choose_card(
        &mut self,
        player: &Player,
        discard_top: &Card,
        legal: &[usize],
    ) -> Result<usize> {
        self.show_table(player, discard_top)?;
        loop {
            let answer = self.prompt(
                "Enter the number of the card you want to play (1 for the first card): ",
            )?;
            match answer.parse::<usize>() {
                Ok(number) if number > 0 && legal.contains(&(number - 1)) => {
                    return Ok(number - 1);
                }
                Ok(number) => {
                    debug!(number, "card cannot be played");
                    writeln!(self.writer, "That card cannot be played, try again.")?;
                }
                Err(_) => writeln!(self.writer, "Please enter a valid number.")?,
            }
        }
    }

    fn choose_color(&mut self, _player: &Player, played: &Card) -> Result<CardColor> {
        let colors = CardColor::iter()
            .map(|color| color.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        loop {
            let answer = self.prompt(&format!("Choose a new color for {played} ({colors}): "))?;
            match CardColor::from_str(&answer) {
                Ok(color) => return Ok(color),
                Err(_) => writeln!(self.writer, "Unknown color, try again.")?,
            }
        }
    }
}
