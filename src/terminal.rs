/*
terminal.rs

Copyright 2025 Hervé Quatremain

This file is part of Soggle.

Soggle is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Soggle is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Soggle. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Play in a terminal.
//!
//! The player types one command per line:
//!
//! * A cube ID (`0` to `15`) selects that cube. Cube IDs do not change when the board is shaken,
//!   use the `ids` command to display them.
//! * `r` or `reset` cancels the word in progress.
//! * `n` or `new` starts a new game.
//! * `i` or `ids` displays the cube IDs.
//! * `q` or `quit` exits.
//!
//! After each command the board, the word in progress, and the completed words are displayed.
//! In the board, `(A)` is a selected cube and `[A]` is the last selected cube.

use log::{debug, info};
use std::error::Error;
use std::io::{BufRead, Write};
use std::rc::Rc;
use std::str::FromStr;

use crate::board::{Board, BoardError, SelectionOutcome};
use crate::config::APPLICATION_NAME;
use crate::gambler::{
    IdentityShuffler, PredictableDie, RandomShuffler, ReversedShuffler, ShuffleMode, Shuffler,
    SixSidedDie,
};
use crate::grid::GRID_SIZE;
use crate::lexicon::Lexicon;

const HELP: &str = "Commands: <cube ID> select a cube, r reset the word, n new game, i show cube IDs, q quit";

/// Player command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Select(usize),
    Reset,
    NewGame,
    ShowIds,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s: String = s.trim().to_lowercase();
        match s.as_str() {
            "r" | "reset" => Ok(Command::Reset),
            "n" | "new" => Ok(Command::NewGame),
            "i" | "ids" => Ok(Command::ShowIds),
            "q" | "quit" => Ok(Command::Quit),
            _ => s
                .parse::<usize>()
                .map(Command::Select)
                .map_err(|_| format!("Unknown command: {s}")),
        }
    }
}

/// How to build and shake a board for each new game.
pub struct GameSettings {
    pub lexicon: Rc<Lexicon>,

    /// Custom face table, or [`None`] for the standard cubes.
    pub faces: Option<Vec<Vec<String>>>,

    pub shuffle: ShuffleMode,

    /// Face that a predictable die always rolls, or [`None`] for a random die.
    pub die: Option<usize>,
}

impl GameSettings {
    /// Create a new shaken board.
    pub fn new_board(&self) -> Result<Board, BoardError> {
        let mut board: Board = match &self.faces {
            Some(f) => Board::with_faces(Rc::clone(&self.lexicon), f.clone())?,
            None => Board::new(Rc::clone(&self.lexicon)),
        };
        match self.shuffle {
            ShuffleMode::Random => self.shake(&mut board, &mut RandomShuffler::new())?,
            ShuffleMode::Reversed => self.shake(&mut board, &mut ReversedShuffler)?,
            ShuffleMode::Identity => self.shake(&mut board, &mut IdentityShuffler)?,
        }
        info!("New game ({} shuffler)", self.shuffle);
        Ok(board)
    }

    fn shake<S: Shuffler>(&self, board: &mut Board, shuffler: &mut S) -> Result<(), BoardError> {
        match self.die {
            Some(face) => board.shake(shuffler, &mut PredictableDie::new(face)),
            None => board.shake(shuffler, &mut SixSidedDie::new()),
        }
    }
}

/// Display the board and the words.
fn print_board<W: Write>(board: &Board, output: &mut W) -> Result<(), Box<dyn Error>> {
    writeln!(output, "{board}")?;
    writeln!(output, "Word: {}", board.word_so_far())?;
    writeln!(
        output,
        "Completed words: {}",
        board.completed_words().join(" ")
    )?;
    Ok(())
}

/// Display the ID of the cube in each cell.
fn print_ids<W: Write>(board: &Board, output: &mut W) -> Result<(), Box<dyn Error>> {
    for row in 0..GRID_SIZE {
        let ids: Vec<String> = (0..GRID_SIZE)
            .map(|col| format!("{:^5}", board.cube_at(row, col).id()))
            .collect();
        writeln!(output, "{}", ids.concat())?;
    }
    Ok(())
}

/// Run games until the player quits or the input ends.
pub fn run<R: BufRead, W: Write>(
    settings: &GameSettings,
    input: R,
    output: &mut W,
) -> Result<(), Box<dyn Error>> {
    let mut board: Board = settings.new_board()?;
    writeln!(output, "{APPLICATION_NAME}")?;
    writeln!(output, "{HELP}")?;
    print_board(&board, output)?;

    for line in input.lines() {
        let line: String = line?;
        if line.trim().is_empty() {
            continue;
        }
        let command: Command = match line.parse() {
            Ok(c) => c,
            Err(msg) => {
                writeln!(output, "{msg}")?;
                writeln!(output, "{HELP}")?;
                continue;
            }
        };
        debug!("Command: {command:?}");

        match command {
            Command::Select(cube_id) => match board.report_selection(cube_id) {
                SelectionOutcome::Accepted(word) => writeln!(output, "{word}: accepted")?,
                SelectionOutcome::Rejected(word) => {
                    writeln!(output, "{word}: not in the word list")?
                }
                SelectionOutcome::Started
                | SelectionOutcome::Extended
                | SelectionOutcome::Ignored => (),
            },
            Command::Reset => board.reset_word(),
            Command::NewGame => board = settings.new_board()?,
            Command::ShowIds => {
                print_ids(&board, output)?;
                continue;
            }
            Command::Quit => return Ok(()),
        }
        print_board(&board, output)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn predictable_settings(words: &[&str]) -> GameSettings {
        GameSettings {
            lexicon: Rc::new(words.iter().collect()),
            faces: None,
            shuffle: ShuffleMode::Reversed,
            die: Some(4),
        }
    }

    fn play(settings: &GameSettings, script: &str) -> String {
        let mut output: Vec<u8> = Vec::new();
        run(settings, Cursor::new(script), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn parse_commands() {
        assert_eq!("13".parse::<Command>(), Ok(Command::Select(13)));
        assert_eq!(" R ".parse::<Command>(), Ok(Command::Reset));
        assert_eq!("new".parse::<Command>(), Ok(Command::NewGame));
        assert_eq!("ids".parse::<Command>(), Ok(Command::ShowIds));
        assert_eq!("q".parse::<Command>(), Ok(Command::Quit));
        assert!("-1".parse::<Command>().is_err());
        assert!("hello".parse::<Command>().is_err());
    }

    #[test]
    fn session_finds_a_word() {
        let out = play(&predictable_settings(&["PUT"]), "13\n12\n9\n9\nq\n11\n");
        assert!(out.contains("Word: PUT"));
        assert!(out.contains("PUT: accepted"));
        assert!(out.ends_with("Completed words: PUT\n"));
    }

    #[test]
    fn session_reset_and_invalid_word() {
        let out = play(&predictable_settings(&["PUT"]), "13\n12\nreset\n15\n14\n14\n");
        assert!(out.contains("Word: PU\n"));
        assert!(out.contains("UT: not in the word list"));
        assert!(out.ends_with("Word: \nCompleted words: \n"));
    }

    #[test]
    fn session_reports_unknown_commands() {
        let out = play(&predictable_settings(&[]), "jump\n\n");
        assert!(out.contains("Unknown command: jump"));
    }

    #[test]
    fn session_new_game_clears_completed_words() {
        let out = play(&predictable_settings(&["PUT"]), "13\n12\n9\n9\nn\n");
        assert!(out.contains("Completed words: PUT\n"));
        assert!(out.ends_with("Word: \nCompleted words: \n"));
    }

    #[test]
    fn session_shows_ids() {
        let out = play(&predictable_settings(&[]), "i\n");
        assert!(out.contains(" 15   14   13   12  \n"));
    }

    #[test]
    fn invalid_face_table_is_reported() {
        let settings = GameSettings {
            faces: Some(vec![vec!["A".to_string()]; 3]),
            ..predictable_settings(&[])
        };
        let mut output: Vec<u8> = Vec::new();
        let err = run(&settings, Cursor::new(""), &mut output).unwrap_err();
        assert_eq!(err.to_string(), "The board needs 16 cubes, but 3 are defined");
    }
}
