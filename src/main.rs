/*
main.rs

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

use log::debug;
use std::error::Error;
use std::io;
use std::process::ExitCode;
use std::rc::Rc;

use soggle::board::Board;
use soggle::cli_options;
use soggle::cube_faces;
use soggle::lexicon::Lexicon;
use soggle::terminal::{self, GameSettings};

fn run(args: cli_options::Args) -> Result<(), Box<dyn Error>> {
    let lexicon: Lexicon = Lexicon::read(&args.lexicon)
        .map_err(|e| format!("Cannot read the word list {:?}: {e}", args.lexicon))?;

    let faces: Option<Vec<Vec<String>>> = match &args.faces {
        Some(path) => Some(
            cube_faces::read_face_table(path)
                .map_err(|e| format!("Cannot read the face table {path:?}: {e}"))?,
        ),
        None => None,
    };

    let settings = GameSettings {
        lexicon: Rc::new(lexicon),
        faces,
        shuffle: args.shuffler,
        die: args.die.map(usize::from),
    };

    if args.json {
        let board: Board = settings.new_board()?;
        println!("{}", serde_json::to_string(&board.snapshot())?);
        return Ok(());
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    terminal::run(&settings, stdin.lock(), &mut stdout)?;
    debug!("Bye");
    Ok(())
}

fn main() -> ExitCode {
    let args: cli_options::Args = cli_options::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
