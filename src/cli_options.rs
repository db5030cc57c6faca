/*
cli_options.rs

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

//! Process command-line options.
//!
//! # Examples
//!
//! Play a random game with the default word list (`bogwords.txt`):
//!
//! ```text
//! $ soggle
//! ```
//!
//! Play a reproducible game, for example to check a word list:
//!
//! ```text
//! $ soggle --lexicon words.txt --shuffler reversed --die 4
//! ```
//!
//! Print a shaken board in JSON format and exit:
//!
//! ```text
//! $ soggle --json
//! {"grid":[[{"id":6,"letter":"H","status":"unselected"}, ...
//! ```

use clap::Parser;
use std::env;
use std::path::PathBuf;

use crate::config::{COPYRIGHT_NOTICE, DEFAULT_LEXICON_FILE};
use crate::gambler::ShuffleMode;

/// Find words in a 4x4 grid of letter cubes.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
pub struct Args {
    /// Word list file, one word per line
    #[arg(short, long, default_value = DEFAULT_LEXICON_FILE)]
    pub lexicon: PathBuf,

    /// JSON file with the faces of the sixteen cubes
    #[arg(long)]
    pub faces: Option<PathBuf>,

    /// How to place the cubes in the grid
    #[arg(value_enum, short, long, default_value_t = ShuffleMode::Random)]
    pub shuffler: ShuffleMode,

    /// Use a loaded die that always shows this face (0 to 5)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..6))]
    pub die: Option<u8>,

    /// Print the shaken board in JSON format and exit
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    pub debug: bool,
}

/// Parse the command-line options and initialize logging.
pub fn parse() -> Args {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();
    args
}
