/*
lexicon.rs

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

//! Set of valid words.

use log::debug;
use std::collections::HashSet;
use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Valid words, stored in uppercase.
#[derive(Debug, Default, Clone)]
pub struct Lexicon {
    words: HashSet<String>,
}

impl<S: AsRef<str>> FromIterator<S> for Lexicon {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter
                .into_iter()
                .map(|w| w.as_ref().trim().to_uppercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }
}

impl Lexicon {
    /// Read a word list with one word per line.
    ///
    /// Words are trimmed and converted to uppercase. Blank lines are skipped.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, Box<dyn Error>> {
        let mut words: HashSet<String> = HashSet::new();
        for line in reader.lines() {
            let word: String = line?.trim().to_uppercase();
            if !word.is_empty() {
                words.insert(word);
            }
        }
        Ok(Self { words })
    }

    /// Read a word list file.
    pub fn read(path: &Path) -> Result<Self, Box<dyn Error>> {
        debug!("Lexicon file: {path:?}");
        let file: File = File::open(path)?;
        let lexicon: Lexicon = Self::from_reader(BufReader::new(file))?;
        debug!("Loaded {} words", lexicon.len());
        Ok(lexicon)
    }

    /// Whether the word, compared in uppercase, is valid.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_uppercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
