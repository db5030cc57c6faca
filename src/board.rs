/*
board.rs

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

//! Manage the 4x4 board and the word in progress.
//!
//! The [`Board`] owns the sixteen cubes in a vector indexed by cube ID.
//! The placement of the cubes in the grid is a separate list of cube IDs read row by row, and a
//! location index gives the row and column of each cube. Both are rebuilt together each time the
//! board is shaken.
//!
//! The player builds a word by reporting cube selections with [`Board::report_selection`]:
//!
//! * The first selected cube starts the word.
//! * An unselected cube adjacent to the last selected cube extends the word.
//! * Selecting the last selected cube again finalizes the word. If the word is in the lexicon
//!   then it is added to the list of completed words. In all cases the selection is reset.
//! * Any other selection is ignored.

use log::debug;
use serde::Serialize;
use std::error::Error;
use std::fmt;
use std::rc::Rc;

use crate::cube::{Cube, CubeError, CubeStatus};
use crate::cube_faces::STANDARD_CUBE_FACES;
use crate::gambler::{Die, Shuffler};
use crate::grid::{GRID_SIZE, Location, NUM_CELLS};
use crate::lexicon::Lexicon;
use crate::selection::SelectionPath;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum BoardError {
    /// The face table does not describe exactly sixteen cubes.
    WrongCubeCount(usize),

    /// A cube could not be built or rolled.
    Cube(CubeError),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BoardError::WrongCubeCount(count) => {
                write!(f, "The board needs {NUM_CELLS} cubes, but {count} are defined")
            }
            BoardError::Cube(e) => write!(f, "{e}"),
        }
    }
}

impl Error for BoardError {}

impl From<CubeError> for BoardError {
    fn from(e: CubeError) -> Self {
        BoardError::Cube(e)
    }
}

/// Result of a cube selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The cube starts a new word.
    Started,

    /// The cube is added to the word in progress.
    Extended,

    /// The word is finalized and is in the lexicon.
    Accepted(String),

    /// The word is finalized but is not in the lexicon.
    Rejected(String),

    /// The selection does not change anything.
    Ignored,
}

/// Board state that the display layer can serialize.
#[derive(Serialize, Debug)]
pub struct BoardSnapshot<'a> {
    /// Cubes, row by row.
    pub grid: Vec<Vec<&'a Cube>>,
    pub word_so_far: &'a str,
    pub completed_words: &'a [String],
}

/// Game board.
#[derive(Debug)]
pub struct Board {
    /// Cubes indexed by their ID.
    cubes: Vec<Cube>,

    /// Cube IDs in grid order, row by row.
    placement: Vec<usize>,

    /// Location of each cube, indexed by cube ID.
    locations: Vec<Location>,

    /// Cubes selected for the word in progress.
    selection: SelectionPath,

    /// Letters of the selected cubes.
    word_so_far: String,

    /// Valid words that the player finalized, in order.
    completed_words: Vec<String>,

    lexicon: Rc<Lexicon>,
}

impl Board {
    /// Create a [`Board`] object with the standard cubes, placed in table order.
    pub fn new(lexicon: Rc<Lexicon>) -> Self {
        let cubes: Vec<Cube> = STANDARD_CUBE_FACES
            .iter()
            .enumerate()
            .map(|(id, faces)| Cube::new(id, *faces))
            .collect();
        Self::from_cubes(lexicon, cubes)
    }

    /// Create a [`Board`] object from a custom face table. The index in the table is the cube ID.
    ///
    /// # Errors
    ///
    /// The table must have sixteen entries of six faces each.
    pub fn with_faces(lexicon: Rc<Lexicon>, faces: Vec<Vec<String>>) -> Result<Self, BoardError> {
        if faces.len() != NUM_CELLS {
            return Err(BoardError::WrongCubeCount(faces.len()));
        }
        let cubes: Vec<Cube> = faces
            .into_iter()
            .enumerate()
            .map(|(id, f)| Cube::from_faces(id, f))
            .collect::<Result<Vec<Cube>, CubeError>>()?;
        Ok(Self::from_cubes(lexicon, cubes))
    }

    fn from_cubes(lexicon: Rc<Lexicon>, cubes: Vec<Cube>) -> Self {
        let mut board = Self {
            placement: (0..cubes.len()).collect(),
            locations: vec![Location::default(); cubes.len()],
            cubes,
            selection: SelectionPath::new(NUM_CELLS),
            word_so_far: String::new(),
            completed_words: Vec::new(),
            lexicon,
        };
        board.update_grid_locations();
        board
    }

    /// Rebuild the location index from the placement list.
    fn update_grid_locations(&mut self) {
        for (index, cube_id) in self.placement.iter().enumerate() {
            self.locations[*cube_id] = Location::from_index(index);
        }
    }

    /// Shake the board: shuffle the cubes in the grid, and then roll each cube.
    ///
    /// The word in progress is reset because the cube positions change. Completed words are kept.
    ///
    /// # Errors
    ///
    /// Returns an error if the die gives a face index outside `0..6`.
    pub fn shake<S: Shuffler, D: Die>(
        &mut self,
        shuffler: &mut S,
        die: &mut D,
    ) -> Result<(), BoardError> {
        self.reset_word();

        self.placement = shuffler.shuffle(&self.placement);
        self.update_grid_locations();

        for cube_id in &self.placement {
            self.cubes[*cube_id].roll(die)?;
        }
        debug!("Board after shaking:\n{self}");
        Ok(())
    }

    /// Return the cube at the given row and column.
    ///
    /// # Panics
    ///
    /// Panics if the row or the column is outside the grid.
    pub fn cube_at(&self, row: usize, col: usize) -> &Cube {
        let location = Location::new(row, col);
        assert!(location.is_valid(), "({row}, {col}) is outside the grid");
        &self.cubes[self.placement[location.index()]]
    }

    /// Return the cube with the given ID.
    pub fn cube(&self, cube_id: usize) -> Option<&Cube> {
        self.cubes.get(cube_id)
    }

    /// Return all the cubes, indexed by their ID.
    pub fn cubes(&self) -> &[Cube] {
        &self.cubes
    }

    /// Return the row and column of the given cube.
    pub fn location(&self, cube_id: usize) -> Option<Location> {
        self.locations.get(cube_id).copied()
    }

    /// Whether two cubes are vertically, horizontally, or diagonally adjacent.
    pub fn adjacent(&self, cube1: &Cube, cube2: &Cube) -> bool {
        self.adjacent_ids(cube1.id(), cube2.id())
    }

    fn adjacent_ids(&self, cube1_id: usize, cube2_id: usize) -> bool {
        match (self.location(cube1_id), self.location(cube2_id)) {
            (Some(l1), Some(l2)) => l1.is_adjacent(&l2),
            _ => false,
        }
    }

    /// Return the IDs of the cubes adjacent to the given cube, in grid order.
    pub fn neighbors(&self, cube_id: usize) -> Vec<usize> {
        match self.location(cube_id) {
            Some(l) => l
                .neighbors()
                .iter()
                .map(|n| self.placement[n.index()])
                .collect(),
            None => Vec::new(),
        }
    }

    /// Process the selection of a cube by the player.
    pub fn report_selection(&mut self, cube_id: usize) -> SelectionOutcome {
        let Some(status) = self.cube(cube_id).map(Cube::status) else {
            debug!("Unknown cube {cube_id}: ignored");
            return SelectionOutcome::Ignored;
        };

        // First cube of the word
        let Some(last_id) = self.selection.last() else {
            self.push_selection(cube_id);
            return SelectionOutcome::Started;
        };

        match status {
            CubeStatus::Unselected => {
                if !self.adjacent_ids(last_id, cube_id) {
                    debug!(
                        "Cube {cube_id} is not adjacent to cube {last_id} (neighbors {:?}): ignored",
                        self.neighbors(last_id)
                    );
                    return SelectionOutcome::Ignored;
                }
                self.cubes[last_id].set_status(CubeStatus::Selected);
                self.push_selection(cube_id);
                SelectionOutcome::Extended
            }
            CubeStatus::MostRecentlySelected => self.finalize_word(),
            CubeStatus::Selected => {
                debug!("Cube {cube_id} is already in the word: ignored");
                SelectionOutcome::Ignored
            }
        }
    }

    /// Make the given cube the last cube of the word in progress.
    fn push_selection(&mut self, cube_id: usize) {
        let cube: &mut Cube = &mut self.cubes[cube_id];
        self.selection.push(cube_id);
        self.word_so_far.push_str(cube.letter());
        cube.set_status(CubeStatus::MostRecentlySelected);
        debug!("Cube {cube_id} selected: {}", self.word_so_far);
    }

    /// Verify the word in progress against the lexicon, and then reset the selection.
    fn finalize_word(&mut self) -> SelectionOutcome {
        let word: String = self.word_so_far.to_uppercase();
        let outcome = if self.lexicon.contains(&word) {
            debug!("Word {word} accepted");
            self.completed_words.push(word.clone());
            SelectionOutcome::Accepted(word)
        } else {
            debug!("Word {word} is not in the lexicon");
            SelectionOutcome::Rejected(word)
        };
        self.reset_word();
        outcome
    }

    /// Set all the cubes to unselected.
    fn unselect_all(&mut self) {
        for cube in &mut self.cubes {
            cube.set_status(CubeStatus::Unselected);
        }
    }

    /// Cancel the word in progress. Completed words are kept.
    pub fn reset_word(&mut self) {
        self.word_so_far.clear();
        self.selection.clear();
        self.unselect_all();
    }

    pub fn word_so_far(&self) -> &str {
        &self.word_so_far
    }

    pub fn completed_words(&self) -> &[String] {
        &self.completed_words
    }

    /// Return the IDs of the selected cubes, in selection order.
    pub fn selected_cubes(&self) -> &[usize] {
        self.selection.get()
    }

    /// Return a serializable view of the board.
    pub fn snapshot(&self) -> BoardSnapshot<'_> {
        BoardSnapshot {
            grid: self
                .placement
                .chunks(GRID_SIZE)
                .map(|row| row.iter().map(|id| &self.cubes[*id]).collect())
                .collect(),
            word_so_far: &self.word_so_far,
            completed_words: &self.completed_words,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                write!(f, "{:^5}", self.cube_at(row, col))?;
            }
            if row + 1 < GRID_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
