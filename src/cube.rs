/*
cube.rs

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

//! Letter cube.
//!
//! A [`Cube`] carries six letter faces. Faces are strings and not characters because one of the
//! standard faces is the two-letter `Qu`.
//! The cube does not know the board it belongs to: the [`crate::board::Board`] owns all the
//! cubes and is the only one to change their status.

use log::debug;
use serde::Serialize;
use std::error::Error;
use std::fmt;
use strum_macros::Display;

use crate::gambler::{DIE_FACES, Die};

/// Selection status of a cube.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Default, Display)]
#[serde(rename_all = "snake_case")]
pub enum CubeStatus {
    #[default]
    #[strum(serialize = "unselected")]
    Unselected,

    /// The cube is part of the word in progress.
    #[strum(serialize = "selected")]
    Selected,

    /// The cube is the last one of the word in progress. Selecting it again finalizes the word.
    #[strum(serialize = "most recently selected")]
    MostRecentlySelected,
}

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum CubeError {
    /// The face list does not have exactly six faces.
    WrongFaceCount { cube_id: usize, count: usize },

    /// The die returned a face index outside `0..6`.
    RollOutOfRange { cube_id: usize, value: usize },
}

impl fmt::Display for CubeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CubeError::WrongFaceCount { cube_id, count } => write!(
                f,
                "Cube {cube_id} has {count} faces instead of {DIE_FACES}"
            ),
            CubeError::RollOutOfRange { cube_id, value } => write!(
                f,
                "Cube {cube_id}: die value {value} is not between 0 and {}",
                DIE_FACES - 1
            ),
        }
    }
}

impl Error for CubeError {}

/// Letter cube.
#[derive(Serialize, Debug, Clone)]
pub struct Cube {
    /// Cube identifier, unique on the board.
    id: usize,

    /// Letters on the six faces.
    #[serde(skip)]
    faces: [String; DIE_FACES],

    /// Letter on the top face.
    letter: String,

    status: CubeStatus,
}

impl Cube {
    /// Create a [`Cube`] object. The top face is the first face.
    pub fn new(id: usize, faces: [&str; DIE_FACES]) -> Self {
        let faces: [String; DIE_FACES] = faces.map(String::from);
        Self {
            id,
            letter: faces[0].clone(),
            faces,
            status: CubeStatus::Unselected,
        }
    }

    /// Create a [`Cube`] object from a list of faces of unknown length.
    ///
    /// # Errors
    ///
    /// Returns [`CubeError::WrongFaceCount`] if the list does not have exactly six faces.
    pub fn from_faces(id: usize, faces: Vec<String>) -> Result<Self, CubeError> {
        let count: usize = faces.len();
        let faces: [String; DIE_FACES] = faces
            .try_into()
            .map_err(|_| CubeError::WrongFaceCount { cube_id: id, count })?;
        Ok(Self {
            id,
            letter: faces[0].clone(),
            faces,
            status: CubeStatus::Unselected,
        })
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn faces(&self) -> &[String; DIE_FACES] {
        &self.faces
    }

    /// Return the letter on the top face.
    pub fn letter(&self) -> &str {
        &self.letter
    }

    pub fn status(&self) -> CubeStatus {
        self.status
    }

    pub fn set_status(&mut self, status: CubeStatus) {
        self.status = status;
    }

    /// Roll the cube and return the new top letter.
    ///
    /// # Errors
    ///
    /// Returns [`CubeError::RollOutOfRange`] if the die gives a face index outside `0..6`. In that
    /// case the top letter does not change.
    pub fn roll<D: Die + ?Sized>(&mut self, die: &mut D) -> Result<&str, CubeError> {
        let index: usize = die.roll();
        let Some(face) = self.faces.get(index) else {
            return Err(CubeError::RollOutOfRange {
                cube_id: self.id,
                value: index,
            });
        };
        self.letter = face.clone();
        debug!("Cube {} rolled face {index}: {}", self.id, self.letter);
        Ok(&self.letter)
    }
}

/// Letter framed according to the status: `(A)` for a selected cube, `[A]` for the most recently
/// selected cube. Honors width and alignment flags.
impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s: String = match self.status {
            CubeStatus::Unselected => format!(" {} ", self.letter),
            CubeStatus::Selected => format!("({})", self.letter),
            CubeStatus::MostRecentlySelected => format!("[{}]", self.letter),
        };
        f.pad(&s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gambler::PredictableDie;

    fn sample_cube() -> Cube {
        Cube::new(8, ["D", "E", "N", "O", "S", "W"])
    }

    #[test]
    fn new_cube_shows_first_face_and_is_unselected() {
        let cube = sample_cube();
        assert_eq!(cube.id(), 8);
        assert_eq!(cube.letter(), "D");
        assert_eq!(cube.faces()[5], "W");
        assert_eq!(cube.status(), CubeStatus::Unselected);

        let cube = Cube::new(8, ["E", "D", "S", "N", "W", "O"]);
        assert_eq!(cube.letter(), "E");
    }

    #[test]
    fn roll_uses_the_die_face() {
        let mut cube = sample_cube();
        assert_eq!(cube.roll(&mut PredictableDie::new(4)), Ok("S"));
        assert_eq!(cube.letter(), "S");
    }

    #[test]
    fn roll_out_of_range_keeps_the_letter() {
        let mut cube = sample_cube();
        assert_eq!(
            cube.roll(&mut PredictableDie::new(6)),
            Err(CubeError::RollOutOfRange {
                cube_id: 8,
                value: 6
            })
        );
        assert_eq!(cube.letter(), "D");
    }

    #[test]
    fn faces_are_strings() {
        let mut cube = Cube::new(2, ["J", "M", "O", "Qu", "A", "B"]);
        assert_eq!(cube.roll(&mut PredictableDie::new(3)), Ok("Qu"));
    }

    #[test]
    fn from_faces_checks_the_face_count() {
        let faces: Vec<String> = ["A", "B", "C"].iter().map(|s| s.to_string()).collect();
        match Cube::from_faces(3, faces) {
            Err(e) => {
                assert_eq!(
                    e,
                    CubeError::WrongFaceCount {
                        cube_id: 3,
                        count: 3
                    }
                );
                assert_eq!(e.to_string(), "Cube 3 has 3 faces instead of 6");
            }
            Ok(_) => panic!("a three-face cube must be rejected"),
        }

        let faces: Vec<String> = ["A", "B", "C", "D", "E", "F"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let cube = Cube::from_faces(3, faces).expect("six faces are valid");
        assert_eq!(cube.letter(), "A");
    }

    #[test]
    fn status_changes_and_display() {
        let mut cube = sample_cube();
        assert_eq!(format!("{cube}"), " D ");
        cube.set_status(CubeStatus::MostRecentlySelected);
        assert_eq!(cube.status(), CubeStatus::MostRecentlySelected);
        assert_eq!(format!("{cube}"), "[D]");
        cube.set_status(CubeStatus::Selected);
        assert_eq!(format!("{cube:<5}"), "(D)  ");
        assert_eq!(CubeStatus::MostRecentlySelected.to_string(), "most recently selected");
    }
}
