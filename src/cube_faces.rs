/*
cube_faces.rs

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

//! Letters on the cubes.
//!
//! The standard set is compiled in. A custom set can be loaded from a JSON file that contains an
//! array of sixteen arrays of six strings:
//!
//! ```json
//! [["A", "A", "C", "I", "O", "T"], ["T", "Y", "A", "B", "I", "L"], ...]
//! ```
//!
//! The loader only parses the file. The number of cubes and faces is verified when the board is
//! built (see [`crate::board::Board::with_faces`]).

use log::debug;
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::gambler::DIE_FACES;
use crate::grid::NUM_CELLS;

/// The sixteen letter cubes of the standard game. The index in the table is the cube ID.
pub const STANDARD_CUBE_FACES: [[&str; DIE_FACES]; NUM_CELLS] = [
    ["A", "A", "C", "I", "O", "T"],
    ["T", "Y", "A", "B", "I", "L"],
    ["J", "M", "O", "Qu", "A", "B"],
    ["A", "C", "D", "E", "M", "P"],
    ["A", "C", "E", "L", "S", "R"],
    ["A", "D", "E", "N", "V", "Z"],
    ["A", "H", "M", "O", "R", "S"],
    ["B", "F", "I", "O", "R", "X"],
    ["D", "E", "N", "O", "S", "W"],
    ["D", "K", "N", "O", "T", "U"],
    ["E", "E", "F", "H", "I", "Y"],
    ["E", "G", "I", "N", "T", "V"],
    ["E", "G", "K", "L", "U", "Y"],
    ["E", "H", "I", "N", "P", "S"],
    ["E", "L", "P", "S", "T", "U"],
    ["G", "I", "L", "R", "U", "W"],
];

/// Read a face table from a JSON file.
pub fn read_face_table(path: &Path) -> Result<Vec<Vec<String>>, Box<dyn Error>> {
    debug!("Face table file: {path:?}");
    let file: File = File::open(path)?;
    let reader: BufReader<File> = BufReader::new(file);
    let faces: Vec<Vec<String>> = serde_json::from_reader(reader)?;
    debug!("Loaded {} cubes", faces.len());
    Ok(faces)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn standard_table_has_one_qu_face() {
        let qu: Vec<(usize, usize)> = STANDARD_CUBE_FACES
            .iter()
            .enumerate()
            .flat_map(|(id, faces)| {
                faces
                    .iter()
                    .enumerate()
                    .filter(|(_, f)| **f == "Qu")
                    .map(move |(i, _)| (id, i))
            })
            .collect();
        assert_eq!(qu, vec![(2, 3)]);
    }

    #[test]
    fn read_face_table_parses_json() {
        let mut path = std::env::temp_dir();
        path.push(format!("soggle-faces-{}.json", std::process::id()));
        {
            let mut f = File::create(&path).unwrap();
            write!(f, r#"[["A","B","C","D","E","Qu"],["F","G"]]"#).unwrap();
        }
        let faces = read_face_table(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(faces.len(), 2);
        assert_eq!(faces[0][5], "Qu");
        assert_eq!(faces[1], vec!["F".to_string(), "G".to_string()]);
    }

    #[test]
    fn read_face_table_reports_missing_file() {
        let path = Path::new("/nonexistent/soggle/faces.json");
        assert!(read_face_table(path).is_err());
    }
}
