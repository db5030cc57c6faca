/*
grid.rs

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

//! Positions in the 4x4 grid.

use serde::Serialize;

/// Number of rows, and of columns.
pub const GRID_SIZE: usize = 4;

/// Number of cells in the grid.
pub const NUM_CELLS: usize = GRID_SIZE * GRID_SIZE;

/// Row and column of a cell.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Location {
    pub row: usize,
    pub col: usize,
}

impl Location {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Location of the cell at the given index when the grid is read row by row.
    pub fn from_index(index: usize) -> Self {
        Self {
            row: index / GRID_SIZE,
            col: index % GRID_SIZE,
        }
    }

    /// Index of the cell when the grid is read row by row.
    pub fn index(&self) -> usize {
        self.row * GRID_SIZE + self.col
    }

    /// Whether the location is inside the grid.
    pub fn is_valid(&self) -> bool {
        self.row < GRID_SIZE && self.col < GRID_SIZE
    }

    /// Whether the two locations touch horizontally, vertically, or diagonally.
    /// A location is not adjacent to itself.
    pub fn is_adjacent(&self, other: &Location) -> bool {
        let dr: usize = self.row.abs_diff(other.row);
        let dc: usize = self.col.abs_diff(other.col);
        dr.max(dc) == 1
    }

    /// Locations adjacent to this one, inside the grid, in row-major order.
    pub fn neighbors(&self) -> Vec<Location> {
        let mut n: Vec<Location> = Vec::with_capacity(8);
        for row in self.row.saturating_sub(1)..=(self.row + 1).min(GRID_SIZE - 1) {
            for col in self.col.saturating_sub(1)..=(self.col + 1).min(GRID_SIZE - 1) {
                let l = Location::new(row, col);
                if l != *self {
                    n.push(l);
                }
            }
        }
        n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trip_is_row_major() {
        assert_eq!(Location::from_index(0), Location::new(0, 0));
        assert_eq!(Location::from_index(6), Location::new(1, 2));
        assert_eq!(Location::from_index(15), Location::new(3, 3));
        assert_eq!(Location::new(2, 1).index(), 9);
        assert!(!Location::new(4, 0).is_valid());
    }

    #[test]
    fn center_cell_has_eight_neighbors() {
        let center = Location::new(1, 1);
        let expected: Vec<Location> = [(0, 0), (0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2)]
            .iter()
            .map(|(r, c)| Location::new(*r, *c))
            .collect();
        assert_eq!(center.neighbors(), expected);
        for l in &expected {
            assert!(center.is_adjacent(l));
        }
    }

    #[test]
    fn corner_cell_has_three_neighbors() {
        assert_eq!(Location::new(0, 0).neighbors().len(), 3);
        assert_eq!(Location::new(3, 3).neighbors().len(), 3);
        assert_eq!(Location::new(0, 2).neighbors().len(), 5);
    }

    #[test]
    fn adjacency_is_symmetric_and_irreflexive() {
        for a in 0..NUM_CELLS {
            let la = Location::from_index(a);
            assert!(!la.is_adjacent(&la));
            for b in 0..NUM_CELLS {
                let lb = Location::from_index(b);
                assert_eq!(la.is_adjacent(&lb), lb.is_adjacent(&la));
                assert_eq!(la.is_adjacent(&lb), la.neighbors().contains(&lb));
            }
        }
    }

    #[test]
    fn two_steps_away_is_not_adjacent() {
        assert!(!Location::new(1, 2).is_adjacent(&Location::new(3, 2)));
        assert!(!Location::new(2, 0).is_adjacent(&Location::new(0, 1)));
    }
}
