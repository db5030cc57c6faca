/*
selection.rs

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

//! Cubes that the player selected for the word in progress.

use std::collections::HashSet;

/// Ordered list of cube IDs without duplicates.
#[derive(Debug, Default, Clone)]
pub struct SelectionPath {
    /// Cube IDs in selection order.
    path: Vec<usize>,

    /// Same IDs as [`SelectionPath::path`], for fast lookups.
    visited: HashSet<usize>,
}

impl SelectionPath {
    /// Create an empty [`SelectionPath`] object.
    pub fn new(capacity: usize) -> Self {
        Self {
            path: Vec::with_capacity(capacity),
            visited: HashSet::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.path.clear();
        self.visited.clear();
    }

    /// Append a cube to the path.
    /// Return `false`, and leave the path unchanged, if the cube is already in the path.
    pub fn push(&mut self, cube_id: usize) -> bool {
        if !self.visited.insert(cube_id) {
            return false;
        }
        self.path.push(cube_id);
        true
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn contains(&self, cube_id: usize) -> bool {
        self.visited.contains(&cube_id)
    }

    /// Return the cube IDs in selection order.
    pub fn get(&self) -> &[usize] {
        &self.path
    }

    /// Return the most recently selected cube.
    pub fn last(&self) -> Option<usize> {
        self.path.last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_keeps_order_and_refuses_duplicates() {
        let mut path = SelectionPath::new(16);
        assert!(path.is_empty());
        assert_eq!(path.last(), None);

        assert!(path.push(13));
        assert!(path.push(12));
        assert!(!path.push(13));
        assert!(path.push(9));

        assert_eq!(path.get(), &[13, 12, 9]);
        assert_eq!(path.len(), 3);
        assert_eq!(path.last(), Some(9));
        assert!(path.contains(12));
        assert!(!path.contains(0));
    }

    #[test]
    fn clear_empties_the_path() {
        let mut path = SelectionPath::new(16);
        path.push(1);
        path.push(2);
        path.clear();
        assert!(path.is_empty());
        assert!(!path.contains(1));
        assert!(path.push(1));
    }
}
