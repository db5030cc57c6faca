/*
lib.rs

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

//! Word game played on a 4x4 grid of letter cubes.
//!
//! The [`board::Board`] is the core of the game. It owns the sixteen [`cube::Cube`] objects, is
//! shaken with the capabilities from the [`gambler`] module, and processes the cube selections
//! of the player.
//! The [`terminal`] module is a text front end that translates typed commands into board
//! operations and displays the board after each command.

pub mod board;
pub mod cli_options;
pub mod config;
pub mod cube;
pub mod cube_faces;
pub mod gambler;
pub mod grid;
pub mod lexicon;
pub mod selection;
pub mod terminal;
