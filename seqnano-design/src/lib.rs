/*
SeqNano, sequence assignment for DNA origami designs.
    Copyright (C) 2021  Nicolas Levy <nicolaspierrelevy@gmail.com> and Nicolas Schabanel <nicolas.schabanel@ens-lyon.fr>

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU General Public License as published by
    the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU General Public License for more details.

    You should have received a copy of the GNU General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/
//! Assignment of nucleotide sequences to DNA origami designs.
//!
//! A design is read as a [`Lattice`] carrying two strand graphs, the scaffold and the staples.
//! The longest scaffold path receives a literal sequence, the other scaffold paths receive
//! generated sequences and each staple base is the complement of the scaffold base it is paired
//! with.

#[macro_use]
extern crate serde_derive;
extern crate serde;

mod lattice;
pub use lattice::*;
mod error;
pub use error::SeqDesignError;
pub mod traversal;
pub use traversal::{walk_to_end, walk_to_start, Direction, PathIter, WalkOutcome};
mod paths;
pub use paths::*;
pub mod generator;
pub use generator::SequenceGenerator;
mod assignment;
pub use assignment::*;
mod staples;
pub use staples::*;
pub mod lint;
pub use lint::Warning;
mod parameters;
pub use parameters::*;
mod designer;
pub use designer::*;
mod formating;

#[cfg(test)]
mod tests;
