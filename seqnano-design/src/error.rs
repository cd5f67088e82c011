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
use super::Coordinate;

/// The reasons for which sequences cannot be assigned to a design.
///
/// Each of them reflects a defect of the input design or sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum SeqDesignError {
    /// A strand graph contains a cycle instead of a terminated path.
    NoBreakpoint { coordinate: Coordinate },
    /// The start and end of the primary scaffold are not adjacent.
    DisconnectedScaffold { start: Coordinate, end: Coordinate },
    /// The literal sequence cannot cover the longest scaffold.
    SequenceTooShort {
        sequence_length: usize,
        longest_scaffold: usize,
    },
    /// A skip value that is neither 0 nor -1.
    InvalidSkipValue { coordinate: Coordinate, value: isize },
    /// A character that has no complement.
    InvalidBase(char),
    /// The design has no scaffold strand.
    NoScaffoldFound,
    /// The sequence generator could not satisfy its constraints.
    GeneratorExhausted { length: usize, attempts: usize },
    /// The weights of the sequence generator cannot be sampled from.
    InvalidGeneratorWeights([u32; 4]),
}

impl std::fmt::Display for SeqDesignError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoBreakpoint { coordinate } => write!(
                f,
                "Loop detected at base {}. Make sure the staple or scaffold at this base has a start and an end",
                coordinate
            ),
            Self::DisconnectedScaffold { start, end } => write!(
                f,
                "Start {} and end {} of the scaffold do not connect. Make sure the start and end bases are next to each other",
                start, end
            ),
            Self::SequenceTooShort {
                sequence_length,
                longest_scaffold,
            } => write!(
                f,
                "Scaffold sequence given is not long enough. Scaffold input length: {}, longest scaffold: {}",
                sequence_length, longest_scaffold
            ),
            Self::InvalidSkipValue { coordinate, value } => {
                write!(f, "Invalid skip value {} at base {}", value, coordinate)
            }
            Self::InvalidBase(c) => write!(f, "{:?} is not a valid base", c),
            Self::NoScaffoldFound => write!(f, "No scaffold found"),
            Self::GeneratorExhausted { length, attempts } => write!(
                f,
                "Could not generate a sequence of length {} satisfying the constraints in {} attempts",
                length, attempts
            ),
            Self::InvalidGeneratorWeights(weights) => {
                write!(f, "Invalid generator weights {:?}", weights)
            }
        }
    }
}

impl std::error::Error for SeqDesignError {}
