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
//! Advisory verifications of the assembled staples.

use super::assignment::AssignedStrand;
use super::{Coordinate, LintParameters};

/// A suspicious property of a staple. Warnings never stop a run.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub enum Warning {
    StapleTooLong {
        staple: usize,
        start: Coordinate,
        length: usize,
        max: usize,
    },
    StapleTooShort {
        staple: usize,
        start: Coordinate,
        length: usize,
        min: usize,
    },
    /// A run of A at the 5' end, which usually means that the staple is not paired with a
    /// scaffold.
    PolyAAtStart {
        staple: usize,
        start: Coordinate,
        run: usize,
    },
    /// A run of A at the 3' end.
    PolyAAtEnd {
        staple: usize,
        start: Coordinate,
        run: usize,
    },
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StapleTooLong {
                staple,
                start,
                length,
                max,
            } => write!(
                f,
                "Staple {} at {} has length {} (>{})",
                staple, start, length, max
            ),
            Self::StapleTooShort {
                staple,
                start,
                length,
                min,
            } => write!(
                f,
                "Staple {} at {} has length {} (<{})",
                staple, start, length, min
            ),
            Self::PolyAAtStart { staple, start, run } => write!(
                f,
                "Staple {} at {} has {} or more consecutive A's at the start",
                staple, start, run
            ),
            Self::PolyAAtEnd { staple, start, run } => write!(
                f,
                "Staple {} at {} has {} or more consecutive A's at the end",
                staple, start, run
            ),
        }
    }
}

/// Check the length of the staples and look for runs of A at their extremities.
///
/// Lengths count every position of the staple, skips included.
pub fn verify_staples(staples: &[AssignedStrand], parameters: &LintParameters) -> Vec<Warning> {
    let mut ret = Vec::new();
    for (i, staple) in staples.iter().enumerate() {
        let length = staple.len();
        if length > parameters.max_staple_length {
            ret.push(Warning::StapleTooLong {
                staple: i,
                start: staple.start,
                length,
                max: parameters.max_staple_length,
            });
        } else if length < parameters.min_staple_length {
            ret.push(Warning::StapleTooShort {
                staple: i,
                start: staple.start,
                length,
                min: parameters.min_staple_length,
            });
        }
    }

    let run = parameters.poly_a_run;
    if run == 0 {
        return ret;
    }
    for (i, staple) in staples.iter().enumerate() {
        if staple.len() < run {
            continue;
        }
        let is_a = |(_, b): &(Coordinate, char)| *b == 'A';
        if staple.bases[..run].iter().all(is_a) {
            ret.push(Warning::PolyAAtStart {
                staple: i,
                start: staple.start,
                run,
            });
        }
        if staple.bases[staple.len() - run..].iter().all(is_a) {
            ret.push(Warning::PolyAAtEnd {
                staple: i,
                start: staple.start,
                run,
            });
        }
    }
    ret
}
