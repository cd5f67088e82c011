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
pub use cadnano_format::Cadnano;
use cadnano_format::VStrand;
use seqnano_design::{AdjacencyRecord, Coordinate, Lattice, LatticeBuilder, StrandGraph};
use std::collections::HashSet;

use super::LoadError;

pub(super) trait FromCadnano: Sized {
    fn from_cadnano(nano: Cadnano) -> Result<Self, LoadError>;
}

impl FromCadnano for Lattice {
    /// Create a lattice from a cadnano design. The row of each virtual strand is its `num`.
    fn from_cadnano(nano: Cadnano) -> Result<Self, LoadError> {
        let vstrands = nano.vstrands;
        let position_count = vstrands
            .first()
            .map(|v| v.scaf.len())
            .ok_or(LoadError::EmptyDesign)?;
        let mut strand_count = 0;
        let mut seen = HashSet::new();
        for v in vstrands.iter() {
            if v.num < 0 {
                return Err(LoadError::InvalidStrandNumber(v.num));
            }
            if !seen.insert(v.num) {
                return Err(LoadError::DuplicateStrandNumber(v.num));
            }
            strand_count = strand_count.max(v.num as usize + 1);
            check_length(v, position_count)?;
        }

        let mut builder = LatticeBuilder::new(strand_count, position_count);
        for v in vstrands.iter() {
            let strand = v.num as usize;
            for position in 0..position_count {
                let coordinate = Coordinate::new(strand, position);
                let scaf = v.scaf[position];
                let stap = v.stap[position];
                for raw in [scaf, stap] {
                    check_reference(v, position, (raw.0, raw.1), strand_count, position_count)?;
                    check_reference(v, position, (raw.2, raw.3), strand_count, position_count)?;
                }
                builder
                    .set_adjacency(
                        StrandGraph::Scaffold,
                        coordinate,
                        AdjacencyRecord::from_raw(scaf),
                    )
                    .set_adjacency(
                        StrandGraph::Staple,
                        coordinate,
                        AdjacencyRecord::from_raw(stap),
                    )
                    .set_skip(coordinate, v.skip[position]);
                if let Some(insertion) = v.loop_.get(position).filter(|l| **l > 0) {
                    log::warn!(
                        "Ignoring insertion of {} bases at {}",
                        insertion,
                        coordinate
                    );
                }
            }
        }
        Ok(builder.build())
    }
}

fn check_length(v: &VStrand, expected: usize) -> Result<(), LoadError> {
    for found in [v.scaf.len(), v.stap.len(), v.skip.len()] {
        if found != expected {
            return Err(LoadError::InconsistentStrandLength {
                num: v.num,
                expected,
                found,
            });
        }
    }
    Ok(())
}

/// A reference is either absent (any negative component) or inside the lattice.
fn check_reference(
    v: &VStrand,
    position: usize,
    reference: (isize, isize),
    strand_count: usize,
    position_count: usize,
) -> Result<(), LoadError> {
    match Coordinate::from_raw(reference.0, reference.1) {
        Some(c) if c.strand >= strand_count || c.position >= position_count => {
            Err(LoadError::DanglingReference {
                num: v.num,
                position,
                reference,
            })
        }
        _ => Ok(()),
    }
}
