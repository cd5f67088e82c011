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
//! Staple sequences, derived from the scaffold sequences.

use super::assignment::{AssignedStrand, SequenceLookup, SKIP_MARKER};
use super::paths::Path;
use super::{AdjacencyMap, SeqDesignError, SkipFlag, StrandGraph};

/// The Watson-Crick complement of `base`. The skip marker is its own complement.
pub fn complement(base: char) -> Result<char, SeqDesignError> {
    match base {
        'A' => Ok('T'),
        'T' => Ok('A'),
        'G' => Ok('C'),
        'C' => Ok('G'),
        SKIP_MARKER => Ok(SKIP_MARKER),
        c => Err(SeqDesignError::InvalidBase(c)),
    }
}

/// Assign to every staple position the complement of the scaffold base at the same coordinate.
///
/// Skipped positions receive [`SKIP_MARKER`] and positions that are not paired with a scaffold
/// receive `default_base`.
pub fn assign_staple_sequences<M: AdjacencyMap + ?Sized>(
    map: &M,
    paths: &[Path],
    scaffold_lookup: &SequenceLookup,
    default_base: char,
) -> Result<(Vec<AssignedStrand>, SequenceLookup), SeqDesignError> {
    let mut lookup = SequenceLookup::for_map(map);
    let mut strands = Vec::with_capacity(paths.len());
    for path in paths.iter() {
        let mut strand = AssignedStrand::new(*path);
        for coordinate in path.coordinates(map, StrandGraph::Staple) {
            let skip = map.skip(coordinate)?;
            let base = match (skip, scaffold_lookup.get(coordinate)) {
                (SkipFlag::Skip, _) => SKIP_MARKER,
                (SkipFlag::Base, Some(scaffold_base)) => complement(scaffold_base)?,
                (SkipFlag::Base, None) => default_base,
            };
            lookup.insert(coordinate, base);
            strand.push(coordinate, base, skip);
        }
        strands.push(strand);
    }
    Ok((strands, lookup))
}
