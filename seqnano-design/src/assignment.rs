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
//! Assignment of bases to the paths of the scaffold graph.

use super::generator::SequenceGenerator;
use super::paths::Path;
use super::{AdjacencyMap, Coordinate, SeqDesignError, SkipFlag, StrandGraph};
use rand::Rng;

/// The character written at positions that carry no base.
pub const SKIP_MARKER: char = 'X';

/// A coordinate to base mapping for one strand graph.
#[derive(Clone, Debug, PartialEq)]
pub struct SequenceLookup {
    strand_count: usize,
    position_count: usize,
    bases: Vec<Option<char>>,
}

impl SequenceLookup {
    pub fn new(strand_count: usize, position_count: usize) -> Self {
        Self {
            strand_count,
            position_count,
            bases: vec![None; strand_count * position_count],
        }
    }

    pub fn for_map<M: AdjacencyMap + ?Sized>(map: &M) -> Self {
        Self::new(map.strand_count(), map.position_count())
    }

    pub fn strand_count(&self) -> usize {
        self.strand_count
    }

    pub fn position_count(&self) -> usize {
        self.position_count
    }

    pub fn get(&self, coordinate: Coordinate) -> Option<char> {
        self.index(coordinate).and_then(|idx| self.bases[idx])
    }

    pub(crate) fn insert(&mut self, coordinate: Coordinate, base: char) {
        if let Some(idx) = self.index(coordinate) {
            debug_assert!(
                self.bases[idx].is_none(),
                "base {} assigned twice",
                coordinate
            );
            self.bases[idx] = Some(base);
        }
    }

    /// The bases of one strand of the lattice, `None` for unassigned positions.
    pub fn row(&self, strand: usize) -> &[Option<char>] {
        let start = strand * self.position_count;
        &self.bases[start..start + self.position_count]
    }

    /// The assigned coordinates and their base, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, char)> + '_ {
        let position_count = self.position_count;
        self.bases.iter().enumerate().filter_map(move |(idx, b)| {
            b.map(|b| {
                (
                    Coordinate::new(idx / position_count, idx % position_count),
                    b,
                )
            })
        })
    }

    pub fn len(&self) -> usize {
        self.bases.iter().filter(|b| b.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn index(&self, coordinate: Coordinate) -> Option<usize> {
        if coordinate.strand < self.strand_count && coordinate.position < self.position_count {
            Some(coordinate.strand * self.position_count + coordinate.position)
        } else {
            None
        }
    }
}

/// A path together with the base assigned to each of its coordinates.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct AssignedStrand {
    pub start: Coordinate,
    pub end: Coordinate,
    /// The coordinates of the path in order, with their base or [`SKIP_MARKER`].
    pub bases: Vec<(Coordinate, char)>,
    /// The bases of the strand at the positions that are not skipped.
    pub sequence: String,
}

impl AssignedStrand {
    pub fn new(path: Path) -> Self {
        Self {
            start: path.start,
            end: path.end,
            bases: Vec::new(),
            sequence: String::new(),
        }
    }

    /// Append the next slot of the path. Only slots that carry a base extend `sequence`.
    pub fn push(&mut self, coordinate: Coordinate, base: char, skip: SkipFlag) {
        if skip == SkipFlag::Base {
            self.sequence.push(base);
        }
        self.bases.push((coordinate, base));
    }

    /// Number of slots of the strand, skips included.
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    /// Number of actual bases of the strand.
    pub fn base_count(&self) -> usize {
        self.sequence.chars().count()
    }

    pub fn gc_content(&self) -> f64 {
        super::generator::gc_content(&self.sequence)
    }
}

/// The scaffold strands with their bases.
#[derive(Clone, Debug)]
pub struct ScaffoldAssignment {
    pub strands: Vec<AssignedStrand>,
    /// The index in `strands` of the scaffold that received the literal sequence.
    pub primary: usize,
    pub lookup: SequenceLookup,
}

/// Return the index of the path with the most bases.
///
/// On a tie, the first of the longest paths is chosen. Since paths are discovered in row-major
/// order of their start, that is the longest path whose start comes first.
pub fn primary_scaffold<M: AdjacencyMap + ?Sized>(
    map: &M,
    paths: &[Path],
) -> Result<usize, SeqDesignError> {
    let mut best: Option<(usize, usize)> = None;
    for (i, path) in paths.iter().enumerate() {
        let count = path.base_count(map, StrandGraph::Scaffold);
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((i, count));
        }
    }
    best.map(|(i, _)| i).ok_or(SeqDesignError::NoScaffoldFound)
}

/// Walk along `path`, consuming one character of `source` for each position that carries a
/// base and writing [`SKIP_MARKER`] at skipped positions.
pub fn assign_path<M: AdjacencyMap + ?Sized>(
    map: &M,
    graph: StrandGraph,
    path: Path,
    source: &str,
    lookup: &mut SequenceLookup,
) -> Result<AssignedStrand, SeqDesignError> {
    let mut source_bases = source.chars();
    let mut strand = AssignedStrand::new(path);
    for coordinate in path.coordinates(map, graph) {
        let skip = map.skip(coordinate)?;
        let base = match skip {
            SkipFlag::Base => {
                source_bases
                    .next()
                    .ok_or_else(|| SeqDesignError::SequenceTooShort {
                        sequence_length: source.chars().count(),
                        longest_scaffold: path.base_count(map, graph),
                    })?
            }
            SkipFlag::Skip => SKIP_MARKER,
        };
        lookup.insert(coordinate, base);
        strand.push(coordinate, base, skip);
    }
    Ok(strand)
}

/// Assign a sequence to every scaffold path.
///
/// The path with the most bases receives `literal`, the other ones receive sequences drawn by
/// `generator`.
pub fn assign_scaffold_sequences<M: AdjacencyMap + ?Sized, R: Rng>(
    map: &M,
    paths: &[Path],
    literal: &str,
    generator: &mut SequenceGenerator<R>,
) -> Result<ScaffoldAssignment, SeqDesignError> {
    let primary = primary_scaffold(map, paths)?;
    let longest_scaffold = paths[primary].base_count(map, StrandGraph::Scaffold);
    let sequence_length = literal.chars().count();
    if sequence_length < longest_scaffold {
        return Err(SeqDesignError::SequenceTooShort {
            sequence_length,
            longest_scaffold,
        });
    }

    let mut lookup = SequenceLookup::for_map(map);
    let mut strands = Vec::with_capacity(paths.len());
    for (i, path) in paths.iter().enumerate() {
        let strand = if i == primary {
            assign_path(map, StrandGraph::Scaffold, *path, literal, &mut lookup)?
        } else {
            let length = path.base_count(map, StrandGraph::Scaffold);
            let (sequence, gc) = generator.generate(length)?;
            log::info!(
                "Scaffold starting at {} gets a generated sequence of {} bases ({:.1}% GC)",
                path.start,
                length,
                gc
            );
            assign_path(map, StrandGraph::Scaffold, *path, &sequence, &mut lookup)?
        };
        strands.push(strand);
    }
    Ok(ScaffoldAssignment {
        strands,
        primary,
        lookup,
    })
}
