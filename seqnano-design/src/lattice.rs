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
//! The lattice on which a design lives.
//!
//! A lattice is a grid of base slots, one row per virtual strand of the cadnano design. Each
//! slot carries an adjacency record for the scaffold graph, one for the staple graph, and a skip
//! flag. The adjacency records form intrusive doubly linked lists that are only read through the
//! [`AdjacencyMap`] trait.

use super::SeqDesignError;

/// A base slot of the lattice.
#[derive(Serialize, Deserialize, Clone, Copy, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct Coordinate {
    pub strand: usize,
    pub position: usize,
}

impl Coordinate {
    pub fn new(strand: usize, position: usize) -> Self {
        Self { strand, position }
    }

    /// Build a coordinate from a raw cadnano pair. Negative values denote the absence of a
    /// coordinate.
    pub fn from_raw(strand: isize, position: isize) -> Option<Self> {
        if strand < 0 || position < 0 {
            None
        } else {
            Some(Self::new(strand as usize, position as usize))
        }
    }
}

/// The two independent strand graphs of an origami design.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StrandGraph {
    Scaffold,
    Staple,
}

impl std::fmt::Display for StrandGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scaffold => write!(f, "scaffold"),
            Self::Staple => write!(f, "staple"),
        }
    }
}

/// Predecessor and successor of a slot in one strand graph.
///
/// The cadnano sentinel `(-1, -1, -1, -1)` is the record with neither predecessor nor successor
/// and marks a slot that no strand goes through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct AdjacencyRecord {
    pub prev: Option<Coordinate>,
    pub next: Option<Coordinate>,
}

impl AdjacencyRecord {
    pub const EMPTY: Self = Self {
        prev: None,
        next: None,
    };

    pub fn new(prev: Option<Coordinate>, next: Option<Coordinate>) -> Self {
        Self { prev, next }
    }

    /// Read a cadnano `(prev_strand, prev_pos, next_strand, next_pos)` quadruple.
    pub fn from_raw(raw: (isize, isize, isize, isize)) -> Self {
        Self {
            prev: Coordinate::from_raw(raw.0, raw.1),
            next: Coordinate::from_raw(raw.2, raw.3),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.prev.is_none() && self.next.is_none()
    }

    /// True if the record is occupied and has no predecessor
    pub fn is_start(&self) -> bool {
        !self.is_empty() && self.prev.is_none()
    }

    /// True if the record is occupied and has no successor
    pub fn is_end(&self) -> bool {
        !self.is_empty() && self.next.is_none()
    }
}

/// The skip status of a slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipFlag {
    /// The slot carries a base and consumes one character of the assigned sequence.
    Base,
    /// The slot exists but carries no base.
    Skip,
}

impl SkipFlag {
    pub fn from_raw(coordinate: Coordinate, value: isize) -> Result<Self, SeqDesignError> {
        match value {
            0 => Ok(Self::Base),
            -1 => Ok(Self::Skip),
            value => Err(SeqDesignError::InvalidSkipValue { coordinate, value }),
        }
    }
}

/// Read access to the adjacency and skip data of a design.
///
/// Querying a coordinate outside of the lattice is a programming error and panics.
pub trait AdjacencyMap {
    fn strand_count(&self) -> usize;
    fn position_count(&self) -> usize;
    fn adjacency(&self, graph: StrandGraph, coordinate: Coordinate) -> AdjacencyRecord;
    /// The raw skip value of a slot, as found in the design file.
    fn raw_skip(&self, coordinate: Coordinate) -> isize;

    fn skip(&self, coordinate: Coordinate) -> Result<SkipFlag, SeqDesignError> {
        SkipFlag::from_raw(coordinate, self.raw_skip(coordinate))
    }

    fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.strand < self.strand_count() && coordinate.position < self.position_count()
    }

    fn coordinate_count(&self) -> usize {
        self.strand_count() * self.position_count()
    }

    /// All the coordinates of the lattice in row-major order.
    fn coordinates(&self) -> Box<dyn Iterator<Item = Coordinate>> {
        let position_count = self.position_count();
        Box::new(
            (0..self.strand_count()).flat_map(move |s| {
                (0..position_count).map(move |p| Coordinate::new(s, p))
            }),
        )
    }
}

/// A dense, read-only lattice.
#[derive(Clone, Debug)]
pub struct Lattice {
    strand_count: usize,
    position_count: usize,
    scaffold: Vec<AdjacencyRecord>,
    staple: Vec<AdjacencyRecord>,
    skip: Vec<isize>,
}

impl Lattice {
    fn index(&self, coordinate: Coordinate) -> usize {
        assert!(
            self.contains(coordinate),
            "coordinate {} is outside of a {}x{} lattice",
            coordinate,
            self.strand_count,
            self.position_count
        );
        coordinate.strand * self.position_count + coordinate.position
    }
}

impl AdjacencyMap for Lattice {
    fn strand_count(&self) -> usize {
        self.strand_count
    }

    fn position_count(&self) -> usize {
        self.position_count
    }

    fn adjacency(&self, graph: StrandGraph, coordinate: Coordinate) -> AdjacencyRecord {
        let idx = self.index(coordinate);
        match graph {
            StrandGraph::Scaffold => self.scaffold[idx],
            StrandGraph::Staple => self.staple[idx],
        }
    }

    fn raw_skip(&self, coordinate: Coordinate) -> isize {
        self.skip[self.index(coordinate)]
    }
}

/// Builds a [`Lattice`]. Every slot starts unoccupied in both graphs with a skip value of 0.
pub struct LatticeBuilder {
    lattice: Lattice,
}

impl LatticeBuilder {
    pub fn new(strand_count: usize, position_count: usize) -> Self {
        let len = strand_count * position_count;
        Self {
            lattice: Lattice {
                strand_count,
                position_count,
                scaffold: vec![AdjacencyRecord::EMPTY; len],
                staple: vec![AdjacencyRecord::EMPTY; len],
                skip: vec![0; len],
            },
        }
    }

    pub fn set_adjacency(
        &mut self,
        graph: StrandGraph,
        coordinate: Coordinate,
        record: AdjacencyRecord,
    ) -> &mut Self {
        let idx = self.lattice.index(coordinate);
        match graph {
            StrandGraph::Scaffold => self.lattice.scaffold[idx] = record,
            StrandGraph::Staple => self.lattice.staple[idx] = record,
        }
        self
    }

    pub fn set_skip(&mut self, coordinate: Coordinate, value: isize) -> &mut Self {
        let idx = self.lattice.index(coordinate);
        self.lattice.skip[idx] = value;
        self
    }

    /// Chain `coordinates` into a single path of `graph`, in the given order.
    ///
    /// A path of length one cannot be represented in the cadnano encoding and is left
    /// unoccupied.
    pub fn link_path(&mut self, graph: StrandGraph, coordinates: &[Coordinate]) -> &mut Self {
        if coordinates.len() < 2 {
            return self;
        }
        for (i, c) in coordinates.iter().enumerate() {
            let prev = if i > 0 { Some(coordinates[i - 1]) } else { None };
            let next = coordinates.get(i + 1).cloned();
            self.set_adjacency(graph, *c, AdjacencyRecord::new(prev, next));
        }
        self
    }

    pub fn build(self) -> Lattice {
        self.lattice
    }
}
