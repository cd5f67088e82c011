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
//! Walks along the strand graphs.
//!
//! All walks go through [`walk`], which is parameterized by the direction of the walk and by an
//! optional set of already visited coordinates.

use super::{AdjacencyMap, AdjacencyRecord, Coordinate, SeqDesignError, StrandGraph};
use ahash::AHashSet;

/// The set of coordinates already explored by a marking walk.
pub type VisitedSet = AHashSet<Coordinate>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// From 5' to 3', following the `next` links
    Forward,
    /// From 3' to 5', following the `prev` links
    Backward,
}

/// The result of a whole-path walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalkOutcome {
    /// The initial coordinate is not part of any path.
    Empty,
    /// The last coordinate reached in the direction of the walk.
    Terminal(Coordinate),
    /// The walk reached a coordinate that an earlier marking walk already explored.
    AlreadyVisited,
}

/// Move by one slot. Return `None` if `coordinate` has no neighbour in that direction.
pub fn step<M: AdjacencyMap + ?Sized>(
    map: &M,
    graph: StrandGraph,
    coordinate: Coordinate,
    direction: Direction,
) -> Option<(Coordinate, AdjacencyRecord)> {
    let record = map.adjacency(graph, coordinate);
    let neighbour = match direction {
        Direction::Forward => record.next,
        Direction::Backward => record.prev,
    }?;
    Some((neighbour, map.adjacency(graph, neighbour)))
}

pub fn step_forward<M: AdjacencyMap + ?Sized>(
    map: &M,
    graph: StrandGraph,
    coordinate: Coordinate,
) -> Option<(Coordinate, AdjacencyRecord)> {
    step(map, graph, coordinate, Direction::Forward)
}

pub fn step_backward<M: AdjacencyMap + ?Sized>(
    map: &M,
    graph: StrandGraph,
    coordinate: Coordinate,
) -> Option<(Coordinate, AdjacencyRecord)> {
    step(map, graph, coordinate, Direction::Backward)
}

/// Walk from `origin` until the last coordinate of its path in `direction`.
///
/// When `visited` is given, every explored coordinate is inserted in it and the walk stops with
/// [`WalkOutcome::AlreadyVisited`] as soon as it meets a coordinate explored by a previous walk.
///
/// A walk that never terminates is a cycle and fails with [`SeqDesignError::NoBreakpoint`] on
/// `origin`. This covers coming back to `origin`, a marking walk meeting one of its own
/// coordinates, and a walk longer than the number of coordinates of the lattice, which happens
/// when the path runs into a ring that does not contain `origin`.
pub fn walk<M: AdjacencyMap + ?Sized>(
    map: &M,
    graph: StrandGraph,
    origin: Coordinate,
    direction: Direction,
    mut visited: Option<&mut VisitedSet>,
) -> Result<WalkOutcome, SeqDesignError> {
    if map.adjacency(graph, origin).is_empty() {
        return Ok(WalkOutcome::Empty);
    }
    // Coordinates explored by this walk, as opposed to those of earlier marking walks.
    let mut this_walk = VisitedSet::default();
    if let Some(visited) = visited.as_mut() {
        if !visited.insert(origin) {
            return Ok(WalkOutcome::AlreadyVisited);
        }
        this_walk.insert(origin);
    }

    let no_breakpoint = SeqDesignError::NoBreakpoint { coordinate: origin };
    let max_steps = map.coordinate_count();
    let mut current = origin;
    let mut nb_steps = 0;
    while let Some((neighbour, _)) = step(map, graph, current, direction) {
        if neighbour == origin {
            return Err(no_breakpoint);
        }
        if let Some(visited) = visited.as_mut() {
            if this_walk.contains(&neighbour) {
                return Err(no_breakpoint);
            }
            if !visited.insert(neighbour) {
                return Ok(WalkOutcome::AlreadyVisited);
            }
            this_walk.insert(neighbour);
        }
        nb_steps += 1;
        if nb_steps > max_steps {
            return Err(no_breakpoint);
        }
        current = neighbour;
    }
    Ok(WalkOutcome::Terminal(current))
}

/// Return the end of the path going through `coordinate`, or `None` if no path goes through it.
pub fn walk_to_end<M: AdjacencyMap + ?Sized>(
    map: &M,
    graph: StrandGraph,
    coordinate: Coordinate,
) -> Result<Option<Coordinate>, SeqDesignError> {
    walk(map, graph, coordinate, Direction::Forward, None).map(terminal)
}

/// Return the start of the path going through `coordinate`, or `None` if no path goes through
/// it.
pub fn walk_to_start<M: AdjacencyMap + ?Sized>(
    map: &M,
    graph: StrandGraph,
    coordinate: Coordinate,
) -> Result<Option<Coordinate>, SeqDesignError> {
    walk(map, graph, coordinate, Direction::Backward, None).map(terminal)
}

fn terminal(outcome: WalkOutcome) -> Option<Coordinate> {
    match outcome {
        WalkOutcome::Terminal(c) => Some(c),
        _ => None,
    }
}

/// Iterates over the coordinates of a path, from a given coordinate to the end of the path.
pub struct PathIter<'a, M: AdjacencyMap + ?Sized> {
    map: &'a M,
    graph: StrandGraph,
    next: Option<Coordinate>,
    remaining: usize,
}

impl<'a, M: AdjacencyMap + ?Sized> PathIter<'a, M> {
    pub fn new(map: &'a M, graph: StrandGraph, start: Coordinate) -> Self {
        Self {
            map,
            graph,
            next: Some(start),
            remaining: map.coordinate_count(),
        }
    }
}

impl<'a, M: AdjacencyMap + ?Sized> Iterator for PathIter<'a, M> {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Coordinate> {
        let current = self.next?;
        if self.remaining == 0 {
            self.next = None;
            return None;
        }
        self.remaining -= 1;
        self.next = self.map.adjacency(self.graph, current).next;
        Some(current)
    }
}
