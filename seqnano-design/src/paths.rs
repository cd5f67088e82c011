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
//! Discovery of the paths of a strand graph.

use super::traversal::{
    walk, walk_to_end, walk_to_start, Direction, PathIter, VisitedSet, WalkOutcome,
};
use super::{AdjacencyMap, Coordinate, SeqDesignError, SkipFlag, StrandGraph};
use std::collections::BTreeSet;

/// A maximal chain of coordinates of one strand graph, identified by its two extremities.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Path {
    pub start: Coordinate,
    pub end: Coordinate,
}

impl Path {
    pub fn coordinates<'a, M: AdjacencyMap + ?Sized>(
        &self,
        map: &'a M,
        graph: StrandGraph,
    ) -> PathIter<'a, M> {
        PathIter::new(map, graph, self.start)
    }

    /// Number of slots of the path, skips included.
    pub fn length<M: AdjacencyMap + ?Sized>(&self, map: &M, graph: StrandGraph) -> usize {
        self.coordinates(map, graph).count()
    }

    /// Number of slots of the path that carry a base.
    pub fn base_count<M: AdjacencyMap + ?Sized>(&self, map: &M, graph: StrandGraph) -> usize {
        self.coordinates(map, graph)
            .filter(|c| map.skip(*c) == Ok(SkipFlag::Base))
            .count()
    }
}

/// Find all the paths of `graph`.
///
/// Every coordinate of the lattice is walked back to the start of its path. The paths are
/// returned sorted by start coordinate, in row-major order.
pub fn find_paths<M: AdjacencyMap + ?Sized>(
    map: &M,
    graph: StrandGraph,
) -> Result<Vec<Path>, SeqDesignError> {
    let mut starts = BTreeSet::new();
    for coordinate in map.coordinates() {
        if let Some(start) = walk_to_start(map, graph, coordinate)? {
            starts.insert(start);
        }
    }
    close_paths(map, graph, starts)
}

/// Same as [`find_paths`], but coordinates already explored by a previous backward walk are not
/// explored again.
pub fn find_paths_marking<M: AdjacencyMap + ?Sized>(
    map: &M,
    graph: StrandGraph,
) -> Result<Vec<Path>, SeqDesignError> {
    let mut starts = BTreeSet::new();
    let mut visited = VisitedSet::default();
    for coordinate in map.coordinates() {
        let outcome = walk(
            map,
            graph,
            coordinate,
            Direction::Backward,
            Some(&mut visited),
        )?;
        if let WalkOutcome::Terminal(start) = outcome {
            starts.insert(start);
        }
    }
    close_paths(map, graph, starts)
}

fn close_paths<M: AdjacencyMap + ?Sized>(
    map: &M,
    graph: StrandGraph,
    starts: BTreeSet<Coordinate>,
) -> Result<Vec<Path>, SeqDesignError> {
    let mut ret = Vec::with_capacity(starts.len());
    for start in starts {
        let end = walk_to_end(map, graph, start)?.unwrap_or(start);
        log::debug!("{} path {} -> {}", graph, start, end);
        ret.push(Path { start, end });
    }
    Ok(ret)
}

/// Check that the start and end of a closed scaffold loop are next to each other.
///
/// On even strands the start is on the right of the end, on odd strands it is on its left.
pub fn validate_closure(start: Coordinate, end: Coordinate) -> Result<(), SeqDesignError> {
    let connected = start.strand == end.strand
        && if end.strand % 2 == 0 {
            start.position == end.position + 1
        } else {
            start.position + 1 == end.position
        };
    if connected {
        Ok(())
    } else {
        Err(SeqDesignError::DisconnectedScaffold { start, end })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AdjacencyRecord, LatticeBuilder};
    use std::collections::HashSet;

    fn c(strand: usize, position: usize) -> Coordinate {
        Coordinate::new(strand, position)
    }

    /// Three scaffold paths and two staple paths on a 3x8 lattice.
    fn three_paths() -> crate::Lattice {
        let mut builder = LatticeBuilder::new(3, 8);
        builder
            .link_path(
                StrandGraph::Scaffold,
                &[c(0, 0), c(0, 1), c(0, 2), c(1, 2), c(1, 1), c(1, 0)],
            )
            .link_path(StrandGraph::Scaffold, &[c(0, 7), c(0, 6), c(0, 5)])
            .link_path(StrandGraph::Scaffold, &[c(2, 3), c(2, 4)])
            .link_path(StrandGraph::Staple, &[c(1, 0), c(1, 1), c(0, 1), c(0, 0)])
            .link_path(StrandGraph::Staple, &[c(2, 7), c(2, 6)]);
        builder.build()
    }

    #[test]
    fn paths_are_found() {
        let lattice = three_paths();
        let paths = find_paths(&lattice, StrandGraph::Scaffold).unwrap();
        assert_eq!(
            paths,
            vec![
                Path {
                    start: c(0, 0),
                    end: c(1, 0)
                },
                Path {
                    start: c(0, 7),
                    end: c(0, 5)
                },
                Path {
                    start: c(2, 3),
                    end: c(2, 4)
                },
            ]
        );
        let staples = find_paths(&lattice, StrandGraph::Staple).unwrap();
        assert_eq!(staples.len(), 2);
    }

    #[test]
    fn marking_gives_same_paths() {
        let lattice = three_paths();
        for graph in [StrandGraph::Scaffold, StrandGraph::Staple] {
            assert_eq!(
                find_paths(&lattice, graph),
                find_paths_marking(&lattice, graph)
            );
        }
    }

    #[test]
    fn paths_partition_occupied_coordinates() {
        let lattice = three_paths();
        for graph in [StrandGraph::Scaffold, StrandGraph::Staple] {
            let paths = find_paths(&lattice, graph).unwrap();
            let mut seen = HashSet::new();
            for p in paths.iter() {
                for coordinate in p.coordinates(&lattice, graph) {
                    assert!(seen.insert(coordinate), "{} in two paths", coordinate);
                }
            }
            let occupied: HashSet<_> = lattice
                .coordinates()
                .filter(|c| !lattice.adjacency(graph, *c).is_empty())
                .collect();
            assert_eq!(seen, occupied);
        }
    }

    #[test]
    fn lengths_ignore_skips() {
        let mut builder = LatticeBuilder::new(1, 5);
        builder
            .link_path(
                StrandGraph::Scaffold,
                &[c(0, 0), c(0, 1), c(0, 2), c(0, 3), c(0, 4)],
            )
            .set_skip(c(0, 1), -1)
            .set_skip(c(0, 3), -1);
        let lattice = builder.build();
        let path = find_paths(&lattice, StrandGraph::Scaffold).unwrap()[0];
        assert_eq!(path.length(&lattice, StrandGraph::Scaffold), 5);
        assert_eq!(path.base_count(&lattice, StrandGraph::Scaffold), 3);
    }

    #[test]
    fn cycles_are_rejected_by_discovery() {
        let mut builder = LatticeBuilder::new(1, 3);
        builder
            .set_adjacency(
                StrandGraph::Staple,
                c(0, 1),
                AdjacencyRecord::new(Some(c(0, 2)), Some(c(0, 2))),
            )
            .set_adjacency(
                StrandGraph::Staple,
                c(0, 2),
                AdjacencyRecord::new(Some(c(0, 1)), Some(c(0, 1))),
            );
        let lattice = builder.build();
        assert_eq!(
            find_paths(&lattice, StrandGraph::Staple),
            Err(SeqDesignError::NoBreakpoint {
                coordinate: c(0, 1)
            })
        );
        assert!(find_paths_marking(&lattice, StrandGraph::Staple).is_err());
        assert_eq!(find_paths(&lattice, StrandGraph::Scaffold), Ok(vec![]));
    }

    #[test]
    fn marking_agrees_on_a_tail_into_a_ring() {
        let mut builder = LatticeBuilder::new(1, 3);
        builder
            .set_adjacency(
                StrandGraph::Scaffold,
                c(0, 0),
                AdjacencyRecord::new(Some(c(0, 1)), None),
            )
            .set_adjacency(
                StrandGraph::Scaffold,
                c(0, 1),
                AdjacencyRecord::new(Some(c(0, 2)), Some(c(0, 2))),
            )
            .set_adjacency(
                StrandGraph::Scaffold,
                c(0, 2),
                AdjacencyRecord::new(Some(c(0, 1)), Some(c(0, 1))),
            );
        let lattice = builder.build();
        let plain = find_paths(&lattice, StrandGraph::Scaffold);
        assert_eq!(
            plain,
            Err(SeqDesignError::NoBreakpoint {
                coordinate: c(0, 0)
            })
        );
        assert_eq!(find_paths_marking(&lattice, StrandGraph::Scaffold), plain);
    }

    #[test]
    fn closure_parity() {
        assert!(validate_closure(c(0, 6), c(0, 5)).is_ok());
        assert!(validate_closure(c(1, 4), c(1, 5)).is_ok());
        assert!(validate_closure(c(0, 4), c(0, 5)).is_err());
        assert!(validate_closure(c(1, 6), c(1, 5)).is_err());
        assert_eq!(
            validate_closure(c(0, 1), c(2, 0)),
            Err(SeqDesignError::DisconnectedScaffold {
                start: c(0, 1),
                end: c(2, 0)
            })
        );
    }
}
