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
use super::*;

fn c(strand: usize, position: usize) -> Coordinate {
    Coordinate::new(strand, position)
}

/// One scaffold going through the 10 positions of strand 0 and one staple over positions 2 to 5.
fn small_design() -> Lattice {
    let mut builder = LatticeBuilder::new(2, 10);
    let scaffold: Vec<_> = (0..10).map(|p| c(0, p)).collect();
    let staple: Vec<_> = (2..6).map(|p| c(0, p)).collect();
    builder
        .link_path(StrandGraph::Scaffold, &scaffold)
        .link_path(StrandGraph::Staple, &staple);
    builder.build()
}

/// A two helices origami: the scaffold goes right on strand 0 and comes back on strand 1, with
/// its breakpoint on strand 0. Two staples cross between the helices and a third one is not
/// paired with the scaffold.
fn origami() -> Lattice {
    let mut builder = LatticeBuilder::new(3, 32);
    let mut scaffold: Vec<_> = (16..32).map(|p| c(0, p)).collect();
    scaffold.extend((0..32).rev().map(|p| c(1, p)));
    scaffold.extend((0..16).map(|p| c(0, p)));
    let mut staple_1: Vec<_> = (0..16).map(|p| c(1, p)).collect();
    staple_1.extend((0..16).rev().map(|p| c(0, p)));
    let mut staple_2: Vec<_> = (16..32).map(|p| c(1, p)).collect();
    staple_2.extend((16..32).rev().map(|p| c(0, p)));
    let lonely: Vec<_> = (0..20).map(|p| c(2, p)).collect();
    builder
        .link_path(StrandGraph::Scaffold, &scaffold)
        .link_path(StrandGraph::Staple, &staple_1)
        .link_path(StrandGraph::Staple, &staple_2)
        .link_path(StrandGraph::Staple, &lonely)
        .set_skip(c(1, 8), -1)
        .set_skip(c(1, 24), -1);
    builder.build()
}

#[test]
fn small_design_end_to_end() {
    let lattice = small_design();
    let output = SequenceDesigner::default()
        .run(&lattice, "ACGTACGTAC")
        .unwrap();
    assert_eq!(output.scaffolds.len(), 1);
    for (p, b) in "ACGTACGTAC".chars().enumerate() {
        assert_eq!(output.scaffold_lookup.get(c(0, p)), Some(b));
    }
    assert_eq!(output.scaffold_lookup.len(), 10);
    assert_eq!(output.staples.len(), 1);
    let staple_bases: Vec<char> = output.staples[0].bases.iter().map(|(_, b)| *b).collect();
    assert_eq!(staple_bases, vec!['G', 'T', 'A', 'C']);
    assert_eq!(output.staples[0].start, c(0, 2));
    assert_eq!(output.staples[0].end, c(0, 5));
    assert_eq!(output.staple_lookup.get(c(0, 4)), Some('A'));
    assert_eq!(output.staple_lookup.get(c(1, 4)), None);
}

#[test]
fn small_design_with_short_sequence() {
    let lattice = small_design();
    assert!(matches!(
        SequenceDesigner::default().run(&lattice, "ACGTA"),
        Err(SeqDesignError::SequenceTooShort {
            sequence_length: 5,
            longest_scaffold: 10
        })
    ));
}

#[test]
fn origami_end_to_end() {
    let lattice = origami();
    let literal = "ACGTTGCA".repeat(20);
    let parameters = DesignerParameters {
        require_closed_scaffold: true,
        ..Default::default()
    };
    let output = SequenceDesigner::new(parameters)
        .run(&lattice, &literal)
        .unwrap();

    let scaffold = &output.scaffolds[output.primary];
    assert_eq!(scaffold.start, c(0, 16));
    assert_eq!(scaffold.end, c(0, 15));
    assert_eq!(scaffold.len(), 64);
    assert_eq!(scaffold.base_count(), 62);
    assert_eq!(scaffold.sequence, literal[..62]);

    assert_eq!(output.staples.len(), 3);
    for staple in output.staples.iter() {
        for (coordinate, base) in staple.bases.iter() {
            match output.scaffold_lookup.get(*coordinate) {
                Some(scaffold_base) => assert_eq!(complement(scaffold_base), Ok(*base)),
                None => assert_eq!(*base, 'A'),
            }
        }
    }
    // The staple that is not paired with the scaffold is only made of A.
    let lonely = output
        .staples
        .iter()
        .find(|s| s.start == c(2, 0))
        .unwrap();
    assert!(lonely.sequence.chars().all(|b| b == 'A'));
    assert!(output.warnings.contains(&Warning::PolyAAtStart {
        staple: 2,
        start: c(2, 0),
        run: 7
    }));
    assert!(output.warnings.contains(&Warning::PolyAAtEnd {
        staple: 2,
        start: c(2, 0),
        run: 7
    }));

    assert_eq!(output.scaffold_lookup.iter().count(), 64);
    assert!(output
        .scaffold_lookup
        .iter()
        .all(|(coordinate, _)| coordinate.strand < 2));

    // Skips are shared by both graphs
    assert_eq!(output.scaffold_lookup.get(c(1, 8)), Some(SKIP_MARKER));
    assert_eq!(output.staple_lookup.get(c(1, 8)), Some(SKIP_MARKER));
}

#[test]
fn open_scaffold_is_rejected_when_closure_is_required() {
    let lattice = small_design();
    let parameters = DesignerParameters {
        require_closed_scaffold: true,
        ..Default::default()
    };
    assert!(matches!(
        SequenceDesigner::new(parameters).run(&lattice, "ACGTACGTAC"),
        Err(SeqDesignError::DisconnectedScaffold { .. })
    ));
}

#[test]
fn secondary_scaffolds_get_generated_sequences() {
    let mut builder = LatticeBuilder::new(4, 40);
    let primary: Vec<_> = (0..40).map(|p| c(0, p)).collect();
    let secondary: Vec<_> = (0..25).rev().map(|p| c(2, p)).collect();
    let tertiary: Vec<_> = (10..30).map(|p| c(3, p)).collect();
    builder
        .link_path(StrandGraph::Scaffold, &primary)
        .link_path(StrandGraph::Scaffold, &secondary)
        .link_path(StrandGraph::Scaffold, &tertiary)
        .set_skip(c(3, 12), -1);
    let lattice = builder.build();
    let literal = "GATTACA".repeat(6);

    let output = SequenceDesigner::default().run(&lattice, &literal).unwrap();
    assert_eq!(output.scaffolds.len(), 3);
    assert_eq!(output.primary, 0);
    assert_eq!(output.scaffolds[0].sequence, literal[..40]);
    assert_eq!(output.scaffolds[1].base_count(), 25);
    assert_eq!(output.scaffolds[2].base_count(), 19);
    assert_eq!(output.scaffolds[2].len(), 20);
    for secondary in &output.scaffolds[1..] {
        assert!(secondary.gc_content() <= 44.);
        assert!(generator::longest_run(&secondary.sequence, 'G') <= 4);
        assert!(generator::longest_run(&secondary.sequence, 'C') <= 4);
    }

    // A fixed seed gives the same sequences.
    let again = SequenceDesigner::default().run(&lattice, &literal).unwrap();
    assert_eq!(output.scaffolds, again.scaffolds);
}

#[test]
fn design_without_scaffold() {
    let mut builder = LatticeBuilder::new(1, 10);
    builder.link_path(StrandGraph::Staple, &[c(0, 1), c(0, 2)]);
    let lattice = builder.build();
    assert!(matches!(
        SequenceDesigner::default().run(&lattice, "ACGT"),
        Err(SeqDesignError::NoScaffoldFound)
    ));
}

#[test]
fn ring_staple_stops_the_run() {
    let mut builder = LatticeBuilder::new(1, 10);
    let scaffold: Vec<_> = (0..10).map(|p| c(0, p)).collect();
    builder
        .link_path(StrandGraph::Scaffold, &scaffold)
        .set_adjacency(
            StrandGraph::Staple,
            c(0, 3),
            AdjacencyRecord::new(Some(c(0, 4)), Some(c(0, 4))),
        )
        .set_adjacency(
            StrandGraph::Staple,
            c(0, 4),
            AdjacencyRecord::new(Some(c(0, 3)), Some(c(0, 3))),
        );
    let lattice = builder.build();
    assert!(matches!(
        SequenceDesigner::default().run(&lattice, "ACGTACGTAC"),
        Err(SeqDesignError::NoBreakpoint { .. })
    ));
}

#[test]
fn scaffold_running_into_a_ring_stops_the_run() {
    let mut builder = LatticeBuilder::new(1, 10);
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
    assert_eq!(
        SequenceDesigner::default()
            .run(&lattice, "ACGTACGTAC")
            .map(|_| ()),
        Err(SeqDesignError::NoBreakpoint {
            coordinate: c(0, 0)
        })
    );
}

#[test]
fn output_serializes_without_lookups() {
    let output = SequenceDesigner::default()
        .run(&small_design(), "ACGTACGTAC")
        .unwrap();
    let json = serde_json::to_value(&output).unwrap();
    assert_eq!(json["scaffolds"][0]["sequence"], "ACGTACGTAC");
    assert_eq!(json["staples"][0]["sequence"], "GTAC");
    assert!(json.get("scaffold_lookup").is_none());
}
