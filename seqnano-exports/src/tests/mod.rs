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
use seqnano_design::{Coordinate, LatticeBuilder, SequenceDesigner, StrandGraph};
use strum::IntoEnumIterator;

fn c(strand: usize, position: usize) -> Coordinate {
    Coordinate::new(strand, position)
}

/// Scaffold on strand 0 going right and coming back on strand 1, one staple on each strand.
fn design_output() -> DesignOutput {
    let mut builder = LatticeBuilder::new(2, 6);
    let mut scaffold: Vec<_> = (0..6).map(|p| c(0, p)).collect();
    scaffold.extend((0..6).rev().map(|p| c(1, p)));
    let staple_0: Vec<_> = (1..5).rev().map(|p| c(0, p)).collect();
    let staple_1: Vec<_> = (2..4).map(|p| c(1, p)).collect();
    builder
        .link_path(StrandGraph::Scaffold, &scaffold)
        .link_path(StrandGraph::Staple, &staple_0)
        .link_path(StrandGraph::Staple, &staple_1)
        .set_skip(c(1, 0), -1);
    SequenceDesigner::default()
        .run(&builder.build(), "AACCGGTTAAC")
        .unwrap()
}

#[test]
fn sequence_list_lines() {
    let output = design_output();
    let mut buffer = Vec::new();
    sequence_list::write_strands(&mut buffer, &output.scaffolds).unwrap();
    let text = String::from_utf8(buffer).unwrap();
    assert_eq!(
        text,
        "Start,End,Sequence,Length\n0[0],1[0],AACCGGTTAAC,11\n"
    );

    let mut buffer = Vec::new();
    sequence_list::write_strands(&mut buffer, &output.staples).unwrap();
    let text = String::from_utf8(buffer).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], sequence_list::HEADER);
    assert_eq!(lines[1], "0[4],0[1],CGGT,4");
    assert_eq!(lines[2], "1[2],1[3],TT,2");
}

#[test]
fn visualized_map() {
    let output = design_output();
    let mut buffer = Vec::new();
    visualizer::write_map(&mut buffer, &output.scaffold_lookup, &output.staple_lookup).unwrap();
    let text = String::from_utf8(buffer).unwrap();
    let expected = "\
Scaffold 0    |AACCGG|
Staple 0      |-TGGC-|

Staple 1      |--TT--|
Scaffold 1    |XCAATT|

";
    assert_eq!(text, expected);
}

#[test]
fn export_target_paths() {
    let target = ExportTarget::for_design("out", "designs/tile.json");
    assert_eq!(target.name(), "tile");
    assert_eq!(target.directory(), Path::new("out/tile"));
    assert_eq!(
        target.file("staples_", "txt"),
        PathBuf::from("out/tile/staples_tile.txt")
    );
    assert_eq!(target.file("", "xlsx"), PathBuf::from("out/tile/tile.xlsx"));
}

#[test]
fn export_every_type() {
    let output = design_output();
    let dir = tempfile::tempdir().unwrap();
    let target = ExportTarget::for_design(dir.path(), "tile.json");
    for export_type in ExportType::iter() {
        let success = export(&output, export_type, &target).unwrap();
        assert!(success.message().starts_with(SUCCESSFUL_EXPORT_MSG_PREFIX));
    }
    let directory = dir.path().join("tile");
    for file in [
        "scaffolds_tile.txt",
        "staples_tile.txt",
        "visualized_sequence_tile.txt",
        "tile.xlsx",
        "tile.json",
    ] {
        assert!(directory.join(file).exists(), "missing {}", file);
    }

    let staples = std::fs::read_to_string(directory.join("staples_tile.txt")).unwrap();
    assert!(staples.contains("0[4],0[1],CGGT,4"));

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(directory.join("tile.json")).unwrap())
            .unwrap();
    assert_eq!(json["scaffolds"][0]["sequence"], "AACCGGTTAAC");
    assert_eq!(json["primary"], 0);
}

#[test]
fn export_type_names() {
    assert_eq!(ExportType::SequenceList.to_string(), "SequenceList");
    assert_eq!(ExportType::iter().count(), 4);
}
