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
//! A text map of the lattice. Each helix is printed as two rows, one per strand graph, with `-`
//! marking the slots that carry no base. Rows of even helices start with the scaffold, rows of
//! odd helices with the staple.

use seqnano_design::SequenceLookup;
use std::io::Write;
use std::path::Path;

const UNASSIGNED: char = '-';

fn row_string(lookup: &SequenceLookup, strand: usize) -> String {
    lookup
        .row(strand)
        .iter()
        .map(|b| b.unwrap_or(UNASSIGNED))
        .collect()
}

pub fn write_map<W: Write>(
    mut out: W,
    scaffolds: &SequenceLookup,
    staples: &SequenceLookup,
) -> std::io::Result<()> {
    for strand in 0..scaffolds.strand_count() {
        let scaffold_row = format!("Scaffold {:<5}|{}|", strand, row_string(scaffolds, strand));
        let staple_row = format!("Staple {:<7}|{}|", strand, row_string(staples, strand));
        if strand % 2 == 0 {
            writeln!(out, "{}\n{}\n", scaffold_row, staple_row)?;
        } else {
            writeln!(out, "{}\n{}\n", staple_row, scaffold_row)?;
        }
    }
    out.flush()
}

pub fn write_to_file(
    path: &Path,
    scaffolds: &SequenceLookup,
    staples: &SequenceLookup,
) -> std::io::Result<()> {
    let file = std::fs::File::create(path)?;
    write_map(std::io::BufWriter::new(file), scaffolds, staples)
}
