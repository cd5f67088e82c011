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
//! `Start,End,Sequence,Length` lists of strands.

use seqnano_design::AssignedStrand;
use std::io::Write;
use std::path::Path;

pub const HEADER: &str = "Start,End,Sequence,Length";

pub fn write_strands<W: Write>(mut out: W, strands: &[AssignedStrand]) -> std::io::Result<()> {
    writeln!(out, "{}", HEADER)?;
    for strand in strands.iter() {
        writeln!(out, "{}", strand)?;
    }
    out.flush()
}

pub fn write_to_file(path: &Path, strands: &[AssignedStrand]) -> std::io::Result<()> {
    let file = std::fs::File::create(path)?;
    write_strands(std::io::BufWriter::new(file), strands)?;
    log::debug!("Wrote {} strands to {}", strands.len(), path.to_string_lossy());
    Ok(())
}
