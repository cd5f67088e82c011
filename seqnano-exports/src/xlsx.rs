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
use seqnano_design::{AssignedStrand, DesignOutput};
use simple_excel_writer::{row, Row, Workbook};
use std::path::Path;

/// Write a workbook with a `Scaffolds` and a `Staples` sheet.
pub fn write_workbook(path: &Path, output: &DesignOutput) -> std::io::Result<()> {
    let mut wb = Workbook::create(&path.to_string_lossy());
    let sheets: [(&str, &[AssignedStrand]); 2] = [
        ("Scaffolds", output.scaffolds.as_slice()),
        ("Staples", output.staples.as_slice()),
    ];
    for (name, strands) in sheets.iter() {
        let mut sheet = wb.create_sheet(name);
        wb.write_sheet(&mut sheet, |sw| {
            sw.append_row(row!["Start", "End", "Sequence", "Length", "GC content (%)"])?;
            for strand in strands.iter() {
                let start = strand.start.to_string();
                let end = strand.end.to_string();
                sw.append_row(row![
                    start.as_str(),
                    end.as_str(),
                    strand.sequence.as_str(),
                    strand.base_count() as f64,
                    strand.gc_content()
                ])?;
            }
            Ok(())
        })?;
    }
    wb.close()?;
    Ok(())
}
