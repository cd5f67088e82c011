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
//! Writes the results of a sequence design run to the files used by the lab.

use seqnano_design::DesignOutput;
use std::path::{Path, PathBuf};
use strum::{Display, EnumIter};

pub mod json;
pub mod sequence_list;
pub mod visualizer;
pub mod xlsx;

/// The file formats to which an export is implemented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum ExportType {
    /// `Start,End,Sequence,Length` text files, one for the scaffolds and one for the staples
    SequenceList,
    /// A text map of the lattice showing the base of each slot
    Visualizer,
    /// An Excel workbook with one sheet for the scaffolds and one for the staples
    Xlsx,
    /// A JSON dump of the strands and warnings
    Json,
}

/// A value returned by the export functions when exports was successfull.
#[derive(Debug)]
pub enum ExportSuccess {
    SequenceList { scaffolds: PathBuf, staples: PathBuf },
    Visualizer(PathBuf),
    Xlsx(PathBuf),
    Json(PathBuf),
}

const SUCCESSFUL_EXPORT_MSG_PREFIX: &str = "Successfully exported to";

impl ExportSuccess {
    /// A message telling that the export operation was successfull and giving the path to which
    /// the export was made
    pub fn message(&self) -> String {
        match self {
            Self::SequenceList { scaffolds, staples } => format!(
                "{SUCCESSFUL_EXPORT_MSG_PREFIX} {} and {}",
                scaffolds.to_string_lossy(),
                staples.to_string_lossy()
            ),
            Self::Visualizer(p) | Self::Xlsx(p) | Self::Json(p) => {
                format!("{SUCCESSFUL_EXPORT_MSG_PREFIX} {}", p.to_string_lossy())
            }
        }
    }
}

#[derive(Debug)]
pub enum ExportError {
    IOError(std::io::Error),
    Serialization(serde_json::Error),
}

impl From<std::io::Error> for ExportError {
    fn from(e: std::io::Error) -> Self {
        Self::IOError(e)
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e)
    }
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IOError(e) => write!(f, "Could not write output file: {}", e),
            Self::Serialization(e) => write!(f, "Serialization error: {}", e),
        }
    }
}

impl std::error::Error for ExportError {}

pub type ExportResult = Result<ExportSuccess, ExportError>;

/// Where the files of a run are written: `directory/<prefix><name>.<extension>`.
#[derive(Debug, Clone)]
pub struct ExportTarget {
    directory: PathBuf,
    name: String,
}

impl ExportTarget {
    pub fn new<P: AsRef<Path>>(directory: P, name: &str) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
            name: name.to_string(),
        }
    }

    /// The target for a design file: a directory named after the file stem, inside `parent`.
    pub fn for_design<P: AsRef<Path>, Q: AsRef<Path>>(parent: P, design_path: Q) -> Self {
        let name = design_path
            .as_ref()
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("design"));
        Self::new(parent.as_ref().join(&name), &name)
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn file(&self, prefix: &str, extension: &str) -> PathBuf {
        self.directory
            .join(format!("{}{}.{}", prefix, self.name, extension))
    }
}

pub fn export(output: &DesignOutput, export_type: ExportType, target: &ExportTarget) -> ExportResult {
    std::fs::create_dir_all(target.directory())?;
    match export_type {
        ExportType::SequenceList => {
            let scaffolds = target.file("scaffolds_", "txt");
            let staples = target.file("staples_", "txt");
            sequence_list::write_to_file(&scaffolds, &output.scaffolds)?;
            sequence_list::write_to_file(&staples, &output.staples)?;
            Ok(ExportSuccess::SequenceList { scaffolds, staples })
        }
        ExportType::Visualizer => {
            let path = target.file("visualized_sequence_", "txt");
            visualizer::write_to_file(&path, &output.scaffold_lookup, &output.staple_lookup)?;
            Ok(ExportSuccess::Visualizer(path))
        }
        ExportType::Xlsx => {
            let path = target.file("", "xlsx");
            xlsx::write_workbook(&path, output)?;
            Ok(ExportSuccess::Xlsx(path))
        }
        ExportType::Json => {
            let path = target.file("", "json");
            json::write_to_file(&path, output)?;
            Ok(ExportSuccess::Json(path))
        }
    }
}

#[cfg(test)]
mod tests;
