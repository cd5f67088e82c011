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
//! Reading the inputs of a run: the cadnano design, the scaffold sequence and the parameters.

use seqnano_design::{DesignerParameters, Lattice};
use std::path::Path;

mod cadnano;
use cadnano::FromCadnano;

#[derive(Debug)]
pub enum LoadError {
    IOError(std::io::Error),
    /// The design file could not be read as a cadnano design
    Cadnano(String),
    ParametersError(serde_json::Error),
    /// The design has no virtual strand
    EmptyDesign,
    InvalidStrandNumber(isize),
    /// Two virtual strands have the same number
    DuplicateStrandNumber(isize),
    InconsistentStrandLength {
        num: isize,
        expected: usize,
        found: usize,
    },
    DanglingReference {
        num: isize,
        position: usize,
        reference: (isize, isize),
    },
}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        Self::IOError(e)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        Self::ParametersError(e)
    }
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IOError(e) => write!(f, "Could not read file: {}", e),
            Self::Cadnano(e) => write!(f, "Not a cadnano design: {}", e),
            Self::ParametersError(e) => write!(f, "Invalid parameter file: {}", e),
            Self::EmptyDesign => write!(f, "The design has no virtual strand"),
            Self::InvalidStrandNumber(num) => write!(f, "Invalid virtual strand number {}", num),
            Self::DuplicateStrandNumber(num) => {
                write!(f, "Several virtual strands have number {}", num)
            }
            Self::InconsistentStrandLength {
                num,
                expected,
                found,
            } => write!(
                f,
                "Virtual strand {} has {} positions, expected {}",
                num, found, expected
            ),
            Self::DanglingReference {
                num,
                position,
                reference,
            } => write!(
                f,
                "Virtual strand {} at position {} points to {}[{}], outside of the design",
                num, position, reference.0, reference.1
            ),
        }
    }
}

impl std::error::Error for LoadError {}

/// Read a cadnano 2 design.
pub fn read_cadnano<P: AsRef<Path>>(path: P) -> Result<Lattice, LoadError> {
    let cadnano = cadnano::Cadnano::from_file(path.as_ref())
        .map_err(|e| LoadError::Cadnano(format!("{:?}", e)))?;
    log::info!("ok cadnano, {} virtual strands", cadnano.vstrands.len());
    Lattice::from_cadnano(cadnano)
}

/// Read a scaffold sequence from a plain text or FASTA file.
///
/// Header lines are ignored, whitespace is removed and the bases are upper-cased.
pub fn read_sequence<P: AsRef<Path>>(path: P) -> Result<String, LoadError> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_sequence(&content))
}

fn parse_sequence(content: &str) -> String {
    let sequence: String = content
        .lines()
        .filter(|l| !l.trim_start().starts_with('>'))
        .flat_map(|l| l.split_whitespace())
        .collect::<String>()
        .to_uppercase();
    let unknown = sequence
        .chars()
        .filter(|c| !matches!(c, 'A' | 'C' | 'G' | 'T'))
        .count();
    if unknown > 0 {
        log::warn!("The sequence contains {} characters other than A, C, G, T", unknown);
    }
    sequence
}

pub fn read_parameters<P: AsRef<Path>>(path: P) -> Result<DesignerParameters, LoadError> {
    let json = std::fs::read_to_string(path)?;
    Ok(DesignerParameters::from_json(&json)?)
}
