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
//! Parameters of a sequence design run.

/// Parameters of a run of the [`SequenceDesigner`](super::SequenceDesigner).
///
/// Every field can be omitted when the parameters are read from a JSON file, in which case its
/// default value is used.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DesignerParameters {
    /// Seed of the random source used to generate the sequences of secondary scaffolds.
    pub seed: u64,
    /// The base given to staple positions that are not paired with a scaffold.
    pub default_staple_base: char,
    /// If true, the start and end of the primary scaffold must be next to each other.
    pub require_closed_scaffold: bool,
    pub generator: GeneratorParameters,
    pub lint: LintParameters,
}

/// Composition constraints of generated scaffold sequences.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneratorParameters {
    /// Relative weights of A, C, G and T.
    pub weights: [u32; 4],
    /// Longest allowed run of G or of C.
    pub max_homopolymer: usize,
    /// Maximal GC content, in percent.
    pub max_gc_percent: f64,
    /// Number of sequences drawn before giving up.
    pub max_attempts: usize,
}

/// Thresholds of the staple verifications.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LintParameters {
    pub min_staple_length: usize,
    pub max_staple_length: usize,
    /// Length of a run of A at a staple extremity that is reported.
    pub poly_a_run: usize,
}

impl GeneratorParameters {
    /// Weights biased towards A and T to keep the GC content low.
    pub const DEFAULT: GeneratorParameters = GeneratorParameters {
        weights: [29, 21, 21, 29],
        max_homopolymer: 4,
        max_gc_percent: 44.,
        max_attempts: 100_000,
    };
}

impl LintParameters {
    pub const DEFAULT: LintParameters = LintParameters {
        min_staple_length: 15,
        max_staple_length: 60,
        poly_a_run: 7,
    };
}

impl DesignerParameters {
    pub const DEFAULT: DesignerParameters = DesignerParameters {
        seed: 0,
        default_staple_base: 'A',
        require_closed_scaffold: false,
        generator: GeneratorParameters::DEFAULT,
        lint: LintParameters::DEFAULT,
    };

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn formated_string(&self) -> String {
        use std::fmt::Write;
        let mut ret = String::new();
        writeln!(&mut ret, "  Seed: {}", self.seed).unwrap_or_default();
        writeln!(
            &mut ret,
            "  Closed scaffold required: {}",
            self.require_closed_scaffold
        )
        .unwrap_or_default();
        writeln!(
            &mut ret,
            "  Generator weights (A, C, G, T): {:?}",
            self.generator.weights
        )
        .unwrap_or_default();
        writeln!(
            &mut ret,
            "  Max GC content: {:.1}%",
            self.generator.max_gc_percent
        )
        .unwrap_or_default();
        writeln!(
            &mut ret,
            "  Staple length: {}..={}",
            self.lint.min_staple_length, self.lint.max_staple_length
        )
        .unwrap_or_default();
        ret
    }
}

impl std::default::Default for DesignerParameters {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::default::Default for GeneratorParameters {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::default::Default for LintParameters {
    fn default() -> Self {
        Self::DEFAULT
    }
}
