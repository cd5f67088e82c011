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
//! The whole sequence design pipeline.

use super::assignment::{assign_scaffold_sequences, primary_scaffold};
use super::lint::{verify_staples, Warning};
use super::paths::{find_paths, find_paths_marking, validate_closure};
use super::staples::assign_staple_sequences;
use super::*;

/// The result of a successful run.
#[derive(Serialize, Clone, Debug)]
pub struct DesignOutput {
    pub scaffolds: Vec<AssignedStrand>,
    /// Index in `scaffolds` of the strand that received the literal sequence.
    pub primary: usize,
    pub staples: Vec<AssignedStrand>,
    #[serde(skip)]
    pub scaffold_lookup: SequenceLookup,
    #[serde(skip)]
    pub staple_lookup: SequenceLookup,
    pub warnings: Vec<Warning>,
}

/// Assigns sequences to the scaffold and staples of a design.
#[derive(Clone, Debug, Default)]
pub struct SequenceDesigner {
    parameters: DesignerParameters,
}

impl SequenceDesigner {
    pub fn new(parameters: DesignerParameters) -> Self {
        Self { parameters }
    }

    pub fn parameters(&self) -> &DesignerParameters {
        &self.parameters
    }

    /// Find the paths of both strand graphs, give `literal` to the longest scaffold, generated
    /// sequences to the other ones, and the complementary bases to the staples.
    pub fn run<M: AdjacencyMap + ?Sized>(
        &self,
        map: &M,
        literal: &str,
    ) -> Result<DesignOutput, SeqDesignError> {
        log::info!("Finding staples...");
        let staple_paths = find_paths(map, StrandGraph::Staple)?;
        log::info!("Found {} staples", staple_paths.len());

        log::info!("Finding scaffolds...");
        let scaffold_paths = find_paths_marking(map, StrandGraph::Scaffold)?;
        log::info!("Found {} scaffolds", scaffold_paths.len());

        let primary = primary_scaffold(map, &scaffold_paths)?;
        if self.parameters.require_closed_scaffold {
            let path = scaffold_paths[primary];
            validate_closure(path.start, path.end)?;
        }

        log::info!("Generating scaffold sequences...");
        let mut generator =
            SequenceGenerator::seeded(self.parameters.seed, self.parameters.generator.clone())?;
        let scaffolds = assign_scaffold_sequences(map, &scaffold_paths, literal, &mut generator)?;

        log::info!("Generating staple sequences...");
        let (staples, staple_lookup) = assign_staple_sequences(
            map,
            &staple_paths,
            &scaffolds.lookup,
            self.parameters.default_staple_base,
        )?;

        log::info!("Verifying staples...");
        let warnings = verify_staples(&staples, &self.parameters.lint);
        for w in warnings.iter() {
            log::warn!("{}", w);
        }

        Ok(DesignOutput {
            scaffolds: scaffolds.strands,
            primary: scaffolds.primary,
            staples,
            scaffold_lookup: scaffolds.lookup,
            staple_lookup,
            warnings,
        })
    }
}
