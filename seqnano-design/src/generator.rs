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
//! Generation of scaffold sequences under composition constraints.

use super::{GeneratorParameters, SeqDesignError};
use itertools::Itertools;
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The bases, in the order of [`GeneratorParameters::weights`].
pub const BASES: [char; 4] = ['A', 'C', 'G', 'T'];

/// Draws random sequences until one satisfies the constraints of its [`GeneratorParameters`].
pub struct SequenceGenerator<R: Rng> {
    rng: R,
    distribution: WeightedIndex<u32>,
    parameters: GeneratorParameters,
}

impl SequenceGenerator<StdRng> {
    pub fn seeded(seed: u64, parameters: GeneratorParameters) -> Result<Self, SeqDesignError> {
        Self::new(StdRng::seed_from_u64(seed), parameters)
    }
}

impl<R: Rng> SequenceGenerator<R> {
    pub fn new(rng: R, parameters: GeneratorParameters) -> Result<Self, SeqDesignError> {
        let distribution = WeightedIndex::new(parameters.weights.iter().cloned())
            .map_err(|_| SeqDesignError::InvalidGeneratorWeights(parameters.weights))?;
        Ok(Self {
            rng,
            distribution,
            parameters,
        })
    }

    /// Return a sequence of `length` bases and its GC content in percent.
    ///
    /// Each base is drawn independently. The whole sequence is drawn again if it has a run of G
    /// or of C longer than `max_homopolymer` or if its GC content exceeds `max_gc_percent`.
    pub fn generate(&mut self, length: usize) -> Result<(String, f64), SeqDesignError> {
        if length == 0 {
            return Ok((String::new(), 0.));
        }
        for attempt in 1..=self.parameters.max_attempts {
            let sequence: String = (0..length)
                .map(|_| BASES[self.distribution.sample(&mut self.rng)])
                .collect();
            let gc = gc_content(&sequence);
            if gc <= self.parameters.max_gc_percent
                && longest_run(&sequence, 'G') <= self.parameters.max_homopolymer
                && longest_run(&sequence, 'C') <= self.parameters.max_homopolymer
            {
                log::debug!(
                    "Generated {} bases with {:.1}% GC after {} attempts",
                    length,
                    gc,
                    attempt
                );
                return Ok((sequence, gc));
            }
        }
        Err(SeqDesignError::GeneratorExhausted {
            length,
            attempts: self.parameters.max_attempts,
        })
    }
}

/// The GC content of `sequence` in percent. Characters other than G and C count as non-GC bases.
pub fn gc_content(sequence: &str) -> f64 {
    let len = sequence.chars().count();
    if len == 0 {
        return 0.;
    }
    let gc = sequence.chars().filter(|c| *c == 'G' || *c == 'C').count();
    gc as f64 / len as f64 * 100.
}

/// The length of the longest run of `base` in `sequence`.
pub fn longest_run(sequence: &str, base: char) -> usize {
    let groups = sequence.chars().group_by(|c| *c);
    let longest = groups
        .into_iter()
        .filter(|(key, _)| *key == base)
        .map(|(_, group)| group.count())
        .max()
        .unwrap_or(0);
    longest
}
