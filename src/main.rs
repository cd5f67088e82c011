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
//! SeqNano assigns a scaffold sequence to a cadnano DNA origami design and derives the staple
//! sequences.

use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use seqnano_design::{DesignerParameters, SeqDesignError, SequenceDesigner};
use seqnano_exports::{ExportError, ExportTarget, ExportType};
use strum::IntoEnumIterator;

mod file_parsing;
use file_parsing::LoadError;

#[derive(Parser, Debug)]
#[command(name = "seqnano", version, about = "Sequence assignment for cadnano DNA origami designs")]
struct Cli {
    /// The cadnano design (.json)
    design: PathBuf,

    /// The scaffold sequence, as raw text or FASTA
    sequence: PathBuf,

    /// Directory in which the output directory of the design is created
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Seed of the generator used for secondary scaffolds
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file overriding the default parameters
    #[arg(short, long)]
    parameters: Option<PathBuf>,

    /// Fail if the scaffold does not close on itself
    #[arg(long)]
    closed_scaffold: bool,

    /// Files to write. All of them when omitted
    #[arg(short, long, value_enum)]
    export: Vec<ExportArg>,

    /// Print per-path details
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ExportArg {
    SequenceList,
    Visualizer,
    Xlsx,
    Json,
}

impl From<ExportArg> for ExportType {
    fn from(arg: ExportArg) -> Self {
        match arg {
            ExportArg::SequenceList => Self::SequenceList,
            ExportArg::Visualizer => Self::Visualizer,
            ExportArg::Xlsx => Self::Xlsx,
            ExportArg::Json => Self::Json,
        }
    }
}

#[derive(Debug)]
enum RunError {
    Load(LoadError),
    Design(SeqDesignError),
    Export(ExportError),
}

impl From<LoadError> for RunError {
    fn from(e: LoadError) -> Self {
        Self::Load(e)
    }
}

impl From<SeqDesignError> for RunError {
    fn from(e: SeqDesignError) -> Self {
        Self::Design(e)
    }
}

impl From<ExportError> for RunError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Load(e) => write!(f, "{}", e),
            Self::Design(e) => write!(f, "{}", e),
            Self::Export(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for RunError {}

fn init_logger(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}

/// Defaults, then the parameter file, then the command line flags.
fn parameters(cli: &Cli) -> Result<DesignerParameters, LoadError> {
    let mut parameters = match cli.parameters.as_ref() {
        Some(path) => file_parsing::read_parameters(path)?,
        None => DesignerParameters::default(),
    };
    if let Some(seed) = cli.seed {
        parameters.seed = seed;
    }
    if cli.closed_scaffold {
        parameters.require_closed_scaffold = true;
    }
    Ok(parameters)
}

fn export_types(cli: &Cli) -> Vec<ExportType> {
    if cli.export.is_empty() {
        ExportType::iter().collect()
    } else {
        cli.export.iter().map(|e| ExportType::from(*e)).collect()
    }
}

fn run(cli: &Cli) -> Result<ExportTarget, RunError> {
    let designer = SequenceDesigner::new(parameters(cli)?);
    log::debug!("Parameters:\n{}", designer.parameters().formated_string());

    log::info!("Reading design {}", cli.design.to_string_lossy());
    let lattice = file_parsing::read_cadnano(&cli.design)?;
    let sequence = file_parsing::read_sequence(&cli.sequence)?;
    log::info!("Scaffold sequence of {} bases", sequence.len());

    let output = designer.run(&lattice, &sequence)?;

    let parent = cli.output.clone().unwrap_or_else(|| PathBuf::from("."));
    let target = ExportTarget::for_design(parent, &cli.design);
    for export_type in export_types(cli) {
        let success = seqnano_exports::export(&output, export_type, &target)?;
        log::info!("{}", success.message());
    }
    Ok(target)
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    let start = Instant::now();
    let result = run(&cli);
    log::info!("Elapsed time: {:.2?}", start.elapsed());
    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
