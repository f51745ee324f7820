//! CLI definition using clap

use clap::{Parser, ValueEnum};

use beam_core::{LoadType, SupportType, UnitSystem};

/// Output format for results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum UnitsArg {
    /// m, kN, MPa, mm², mm⁴
    #[default]
    Metric,
    /// ft, kip, ksi, in², in⁴
    Imperial,
}

impl From<UnitsArg> for UnitSystem {
    fn from(arg: UnitsArg) -> Self {
        match arg {
            UnitsArg::Metric => UnitSystem::Metric,
            UnitsArg::Imperial => UnitSystem::Imperial,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LoadTypeArg {
    Point,
    Distributed,
}

impl From<LoadTypeArg> for LoadType {
    fn from(arg: LoadTypeArg) -> Self {
        match arg {
            LoadTypeArg::Point => LoadType::Point,
            LoadTypeArg::Distributed => LoadType::Distributed,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SupportArg {
    Simple,
    Fixed,
}

impl From<SupportArg> for SupportType {
    fn from(arg: SupportArg) -> Self {
        match arg {
            SupportArg::Simple => SupportType::Simple,
            SupportArg::Fixed => SupportType::Fixed,
        }
    }
}

/// Values are read in the unit system selected with `--units`.
/// Anything left out keeps the default beam (5 m span, 10 kN at 2.5 m,
/// E = 200000 MPa, I = 8.5e6 mm⁴, A = 2850 mm²).
#[derive(Parser, Debug)]
#[command(name = "beamcalc")]
#[command(version)]
#[command(allow_negative_numbers = true)]
#[command(about = "Single-span beam moment, shear and deflection estimator")]
pub struct Cli {
    /// Display unit system for both input and output
    #[arg(long, short = 'u', value_enum, env = "BEAMCALC_UNITS", default_value_t = UnitsArg::Metric)]
    pub units: UnitsArg,

    /// Beam span (m or ft)
    #[arg(long, short = 'l')]
    pub length: Option<f64>,

    /// Load magnitude (kN / kip, per m for distributed loads)
    #[arg(long, short = 'p')]
    pub load: Option<f64>,

    /// Load type
    #[arg(long, short = 't', value_enum)]
    pub load_type: Option<LoadTypeArg>,

    /// Point load position from the left support (m or ft)
    #[arg(long, short = 'a')]
    pub position: Option<f64>,

    /// Support condition (informational)
    #[arg(long, short = 's', value_enum)]
    pub support: Option<SupportArg>,

    /// Elastic modulus (MPa or ksi)
    #[arg(long, short = 'E')]
    pub elastic_modulus: Option<f64>,

    /// Moment of inertia (mm⁴ or in⁴)
    #[arg(long, short = 'I')]
    pub inertia: Option<f64>,

    /// Cross-sectional area (mm² or in²)
    #[arg(long, short = 'A')]
    pub area: Option<f64>,

    /// Reject out-of-range input instead of clamping it
    #[arg(long)]
    pub strict: bool,

    /// Prompt for span, load and position
    #[arg(long, short = 'i')]
    pub interactive: bool,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Decimal places in table output
    #[arg(long, default_value_t = 2)]
    pub decimals: usize,

    /// Verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
