//! # Calculation Session
//!
//! A [`BeamSession`] is what an interactive front end holds between edits: one
//! [`BeamInput`] in canonical units, the user's [`CalcSettings`], and the
//! [`UnitService`] that translates at the display boundary.
//!
//! ```text
//! BeamSession
//! ├── settings: CalcSettings (unit system, decimal places)
//! ├── units: UnitService (display <-> canonical)
//! └── input: BeamInput (always m, kN, MPa, mm², mm⁴)
//! ```
//!
//! Setters take values as the user typed them, in the current display system,
//! and store canonical values. Toggling units never rewrites stored input, so
//! repeated toggles cannot accumulate rounding error.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::session::BeamSession;
//! use beam_core::units::UnitSystem;
//!
//! let mut session = BeamSession::default();
//! session.toggle_units();
//! assert_eq!(session.unit_system(), UnitSystem::Imperial);
//!
//! // 20 ft typed in imperial mode is stored as meters
//! session.set_length(20.0);
//! assert!((session.input().length - 6.096).abs() < 1e-3);
//!
//! let report = session.report();
//! assert_eq!(report.moment_unit, "kip⋅m");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::calculations::beam::{compute, BeamInput, BeamResult, LoadType, SupportType, MIN_LENGTH_M, MIN_LOAD};
use crate::units::{UnitService, UnitSystem, DEFLECTION_UNIT};

/// Decimal places used for reported values unless configured otherwise
pub const DEFAULT_DECIMAL_PLACES: usize = 2;

/// User-facing settings for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcSettings {
    /// Display unit system
    pub unit_system: UnitSystem,

    /// Decimal places in [`BeamReport`]'s text output
    pub decimal_places: usize,
}

impl Default for CalcSettings {
    fn default() -> Self {
        CalcSettings {
            unit_system: UnitSystem::Metric,
            decimal_places: DEFAULT_DECIMAL_PLACES,
        }
    }
}

/// Interactive calculation state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BeamSession {
    settings: CalcSettings,
    units: UnitService,
    input: BeamInput,
}

impl BeamSession {
    pub fn new(settings: CalcSettings) -> Self {
        BeamSession {
            settings,
            units: UnitService::new(settings.unit_system),
            input: BeamInput::default(),
        }
    }

    /// Start from an existing canonical input.
    pub fn with_input(mut self, input: BeamInput) -> Self {
        self.input = input;
        self
    }

    pub fn settings(&self) -> &CalcSettings {
        &self.settings
    }

    pub fn units(&self) -> &UnitService {
        &self.units
    }

    /// Current input, canonical units
    pub fn input(&self) -> &BeamInput {
        &self.input
    }

    pub fn unit_system(&self) -> UnitSystem {
        self.units.unit_system()
    }

    /// Flip metric/imperial. Stored input is unchanged.
    pub fn toggle_units(&mut self) -> UnitSystem {
        let system = self.units.toggle_units();
        self.settings.unit_system = system;
        system
    }

    pub fn set_decimal_places(&mut self, decimal_places: usize) {
        self.settings.decimal_places = decimal_places;
    }

    // ------------------------------------------------------------------
    // Display-unit setters
    // ------------------------------------------------------------------

    /// Span in display units. Non-finite or too-small values store the minimum.
    pub fn set_length(&mut self, display_value: f64) {
        let value = self.units.length_to_canonical(display_value);
        self.input.length = at_least(value, MIN_LENGTH_M);
    }

    /// Load magnitude in display units. Non-finite or too-small values store the minimum.
    pub fn set_load(&mut self, display_value: f64) {
        let value = self.units.load_to_canonical(display_value);
        self.input.load_magnitude = at_least(value, MIN_LOAD);
    }

    /// Load position in display units. Negative or non-finite values store 0.
    pub fn set_load_position(&mut self, display_value: f64) {
        let value = self.units.length_to_canonical(display_value);
        self.input.load_position = at_least(value, 0.0);
    }

    pub fn set_load_type(&mut self, load_type: LoadType) {
        self.input.load_type = load_type;
    }

    pub fn set_support_type(&mut self, support_type: SupportType) {
        self.input.support_type = support_type;
    }

    /// E in display units. Returns `false` (and keeps the old value) unless positive.
    pub fn set_elastic_modulus(&mut self, display_value: f64) -> bool {
        let value = self.units.stress_to_canonical(display_value);
        replace_if_positive(&mut self.input.properties.elastic_modulus, value)
    }

    /// I in display units. Returns `false` (and keeps the old value) unless positive.
    pub fn set_moment_of_inertia(&mut self, display_value: f64) -> bool {
        let value = self.units.inertia_to_canonical(display_value);
        replace_if_positive(&mut self.input.properties.moment_of_inertia, value)
    }

    /// A in display units. Returns `false` (and keeps the old value) unless positive.
    pub fn set_area(&mut self, display_value: f64) -> bool {
        let value = self.units.area_to_canonical(display_value);
        replace_if_positive(&mut self.input.properties.area, value)
    }

    // ------------------------------------------------------------------
    // Display-unit getters
    // ------------------------------------------------------------------

    pub fn length(&self) -> f64 {
        self.units.convert_length(self.input.length)
    }

    pub fn load(&self) -> f64 {
        self.units.convert_load(self.input.load_magnitude)
    }

    pub fn load_position(&self) -> f64 {
        self.units.convert_length(self.input.load_position)
    }

    /// Unit of the load magnitude for the current load type and system
    pub fn load_magnitude_unit(&self) -> &'static str {
        match (self.input.load_type, self.unit_system()) {
            (LoadType::Point, UnitSystem::Metric) => "kN",
            (LoadType::Point, UnitSystem::Imperial) => "kip",
            (LoadType::Distributed, UnitSystem::Metric) => "kN/m",
            (LoadType::Distributed, UnitSystem::Imperial) => "kip/m",
        }
    }

    // ------------------------------------------------------------------
    // Results
    // ------------------------------------------------------------------

    /// Canonical result for the current input
    pub fn result(&self) -> BeamResult {
        compute(&self.input)
    }

    /// Display-ready result for the current input and unit system
    pub fn report(&self) -> BeamReport {
        BeamReport::new(&self.result(), &self.units, self.settings.decimal_places)
    }
}

fn at_least(value: f64, min: f64) -> f64 {
    if value.is_finite() && value >= min {
        value
    } else {
        min
    }
}

fn replace_if_positive(slot: &mut f64, value: f64) -> bool {
    if value.is_finite() && value > 0.0 {
        *slot = value;
        true
    } else {
        false
    }
}

/// A [`BeamResult`] converted for display.
///
/// Moments go through the force conversion only, so imperial moments are in
/// kip⋅m. Deflection is always in millimeters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamReport {
    pub unit_system: UnitSystem,

    pub max_moment: f64,
    pub moment_unit: String,

    pub max_shear: f64,
    pub shear_unit: String,

    pub max_deflection: f64,
    pub deflection_unit: String,

    pub elastic_modulus: f64,
    pub stress_unit: String,

    pub moment_of_inertia: f64,
    pub inertia_unit: String,

    pub area: f64,
    pub area_unit: String,

    #[serde(skip)]
    decimal_places: usize,
}

impl BeamReport {
    pub fn new(result: &BeamResult, units: &UnitService, decimal_places: usize) -> Self {
        let props = &result.properties;
        BeamReport {
            unit_system: units.unit_system(),
            max_moment: units.convert_load(result.max_moment),
            moment_unit: units.moment_unit().to_string(),
            max_shear: units.convert_load(result.max_shear),
            shear_unit: units.load_unit().to_string(),
            max_deflection: result.max_deflection,
            deflection_unit: DEFLECTION_UNIT.to_string(),
            elastic_modulus: units.convert_stress(props.elastic_modulus),
            stress_unit: units.stress_unit().to_string(),
            moment_of_inertia: units.convert_inertia(props.moment_of_inertia),
            inertia_unit: units.inertia_unit().to_string(),
            area: units.convert_area(props.area),
            area_unit: units.area_unit().to_string(),
            decimal_places,
        }
    }
}

impl fmt::Display for BeamReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dp = self.decimal_places;
        writeln!(f, "Analysis Results ({})", self.unit_system)?;
        writeln!(f, "  Maximum Moment:      {:.dp$} {}", self.max_moment, self.moment_unit)?;
        writeln!(f, "  Maximum Shear:       {:.dp$} {}", self.max_shear, self.shear_unit)?;
        writeln!(f, "  Maximum Deflection:  {:.dp$} {}", self.max_deflection, self.deflection_unit)?;
        writeln!(f, "Beam Properties")?;
        writeln!(f, "  Elastic Modulus:     {} {}", self.elastic_modulus, self.stress_unit)?;
        writeln!(f, "  Moment of Inertia:   {} {}", self.moment_of_inertia, self.inertia_unit)?;
        write!(f, "  Cross-sectional Area: {} {}", self.area, self.area_unit)
    }
}
