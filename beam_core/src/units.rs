//! # Units
//!
//! Canonical storage is always SI-engineering: meters, kilonewtons, MPa, mm², mm⁴.
//! The imperial system (ft, kip, ksi, in², in⁴) exists only at the display
//! boundary. Switching the [`UnitSystem`] never touches stored values; it only
//! changes which conversion is applied when a value is shown or read back.
//!
//! Two layers are provided:
//!
//! - Free functions taking an explicit [`UnitSystem`] (`convert_length`,
//!   `length_unit`, ...), for callers that already carry the system around.
//! - [`UnitService`], a small context object holding the selected system with
//!   mutation only through [`UnitService::toggle_units`] and
//!   [`UnitService::set_unit_system`].
//!
//! ## Example
//!
//! ```rust
//! use beam_core::units::{UnitService, UnitSystem};
//!
//! let mut units = UnitService::default();
//! assert_eq!(units.convert_length(5.0), 5.0);
//! assert_eq!(units.length_unit(), "m");
//!
//! units.toggle_units();
//! assert_eq!(units.unit_system(), UnitSystem::Imperial);
//! assert!((units.convert_length(5.0) - 16.4042).abs() < 1e-9);
//! assert_eq!(units.length_unit(), "ft");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// Conversion Factors (canonical -> imperial)
// ============================================================================

/// Meters to feet
pub const M_TO_FT: f64 = 3.28084;

/// Kilonewtons to kips
pub const KN_TO_KIP: f64 = 0.22481;

/// Megapascals to kips per square inch
pub const MPA_TO_KSI: f64 = 0.145038;

/// Square millimeters to square inches
pub const MM2_TO_IN2: f64 = 0.00155;

/// Millimeters⁴ to inches⁴.
///
/// Display factor carried over from earlier output. Not the exact value
/// (25.4⁻⁴ ≈ 2.4025e-6).
pub const MM4_TO_IN4: f64 = 0.0024;

// ============================================================================
// Unit System
// ============================================================================

/// Display unit system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// m, kN, MPa, mm², mm⁴ (same as canonical storage)
    #[default]
    Metric,
    /// ft, kip, ksi, in², in⁴
    Imperial,
}

impl UnitSystem {
    /// The other system.
    pub fn toggled(self) -> Self {
        match self {
            UnitSystem::Metric => UnitSystem::Imperial,
            UnitSystem::Imperial => UnitSystem::Metric,
        }
    }

    /// True when display values equal canonical values
    pub fn is_canonical(self) -> bool {
        self == UnitSystem::Metric
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitSystem::Metric => write!(f, "Metric"),
            UnitSystem::Imperial => write!(f, "Imperial"),
        }
    }
}

// ============================================================================
// Free conversion functions (canonical -> display)
// ============================================================================

#[inline]
fn scale(system: UnitSystem, value: f64, factor: f64) -> f64 {
    match system {
        UnitSystem::Metric => value,
        UnitSystem::Imperial => value * factor,
    }
}

#[inline]
fn unscale(system: UnitSystem, value: f64, factor: f64) -> f64 {
    match system {
        UnitSystem::Metric => value,
        UnitSystem::Imperial => value / factor,
    }
}

/// m -> display length
pub fn convert_length(system: UnitSystem, value: f64) -> f64 {
    scale(system, value, M_TO_FT)
}

/// kN -> display force. Also used for moments (kN·m -> kip·m).
pub fn convert_load(system: UnitSystem, value: f64) -> f64 {
    scale(system, value, KN_TO_KIP)
}

/// MPa -> display stress
pub fn convert_stress(system: UnitSystem, value: f64) -> f64 {
    scale(system, value, MPA_TO_KSI)
}

/// mm² -> display area
pub fn convert_area(system: UnitSystem, value: f64) -> f64 {
    scale(system, value, MM2_TO_IN2)
}

/// mm⁴ -> display moment of inertia
pub fn convert_inertia(system: UnitSystem, value: f64) -> f64 {
    scale(system, value, MM4_TO_IN4)
}

// ============================================================================
// Free conversion functions (display -> canonical)
// ============================================================================

/// Display length -> m
pub fn length_to_canonical(system: UnitSystem, value: f64) -> f64 {
    unscale(system, value, M_TO_FT)
}

/// Display force -> kN
pub fn load_to_canonical(system: UnitSystem, value: f64) -> f64 {
    unscale(system, value, KN_TO_KIP)
}

/// Display stress -> MPa
pub fn stress_to_canonical(system: UnitSystem, value: f64) -> f64 {
    unscale(system, value, MPA_TO_KSI)
}

/// Display area -> mm²
pub fn area_to_canonical(system: UnitSystem, value: f64) -> f64 {
    unscale(system, value, MM2_TO_IN2)
}

/// Display moment of inertia -> mm⁴
pub fn inertia_to_canonical(system: UnitSystem, value: f64) -> f64 {
    unscale(system, value, MM4_TO_IN4)
}

// ============================================================================
// Unit labels
// ============================================================================

pub fn length_unit(system: UnitSystem) -> &'static str {
    match system {
        UnitSystem::Metric => "m",
        UnitSystem::Imperial => "ft",
    }
}

pub fn load_unit(system: UnitSystem) -> &'static str {
    match system {
        UnitSystem::Metric => "kN",
        UnitSystem::Imperial => "kip",
    }
}

pub fn stress_unit(system: UnitSystem) -> &'static str {
    match system {
        UnitSystem::Metric => "MPa",
        UnitSystem::Imperial => "ksi",
    }
}

pub fn area_unit(system: UnitSystem) -> &'static str {
    match system {
        UnitSystem::Metric => "mm²",
        UnitSystem::Imperial => "in²",
    }
}

pub fn inertia_unit(system: UnitSystem) -> &'static str {
    match system {
        UnitSystem::Metric => "mm⁴",
        UnitSystem::Imperial => "in⁴",
    }
}

/// Moment label. The lever arm stays in meters in both systems; only the
/// force part is converted.
pub fn moment_unit(system: UnitSystem) -> &'static str {
    match system {
        UnitSystem::Metric => "kN⋅m",
        UnitSystem::Imperial => "kip⋅m",
    }
}

/// Deflection is always reported in millimeters.
pub const DEFLECTION_UNIT: &str = "mm";

// ============================================================================
// Unit Service
// ============================================================================

/// Holds the selected display [`UnitSystem`] and applies it.
///
/// The only mutable state is the system flag itself. Hosts that share one
/// service between threads must serialize access to it; all conversion
/// methods take `&self`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UnitService {
    unit_system: UnitSystem,
}

impl UnitService {
    pub fn new(unit_system: UnitSystem) -> Self {
        UnitService { unit_system }
    }

    pub fn unit_system(&self) -> UnitSystem {
        self.unit_system
    }

    /// Flip between metric and imperial. Returns the new system.
    pub fn toggle_units(&mut self) -> UnitSystem {
        self.unit_system = self.unit_system.toggled();
        tracing::debug!(unit_system = %self.unit_system, "unit system toggled");
        self.unit_system
    }

    pub fn set_unit_system(&mut self, unit_system: UnitSystem) {
        self.unit_system = unit_system;
    }

    pub fn convert_length(&self, value: f64) -> f64 {
        convert_length(self.unit_system, value)
    }

    pub fn convert_load(&self, value: f64) -> f64 {
        convert_load(self.unit_system, value)
    }

    pub fn convert_stress(&self, value: f64) -> f64 {
        convert_stress(self.unit_system, value)
    }

    pub fn convert_area(&self, value: f64) -> f64 {
        convert_area(self.unit_system, value)
    }

    pub fn convert_inertia(&self, value: f64) -> f64 {
        convert_inertia(self.unit_system, value)
    }

    pub fn length_to_canonical(&self, value: f64) -> f64 {
        length_to_canonical(self.unit_system, value)
    }

    pub fn load_to_canonical(&self, value: f64) -> f64 {
        load_to_canonical(self.unit_system, value)
    }

    pub fn stress_to_canonical(&self, value: f64) -> f64 {
        stress_to_canonical(self.unit_system, value)
    }

    pub fn area_to_canonical(&self, value: f64) -> f64 {
        area_to_canonical(self.unit_system, value)
    }

    pub fn inertia_to_canonical(&self, value: f64) -> f64 {
        inertia_to_canonical(self.unit_system, value)
    }

    pub fn length_unit(&self) -> &'static str {
        length_unit(self.unit_system)
    }

    pub fn load_unit(&self) -> &'static str {
        load_unit(self.unit_system)
    }

    pub fn stress_unit(&self) -> &'static str {
        stress_unit(self.unit_system)
    }

    pub fn area_unit(&self) -> &'static str {
        area_unit(self.unit_system)
    }

    pub fn inertia_unit(&self) -> &'static str {
        inertia_unit(self.unit_system)
    }

    pub fn moment_unit(&self) -> &'static str {
        moment_unit(self.unit_system)
    }
}
