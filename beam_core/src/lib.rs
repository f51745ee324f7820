//! # beam_core - Single-Span Beam Response Estimator
//!
//! `beam_core` computes the maximum bending moment, maximum shear and a
//! deflection estimate for a single-span beam carrying one point load or one
//! full-span uniform load. It also handles metric/imperial conversion at the
//! display boundary. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: [`compute`] is a pure function of its input
//! - **Total**: bad numbers are clamped to safe values rather than rejected;
//!   [`compute_strict`] is available when an error is preferred
//! - **Canonical storage**: values are always m, kN, MPa, mm², mm⁴; unit
//!   systems only affect display
//!
//! ## Quick Start
//!
//! ```rust
//! use beam_core::{compute, BeamInput, UnitService};
//!
//! let result = compute(&BeamInput::distributed(6.0, 4.0));
//! assert!((result.max_moment - 18.0).abs() < 1e-9);
//! assert!((result.max_shear - 12.0).abs() < 1e-9);
//!
//! let mut units = UnitService::default();
//! units.toggle_units();
//! let shear_kip = units.convert_load(result.max_shear);
//! assert!((shear_kip - 12.0 * 0.22481).abs() < 1e-9);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Beam input/result types and the calculator
//! - [`equations`] - Closed-form beam formulas
//! - [`units`] - Unit systems and the conversion service
//! - [`session`] - Interactive session state and display reports
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod session;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    compute, compute_strict, BeamInput, BeamResult, LoadType, SectionProperties, SupportType,
};
pub use errors::{CalcError, CalcResult};
pub use session::{BeamReport, BeamSession, CalcSettings};
pub use units::{UnitService, UnitSystem};
