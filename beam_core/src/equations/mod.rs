//! # Beam Equations
//!
//! Closed-form mechanics formulas used by the calculator, kept in one place so
//! each can be checked against its reference in isolation.
//!
//! ## Sign Conventions
//!
//! - **Loads**: Positive downward (gravity direction)
//! - **Moment**: Positive causes tension on bottom fiber (sagging)
//! - **Deflection**: Positive downward
//!
//! Maxima are reported as magnitudes.

pub mod beam;

pub use beam::{
    point_load_deflection_estimate,
    point_load_max_moment,
    point_load_max_shear,
    uniform_load_max_deflection,
    uniform_load_max_moment,
    uniform_load_max_shear,
    M_TO_MM,
};
