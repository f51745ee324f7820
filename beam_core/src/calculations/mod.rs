//! # Beam Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable, canonical units)
//! - `*Result` - Calculation results (JSON-serializable, canonical units)
//! - `compute(&input) -> *Result` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`beam`] - Single-span beam response under one point or uniform load

pub mod beam;

pub use beam::{
    compute, compute_strict, BeamInput, BeamResult, LoadType, SanitizedSpan, SectionProperties,
    SupportType,
};
