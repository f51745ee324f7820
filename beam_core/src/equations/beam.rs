//! # Single-Span Beam Formulas
//!
//! Closed-form maxima for a single span with one load case. All functions take
//! the span and load position in meters, loads in kN (point) or kN/m
//! (uniform), `E` in MPa and `I` in mm⁴. Moments come out in kN·m, shears in
//! kN and deflections in mm.
//!
//! ## Notation
//!
//! - `L` = Span length (m)
//! - `a` = Load position from left support (m)
//! - `b` = `L - a`
//! - `P` = Point load (kN)
//! - `w` = Uniform load intensity (kN/m)
//! - `E` = Modulus of elasticity (MPa = N/mm²)
//! - `I` = Moment of inertia (mm⁴)
//!
//! ## Deflection units
//!
//! Deflections scale the span by [`M_TO_MM`] before it enters the formula so
//! that the result is in millimeters for MPa / mm⁴ section input.
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 8.1

/// Meters to millimeters
pub const M_TO_MM: f64 = 1000.0;

// =============================================================================
// POINT LOAD
// Concentrated load P at distance 'a' from the left support
// =============================================================================

/// Maximum moment, at the load point: M = P·a·b/L
#[inline]
pub fn point_load_max_moment(p: f64, a: f64, l: f64) -> f64 {
    let b = l - a;
    p * a * b / l
}

/// Maximum shear: V = P·max(a, b)/L, the larger of the two reactions
#[inline]
pub fn point_load_max_shear(p: f64, a: f64, l: f64) -> f64 {
    let b = l - a;
    p * a.max(b) / l
}

/// Deflection estimate for a point load.
///
/// ```text
/// δ = P·a·b·(L·1000) / (3·E·I) · √(a² + b²)
/// ```
///
/// This is NOT the Roark's Case 1a deflection at the load point
/// (`P·a²·b² / (3·E·I·L)`). It is the single-shot estimate the calculator has
/// always reported, and results must stay comparable with earlier output.
/// Note that `a` and `b` enter in meters while `L` is converted to mm.
#[inline]
pub fn point_load_deflection_estimate(p: f64, a: f64, l: f64, e: f64, i: f64) -> f64 {
    let b = l - a;
    (p * a * b * (l * M_TO_MM)) / (3.0 * e * i) * (a.powi(2) + b.powi(2)).sqrt()
}

// =============================================================================
// UNIFORM LOAD
// Uniform load w over the entire span
// =============================================================================

/// Maximum moment at midspan: M = wL²/8
#[inline]
pub fn uniform_load_max_moment(w: f64, l: f64) -> f64 {
    w * l.powi(2) / 8.0
}

/// Maximum shear at the supports: V = wL/2
#[inline]
pub fn uniform_load_max_shear(w: f64, l: f64) -> f64 {
    w * l / 2.0
}

/// Maximum deflection at midspan (Roark's Table 8.1, Case 2a)
///
/// ```text
/// δ_max = 5·w·(L·1000)⁴ / (384·E·I)
/// ```
///
/// With w in kN/m = N/mm, E in N/mm² and I in mm⁴ the result is in mm.
#[inline]
pub fn uniform_load_max_deflection(w: f64, l: f64, e: f64, i: f64) -> f64 {
    5.0 * w * (l * M_TO_MM).powi(4) / (384.0 * e * i)
}
