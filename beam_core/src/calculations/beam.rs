//! # Single-Span Beam Response
//!
//! Maximum bending moment, maximum shear and a deflection estimate for one
//! span under a single point load or a full-span uniform load.
//!
//! ## Assumptions
//!
//! - One load, either concentrated or uniform over the whole span
//! - Canonical units throughout: m, kN (or kN/m), MPa, mm², mm⁴
//! - [`SupportType`] is carried for the caller's benefit (diagram symbol) and
//!   does not change any result
//! - Section area is carried through to the result and enters no formula
//!
//! ## Input handling
//!
//! [`compute`] never fails. Out-of-range numbers are clamped before any
//! formula runs so that a caller always gets a plottable answer:
//!
//! | Field           | Rule                                                 |
//! |-----------------|------------------------------------------------------|
//! | `length`        | non-finite → 5, then at least 0.1                    |
//! | `load_magnitude`| non-finite → 10, then at least 0.1                   |
//! | `load_position` | NaN → 0, then clamped into `[0, length]`             |
//!
//! A NaN length bounds the position like the default span; an infinite one
//! leaves it unbounded.
//!
//! The position upper bound is the length *as given*, not the clamped span.
//! With a negative length this yields a position outside the span. The
//! behavior is kept as is; [`BeamInput::validate`] reports it for callers
//! who want a hard error instead.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::calculations::beam::{compute, BeamInput};
//!
//! let input = BeamInput::point(5.0, 10.0, 2.5);
//! let result = compute(&input);
//!
//! assert!((result.max_moment - 12.5).abs() < 1e-9);
//! assert!((result.max_shear - 5.0).abs() < 1e-9);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::equations::beam::{
    point_load_deflection_estimate, point_load_max_moment, point_load_max_shear,
    uniform_load_max_deflection, uniform_load_max_moment, uniform_load_max_shear,
};
use crate::errors::{CalcError, CalcResult};

/// Smallest span the calculator will use (m)
pub const MIN_LENGTH_M: f64 = 0.1;

/// Smallest load the calculator will use (kN or kN/m)
pub const MIN_LOAD: f64 = 0.1;

/// Span substituted for a missing or non-finite length (m)
pub const DEFAULT_LENGTH_M: f64 = 5.0;

/// Load substituted for a missing or non-finite magnitude
pub const DEFAULT_LOAD: f64 = 10.0;

/// Load position of a fresh input (m from left support)
pub const DEFAULT_LOAD_POSITION_M: f64 = 2.5;

/// How the load is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadType {
    /// Concentrated load in kN at `load_position`
    #[default]
    Point,
    /// Uniform load in kN/m over the full span
    Distributed,
}

impl LoadType {
    pub const ALL: [LoadType; 2] = [LoadType::Point, LoadType::Distributed];

    /// Unit of `load_magnitude` for this load type
    pub fn magnitude_unit(&self) -> &'static str {
        match self {
            LoadType::Point => "kN",
            LoadType::Distributed => "kN/m",
        }
    }
}

impl fmt::Display for LoadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadType::Point => write!(f, "Point Load"),
            LoadType::Distributed => write!(f, "Distributed Load"),
        }
    }
}

/// End conditions. Does not affect computed values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportType {
    #[default]
    Simple,
    Fixed,
}

impl SupportType {
    pub const ALL: [SupportType; 2] = [SupportType::Simple, SupportType::Fixed];
}

impl fmt::Display for SupportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SupportType::Simple => write!(f, "Simply Supported"),
            SupportType::Fixed => write!(f, "Fixed Ends"),
        }
    }
}

/// Cross-section and material properties.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionProperties {
    /// Modulus of elasticity E (MPa)
    pub elastic_modulus: f64,
    /// Moment of inertia I (mm⁴)
    pub moment_of_inertia: f64,
    /// Cross-sectional area A (mm²). Display only.
    pub area: f64,
}

impl SectionProperties {
    pub fn new(elastic_modulus: f64, moment_of_inertia: f64, area: f64) -> Self {
        SectionProperties {
            elastic_modulus,
            moment_of_inertia,
            area,
        }
    }

    fn validate(&self) -> CalcResult<()> {
        let fields = [
            ("elastic_modulus", self.elastic_modulus),
            ("moment_of_inertia", self.moment_of_inertia),
            ("area", self.area),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Section property must be a positive number",
                ));
            }
        }
        Ok(())
    }
}

impl Default for SectionProperties {
    /// Steel section, E = 200 GPa, I = 8.5e6 mm⁴, A = 2850 mm²
    fn default() -> Self {
        SectionProperties {
            elastic_modulus: 200_000.0,
            moment_of_inertia: 8.5e6,
            area: 2850.0,
        }
    }
}

/// Input parameters for one beam response calculation, in canonical units.
///
/// Missing JSON fields fall back to [`BeamInput::default`].
///
/// ## JSON Example
///
/// ```json
/// {
///   "length": 5.0,
///   "load_magnitude": 10.0,
///   "load_type": "point",
///   "load_position": 2.5,
///   "support_type": "simple",
///   "properties": {
///     "elastic_modulus": 200000.0,
///     "moment_of_inertia": 8500000.0,
///     "area": 2850.0
///   }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeamInput {
    /// Span in meters
    pub length: f64,

    /// kN for a point load, kN/m for a distributed load
    pub load_magnitude: f64,

    pub load_type: LoadType,

    /// Meters from the left support. Only used for point loads.
    pub load_position: f64,

    pub support_type: SupportType,

    pub properties: SectionProperties,
}

impl Default for BeamInput {
    fn default() -> Self {
        BeamInput {
            length: DEFAULT_LENGTH_M,
            load_magnitude: DEFAULT_LOAD,
            load_type: LoadType::Point,
            load_position: DEFAULT_LOAD_POSITION_M,
            support_type: SupportType::Simple,
            properties: SectionProperties::default(),
        }
    }
}

/// The numbers the formulas actually see after clamping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SanitizedSpan {
    /// Span L (m)
    pub length: f64,
    /// Load P (kN or kN/m)
    pub load: f64,
    /// Load position a (m)
    pub position: f64,
}

impl SanitizedSpan {
    /// Distance from the load to the right support, b = L - a
    pub fn right_segment(&self) -> f64 {
        self.length - self.position
    }
}

impl BeamInput {
    /// Point load `load_kn` at `position_m` on a `length_m` span, default section.
    pub fn point(length_m: f64, load_kn: f64, position_m: f64) -> Self {
        BeamInput {
            length: length_m,
            load_magnitude: load_kn,
            load_type: LoadType::Point,
            load_position: position_m,
            ..Default::default()
        }
    }

    /// Uniform load `load_kn_per_m` over a `length_m` span, default section.
    pub fn distributed(length_m: f64, load_kn_per_m: f64) -> Self {
        BeamInput {
            length: length_m,
            load_magnitude: load_kn_per_m,
            load_type: LoadType::Distributed,
            load_position: 0.0,
            ..Default::default()
        }
    }

    pub fn with_support(mut self, support_type: SupportType) -> Self {
        self.support_type = support_type;
        self
    }

    pub fn with_properties(mut self, properties: SectionProperties) -> Self {
        self.properties = properties;
        self
    }

    /// Clamp the raw numbers into the values the formulas use.
    pub fn sanitized(&self) -> SanitizedSpan {
        let length = finite_or(self.length, DEFAULT_LENGTH_M).max(MIN_LENGTH_M);
        let load = finite_or(self.load_magnitude, DEFAULT_LOAD).max(MIN_LOAD);

        // Upper bound is the raw length (NaN bounds like the default span).
        // `max`/`min` rather than `clamp`: a negative length makes the bounds
        // cross and `clamp` would panic.
        let upper = if self.length.is_nan() { DEFAULT_LENGTH_M } else { self.length };
        let position = self.load_position.max(0.0).min(upper);

        SanitizedSpan {
            length,
            load,
            position,
        }
    }

    /// Check the input without clamping.
    ///
    /// Returns the first field that [`compute`] would silently adjust, or a
    /// section property that is not a positive number.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.length.is_finite() || self.length < MIN_LENGTH_M {
            return Err(CalcError::invalid_input(
                "length",
                self.length.to_string(),
                format!("Length must be a finite number of at least {} m", MIN_LENGTH_M),
            ));
        }
        if !self.load_magnitude.is_finite() || self.load_magnitude < MIN_LOAD {
            return Err(CalcError::invalid_input(
                "load_magnitude",
                self.load_magnitude.to_string(),
                format!("Load must be a finite number of at least {}", MIN_LOAD),
            ));
        }
        if self.load_type == LoadType::Point
            && !(0.0..=self.length).contains(&self.load_position)
        {
            return Err(CalcError::invalid_input(
                "load_position",
                self.load_position.to_string(),
                format!("Load position must be between 0 and {} m", self.length),
            ));
        }
        self.properties.validate()
    }

    /// Parse an input from JSON.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[inline]
fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

/// Results from one beam response calculation, in canonical units.
///
/// ## JSON Example
///
/// ```json
/// {
///   "max_moment": 12.5,
///   "max_shear": 5.0,
///   "max_deflection": 0.0433,
///   "properties": {
///     "elastic_modulus": 200000.0,
///     "moment_of_inertia": 8500000.0,
///     "area": 2850.0
///   }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamResult {
    /// Maximum bending moment (kN·m)
    pub max_moment: f64,

    /// Maximum shear (kN)
    pub max_shear: f64,

    /// Maximum deflection (mm)
    pub max_deflection: f64,

    /// Section properties used
    pub properties: SectionProperties,
}

impl BeamResult {
    pub fn to_json(&self) -> CalcResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Compute the beam response.
///
/// Total and side-effect free: any numeric input produces a result. See the
/// module docs for how out-of-range values are handled.
pub fn compute(input: &BeamInput) -> BeamResult {
    let span = input.sanitized();
    if span.length != input.length || span.load != input.load_magnitude {
        tracing::debug!(
            length = input.length,
            load_magnitude = input.load_magnitude,
            clamped_length = span.length,
            clamped_load = span.load,
            "beam input clamped"
        );
    }

    let SanitizedSpan {
        length: l,
        load: p,
        position: a,
    } = span;
    let e = input.properties.elastic_modulus;
    let i = input.properties.moment_of_inertia;

    tracing::trace!(load_type = ?input.load_type, l, p, a, "computing beam response");

    let (max_moment, max_shear, max_deflection) = match input.load_type {
        LoadType::Point => {
            if a != input.load_position {
                tracing::debug!(
                    load_position = input.load_position,
                    clamped_position = a,
                    "load position clamped"
                );
            }
            (
                point_load_max_moment(p, a, l),
                point_load_max_shear(p, a, l),
                point_load_deflection_estimate(p, a, l, e, i),
            )
        }
        LoadType::Distributed => (
            uniform_load_max_moment(p, l),
            uniform_load_max_shear(p, l),
            uniform_load_max_deflection(p, l, e, i),
        ),
    };

    BeamResult {
        max_moment,
        max_shear,
        max_deflection,
        properties: input.properties,
    }
}

/// Validate, then compute. For callers that prefer an error over clamping.
pub fn compute_strict(input: &BeamInput) -> CalcResult<BeamResult> {
    input.validate()?;
    Ok(compute(input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference_point_deflection(p: f64, a: f64, l: f64, e: f64, i: f64) -> f64 {
        let b = l - a;
        (p * a * b * (l * 1000.0)) / (3.0 * e * i) * (a * a + b * b).sqrt()
    }

    #[test]
    fn test_default_input_matches_initial_session() {
        let input = BeamInput::default();
        assert_eq!(input.length, 5.0);
        assert_eq!(input.load_magnitude, 10.0);
        assert_eq!(input.load_type, LoadType::Point);
        assert_eq!(input.load_position, 2.5);
        assert_eq!(input.support_type, SupportType::Simple);
        assert_eq!(input.properties, SectionProperties::new(200_000.0, 8.5e6, 2850.0));
    }

    #[test]
    fn test_point_load_midspan() {
        let result = compute(&BeamInput::point(5.0, 10.0, 2.5));
        assert_relative_eq!(result.max_moment, 12.5, max_relative = 1e-9);
        assert_relative_eq!(result.max_shear, 5.0, max_relative = 1e-9);
        assert_relative_eq!(
            result.max_deflection,
            reference_point_deflection(10.0, 2.5, 5.0, 200_000.0, 8.5e6),
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_point_load_symmetry_pl_over_4() {
        for (l, p) in [(4.0, 3.0), (7.5, 12.0), (10.0, 0.5)] {
            let result = compute(&BeamInput::point(l, p, l / 2.0));
            assert_relative_eq!(result.max_moment, p * l / 4.0, max_relative = 1e-9);
            assert_relative_eq!(result.max_shear, p / 2.0, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_point_load_off_center() {
        // 8 m span, 20 kN at 2 m: M = 20*2*6/8 = 30, V = 20*6/8 = 15
        let result = compute(&BeamInput::point(8.0, 20.0, 2.0));
        assert_relative_eq!(result.max_moment, 30.0, max_relative = 1e-9);
        assert_relative_eq!(result.max_shear, 15.0, max_relative = 1e-9);
    }

    #[test]
    fn test_distributed_load() {
        let result = compute(&BeamInput::distributed(6.0, 4.0));
        assert_relative_eq!(result.max_moment, 18.0, max_relative = 1e-9);
        assert_relative_eq!(result.max_shear, 12.0, max_relative = 1e-9);
        let expected = 5.0 * 4.0 * 6000.0_f64.powi(4) / (384.0 * 200_000.0 * 8.5e6);
        assert_relative_eq!(result.max_deflection, expected, max_relative = 1e-9);
    }

    #[test]
    fn test_distributed_ignores_position() {
        let mut a = BeamInput::distributed(6.0, 4.0);
        let mut b = a;
        a.load_position = -40.0;
        b.load_position = 3.0;
        assert_eq!(compute(&a), compute(&b));
    }

    #[test]
    fn test_nan_length_behaves_like_default_span() {
        for load_type in LoadType::ALL {
            let mut nan = BeamInput::default();
            nan.load_type = load_type;
            nan.length = f64::NAN;
            let mut five = nan;
            five.length = 5.0;
            assert_eq!(compute(&nan), compute(&five));
        }
    }

    #[test]
    fn test_infinite_load_uses_default() {
        let mut inf = BeamInput::distributed(6.0, f64::INFINITY);
        let ten = BeamInput::distributed(6.0, 10.0);
        assert_eq!(compute(&inf), compute(&ten));

        inf.load_magnitude = f64::NAN;
        assert_eq!(compute(&inf), compute(&ten));
    }

    #[test]
    fn test_negative_length_clamps_span() {
        let negative = BeamInput::distributed(-3.0, 4.0);
        let minimum = BeamInput::distributed(0.1, 4.0);
        assert_eq!(compute(&negative), compute(&minimum));
        assert_eq!(negative.sanitized().length, MIN_LENGTH_M);
    }

    #[test]
    fn test_small_load_clamps_to_minimum() {
        let zero = BeamInput::distributed(6.0, 0.0);
        let minimum = BeamInput::distributed(6.0, 0.1);
        assert_eq!(compute(&zero), compute(&minimum));
    }

    #[test]
    fn test_position_below_zero_clamps_to_support() {
        let input = BeamInput::point(5.0, 10.0, -1.0);
        assert_eq!(input.sanitized().position, 0.0);

        let result = compute(&input);
        assert_eq!(result.max_moment, 0.0);
        assert_eq!(result.max_deflection, 0.0);
        assert_relative_eq!(result.max_shear, 10.0, max_relative = 1e-9);
    }

    #[test]
    fn test_position_beyond_span_clamps_to_length() {
        let input = BeamInput::point(5.0, 10.0, 9.0);
        assert_eq!(input.sanitized().position, 5.0);
        assert_eq!(compute(&input), compute(&BeamInput::point(5.0, 10.0, 5.0)));
    }

    #[test]
    fn test_nan_position_treated_as_left_support() {
        let input = BeamInput::point(5.0, 10.0, f64::NAN);
        assert_eq!(input.sanitized().position, 0.0);
    }

    #[test]
    fn test_position_bound_uses_raw_length() {
        // Span clamps to 0.1 but the position bound stays at -3
        let span = BeamInput::point(-3.0, 10.0, 2.5).sanitized();
        assert_eq!(span.length, 0.1);
        assert_eq!(span.position, -3.0);
        assert_relative_eq!(span.right_segment(), 3.1, max_relative = 1e-12);

        // Span clamps up to 0.1 but a 0.05 raw length still bounds the position
        let span = BeamInput::point(0.05, 10.0, 2.5).sanitized();
        assert_eq!(span.length, 0.1);
        assert_eq!(span.position, 0.05);
    }

    #[test]
    fn test_infinite_length_leaves_position_unbounded() {
        // Span falls back to 5 m, the position bound stays at +inf
        let span = BeamInput::point(f64::INFINITY, 10.0, 8.0).sanitized();
        assert_eq!(span.length, DEFAULT_LENGTH_M);
        assert_eq!(span.position, 8.0);
        assert_relative_eq!(span.right_segment(), -3.0);
    }

    #[test]
    fn test_support_type_has_no_effect() {
        for base in [BeamInput::point(5.0, 10.0, 1.2), BeamInput::distributed(6.0, 4.0)] {
            let simple = compute(&base.with_support(SupportType::Simple));
            let fixed = compute(&base.with_support(SupportType::Fixed));
            assert_eq!(simple, fixed);
        }
    }

    #[test]
    fn test_area_is_echoed_only() {
        let small = BeamInput::default().with_properties(SectionProperties::new(200_000.0, 8.5e6, 1.0));
        let large = BeamInput::default().with_properties(SectionProperties::new(200_000.0, 8.5e6, 99_999.0));
        let (rs, rl) = (compute(&small), compute(&large));
        assert_eq!(rs.max_deflection, rl.max_deflection);
        assert_eq!(rs.properties.area, 1.0);
        assert_eq!(rl.properties.area, 99_999.0);
    }

    #[test]
    fn test_stiffer_section_deflects_less() {
        let base = compute(&BeamInput::distributed(6.0, 4.0));
        let stiff = compute(
            &BeamInput::distributed(6.0, 4.0).with_properties(SectionProperties::new(200_000.0, 17e6, 2850.0)),
        );
        assert_relative_eq!(stiff.max_deflection * 2.0, base.max_deflection, max_relative = 1e-9);
        assert_eq!(stiff.max_moment, base.max_moment);
    }

    #[test]
    fn test_validate_accepts_default() {
        assert!(BeamInput::default().validate().is_ok());
        assert!(compute_strict(&BeamInput::distributed(6.0, 4.0)).is_ok());
    }

    #[test]
    fn test_validate_reports_fields() {
        let err = BeamInput::point(-3.0, 10.0, 1.0).validate().unwrap_err();
        assert_eq!(err.field(), Some("length"));

        let err = BeamInput::point(5.0, f64::NAN, 1.0).validate().unwrap_err();
        assert_eq!(err.field(), Some("load_magnitude"));

        let err = BeamInput::point(5.0, 10.0, 6.0).validate().unwrap_err();
        assert_eq!(err.field(), Some("load_position"));

        let bad_section = BeamInput::default().with_properties(SectionProperties::new(0.0, 8.5e6, 2850.0));
        let err = compute_strict(&bad_section).unwrap_err();
        assert_eq!(err.field(), Some("elastic_modulus"));
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_validate_ignores_position_for_distributed() {
        let mut input = BeamInput::distributed(6.0, 4.0);
        input.load_position = -10.0;
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_input_json_defaults_missing_fields() {
        let input = BeamInput::from_json(r#"{ "load_type": "distributed", "length": 6.0 }"#).unwrap();
        assert_eq!(input.load_type, LoadType::Distributed);
        assert_eq!(input.length, 6.0);
        assert_eq!(input.load_magnitude, DEFAULT_LOAD);
        assert_eq!(input.properties, SectionProperties::default());
    }

    #[test]
    fn test_input_json_rejects_unknown_load_type() {
        let err = BeamInput::from_json(r#"{ "load_type": "triangular" }"#).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_result_serialization() {
        let result = compute(&BeamInput::default());
        let json = result.to_json().unwrap();
        assert!(json.contains("max_moment"));
        assert!(json.contains("max_deflection"));
        assert!(json.contains("elastic_modulus"));

        let roundtrip: BeamResult = serde_json::from_str(&json).unwrap();
        assert_relative_eq!(roundtrip.max_moment, result.max_moment, max_relative = 1e-12);
    }

    #[test]
    fn test_enum_display_and_serde_names() {
        assert_eq!(serde_json::to_string(&LoadType::Distributed).unwrap(), "\"distributed\"");
        assert_eq!(serde_json::to_string(&SupportType::Fixed).unwrap(), "\"fixed\"");
        assert_eq!(LoadType::Point.to_string(), "Point Load");
        assert_eq!(SupportType::Simple.to_string(), "Simply Supported");
        assert_eq!(LoadType::Distributed.magnitude_unit(), "kN/m");
    }
}
