//! Field edits gathered from flags and prompts, in display units.
//!
//! Edits are applied to a [`BeamSession`] through its clamping setters. In
//! strict mode the same edits are first converted to canonical units verbatim
//! and validated, so out-of-range values are reported instead of clamped.

use beam_core::{
    compute_strict, BeamInput, BeamResult, BeamSession, CalcResult, LoadType, SupportType, UnitService,
};

use crate::cli::Cli;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputEdits {
    pub length: Option<f64>,
    pub load: Option<f64>,
    pub position: Option<f64>,
    pub load_type: Option<LoadType>,
    pub support_type: Option<SupportType>,
    pub elastic_modulus: Option<f64>,
    pub moment_of_inertia: Option<f64>,
    pub area: Option<f64>,
}

impl From<&Cli> for InputEdits {
    fn from(args: &Cli) -> Self {
        InputEdits {
            length: args.length,
            load: args.load,
            position: args.position,
            load_type: args.load_type.map(Into::into),
            support_type: args.support.map(Into::into),
            elastic_modulus: args.elastic_modulus,
            moment_of_inertia: args.inertia,
            area: args.area,
        }
    }
}

impl InputEdits {
    /// `base` with the edits converted to canonical units, without clamping.
    pub fn raw_input(&self, units: &UnitService, base: &BeamInput) -> BeamInput {
        let mut input = *base;
        if let Some(load_type) = self.load_type {
            input.load_type = load_type;
        }
        if let Some(support_type) = self.support_type {
            input.support_type = support_type;
        }
        if let Some(length) = self.length {
            input.length = units.length_to_canonical(length);
        }
        if let Some(load) = self.load {
            input.load_magnitude = units.load_to_canonical(load);
        }
        if let Some(position) = self.position {
            input.load_position = units.length_to_canonical(position);
        }
        if let Some(e) = self.elastic_modulus {
            input.properties.elastic_modulus = units.stress_to_canonical(e);
        }
        if let Some(i) = self.moment_of_inertia {
            input.properties.moment_of_inertia = units.inertia_to_canonical(i);
        }
        if let Some(a) = self.area {
            input.properties.area = units.area_to_canonical(a);
        }
        input
    }

    /// Validate the unclamped edits against the session's current input.
    pub fn check_strict(&self, session: &BeamSession) -> CalcResult<BeamResult> {
        compute_strict(&self.raw_input(session.units(), session.input()))
    }

    /// Apply the edits through the session setters. Returns the names of
    /// section properties that were rejected and left unchanged.
    pub fn apply(&self, session: &mut BeamSession) -> Vec<&'static str> {
        if let Some(load_type) = self.load_type {
            session.set_load_type(load_type);
        }
        if let Some(support_type) = self.support_type {
            session.set_support_type(support_type);
        }
        if let Some(length) = self.length {
            session.set_length(length);
        }
        if let Some(load) = self.load {
            session.set_load(load);
        }
        if let Some(position) = self.position {
            session.set_load_position(position);
        }

        let properties: [(&'static str, Option<f64>, fn(&mut BeamSession, f64) -> bool); 3] = [
            ("elastic modulus", self.elastic_modulus, BeamSession::set_elastic_modulus),
            ("moment of inertia", self.moment_of_inertia, BeamSession::set_moment_of_inertia),
            ("area", self.area, BeamSession::set_area),
        ];
        let mut rejected = Vec::new();
        for (name, value, setter) in properties {
            if let Some(value) = value {
                if !setter(session, value) {
                    rejected.push(name);
                }
            }
        }
        rejected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use beam_core::{CalcSettings, SectionProperties, UnitSystem};
    use clap::Parser;

    fn session_for(args: &[&str]) -> (BeamSession, InputEdits) {
        let cli = Cli::try_parse_from(args).unwrap();
        let session = BeamSession::new(CalcSettings {
            unit_system: cli.units.into(),
            decimal_places: cli.decimals,
        });
        (session, InputEdits::from(&cli))
    }

    #[test]
    fn test_imperial_flags_stored_canonically() {
        let (mut session, edits) =
            session_for(&["beamcalc", "-u", "imperial", "-l", "16.4042", "-p", "2.2481", "-a", "3.28084"]);
        assert_eq!(session.unit_system(), UnitSystem::Imperial);
        assert!(edits.apply(&mut session).is_empty());

        let input = session.input();
        assert_relative_eq!(input.length, 5.0, max_relative = 1e-9);
        assert_relative_eq!(input.load_magnitude, 10.0, max_relative = 1e-9);
        assert_relative_eq!(input.load_position, 1.0, max_relative = 1e-9);

        // Display getters hand back what was typed
        assert_relative_eq!(session.length(), 16.4042, max_relative = 1e-9);
    }

    #[test]
    fn test_invalid_properties_are_ignored() {
        let (mut session, edits) = session_for(&["beamcalc", "-E", "0", "-I", "-5", "-A", "1200"]);
        let rejected = edits.apply(&mut session);
        assert_eq!(rejected, vec!["elastic modulus", "moment of inertia"]);

        let properties = session.input().properties;
        let defaults = SectionProperties::default();
        assert_eq!(properties.elastic_modulus, defaults.elastic_modulus);
        assert_eq!(properties.moment_of_inertia, defaults.moment_of_inertia);
        assert_eq!(properties.area, 1200.0);
    }

    #[test]
    fn test_out_of_range_values_are_clamped_when_not_strict() {
        let (mut session, edits) = session_for(&["beamcalc", "-p", "-5", "-a", "-1"]);
        edits.apply(&mut session);
        assert_eq!(session.input().load_magnitude, 0.1);
        assert_eq!(session.input().load_position, 0.0);
    }

    #[test]
    fn test_strict_rejects_negative_load() {
        let (session, edits) = session_for(&["beamcalc", "--strict", "-p", "-5"]);
        let err = edits.check_strict(&session).unwrap_err();
        assert_eq!(err.field(), Some("load_magnitude"));
    }

    #[test]
    fn test_strict_rejects_zero_modulus() {
        let (session, edits) = session_for(&["beamcalc", "--strict", "-E", "0"]);
        let err = edits.check_strict(&session).unwrap_err();
        assert_eq!(err.field(), Some("elastic_modulus"));
    }

    #[test]
    fn test_strict_checks_position_against_edited_length() {
        let (session, edits) = session_for(&["beamcalc", "--strict", "-l", "4", "-a", "4.5"]);
        let err = edits.check_strict(&session).unwrap_err();
        assert_eq!(err.field(), Some("load_position"));

        // Distributed loads have no position to check
        let (session, edits) =
            session_for(&["beamcalc", "--strict", "-t", "distributed", "-l", "4", "-a", "4.5"]);
        assert!(edits.check_strict(&session).is_ok());
    }

    #[test]
    fn test_strict_accepts_valid_input_and_matches_session() {
        let (mut session, edits) = session_for(&["beamcalc", "--strict", "-u", "imperial", "-l", "20", "-p", "5"]);
        let strict = edits.check_strict(&session).unwrap();
        edits.apply(&mut session);
        assert_relative_eq!(strict.max_moment, session.result().max_moment, max_relative = 1e-12);
        assert_relative_eq!(strict.max_deflection, session.result().max_deflection, max_relative = 1e-12);
    }
}
