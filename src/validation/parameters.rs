use crate::prelude::{EnzymeMLDocument, Parameter};
use crate::validation::consistency::{Report, Severity, ValidationResult};

/// Validates the parameters of an EnzymeML document:
/// - Parameters should carry a unit (warning)
/// - Lower bounds must not exceed upper bounds (error)
///
/// # Arguments
/// * `enzmldoc` - The EnzymeML document containing parameters to validate
/// * `report` - Validation report to add any validation errors to
pub(super) fn check_parameters(enzmldoc: &EnzymeMLDocument, report: &mut Report) {
    for (param_idx, parameter) in enzmldoc.parameters.iter().enumerate() {
        check_parameter_units(report, parameter, param_idx);
        check_parameter_bounds(report, parameter, param_idx);
    }
}

fn check_parameter_units(report: &mut Report, parameter: &Parameter, param_idx: usize) {
    if parameter.unit.is_none() {
        let result = ValidationResult::new(
            format!("/parameters/{param_idx}"),
            format!(
                "Parameter '{}' has no unit. It is advisable to equip parameters with a unit.",
                parameter.id
            ),
            Severity::Warning,
            Some(parameter.id.clone()),
        );

        report.add_result(result);
    }
}

fn check_parameter_bounds(report: &mut Report, parameter: &Parameter, param_idx: usize) {
    let (Some(lower), Some(upper)) = (parameter.lower_bound, parameter.upper_bound) else {
        return;
    };

    if lower > upper {
        let result = ValidationResult::new(
            format!("/parameters/{param_idx}"),
            format!(
                "Parameter '{}' has a lower bound ({lower}) above its upper bound ({upper}).",
                parameter.id
            ),
            Severity::Error,
            Some(parameter.id.clone()),
        );

        report.add_result(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;
    use crate::unit;

    #[test]
    fn test_parameter_without_unit_is_a_warning() {
        let mut report = Report::new();
        let enzmldoc = EnzymeMLDocumentBuilder::default()
            .name("test")
            .to_parameters(
                ParameterBuilder::default()
                    .id("P1")
                    .symbol("k")
                    .name("P1")
                    .build()
                    .expect("Failed to build parameter"),
            )
            .build()
            .expect("Failed to build document");

        check_parameters(&enzmldoc, &mut report);
        assert!(report.is_valid);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].severity(), &Severity::Warning);
    }

    #[test]
    fn test_inverted_bounds_are_an_error() {
        let mut report = Report::new();
        let enzmldoc = EnzymeMLDocumentBuilder::default()
            .name("test")
            .to_parameters(
                ParameterBuilder::default()
                    .id("kcat")
                    .symbol("kcat")
                    .name("kcat")
                    .unit(unit!(1 / [_ s]))
                    .lower_bound(10.0)
                    .upper_bound(1.0)
                    .build()
                    .expect("Failed to build parameter"),
            )
            .build()
            .expect("Failed to build document");

        check_parameters(&enzmldoc, &mut report);
        assert!(!report.is_valid);
        assert_eq!(report.filter_results("kcat").len(), 1);
    }
}
