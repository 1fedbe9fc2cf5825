use std::collections::HashSet;

use crate::prelude::{EnzymeMLDocument, Equation, EquationType};
use crate::validation::consistency::{
    get_species_ids, get_symbol_ids, Report, Severity, ValidationResult,
};

/// Validates the document-level equations:
/// - The species an ODE describes must be declared
/// - Every variable must name a species or a parameter
///
/// # Arguments
/// * `enzmldoc` - The EnzymeML document containing equations to validate
/// * `report` - Validation report to add any validation errors to
///
/// # Details
/// Only ODE equations describe a species; assignments and rate laws may be
/// written for any symbol.
pub(super) fn check_equations(enzmldoc: &EnzymeMLDocument, report: &mut Report) {
    let all_species = get_species_ids(enzmldoc);
    let all_symbols = get_symbol_ids(enzmldoc);

    for (eq_idx, equation) in enzmldoc.equations.iter().enumerate() {
        check_ode_species(report, equation, &all_species, eq_idx);
        check_equation_variables(report, equation, &all_symbols, eq_idx);
    }
}

fn check_ode_species(
    report: &mut Report,
    equation: &Equation,
    all_species: &[String],
    eq_idx: usize,
) {
    if equation.equation_type != EquationType::ODE || all_species.contains(&equation.species_id) {
        return;
    }

    let result = ValidationResult::new(
        format!("/equations/{eq_idx}"),
        format!(
            "ODE is defined for species '{}', which is not defined in the document.",
            equation.species_id
        ),
        Severity::Error,
        Some(equation.species_id.clone()),
    );

    report.add_result(result);
}

fn check_equation_variables(
    report: &mut Report,
    equation: &Equation,
    all_symbols: &HashSet<String>,
    eq_idx: usize,
) {
    for (var_idx, var) in equation.variables.iter().enumerate() {
        if !all_symbols.contains(&var.id) {
            let result = ValidationResult::new(
                format!("/equations/{eq_idx}/variables/{var_idx}"),
                format!(
                    "Variable '{}' in equation is neither a species nor a parameter.",
                    var.id
                ),
                Severity::Error,
                Some(equation.species_id.clone()),
            );

            report.add_result(result);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    fn document(equation: Equation) -> EnzymeMLDocument {
        EnzymeMLDocumentBuilder::default()
            .name("test")
            .to_small_molecules(
                SmallMoleculeBuilder::default()
                    .id("s1")
                    .name("Substrate")
                    .constant(false)
                    .build()
                    .expect("Failed to build small molecule"),
            )
            .to_parameters(
                ParameterBuilder::default()
                    .id("k")
                    .name("k")
                    .symbol("k")
                    .build()
                    .expect("Failed to build parameter"),
            )
            .to_equations(equation)
            .build()
            .expect("Failed to build document")
    }

    fn variable(id: &str) -> Variable {
        VariableBuilder::default()
            .id(id)
            .name(id)
            .symbol(id)
            .build()
            .expect("Failed to build variable")
    }

    #[test]
    fn test_valid_ode() {
        let equation = EquationBuilder::default()
            .species_id("s1")
            .equation("-k * s1")
            .equation_type(EquationType::ODE)
            .to_variables(variable("s1"))
            .to_variables(variable("k"))
            .build()
            .expect("Failed to build equation");

        let mut report = Report::new();
        check_equations(&document(equation), &mut report);
        assert!(report.is_valid);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_ode_for_unknown_species() {
        let equation = EquationBuilder::default()
            .species_id("s9")
            .equation("-k * s1")
            .equation_type(EquationType::ODE)
            .build()
            .expect("Failed to build equation");

        let mut report = Report::new();
        check_equations(&document(equation), &mut report);
        assert!(!report.is_valid);
        assert_eq!(report.filter_results("s9").len(), 1);
    }

    #[test]
    fn test_assignment_target_is_not_checked() {
        let equation = EquationBuilder::default()
            .species_id("total")
            .equation("s1 * 2")
            .equation_type(EquationType::ASSIGNMENT)
            .to_variables(variable("s1"))
            .build()
            .expect("Failed to build equation");

        let mut report = Report::new();
        check_equations(&document(equation), &mut report);
        assert!(report.is_valid);
    }

    #[test]
    fn test_unknown_variable() {
        let equation = EquationBuilder::default()
            .species_id("s1")
            .equation("-kcat * s1")
            .equation_type(EquationType::ODE)
            .to_variables(variable("kcat"))
            .build()
            .expect("Failed to build equation");

        let mut report = Report::new();
        check_equations(&document(equation), &mut report);
        assert!(!report.is_valid);
        assert_eq!(report.errors[0].location(), "/equations/0/variables/0");
    }
}
