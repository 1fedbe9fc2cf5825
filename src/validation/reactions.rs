use std::collections::HashSet;

use crate::prelude::{EnzymeMLDocument, Reaction};
use crate::validation::consistency::{
    get_species_ids, get_symbol_ids, Report, Severity, ValidationResult,
};

/// Validates reactions:
/// - Reaction elements and modifiers must name declared species
/// - A stoichiometry of zero is an error, it makes the element neither
///   reactant nor product
/// - Kinetic law variables should be species or parameters (warning)
///
/// # Arguments
/// * `enzmldoc` - The EnzymeML document containing reactions to validate
/// * `report` - Validation report to add any validation errors to
///
/// # Details
/// Findings carry the reaction id and point at the offending element, e.g.
/// `/reactions/0/species/1` or `/reactions/0/modifiers/0`.
pub(super) fn check_reactions(enzmldoc: &EnzymeMLDocument, report: &mut Report) {
    let all_species = get_species_ids(enzmldoc);
    let all_symbols = get_symbol_ids(enzmldoc);

    for (reaction_idx, reaction) in enzmldoc.reactions.iter().enumerate() {
        check_reaction_species(report, reaction, &all_species, reaction_idx);
        check_reaction_modifiers(report, reaction, &all_species, reaction_idx);
        check_kinetic_law(report, reaction, &all_symbols, reaction_idx);
    }
}

fn check_reaction_species(
    report: &mut Report,
    reaction: &Reaction,
    all_species: &[String],
    reaction_idx: usize,
) {
    for (elem_idx, reac_elem) in reaction.species.iter().enumerate() {
        let location = format!("/reactions/{reaction_idx}/species/{elem_idx}");

        if !all_species.contains(&reac_elem.species_id) {
            report.add_result(ValidationResult::new(
                location.clone(),
                format!(
                    "Species '{}' in reaction is not defined in the document.",
                    reac_elem.species_id
                ),
                Severity::Error,
                Some(reaction.id.clone()),
            ));
        }

        if reac_elem.stoichiometry == 0.0 {
            report.add_result(ValidationResult::new(
                location,
                format!(
                    "Species '{}' has a stoichiometry of zero and is neither reactant nor product.",
                    reac_elem.species_id
                ),
                Severity::Error,
                Some(reaction.id.clone()),
            ));
        }
    }
}

fn check_reaction_modifiers(
    report: &mut Report,
    reaction: &Reaction,
    all_species: &[String],
    reaction_idx: usize,
) {
    for (mod_idx, modifier) in reaction.modifiers.iter().enumerate() {
        if !all_species.contains(modifier) {
            report.add_result(ValidationResult::new(
                format!("/reactions/{reaction_idx}/modifiers/{mod_idx}"),
                format!("Modifier '{modifier}' in reaction is not defined in the document."),
                Severity::Error,
                Some(reaction.id.clone()),
            ));
        }
    }
}

fn check_kinetic_law(
    report: &mut Report,
    reaction: &Reaction,
    all_symbols: &HashSet<String>,
    reaction_idx: usize,
) {
    let Some(law) = &reaction.kinetic_law else {
        return;
    };

    for (var_idx, var) in law.variables.iter().enumerate() {
        if !all_symbols.contains(&var.id) {
            report.add_result(ValidationResult::new(
                format!("/reactions/{reaction_idx}/kinetic_law/variables/{var_idx}"),
                format!(
                    "Variable '{}' in the kinetic law is neither a species nor a parameter.",
                    var.id
                ),
                Severity::Warning,
                Some(reaction.id.clone()),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    fn document(reaction: Reaction) -> EnzymeMLDocument {
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
            .to_small_molecules(
                SmallMoleculeBuilder::default()
                    .id("p1")
                    .name("Product")
                    .constant(false)
                    .build()
                    .expect("Failed to build small molecule"),
            )
            .to_proteins(
                ProteinBuilder::default()
                    .id("e1")
                    .name("Enzyme")
                    .build()
                    .expect("Failed to build protein"),
            )
            .to_reactions(reaction)
            .build()
            .expect("Failed to build document")
    }

    #[test]
    fn test_valid_reaction() {
        let reaction = ReactionBuilder::default()
            .id("r1")
            .name("r1")
            .reversible(false)
            .to_species(ReactionElement::reactant("s1", 1.0))
            .to_species(ReactionElement::product("p1", 1.0))
            .to_modifiers("e1".to_string())
            .build()
            .expect("Failed to build reaction");

        let mut report = Report::new();
        check_reactions(&document(reaction), &mut report);
        assert!(report.is_valid);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_unknown_species_and_modifier() {
        let reaction = ReactionBuilder::default()
            .id("r1")
            .name("r1")
            .reversible(false)
            .to_species(ReactionElement::reactant("s9", 1.0))
            .to_modifiers("e9".to_string())
            .build()
            .expect("Failed to build reaction");

        let mut report = Report::new();
        check_reactions(&document(reaction), &mut report);
        assert!(!report.is_valid);
        assert_eq!(report.count(Severity::Error), 2);
        assert_eq!(report.errors[1].location(), "/reactions/0/modifiers/0");
    }

    #[test]
    fn test_zero_stoichiometry() {
        let reaction = ReactionBuilder::default()
            .id("r1")
            .name("r1")
            .reversible(true)
            .to_species(
                ReactionElementBuilder::default()
                    .species_id("s1")
                    .stoichiometry(0.0)
                    .build()
                    .expect("Failed to build reaction element"),
            )
            .build()
            .expect("Failed to build reaction");

        let mut report = Report::new();
        check_reactions(&document(reaction), &mut report);
        assert!(!report.is_valid);
        assert_eq!(report.filter_results("r1").len(), 1);
    }

    #[test]
    fn test_unknown_kinetic_law_variable_is_a_warning() {
        let law = EquationBuilder::default()
            .species_id("r1")
            .equation("kcat * e1 * s1")
            .equation_type(EquationType::RATE_LAW)
            .to_variables(
                VariableBuilder::default()
                    .id("kcat")
                    .name("kcat")
                    .symbol("kcat")
                    .build()
                    .expect("Failed to build variable"),
            )
            .build()
            .expect("Failed to build equation");

        let reaction = ReactionBuilder::default()
            .id("r1")
            .name("r1")
            .reversible(false)
            .kinetic_law(law)
            .to_species(ReactionElement::reactant("s1", 1.0))
            .build()
            .expect("Failed to build reaction");

        let mut report = Report::new();
        check_reactions(&document(reaction), &mut report);
        assert!(report.is_valid);
        assert_eq!(report.count(Severity::Warning), 1);
    }
}
