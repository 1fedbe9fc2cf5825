use std::collections::HashMap;

use crate::extract_all;
use crate::prelude::EnzymeMLDocument;
use crate::validation::consistency::{get_species_ids, Report, Severity, ValidationResult};

/// Validates the species declarations:
/// - Species ids are unique across small molecules, proteins and complexes
/// - `vessel_id` refers to a declared vessel
/// - Complex participants are declared species
pub(super) fn check_species(enzmldoc: &EnzymeMLDocument, report: &mut Report) {
    check_duplicate_ids(enzmldoc, report);
    check_vessel_references(enzmldoc, report);
    check_complex_participants(enzmldoc, report);
}

fn check_duplicate_ids(enzmldoc: &EnzymeMLDocument, report: &mut Report) {
    let mut seen: HashMap<String, usize> = HashMap::new();
    for id in get_species_ids(enzmldoc) {
        *seen.entry(id).or_default() += 1;
    }

    let mut duplicates: Vec<_> = seen.into_iter().filter(|(_, count)| *count > 1).collect();
    duplicates.sort();

    for (id, count) in duplicates {
        report.add_result(ValidationResult::new(
            "/".to_string(),
            format!("Species id '{id}' is declared {count} times."),
            Severity::Error,
            Some(id),
        ));
    }
}

fn check_vessel_references(enzmldoc: &EnzymeMLDocument, report: &mut Report) {
    let vessels: Vec<&String> = extract_all!(enzmldoc, vessels[*].id).collect();

    let declared = enzmldoc
        .small_molecules
        .iter()
        .enumerate()
        .map(|(idx, s)| ("small_molecules", idx, &s.id, &s.vessel_id))
        .chain(
            enzmldoc
                .proteins
                .iter()
                .enumerate()
                .map(|(idx, p)| ("proteins", idx, &p.id, &p.vessel_id)),
        )
        .chain(
            enzmldoc
                .complexes
                .iter()
                .enumerate()
                .map(|(idx, c)| ("complexes", idx, &c.id, &c.vessel_id)),
        );

    for (collection, idx, id, vessel_id) in declared {
        let Some(vessel_id) = vessel_id else {
            continue;
        };

        if !vessels.contains(&vessel_id) {
            report.add_result(ValidationResult::new(
                format!("/{collection}/{idx}/vessel_id"),
                format!("Species '{id}' is placed in vessel '{vessel_id}', which is not defined."),
                Severity::Error,
                Some(id.clone()),
            ));
        }
    }
}

fn check_complex_participants(enzmldoc: &EnzymeMLDocument, report: &mut Report) {
    let all_species = get_species_ids(enzmldoc);

    for (complex_idx, complex) in enzmldoc.complexes.iter().enumerate() {
        for (part_idx, participant) in complex.participants.iter().enumerate() {
            if !all_species.contains(participant) {
                report.add_result(ValidationResult::new(
                    format!("/complexes/{complex_idx}/participants/{part_idx}"),
                    format!(
                        "Participant '{participant}' of complex '{}' is not defined in the document.",
                        complex.id
                    ),
                    Severity::Error,
                    Some(complex.id.clone()),
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;
    use crate::unit;

    fn vessel() -> Vessel {
        VesselBuilder::default()
            .id("v1")
            .name("Cuvette")
            .volume(1.0)
            .unit(unit!([m l]))
            .build()
            .expect("Failed to build vessel")
    }

    #[test]
    fn test_consistent_species() {
        let enzmldoc = EnzymeMLDocumentBuilder::default()
            .name("test")
            .to_vessels(vessel())
            .to_small_molecules(
                SmallMoleculeBuilder::default()
                    .id("s1")
                    .name("Substrate")
                    .constant(false)
                    .vessel_id("v1".to_string())
                    .build()
                    .expect("Failed to build small molecule"),
            )
            .to_proteins(
                ProteinBuilder::default()
                    .id("e1")
                    .name("Enzyme")
                    .vessel_id("v1".to_string())
                    .build()
                    .expect("Failed to build protein"),
            )
            .to_complexes(
                ComplexBuilder::default()
                    .id("c1")
                    .name("ES")
                    .constant(false)
                    .participants(vec!["s1".to_string(), "e1".to_string()])
                    .build()
                    .expect("Failed to build complex"),
            )
            .build()
            .expect("Failed to build document");

        let mut report = Report::new();
        check_species(&enzmldoc, &mut report);
        assert!(report.is_valid);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_unknown_vessel_and_participant() {
        let enzmldoc = EnzymeMLDocumentBuilder::default()
            .name("test")
            .to_small_molecules(
                SmallMoleculeBuilder::default()
                    .id("s1")
                    .name("Substrate")
                    .constant(false)
                    .vessel_id("v9".to_string())
                    .build()
                    .expect("Failed to build small molecule"),
            )
            .to_complexes(
                ComplexBuilder::default()
                    .id("c1")
                    .name("ES")
                    .constant(false)
                    .participants(vec!["s1".to_string(), "e9".to_string()])
                    .build()
                    .expect("Failed to build complex"),
            )
            .build()
            .expect("Failed to build document");

        let mut report = Report::new();
        check_species(&enzmldoc, &mut report);
        assert_eq!(report.count(Severity::Error), 2);
        assert_eq!(report.errors[0].location(), "/small_molecules/0/vessel_id");
        assert_eq!(report.errors[1].location(), "/complexes/0/participants/1");
    }

    #[test]
    fn test_duplicate_species_ids() {
        let enzmldoc = EnzymeMLDocumentBuilder::default()
            .name("test")
            .to_small_molecules(
                SmallMoleculeBuilder::default()
                    .id("x")
                    .name("Small")
                    .constant(false)
                    .build()
                    .expect("Failed to build small molecule"),
            )
            .to_proteins(
                ProteinBuilder::default()
                    .id("x")
                    .name("Protein")
                    .build()
                    .expect("Failed to build protein"),
            )
            .build()
            .expect("Failed to build document");

        let mut report = Report::new();
        check_species(&enzmldoc, &mut report);
        assert!(!report.is_valid);
        assert_eq!(report.filter_results("x").len(), 1);
    }
}
