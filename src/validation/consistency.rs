//! Referential consistency checks for EnzymeML documents.
//!
//! The store persists whatever graph it is handed; ids referring to species,
//! vessels or parameters are plain strings. This module checks that those
//! references resolve within the document:
//! - Species definitions (vessels, complex participants, duplicate ids)
//! - Measurement data
//! - Parameter definitions
//! - Equations
//! - Reactions
//!
//! The entry point is [`check_consistency`], which runs every check and
//! collects the findings in a [`Report`].

use std::collections::HashSet;
use std::fmt;

use crate::extract_all;
use crate::prelude::EnzymeMLDocument;
use crate::validation::equations::check_equations;
use crate::validation::measurements::check_measurements;
use crate::validation::parameters::check_parameters;
use crate::validation::reactions::check_reactions;
use crate::validation::species::check_species;

use colored::Colorize;

/// Runs every consistency check against `enzmldoc`.
///
/// # Arguments
///
/// * `enzmldoc` - A reference to the `EnzymeMLDocument` to be checked.
///
/// # Returns
///
/// A `Report` with every finding. The document is valid when no check
/// reported an [`Severity::Error`].
pub fn check_consistency(enzmldoc: &EnzymeMLDocument) -> Report {
    let mut report = Report::new();

    check_species(enzmldoc, &mut report);
    check_measurements(enzmldoc, &mut report);
    check_parameters(enzmldoc, &mut report);
    check_equations(enzmldoc, &mut report);
    check_reactions(enzmldoc, &mut report);

    report
}

/// Results of the consistency checks.
///
/// The document is considered invalid if any result has Error severity.
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, Default)]
pub struct Report {
    /// Whether the document is valid overall. False if any errors were found.
    pub is_valid: bool,
    /// Individual findings in the order they were found.
    pub errors: Vec<ValidationResult>,
}

impl Report {
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    /// Adds a finding. An Error marks the whole report invalid.
    pub fn add_result(&mut self, result: ValidationResult) {
        if result.severity == Severity::Error {
            self.is_valid = false;
        }
        self.errors.push(result);
    }

    /// Findings concerning the object with the given identifier.
    pub fn filter_results(&self, identifier: &str) -> Vec<ValidationResult> {
        self.errors
            .iter()
            .filter(|result| result.identifier.as_deref() == Some(identifier))
            .cloned()
            .collect()
    }

    /// Number of findings with the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.errors
            .iter()
            .filter(|result| result.severity == severity)
            .count()
    }
}

/// A single finding of a consistency check.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ValidationResult {
    /// JSON pointer path to the offending value
    location: String,
    /// Human readable description
    message: String,
    severity: Severity,
    /// Identifier of the object the finding concerns, if any
    identifier: Option<String>,
}

impl ValidationResult {
    /// Creates a new finding.
    ///
    /// # Arguments
    ///
    /// * `location` - JSON pointer path of the offending value.
    /// * `message` - Description of the issue.
    /// * `severity` - How serious the issue is.
    /// * `identifier` - Identifier of the object concerned, if any.
    pub fn new(
        location: String,
        message: String,
        severity: Severity,
        identifier: Option<String>,
    ) -> Self {
        Self {
            location,
            message,
            severity,
            identifier,
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> &Severity {
        &self.severity
    }

    pub fn identifier(&self) -> &Option<String> {
        &self.identifier
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self.severity {
            Severity::Error => self.message.bold().red(),
            Severity::Warning => self.message.bold().yellow(),
            Severity::Info => self.message.bold().green(),
        };

        let severity = match self.severity {
            Severity::Error => "Error".bold().red(),
            Severity::Warning => "Warning".bold().yellow(),
            Severity::Info => "Info".bold().green(),
        };

        write!(
            f,
            "[{}] {}:\n\t└── {}",
            self.location.bold(),
            severity,
            message
        )
    }
}

/// Severity levels for validation issues.
///
/// - Error: the document is inconsistent and should not be stored
/// - Warning: the document may have issues but is still usable
/// - Info: informational message
#[derive(Debug, Clone, PartialEq, Eq, Copy, serde::Serialize, serde::Deserialize)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "Error"),
            Severity::Warning => write!(f, "Warning"),
            Severity::Info => write!(f, "Info"),
        }
    }
}

/// Ids of every species declared by the document: small molecules,
/// proteins and complexes, in that order.
pub fn get_species_ids(enzmldoc: &EnzymeMLDocument) -> Vec<String> {
    let small_mols = extract_all!(enzmldoc, small_molecules[*].id);
    let proteins = extract_all!(enzmldoc, proteins[*].id);
    let complexes = extract_all!(enzmldoc, complexes[*].id);

    small_mols
        .into_iter()
        .chain(proteins)
        .chain(complexes)
        .map(|id| id.to_string())
        .collect()
}

/// Ids that equation variables may refer to: species and parameters.
pub(crate) fn get_symbol_ids(enzmldoc: &EnzymeMLDocument) -> HashSet<String> {
    get_species_ids(enzmldoc)
        .into_iter()
        .chain(extract_all!(enzmldoc, parameters[*].id).map(|id| id.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::prelude::*;

    #[test]
    fn test_valid_enzmldoc() {
        let path = PathBuf::from("tests/data/enzmldoc.json");
        let enzmldoc = load_enzmldoc(&path).expect("Failed to load document");
        let report = check_consistency(&enzmldoc);
        assert!(report.is_valid, "{:?}", report.errors);
    }

    #[test]
    fn test_inconsistent_enzmldoc() {
        let path = PathBuf::from("tests/data/enzmldoc_inconsistent.json");
        let enzmldoc = load_enzmldoc(&path).expect("Failed to load document");
        let report = check_consistency(&enzmldoc);
        assert!(!report.is_valid);
        assert_eq!(report.count(Severity::Error), 3, "{:?}", report.errors);
        assert_eq!(report.filter_results("r1").len(), 2);
    }

    #[test]
    fn test_get_species_ids() {
        let enzmldoc = EnzymeMLDocumentBuilder::default()
            .name("test")
            .to_small_molecules(
                SmallMoleculeBuilder::default()
                    .id("S1")
                    .name("S1")
                    .constant(false)
                    .build()
                    .expect("Failed to build small molecule"),
            )
            .to_complexes(
                ComplexBuilder::default()
                    .id("C1")
                    .name("C1")
                    .constant(false)
                    .build()
                    .expect("Failed to build complex"),
            )
            .to_proteins(
                ProteinBuilder::default()
                    .id("P1")
                    .name("P1")
                    .constant(false)
                    .build()
                    .expect("Failed to build protein"),
            )
            .build()
            .expect("Failed to build document");

        let species_ids = get_species_ids(&enzmldoc);
        assert_eq!(species_ids, vec!["S1", "P1", "C1"]);
    }
}
