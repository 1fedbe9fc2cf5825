//! JSON schema validation of interchange documents.
//!
//! The schema is derived from [`EnzymeMLDocument`] with `schemars`, so
//! documents that pass it deserialize into the data model. Closed
//! enumerations are part of the schema and unknown values are reported
//! here before any deserialization happens.

use std::{error::Error, fmt};

use colored::Colorize;
use jsonschema::validator_for;
use schemars::schema_for;
use serde_json::Value;

use crate::prelude::EnzymeMLDocument;

/// Report containing validation results
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ValidationReport {
    /// Whether the document is valid
    pub valid: bool,
    /// List of validation errors if any
    pub errors: Vec<ValidationError>,
}

/// Individual validation error details
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ValidationError {
    /// JSON path where the error occurred
    pub location: String,
    /// Description of the validation error
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n\t└── {}",
            self.location.bold(),
            self.message.bold().red()
        )
    }
}

/// Validates an EnzymeML document against its JSON schema
///
/// # Arguments
/// * `content` - JSON string containing the EnzymeML document
///
/// # Returns
/// A report listing every schema violation. Fails only when `content` is
/// not JSON at all.
pub fn validate_json(content: &str) -> Result<ValidationReport, Box<dyn Error>> {
    let json: Value = serde_json::from_str(content)?;
    let schema = serde_json::to_value(schema_for!(EnzymeMLDocument))?;
    let validator = validator_for(&schema).map_err(|err| err.to_string())?;

    let errors: Vec<ValidationError> = validator
        .iter_errors(&json)
        .map(|error| ValidationError {
            location: error.instance_path.to_string(),
            message: error.to_string().replace('"', "'"),
        })
        .collect();

    Ok(ValidationReport {
        valid: errors.is_empty(),
        errors,
    })
}
