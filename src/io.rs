use std::path::PathBuf;

use thiserror::Error;

use crate::prelude::EnzymeMLDocument;

/// Loads an EnzymeML document from a JSON file.
///
/// # Errors
///
/// * `IOError::FileNotFound` - the file cannot be opened
/// * `IOError::JsonParseError` - the contents are not a valid EnzymeML
///   document, including unknown enumeration values
pub fn load_enzmldoc(path: impl Into<PathBuf>) -> Result<EnzymeMLDocument, IOError> {
    let path = path.into();
    let file = std::fs::File::open(path).map_err(IOError::FileNotFound)?;
    serde_json::from_reader(std::io::BufReader::new(file)).map_err(IOError::JsonParseError)
}

/// Parses an EnzymeML document from a JSON string.
pub fn parse_enzmldoc(content: &str) -> Result<EnzymeMLDocument, IOError> {
    serde_json::from_str(content).map_err(IOError::JsonParseError)
}

/// Writes an EnzymeML document as pretty-printed JSON.
///
/// The storage id of the document is written too when it is set.
pub fn save_enzmldoc(path: impl Into<PathBuf>, doc: &EnzymeMLDocument) -> Result<(), IOError> {
    let path = path.into();
    let file = std::fs::File::create(path).map_err(IOError::FileNotFound)?;
    serde_json::to_writer_pretty(file, doc).map_err(IOError::JsonParseError)
}

/// Represents errors that can occur during EnzymeML document I/O operations.
#[derive(Error, Debug)]
pub enum IOError {
    /// The file could not be opened or created.
    #[error("File not found: {0}")]
    FileNotFound(#[from] std::io::Error),

    /// The contents could not be parsed or written as JSON.
    #[error("Failed to parse JSON: {0}")]
    JsonParseError(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_and_save() {
        let doc = load_enzmldoc("tests/data/enzmldoc.json").expect("Failed to load document");
        assert_eq!(doc.name, "Example EnzymeML Document");
        assert_eq!(doc.id, None);

        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("copy.json");
        save_enzmldoc(&path, &doc).expect("Failed to save document");

        let reloaded = load_enzmldoc(&path).expect("Failed to reload document");
        assert_eq!(reloaded, doc);
    }

    #[test]
    fn test_missing_file() {
        let result = load_enzmldoc("tests/data/does_not_exist.json");
        assert!(matches!(result, Err(IOError::FileNotFound(_))));
    }

    #[test]
    fn test_unknown_enum_value_is_rejected() {
        let content = r#"{
            "name": "Broken",
            "equations": [{
                "species_id": "s1",
                "equation": "-k * s1",
                "equation_type": "differential"
            }]
        }"#;

        assert!(matches!(
            parse_enzmldoc(content),
            Err(IOError::JsonParseError(_))
        ));
    }
}
