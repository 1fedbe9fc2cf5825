use crate::prelude::{EnzymeMLDocument, MeasurementData};

use super::consistency::{get_species_ids, Report, Severity, ValidationResult};

/// Validates measurements in an EnzymeML document by checking:
/// - Initial concentrations match the first data point
/// - Time and data vectors have consistent lengths
/// - Referenced species exist in the document
///
/// # Arguments
/// * `enzmldoc` - The EnzymeML document containing measurements to validate
/// * `report` - Validation report to add any validation errors to
///
/// # Details
/// Every species data entry of every measurement is checked. Locations point
/// at `/measurements/{i}/species_data/{j}` and carry the measurement id.
pub(super) fn check_measurements(enzmldoc: &EnzymeMLDocument, report: &mut Report) {
    let all_species = get_species_ids(enzmldoc);

    for (meas_idx, measurement) in enzmldoc.measurements.iter().enumerate() {
        let meas_id = &measurement.id;
        for (data_idx, meas_data) in measurement.species_data.iter().enumerate() {
            check_initial_concentrations(report, meas_id, meas_idx, data_idx, meas_data);
            check_time_data_consistency(report, meas_id, meas_idx, data_idx, meas_data);
            check_species_consistency(report, meas_id, meas_idx, data_idx, meas_data, &all_species);
        }
    }
}

/// Warns when the initial concentration differs from the first data point
///
/// # Arguments
/// * `report` - Validation report to add any warnings to
/// * `meas_id` - ID of the measurement
/// * `meas_idx` - Index of the measurement in the document's measurements list
/// * `data_idx` - Index of the species data in the measurement's data list
/// * `meas_data` - The measurement data to validate
///
/// # Details
/// The comparison applies whenever both `initial` and `data[0]` are present,
/// regardless of the first time point.
fn check_initial_concentrations(
    report: &mut Report,
    meas_id: &str,
    meas_idx: usize,
    data_idx: usize,
    meas_data: &MeasurementData,
) {
    let Some(first_value) = meas_data.data.first() else {
        return;
    };

    if let Some(initial) = meas_data.initial {
        if *first_value != initial {
            let result = ValidationResult::new(
                format!("/measurements/{meas_idx}/species_data/{data_idx}"),
                format!(
                "Initial concentration does not match first data point for species '{}'.",
                meas_data.species_id
            ),
                Severity::Warning,
                Some(meas_id.to_string()),
            );

            report.add_result(result);
        }
    }
}

/// Time and data vectors must have matching lengths; one without the other
/// is an error too.
fn check_time_data_consistency(
    report: &mut Report,
    meas_id: &str,
    meas_idx: usize,
    data_idx: usize,
    meas_data: &MeasurementData,
) {
    if !meas_data.data.is_empty() && !meas_data.time.is_empty() {
        let data = &meas_data.data;
        let time = &meas_data.time;

        if data.len() != time.len() {
            let result = ValidationResult::new(
                format!("/measurements/{meas_idx}/species_data/{data_idx}"),
                format!(
                    "Data and time vectors have different lengths for species '{}'. \
                Got {} data points and {} time points.",
                    meas_data.species_id,
                    data.len(),
                    time.len()
                ),
                Severity::Error,
                Some(meas_id.to_string()),
            );

            report.add_result(result);
        }
    } else if meas_data.data.is_empty() && !meas_data.time.is_empty() {
        let result = ValidationResult::new(
            format!("/measurements/{meas_idx}/species_data/{data_idx}"),
            format!(
                "Data vector is missing for species '{}'.",
                meas_data.species_id
            ),
            Severity::Error,
            Some(meas_id.to_string()),
        );

        report.add_result(result);
    } else if !meas_data.data.is_empty() && meas_data.time.is_empty() {
        let result = ValidationResult::new(
            format!("/measurements/{meas_idx}/species_data/{data_idx}"),
            format!(
                "Time vector is missing for species '{}'.",
                meas_data.species_id
            ),
            Severity::Error,
            Some(meas_id.to_string()),
        );

        report.add_result(result);
    }
}

/// The measured species must be declared in the document.
fn check_species_consistency(
    report: &mut Report,
    meas_id: &str,
    meas_idx: usize,
    data_idx: usize,
    meas_data: &MeasurementData,
    all_species: &[String],
) {
    if !all_species.contains(&meas_data.species_id) {
        let result = ValidationResult::new(
            format!("/measurements/{meas_idx}/species_data/{data_idx}"),
            format!(
                "Species '{}' in measurement is not defined in the document.",
                meas_data.species_id
            ),
            Severity::Error,
            Some(meas_id.to_string()),
        );

        report.add_result(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::{
        DataTypes, EnzymeMLDocumentBuilder, MeasurementBuilder, MeasurementDataBuilder,
        SmallMoleculeBuilder,
    };
    use crate::unit;

    /// Test that a valid measurement is valid
    #[test]
    fn test_valid_measurement() {
        let mut report = Report::new();
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
            .to_measurements(
                MeasurementBuilder::default()
                    .id("M1")
                    .name("M1")
                    .to_species_data(
                        MeasurementDataBuilder::default()
                            .species_id("S1")
                            .initial(1.0)
                            .data_unit(unit!([m mole] / [_ l]))
                            .data_type(DataTypes::CONCENTRATION)
                            .time(vec![0.0, 1.0])
                            .data(vec![1.0, 2.0])
                            .is_simulated(false)
                            .build()
                            .expect("Failed to build measurement data"),
                    )
                    .build()
                    .expect("Failed to build measurement"),
            )
            .build()
            .expect("Failed to build document");

        check_measurements(&enzmldoc, &mut report);
        assert!(report.is_valid);
    }

    /// Test that a measurement with no species ID is invalid
    #[test]
    fn test_invalid_measurement_no_species_id() {
        let mut report = Report::new();
        let enzmldoc = EnzymeMLDocumentBuilder::default()
            .name("test")
            .to_measurements(
                MeasurementBuilder::default()
                    .id("M1")
                    .name("M1")
                    .to_species_data(
                        MeasurementDataBuilder::default()
                            .data_unit(unit!([m mole] / [_ l]))
                            .initial(1.0)
                            .data_type(DataTypes::CONCENTRATION)
                            .time(vec![0.0, 1.0])
                            .data(vec![1.0, 2.0])
                            .is_simulated(false)
                            .species_id("S1")
                            .build()
                            .expect("Failed to build measurement data"),
                    )
                    .build()
                    .expect("Failed to build measurement"),
            )
            .build()
            .expect("Failed to build document");

        check_measurements(&enzmldoc, &mut report);
        assert!(!report.is_valid);
        assert_eq!(report.errors.len(), 1);
    }

    /// Test that a measurement with inconsistent time and data vectors is invalid
    #[test]
    fn test_invalid_measurement_inconsistent_time_and_data_vectors() {
        let mut report = Report::new();
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
            .to_measurements(
                MeasurementBuilder::default()
                    .id("M1")
                    .name("M1")
                    .to_species_data(
                        MeasurementDataBuilder::default()
                            .species_id("S1")
                            .initial(1.0)
                            .data_unit(unit!([m mole] / [_ l]))
                            .data_type(DataTypes::CONCENTRATION)
                            .is_simulated(false)
                            .time(vec![0.0, 1.0])
                            .data(vec![1.0, 2.0, 3.0])
                            .build()
                            .expect("Failed to build measurement data"),
                    )
                    .build()
                    .expect("Failed to build measurement"),
            )
            .build()
            .expect("Failed to build document");

        check_measurements(&enzmldoc, &mut report);

        assert!(!report.is_valid);
        assert_eq!(report.errors.len(), 1);
    }

    /// Test that a measurement with missing time vector is invalid
    #[test]
    fn test_invalid_measurement_missing_time_vector() {
        let mut report = Report::new();
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
            .to_measurements(
                MeasurementBuilder::default()
                    .id("M1")
                    .name("M1")
                    .to_species_data(
                        MeasurementDataBuilder::default()
                            .species_id("S1")
                            .initial(1.0)
                            .data_unit(unit!([m mole] / [_ l]))
                            .data_type(DataTypes::CONCENTRATION)
                            .is_simulated(false)
                            .data(vec![1.0, 2.0, 3.0])
                            .build()
                            .expect("Failed to build measurement data"),
                    )
                    .build()
                    .expect("Failed to build measurement"),
            )
            .build()
            .expect("Failed to build document");

        check_measurements(&enzmldoc, &mut report);

        assert!(!report.is_valid);
        assert_eq!(report.errors.len(), 1);
    }

    /// Test that a measurement with missing data vector is invalid
    #[test]
    fn test_invalid_measurement_missing_data_vector() {
        let mut report = Report::new();
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
            .to_measurements(
                MeasurementBuilder::default()
                    .id("M1")
                    .name("M1")
                    .to_species_data(
                        MeasurementDataBuilder::default()
                            .species_id("S1")
                            .initial(1.0)
                            .data_unit(unit!([m mole] / [_ l]))
                            .data_type(DataTypes::CONCENTRATION)
                            .is_simulated(false)
                            .time(vec![0.0, 1.0])
                            .build()
                            .expect("Failed to build measurement data"),
                    )
                    .build()
                    .expect("Failed to build measurement"),
            )
            .build()
            .expect("Failed to build document");

        check_measurements(&enzmldoc, &mut report);

        assert!(!report.is_valid);
        assert_eq!(report.errors.len(), 1);
    }

    /// Test that a measurement with inconsistent species id is invalid
    #[test]
    fn test_invalid_measurement_inconsistent_species_id() {
        let mut report = Report::new();
        let enzmldoc = EnzymeMLDocumentBuilder::default()
            .name("test")
            .to_small_molecules(
                SmallMoleculeBuilder::default()
                    .id("S2")
                    .name("S2")
                    .constant(false)
                    .build()
                    .expect("Failed to build small molecule"),
            )
            .to_measurements(
                MeasurementBuilder::default()
                    .id("M1")
                    .name("M1")
                    .to_species_data(
                        MeasurementDataBuilder::default()
                            .species_id("S1")
                            .initial(1.0)
                            .data_unit(unit!([m mole] / [_ l]))
                            .data_type(DataTypes::CONCENTRATION)
                            .is_simulated(false)
                            .build()
                            .expect("Failed to build measurement data"),
                    )
                    .build()
                    .expect("Failed to build measurement"),
            )
            .build()
            .expect("Failed to build document");

        check_measurements(&enzmldoc, &mut report);

        assert!(!report.is_valid);
        assert_eq!(report.errors.len(), 1);
    }

    #[test]
    fn test_initial_mismatch_is_a_warning() {
        let mut report = Report::new();
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
            .to_measurements(
                MeasurementBuilder::default()
                    .id("M1")
                    .name("M1")
                    .to_species_data(
                        MeasurementDataBuilder::default()
                            .species_id("S1")
                            .initial(5.0)
                            .time(vec![0.0, 1.0])
                            .data(vec![1.0, 2.0])
                            .build()
                            .expect("Failed to build measurement data"),
                    )
                    .build()
                    .expect("Failed to build measurement"),
            )
            .build()
            .expect("Failed to build document");

        check_measurements(&enzmldoc, &mut report);

        assert!(report.is_valid);
        assert_eq!(report.count(Severity::Warning), 1);
        assert_eq!(report.filter_results("M1").len(), 1);
    }

    /// The initial value is compared even when the series starts later
    /// than t=0.
    #[test]
    fn test_initial_mismatch_without_sample_at_zero() {
        let mut report = Report::new();
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
            .to_measurements(
                MeasurementBuilder::default()
                    .id("M1")
                    .name("M1")
                    .to_species_data(
                        MeasurementDataBuilder::default()
                            .species_id("S1")
                            .initial(5.0)
                            .time(vec![1.0, 2.0])
                            .data(vec![4.0, 3.0])
                            .build()
                            .expect("Failed to build measurement data"),
                    )
                    .to_species_data(
                        MeasurementDataBuilder::default()
                            .species_id("S1")
                            .initial(4.0)
                            .time(vec![1.0, 2.0])
                            .data(vec![4.0, 3.0])
                            .build()
                            .expect("Failed to build measurement data"),
                    )
                    .build()
                    .expect("Failed to build measurement"),
            )
            .build()
            .expect("Failed to build document");

        check_measurements(&enzmldoc, &mut report);

        assert!(report.is_valid);
        assert_eq!(report.count(Severity::Warning), 1);
        assert_eq!(report.errors[0].location(), "/measurements/0/species_data/0");
    }
}
