//! Tabular rendering of EnzymeML documents.
//!
//! `Display` for [`EnzymeMLDocument`] prints one table per non-empty
//! collection of the document. The CLI uses it to show stored documents.

use std::{
    collections::BTreeSet,
    fmt::{self, Display},
};

use tabled::{builder::Builder, settings::Style};

use crate::prelude::{
    Complex, Creator, EnzymeMLDocument, Equation, EquationType, Measurement, Parameter, Protein,
    Reaction, SmallMolecule, UnitDefinition, Vessel,
};

/// A model component that renders as a table row.
trait TableRecord {
    fn columns() -> Vec<String>;

    fn to_record(&self) -> Vec<String>;
}

impl Display for EnzymeMLDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = Builder::default();
        let title = match self.id {
            Some(id) => format!("{} (#{id}, v{})", self.name, self.version),
            None => format!("{} (v{})", self.name, self.version),
        };
        builder.push_record(vec![title]);

        section(&mut builder, "Creators", &self.creators);
        section(&mut builder, "Vessels", &self.vessels);
        section(&mut builder, "Small Molecules", &self.small_molecules);
        section(&mut builder, "Proteins", &self.proteins);
        section(&mut builder, "Complexes", &self.complexes);
        section(&mut builder, "Reactions", &self.reactions);

        if !self.measurements.is_empty() {
            builder.push_record(vec!["Measurements".to_string()]);
            builder.push_record(vec![measurement_table(&self.measurements)]);
        }

        section(&mut builder, "Equations", &self.equations);
        section(&mut builder, "Parameters", &self.parameters);

        let mut table = builder.build();
        table.with(Style::sharp());
        write!(f, "{table}")
    }
}

fn section<T: TableRecord>(builder: &mut Builder, title: &str, records: &[T]) {
    if records.is_empty() {
        return;
    }

    builder.push_record(vec![title.to_string()]);
    builder.push_record(vec![to_table(records)]);
}

fn to_table<T: TableRecord>(records: &[T]) -> String {
    let mut builder = Builder::default();
    builder.push_record(T::columns());

    for record in records {
        builder.push_record(record.to_record());
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

fn columns(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map_or("-".to_string(), |v| v.to_string())
}

fn unit_name(unit: Option<&UnitDefinition>) -> String {
    or_dash(unit.and_then(|unit| unit.name.as_deref()))
}

impl TableRecord for Creator {
    fn columns() -> Vec<String> {
        columns(&["Given Name", "Family Name", "Mail"])
    }

    fn to_record(&self) -> Vec<String> {
        vec![
            self.given_name.to_string(),
            self.family_name.to_string(),
            self.mail.to_string(),
        ]
    }
}

impl TableRecord for Vessel {
    fn columns() -> Vec<String> {
        columns(&["ID", "Name", "Volume", "Unit"])
    }

    fn to_record(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.to_string(),
            self.volume.to_string(),
            unit_name(Some(&self.unit)),
        ]
    }
}

impl TableRecord for SmallMolecule {
    fn columns() -> Vec<String> {
        columns(&["ID", "Name", "Constant", "Vessel ID"])
    }

    fn to_record(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.to_string(),
            self.constant.to_string(),
            or_dash(self.vessel_id.as_deref()),
        ]
    }
}

impl TableRecord for Protein {
    fn columns() -> Vec<String> {
        columns(&["ID", "Name", "Constant", "Vessel ID", "EC Number"])
    }

    fn to_record(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.to_string(),
            self.constant.to_string(),
            or_dash(self.vessel_id.as_deref()),
            or_dash(self.ecnumber.as_deref()),
        ]
    }
}

impl TableRecord for Complex {
    fn columns() -> Vec<String> {
        columns(&["ID", "Name", "Participants"])
    }

    fn to_record(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.to_string(),
            self.participants.join(", "),
        ]
    }
}

impl TableRecord for Reaction {
    fn columns() -> Vec<String> {
        columns(&["ID", "Name", "Reversible", "Scheme", "Modifiers"])
    }

    fn to_record(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.to_string(),
            self.reversible.to_string(),
            self.reaction_scheme(),
            self.modifiers.join(", "),
        ]
    }
}

impl TableRecord for Equation {
    fn columns() -> Vec<String> {
        columns(&["Symbol", "Equation", "Equation Type", "Variables"])
    }

    fn to_record(&self) -> Vec<String> {
        vec![
            self.species_id.to_string(),
            self.equation.to_string(),
            match self.equation_type {
                EquationType::ODE => "ODE".to_string(),
                EquationType::RATE_LAW => "RateLaw".to_string(),
                EquationType::INITIAL_ASSIGNMENT => "InitialAssignment".to_string(),
                EquationType::ASSIGNMENT => "Assignment".to_string(),
            },
            self.variables
                .iter()
                .map(|v| v.id.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        ]
    }
}

impl TableRecord for Parameter {
    fn columns() -> Vec<String> {
        columns(&[
            "Symbol",
            "Name",
            "Value",
            "Unit",
            "Initial",
            "Lower Bound",
            "Upper Bound",
        ])
    }

    fn to_record(&self) -> Vec<String> {
        vec![
            self.symbol.to_string(),
            self.name.to_string(),
            or_dash(self.value),
            unit_name(self.unit.as_ref()),
            or_dash(self.initial_value),
            or_dash(self.lower_bound),
            or_dash(self.upper_bound),
        ]
    }
}

/// One row per measurement, one column per measured species; cells hold the
/// initial value of the species in that measurement.
fn measurement_table(measurements: &[Measurement]) -> String {
    let measured_species: BTreeSet<&str> = measurements
        .iter()
        .flat_map(|m| m.species_data.iter().map(|s| s.species_id.as_str()))
        .collect();

    let mut builder = Builder::default();
    let mut header = columns(&["id", "name"]);
    header.extend(measured_species.iter().map(|id| id.to_string()));
    builder.push_record(header);

    for measurement in measurements {
        let mut row = vec![measurement.id.to_string(), measurement.name.to_string()];

        for species_id in &measured_species {
            let value = measurement
                .species_data
                .iter()
                .find(|data| data.species_id == *species_id)
                .and_then(|data| data.initial);

            row.push(or_dash(value));
        }

        builder.push_record(row);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

impl Reaction {
    /// Renders the reaction as `1 s1 + 1 s2 → 1 p1`, using `⇄` for
    /// reversible reactions.
    pub fn reaction_scheme(&self) -> String {
        let reactants = self
            .reactants()
            .iter()
            .map(|s| format!("{} {}", s.stoichiometry.abs(), s.species_id))
            .collect::<Vec<_>>();

        let products = self
            .products()
            .iter()
            .map(|s| format!("{} {}", s.stoichiometry, s.species_id))
            .collect::<Vec<_>>();

        let arrow = if self.reversible { "⇄" } else { "→" };
        format!("{} {arrow} {}", reactants.join(" + "), products.join(" + "))
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_reaction_scheme() {
        let reaction = ReactionBuilder::default()
            .id("r1")
            .name("r1")
            .reversible(true)
            .to_species(ReactionElement::reactant("s1", 2.0))
            .to_species(ReactionElement::product("p1", 1.0))
            .build()
            .expect("Failed to build reaction");

        assert_eq!(reaction.reaction_scheme(), "2 s1 ⇄ 1 p1");
    }

    #[test]
    fn test_table_output() {
        let doc = load_enzmldoc("tests/data/enzmldoc.json")
            .expect("Failed to load EnzymeML document");

        let table = doc.to_string();
        assert!(table.starts_with('┌'));
        assert!(table.contains("Reactions"));
        assert!(table.contains("1 substrate1 → 1 product1"));
        assert!(table.contains("Measurements"));
        assert!(!table.contains("Complexes"));
    }
}
