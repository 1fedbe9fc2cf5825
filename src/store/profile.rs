//! Eager load profiles.
//!
//! A profile lists, per root entity kind, every relationship path that a
//! read hydrates. Paths are typed [`Relation`] chains rather than strings;
//! the hydration code in [`crate::store::read`] fills each relation field
//! with a full struct literal, so a field without a loader does not
//! compile. [`LoadProfile::verify`] runs when a store is opened and
//! rejects profiles that are not connected chains or that miss an edge
//! reachable from their root.

use std::collections::BTreeSet;

use crate::store::schema::{EntityKind, Relation};

use Relation::*;

/// Relationship paths hydrated when loading a root entity kind.
#[derive(Debug, Clone, Copy)]
pub struct LoadProfile {
    root: EntityKind,
    paths: &'static [&'static [Relation]],
}

const DOCUMENT: LoadProfile = LoadProfile {
    root: EntityKind::Document,
    paths: &[
        &[DocumentCreators],
        &[DocumentVessels, VesselUnit, UnitBaseUnits],
        &[DocumentProteins],
        &[DocumentComplexes],
        &[DocumentSmallMolecules],
        &[DocumentReactions, ReactionKineticLaw, EquationVariables],
        &[DocumentReactions, ReactionSpecies],
        &[
            DocumentMeasurements,
            MeasurementSpeciesData,
            MeasurementDataUnit,
            UnitBaseUnits,
        ],
        &[
            DocumentMeasurements,
            MeasurementSpeciesData,
            MeasurementTimeUnit,
            UnitBaseUnits,
        ],
        &[DocumentMeasurements, MeasurementTemperatureUnit, UnitBaseUnits],
        &[DocumentEquations, EquationVariables],
        &[DocumentParameters, ParameterUnit, UnitBaseUnits],
    ],
};

const VESSEL: LoadProfile = LoadProfile {
    root: EntityKind::Vessel,
    paths: &[&[VesselUnit, UnitBaseUnits]],
};

const REACTION: LoadProfile = LoadProfile {
    root: EntityKind::Reaction,
    paths: &[
        &[ReactionKineticLaw, EquationVariables],
        &[ReactionSpecies],
    ],
};

const EQUATION: LoadProfile = LoadProfile {
    root: EntityKind::Equation,
    paths: &[&[EquationVariables]],
};

const PARAMETER: LoadProfile = LoadProfile {
    root: EntityKind::Parameter,
    paths: &[&[ParameterUnit, UnitBaseUnits]],
};

const MEASUREMENT: LoadProfile = LoadProfile {
    root: EntityKind::Measurement,
    paths: &[
        &[MeasurementSpeciesData, MeasurementDataUnit, UnitBaseUnits],
        &[MeasurementSpeciesData, MeasurementTimeUnit, UnitBaseUnits],
        &[MeasurementTemperatureUnit, UnitBaseUnits],
    ],
};

const MEASUREMENT_DATA: LoadProfile = LoadProfile {
    root: EntityKind::MeasurementData,
    paths: &[
        &[MeasurementDataUnit, UnitBaseUnits],
        &[MeasurementTimeUnit, UnitBaseUnits],
    ],
};

const UNIT_DEFINITION: LoadProfile = LoadProfile {
    root: EntityKind::UnitDefinition,
    paths: &[&[UnitBaseUnits]],
};

impl LoadProfile {
    /// Profile used when loading `kind`.
    pub fn of(kind: EntityKind) -> LoadProfile {
        match kind {
            EntityKind::Document => DOCUMENT,
            EntityKind::Vessel => VESSEL,
            EntityKind::Reaction => REACTION,
            EntityKind::Equation => EQUATION,
            EntityKind::Parameter => PARAMETER,
            EntityKind::Measurement => MEASUREMENT,
            EntityKind::MeasurementData => MEASUREMENT_DATA,
            EntityKind::UnitDefinition => UNIT_DEFINITION,
            EntityKind::Creator
            | EntityKind::Protein
            | EntityKind::Complex
            | EntityKind::SmallMolecule
            | EntityKind::ReactionElement
            | EntityKind::Variable
            | EntityKind::BaseUnit => LoadProfile {
                root: kind,
                paths: &[],
            },
        }
    }

    pub fn root(&self) -> EntityKind {
        self.root
    }

    pub fn paths(&self) -> &'static [&'static [Relation]] {
        self.paths
    }

    /// Distinct relations touched by any path.
    pub fn edges(&self) -> BTreeSet<Relation> {
        self.paths
            .iter()
            .flat_map(|path| path.iter().copied())
            .collect()
    }

    /// Checks that every path is a connected chain starting at the root and
    /// that every relation reachable from the root is covered.
    pub fn verify(&self) -> Result<(), String> {
        for path in self.paths {
            let mut owner = self.root;
            for relation in path.iter() {
                if relation.parent() != owner {
                    return Err(format!(
                        "path edge {relation} does not start at {owner}"
                    ));
                }
                owner = relation.child();
            }
        }

        let edges = self.edges();
        let mut reachable = BTreeSet::new();
        let mut pending = vec![self.root];
        while let Some(kind) = pending.pop() {
            for relation in kind.relations() {
                if reachable.insert(relation) {
                    pending.push(relation.child());
                }
            }
        }

        match reachable.difference(&edges).next() {
            Some(missing) => Err(format!("relation {missing} is never loaded")),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_profile_is_complete() {
        for kind in EntityKind::ALL {
            let profile = LoadProfile::of(kind);
            assert_eq!(profile.root(), kind);
            assert_eq!(profile.verify(), Ok(()), "{kind}");
        }
    }

    #[test]
    fn test_document_profile_covers_every_relation() {
        let edges = LoadProfile::of(EntityKind::Document).edges();
        assert_eq!(edges.len(), Relation::ALL.len());
    }

    #[test]
    fn test_incomplete_profile_is_rejected() {
        let profile = LoadProfile {
            root: EntityKind::Vessel,
            paths: &[&[VesselUnit]],
        };

        let err = profile.verify().expect_err("Profile should be incomplete");
        assert!(err.contains("UnitDefinition.base_units"));
    }

    #[test]
    fn test_disconnected_path_is_rejected() {
        let profile = LoadProfile {
            root: EntityKind::Parameter,
            paths: &[&[ParameterUnit, UnitBaseUnits], &[UnitBaseUnits]],
        };

        assert!(profile.verify().is_err());
    }
}
