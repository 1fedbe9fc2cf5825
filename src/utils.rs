//! Convenience accessors on the data model.

use crate::prelude::{EnzymeMLDocument, Reaction, ReactionElement};

impl Reaction {
    /// Reaction elements consumed by the reaction (negative stoichiometry).
    pub fn reactants(&self) -> Vec<&ReactionElement> {
        self.species
            .iter()
            .filter(|element| element.stoichiometry < 0.0)
            .collect()
    }

    /// Reaction elements formed by the reaction (positive stoichiometry).
    pub fn products(&self) -> Vec<&ReactionElement> {
        self.species
            .iter()
            .filter(|element| element.stoichiometry > 0.0)
            .collect()
    }
}

impl ReactionElement {
    /// Creates an element that consumes `amount` of the species.
    ///
    /// The stored stoichiometry is negative regardless of the sign of
    /// `amount`.
    pub fn reactant(species_id: impl Into<String>, amount: f64) -> Self {
        Self {
            species_id: species_id.into(),
            stoichiometry: -amount.abs(),
        }
    }

    /// Creates an element that forms `amount` of the species.
    pub fn product(species_id: impl Into<String>, amount: f64) -> Self {
        Self {
            species_id: species_id.into(),
            stoichiometry: amount.abs(),
        }
    }
}

impl EnzymeMLDocument {
    /// Total number of entities directly listed by the document.
    pub fn entity_count(&self) -> usize {
        self.creators.len()
            + self.vessels.len()
            + self.proteins.len()
            + self.complexes.len()
            + self.small_molecules.len()
            + self.reactions.len()
            + self.measurements.len()
            + self.equations.len()
            + self.parameters.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::ReactionBuilder;

    #[test]
    fn test_reactants_and_products_follow_sign() {
        let reaction = ReactionBuilder::default()
            .id("r1")
            .name("r1")
            .reversible(false)
            .to_species(ReactionElement::reactant("s1", 1.0))
            .to_species(ReactionElement::reactant("s2", -2.0))
            .to_species(ReactionElement::product("p1", 1.0))
            .build()
            .expect("Failed to build reaction");

        let reactants = reaction.reactants();
        assert_eq!(reactants.len(), 2);
        assert_eq!(reactants[1].species_id, "s2");
        assert_eq!(reactants[1].stoichiometry, -2.0);

        let products = reaction.products();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].species_id, "p1");
    }
}
