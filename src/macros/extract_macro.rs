//! Path-based field extraction.
//!
//! `extract_all!(doc, reactions[*].species[*].species_id)` yields an
//! iterator over references to every matching field. Paths are made of
//! plain fields, `[*]` (every element of a list) and `[i]` (one element).
//!
//! The consistency checks use it to collect the ids a document declares.

/// Iterates over the fields selected by a path below `$struct`.
#[macro_export]
macro_rules! extract_all {
    ($struct:expr, $field:ident) => {
        std::iter::once(&$struct.$field)
    };

    ($struct:expr, $vec_path:ident [*] ) => {
        $struct.$vec_path.iter()
    };

    ($struct:expr, $vec_path:ident [*] . $($rest:tt)*) => {
        $struct
            .$vec_path
            .iter()
            .flat_map(|item| $crate::extract_all!(item, $($rest)*))
    };

    ($struct:expr, $vec_path:ident [$idx:expr] . $($rest:tt)*) => {
        $crate::extract_all!($struct.$vec_path[$idx], $($rest)*)
    };

    ($struct:expr, $field:ident . $($rest:tt)*) => {
        $crate::extract_all!($struct.$field, $($rest)*)
    };
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    fn document() -> EnzymeMLDocument {
        let reaction = |id: &str, species: &[&str]| {
            ReactionBuilder::default()
                .id(id)
                .name(id)
                .reversible(false)
                .species(
                    species
                        .iter()
                        .map(|s| ReactionElement::product(*s, 1.0))
                        .collect::<Vec<_>>(),
                )
                .build()
                .expect("Failed to build reaction")
        };

        EnzymeMLDocumentBuilder::default()
            .name("extract")
            .to_reactions(reaction("r1", &["s1", "s2"]))
            .to_reactions(reaction("r2", &["s3"]))
            .build()
            .expect("Failed to build document")
    }

    #[test]
    fn test_single_field() {
        let doc = document();
        let names: Vec<&String> = extract_all!(doc, name).collect();
        assert_eq!(names, vec!["extract"]);
    }

    #[test]
    fn test_wildcard_paths() {
        let doc = document();

        let ids: Vec<&String> = extract_all!(doc, reactions[*].id).collect();
        assert_eq!(ids, vec!["r1", "r2"]);

        let species: Vec<&String> =
            extract_all!(doc, reactions[*].species[*].species_id).collect();
        assert_eq!(species, vec!["s1", "s2", "s3"]);

        assert_eq!(extract_all!(doc, reactions[*]).count(), 2);
    }

    #[test]
    fn test_indexed_path() {
        let doc = document();
        let species: Vec<&String> = extract_all!(doc, reactions[1].species[*].species_id).collect();
        assert_eq!(species, vec!["s3"]);
    }
}
