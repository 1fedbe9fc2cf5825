//! Concise construction of [`UnitDefinition`](crate::prelude::UnitDefinition)s.
//!
//! Units are written as `[prefix unit]` pairs, where `_` means "no prefix":
//!
//! ```
//! use enzymeml_db::unit;
//!
//! let concentration = unit!([m mole] / [_ litre]);
//! let rate = unit!(1 / [_ s]);
//! let time = unit!([_ min]);
//!
//! assert_eq!(concentration.name.as_deref(), Some("mmole / litre"));
//! assert_eq!(rate.base_units[0].exponent, -1);
//! assert_eq!(time.base_units[0].multiplier, Some(60.0));
//! ```
//!
//! Unknown prefixes or unit tokens panic at the call site.

/// Builds a single BaseUnit from prefix and unit tokens
#[macro_export]
macro_rules! build_base_unit {
    ($prefix:tt, $unit:ident, $exponent:expr) => {{
        let (kind, multiplier) = *$crate::macros::unit_maps::KIND_MAPPINGS
            .get(stringify!($unit))
            .unwrap_or_else(|| panic!("Unit {} not found", stringify!($unit)));
        let scale = *$crate::macros::unit_maps::PREFIX_MAPPING
            .get(stringify!($prefix))
            .unwrap_or_else(|| panic!("Prefix {} not found", stringify!($prefix)));

        $crate::prelude::BaseUnit {
            kind,
            exponent: $exponent,
            multiplier,
            scale: Some(scale),
        }
    }};
}

/// Helper macro to build unit name from prefix/unit pairs
#[macro_export]
macro_rules! build_unit_name {
    ($([$prefix:tt $unit:ident])+) => {
        vec![
            $(
                stringify!($prefix),
                stringify!($unit)
            ),+
        ].join("").replace('_', "")
    };
}

/// Helper macro to collect base units with specified exponent
#[macro_export]
macro_rules! collect_base_units {
    ($exponent:expr; $([$prefix:tt $unit:ident])+) => {
        {
            let mut units = vec![];
            $(
                units.push($crate::build_base_unit!($prefix, $unit, $exponent));
            )+
            units
        }
    };
}

/// Macro for creating inverse units (1 / unit)
#[macro_export]
macro_rules! inverse_unit {
    ($([$prefix:tt $unit:ident])+) => {
        $crate::prelude::UnitDefinition {
            id: None,
            name: format!("1 / {}", $crate::build_unit_name!($([$prefix $unit])+)).into(),
            base_units: $crate::collect_base_units!(-1; $([$prefix $unit])+),
        }
    };
}

/// Macro for creating ratio units (numerator / denominator)
#[macro_export]
macro_rules! ratio_unit {
    ($([$num_prefix:tt $num_unit:ident])+; $([$den_prefix:tt $den_unit:ident])+) => {
        $crate::prelude::UnitDefinition {
            id: None,
            name: format!(
                "{} / {}",
                $crate::build_unit_name!($([$num_prefix $num_unit])+),
                $crate::build_unit_name!($([$den_prefix $den_unit])+)
            ).into(),
            base_units: {
                let mut units = $crate::collect_base_units!(1; $([$num_prefix $num_unit])+);
                units.extend($crate::collect_base_units!(-1; $([$den_prefix $den_unit])+));
                units
            },
        }
    };
}

/// Macro for creating simple units
#[macro_export]
macro_rules! simple_unit {
    ($([$prefix:tt $unit:ident])+) => {
        $crate::prelude::UnitDefinition {
            id: None,
            name: $crate::build_unit_name!($([$prefix $unit])+).into(),
            base_units: $crate::collect_base_units!(1; $([$prefix $unit])+),
        }
    };
}

/// Main unit macro that delegates to appropriate sub-macros
///
/// # Arguments
/// * `[prefix unit]+` - One or more prefix/unit pairs, `_` meaning no prefix
///
/// # Details
/// Three forms are accepted:
/// - `[p u]+` builds a unit whose base units all have exponent 1
/// - `1 / [p u]+` builds the inverse, with exponent -1
/// - `[p u]+ / [p u]+` builds a ratio of numerator and denominator
///
/// The name joins the written tokens, e.g. `mmole / litre`. Prefixes become
/// the `scale` of each base unit and time units such as `min` or `h` carry
/// their factor to seconds as `multiplier`.
#[macro_export]
macro_rules! unit {
    // Inverse units: 1 / [prefix unit]+
    (1 / $([$num_prefix:tt $num_unit:ident])+) => {
        $crate::inverse_unit!($([$num_prefix $num_unit])+)
    };

    // Ratio units: [prefix unit]+ / [prefix unit]+
    ($([$num_prefix:tt $num_unit:ident])+ / $([$den_prefix:tt $den_unit:ident])+) => {
        $crate::ratio_unit!($([$num_prefix $num_unit])+; $([$den_prefix $den_unit])+)
    };

    // Simple units: [prefix unit]+
    ($([$num_prefix:tt $num_unit:ident])+) => {
        $crate::simple_unit!($([$num_prefix $num_unit])+)
    };
}
