//! Lookup tables used by the [`unit!`](crate::unit) macro.
//!
//! `KIND_MAPPINGS` maps unit tokens to their SI kind and an optional
//! multiplier relative to that kind. `PREFIX_MAPPING` maps prefix tokens to
//! their power-of-ten scale. `_` stands for "no prefix" and for
//! dimensionless quantities.

use std::collections::HashMap;

use crate::prelude::UnitType;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 60.0 * MINUTE;
const DAY: f64 = 24.0 * HOUR;

lazy_static::lazy_static! {
    pub static ref KIND_MAPPINGS: HashMap<&'static str, (UnitType, Option<f64>)> = {
        let mut m = HashMap::new();
        // Mole
        m.insert("mole", (UnitType::MOLE, None));
        m.insert("mol", (UnitType::MOLE, None));

        // Litre
        m.insert("liter", (UnitType::LITRE, None));
        m.insert("litre", (UnitType::LITRE, None));
        m.insert("l", (UnitType::LITRE, None));

        // Second
        m.insert("second", (UnitType::SECOND, None));
        m.insert("s", (UnitType::SECOND, None));

        // Minute
        m.insert("minute", (UnitType::SECOND, Some(MINUTE)));
        m.insert("min", (UnitType::SECOND, Some(MINUTE)));
        m.insert("mins", (UnitType::SECOND, Some(MINUTE)));
        m.insert("minutes", (UnitType::SECOND, Some(MINUTE)));

        // Hour
        m.insert("hour", (UnitType::SECOND, Some(HOUR)));
        m.insert("hours", (UnitType::SECOND, Some(HOUR)));
        m.insert("hr", (UnitType::SECOND, Some(HOUR)));
        m.insert("h", (UnitType::SECOND, Some(HOUR)));

        // Day
        m.insert("day", (UnitType::SECOND, Some(DAY)));
        m.insert("days", (UnitType::SECOND, Some(DAY)));
        m.insert("d", (UnitType::SECOND, Some(DAY)));

        // Gram
        m.insert("gram", (UnitType::GRAM, None));
        m.insert("g", (UnitType::GRAM, None));

        // Dimensionless
        m.insert("dimensionless", (UnitType::DIMENSIONLESS, None));
        m.insert("_", (UnitType::DIMENSIONLESS, None));

        // Kelvin
        m.insert("kelvin", (UnitType::KELVIN, None));
        m.insert("k", (UnitType::KELVIN, None));
        m.insert("K", (UnitType::KELVIN, None));

        // Celsius
        m.insert("celsius", (UnitType::CELSIUS, None));
        m.insert("C", (UnitType::CELSIUS, None));

        m
    };

    pub static ref PREFIX_MAPPING: HashMap<&'static str, f64> = {
        let mut m: HashMap<&str, f64> = HashMap::new();
        m.insert("kilo", 3.0);
        m.insert("k", 3.0);
        m.insert("milli", -3.0);
        m.insert("m", -3.0);
        m.insert("micro", -6.0);
        m.insert("mu", -6.0);
        m.insert("u", -6.0);
        m.insert("nano", -9.0);
        m.insert("n", -9.0);
        m.insert("pico", -12.0);
        m.insert("p", -12.0);
        m.insert("femto", -15.0);
        m.insert("f", -15.0);
        m.insert("atto", -18.0);
        m.insert("a", -18.0);
        m.insert("_", 0.0);
        m
    };
}
