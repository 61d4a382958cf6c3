//! Unit registry and per-category catalogs
//!
//! Every convertible unit is registered once at startup with the factors
//! needed to reach its category's base unit. Base units: Celsius
//! (temperature), meters (length), seconds (duration), liters (volume).

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::shared::types::UnitDto;

/// Unit categories for type-safe conversions
///
/// The set is closed: a category outside this enum is unrepresentable, so
/// there is no "unknown category" error path anywhere in the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Temperature,
    Length,
    Duration,
    Volume,
}

impl Category {
    /// All categories, in presentation order
    pub const ALL: [Category; 4] = [
        Category::Temperature,
        Category::Length,
        Category::Duration,
        Category::Volume,
    ];

    /// Stable lowercase identifier used in DTOs and logs
    pub fn id(&self) -> &'static str {
        match self {
            Category::Temperature => "temperature",
            Category::Length => "length",
            Category::Duration => "duration",
            Category::Volume => "volume",
        }
    }

    /// Display label for category pickers
    pub fn label(&self) -> &'static str {
        match self {
            Category::Temperature => "Temperature",
            Category::Length => "Length",
            Category::Duration => "Duration",
            Category::Volume => "Volume",
        }
    }
}

/// Unit definition with conversion factors
#[derive(Debug, Clone)]
pub struct UnitDefinition {
    pub symbol: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub base_factor: f64, // Multiplier to convert to base unit
    pub offset: f64,      // Offset for affine conversions (temperature)
}

/// Thread-safe unit registry initialized once at startup
///
/// For affine units: base_value = (value + offset) * base_factor
static UNIT_REGISTRY: Lazy<HashMap<&'static str, UnitDefinition>> = Lazy::new(|| {
    let mut registry = HashMap::new();

    // Temperature (base: Celsius)
    registry.insert("C", UnitDefinition {
        symbol: "C", name: "Celsius", category: Category::Temperature,
        base_factor: 1.0, offset: 0.0,
    });
    registry.insert("F", UnitDefinition {
        symbol: "F", name: "Fahrenheit", category: Category::Temperature,
        base_factor: 5.0 / 9.0, offset: -32.0,
    });
    registry.insert("K", UnitDefinition {
        symbol: "K", name: "Kelvin", category: Category::Temperature,
        base_factor: 1.0, offset: -273.15,
    });

    // Length (base: meters)
    registry.insert("m", UnitDefinition {
        symbol: "m", name: "Meters", category: Category::Length,
        base_factor: 1.0, offset: 0.0,
    });
    registry.insert("km", UnitDefinition {
        symbol: "km", name: "Kilometers", category: Category::Length,
        base_factor: 1000.0, offset: 0.0,
    });
    registry.insert("ft", UnitDefinition {
        symbol: "ft", name: "Feet", category: Category::Length,
        base_factor: 0.3048, offset: 0.0,
    });
    registry.insert("yd", UnitDefinition {
        symbol: "yd", name: "Yards", category: Category::Length,
        base_factor: 0.9144, offset: 0.0,
    });
    registry.insert("mi", UnitDefinition {
        symbol: "mi", name: "Miles", category: Category::Length,
        base_factor: 1609.344, offset: 0.0,
    });

    // Duration (base: seconds)
    registry.insert("s", UnitDefinition {
        symbol: "s", name: "Seconds", category: Category::Duration,
        base_factor: 1.0, offset: 0.0,
    });
    registry.insert("min", UnitDefinition {
        symbol: "min", name: "Minutes", category: Category::Duration,
        base_factor: 60.0, offset: 0.0,
    });
    registry.insert("h", UnitDefinition {
        symbol: "h", name: "Hours", category: Category::Duration,
        base_factor: 3600.0, offset: 0.0,
    });

    // Volume (base: liters)
    registry.insert("ml", UnitDefinition {
        symbol: "ml", name: "Milliliters", category: Category::Volume,
        base_factor: 0.001, offset: 0.0,
    });
    registry.insert("L", UnitDefinition {
        symbol: "L", name: "Liters", category: Category::Volume,
        base_factor: 1.0, offset: 0.0,
    });
    registry.insert("cup", UnitDefinition {
        symbol: "cup", name: "Cups", category: Category::Volume,
        base_factor: 0.236588, offset: 0.0,
    });
    registry.insert("pint", UnitDefinition {
        symbol: "pint", name: "Pints", category: Category::Volume,
        base_factor: 0.473176, offset: 0.0,
    });
    registry.insert("gal", UnitDefinition {
        symbol: "gal", name: "Gallons", category: Category::Volume,
        base_factor: 3.78541, offset: 0.0,
    });

    registry
});

/// Fixed ordered unit catalog for a category
///
/// Picker order matters: entries 0 and 1 are the defaults selected on a
/// category switch.
pub fn catalog(category: Category) -> &'static [&'static str] {
    match category {
        Category::Temperature => &["C", "F", "K"],
        Category::Length => &["m", "km", "ft", "yd", "mi"],
        Category::Duration => &["s", "min", "h"],
        Category::Volume => &["ml", "L", "cup", "pint", "gal"],
    }
}

/// Look up a unit definition by symbol
pub fn lookup(symbol: &str) -> Option<&'static UnitDefinition> {
    UNIT_REGISTRY.get(symbol)
}

/// Units of one category, in catalog order, as frontend DTOs
pub fn units_for(category: Category) -> Vec<UnitDto> {
    catalog(category)
        .iter()
        .filter_map(|symbol| lookup(symbol))
        .map(UnitDto::from_definition)
        .collect()
}

/// All registered units, sorted by category then by display label
pub fn all_units() -> Vec<UnitDto> {
    let mut units: Vec<UnitDto> = UNIT_REGISTRY
        .values()
        .map(UnitDto::from_definition)
        .collect();

    units.sort_by(|a, b| {
        a.category
            .cmp(&b.category)
            .then_with(|| a.label.cmp(&b.label))
    });

    units
}
