use serde::{Deserialize, Serialize};

use crate::core::units::{Category, UnitDefinition};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertUnitsRequest {
    pub amount: f64,
    pub from_unit: String,
    pub to_unit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertUnitsResponse {
    pub result: f64,
    pub formatted_result: String,
    pub from_unit: String,
    pub to_unit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseMeasurementResponse {
    pub amount: f64,
    pub unit: String,
    pub category: String,
}

// Rich unit data transfer object for pickers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitDto {
    pub id: String,       // Unit symbol (e.g., "m", "gal")
    pub label: String,    // Display name (e.g., "Meters", "Gallons")
    pub category: String, // Category id (e.g., "length", "volume")
}

impl UnitDto {
    pub(crate) fn from_definition(def: &UnitDefinition) -> Self {
        UnitDto {
            id: def.symbol.to_string(),
            label: def.name.to_string(),
            category: def.category.id().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetUnitsResponse {
    pub units: Vec<UnitDto>,
}

/// Immutable copy of the model state, the unit of one-way data flow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSnapshot {
    pub category: Category,
    pub source_unit: String,
    pub target_unit: String,
    pub input_value: f64,
}

/// Converted value plus its display rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionResult {
    pub value: f64,
    pub unit: String,
    pub formatted_text: String,
}
