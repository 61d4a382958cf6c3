//! Stateless request/response API
//!
//! The surface an embedding shell calls when it does not hold a
//! [`ConversionModel`](crate::core::model::ConversionModel): one-shot
//! conversion, free-text parsing, and unit listings for pickers.

use crate::core::units::Category;
use crate::core::{convert, format, parsing, units};
use crate::shared::error::AppResult;
use crate::shared::types::{
    ConvertUnitsRequest, ConvertUnitsResponse, GetUnitsResponse, ParseMeasurementResponse,
};

/// Convert an amount between two units
pub fn convert_units(request: ConvertUnitsRequest) -> AppResult<ConvertUnitsResponse> {
    let result = convert::convert_value(request.amount, &request.from_unit, &request.to_unit)?;

    Ok(ConvertUnitsResponse {
        result,
        formatted_result: format::format_number(result),
        from_unit: request.from_unit,
        to_unit: request.to_unit,
    })
}

/// Parse free text into an amount, canonical unit and category
pub fn parse_measurement(text: &str) -> AppResult<ParseMeasurementResponse> {
    let (amount, unit) = parsing::parse_measurement_from_text(text)?;
    let def = units::lookup(unit).ok_or_else(|| {
        crate::shared::error::AppError::ConversionUnsupported(format!("Unknown unit: {}", unit))
    })?;

    Ok(ParseMeasurementResponse {
        amount,
        unit: unit.to_string(),
        category: def.category.id().to_string(),
    })
}

/// All registered units, for a flat picker
pub fn get_all_units() -> GetUnitsResponse {
    GetUnitsResponse {
        units: units::all_units(),
    }
}

/// Units of one category, in picker order
pub fn get_units_for_category(category: Category) -> GetUnitsResponse {
    GetUnitsResponse {
        units: units::units_for(category),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_units_formats_result() {
        let response = convert_units(ConvertUnitsRequest {
            amount: 2.0,
            from_unit: "km".to_string(),
            to_unit: "m".to_string(),
        })
        .unwrap();
        assert_eq!(response.result, 2000.0);
        assert_eq!(response.formatted_result, "2,000");
        assert_eq!(response.to_unit, "m");
    }

    #[test]
    fn test_convert_units_rejects_cross_category() {
        let response = convert_units(ConvertUnitsRequest {
            amount: 1.0,
            from_unit: "C".to_string(),
            to_unit: "gal".to_string(),
        });
        assert!(response.is_err());
    }

    #[test]
    fn test_parse_measurement_reports_category() {
        let response = parse_measurement("250 ml").unwrap();
        assert_eq!(response.amount, 250.0);
        assert_eq!(response.unit, "ml");
        assert_eq!(response.category, "volume");
    }

    #[test]
    fn test_get_all_units_is_sorted_by_category_then_label() {
        let units = get_all_units().units;
        assert_eq!(units.len(), 16);
        let keys: Vec<(String, String)> = units
            .iter()
            .map(|u| (u.category.clone(), u.label.clone()))
            .collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn test_get_units_for_category_preserves_picker_order() {
        let units = get_units_for_category(Category::Duration).units;
        let ids: Vec<&str> = units.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["s", "min", "h"]);
    }
}
