//! Generic conversion over the unit registry
//!
//! Supports both multiplicative (base_factor) and affine (offset)
//! conversions, so temperature scales go through the same path as linear
//! units.

use log::debug;

use crate::core::units;
use crate::shared::error::{AppError, AppResult};

/// Convert a value between two units of the same category
pub fn convert_value(value: f64, from_unit: &str, to_unit: &str) -> AppResult<f64> {
    // Same unit, no conversion needed
    if from_unit == to_unit {
        return Ok(value);
    }

    let from_def = units::lookup(from_unit).ok_or_else(|| {
        AppError::ConversionUnsupported(format!("Unknown source unit: {}", from_unit))
    })?;
    let to_def = units::lookup(to_unit).ok_or_else(|| {
        AppError::ConversionUnsupported(format!("Unknown target unit: {}", to_unit))
    })?;

    if from_def.category != to_def.category {
        return Err(AppError::ConversionUnsupported(format!(
            "Cannot convert between {:?} and {:?} (incompatible categories)",
            from_def.category, to_def.category
        )));
    }

    // Step 1: Convert from source unit to base unit (offset applies for affine units)
    let base_value = (value + from_def.offset) * from_def.base_factor;

    // Step 2: Convert from base unit to target unit
    let result = (base_value / to_def.base_factor) - to_def.offset;

    debug!(
        "[convert_value] {} {} -> {} {} (base: {})",
        value, from_unit, result, to_unit, base_value
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::units::{catalog, Category};

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
    }

    #[test]
    fn test_celsius_to_fahrenheit_freezing_point() {
        assert_close(convert_value(0.0, "C", "F").unwrap(), 32.0);
    }

    #[test]
    fn test_celsius_to_fahrenheit_boiling_point() {
        assert_close(convert_value(100.0, "C", "F").unwrap(), 212.0);
    }

    #[test]
    fn test_celsius_to_kelvin() {
        assert_close(convert_value(0.0, "C", "K").unwrap(), 273.15);
    }

    #[test]
    fn test_fahrenheit_to_kelvin() {
        assert_close(convert_value(32.0, "F", "K").unwrap(), 273.15);
    }

    #[test]
    fn test_meters_to_feet() {
        let feet = convert_value(1.0, "m", "ft").unwrap();
        assert!((feet - 3.28084).abs() < 1e-4, "{}", feet);
    }

    #[test]
    fn test_kilometers_to_miles() {
        assert_close(convert_value(1.609344, "km", "mi").unwrap(), 1.0);
    }

    #[test]
    fn test_hours_to_seconds() {
        assert_close(convert_value(2.0, "h", "s").unwrap(), 7200.0);
    }

    #[test]
    fn test_minutes_to_hours() {
        assert_close(convert_value(90.0, "min", "h").unwrap(), 1.5);
    }

    #[test]
    fn test_gallons_to_liters() {
        assert_close(convert_value(1.0, "gal", "L").unwrap(), 3.78541);
    }

    #[test]
    fn test_milliliters_to_cups() {
        assert_close(convert_value(236.588, "ml", "cup").unwrap(), 1.0);
    }

    #[test]
    fn test_identity_is_exact() {
        assert_eq!(convert_value(12.345, "yd", "yd").unwrap(), 12.345);
        assert_eq!(convert_value(-40.0, "F", "F").unwrap(), -40.0);
    }

    #[test]
    fn test_round_trip_every_pair_in_every_category() {
        for category in Category::ALL {
            for from in catalog(category) {
                for to in catalog(category) {
                    let out = convert_value(7.25, from, to).unwrap();
                    let back = convert_value(out, to, from).unwrap();
                    assert!(
                        (back - 7.25).abs() < 1e-9,
                        "{} -> {} -> {} gave {}",
                        from, to, from, back
                    );
                }
            }
        }
    }

    #[test]
    fn test_negative_values_convert_without_domain_checks() {
        assert_close(convert_value(-40.0, "C", "F").unwrap(), -40.0);
        assert_close(convert_value(-2.0, "km", "m").unwrap(), -2000.0);
    }

    #[test]
    fn test_cross_category_pair_is_rejected() {
        let err = convert_value(1.0, "m", "s").unwrap_err();
        assert!(matches!(err, AppError::ConversionUnsupported(_)));
    }

    #[test]
    fn test_unknown_unit_is_rejected() {
        assert!(convert_value(1.0, "furlong", "m").is_err());
        assert!(convert_value(1.0, "m", "furlong").is_err());
    }
}
