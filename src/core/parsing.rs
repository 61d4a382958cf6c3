//! Lax extraction of a measurement from free text
//!
//! Accepts the shapes a selection or text field actually produces:
//! "100C", "3.5 km", "12 feet", "ml 250", comma decimals ("2,5 m"). The
//! extracted unit is normalized to its canonical registry symbol.

use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::shared::error::{AppError, AppResult};

const ERR_CANNOT_PARSE: &str = "Could not parse a measurement from text";

// Compiled once; the patterns are constant so expect() cannot fire at runtime.
// No ^/$ anchors: the measurement may sit anywhere in the string.
static RE_NUMBER_THEN_UNIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([+-]?\d+(?:\.\d+)?)\s*([a-zA-Z°']+)").expect("Failed to compile number-then-unit pattern")
});

static RE_UNIT_THEN_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([a-zA-Z°']+)\s*([+-]?\d+(?:\.\d+)?)").expect("Failed to compile unit-then-number pattern")
});

static RE_BARE_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([+-]?\d+(?:\.\d+)?)").expect("Failed to compile bare number pattern")
});

/// Map spellings and abbreviations to a canonical registry symbol
fn normalize_unit(unit: &str) -> Option<&'static str> {
    let unit_lower = unit.to_lowercase();
    match unit_lower.as_str() {
        // Temperature
        "c" | "celsius" | "°c" => Some("C"),
        "f" | "fahrenheit" | "°f" => Some("F"),
        "k" | "kelvin" => Some("K"),
        // Length
        "m" | "meter" | "meters" | "metre" | "metres" => Some("m"),
        "km" | "kilometer" | "kilometers" | "kilometre" | "kilometres" => Some("km"),
        "ft" | "foot" | "feet" | "'" => Some("ft"),
        "yd" | "yard" | "yards" => Some("yd"),
        "mi" | "mile" | "miles" => Some("mi"),
        // Duration
        "s" | "sec" | "secs" | "second" | "seconds" => Some("s"),
        "min" | "mins" | "minute" | "minutes" => Some("min"),
        "h" | "hr" | "hrs" | "hour" | "hours" => Some("h"),
        // Volume
        "ml" | "milliliter" | "milliliters" | "millilitre" | "millilitres" => Some("ml"),
        "l" | "liter" | "liters" | "litre" | "litres" => Some("L"),
        "cup" | "cups" => Some("cup"),
        "pint" | "pints" | "pt" => Some("pint"),
        "gal" | "gallon" | "gallons" => Some("gal"),
        _ => None,
    }
}

// Longest alias first so "kilometers" wins over the "m" inside it.
const ALIAS_WORDS: &[(&str, &str)] = &[
    ("kilometers", "km"), ("kilometer", "km"), ("kilometres", "km"), ("kilometre", "km"),
    ("milliliters", "ml"), ("milliliter", "ml"), ("millilitres", "ml"), ("millilitre", "ml"),
    ("fahrenheit", "F"), ("celsius", "C"), ("kelvin", "K"),
    ("meters", "m"), ("meter", "m"), ("metres", "m"), ("metre", "m"),
    ("feet", "ft"), ("foot", "ft"),
    ("yards", "yd"), ("yard", "yd"),
    ("miles", "mi"), ("mile", "mi"),
    ("seconds", "s"), ("second", "s"),
    ("minutes", "min"), ("minute", "min"),
    ("hours", "h"), ("hour", "h"),
    ("liters", "L"), ("liter", "L"), ("litres", "L"), ("litre", "L"),
    ("gallons", "gal"), ("gallon", "gal"),
    ("pints", "pint"), ("pint", "pint"),
    ("cups", "cup"), ("cup", "cup"),
];

/// Parse an amount and canonical unit symbol from free text
pub fn parse_measurement_from_text(text: &str) -> AppResult<(f64, &'static str)> {
    let text = text.trim();
    if text.is_empty() {
        return Err(AppError::Validation("Empty text".to_string()));
    }

    // Normalize comma decimal separators to dots
    let normalized_text = text.replace(',', ".");

    // Pattern 1: number followed by unit ("12km", "12 km", "12 kilometers")
    if let Some(caps) = RE_NUMBER_THEN_UNIT.captures(&normalized_text) {
        if let (Ok(amount), Some(unit_str)) = (caps[1].parse::<f64>(), caps.get(2)) {
            if let Some(canonical) = normalize_unit(unit_str.as_str()) {
                debug!("[parse_measurement] Extracted {} {} from '{}'", amount, canonical, text);
                return Ok((amount, canonical));
            }
        }
    }

    // Pattern 2: unit followed by number ("ml 250", "km12")
    if let Some(caps) = RE_UNIT_THEN_NUMBER.captures(&normalized_text) {
        if let (Some(unit_str), Ok(amount)) = (caps.get(1), caps[2].parse::<f64>()) {
            if let Some(canonical) = normalize_unit(unit_str.as_str()) {
                debug!("[parse_measurement] Extracted {} {} from '{}'", amount, canonical, text);
                return Ok((amount, canonical));
            }
        }
    }

    // Pattern 3: any number plus a known unit word somewhere in the text
    if let Some(caps) = RE_BARE_NUMBER.captures(&normalized_text) {
        if let Ok(amount) = caps[1].parse::<f64>() {
            let text_lower = normalized_text.to_lowercase();
            for &(alias, canonical) in ALIAS_WORDS {
                if text_lower.contains(alias) {
                    debug!("[parse_measurement] Extracted {} {} from '{}'", amount, canonical, text);
                    return Ok((amount, canonical));
                }
            }
        }
    }

    warn!("[parse_measurement] Failed to parse: '{}'", text);
    Err(AppError::Validation(format!("{}: {}", ERR_CANNOT_PARSE, text)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_then_unit() {
        assert_eq!(parse_measurement_from_text("100C").unwrap(), (100.0, "C"));
        assert_eq!(parse_measurement_from_text("3.5 km").unwrap(), (3.5, "km"));
        assert_eq!(parse_measurement_from_text("12 feet").unwrap(), (12.0, "ft"));
    }

    #[test]
    fn test_unit_then_number() {
        assert_eq!(parse_measurement_from_text("ml 250").unwrap(), (250.0, "ml"));
        assert_eq!(parse_measurement_from_text("km12").unwrap(), (12.0, "km"));
    }

    #[test]
    fn test_alias_word_scan() {
        assert_eq!(
            parse_measurement_from_text("about 2 big gallons").unwrap(),
            (2.0, "gal")
        );
    }

    #[test]
    fn test_comma_decimal_separator() {
        assert_eq!(parse_measurement_from_text("2,5 m").unwrap(), (2.5, "m"));
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(parse_measurement_from_text("-40 F").unwrap(), (-40.0, "F"));
    }

    #[test]
    fn test_case_insensitive_spellings() {
        assert_eq!(parse_measurement_from_text("5 Litres").unwrap(), (5.0, "L"));
        assert_eq!(parse_measurement_from_text("90 MIN").unwrap(), (90.0, "min"));
    }

    #[test]
    fn test_unparseable_text_is_rejected() {
        assert!(parse_measurement_from_text("").is_err());
        assert!(parse_measurement_from_text("hello world").is_err());
        assert!(parse_measurement_from_text("5 parsecs").is_err());
    }
}
