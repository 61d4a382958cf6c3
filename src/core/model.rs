//! Conversion model
//!
//! Owns the current selection (category, source unit, target unit) and the
//! input value, and derives the converted result from them. The invariant
//! is that both units always belong to the catalog of the current
//! category: the unit setters validate, and a category switch rewrites the
//! whole selection in one state assignment so no mixed pair is observable.

use crate::core::units::Category;
use crate::core::{convert, format, parsing, units};
use crate::shared::error::{AppError, AppResult};
use crate::shared::types::{ConversionResult, ModelSnapshot};

/// Current selection and input value
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionState {
    pub category: Category,
    pub source_unit: &'static str,
    pub target_unit: &'static str,
    pub input_value: f64,
}

impl ConversionState {
    /// Initial state: temperature, first two catalog units, value 0
    fn initial() -> Self {
        Self::for_category(Category::Temperature, 0.0)
    }

    /// Selection for a category with the default unit pair: catalog
    /// entries 0 and 1, unconditionally
    fn for_category(category: Category, input_value: f64) -> Self {
        let catalog = units::catalog(category);
        ConversionState {
            category,
            source_unit: catalog[0],
            target_unit: catalog[1],
            input_value,
        }
    }
}

type Subscriber = Box<dyn Fn(&ModelSnapshot) + Send>;

/// Stateful model behind a converter UI
///
/// Mutations go through the setters below; each successful one notifies
/// subscribers with a fresh snapshot. There is no interior mutability and
/// no async surface, callers own the model exclusively.
pub struct ConversionModel {
    state: ConversionState,
    subscribers: Vec<Subscriber>,
}

impl Default for ConversionModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversionModel {
    pub fn new() -> Self {
        ConversionModel {
            state: ConversionState::initial(),
            subscribers: Vec::new(),
        }
    }

    pub fn state(&self) -> &ConversionState {
        &self.state
    }

    /// Switch category, resetting both units to the new catalog's first
    /// two entries
    ///
    /// Infallible: `Category` is a closed enum, so there is no invalid
    /// input to reject.
    pub fn set_category(&mut self, category: Category) {
        self.state = ConversionState::for_category(category, self.state.input_value);
        self.notify();
    }

    /// Select the unit the input value is expressed in
    pub fn set_source_unit(&mut self, unit: &str) -> AppResult<()> {
        self.state.source_unit = self.require_in_catalog(unit)?;
        self.notify();
        Ok(())
    }

    /// Select the unit to convert into. May equal the source unit, the
    /// conversion is then the identity.
    pub fn set_target_unit(&mut self, unit: &str) -> AppResult<()> {
        self.state.target_unit = self.require_in_catalog(unit)?;
        self.notify();
        Ok(())
    }

    /// Store the input value
    ///
    /// Any finite value is accepted, zero and negatives included; range
    /// checks (negative lengths and the like) are the caller's concern.
    pub fn set_value(&mut self, value: f64) -> AppResult<()> {
        if !value.is_finite() {
            return Err(AppError::Validation(format!(
                "Value must be finite, got {}",
                value
            )));
        }
        self.state.input_value = value;
        self.notify();
        Ok(())
    }

    /// Units selectable in the current category, in picker order
    pub fn available_units(&self) -> &'static [&'static str] {
        units::catalog(self.state.category)
    }

    /// Convert the input value from the source unit to the target unit
    pub fn result(&self) -> AppResult<ConversionResult> {
        let value = convert::convert_value(
            self.state.input_value,
            self.state.source_unit,
            self.state.target_unit,
        )?;
        Ok(ConversionResult {
            value,
            unit: self.state.target_unit.to_string(),
            formatted_text: format::format_measurement(value, self.state.target_unit),
        })
    }

    /// Populate the model from free text like "3.5 km" or "12 feet"
    ///
    /// Switches to the parsed unit's category (target resets to the
    /// catalog's second entry as usual), selects the parsed unit as
    /// source and stores the amount, all in one state write.
    pub fn load_measurement(&mut self, text: &str) -> AppResult<()> {
        let (amount, symbol) = parsing::parse_measurement_from_text(text)?;
        if !amount.is_finite() {
            return Err(AppError::Validation(format!(
                "Value must be finite, got {}",
                amount
            )));
        }
        let def = units::lookup(symbol).ok_or_else(|| {
            AppError::ConversionUnsupported(format!("Unknown unit: {}", symbol))
        })?;

        let mut next = ConversionState::for_category(def.category, amount);
        next.source_unit = def.symbol;
        self.state = next;
        self.notify();
        Ok(())
    }

    /// Immutable copy of the current state for one-way data flow
    pub fn snapshot(&self) -> ModelSnapshot {
        ModelSnapshot {
            category: self.state.category,
            source_unit: self.state.source_unit.to_string(),
            target_unit: self.state.target_unit.to_string(),
            input_value: self.state.input_value,
        }
    }

    /// Register a callback invoked with a fresh snapshot after every
    /// successful mutation
    pub fn subscribe(&mut self, callback: impl Fn(&ModelSnapshot) + Send + 'static) {
        self.subscribers.push(Box::new(callback));
    }

    fn notify(&self) {
        if self.subscribers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for subscriber in &self.subscribers {
            subscriber(&snapshot);
        }
    }

    fn require_in_catalog(&self, unit: &str) -> AppResult<&'static str> {
        units::catalog(self.state.category)
            .iter()
            .find(|candidate| **candidate == unit)
            .copied()
            .ok_or_else(|| {
                AppError::InvalidUnitForCategory(format!(
                    "Unit '{}' is not valid for {}",
                    unit,
                    self.state.category.label()
                ))
            })
    }
}
