//! Measurement conversion engine
//!
//! The logic core of a four-quantity unit converter: temperature, length,
//! duration and volume. A [`ConversionModel`] owns the current category,
//! unit pair and input value; a fixed unit registry defines the convertible
//! units; the conversion math handles both linear and affine (temperature)
//! scales. Rendering, input widgets and focus handling belong to whatever
//! shell embeds this crate.

pub mod api;
pub mod core;
pub mod shared;

pub use crate::core::model::ConversionModel;
pub use crate::core::units::Category;
pub use crate::shared::error::{AppError, AppResult};
pub use crate::shared::types::{ConversionResult, ModelSnapshot};
