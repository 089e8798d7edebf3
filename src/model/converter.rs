//! Extension seam for converting values between entity and model shapes.
//!
//! The defaults are the complete parent behavior: identity conversion for
//! scalar values and a fixed timestamp format. An application that needs
//! custom conversion implements [`ValueConverter`] and overrides only the
//! methods it cares about; [`DefaultConverter`] overrides nothing.

use chrono::{DateTime, Utc};
use serde_json::Value;

/// Timestamp format used by both sides of the conversion unless overridden.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Conversion seam between storage entities and outbound models.
///
/// All methods are defaulted; the trait exists so applications can hook the
/// conversion points without the service knowing about concrete converters.
pub trait ValueConverter: Send + Sync {
    /// Converts an entity-side value into its model representation.
    ///
    /// Default: identity for null, boolean, number, and string values.
    fn entity_to_model(&self, value: Value) -> Value {
        value
    }

    /// Converts a model-side value into its entity representation.
    ///
    /// Default: identity for null, boolean, number, and string values.
    fn model_to_entity(&self, value: Value) -> Value {
        value
    }

    /// Format string applied when rendering entity-side timestamps.
    fn entity_date_format(&self) -> &str {
        DEFAULT_DATE_FORMAT
    }

    /// Format string applied when rendering model-side timestamps.
    fn model_date_format(&self) -> &str {
        DEFAULT_DATE_FORMAT
    }

    /// Whether a value is a scalar this converter handles.
    fn is_entity_value(&self, value: &Value) -> bool {
        value.is_null() || value.is_boolean() || value.is_number() || value.is_string()
    }

    /// Renders a timestamp with [`Self::entity_date_format`].
    fn format_entity_date(&self, at: DateTime<Utc>) -> String {
        at.format(self.entity_date_format()).to_string()
    }

    /// Renders a timestamp with [`Self::model_date_format`].
    fn format_model_date(&self, at: DateTime<Utc>) -> String {
        at.format(self.model_date_format()).to_string()
    }
}

/// Converter taking every default. Semantically identical to not converting.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultConverter;

impl ValueConverter for DefaultConverter {}
