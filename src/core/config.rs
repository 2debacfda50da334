//! Rules configuration.
//!
//! Each game declares its parameters once via a `ConfigDescription`: named
//! integer fields with an inclusive range and a default. A configuration UI
//! reads the description; the engine validates incoming JSON against it
//! before deserializing into the game's typed config.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::ConfigError;

/// Inclusive range accepted by a numeric config field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumericRange {
    pub min: i64,
    pub max: i64,
}

impl NumericRange {
    /// Create a new inclusive range.
    ///
    /// # Panics
    /// Panics if `min > max`.
    #[must_use]
    pub const fn new(min: i64, max: i64) -> Self {
        assert!(min <= max, "Range minimum must not exceed maximum");
        Self { min, max }
    }

    /// Check that `value` lies within the range.
    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Description of one configurable field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescription {
    /// Key in the serialized config.
    pub name: String,

    /// Human-readable label (for display).
    pub label: String,

    /// Accepted values.
    pub range: NumericRange,

    /// Value used when the caller supplies none.
    pub default: i64,
}

impl FieldDescription {
    /// Create a new field description.
    pub fn new(name: impl Into<String>, range: NumericRange, default: i64) -> Self {
        let name = name.into();
        Self {
            label: name.clone(),
            name,
            range,
            default,
        }
    }

    /// Set the display label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

/// Declarative description of a game's rules parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigDescription {
    pub fields: Vec<FieldDescription>,
}

impl ConfigDescription {
    /// Create an empty description.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field.
    #[must_use]
    pub fn with_field(mut self, field: FieldDescription) -> Self {
        self.fields.push(field);
        self
    }

    /// Get a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDescription> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// JSON object holding every field's default.
    #[must_use]
    pub fn defaults(&self) -> Value {
        let map: Map<String, Value> = self
            .fields
            .iter()
            .map(|f| (f.name.clone(), Value::from(f.default)))
            .collect();
        Value::Object(map)
    }

    /// Check every described field is present, integral, and in range.
    ///
    /// Fields the description does not mention are left to the
    /// deserializer.
    pub fn validate(&self, value: &Value) -> Result<(), ConfigError> {
        let object = value.as_object().ok_or(ConfigError::NotAnObject)?;

        for field in &self.fields {
            let raw = object
                .get(&field.name)
                .ok_or_else(|| ConfigError::MissingField(field.name.clone()))?;
            let number = raw.as_i64().ok_or_else(|| ConfigError::NotAnInteger {
                field: field.name.clone(),
            })?;
            if !field.range.contains(number) {
                return Err(ConfigError::OutOfRange {
                    field: field.name.clone(),
                    value: number,
                    min: field.range.min,
                    max: field.range.max,
                });
            }
        }

        Ok(())
    }

    /// Validate and deserialize into a typed config.
    pub fn parse<C: DeserializeOwned>(&self, value: &Value) -> Result<C, ConfigError> {
        self.validate(value)?;
        Ok(serde_json::from_value(value.clone())?)
    }
}

/// Typed, validated rules parameters for one game.
pub trait RulesConfig: Clone + std::fmt::Debug + Serialize + DeserializeOwned {
    /// The declarative description of this config's fields.
    fn description() -> ConfigDescription;

    /// Check this value against its own description.
    fn validated(&self) -> Result<(), ConfigError> {
        let value = serde_json::to_value(self)?;
        Self::description().validate(&value)
    }

    /// Parse a JSON config, validating it first.
    fn from_json(value: &Value) -> Result<Self, ConfigError> {
        Self::description().parse(value)
    }
}

/// Config for games without parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoConfig {}

impl RulesConfig for NoConfig {
    fn description() -> ConfigDescription {
        ConfigDescription::new()
    }
}
