//! Encoders onto JSON-like value trees.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::core::DecodingError;

use super::encoder::{Encoder, NumberEncoder};

/// Carries a number encoder's output as a JSON number.
#[derive(Clone, Copy, Debug, Default)]
pub struct AsJson<E>(pub E);

impl<T, E: NumberEncoder<T>> Encoder<T> for AsJson<E> {
    type Encoded = Value;

    fn encode(&self, value: &T) -> Value {
        Value::from(self.0.encode(value))
    }

    fn decode(&self, encoded: &Value) -> Result<T, DecodingError> {
        let n = encoded
            .as_u64()
            .ok_or_else(|| DecodingError::Malformed(format!("expected an encoded move, got {}", encoded)))?;
        self.0.decode(&n)
    }
}

/// Encodes any serde type as a `serde_json::Value` tree.
pub struct SerdeJson<T>(PhantomData<fn() -> T>);

impl<T> SerdeJson<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for SerdeJson<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for SerdeJson<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> Copy for SerdeJson<T> {}

impl<T> std::fmt::Debug for SerdeJson<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SerdeJson")
    }
}

impl<T: Serialize + DeserializeOwned> Encoder<T> for SerdeJson<T> {
    type Encoded = Value;

    fn encode(&self, value: &T) -> Value {
        // Only non-string map keys make serialization fail.
        serde_json::to_value(value).unwrap_or_else(|err| {
            log::error!("value is not representable as JSON: {}", err);
            Value::Null
        })
    }

    fn decode(&self, encoded: &Value) -> Result<T, DecodingError> {
        Ok(serde_json::from_value(encoded.clone())?)
    }
}
