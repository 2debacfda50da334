//! Leaf encoders.

use crate::core::DecodingError;

use super::encoder::{Encoder, NumberEncoder};

/// Encodes `false` as 0 and `true` as 1.
#[derive(Clone, Copy, Debug, Default)]
pub struct BooleanEncoder;

impl Encoder<bool> for BooleanEncoder {
    type Encoded = u64;

    fn encode(&self, value: &bool) -> u64 {
        u64::from(*value)
    }

    fn decode(&self, encoded: &u64) -> Result<bool, DecodingError> {
        Ok(self.check_range(*encoded)? == 1)
    }
}

impl NumberEncoder<bool> for BooleanEncoder {
    fn max_value(&self) -> u64 {
        1
    }
}

/// Identity encoder over `0..=max`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundedNumber {
    max: u64,
}

impl BoundedNumber {
    /// Numbers `0..=max`.
    #[must_use]
    pub const fn new(max: u64) -> Self {
        Self { max }
    }

    /// Numbers `0..len`.
    ///
    /// # Panics
    /// Panics if `len` is zero.
    #[must_use]
    pub const fn range(len: u64) -> Self {
        assert!(len > 0, "BoundedNumber range must not be empty");
        Self { max: len - 1 }
    }

    /// Largest accepted value.
    #[must_use]
    pub const fn max(&self) -> u64 {
        self.max
    }
}

impl Encoder<u64> for BoundedNumber {
    type Encoded = u64;

    fn encode(&self, value: &u64) -> u64 {
        debug_assert!(*value <= self.max, "{} outside 0..={}", value, self.max);
        *value
    }

    fn decode(&self, encoded: &u64) -> Result<u64, DecodingError> {
        self.check_range(*encoded)
    }
}

impl NumberEncoder<u64> for BoundedNumber {
    fn max_value(&self) -> u64 {
        self.max
    }
}
