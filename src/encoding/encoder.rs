//! Encoder traits.

use crate::core::DecodingError;

/// Bijective mapping between domain values and an encoded form.
///
/// Law: `decode(&encode(x))` returns `x` for every `x` in the encoder's
/// domain. Decoding a value no `encode` call could have produced is an error,
/// never a panic.
pub trait Encoder<T> {
    /// Encoded representation.
    type Encoded;

    /// Encode a value from the domain.
    fn encode(&self, value: &T) -> Self::Encoded;

    /// Decode a previously encoded value.
    fn decode(&self, encoded: &Self::Encoded) -> Result<T, DecodingError>;
}

/// Encoder onto the integers `0..=max_value()`.
///
/// Number encoders compose: products and disjunctions of number encoders are
/// number encoders, so a whole move travels as a single integer.
pub trait NumberEncoder<T>: Encoder<T, Encoded = u64> {
    /// Largest value `encode` can produce (inclusive).
    fn max_value(&self) -> u64;

    /// Number of distinct encodings, `max_value() + 1`.
    ///
    /// # Panics
    /// Panics if `max_value()` is `u64::MAX`.
    fn shift(&self) -> u64 {
        self.max_value()
            .checked_add(1)
            .expect("encoder domain spans the full u64 range")
    }

    /// Reject values beyond `max_value()`.
    fn check_range(&self, encoded: u64) -> Result<u64, DecodingError> {
        let max = self.max_value();
        if encoded > max {
            Err(DecodingError::OutOfRange {
                value: encoded,
                max,
            })
        } else {
            Ok(encoded)
        }
    }
}

/// A value from one of two alternatives.
///
/// `Disjunction` encodes this; game move enums map onto (nested) `Either`s
/// with an exhaustive `match`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}
