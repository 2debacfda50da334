//! Sum (disjunction) encoders.
//!
//! `Left(l)` encodes as `2 * encode_l(l)` and `Right(r)` as
//! `2 * encode_r(r) + 1`, so the low bit selects the branch.

use crate::core::DecodingError;

use super::encoder::{Either, Encoder, NumberEncoder};

/// Encodes `Either<L, R>` from two number encoders.
#[derive(Clone, Debug)]
pub struct Disjunction<A, B> {
    left: A,
    right: B,
    max: u64,
}

impl<A, B> Disjunction<A, B> {
    /// Combine two encoders, failing if the union overflows `u64`.
    pub fn try_new<TL, TR>(left: A, right: B) -> Result<Self, DecodingError>
    where
        A: NumberEncoder<TL>,
        B: NumberEncoder<TR>,
    {
        let widest = left.max_value().max(right.max_value());
        let max = widest
            .checked_mul(2)
            .and_then(|n| n.checked_add(1))
            .ok_or_else(|| DecodingError::Malformed("union encoding overflows u64".into()))?;

        Ok(Self { left, right, max })
    }

    /// Combine two encoders.
    ///
    /// # Panics
    /// Panics if `2 * max(max_left, max_right) + 1` overflows `u64`.
    pub fn new<TL, TR>(left: A, right: B) -> Self
    where
        A: NumberEncoder<TL>,
        B: NumberEncoder<TR>,
    {
        match Self::try_new(left, right) {
            Ok(disjunction) => disjunction,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<TL, TR, A, B> Encoder<Either<TL, TR>> for Disjunction<A, B>
where
    A: NumberEncoder<TL>,
    B: NumberEncoder<TR>,
{
    type Encoded = u64;

    fn encode(&self, value: &Either<TL, TR>) -> u64 {
        match value {
            Either::Left(l) => self.left.encode(l) * 2,
            Either::Right(r) => self.right.encode(r) * 2 + 1,
        }
    }

    fn decode(&self, encoded: &u64) -> Result<Either<TL, TR>, DecodingError> {
        let n = self.check_range(*encoded)?;
        let payload = n / 2;
        if n % 2 == 0 {
            Ok(Either::Left(self.left.decode(&payload)?))
        } else {
            Ok(Either::Right(self.right.decode(&payload)?))
        }
    }
}

impl<TL, TR, A, B> NumberEncoder<Either<TL, TR>> for Disjunction<A, B>
where
    A: NumberEncoder<TL>,
    B: NumberEncoder<TR>,
{
    fn max_value(&self) -> u64 {
        self.max
    }
}
