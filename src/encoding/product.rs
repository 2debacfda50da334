//! Tuple (product) encoders by mixed-radix composition.
//!
//! A pair `(a, b)` encodes as `encode_a(a) * shift_b + encode_b(b)`. Nesting
//! to the right, `(a, (b, c))`, gives the same integer as folding
//! `n = n * shift_i + encode_i(field_i)` over the fields in order.

use crate::core::DecodingError;

use super::encoder::{Encoder, NumberEncoder};
use super::mapped::Mapped;

/// Encodes pairs from two number encoders.
#[derive(Clone, Debug)]
pub struct Product<A, B> {
    first: A,
    second: B,
    second_shift: u64,
    max: u64,
}

impl<A, B> Product<A, B> {
    /// Combine two encoders, failing if the product overflows `u64`.
    pub fn try_new<TA, TB>(first: A, second: B) -> Result<Self, DecodingError>
    where
        A: NumberEncoder<TA>,
        B: NumberEncoder<TB>,
    {
        let overflow = || DecodingError::Malformed("tuple encoding overflows u64".into());
        let first_shift = first.max_value().checked_add(1).ok_or_else(overflow)?;
        let second_shift = second.max_value().checked_add(1).ok_or_else(overflow)?;
        let max = first_shift
            .checked_mul(second_shift)
            .ok_or_else(overflow)?
            - 1;

        Ok(Self {
            first,
            second,
            second_shift,
            max,
        })
    }

    /// Combine two encoders.
    ///
    /// # Panics
    /// Panics if the product of their shifts overflows `u64`.
    pub fn new<TA, TB>(first: A, second: B) -> Self
    where
        A: NumberEncoder<TA>,
        B: NumberEncoder<TB>,
    {
        match Self::try_new(first, second) {
            Ok(product) => product,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<TA, TB, A, B> Encoder<(TA, TB)> for Product<A, B>
where
    A: NumberEncoder<TA>,
    B: NumberEncoder<TB>,
{
    type Encoded = u64;

    fn encode(&self, (a, b): &(TA, TB)) -> u64 {
        self.first.encode(a) * self.second_shift + self.second.encode(b)
    }

    fn decode(&self, encoded: &u64) -> Result<(TA, TB), DecodingError> {
        let n = self.check_range(*encoded)?;
        let b = self.second.decode(&(n % self.second_shift))?;
        let a = self.first.decode(&(n / self.second_shift))?;
        Ok((a, b))
    }
}

impl<TA, TB, A, B> NumberEncoder<(TA, TB)> for Product<A, B>
where
    A: NumberEncoder<TA>,
    B: NumberEncoder<TB>,
{
    fn max_value(&self) -> u64 {
        self.max
    }
}

type Triple<TA, TB, TC> = (TA, (TB, TC));

/// Flat three-field tuple encoder.
pub type Tuple3<A, B, C, TA, TB, TC> = Mapped<
    Product<A, Product<B, C>>,
    Triple<TA, TB, TC>,
    (TA, TB, TC),
    fn(&(TA, TB, TC)) -> Triple<TA, TB, TC>,
    fn(Triple<TA, TB, TC>) -> Result<(TA, TB, TC), DecodingError>,
>;

/// Encode `(a, b, c)` with the first field most significant.
pub fn tuple3<TA, TB, TC, A, B, C>(a: A, b: B, c: C) -> Tuple3<A, B, C, TA, TB, TC>
where
    TA: Clone,
    TB: Clone,
    TC: Clone,
    A: NumberEncoder<TA>,
    B: NumberEncoder<TB>,
    C: NumberEncoder<TC>,
{
    let into: fn(&(TA, TB, TC)) -> Triple<TA, TB, TC> =
        |(a, b, c)| (a.clone(), (b.clone(), c.clone()));
    let from: fn(Triple<TA, TB, TC>) -> Result<(TA, TB, TC), DecodingError> =
        |(a, (b, c))| Ok((a, b, c));
    Mapped::new(Product::new(a, Product::new(b, c)), into, from)
}
