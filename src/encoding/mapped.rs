//! Adapter mapping a domain type onto another encoder's domain.

use std::marker::PhantomData;

use crate::core::DecodingError;

use super::encoder::{Encoder, NumberEncoder};

/// Encodes `T` by converting it to `I` and encoding that.
///
/// `into` and `from` must be mutually inverse on the domain. `from` may
/// reject decoded values that do not correspond to any `T`.
///
/// ```
/// use board_engine::encoding::{BoundedNumber, Encoder, Mapped, NumberEncoder, Product};
///
/// #[derive(Debug, PartialEq)]
/// struct Cell { x: u8, y: u8 }
///
/// let encoder = Mapped::new(
///     Product::new(BoundedNumber::range(5), BoundedNumber::range(5)),
///     |c: &Cell| (u64::from(c.x), u64::from(c.y)),
///     |(x, y): (u64, u64)| Ok(Cell { x: x as u8, y: y as u8 }),
/// );
///
/// assert_eq!(encoder.encode(&Cell { x: 2, y: 3 }), 13);
/// assert_eq!(encoder.decode(&13).unwrap(), Cell { x: 2, y: 3 });
/// assert_eq!(encoder.max_value(), 24);
/// ```
pub struct Mapped<E, I, T, F, G> {
    inner: E,
    into: F,
    from: G,
    _marker: PhantomData<fn(I) -> T>,
}

impl<E, I, T, F, G> Mapped<E, I, T, F, G>
where
    E: Encoder<I>,
    F: Fn(&T) -> I,
    G: Fn(I) -> Result<T, DecodingError>,
{
    /// Wrap `inner` with a conversion pair.
    pub fn new(inner: E, into: F, from: G) -> Self {
        Self {
            inner,
            into,
            from,
            _marker: PhantomData,
        }
    }
}

impl<E, I, T, F, G> Encoder<T> for Mapped<E, I, T, F, G>
where
    E: Encoder<I>,
    F: Fn(&T) -> I,
    G: Fn(I) -> Result<T, DecodingError>,
{
    type Encoded = E::Encoded;

    fn encode(&self, value: &T) -> Self::Encoded {
        self.inner.encode(&(self.into)(value))
    }

    fn decode(&self, encoded: &Self::Encoded) -> Result<T, DecodingError> {
        (self.from)(self.inner.decode(encoded)?)
    }
}

impl<E, I, T, F, G> NumberEncoder<T> for Mapped<E, I, T, F, G>
where
    E: NumberEncoder<I>,
    F: Fn(&T) -> I,
    G: Fn(I) -> Result<T, DecodingError>,
{
    fn max_value(&self) -> u64 {
        self.inner.max_value()
    }
}

impl<E: Clone, I, T, F: Clone, G: Clone> Clone for Mapped<E, I, T, F, G> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            into: self.into.clone(),
            from: self.from.clone(),
            _marker: PhantomData,
        }
    }
}
