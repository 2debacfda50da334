//! Bijective encoders between domain values and integers or JSON trees.
//!
//! ## Overview
//!
//! - **Leaves**: `BooleanEncoder`, `BoundedNumber`
//! - **Products**: `Product` pairs two number encoders by mixed radix;
//!   `tuple3` flattens a right-nested triple
//! - **Sums**: `Disjunction` over `Either`, branch in the low bit
//! - **Adapters**: `Mapped` carries a game's own move type onto a composite;
//!   `AsJson` and `SerdeJson` produce `serde_json::Value` trees
//!
//! Products and disjunctions of number encoders are number encoders, so a
//! move of any shape travels as one `u64`.
//!
//! ## Usage
//!
//! ```rust
//! use board_engine::encoding::{BoundedNumber, Disjunction, Either, Encoder, NumberEncoder};
//!
//! // Drop into or pop from one of 7 columns.
//! let encoder = Disjunction::new(BoundedNumber::range(7), BoundedNumber::range(7));
//!
//! let pop_three = Either::Right(3);
//! let encoded = encoder.encode(&pop_three);
//! assert_eq!(encoded, 7);
//! assert_eq!(encoder.decode(&encoded).unwrap(), pop_three);
//! assert_eq!(encoder.max_value(), 13);
//! ```

pub mod disjunction;
pub mod encoder;
pub mod json;
pub mod mapped;
pub mod primitive;
pub mod product;

pub use disjunction::Disjunction;
pub use encoder::{Either, Encoder, NumberEncoder};
pub use json::{AsJson, SerdeJson};
pub use mapped::Mapped;
pub use primitive::{BooleanEncoder, BoundedNumber};
pub use product::{tuple3, Product, Tuple3};
