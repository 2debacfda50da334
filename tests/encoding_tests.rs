//! Encoder integration tests: composition and decode/encode laws.

use board_engine::core::DecodingError;
use board_engine::encoding::{
    tuple3, AsJson, BooleanEncoder, BoundedNumber, Disjunction, Either, Encoder, NumberEncoder,
    Product, SerdeJson,
};
use board_engine::games::connect_four::{self, ConnectFourMove};
use board_engine::games::take_away::{self, Take};
use proptest::prelude::*;
use serde_json::json;

// =============================================================================
// Composition
// =============================================================================

#[test]
fn test_tuple_is_mixed_radix() {
    let pair = Product::new(BoundedNumber::range(5), BoundedNumber::range(5));
    assert_eq!(pair.encode(&(2, 3)), 13);

    // 1 * (5 * 2) + 3 * 2 + 1
    let triple = tuple3(BoundedNumber::range(3), BoundedNumber::range(5), BooleanEncoder);
    assert_eq!(triple.encode(&(1, 3, true)), 17);
    assert_eq!(triple.max_value(), 29);
    assert_eq!(triple.decode(&17).unwrap(), (1, 3, true));
}

#[test]
fn test_union_of_tuples() {
    let encoder = Disjunction::new(
        Product::new(BoundedNumber::range(2), BoundedNumber::range(3)),
        BooleanEncoder,
    );

    assert_eq!(encoder.max_value(), 11);
    assert_eq!(encoder.encode(&Either::Left((1, 2))), 10);
    assert_eq!(encoder.encode(&Either::Right(false)), 1);
    let decoded: Either<(u64, u64), bool> = encoder.decode(&10).unwrap();
    assert_eq!(decoded, Either::Left((1, 2)));

    // Odd values above the right branch's range decode to nothing.
    let decoded: Result<Either<(u64, u64), bool>, _> = encoder.decode(&5);
    assert!(matches!(
        decoded,
        Err(DecodingError::OutOfRange { value: 2, max: 1 })
    ));
    let decoded: Result<Either<(u64, u64), bool>, _> = encoder.decode(&12);
    assert!(matches!(
        decoded,
        Err(DecodingError::OutOfRange { value: 12, max: 11 })
    ));
}

#[test]
fn test_json_wrappers() {
    let encoder = AsJson(Product::new(BoundedNumber::range(5), BoundedNumber::range(5)));
    assert_eq!(encoder.encode(&(2, 3)), json!(13));
    let decoded: Result<(u64, u64), _> = encoder.decode(&json!("13"));
    assert!(matches!(
        decoded,
        Err(DecodingError::Malformed(_))
    ));

    let moves = SerdeJson::<ConnectFourMove>::new();
    let encoded = moves.encode(&ConnectFourMove::Pop { column: 2 });
    assert_eq!(moves.decode(&encoded).unwrap(), ConnectFourMove::Pop { column: 2 });
}

#[test]
fn test_game_move_encoders() {
    let encoder = connect_four::move_encoder();
    assert_eq!(encoder.encode(&ConnectFourMove::Drop { column: 0 }), 0);
    assert_eq!(encoder.encode(&ConnectFourMove::Pop { column: 0 }), 1);
    assert_eq!(encoder.encode(&ConnectFourMove::Drop { column: 9 }), 18);
    assert_eq!(encoder.max_value(), 19);

    let encoder = take_away::take_encoder();
    assert_eq!(encoder.encode(&Take(3)), 3);
    assert!(encoder.decode(&9).is_err());
}

// =============================================================================
// Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_product_round_trip(a in 0u64..7, b in 0u64..11) {
        let encoder = Product::new(BoundedNumber::range(7), BoundedNumber::range(11));
        let encoded = encoder.encode(&(a, b));
        prop_assert!(encoded <= encoder.max_value());
        prop_assert_eq!(encoder.decode(&encoded).unwrap(), (a, b));
    }

    #[test]
    fn prop_union_decode_is_inverse(value in 0u64..64) {
        let encoder = Disjunction::new(BoundedNumber::range(9), BoundedNumber::range(4));
        let decoded: Result<Either<u64, u64>, _> = encoder.decode(&value);
        match decoded {
            Ok(decoded) => prop_assert_eq!(encoder.encode(&decoded), value),
            Err(_) => prop_assert!(value > encoder.max_value() || (value % 2 == 1 && value / 2 >= 4)),
        }
    }

    #[test]
    fn prop_connect_four_moves_round_trip(column in 0u8..10, pop in any::<bool>()) {
        let encoder = connect_four::move_encoder();
        let mv = if pop {
            ConnectFourMove::Pop { column }
        } else {
            ConnectFourMove::Drop { column }
        };
        prop_assert_eq!(encoder.decode(&encoder.encode(&mv)).unwrap(), mv);
    }

    #[test]
    fn prop_out_of_range_never_panics(value in any::<u64>()) {
        let encoder = connect_four::move_encoder();
        if value > encoder.max_value() {
            prop_assert!(encoder.decode(&value).is_err());
        }
    }
}
