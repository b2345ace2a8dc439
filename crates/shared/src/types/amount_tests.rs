use super::*;
use rstest::rstest;
use rust_decimal_macros::dec;

#[test]
fn test_amount_zero() {
    let amount = Amount::ZERO;
    assert!(amount.is_zero());
    assert_eq!(amount.minor_units(), 0);
    assert_eq!(amount.to_decimal(), Decimal::ZERO);
    assert_eq!(Amount::default(), Amount::ZERO);
}

#[test]
fn test_amount_parts() {
    let amount = Amount::from_minor_units(123_456);
    assert_eq!(amount.whole_units(), 1234);
    assert_eq!(amount.cents(), 56);
    assert_eq!(amount.to_decimal(), dec!(1234.56));
}

#[test]
fn test_push_digit_shifts_left() {
    let amount = Amount::ZERO.push_digit(1).push_digit(2).push_digit(3);
    assert_eq!(amount.minor_units(), 123);
    assert_eq!(amount.to_decimal(), dec!(1.23));
}

#[test]
fn test_push_digit_saturates() {
    assert_eq!(Amount::MAX.push_digit(9), Amount::MAX);
    assert_eq!(Amount::from_minor_units(u128::MAX), Amount::MAX);
}

#[test]
fn test_max_fits_decimal() {
    let value = Amount::MAX.to_decimal();
    assert_eq!(value.scale(), 2);
    assert_eq!(Amount::from_decimal(value), Amount::MAX);
}

#[rstest]
#[case(dec!(0), 0)]
#[case(dec!(-5.00), 0)]
#[case(dec!(0.01), 1)]
#[case(dec!(1234.56), 123_456)]
#[case(dec!(1.005), 101)]
#[case(dec!(1.004), 100)]
#[case(dec!(10), 1000)]
fn test_from_decimal(#[case] value: Decimal, #[case] expected: u128) {
    assert_eq!(Amount::from_decimal(value).minor_units(), expected);
}

#[test]
fn test_from_decimal_saturates() {
    assert_eq!(Amount::from_decimal(Decimal::MAX), Amount::MAX);
}

#[test]
fn test_try_from_decimal_rejects_negative() {
    let err = Amount::try_from(dec!(-0.01)).unwrap_err();
    assert!(matches!(err, MaskError::NegativeAmount(_)));
}

#[test]
fn test_try_from_decimal_rejects_sub_cent() {
    let err = Amount::try_from(dec!(0.001)).unwrap_err();
    assert!(matches!(err, MaskError::SubCentPrecision(_)));
}

#[test]
fn test_try_from_decimal_accepts_cents() {
    let amount = Amount::try_from(dec!(99.90)).unwrap();
    assert_eq!(amount.minor_units(), 9990);
}

#[test]
fn test_display_is_machine_form() {
    assert_eq!(Amount::from_minor_units(123_456).to_string(), "1234.56");
    assert_eq!(Amount::from_minor_units(5).to_string(), "0.05");
    assert_eq!(Amount::ZERO.to_string(), "0.00");
}

#[test]
fn test_serde_round_trip() {
    let amount = Amount::from_minor_units(123_456);
    let json = serde_json::to_string(&amount).unwrap();
    assert_eq!(json, "\"1234.56\"");

    let back: Amount = serde_json::from_str(&json).unwrap();
    assert_eq!(back, amount);
}

#[test]
fn test_serde_rejects_negative() {
    let result: Result<Amount, _> = serde_json::from_str("\"-1.00\"");
    assert!(result.is_err());
}
