use bigint::{BigInt, BigIntError};

fn big(s: &str) -> BigInt {
    BigInt::from_decimal_str(s).unwrap()
}

#[test]
fn test_decimal_roundtrip_twenty_digits() {
    let b = big("12345678901234567890");
    assert_eq!(b.num_blocks(), 2);
    assert_eq!(b.to_decimal_string().unwrap(), "12345678901234567890");
}

#[test]
fn test_square_of_nine_nines() {
    let a = big("999999999");
    let b = big("999999999");
    let prod = a.mul(&b).unwrap();
    assert_eq!(prod.to_decimal_string().unwrap(), "999999998000000001");
}

#[test]
fn test_divmod_hundred_by_seven() {
    let mut n = big("100");
    let q = n.divmod(&big("7")).unwrap();
    assert_eq!(q.to_decimal_string().unwrap(), "14");
    assert_eq!(n.to_decimal_string().unwrap(), "2");
}

#[test]
fn test_divmod_by_zero_signals_failure() {
    let mut x = big("-31415926535897932384626433832795");
    let before = x.clone();
    assert_eq!(x.divmod(&BigInt::zero()), Err(BigIntError::DivisionByZero));
    assert_eq!(x, before);
    assert_eq!(x.blocks(), before.blocks());
    assert_eq!(
        x.to_decimal_string().unwrap(),
        "-31415926535897932384626433832795"
    );
}

#[test]
fn test_shl1_top_bit_grows_block() {
    let mut b = BigInt::from_u32(1 << 31);
    assert_eq!(b.num_blocks(), 1);
    b.shl1().unwrap();
    assert_eq!(b.blocks(), &[0, 1]);
}

#[test]
fn test_zero_to_string() {
    assert_eq!(BigInt::zero().to_decimal_string().unwrap(), "0");
    assert_eq!(big("0").to_string(), "0");
}

#[test]
fn test_factorial_30() {
    let mut acc = BigInt::from_u32(1);
    for i in 1..=30u32 {
        acc.mul_imm(i).unwrap();
    }
    assert_eq!(acc.to_string(), "265252859812191058636308480000000");

    // divide back down
    for i in (1..=30u32).rev() {
        let mut rem = acc.clone();
        acc = rem.divmod(&BigInt::from_u32(i)).unwrap();
        assert!(rem.is_zero());
    }
    assert_eq!(acc, BigInt::from_u32(1));
}

#[test]
fn test_powers_of_two_via_shl() {
    let mut b = BigInt::from_u32(1);
    b.shl(100).unwrap();
    assert_eq!(b.to_string(), "1267650600228229401496703205376");

    let mut c = BigInt::from_u32(1);
    for _ in 0..100 {
        c.shl1().unwrap();
    }
    assert_eq!(b, c);
}

#[test]
fn test_signed_chain() {
    // (-123456789012345678901234567890 + 987654321) * -2 - 1
    let a = big("-123456789012345678901234567890");
    let b = big("987654321");
    let c = a.add(&b).unwrap();
    assert_eq!(c.to_string(), "-123456789012345678900246913569");
    let d = c.mul(&BigInt::from_i32(-2)).unwrap();
    let e = d.sub(&BigInt::from_u32(1)).unwrap();
    assert_eq!(e.to_string(), "246913578024691357800493827137");
}

#[test]
fn test_modulo_and_div_large() {
    let a = big("340282366920938463463374607431768211457"); // 2^128 + 1
    let b = big("18446744073709551616"); // 2^64
    assert_eq!(a.div(&b).unwrap().to_string(), "18446744073709551616");
    assert_eq!(a.modulo(&b).unwrap().to_string(), "1");
}

#[test]
fn test_sorting_uses_signed_order() {
    let mut values: Vec<BigInt> = [
        "5",
        "-100000000000000000000",
        "0",
        "-3",
        "99999999999999999999",
    ]
    .iter()
    .map(|s| big(s))
    .collect();
    values.sort();
    let rendered: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    assert_eq!(
        rendered,
        ["-100000000000000000000", "-3", "0", "5", "99999999999999999999"]
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(BigIntError::DivisionByZero.to_string(), "BigInt division by zero");
    let err = BigInt::from_decimal_str("1x").unwrap_err();
    assert_eq!(err.to_string(), "invalid decimal digit 'x' at byte 1");
    assert_eq!(
        BigInt::empty().to_decimal_string().unwrap_err().to_string(),
        "BigInt is uninitialized"
    );
}
