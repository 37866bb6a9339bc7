use proptest::prelude::*;
use shiftck_semantics::{ShiftOp, Shift, Value, Width, masked_amount, shl, shr, ushr};

#[test]
fn masks() {
    assert_eq!(Width::W32.mask(), 0x1f);
    assert_eq!(Width::W64.mask(), 0x3f);
    assert_eq!(<i32 as Shift>::WIDTH, Width::W32);
    assert_eq!(<i64 as Shift>::WIDTH, Width::W64);
}

#[test]
fn masking_uses_the_bit_pattern() {
    assert_eq!(masked_amount(-1i32), 31);
    assert_eq!(masked_amount(-1i64), 63);
    assert_eq!(masked_amount(-3i32), 29);
    assert_eq!(masked_amount(-3i64), 61);
    assert_eq!(masked_amount(101i32), 5);
    assert_eq!(masked_amount(101i64), 37);
    assert_eq!(masked_amount(i32::MIN), 0);
    assert_eq!(masked_amount(i64::MAX), 63);
    // widths are masked independently
    assert_eq!(masked_amount(32i32), 0);
    assert_eq!(masked_amount(32i64), 32);
}

#[test]
fn int_scenarios() {
    assert_eq!(shl(-12i32, 2), -48);
    assert_eq!(shl(1i32, 31), -2147483648);
    assert_eq!(shl(7i32, 32), 7);
    assert_eq!(shr(-1i32, 30), -1);
    assert_eq!(ushr(-1i32, 30), 3);
    assert_eq!(ushr(i32::MIN, 31), 1);
}

#[test]
fn long_scenarios() {
    assert_eq!(shl(1i64, 63), i64::MIN);
    assert_eq!(shr(i64::MIN, 63), -1);
    assert_eq!(ushr(i64::MIN, 63), 1);
    assert_eq!(shl(7i64, 64), 7);
    assert_eq!(shl(7i64, 32), 30064771072);
}

#[test]
fn eval_values() {
    assert_eq!(ShiftOp::Shl.eval(Value::I32(1), Value::I32(-1)), Ok(Value::I32(i32::MIN)));
    assert_eq!(ShiftOp::UShr.eval(Value::I64(-1), Value::I64(60)), Ok(Value::I64(15)));
    assert_eq!(ShiftOp::Shr.eval(Value::I64(-16), Value::I64(2)), Ok(Value::I64(-4)));
}

#[test]
fn eval_rejects_mixed_widths() {
    let err = ShiftOp::Shr.eval(Value::I32(1), Value::I64(1)).unwrap_err();
    assert_eq!(err.operand, Width::W32);
    assert_eq!(err.amount, Width::W64);
    assert_eq!(
        err.to_string(),
        "cannot apply `>>` to a 32-bit operand with a 64-bit shift amount"
    );
}

#[test]
fn width_from_str() {
    assert_eq!("32".parse::<Width>(), Ok(Width::W32));
    assert_eq!("64".parse::<Width>(), Ok(Width::W64));
    assert!("16".parse::<Width>().is_err());
}

fn top_bit32(v: i32) -> bool {
    v < 0
}

fn top_bit64(v: i64) -> bool {
    v < 0
}

proptest! {
    #[test]
    fn amount_masking_is_idempotent(a in any::<i32>(), b in any::<i32>(), c in any::<i64>(), d in any::<i64>()) {
        prop_assert_eq!(shl(a, b), shl(a, b & 0x1f));
        prop_assert_eq!(shr(a, b), shr(a, b & 0x1f));
        prop_assert_eq!(ushr(a, b), ushr(a, b & 0x1f));
        prop_assert_eq!(shl(c, d), shl(c, d & 0x3f));
        prop_assert_eq!(shr(c, d), shr(c, d & 0x3f));
        prop_assert_eq!(ushr(c, d), ushr(c, d & 0x3f));
    }

    #[test]
    fn masked_to_zero_is_identity(a in any::<i32>(), k in any::<i32>(), c in any::<i64>(), j in any::<i64>()) {
        let b = k.wrapping_shl(5);
        let d = j.wrapping_shl(6);
        for op in ShiftOp::ALL {
            prop_assert_eq!(op.apply(a, b), a);
            prop_assert_eq!(op.apply(c, d), c);
        }
    }

    #[test]
    fn sign_propagates(a in i32::MIN..0, k in 0i32..32, c in i64::MIN..0, j in 0i64..64) {
        prop_assert!(top_bit32(shr(a, k)));
        prop_assert!(top_bit64(shr(c, j)));
        if k > 0 {
            prop_assert!(!top_bit32(ushr(a, k)));
        }
        if j > 0 {
            prop_assert!(!top_bit64(ushr(c, j)));
        }
    }

    #[test]
    fn negative_one_is_the_widest_shift(a in any::<i32>(), c in any::<i64>()) {
        prop_assert_eq!(shr(a, -1), shr(a, 31));
        prop_assert_eq!(shr(c, -1), shr(c, 63));
        prop_assert_eq!(ushr(a, -1), ushr(a, 31));
        prop_assert_eq!(shl(c, -1), shl(c, 63));
    }

    #[test]
    fn ushr_matches_unsigned_shift(a in any::<i32>(), k in 0i32..32, c in any::<i64>(), j in 0i64..64) {
        prop_assert_eq!(ushr(a, k), ((a as u32) >> k) as i32);
        prop_assert_eq!(ushr(c, j), ((c as u64) >> j) as i64);
    }
}

#[test]
fn sign_bit_overflow() {
    assert_eq!(shl(1i32, 31), i32::MIN);
    assert_eq!(shl(1i64, 63), i64::MIN);
}
