//! The oracle: literal expected results for every shift the arithmetic unit must get right.
use shiftck_semantics::{
    ShiftOp::{self, Shl, Shr, UShr},
    Value, Width, WidthMismatch,
};

/// One assertion: `operand op amount` must evaluate to `expected`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Case {
    pub op: ShiftOp,
    pub operand: Value,
    pub amount: Value,
    /// Compared against the result after sign extension, so a 32-bit shift may be asserted
    /// against a 64-bit literal.
    pub expected: Value,
}

impl Case {
    pub fn eval(&self) -> Result<Value, WidthMismatch> {
        self.op.eval(self.operand, self.amount)
    }
}

/// A named run of cases sharing an operator and a width.
#[derive(Clone, Copy, Debug)]
pub struct Group {
    pub name: &'static str,
    pub width: Width,
    pub cases: &'static [Case],
}

const fn int(op: ShiftOp, a: i32, b: i32, expected: i32) -> Case {
    Case { op, operand: Value::I32(a), amount: Value::I32(b), expected: Value::I32(expected) }
}

const fn int_as_long(op: ShiftOp, a: i32, b: i32, expected: i64) -> Case {
    Case { op, operand: Value::I32(a), amount: Value::I32(b), expected: Value::I64(expected) }
}

const fn long(op: ShiftOp, a: i64, b: i64, expected: i64) -> Case {
    Case { op, operand: Value::I64(a), amount: Value::I64(b), expected: Value::I64(expected) }
}

pub const SHL_INT: &[Case] = &[
    int(Shl, -12, 2, -48),
    int(Shl, 32, 5, 1024),
    int(Shl, 7, 0, 7),
    int(Shl, 7, 1, 14),
    int(Shl, 0, 30, 0),
    int_as_long(Shl, 1, 30, 1073741824),
    // overflow into the sign bit
    int(Shl, 1, 31, i32::MIN),
    int(Shl, 1073741824, 1, i32::MIN),
    int(Shl, 268435456, 2, 1073741824),
    // amount & 0x1f
    int(Shl, 7, 32, 7),
    int(Shl, 7, 33, 14),
    int(Shl, 1, 101, 32),
    int(Shl, 1, -1, i32::MIN),
    int(Shl, 7, -31, 14),
    int(Shl, 7, -32, 7),
    int(Shl, 7, -3, -536870912),
    int(Shl, 7, i32::MAX, i32::MIN),
    int(Shl, 7, i32::MIN, 7),
];

pub const SHL_LONG: &[Case] = &[
    long(Shl, -12, 2, -48),
    long(Shl, 32, 5, 1024),
    long(Shl, 7, 0, 7),
    long(Shl, 7, 1, 14),
    long(Shl, 0, 30, 0),
    long(Shl, 1, 30, 1073741824),
    long(Shl, 1, 31, 2147483648),
    long(Shl, 1073741824, 1, 2147483648),
    // up to 6 amount bits
    long(Shl, 1, 32, 4294967296),
    long(Shl, 7, 33, 60129542144),
    long(Shl, 1, 63, i64::MIN),
    // amount & 0x3f
    long(Shl, 7, 64, 7),
    long(Shl, 7, 65, 14),
    long(Shl, 1, 101, 137438953472),
    long(Shl, 1, -1, i64::MIN),
    long(Shl, 7, -63, 14),
    long(Shl, 7, -64, 7),
    long(Shl, 1, -3, 2305843009213693952),
    long(Shl, 7, i64::MAX, i64::MIN),
    long(Shl, 7, i64::MIN, 7),
];

pub const SHR_INT: &[Case] = &[
    int(Shr, -12, 2, -3),
    int(Shr, 32, 5, 1),
    int(Shr, 7, 0, 7),
    int(Shr, 7, 1, 3),
    int(Shr, 0, 30, 0),
    int(Shr, 1, 30, 0),
    int(Shr, -1, 30, -1),
    int(Shr, i32::MAX, 31, 0),
    int(Shr, i32::MIN, 31, -1),
    // amount & 0x1f
    int(Shr, 7, 32, 7),
    int(Shr, 7, 33, 3),
    int(Shr, 1, -1, 0),
    int(Shr, 7, -31, 3),
    int(Shr, 7, -32, 7),
    int(Shr, i32::MIN, -3, -4),
    int(Shr, 7, i32::MAX, 0),
    int(Shr, 7, i32::MIN, 7),
];

pub const SHR_LONG: &[Case] = &[
    long(Shr, -12, 2, -3),
    int(Shr, 32, 5, 1),
    long(Shr, 7, 0, 7),
    long(Shr, 7, 1, 3),
    long(Shr, 0, 30, 0),
    long(Shr, 1, 30, 0),
    long(Shr, -1, 30, -1),
    long(Shr, 1073741824, 30, 1),
    long(Shr, 2147483648, 31, 1),
    long(Shr, 2147483648, 1, 1073741824),
    // up to 6 amount bits
    long(Shr, 4294967296, 32, 1),
    long(Shr, 60129542144, 33, 7),
    long(Shr, i64::MAX, 63, 0),
    long(Shr, i64::MIN, 63, -1),
    // amount & 0x3f
    long(Shr, 7, 64, 7),
    long(Shr, 7, 65, 3),
    long(Shr, i64::MIN, -1, -1),
    long(Shr, 7, -63, 3),
    long(Shr, 7, -64, 7),
    long(Shr, 2305843009213693952, -3, 1),
    // a 32-bit shift, masked with 0x1f, widened for the comparison
    int_as_long(Shr, i32::MIN, -3, -4),
    long(Shr, 7, i64::MAX, 0),
    long(Shr, 7, i64::MIN, 7),
];

pub const USHR_INT: &[Case] = &[
    int(UShr, -12, 2, 1073741821),
    int(UShr, 32, 5, 1),
    int(UShr, 7, 0, 7),
    int(UShr, 7, 1, 3),
    int(UShr, 0, 30, 0),
    int(UShr, 1, 30, 0),
    int(UShr, -1, 30, 3),
    int(UShr, i32::MAX, 31, 0),
    int(UShr, i32::MIN, 31, 1),
    // amount & 0x1f
    int(UShr, 7, 32, 7),
    int(UShr, 7, 33, 3),
    int(UShr, 1, -1, 0),
    int(UShr, 7, -31, 3),
    int(UShr, 7, -32, 7),
    int(UShr, i32::MIN, -3, 4),
    int(UShr, 7, i32::MAX, 0),
    int(UShr, 7, i32::MIN, 7),
];

pub const USHR_LONG: &[Case] = &[
    long(UShr, -12, 2, 4611686018427387901),
    int(UShr, 32, 5, 1),
    long(UShr, 7, 0, 7),
    long(UShr, 7, 1, 3),
    long(UShr, 0, 30, 0),
    long(UShr, 1, 30, 0),
    long(UShr, -1, 30, 17179869183),
    long(UShr, 1073741824, 30, 1),
    long(UShr, 2147483648, 31, 1),
    long(UShr, 2147483648, 1, 1073741824),
    // up to 6 amount bits
    long(UShr, 4294967296, 32, 1),
    long(UShr, 60129542144, 33, 7),
    long(UShr, i64::MAX, 63, 0),
    long(UShr, i64::MIN, 63, 1),
    // amount & 0x3f
    long(UShr, 7, 64, 7),
    long(UShr, 7, 65, 3),
    long(UShr, i64::MIN, -1, 1),
    long(UShr, 7, -63, 3),
    long(UShr, 7, -64, 7),
    long(UShr, 2305843009213693952, -3, 1),
    long(UShr, i64::MIN, -3, 4),
    long(UShr, 7, i64::MAX, 0),
    long(UShr, 7, i64::MIN, 7),
];

/// Every group, in the order a run checks them.
pub static GROUPS: [Group; 6] = [
    Group { name: "shl_int", width: Width::W32, cases: SHL_INT },
    Group { name: "shl_long", width: Width::W64, cases: SHL_LONG },
    Group { name: "shr_int", width: Width::W32, cases: SHR_INT },
    Group { name: "shr_long", width: Width::W64, cases: SHR_LONG },
    Group { name: "ushr_int", width: Width::W32, cases: USHR_INT },
    Group { name: "ushr_long", width: Width::W64, cases: USHR_LONG },
];
