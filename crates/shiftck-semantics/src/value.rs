use std::fmt;

use thiserror::Error;

use crate::{ShiftOp, Width};

/// A width-tagged integer as held in a register of the arithmetic unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Value {
    I32(i32),
    I64(i64),
}

impl Value {
    pub fn width(self) -> Width {
        match self {
            Value::I32(_) => Width::W32,
            Value::I64(_) => Width::W64,
        }
    }

    /// Sign-extends the value to 64 bits.
    pub fn as_i64(self) -> i64 {
        match self {
            Value::I32(v) => i64::from(v),
            Value::I64(v) => v,
        }
    }

    pub fn is_negative(self) -> bool {
        self.as_i64() < 0
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::I32(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::I64(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::I32(v) => write!(f, "{v}"),
            Value::I64(v) => write!(f, "{v}"),
        }
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("cannot apply `{op}` to a {operand}-bit operand with a {amount}-bit shift amount")]
pub struct WidthMismatch {
    pub op: ShiftOp,
    pub operand: Width,
    pub amount: Width,
}
