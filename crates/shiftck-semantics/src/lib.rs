//! Shift semantics of the arithmetic unit.
//!
//! Every shift consults only the low `log2(width)` bits of its amount, the same way hardware
//! shift instructions do. The amount is masked on its raw bit pattern, so negative or oversized
//! amounts are never an error: shifting is total over both widths.
mod value;

use std::{fmt, str::FromStr};

use serde::Deserialize;
pub use value::{Value, WidthMismatch};

/// Operand width of a shift.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String")]
pub enum Width {
    W32,
    W64,
}

impl Width {
    const ERROR: &'static str = "width must be 32 or 64";

    pub const fn bits(self) -> u32 {
        match self {
            Width::W32 => 32,
            Width::W64 => 64,
        }
    }

    /// Mask applied to a shift amount before shifting: `0x1f` for 32 bits, `0x3f` for 64 bits.
    pub const fn mask(self) -> u32 {
        self.bits() - 1
    }
}

impl FromStr for Width {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "32" => Ok(Width::W32),
            "64" => Ok(Width::W64),
            _ => Err(Self::ERROR),
        }
    }
}

impl TryFrom<String> for Width {
    type Error = &'static str;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

/// The three shift operators.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShiftOp {
    /// Left shift, zero filling.
    Shl,
    /// Arithmetic right shift, sign filling.
    Shr,
    /// Logical right shift, zero filling.
    UShr,
}

impl ShiftOp {
    pub const ALL: [ShiftOp; 3] = [ShiftOp::Shl, ShiftOp::Shr, ShiftOp::UShr];

    pub fn name(self) -> &'static str {
        match self {
            ShiftOp::Shl => "shl",
            ShiftOp::Shr => "shr",
            ShiftOp::UShr => "ushr",
        }
    }

    #[inline]
    pub fn apply<T: Shift>(self, a: T, b: T) -> T {
        match self {
            ShiftOp::Shl => a.shl(b),
            ShiftOp::Shr => a.shr(b),
            ShiftOp::UShr => a.ushr(b),
        }
    }

    /// Evaluates the operator on two width-tagged values. Operand and amount must have the same
    /// width, as they do in the instruction set.
    pub fn eval(self, a: Value, b: Value) -> Result<Value, WidthMismatch> {
        match (a, b) {
            (Value::I32(a), Value::I32(b)) => Ok(Value::I32(self.apply(a, b))),
            (Value::I64(a), Value::I64(b)) => Ok(Value::I64(self.apply(a, b))),
            _ => Err(WidthMismatch { op: self, operand: a.width(), amount: b.width() }),
        }
    }
}

impl fmt::Display for ShiftOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShiftOp::Shl => write!(f, "<<"),
            ShiftOp::Shr => write!(f, ">>"),
            ShiftOp::UShr => write!(f, ">>>"),
        }
    }
}

impl fmt::Debug for ShiftOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A signed integer type the arithmetic unit can shift.
pub trait Shift: Copy {
    const WIDTH: Width;

    /// The distance actually shifted for `amount`: its low `log2(WIDTH)` bits.
    fn masked_amount(amount: Self) -> u32;

    fn shl(self, amount: Self) -> Self;

    fn shr(self, amount: Self) -> Self;

    fn ushr(self, amount: Self) -> Self;
}

macro_rules! impl_shift {
    ($signed:ty, $unsigned:ty, $width:expr) => {
        impl Shift for $signed {
            const WIDTH: Width = $width;

            #[inline]
            fn masked_amount(amount: Self) -> u32 {
                // Truncating keeps the low bits, which is all the mask looks at.
                (amount as u32) & Self::WIDTH.mask()
            }

            #[inline]
            fn shl(self, amount: Self) -> Self {
                self.wrapping_shl(Self::masked_amount(amount))
            }

            #[inline]
            fn shr(self, amount: Self) -> Self {
                self.wrapping_shr(Self::masked_amount(amount))
            }

            #[inline]
            fn ushr(self, amount: Self) -> Self {
                ((self as $unsigned) >> Self::masked_amount(amount)) as $signed
            }
        }
    };
}

impl_shift!(i32, u32, Width::W32);
impl_shift!(i64, u64, Width::W64);

/// See [`Shift::masked_amount`].
#[inline]
pub fn masked_amount<T: Shift>(amount: T) -> u32 {
    T::masked_amount(amount)
}

/// Left shift: `a << (b & mask)`.
#[inline]
pub fn shl<T: Shift>(a: T, b: T) -> T {
    a.shl(b)
}

/// Arithmetic right shift: `a >> (b & mask)`, vacated bits copy the sign bit.
#[inline]
pub fn shr<T: Shift>(a: T, b: T) -> T {
    a.shr(b)
}

/// Logical right shift: `a >>> (b & mask)`, vacated bits are zero.
#[inline]
pub fn ushr<T: Shift>(a: T, b: T) -> T {
    a.ushr(b)
}
