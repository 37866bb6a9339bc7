use shiftck_config::{Config, ConfigError, Loader};
use shiftck_driver::cases::{Case, Group};
use shiftck_semantics::{ShiftOp, Value, Width};

/// Configuration built from `flags` alone, ignoring config files and the environment of the
/// machine running the tests.
pub fn config_from_flags(flags: &[&str]) -> Result<Config, ConfigError> {
    Loader::new().without_env().load(flags)
}

pub const fn int(op: ShiftOp, a: i32, b: i32, expected: i32) -> Case {
    Case { op, operand: Value::I32(a), amount: Value::I32(b), expected: Value::I32(expected) }
}

pub const fn long(op: ShiftOp, a: i64, b: i64, expected: i64) -> Case {
    Case { op, operand: Value::I64(a), amount: Value::I64(b), expected: Value::I64(expected) }
}

pub fn group(name: &'static str, width: Width, cases: &'static [Case]) -> Group {
    Group { name, width, cases }
}
