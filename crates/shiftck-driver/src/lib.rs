//! Conformance check of the arithmetic unit's shift operators against a fixed oracle.
pub mod cases;
mod validator;

use std::{fmt, io};

use itertools::Itertools;
use shiftck_config::Config;
use shiftck_semantics::{Value, WidthMismatch};
use thiserror::Error;
pub use validator::{Summary, Validator, check};

use crate::cases::{Case, Group};

/// Exit status code used when a shift does not match the oracle.
pub const EXIT_MISMATCH: i32 = 1;

/// A computed result that differs from the oracle.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Expected: {expected}, found: {actual}")]
pub struct AssertionMismatch {
    pub expected: Value,
    pub actual: Value,
    pub group: &'static str,
    pub case: Case,
}

impl AssertionMismatch {
    /// The failing shift, e.g. `shl_int: 7 << 32`.
    pub fn describe(&self) -> String {
        format!("{}: {} {} {}", self.group, self.case.operand, self.case.op, self.case.amount)
    }
}

/// Every mismatch of a run that kept going after the first one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failures(pub Vec<AssertionMismatch>);

impl fmt::Display for Failures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} shift(s) did not match", self.0.len())?;
        write!(
            f,
            "{}",
            self.0
                .iter()
                .format_with("\n", |m, f| f(&format_args!("  {} => {m}", m.describe())))
        )
    }
}

#[derive(Debug, Error)]
pub enum CheckError {
    #[error(transparent)]
    Mismatch(#[from] AssertionMismatch),
    #[error("{0}")]
    Failures(Failures),
    #[error(transparent)]
    Width(#[from] WidthMismatch),
}

/// Runs `groups` under `config` and returns the exit status of the run. A failed run is written
/// to `out` and exits with [`EXIT_MISMATCH`].
pub fn run_and_report(
    config: &Config,
    groups: &[Group],
    out: &mut impl io::Write,
) -> io::Result<i32> {
    match Validator::new(config).run(groups) {
        Ok(summary) => {
            tracing::info!("{summary}");
            Ok(0)
        }
        Err(err) => {
            writeln!(out, "{err}")?;
            Ok(EXIT_MISMATCH)
        }
    }
}
