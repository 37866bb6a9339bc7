use std::fmt;

use shiftck_config::Config;
use tracing::{debug, info, info_span, warn};

use crate::{
    AssertionMismatch, CheckError, Failures,
    cases::{Case, Group},
};

/// Evaluates `case` and compares the result with its expected literal.
pub fn check(group: &'static str, case: &Case) -> Result<(), CheckError> {
    let actual = case.eval()?;
    debug!(
        op = case.op.name(),
        operand = %case.operand,
        amount = %case.amount,
        expected = %case.expected,
        actual = %actual,
        "evaluated"
    );
    if actual.as_i64() != case.expected.as_i64() {
        let mismatch = AssertionMismatch { expected: case.expected, actual, group, case: *case };
        return Err(mismatch.into());
    }
    Ok(())
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub groups: usize,
    pub cases: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} shift(s) in {} group(s) matched", self.cases, self.groups)
    }
}

/// Runs groups of cases in order under a [`Config`].
pub struct Validator<'a> {
    config: &'a Config,
}

impl<'a> Validator<'a> {
    pub fn new(config: &'a Config) -> Self {
        Validator { config }
    }

    /// Checks every selected group. Stops at the first mismatch unless `keep_going` is set, in
    /// which case all mismatches are returned together once every group ran.
    pub fn run(&self, groups: &[Group]) -> Result<Summary, CheckError> {
        let mut summary = Summary::default();
        let mut failures = vec![];
        for group in groups {
            if !self.config.is_selected(group.name, group.width) {
                debug!(group = group.name, "skipped");
                continue;
            }
            let _span = info_span!("group", name = group.name, width = %group.width).entered();
            for case in group.cases {
                match check(group.name, case) {
                    Ok(()) => {}
                    Err(CheckError::Mismatch(mismatch)) if self.config.keep_going => {
                        warn!("{} => {mismatch}", mismatch.describe());
                        failures.push(mismatch);
                    }
                    Err(err) => return Err(err),
                }
                summary.cases += 1;
            }
            summary.groups += 1;
            info!(cases = group.cases.len(), "checked");
        }
        if failures.is_empty() {
            Ok(summary)
        } else {
            Err(CheckError::Failures(Failures(failures)))
        }
    }
}
