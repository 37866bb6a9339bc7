use itertools::Itertools;
use shiftck_driver::{
    Summary, Validator,
    cases::{GROUPS, Group},
    check,
};
use shiftck_semantics::{Value, Width};
use tests::config_from_flags;

#[test]
fn every_case_matches() {
    for group in &GROUPS {
        for case in group.cases {
            if let Err(err) = check(group.name, case) {
                panic!("{}: {err}", group.name);
            }
        }
    }
}

#[test]
fn default_run_checks_everything() {
    let config = config_from_flags(&[]).unwrap();
    let summary = Validator::new(&config).run(&GROUPS).unwrap();
    assert_eq!(summary, Summary { groups: 6, cases: 118 });
    assert_eq!(summary.to_string(), "118 shift(s) in 6 group(s) matched");
}

#[test]
fn groups_run_in_order() {
    let names = GROUPS.iter().map(|g| g.name).collect_vec();
    assert_eq!(names, ["shl_int", "shl_long", "shr_int", "shr_long", "ushr_int", "ushr_long"]);
}

#[test]
fn groups_use_a_single_operator() {
    for group in &GROUPS {
        let ops = group.cases.iter().map(|case| case.op).dedup().collect_vec();
        assert_eq!(ops.len(), 1, "{}", group.name);
        assert!(group.name.starts_with(ops[0].name()));
    }
}

#[test]
fn operands_share_a_width_and_expected_is_never_narrower() {
    for case in GROUPS.iter().flat_map(|g| g.cases) {
        assert_eq!(case.operand.width(), case.amount.width());
        assert!(case.expected.width() >= case.operand.width());
    }
}

#[test]
fn int_groups_only_shift_ints() {
    let (narrow, wide): (Vec<&Group>, Vec<&Group>) =
        GROUPS.iter().partition(|g| g.width == Width::W32);
    assert_eq!(narrow.len(), 3);
    assert!(narrow.iter().flat_map(|g| g.cases).all(|c| c.operand.width() == Width::W32));
    // the long groups also carry a few 32-bit shifts
    let widths = wide.iter().flat_map(|g| g.cases).map(|c| c.operand.width()).counts();
    assert_eq!(widths[&Width::W32], 3);
    assert_eq!(widths[&Width::W64], 63);
}

#[test]
fn masking_cases_are_covered() {
    let negative_amounts = GROUPS
        .iter()
        .flat_map(|g| g.cases)
        .filter(|c| c.amount.is_negative())
        .count();
    assert_eq!(negative_amounts, 32);
    assert!(
        GROUPS
            .iter()
            .flat_map(|g| g.cases)
            .any(|c| c.amount == Value::I64(32) && c.expected == Value::I64(4294967296))
    );
}
