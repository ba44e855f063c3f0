use super::*;

#[test]
fn basic() {
    instruction_runs! {
        instr!(SUB, 2, 0, 1, 0),
        [0 = 10i64, 1 = 4i64] => [2 = 6i64]
    };
}

#[test]
fn negative_result() {
    instruction_runs! {
        instr!(SUB, 2, 0, 1, 0),
        [0 = 4i64, 1 = 10i64] => [2 = -6i64]
    };
}

#[test]
fn overflow_wraps() {
    instruction_runs! {
        instr!(SUB, 2, 0, 1, 0),
        [0 = i64::MIN, 1 = 1i64] => [2 = i64::MAX]
    };
}
