use super::*;

#[test]
fn basic() {
    instruction_runs! {
        instr!(ADD, 2, 0, 1, 0),
        [0 = 3i64, 1 = 4i64] => [2 = 7i64]
    };
}

#[test]
fn negative_operand() {
    instruction_runs! {
        instr!(ADD, 2, 0, 1, 0),
        [0 = 16i64, 1 = -20i64] => [2 = -4i64]
    };
}

#[test]
fn overflow_wraps() {
    instruction_runs! {
        instr!(ADD, 2, 0, 1, 0),
        [0 = i64::MAX, 1 = 1i64] => [2 = i64::MIN]
    };
}
