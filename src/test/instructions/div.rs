use super::*;

#[test]
fn basic() {
    instruction_runs! {
        instr!(DIV, 2, 0, 1, 0),
        [0 = 42i64, 1 = 7i64] => [2 = 6i64]
    };
}

#[test]
fn truncates_toward_zero() {
    instruction_runs! {
        instr!(DIV, 2, 0, 1, 0),
        [0 = -7i64, 1 = 2i64] => [2 = -3i64]
    };
}

#[test]
fn division_by_zero_aborts() {
    instruction_exits! {
        instr!(DIV, 2, 0, 1, 0),
        [0 = 42i64] => [],
        DivisionByZero
    };
}

#[test]
fn min_by_minus_one_wraps() {
    instruction_runs! {
        instr!(DIV, 2, 0, 1, 0),
        [0 = i64::MIN, 1 = -1i64] => [2 = i64::MIN]
    };
}
