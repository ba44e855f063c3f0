use super::*;

#[test]
fn divides_doubles() {
    instruction_runs! {
        instr!(DIVF, 2, 0, 1, 0),
        [0 = 10.0f64, 1 = 4.0f64] => [2 = 2.5f64]
    };
}

#[test]
fn division_by_zero_aborts() {
    instruction_exits! {
        instr!(DIVF, 2, 0, 1, 0),
        [0 = 10.0f64] => [],
        DivisionByZero
    };
}
