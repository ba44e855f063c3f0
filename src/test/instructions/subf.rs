use super::*;

#[test]
fn subtracts_doubles() {
    instruction_runs! {
        instr!(SUBF, 2, 0, 1, 0),
        [0 = 262.5f64, 1 = 82.25f64] => [2 = 180.25f64]
    };
}
