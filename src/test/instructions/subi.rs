use super::*;

#[test]
fn subtracts_from_rd_in_place() {
    instruction_runs! {
        instr!(SUBI, 2, 0, 0, 8),
        [2 = 20u64] => [2 = 12u64]
    };
}

#[test]
fn underflow_wraps() {
    instruction_runs! {
        instr!(SUBI, 2, 0, 0, 1),
        [] => [2 = u64::MAX]
    };
}
