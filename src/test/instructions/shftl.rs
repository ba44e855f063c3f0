use super::*;

#[test]
fn by_register_amount() {
    instruction_runs! {
        instr!(SHFTL, 2, 0, 1, 0),
        [0 = 0x10u64, 1 = 4u64] => [2 = 0x100u64]
    };
}

#[test]
fn amount_of_64_or_more_clears() {
    instruction_runs! {
        instr!(SHFTL, 2, 0, 1, 0),
        [0 = u64::MAX, 1 = 100u64] => [2 = 0u64]
    };
}
