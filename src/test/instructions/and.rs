use super::*;

#[test]
fn basic() {
    instruction_runs! {
        instr!(AND, 2, 0, 1, 0),
        [0 = 0xF0F0u64, 1 = 0xFF00u64] => [2 = 0xF000u64]
    };
}

#[test]
fn with_self_is_identity() {
    instruction_runs! {
        instr!(AND, 3, 5, 5, 0),
        [5 = 0xDEAD_BEEF_0123_4567u64] => [3 = 0xDEAD_BEEF_0123_4567u64]
    };
}
