use super::*;

#[test]
fn complements_source() {
    instruction_runs! {
        instr!(NOT, 3, 5, 0, 0),
        [5 = 0x0F0F_0000_FFFF_1234u64] => [3 = !0x0F0F_0000_FFFF_1234u64]
    };
}

#[test]
fn zero_becomes_all_ones() {
    instruction_runs! {
        instr!(NOT, 1, 0, 0, 0),
        [] => [1 = u64::MAX]
    };
}
