use super::*;

#[test]
fn shifts_rd_in_place() {
    instruction_runs! {
        instr!(SHFTRI, 2, 0, 0, 8),
        [2 = 0xFF00u64] => [2 = 0xFFu64]
    };
}

#[test]
fn source_fields_are_ignored() {
    instruction_runs! {
        instr!(SHFTRI, 2, 1, 0, 4),
        [1 = 0xAAAAu64, 2 = 0x100u64] => [1 = 0xAAAAu64, 2 = 0x10u64]
    };
}
