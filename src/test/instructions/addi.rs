use super::*;

#[test]
fn adds_to_rd_in_place() {
    instruction_runs! {
        instr!(ADDI, 2, 0, 0, 5),
        [2 = 10u64] => [2 = 15u64]
    };
}

#[test]
fn maximum_literal() {
    instruction_runs! {
        instr!(ADDI, 2, 0, 0, 4095),
        [] => [2 = 4095u64]
    };
}

#[test]
fn literal_is_unsigned() {
    // The low 12 bits of -1 are 4095; there is no signed immediate add.
    instruction_runs! {
        instr!(ADDI, 2, 0, 0, -1),
        [] => [2 = 4095u64]
    };
}
