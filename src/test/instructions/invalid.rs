use super::*;

#[test]
fn opcode_30_aborts() {
    instruction_exits! {
        30u32 << constants::OPCODE_OFFSET,
        [] => [],
        InvalidOpcode
    };
}

#[test]
fn opcode_31_aborts() {
    instruction_exits! {
        31u32 << constants::OPCODE_OFFSET,
        [] => [],
        InvalidOpcode
    };
}

#[test]
fn running_into_uninitialized_memory_aborts() {
    // An empty code segment leaves 0xFF bytes at the code origin, which
    // decode to opcode 31.
    let _ = run_program! {
        [],
        [] => [],
        ticks: 1,
        state: Some(ExitCode::InvalidOpcode),
        pc: constants::CODE_BEGIN
    };
}
