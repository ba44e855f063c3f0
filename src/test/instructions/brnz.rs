use super::*;

#[test]
fn not_taken_when_rs_is_zero() {
    instruction_runs! {
        instr!(BRNZ, 0, 1, 0, 0),
        [0 = 0x1589u64, 1 = 0u64] => []
    };
}

#[test]
fn taken_when_rs_is_nonzero() {
    // 0x1589 lies below the code origin, so the branch lands on the
    // program counter bounds check.
    let _ = run_program! {
        [instr!(BRNZ, 0, 1, 0, 0)],
        [0 = 0x1589u64, 1 = 1u64] => [],
        ticks: 1,
        state: Some(ExitCode::BadProgramCounter),
        pc: 0x1589u64
    };
}

#[test]
fn taken_to_valid_target() {
    let _ = run_program! {
        [instr!(BRNZ, 0, 1, 0, 0), halt!(), halt!()],
        [0 = constants::CODE_BEGIN + 8, 1 = 7u64] => [],
        ticks: 2,
        state: Some(ExitCode::Halted),
        pc: constants::CODE_BEGIN + 8
    };
}
