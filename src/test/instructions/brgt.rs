use super::*;

#[test]
fn taken_when_rs_greater() {
    let _ = run_program! {
        [instr!(BRGT, 0, 1, 2, 0), halt!(), halt!()],
        [0 = constants::CODE_BEGIN + 8, 1 = 5u64, 2 = 3u64] => [],
        ticks: 2,
        state: Some(ExitCode::Halted),
        pc: constants::CODE_BEGIN + 8
    };
}

#[test]
fn not_taken_when_equal() {
    instruction_runs! {
        instr!(BRGT, 0, 1, 2, 0),
        [0 = 0x9999u64, 1 = 5u64, 2 = 5u64] => []
    };
}

#[test]
fn comparison_is_unsigned() {
    // -1 as a signed value would not be greater than 1.
    let _ = run_program! {
        [instr!(BRGT, 0, 1, 2, 0), halt!(), halt!()],
        [0 = constants::CODE_BEGIN + 8, 1 = u64::MAX, 2 = 1u64] => [],
        ticks: 2,
        state: Some(ExitCode::Halted),
        pc: constants::CODE_BEGIN + 8
    };
}
