use super::*;

#[test]
fn adds_register_to_program_counter() {
    let _ = run_program! {
        [instr!(BRR, 0, 0, 0, 0), halt!(), halt!()],
        [0 = 8u64] => [],
        ticks: 2,
        state: Some(ExitCode::Halted),
        pc: constants::CODE_BEGIN + 8
    };
}

#[test]
fn zero_offset_loops_in_place() {
    let _ = run_program! {
        [instr!(BRR, 0, 0, 0, 0)],
        [] => [],
        ticks: 3,
        state: None,
        pc: constants::CODE_BEGIN
    };
}
