use super::*;

#[test]
fn returns_to_instruction_after_call() {
    let _ = run_program! {
        [
            instr!(CALL, 0, 0, 0, 0),
            halt!(),
            instr!(RET, 0, 0, 0, 0),
        ],
        [0 = constants::CODE_BEGIN + 8] => [],
        ticks: 3,
        state: Some(ExitCode::Halted),
        pc: constants::CODE_BEGIN + 4
    };
}

#[test]
fn bad_stack_pointer_aborts() {
    instruction_exits! {
        instr!(RET, 0, 0, 0, 0),
        [31 = 4u64] => [],
        BadMemoryAccess
    };
}
