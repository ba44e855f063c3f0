use super::*;

#[test]
fn saves_return_address_below_stack_pointer() {
    let (_processor, memory, _io) = run_program! {
        [instr!(CALL, 0, 0, 0, 0), halt!(), halt!()],
        [0 = constants::CODE_BEGIN + 8] => [31 = constants::MEM_SIZE],
        ticks: 2,
        state: Some(ExitCode::Halted),
        pc: constants::CODE_BEGIN + 8
    };

    assert_eq!(
        memory.read_dword(constants::MEM_SIZE - 8),
        Ok(constants::CODE_BEGIN + 4)
    );
}

#[test]
fn bad_stack_pointer_aborts() {
    instruction_exits! {
        instr!(CALL, 0, 0, 0, 0),
        [0 = constants::CODE_BEGIN + 8, 31 = 4u64] => [],
        BadMemoryAccess
    };
}
