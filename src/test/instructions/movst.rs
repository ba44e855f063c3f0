use super::*;

#[test]
fn stores_dword_little_endian() {
    let (_processor, memory, _io) = run_program! {
        [instr!(MOVST, 0, 2, 0, 0), halt!()],
        [0 = 0x40000u64, 2 = 0x0102_0304_0506_0708u64] => [],
        ticks: 2,
        state: Some(ExitCode::Halted),
        pc: constants::CODE_BEGIN + 4
    };

    assert_eq!(memory.read_dword(0x40000), Ok(0x0102_0304_0506_0708));
    assert_eq!(
        memory.borrow_slice(0x40000, 8).unwrap(),
        &[0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]
    );
}

#[test]
fn offset_is_sign_extended() {
    let (_processor, memory, _io) = run_program! {
        [instr!(MOVST, 0, 2, 0, -16), halt!()],
        [0 = 0x40010u64, 2 = 99u64] => [],
        ticks: 2,
        state: Some(ExitCode::Halted),
        pc: constants::CODE_BEGIN + 4
    };

    assert_eq!(memory.read_dword(0x40000), Ok(99));
}

#[test]
fn index_above_limit_aborts() {
    instruction_exits! {
        instr!(MOVST, 0, 2, 0, 0),
        [0 = constants::MEM_SIZE - 7, 2 = 1u64] => [],
        BadMemoryAccess
    };
}
