use super::*;

#[test]
fn sub_code_zero_halts() {
    instruction_exits! {
        instr!(PRIV, 0, 0, 0, 0),
        [] => [],
        Halted
    };
}

#[test]
fn mode_transitions() {
    let (processor, _memory, _io) = run_program! {
        [instr!(PRIV, 0, 0, 0, 1), halt!()],
        [] => [],
        ticks: 2,
        state: Some(ExitCode::Halted),
        pc: constants::CODE_BEGIN + 4
    };
    assert_eq!(processor.mode(), Mode::Supervisor);

    let (processor, _memory, _io) = run_program! {
        [instr!(PRIV, 0, 0, 0, 1), instr!(PRIV, 0, 0, 0, 2), halt!()],
        [] => [],
        ticks: 3,
        state: Some(ExitCode::Halted),
        pc: constants::CODE_BEGIN + 8
    };
    assert_eq!(processor.mode(), Mode::User);
}

#[test]
fn undefined_sub_code_aborts() {
    instruction_exits! {
        instr!(PRIV, 0, 0, 0, 5),
        [] => [],
        InvalidPrivOperation
    };
}

#[test]
fn input_reads_decimal_line() {
    let _ = run_program! {
        [instr!(PRIV, 4, 2, 0, 3), halt!()],
        [] => [4 = 123u64],
        io: BufferedIo::with_input(&["123\n"]),
        ticks: 2,
        state: Some(ExitCode::Halted),
        pc: constants::CODE_BEGIN + 4
    };
}

#[test]
fn input_skipped_when_source_port_nonzero() {
    // With no buffered input, an attempted read would abort; rs != 0 means
    // the read never happens.
    let _ = run_program! {
        [instr!(PRIV, 4, 2, 0, 3), halt!()],
        [2 = 7u64] => [4 = 0u64],
        ticks: 2,
        state: Some(ExitCode::Halted),
        pc: constants::CODE_BEGIN + 4
    };
}

#[test]
fn non_decimal_input_aborts() {
    let _ = run_program! {
        [instr!(PRIV, 4, 2, 0, 3)],
        [] => [],
        io: BufferedIo::with_input(&["12a\n"]),
        ticks: 1,
        state: Some(ExitCode::InvalidInput),
        pc: constants::CODE_BEGIN
    };
}

#[test]
fn exhausted_input_aborts() {
    let _ = run_program! {
        [instr!(PRIV, 4, 2, 0, 3)],
        [] => [],
        ticks: 1,
        state: Some(ExitCode::InvalidInput),
        pc: constants::CODE_BEGIN
    };
}

#[test]
fn output_ports() {
    let (_processor, _memory, io) = run_program! {
        [
            instr!(PRIV, 1, 6, 0, 4),
            instr!(PRIV, 3, 7, 0, 4),
            halt!(),
        ],
        [1 = 1u64, 3 = 3u64, 6 = 9000u64, 7 = 0x41u64] => [],
        ticks: 3,
        state: Some(ExitCode::Halted),
        pc: constants::CODE_BEGIN + 8
    };

    assert_eq!(io.ints, vec![9000]);
    assert_eq!(io.chars, vec![0x41]);
}

#[test]
fn unknown_output_port_writes_nothing() {
    let (_processor, _memory, io) = run_program! {
        [instr!(PRIV, 1, 6, 0, 4), halt!()],
        [1 = 2u64, 6 = 9000u64] => [],
        ticks: 2,
        state: Some(ExitCode::Halted),
        pc: constants::CODE_BEGIN + 4
    };

    assert!(io.ints.is_empty());
    assert!(io.chars.is_empty());
}

#[test]
fn char_output_truncates_to_low_byte() {
    let (_processor, _memory, io) = run_program! {
        [instr!(PRIV, 3, 7, 0, 4), halt!()],
        [3 = 3u64, 7 = 0x1234_5641u64] => [],
        ticks: 2,
        state: Some(ExitCode::Halted),
        pc: constants::CODE_BEGIN + 4
    };

    assert_eq!(io.chars, vec![0x41]);
}
