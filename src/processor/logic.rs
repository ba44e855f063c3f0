use num::FromPrimitive;
use std::num::Wrapping;

use crate::instructions::InstructionFields;
use crate::io::IoHandler;
use crate::memory::StorageMut;
use crate::processor::{ExitCode, Mode};
use crate::register::Register;
use crate::{constants, Opcode};
use util::is_uint64;

pub enum TickResult {
    Next,
    Jump(u64),
    Stop(ExitCode),
}

fn shift_left(value: u64, amount: u64) -> u64 {
    if amount < 64 {
        value << amount
    } else {
        0
    }
}

fn shift_right(value: u64, amount: u64) -> u64 {
    if amount < 64 {
        value >> amount
    } else {
        0
    }
}

fn jump(target: u64) -> TickResult {
    TickResult::Jump(target)
}

/// Executes one decoded instruction against the register file, memory and
/// console. Branch handlers return the final program counter; the caller
/// applies it (the `Next` case advances by one word).
pub fn tick(
    registers: &mut [Register; constants::REGISTER_COUNT],
    mode: &mut Mode,
    storage: &mut dyn StorageMut,
    io: &mut dyn IoHandler,
    fields: InstructionFields,
    program_counter: u64,
) -> TickResult {
    let op_code = match Opcode::from_u8(fields.opcode) {
        Some(op_code) => op_code,
        None => return TickResult::Stop(ExitCode::InvalidOpcode),
    };

    let rd = registers[fields.rd];
    let rs = registers[fields.rs];
    let rt = registers[fields.rt];

    let rsi = Wrapping(rs.i());
    let rti = Wrapping(rt.i());

    let imm12 = fields.imm12();
    let imm12s = fields.imm12_signed();

    match op_code {
        Opcode::AND => {
            registers[fields.rd].set_u(rs.u() & rt.u());
        }

        Opcode::OR => {
            registers[fields.rd].set_u(rs.u() | rt.u());
        }

        Opcode::XOR => {
            registers[fields.rd].set_u(rs.u() ^ rt.u());
        }

        Opcode::NOT => {
            registers[fields.rd].set_u(!rs.u());
        }

        Opcode::SHFTR => {
            registers[fields.rd].set_u(shift_right(rs.u(), rt.u()));
        }

        Opcode::SHFTRI => {
            registers[fields.rd].set_u(shift_right(rd.u(), u64::from(imm12)));
        }

        Opcode::SHFTL => {
            registers[fields.rd].set_u(shift_left(rs.u(), rt.u()));
        }

        Opcode::SHFTLI => {
            registers[fields.rd].set_u(shift_left(rd.u(), u64::from(imm12)));
        }

        Opcode::BR => {
            return jump(rd.u());
        }

        Opcode::BRR => {
            return jump(program_counter.wrapping_add(rd.u()));
        }

        Opcode::BRRL => {
            return jump(program_counter.wrapping_add(i64::from(imm12s) as u64));
        }

        Opcode::BRNZ => {
            if rs.u() != 0 {
                return jump(rd.u());
            }
        }

        Opcode::CALL => {
            let return_address = program_counter.wrapping_add(u64::from(constants::WORD_BYTES));
            let slot = registers[constants::STACK_POINTER]
                .u()
                .wrapping_sub(u64::from(constants::DWORD_BYTES));
            if storage.write_dword(slot, return_address).is_err() {
                return TickResult::Stop(ExitCode::BadMemoryAccess);
            }
            return jump(rd.u());
        }

        Opcode::RET => {
            let slot = registers[constants::STACK_POINTER]
                .u()
                .wrapping_sub(u64::from(constants::DWORD_BYTES));
            match storage.read_dword(slot) {
                Ok(return_address) => return jump(return_address),
                Err(()) => return TickResult::Stop(ExitCode::BadMemoryAccess),
            }
        }

        Opcode::BRGT => {
            if rs.u() > rt.u() {
                return jump(rd.u());
            }
        }

        Opcode::PRIV => {
            return priv_operation(registers, mode, io, fields, imm12);
        }

        Opcode::MOVLD => {
            let index = rs.u().wrapping_add(i64::from(imm12s) as u64);
            match storage.read_dword(index) {
                Ok(value) => registers[fields.rd].set_u(value),
                Err(()) => return TickResult::Stop(ExitCode::BadMemoryAccess),
            }
        }

        Opcode::MOVRR => {
            registers[fields.rd].set_u(rs.u());
        }

        Opcode::MOVRL => {
            let value = (rd.u() & !u64::from(constants::IMMEDIATE_MASK)) | u64::from(imm12);
            registers[fields.rd].set_u(value);
        }

        Opcode::MOVST => {
            let index = rd.u().wrapping_add(i64::from(imm12s) as u64);
            if storage.write_dword(index, rs.u()).is_err() {
                return TickResult::Stop(ExitCode::BadMemoryAccess);
            }
        }

        Opcode::ADDF => {
            registers[fields.rd].set_f(rs.f() + rt.f());
        }

        Opcode::SUBF => {
            registers[fields.rd].set_f(rs.f() - rt.f());
        }

        Opcode::MULF => {
            registers[fields.rd].set_f(rs.f() * rt.f());
        }

        Opcode::DIVF => {
            if rt.f() == 0.0 {
                return TickResult::Stop(ExitCode::DivisionByZero);
            }
            registers[fields.rd].set_f(rs.f() / rt.f());
        }

        Opcode::ADD => {
            registers[fields.rd].set_i((rsi + rti).0);
        }

        Opcode::ADDI => {
            registers[fields.rd].set_u(rd.u().wrapping_add(u64::from(imm12)));
        }

        Opcode::SUB => {
            registers[fields.rd].set_i((rsi - rti).0);
        }

        Opcode::SUBI => {
            registers[fields.rd].set_u(rd.u().wrapping_sub(u64::from(imm12)));
        }

        Opcode::MUL => {
            registers[fields.rd].set_i((rsi * rti).0);
        }

        Opcode::DIV => {
            if rti.0 == 0 {
                return TickResult::Stop(ExitCode::DivisionByZero);
            }
            registers[fields.rd].set_i(rsi.0.wrapping_div(rti.0));
        }
    }

    TickResult::Next
}

fn priv_operation(
    registers: &mut [Register; constants::REGISTER_COUNT],
    mode: &mut Mode,
    io: &mut dyn IoHandler,
    fields: InstructionFields,
    sub_code: u16,
) -> TickResult {
    match sub_code {
        0 => {
            return TickResult::Stop(ExitCode::Halted);
        }

        1 => {
            *mode = Mode::Supervisor;
        }

        2 => {
            *mode = Mode::User;
        }

        // Console input: port 0 is the only input device.
        3 => {
            if registers[fields.rs].u() == 0 {
                let line = match io.read_line() {
                    Ok(line) => line,
                    Err(_) => return TickResult::Stop(ExitCode::InvalidInput),
                };
                let text = line.trim_end_matches('\n').trim_end_matches('\r');
                if !is_uint64(text) {
                    return TickResult::Stop(ExitCode::InvalidInput);
                }
                registers[fields.rd].set_u(text.parse().unwrap_or(0));
            }
        }

        // Console output: port 1 prints decimal integers, port 3 raw bytes.
        4 => {
            if registers[fields.rd].u() == 1 {
                io.write_int(registers[fields.rs].u());
            } else if registers[fields.rd].u() == 3 {
                io.write_char(registers[fields.rs].u() as u8);
            }
        }

        _ => {
            return TickResult::Stop(ExitCode::InvalidPrivOperation);
        }
    }

    TickResult::Next
}
