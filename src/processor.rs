mod logic;

use self::logic::TickResult;
use crate::instructions::decode_instruction;
use crate::io::IoHandler;
use crate::memory::StorageMut;
use crate::register::Register;
use crate::{constants, Address};
use std::fmt;

/// Reason a simulation stopped.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum ExitCode {
    /// `priv 0` was executed (normal shutdown).
    Halted,
    /// Attempted integer or floating-point division by zero.
    DivisionByZero,
    /// Attempted to access memory outside the 512 KiB image.
    BadMemoryAccess,
    /// The program counter left the `[0x2000, 0x10000)` window.
    BadProgramCounter,
    /// The opcode was not recognized.
    InvalidOpcode,
    /// `priv` was executed with an undefined sub-code.
    InvalidPrivOperation,
    /// Console input under `priv 3` was not a decimal unsigned integer.
    InvalidInput,
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let message = match self {
            ExitCode::Halted => "halted",
            ExitCode::DivisionByZero => "division by zero",
            ExitCode::BadMemoryAccess => "memory index out of bounds",
            ExitCode::BadProgramCounter => "program counter out of bounds",
            ExitCode::InvalidOpcode => "invalid instruction",
            ExitCode::InvalidPrivOperation => "invalid privileged operation",
            ExitCode::InvalidInput => "invalid console input",
        };
        f.write_str(message)
    }
}

/// Processor privilege mode. `priv 1` and `priv 2` switch it; no
/// instruction currently checks it.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Mode {
    User,
    Supervisor,
}

/// The Tinker processor: 32 general 64-bit registers, a program counter
/// and a privilege mode. Memory and the console are passed into
/// [`tick`](#method.tick)/[`run`](#method.run) so tests can observe both.
pub struct Processor {
    registers: [Register; constants::REGISTER_COUNT],
    program_counter: Address,
    mode: Mode,
}

impl Processor {
    /// A processor in its reset state: registers zeroed, the stack pointer
    /// at the top of memory, the program counter at the code origin, user
    /// mode.
    pub fn new() -> Processor {
        let mut registers = [Register::default(); constants::REGISTER_COUNT];
        registers[constants::STACK_POINTER].set_u(constants::MEM_SIZE);

        Processor {
            registers,
            program_counter: constants::CODE_BEGIN,
            mode: Mode::User,
        }
    }

    pub fn registers(&self) -> &[Register] {
        &self.registers[..]
    }

    pub fn register(&self, index: usize) -> Register {
        self.registers[index]
    }

    pub fn register_mut(&mut self, index: usize) -> &mut Register {
        &mut self.registers[index]
    }

    pub fn program_counter(&self) -> Address {
        self.program_counter
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Executes one fetch-decode-execute step. Returns `None` while the
    /// program keeps running and the exit code once it stops.
    pub fn tick(
        &mut self,
        storage: &mut dyn StorageMut,
        io: &mut dyn IoHandler,
    ) -> Option<ExitCode> {
        let word = match storage.read_word(self.program_counter) {
            Ok(word) => word,
            Err(()) => return Some(ExitCode::BadMemoryAccess),
        };

        let fields = decode_instruction(word);

        match logic::tick(
            &mut self.registers,
            &mut self.mode,
            storage,
            io,
            fields,
            self.program_counter,
        ) {
            TickResult::Next => {
                self.program_counter = self
                    .program_counter
                    .wrapping_add(u64::from(constants::WORD_BYTES));
            }
            TickResult::Jump(target) => {
                self.program_counter = target;
            }
            TickResult::Stop(exit_code) => {
                return Some(exit_code);
            }
        }

        if self.program_counter < constants::CODE_BEGIN
            || self.program_counter >= constants::DATA_BEGIN
        {
            return Some(ExitCode::BadProgramCounter);
        }

        None
    }

    /// Runs until the program halts or aborts.
    pub fn run(&mut self, storage: &mut dyn StorageMut, io: &mut dyn IoHandler) -> ExitCode {
        loop {
            if let Some(exit_code) = self.tick(storage, io) {
                return exit_code;
            }
        }
    }
}

impl Default for Processor {
    fn default() -> Processor {
        Processor::new()
    }
}
