use super::Word;
use std::mem;

pub const WORD_BYTES: u32 = mem::size_of::<Word>() as u32;
pub const DWORD_BYTES: u32 = mem::size_of::<u64>() as u32;

pub const REGISTER_COUNT: usize = 32;

/// Register 31 doubles as the stack pointer by convention.
pub const STACK_POINTER: usize = 31;

/// Total processor memory in bytes (512 KiB).
pub const MEM_SIZE: u64 = 512 * 1024;

/// Address the code segment is loaded at; also the reset program counter.
pub const CODE_BEGIN: u64 = 0x2000;

/// Address the data segment is loaded at; also the exclusive upper bound
/// for the program counter.
pub const DATA_BEGIN: u64 = 0x10000;

pub const OPCODE_WIDTH: u32 = 5;
pub const REG_ID_WIDTH: u32 = 5;
pub const IMMEDIATE_WIDTH: u32 = 12;

pub const OPCODE_MASK: u32 = 0b11111000000000000000000000000000;
pub const RD_MASK: u32 = 0b00000111110000000000000000000000;
pub const RS_MASK: u32 = 0b00000000001111100000000000000000;
pub const RT_MASK: u32 = 0b00000000000000011111000000000000;
pub const IMMEDIATE_MASK: u32 = 0b00000000000000000000111111111111;
pub const IMMEDIATE_SIGN_MASK: u32 = 0b00000000000000000000100000000000;

/// The literal is decoded into a 16-bit slot; the low four bits of `rt`
/// alias into it, so handlers always mask or sign-extend from bit 11.
pub const IMMEDIATE_SLOT_MASK: u32 = 0b00000000000000001111111111111111;

pub const OPCODE_OFFSET: u32 = 27;
pub const RD_OFFSET: u32 = 22;
pub const RS_OFFSET: u32 = 17;
pub const RT_OFFSET: u32 = 12;
pub const IMMEDIATE_OFFSET: u32 = 0;

/// Number of defined opcodes; encoded values at or above this abort.
pub const OPCODE_COUNT: u32 = 30;
