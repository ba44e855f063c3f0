use crate::{constants, Endian, Immediate, Word};
use byteorder::ByteOrder;
use num::traits::ToPrimitive;
use num_derive::{FromPrimitive, ToPrimitive};

/// Tinker instruction set.
///
/// Every instruction is one 32-bit word:
///
/// | Bits 31-27 | Bits 26-22 | Bits 21-17 | Bits 16-12 | Bits 11-0 |
/// |------------|------------|------------|------------|-----------|
/// | opcode     | rd         | rs         | rt         | L         |
///
/// Fields an instruction does not use are encoded as zero. `L` is a 12-bit
/// literal, two's complement where the instruction treats it as signed.
///
/// The discriminants are the opcodes, so `ToPrimitive`/`FromPrimitive`
/// convert between the enum and the 5-bit field.
#[derive(Clone, Copy, PartialEq, Eq, Debug, ToPrimitive, FromPrimitive)]
pub enum Opcode {
    /// `rd = rs & rt`.
    AND,
    /// `rd = rs | rt`.
    OR,
    /// `rd = rs ^ rt`.
    XOR,
    /// `rd = !rs`.
    NOT,
    /// `rd = rs >> rt` (logical).
    SHFTR,
    /// `rd = rd >> L` (logical, in place; L is the unsigned low 12 bits).
    SHFTRI,
    /// `rd = rs << rt`.
    SHFTL,
    /// `rd = rd << L` (in place).
    SHFTLI,
    /// Branch: `pc = rd`.
    BR,
    /// Relative branch: `pc += rd`.
    BRR,
    /// Relative branch: `pc += L` (L sign-extended from bit 11).
    BRRL,
    /// Branch if not zero: `pc = rd` when `rs != 0`.
    BRNZ,
    /// Call: the address of the next instruction is written to the eight
    /// bytes below the stack pointer, then `pc = rd`. The stack pointer
    /// itself does not move; the `push`/`pop` assembler macros handle that.
    CALL,
    /// Return: `pc` is read back from the eight bytes below the stack
    /// pointer.
    RET,
    /// Branch if greater: `pc = rd` when `rs > rt` (unsigned).
    BRGT,
    /// Privileged operation, selected by L: 0 halt, 1 supervisor mode,
    /// 2 user mode, 3 console input, 4 console output.
    PRIV,
    /// Load: `rd = mem[rs + L]` (eight bytes, L sign-extended).
    MOVLD,
    /// `rd = rs`.
    MOVRR,
    /// Splices L into the low 12 bits of `rd`.
    MOVRL,
    /// Store: `mem[rd + L] = rs` (eight bytes, L sign-extended).
    MOVST,
    /// Floating-point add; registers reinterpreted as IEEE 754 doubles.
    ADDF,
    /// Floating-point subtract.
    SUBF,
    /// Floating-point multiply.
    MULF,
    /// Floating-point divide; division by zero aborts.
    DIVF,
    /// Signed add: `rd = rs + rt`.
    ADD,
    /// `rd += L` (in place; L is the unsigned low 12 bits).
    ADDI,
    /// Signed subtract: `rd = rs - rt`.
    SUB,
    /// `rd -= L` (in place).
    SUBI,
    /// Signed multiply: `rd = rs * rt`.
    MUL,
    /// Signed divide: `rd = rs / rt`; division by zero aborts.
    DIV,
}

macro_rules! impl_enum_display {
    ($e:ty) => {
        impl std::fmt::Display for $e {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                std::fmt::Debug::fmt(self, f)
            }
        }
    };
}

impl_enum_display!(Opcode);

#[inline]
pub fn enum_to_u32<T: ToPrimitive + Copy>(val: T) -> u32 {
    val.to_u32().unwrap()
}

/// Encodes an instruction word from its five fields. The literal is
/// truncated to its 12-bit field.
#[inline]
pub fn make_instruction(oc: Opcode, rd: u8, rs: u8, rt: u8, imm: Immediate) -> Word {
    ((enum_to_u32(oc) << constants::OPCODE_OFFSET) & constants::OPCODE_MASK)
        | ((u32::from(rd) << constants::RD_OFFSET) & constants::RD_MASK)
        | ((u32::from(rs) << constants::RS_OFFSET) & constants::RS_MASK)
        | ((u32::from(rt) << constants::RT_OFFSET) & constants::RT_MASK)
        | (((imm as u32) << constants::IMMEDIATE_OFFSET) & constants::IMMEDIATE_MASK)
}

/// Constructs an instruction word; register fields are plain indices.
#[macro_export]
macro_rules! instr {
    ($opcode:ident, $rd:expr, $rs:expr, $rt:expr, $imm:expr) => {
        $crate::make_instruction($crate::Opcode::$opcode, $rd, $rs, $rt, $imm)
    };
}

/// Constructs the halting [`Opcode::PRIV`](enum.Opcode.html#variant.PRIV)
/// instruction.
#[macro_export]
macro_rules! halt {
    () => {
        $crate::instr!(PRIV, 0, 0, 0, 0)
    };
}

/// The decoded fields of a fetched instruction word.
///
/// The literal is held in a 16-bit slot and therefore aliases the low four
/// bits of `rt`; [`imm12`](#method.imm12) and
/// [`imm12_signed`](#method.imm12_signed) recover the actual 12-bit field.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct InstructionFields {
    pub opcode: u8,
    pub rd: usize,
    pub rs: usize,
    pub rt: usize,
    pub imm: Immediate,
}

impl InstructionFields {
    /// The literal as its unsigned low 12 bits.
    #[inline]
    pub fn imm12(self) -> u16 {
        (self.imm as u16) & (constants::IMMEDIATE_MASK as u16)
    }

    /// The literal sign-extended from bit 11.
    #[inline]
    pub fn imm12_signed(self) -> i16 {
        let masked = self.imm12();
        if masked & (constants::IMMEDIATE_SIGN_MASK as u16) != 0 {
            (masked | !(constants::IMMEDIATE_MASK as u16)) as i16
        } else {
            masked as i16
        }
    }
}

/// Splits an instruction word into its five fields.
#[inline]
pub fn decode_instruction(word: Word) -> InstructionFields {
    InstructionFields {
        opcode: ((word & constants::OPCODE_MASK) >> constants::OPCODE_OFFSET) as u8,
        rd: ((word & constants::RD_MASK) >> constants::RD_OFFSET) as usize,
        rs: ((word & constants::RS_MASK) >> constants::RS_OFFSET) as usize,
        rt: ((word & constants::RT_MASK) >> constants::RT_OFFSET) as usize,
        imm: ((word & constants::IMMEDIATE_SLOT_MASK) >> constants::IMMEDIATE_OFFSET) as i16,
    }
}

/// Packs instruction words into the little-endian byte stream they occupy
/// in memory and in object files.
pub fn program_from_words(words: &[Word]) -> Vec<u8> {
    let mut bytes = vec![0; words.len() * constants::WORD_BYTES as usize];
    Endian::write_u32_into(words, &mut bytes[..]);
    bytes
}
