use tinker::Opcode;
use util::EnumFromStr;
use util_derive::EnumFromStr;

/// The seven operand formats instructions are dispatched by.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum InstrFormat {
    /// `op rD, rS, rT`
    RRR,
    /// `op rD, rS`
    RR,
    /// `op rD`
    R,
    /// `op rD, L`
    RL,
    /// `op rD, rS, rT, L`
    RRRL,
    /// `brr rD` or `brr L`
    BRR,
    /// The four `mov` shapes.
    MOV,
    /// No operands.
    NONE,
}

/// Every mnemonic the assembler accepts: the real instructions plus the
/// macros that expand into real instructions at emission time. Lookup is
/// case-sensitive on the lowercase spelling (`"add".parse()` succeeds,
/// `"ADD".parse()` does not).
#[derive(Clone, Copy, PartialEq, Eq, Debug, EnumFromStr)]
pub enum Mnemonic {
    ADD,
    ADDI,
    SUB,
    SUBI,
    MUL,
    DIV,
    AND,
    OR,
    XOR,
    NOT,
    SHFTR,
    SHFTRI,
    SHFTL,
    SHFTLI,
    BR,
    BRR,
    BRNZ,
    CALL,
    RETURN,
    BRGT,
    PRIV,
    MOV,
    ADDF,
    SUBF,
    MULF,
    DIVF,
    IN,
    OUT,
    CLR,
    LD,
    PUSH,
    POP,
    HALT,
}

impl Mnemonic {
    /// The operand format this mnemonic is parsed and dispatched by.
    pub fn format(self) -> InstrFormat {
        use Mnemonic::*;

        match self {
            ADD | SUB | MUL | DIV | AND | OR | XOR | SHFTR | SHFTL | BRGT | ADDF | SUBF
            | MULF | DIVF => InstrFormat::RRR,
            NOT | BRNZ | IN | OUT => InstrFormat::RR,
            BR | CALL | CLR | PUSH | POP => InstrFormat::R,
            ADDI | SUBI | SHFTRI | SHFTLI | LD => InstrFormat::RL,
            PRIV => InstrFormat::RRRL,
            BRR => InstrFormat::BRR,
            MOV => InstrFormat::MOV,
            RETURN | HALT => InstrFormat::NONE,
        }
    }

    /// The opcode of a single-word instruction. `None` for the macros and
    /// for the mnemonics whose opcode depends on the operand shape
    /// (`brr`, `mov`).
    pub fn opcode(self) -> Option<Opcode> {
        use Mnemonic::*;

        match self {
            ADD => Some(Opcode::ADD),
            ADDI => Some(Opcode::ADDI),
            SUB => Some(Opcode::SUB),
            SUBI => Some(Opcode::SUBI),
            MUL => Some(Opcode::MUL),
            DIV => Some(Opcode::DIV),
            AND => Some(Opcode::AND),
            OR => Some(Opcode::OR),
            XOR => Some(Opcode::XOR),
            NOT => Some(Opcode::NOT),
            SHFTR => Some(Opcode::SHFTR),
            SHFTRI => Some(Opcode::SHFTRI),
            SHFTL => Some(Opcode::SHFTL),
            SHFTLI => Some(Opcode::SHFTLI),
            BR => Some(Opcode::BR),
            BRNZ => Some(Opcode::BRNZ),
            CALL => Some(Opcode::CALL),
            RETURN => Some(Opcode::RET),
            BRGT => Some(Opcode::BRGT),
            PRIV => Some(Opcode::PRIV),
            ADDF => Some(Opcode::ADDF),
            SUBF => Some(Opcode::SUBF),
            MULF => Some(Opcode::MULF),
            DIVF => Some(Opcode::DIVF),
            BRR | MOV | IN | OUT | CLR | LD | PUSH | POP | HALT => None,
        }
    }

    /// Whether this mnemonic expands into other instructions.
    pub fn is_macro(self) -> bool {
        use Mnemonic::*;

        match self {
            IN | OUT | CLR | LD | PUSH | POP | HALT => true,
            _ => false,
        }
    }

    /// How many bytes a line holding this mnemonic advances the address
    /// counter in the label pass. Macros advance by the total size of
    /// their expansion.
    pub fn address_delta(self) -> u64 {
        match self {
            Mnemonic::LD => 48,
            Mnemonic::PUSH | Mnemonic::POP => 8,
            _ => 4,
        }
    }
}
