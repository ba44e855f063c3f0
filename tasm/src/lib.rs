//! Assembler for the [Tinker](../tinker/index.html) register machine.
//!
//! The main entry point is [`assemble`](fn.assemble.html), which takes
//! Tinker assembly text and produces the in-memory
//! [`ObjectFile`](../tobj/struct.ObjectFile.html) ready to be written with
//! [`tobj::write_file`](../tobj/fn.write_file.html).
//!
//! Parsing is implemented with [pest], and the crate's
//! [`Error`](type.Error.html) type is an alias of `pest::error::Error`, so
//! every diagnostic — parse failures as well as semantic errors such as a
//! literal out of range — pretty-prints with a source span.
//!
//! # The Tinker Assembly Language
//!
//! The language is line-oriented; the first character of a line decides
//! its meaning:
//!
//! First char | Meaning
//! -----------|---------------------------------------------
//! `;`        | comment until end of line
//! `.`        | section directive: `.code` or `.data`
//! `:`        | label definition (the name includes the `:`)
//! tab        | instruction, or a data word under `.data`
//! blank      | skipped
//!
//! A data word is a tabbed line holding a single unsigned decimal integer;
//! it occupies eight bytes. Code is loaded at `0x2000`, data at `0x10000`.
//! Labels may pile up on consecutive lines; they all name the address of
//! the next data word or instruction.
//!
//! Registers are written `r0` through `r31`; `r31` is the stack pointer by
//! convention. Literals are decimal integers or label references
//! (`:name`), range-checked per instruction.
//!
//! ## Instructions
//!
//! Mnemonic | Syntax                  | Effect
//! ---------|-------------------------|--------------------------------
//! `add`    | `add rd, rs, rt`        | signed add
//! `addi`   | `addi rd, L`            | `rd += L` (unsigned 12-bit)
//! `sub`    | `sub rd, rs, rt`        | signed subtract
//! `subi`   | `subi rd, L`            | `rd -= L`
//! `mul`    | `mul rd, rs, rt`        | signed multiply
//! `div`    | `div rd, rs, rt`        | signed divide
//! `and`    | `and rd, rs, rt`        | bitwise and
//! `or`     | `or rd, rs, rt`         | bitwise or
//! `xor`    | `xor rd, rs, rt`        | bitwise exclusive-or
//! `not`    | `not rd, rs`            | bitwise complement
//! `shftr`  | `shftr rd, rs, rt`      | logical shift right
//! `shftri` | `shftri rd, L`          | `rd >>= L`
//! `shftl`  | `shftl rd, rs, rt`      | logical shift left
//! `shftli` | `shftli rd, L`          | `rd <<= L`
//! `br`     | `br rd`                 | jump to `rd`
//! `brr`    | `brr rd` or `brr L`     | relative jump
//! `brnz`   | `brnz rd, rs`           | jump to `rd` if `rs != 0`
//! `brgt`   | `brgt rd, rs, rt`       | jump to `rd` if `rs > rt`
//! `call`   | `call rd`               | save return address, jump to `rd`
//! `return` | `return`                | jump to the saved return address
//! `priv`   | `priv rd, rs, rt, L`    | privileged operation
//! `mov`    | four shapes, see below  |
//! `addf`   | `addf rd, rs, rt`       | double-precision add
//! `subf`   | `subf rd, rs, rt`       | double-precision subtract
//! `mulf`   | `mulf rd, rs, rt`       | double-precision multiply
//! `divf`   | `divf rd, rs, rt`       | double-precision divide
//!
//! The four `mov` shapes: `mov rd, (rs)(L)` loads eight bytes from memory,
//! `mov (rd)(L), rs` stores eight bytes, `mov rd, rs` copies a register,
//! and `mov rd, L` splices `L` into the low 12 bits of `rd`.
//!
//! ## Macros
//!
//! Macros expand into real instructions at emission time:
//!
//! Mnemonic | Syntax        | Expansion
//! ---------|---------------|--------------------------------------------
//! `clr`    | `clr rd`      | `xor rd, rd, rd`
//! `halt`   | `halt`        | `priv` with sub-code 0
//! `in`     | `in rd, rs`   | `priv` with sub-code 3 (console input)
//! `out`    | `out rd, rs`  | `priv` with sub-code 4 (console output)
//! `push`   | `push rs`     | store below the stack pointer, then `subi r31, 8`
//! `pop`    | `pop rd`      | load from the stack pointer, then `addi r31, 8`
//! `ld`     | `ld rd, V`    | twelve words materializing the 64-bit value `V`
//!
//! `ld` accepts any unsigned 64-bit value or any label; it is also the
//! only way to put a label address into a register.
//!
//! [pest]: https://docs.rs/pest/

mod instructions;
mod labels;
mod parser;
mod table;


pub use crate::parser::{Rule, TinkerParser};

use crate::table::Mnemonic;
use matches::debug_assert_matches;
use pest::iterators::Pair;
use pest::{Parser, Position, Span};
use tobj::ObjectFile;

pub type Error = pest::error::Error<Rule>;

pub type Result<T> = std::result::Result<T, Error>;

/// Longest accepted source line, in bytes.
const MAX_LINE_BYTES: usize = 255;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Section {
    Code,
    Data,
}

/// Assembles Tinker source text into an object file.
///
/// The input is parsed once; the first pass binds every label to an
/// address, the second pass encodes the program against the completed
/// label map, so forward references work.
pub fn assemble(input: &str) -> Result<ObjectFile> {
    check_line_lengths(input)?;

    let program = TinkerParser::parse(Rule::program, input)?.next().unwrap();
    let lines: Vec<Pair<Rule>> = program.into_inner().collect();

    let label_pass = labels::populate_labels(&lines[..])?;
    let emit = instructions::resolve_program(&lines[..], &label_pass.labels)?;

    if !emit.has_code {
        return Err(Error::new_from_pos(
            pest::error::ErrorVariant::CustomError {
                message: "program must contain at least one .code directive".to_owned(),
            },
            Position::from_start(input),
        ));
    }

    debug_assert_eq!(emit.code.len() as u64, label_pass.code_size);
    debug_assert_eq!(emit.data.len() as u64, label_pass.data_size);

    Ok(ObjectFile::from(emit.code, emit.data))
}

fn check_line_lengths(input: &str) -> Result<()> {
    let mut offset = 0;
    for line in input.split('\n') {
        if line.len() > MAX_LINE_BYTES {
            let message = format!("line longer than {} characters", MAX_LINE_BYTES);
            return Err(match Position::new(input, offset) {
                Some(position) => Error::new_from_pos(
                    pest::error::ErrorVariant::CustomError { message },
                    position,
                ),
                None => Error::new_from_pos(
                    pest::error::ErrorVariant::CustomError { message },
                    Position::from_start(input),
                ),
            });
        }
        offset += line.len() + 1;
    }
    Ok(())
}

fn new_parser_error(span: Span, message: String) -> Error {
    Error::new_from_span(pest::error::ErrorVariant::CustomError { message }, span)
}

fn process_directive(pair: Pair<Rule>) -> Result<Section> {
    debug_assert_matches!(pair.as_rule(), Rule::directive_line);
    let name = pair.into_inner().next().unwrap();

    match name.as_str() {
        "code" => Ok(Section::Code),
        "data" => Ok(Section::Data),
        _ => Err(new_parser_error(
            name.as_span(),
            format!("invalid directive .{}", name.as_str()),
        )),
    }
}

fn process_mnemonic(pair: &Pair<Rule>) -> Result<Mnemonic> {
    pair.as_str()
        .parse()
        .map_err(|err| new_parser_error(pair.as_span(), format!("{}", err)))
}
