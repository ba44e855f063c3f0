use crate::labels::LabelMap;
use crate::table::Mnemonic;
use crate::{new_parser_error, process_directive, process_mnemonic, Result, Rule, Section};
use byteorder::ByteOrder;
use matches::debug_assert_matches;
use pest::iterators::Pair;
use pest::Span;
use tinker::{make_instruction, program_from_words, Opcode, Word};
use util::Endian;

/// Result of the second pass: both segments as byte streams, and whether a
/// `.code` directive was ever seen.
pub struct EmitPass {
    pub code: Vec<u8>,
    pub data: Vec<u8>,
    pub has_code: bool,
}

/// Second pass. Re-walks the parsed lines, enforcing section discipline:
/// data words go into a separate 64-bit buffer that lands after the code,
/// instructions are encoded (macros expanded) in source order.
pub fn resolve_program<'i>(lines: &[Pair<'i, Rule>], labels: &LabelMap<'i>) -> Result<EmitPass> {
    let mut section = None;
    let mut has_code = false;
    let mut code: Vec<Word> = Vec::new();
    let mut data: Vec<u64> = Vec::new();

    for line in lines {
        match line.as_rule() {
            Rule::directive_line => {
                let parsed = process_directive(line.clone())?;
                section = Some(parsed);
                has_code |= parsed == Section::Code;
            }

            Rule::label_line | Rule::EOI => {}

            Rule::statement_line => {
                let inner = line.clone().into_inner().next().unwrap();
                match inner.as_rule() {
                    Rule::data_word => {
                        if section != Some(Section::Data) {
                            return Err(new_parser_error(
                                line.as_span(),
                                "data must appear under a .data directive".to_owned(),
                            ));
                        }
                        let value = inner.as_str().parse::<u64>().map_err(|err| {
                            new_parser_error(
                                inner.as_span(),
                                format!("invalid data value: {}", err),
                            )
                        })?;
                        data.push(value);
                    }
                    Rule::instruction => {
                        if section != Some(Section::Code) {
                            return Err(new_parser_error(
                                line.as_span(),
                                "instructions must appear under a .code directive".to_owned(),
                            ));
                        }
                        process_instruction(inner, labels, &mut code)?;
                    }
                    _ => unreachable!(),
                }
            }

            _ => unreachable!(),
        }
    }

    let mut data_bytes = vec![0; data.len() * 8];
    Endian::write_u64_into(&data[..], &mut data_bytes[..]);

    Ok(EmitPass {
        code: program_from_words(&code[..]),
        data: data_bytes,
        has_code,
    })
}

fn process_instruction<'i>(
    pair: Pair<'i, Rule>,
    labels: &LabelMap<'i>,
    code: &mut Vec<Word>,
) -> Result<()> {
    debug_assert_matches!(pair.as_rule(), Rule::instruction);
    let inner = pair.into_inner().next().unwrap();
    let rule = inner.as_rule();
    let span = inner.as_span();
    let mut pairs = inner.into_inner();
    let mnemonic = process_mnemonic(&pairs.next().unwrap())?;

    match rule {
        Rule::instr_rrr => {
            let rd = process_register(pairs.next().unwrap())?;
            let rs = process_register(pairs.next().unwrap())?;
            let rt = process_register(pairs.next().unwrap())?;
            code.push(make_instruction(
                real_opcode(mnemonic, &span)?,
                rd,
                rs,
                rt,
                0,
            ));
        }

        Rule::instr_rr => {
            let rd = process_register(pairs.next().unwrap())?;
            let rs = process_register(pairs.next().unwrap())?;
            match mnemonic {
                Mnemonic::IN => code.push(make_instruction(Opcode::PRIV, rd, rs, 0, 3)),
                Mnemonic::OUT => code.push(make_instruction(Opcode::PRIV, rd, rs, 0, 4)),
                _ => code.push(make_instruction(
                    real_opcode(mnemonic, &span)?,
                    rd,
                    rs,
                    0,
                    0,
                )),
            }
        }

        Rule::instr_r => {
            let rd = process_register(pairs.next().unwrap())?;
            match mnemonic {
                Mnemonic::CLR => code.push(make_instruction(Opcode::XOR, rd, rd, rd, 0)),
                Mnemonic::PUSH => {
                    code.push(make_instruction(Opcode::MOVST, 31, rd, 0, -8));
                    code.push(make_instruction(Opcode::SUBI, 31, 0, 0, 8));
                }
                Mnemonic::POP => {
                    code.push(make_instruction(Opcode::MOVLD, rd, 31, 0, 0));
                    code.push(make_instruction(Opcode::ADDI, 31, 0, 0, 8));
                }
                _ => code.push(make_instruction(real_opcode(mnemonic, &span)?, rd, 0, 0, 0)),
            }
        }

        Rule::instr_rl => {
            let rd = process_register(pairs.next().unwrap())?;
            let literal = pairs.next().unwrap();
            if mnemonic == Mnemonic::LD {
                let value = process_ld_literal(literal, labels)?;
                emit_ld(rd, value, code);
            } else {
                let value = process_unsigned_literal(literal, labels)?;
                code.push(make_instruction(
                    real_opcode(mnemonic, &span)?,
                    rd,
                    0,
                    0,
                    value,
                ));
            }
        }

        Rule::instr_rrrl => {
            let rd = process_register(pairs.next().unwrap())?;
            let rs = process_register(pairs.next().unwrap())?;
            let rt = process_register(pairs.next().unwrap())?;
            let value = process_unsigned_literal(pairs.next().unwrap(), labels)?;
            code.push(make_instruction(
                real_opcode(mnemonic, &span)?,
                rd,
                rs,
                rt,
                value,
            ));
        }

        Rule::instr_brr => {
            let operand = pairs.next().unwrap();
            match operand.as_rule() {
                Rule::reg => {
                    let rd = process_register(operand)?;
                    code.push(make_instruction(Opcode::BRR, rd, 0, 0, 0));
                }
                Rule::literal => {
                    let value = process_signed_literal(operand, labels)?;
                    code.push(make_instruction(Opcode::BRRL, 0, 0, 0, value));
                }
                _ => unreachable!(),
            }
        }

        Rule::instr_mov => {
            let shape = pairs.next().unwrap();
            let shape_rule = shape.as_rule();
            let mut pairs = shape.into_inner();
            match shape_rule {
                Rule::mov_load => {
                    let rd = process_register(pairs.next().unwrap())?;
                    let (base, offset) = process_mem_operand(pairs.next().unwrap(), labels)?;
                    code.push(make_instruction(Opcode::MOVLD, rd, base, 0, offset));
                }
                Rule::mov_store => {
                    let (base, offset) = process_mem_operand(pairs.next().unwrap(), labels)?;
                    let rs = process_register(pairs.next().unwrap())?;
                    code.push(make_instruction(Opcode::MOVST, base, rs, 0, offset));
                }
                Rule::mov_rr => {
                    let rd = process_register(pairs.next().unwrap())?;
                    let rs = process_register(pairs.next().unwrap())?;
                    code.push(make_instruction(Opcode::MOVRR, rd, rs, 0, 0));
                }
                Rule::mov_rl => {
                    let rd = process_register(pairs.next().unwrap())?;
                    let value = process_mov_literal(pairs.next().unwrap(), labels)?;
                    code.push(make_instruction(Opcode::MOVRL, rd, 0, 0, value));
                }
                _ => unreachable!(),
            }
        }

        Rule::instr_none => match mnemonic {
            Mnemonic::RETURN => code.push(make_instruction(Opcode::RET, 0, 0, 0, 0)),
            Mnemonic::HALT => code.push(make_instruction(Opcode::PRIV, 0, 0, 0, 0)),
            _ => unreachable!(),
        },

        _ => unreachable!(),
    }

    Ok(())
}

/// Chunk offsets and following shift amounts for the `ld` expansion. The
/// last round shifts by four to make room for the final 4-bit chunk.
const LD_ROUNDS: [(u32, i16); 5] = [(52, 12), (40, 12), (28, 12), (16, 12), (4, 4)];

/// Materializes a full 64-bit value in `rd`: clear the register, then feed
/// the value in through five add/shift rounds plus a final add. Twelve
/// words, 48 bytes, matching the label pass delta.
fn emit_ld(rd: u8, value: u64, code: &mut Vec<Word>) {
    code.push(make_instruction(Opcode::XOR, rd, rd, rd, 0));
    for &(chunk_shift, shift_amount) in LD_ROUNDS.iter() {
        code.push(make_instruction(
            Opcode::ADDI,
            rd,
            0,
            0,
            ((value >> chunk_shift) & 0xFFF) as i16,
        ));
        code.push(make_instruction(Opcode::SHFTLI, rd, 0, 0, shift_amount));
    }
    code.push(make_instruction(Opcode::ADDI, rd, 0, 0, (value & 0xF) as i16));
}

fn real_opcode(mnemonic: Mnemonic, span: &Span) -> Result<Opcode> {
    mnemonic.opcode().ok_or_else(|| {
        new_parser_error(
            span.clone(),
            format!("no single opcode for mnemonic {:?}", mnemonic),
        )
    })
}

fn process_register(pair: Pair<Rule>) -> Result<u8> {
    debug_assert_matches!(pair.as_rule(), Rule::reg);
    let span = pair.as_span();
    let index_pair = pair.into_inner().next().unwrap();

    let index = index_pair
        .as_str()
        .parse::<u64>()
        .map_err(|err| new_parser_error(span.clone(), format!("invalid register: {}", err)))?;

    if index > 31 {
        Err(new_parser_error(
            span,
            format!("register index {} out of range 0..31", index),
        ))
    } else {
        Ok(index as u8)
    }
}

fn process_mem_operand<'i>(pair: Pair<'i, Rule>, labels: &LabelMap<'i>) -> Result<(u8, i16)> {
    debug_assert_matches!(pair.as_rule(), Rule::mem);
    let mut pairs = pair.into_inner();
    let base = process_register(pairs.next().unwrap())?;
    let offset = process_signed_literal(pairs.next().unwrap(), labels)?;
    Ok((base, offset))
}

/// A signed 12-bit literal (`brr` targets, memory offsets): numbers in
/// [-2048, 2047]. Labels resolve to their address, which must also fit —
/// label addresses start at 0x2000, so label operands never do.
fn process_signed_literal<'i>(pair: Pair<'i, Rule>, labels: &LabelMap<'i>) -> Result<i16> {
    debug_assert_matches!(pair.as_rule(), Rule::literal);
    let inner = pair.into_inner().next().unwrap();
    let span = inner.as_span();

    match inner.as_rule() {
        Rule::label => {
            let address = lookup_label(&inner, labels)?;
            if address > 2047 {
                Err(new_parser_error(
                    span,
                    format!("label address {:#x} does not fit a signed 12-bit literal", address),
                ))
            } else {
                Ok(address as i16)
            }
        }
        Rule::number => {
            let value = inner
                .as_str()
                .parse::<i64>()
                .map_err(|err| new_parser_error(span.clone(), format!("invalid literal: {}", err)))?;
            if value < -2048 || value > 2047 {
                Err(new_parser_error(
                    span,
                    format!("literal {} outside [-2048, 2047]", value),
                ))
            } else {
                Ok(value as i16)
            }
        }
        _ => unreachable!(),
    }
}

/// An unsigned 12-bit literal (immediate arithmetic, shifts, `priv`,
/// `mov rD, L`): numbers in [0, 4095], labels likewise bounded.
fn process_unsigned_literal<'i>(pair: Pair<'i, Rule>, labels: &LabelMap<'i>) -> Result<i16> {
    debug_assert_matches!(pair.as_rule(), Rule::literal);
    let inner = pair.into_inner().next().unwrap();
    let span = inner.as_span();

    match inner.as_rule() {
        Rule::label => {
            let address = lookup_label(&inner, labels)?;
            if address > 4095 {
                Err(new_parser_error(
                    span,
                    format!("label address {:#x} does not fit a 12-bit literal", address),
                ))
            } else {
                Ok(address as i16)
            }
        }
        Rule::number => {
            let value = inner
                .as_str()
                .parse::<u64>()
                .map_err(|err| new_parser_error(span.clone(), format!("invalid literal: {}", err)))?;
            if value > 4095 {
                Err(new_parser_error(
                    span,
                    format!("literal {} outside [0, 4095]", value),
                ))
            } else {
                Ok(value as i16)
            }
        }
        _ => unreachable!(),
    }
}

/// The `mov rd, L` literal: numbers take the full unsigned 12-bit range,
/// but a label operand to any `mov` shape is held to the 2047 bound, like
/// the memory-offset shapes.
fn process_mov_literal<'i>(pair: Pair<'i, Rule>, labels: &LabelMap<'i>) -> Result<i16> {
    debug_assert_matches!(pair.as_rule(), Rule::literal);
    let inner = pair.clone().into_inner().next().unwrap();

    match inner.as_rule() {
        Rule::label => {
            let address = lookup_label(&inner, labels)?;
            if address > 2047 {
                Err(new_parser_error(
                    inner.as_span(),
                    format!("label address {:#x} exceeds the mov label limit of 2047", address),
                ))
            } else {
                Ok(address as i16)
            }
        }
        Rule::number => process_unsigned_literal(pair, labels),
        _ => unreachable!(),
    }
}

/// The `ld` literal: any unsigned 64-bit number, or any label.
fn process_ld_literal<'i>(pair: Pair<'i, Rule>, labels: &LabelMap<'i>) -> Result<u64> {
    debug_assert_matches!(pair.as_rule(), Rule::literal);
    let inner = pair.into_inner().next().unwrap();
    let span = inner.as_span();

    match inner.as_rule() {
        Rule::label => lookup_label(&inner, labels),
        Rule::number => inner
            .as_str()
            .parse::<u64>()
            .map_err(|err| new_parser_error(span, format!("invalid literal: {}", err))),
        _ => unreachable!(),
    }
}

fn lookup_label<'i>(pair: &Pair<'i, Rule>, labels: &LabelMap<'i>) -> Result<u64> {
    labels
        .get(pair.as_str())
        .copied()
        .ok_or_else(|| new_parser_error(pair.as_span(), "label not found".to_owned()))
}
