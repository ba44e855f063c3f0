use crate::table::Mnemonic;
use crate::{new_parser_error, process_directive, process_mnemonic, Result, Rule, Section};
use matches::debug_assert_matches;
use pest::iterators::Pair;
use std::collections::HashMap;
use tinker::constants::{CODE_BEGIN, DATA_BEGIN};

/// Labels are keyed by their full source spelling, leading `:` included.
pub type LabelMap<'i> = HashMap<&'i str, u64>;

/// Result of the first pass: every label bound to an address, plus the
/// total size of both segments.
pub struct LabelPass<'i> {
    pub labels: LabelMap<'i>,
    pub code_size: u64,
    pub data_size: u64,
}

/// First pass. Walks the parsed lines with two address counters, one per
/// section. Label lines pile up on a pending stack; the next data or
/// instruction line binds them all to the current section address before
/// the counter advances. Labels left over at end of input bind to the
/// current section's end address.
pub fn populate_labels<'i>(lines: &[Pair<'i, Rule>]) -> Result<LabelPass<'i>> {
    let mut labels = HashMap::new();
    let mut pending: Vec<&'i str> = Vec::new();
    let mut section = None;
    let mut code_address = CODE_BEGIN;
    let mut data_address = DATA_BEGIN;

    for line in lines {
        match line.as_rule() {
            Rule::directive_line => {
                section = Some(process_directive(line.clone())?);
            }

            Rule::label_line => {
                let label = line.clone().into_inner().next().unwrap().as_str();
                pending.push(label);
            }

            Rule::statement_line => {
                let address = match section {
                    Some(Section::Code) => &mut code_address,
                    Some(Section::Data) => &mut data_address,
                    None => {
                        return Err(new_parser_error(
                            line.as_span(),
                            "statement appears before any .code or .data directive".to_owned(),
                        ));
                    }
                };

                for label in pending.drain(..) {
                    labels.entry(label).or_insert(*address);
                }

                *address += statement_delta(line.clone())?;
            }

            Rule::EOI => {}

            _ => unreachable!(),
        }
    }

    let end_address = match section {
        Some(Section::Data) => data_address,
        _ => code_address,
    };
    for label in pending.drain(..) {
        labels.entry(label).or_insert(end_address);
    }

    Ok(LabelPass {
        labels,
        code_size: code_address - CODE_BEGIN,
        data_size: data_address - DATA_BEGIN,
    })
}

fn statement_delta(pair: Pair<Rule>) -> Result<u64> {
    debug_assert_matches!(pair.as_rule(), Rule::statement_line);
    let inner = pair.into_inner().next().unwrap();

    match inner.as_rule() {
        Rule::data_word => Ok(8),
        Rule::instruction => Ok(instruction_mnemonic(inner)?.address_delta()),
        _ => unreachable!(),
    }
}

fn instruction_mnemonic(pair: Pair<Rule>) -> Result<Mnemonic> {
    debug_assert_matches!(pair.as_rule(), Rule::instruction);
    let inner = pair.into_inner().next().unwrap();
    process_mnemonic(&inner.into_inner().next().unwrap())
}
