//! Runs Tinker object files on the processor model.

use std::fmt;
use tinker::{constants, ExitCode, IoHandler, Memory, Processor, StorageMut};
use tobj::ObjectFile;


/// Why an object file could not be loaded into processor memory.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LoadError {
    /// The code segment does not fit between the code and data origins.
    CodeSegmentTooLarge,
    /// A segment does not fit inside processor memory.
    SegmentOutOfRange,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let message = match self {
            LoadError::CodeSegmentTooLarge => "code segment is too large",
            LoadError::SegmentOutOfRange => "segment does not fit in memory",
        };
        f.write_str(message)
    }
}

impl std::error::Error for LoadError {}

/// Copies the object file's segments into the memory image at the
/// addresses its header names.
pub fn load_memory(object: &ObjectFile, memory: &mut Memory) -> Result<(), LoadError> {
    let header = object.header();

    if header.code_size > constants::DATA_BEGIN - constants::CODE_BEGIN {
        return Err(LoadError::CodeSegmentTooLarge);
    }

    memory
        .load_segment(header.code_begin, object.code())
        .map_err(|_| LoadError::SegmentOutOfRange)?;
    memory
        .load_segment(header.data_begin, object.data())
        .map_err(|_| LoadError::SegmentOutOfRange)?;

    Ok(())
}

/// Loads and runs an object file against a fresh processor and memory
/// image. Returns the final processor and memory so callers can inspect
/// them alongside the exit code.
pub fn run_object(
    object: &ObjectFile,
    io: &mut dyn IoHandler,
) -> Result<(Processor, Memory, ExitCode), LoadError> {
    let mut memory = Memory::new();
    load_memory(object, &mut memory)?;

    let mut processor = Processor::new();
    let exit_code = processor.run(&mut memory, io);

    Ok((processor, memory, exit_code))
}
