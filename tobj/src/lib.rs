//! The Tinker object file format.
//!
//! An object file is a fixed 40-byte header followed by the code segment
//! (32-bit little-endian instruction words) and the data segment (64-bit
//! little-endian words). The header records where each segment is loaded
//! and how many bytes it occupies.

use byteorder::{ReadBytesExt, WriteBytesExt};
use std::fs::File;
use std::io::prelude::*;
use std::io::{BufReader, BufWriter};
use std::mem;
use std::path::Path;
use util::Endian;

/// The only defined file type.
pub const FILE_TYPE: u64 = 0;

/// Load address of the code segment.
pub const CODE_BEGIN: u64 = 0x2000;

/// Load address of the data segment.
pub const DATA_BEGIN: u64 = 0x10000;

/// Size of the serialized [`ObjectHeader`](struct.ObjectHeader.html) in bytes.
pub const HEADER_BYTES: usize = 5 * mem::size_of::<u64>();

/// The fixed object file header. All fields are little-endian on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectHeader {
    pub file_type: u64,
    pub code_begin: u64,
    pub code_size: u64,
    pub data_begin: u64,
    pub data_size: u64,
}

/// An object file held in memory: header plus both segment payloads.
///
/// The constructors keep the header sizes equal to the payload lengths, so a
/// written file is always internally consistent.
#[derive(Debug, PartialEq)]
pub struct ObjectFile {
    header: ObjectHeader,
    code: Vec<u8>,
    data: Vec<u8>,
}

impl ObjectFile {
    /// Constructs an object file with the standard segment origins.
    pub fn from(code: Vec<u8>, data: Vec<u8>) -> ObjectFile {
        ObjectFile {
            header: ObjectHeader {
                file_type: FILE_TYPE,
                code_begin: CODE_BEGIN,
                code_size: code.len() as u64,
                data_begin: DATA_BEGIN,
                data_size: data.len() as u64,
            },
            code,
            data,
        }
    }

    pub fn copy_from(code: &[u8], data: &[u8]) -> ObjectFile {
        ObjectFile::from(Vec::from(code), Vec::from(data))
    }

    pub fn header(&self) -> &ObjectHeader {
        &self.header
    }

    pub fn code(&self) -> &[u8] {
        &self.code[..]
    }

    pub fn data(&self) -> &[u8] {
        &self.data[..]
    }

    pub fn required_size(&self) -> usize {
        HEADER_BYTES + self.code.len() + self.data.len()
    }
}

pub fn read<R: Read>(reader: &mut R) -> std::io::Result<ObjectFile> {
    let header = ObjectHeader {
        file_type: reader.read_u64::<Endian>()?,
        code_begin: reader.read_u64::<Endian>()?,
        code_size: reader.read_u64::<Endian>()?,
        data_begin: reader.read_u64::<Endian>()?,
        data_size: reader.read_u64::<Endian>()?,
    };

    let mut code = vec![0; header.code_size as usize];
    let mut data = vec![0; header.data_size as usize];

    reader.read_exact(&mut code)?;
    reader.read_exact(&mut data)?;

    Ok(ObjectFile { header, code, data })
}

pub fn write<W: Write>(writer: &mut W, object: &ObjectFile) -> std::io::Result<()> {
    writer.write_u64::<Endian>(object.header.file_type)?;
    writer.write_u64::<Endian>(object.header.code_begin)?;
    writer.write_u64::<Endian>(object.header.code_size)?;
    writer.write_u64::<Endian>(object.header.data_begin)?;
    writer.write_u64::<Endian>(object.header.data_size)?;
    writer.write_all(&object.code[..])?;
    writer.write_all(&object.data[..])?;
    Ok(())
}

pub trait ReadObjExt: Read + Sized {
    fn read_obj(&mut self) -> std::io::Result<ObjectFile> {
        read(self)
    }
}

impl<R: Read + Sized> ReadObjExt for R {}

pub trait WriteObjExt: Write + Sized {
    fn write_obj(&mut self, object: &ObjectFile) -> std::io::Result<()> {
        write(self, object)
    }
}

impl<W: Write + Sized> WriteObjExt for W {}

pub fn read_file<P: AsRef<Path>>(path: P) -> std::io::Result<ObjectFile> {
    BufReader::new(File::open(path)?).read_obj()
}

pub fn write_file<P: AsRef<Path>>(path: P, object: &ObjectFile) -> std::io::Result<()> {
    BufWriter::new(File::create(path)?).write_obj(object)
}
