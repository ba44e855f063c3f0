use super::{constants, Endian};
use byteorder::ByteOrder;

/// Read access to a byte-addressed storage unit.
pub trait Storage {
    /// Total length of the storage in bytes.
    fn length(&self) -> u64;

    /// Checks whether `[address..address+length]` is addressable.
    fn check_range(&self, address: u64, length: u64) -> bool;

    /// Immutably borrows the byte range starting at `address`.
    ///
    /// # Errors
    /// Returns an error if the range is not addressable.
    fn borrow_slice(&self, address: u64, length: u64) -> Result<&[u8], ()>;

    /// Reads a 32-bit instruction word at the given address.
    ///
    /// The conversion is performed with the endianness defined by the
    /// [`Endian`](../type.Endian.html) type alias.
    fn read_word(&self, address: u64) -> Result<u32, ()> {
        Ok(Endian::read_u32(
            self.borrow_slice(address, u64::from(constants::WORD_BYTES))?,
        ))
    }

    /// Reads a 64-bit value at the given address.
    fn read_dword(&self, address: u64) -> Result<u64, ()> {
        Ok(Endian::read_u64(
            self.borrow_slice(address, u64::from(constants::DWORD_BYTES))?,
        ))
    }
}

/// Write access on top of [`Storage`](trait.Storage.html).
pub trait StorageMut: Storage {
    /// Mutably borrows the byte range starting at `address`.
    ///
    /// # Errors
    /// Returns an error if the range is not addressable.
    fn borrow_slice_mut(&mut self, address: u64, length: u64) -> Result<&mut [u8], ()>;

    /// Writes a 64-bit value to the given address.
    fn write_dword(&mut self, address: u64, value: u64) -> Result<(), ()> {
        Endian::write_u64(
            self.borrow_slice_mut(address, u64::from(constants::DWORD_BYTES))?,
            value,
        );
        Ok(())
    }

    /// Copies a loaded segment into place.
    fn load_segment(&mut self, address: u64, bytes: &[u8]) -> Result<(), ()> {
        self.borrow_slice_mut(address, bytes.len() as u64)?
            .copy_from_slice(bytes);
        Ok(())
    }
}

/// The Tinker memory image: a fixed 512 KiB block, every byte initialized
/// to `0xFF` before the loader copies the segments in.
///
/// # Examples
/// ```
/// use tinker::{constants, Memory, Storage};
///
/// let memory = Memory::new();
/// assert_eq!(memory.length(), constants::MEM_SIZE);
/// assert_eq!(memory.read_word(0), Ok(0xFFFF_FFFF));
/// assert_eq!(memory.read_word(constants::MEM_SIZE), Err(()));
/// ```
pub struct Memory {
    data: Vec<u8>,
}

impl Memory {
    pub fn new() -> Memory {
        Memory {
            data: vec![0xFF; constants::MEM_SIZE as usize],
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data[..]
    }
}

impl Default for Memory {
    fn default() -> Memory {
        Memory::new()
    }
}

impl Storage for Memory {
    fn length(&self) -> u64 {
        self.data.len() as u64
    }

    fn check_range(&self, address: u64, length: u64) -> bool {
        match address.checked_add(length) {
            Some(end) => end <= self.data.len() as u64,
            None => false,
        }
    }

    fn borrow_slice(&self, address: u64, length: u64) -> Result<&[u8], ()> {
        if self.check_range(address, length) {
            Ok(&self.data[address as usize..(address + length) as usize])
        } else {
            Err(())
        }
    }
}

impl StorageMut for Memory {
    fn borrow_slice_mut(&mut self, address: u64, length: u64) -> Result<&mut [u8], ()> {
        if self.check_range(address, length) {
            Ok(&mut self.data[address as usize..(address + length) as usize])
        } else {
            Err(())
        }
    }
}
