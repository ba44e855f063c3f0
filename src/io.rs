use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Console seam for the privileged input/output operations.
///
/// The simulator binary talks to the real terminal through
/// [`StdIo`](struct.StdIo.html); tests script the console with
/// [`BufferedIo`](struct.BufferedIo.html) instead.
pub trait IoHandler {
    /// Reads one line from the input device, trailing newline included.
    fn read_line(&mut self) -> io::Result<String>;

    /// Writes an unsigned decimal integer followed by a newline.
    fn write_int(&mut self, value: u64);

    /// Writes a single raw byte.
    fn write_char(&mut self, value: u8);
}

/// Standard input/output implementation used by the simulator binary.
#[derive(Default)]
pub struct StdIo;

impl IoHandler for StdIo {
    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        let stdin = io::stdin();
        stdin.lock().read_line(&mut line)?;
        Ok(line)
    }

    fn write_int(&mut self, value: u64) {
        println!("{}", value);
    }

    fn write_char(&mut self, value: u8) {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        let _ = lock.write_all(&[value]);
        let _ = lock.flush();
    }
}

/// In-memory console: scripted input lines, captured output.
#[derive(Default)]
pub struct BufferedIo {
    pub input: VecDeque<String>,
    pub ints: Vec<u64>,
    pub chars: Vec<u8>,
}

impl BufferedIo {
    pub fn new() -> BufferedIo {
        Default::default()
    }

    pub fn with_input(lines: &[&str]) -> BufferedIo {
        BufferedIo {
            input: lines.iter().map(|line| (*line).to_owned()).collect(),
            ..Default::default()
        }
    }
}

impl IoHandler for BufferedIo {
    fn read_line(&mut self) -> io::Result<String> {
        self.input
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no buffered input left"))
    }

    fn write_int(&mut self, value: u64) {
        self.ints.push(value);
    }

    fn write_char(&mut self, value: u8) {
        self.chars.push(value);
    }
}
