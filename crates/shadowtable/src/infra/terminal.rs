//! Secret acquisition from the controlling terminal
//!
//! Echo is switched off through an [`EchoControl`] implementation for exactly
//! the duration of the read. The [`EchoGuard`] restores it on every exit path:
//! success, read errors, EOF, Ctrl-C and unwinding.
//!
//! While the guard is held the terminal also stops generating signals and
//! delivers input byte by byte, so Ctrl-C arrives as `0x03` and is turned into
//! an error instead of killing the process with echo still off.

use crate::constants::{SECRET_BUFFER_CAPACITY, TTY_PATH};
use crate::domain::secret::Secret;
use crate::error::{Result, TableError};
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::os::fd::AsRawFd;
use termios::{ECHO, ICANON, ISIG, TCSANOW, Termios, VMIN, VTIME, tcflag_t, tcsetattr};
use zeroize::{Zeroize, Zeroizing};

const CTRL_C: u8 = 0x03;
const CTRL_D: u8 = 0x04;
const BACKSPACE: u8 = 0x08;
const CTRL_U: u8 = 0x15;
const DELETE: u8 = 0x7f;

/// Capability to toggle terminal echo
pub trait EchoControl {
    fn disable(&mut self) -> io::Result<()>;
    fn enable(&mut self) -> io::Result<()>;
}

/// Echo suppression held for the lifetime of the guard
///
/// Dropping the guard re-enables echo and prints the newline the user typed
/// but the terminal did not show.
pub struct EchoGuard<'a, E: EchoControl, W: Write> {
    control: &'a mut E,
    output: &'a mut W,
}

impl<'a, E: EchoControl, W: Write> EchoGuard<'a, E, W> {
    pub fn acquire(control: &'a mut E, output: &'a mut W) -> Result<Self> {
        control.disable().map_err(TableError::Terminal)?;
        Ok(Self { control, output })
    }
}

impl<E: EchoControl, W: Write> Drop for EchoGuard<'_, E, W> {
    fn drop(&mut self) {
        if let Err(e) = self.control.enable() {
            log::warn!("failed to restore terminal echo: {}", e);
        }
        let _ = writeln!(self.output);
        let _ = self.output.flush();
    }
}

/// Password bytes that are wiped on drop and never left behind by a reallocation
struct SecretBuffer {
    bytes: Zeroizing<Vec<u8>>,
}

impl SecretBuffer {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Zeroizing::new(Vec::with_capacity(capacity)),
        }
    }

    fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    fn push(&mut self, byte: u8) {
        if self.bytes.len() == self.bytes.capacity() {
            let mut grown = Zeroizing::new(Vec::with_capacity(self.bytes.capacity().max(1) * 2));
            grown.extend_from_slice(&self.bytes);
            // the old allocation is wiped as it is dropped here
            self.bytes = grown;
        }
        self.bytes.push(byte);
    }

    /// Remove the last UTF-8 character
    fn pop_char(&mut self) {
        while let Some(byte) = self.bytes.pop() {
            if byte & 0xC0 != 0x80 {
                break;
            }
        }
    }

    fn clear(&mut self) {
        self.bytes.zeroize();
    }

    fn into_secret(mut self) -> Result<Secret> {
        match String::from_utf8(std::mem::take(&mut *self.bytes)) {
            Ok(value) => Ok(Secret::new(value)),
            Err(e) => {
                e.into_bytes().zeroize();
                Err(TableError::Io(io::Error::new(
                    io::ErrorKind::InvalidData,
                    "password is not valid UTF-8",
                )))
            }
        }
    }
}

fn unexpected_eof() -> TableError {
    TableError::Io(io::Error::new(
        io::ErrorKind::UnexpectedEof,
        "input ended before a newline",
    ))
}

/// Prompt for and read one line with echo disabled
///
/// Input is consumed one byte at a time up to the first `\n` or `\r`, which
/// is not part of the secret. Backspace/Delete erase a character and Ctrl-U
/// the whole line. Ctrl-C fails with [`io::ErrorKind::Interrupted`]; input that
/// ends (or Ctrl-D on an empty line) before a newline fails with
/// [`io::ErrorKind::UnexpectedEof`].
pub fn read_secret<E, R, W>(
    prompt: &str,
    control: &mut E,
    input: &mut R,
    output: &mut W,
) -> Result<Secret>
where
    E: EchoControl,
    R: Read,
    W: Write,
{
    write!(output, "{}", prompt)?;
    output.flush()?;

    let _guard = EchoGuard::acquire(control, output)?;

    let mut buffer = SecretBuffer::with_capacity(SECRET_BUFFER_CAPACITY);
    let mut byte = Zeroizing::new([0u8; 1]);

    loop {
        match input.read(&mut *byte) {
            Ok(0) => return Err(unexpected_eof()),
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }

        match byte[0] {
            b'\n' | b'\r' => break,
            CTRL_C => {
                return Err(TableError::Io(io::Error::new(
                    io::ErrorKind::Interrupted,
                    "password entry interrupted",
                )));
            }
            CTRL_D if buffer.is_empty() => return Err(unexpected_eof()),
            CTRL_D => {}
            BACKSPACE | DELETE => buffer.pop_char(),
            CTRL_U => buffer.clear(),
            other => buffer.push(other),
        }
    }

    buffer.into_secret()
}

/// Local mode flags while a secret is typed: no echo, no signals, no line editing
fn silent_lflag(lflag: tcflag_t) -> tcflag_t {
    lflag & !(ECHO | ISIG | ICANON)
}

/// Local mode flags after the secret is read: the original ones with echo on
fn restored_lflag(lflag: tcflag_t) -> tcflag_t {
    lflag | ECHO
}

/// Echo control for a terminal device via termios
pub struct TtyEcho {
    tty: File,
    original: Termios,
}

impl TtyEcho {
    /// Capture the current terminal attributes of `tty`
    pub fn new(tty: File) -> io::Result<Self> {
        let original = Termios::from_fd(tty.as_raw_fd())?;
        Ok(Self { tty, original })
    }
}

impl EchoControl for TtyEcho {
    fn disable(&mut self) -> io::Result<()> {
        let mut silent = self.original;
        silent.c_lflag = silent_lflag(self.original.c_lflag);
        silent.c_cc[VMIN] = 1;
        silent.c_cc[VTIME] = 0;
        tcsetattr(self.tty.as_raw_fd(), TCSANOW, &silent)
    }

    fn enable(&mut self) -> io::Result<()> {
        let mut restored = self.original;
        restored.c_lflag = restored_lflag(self.original.c_lflag);
        tcsetattr(self.tty.as_raw_fd(), TCSANOW, &restored)
    }
}

/// Read a secret from the controlling terminal (`/dev/tty`)
pub fn prompt_secret(prompt: &str) -> Result<Secret> {
    let mut tty = OpenOptions::new()
        .read(true)
        .write(true)
        .open(TTY_PATH)
        .map_err(TableError::Terminal)?;

    let mut echo = TtyEcho::new(tty.try_clone()?).map_err(TableError::Terminal)?;
    let mut output = tty.try_clone()?;

    log::debug!("reading password from {}", TTY_PATH);
    read_secret(prompt, &mut echo, &mut tty, &mut output)
}
