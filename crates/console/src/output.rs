//! Output destinations.

use std::io::{self, IsTerminal, Stderr, Stdout, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rich::ColorSystem;

/// Where a console writes its bytes.
///
/// Beyond being writable, a destination may describe itself. The console
/// falls back to its own defaults for anything a destination leaves unset.
pub trait Output: Write + Send {
    /// `(columns, rows)`, when known.
    fn dimensions(&self) -> Option<(u16, u16)> {
        None
    }

    fn is_terminal(&self) -> bool {
        false
    }

    /// The color system the destination supports, when known.
    fn color_system(&self) -> Option<ColorSystem> {
        None
    }
}

impl Output for Stdout {
    fn dimensions(&self) -> Option<(u16, u16)> {
        if IsTerminal::is_terminal(self) {
            crossterm::terminal::size().ok()
        } else {
            None
        }
    }

    fn is_terminal(&self) -> bool {
        IsTerminal::is_terminal(self)
    }
}

impl Output for Stderr {
    fn dimensions(&self) -> Option<(u16, u16)> {
        if IsTerminal::is_terminal(self) {
            crossterm::terminal::size().ok()
        } else {
            None
        }
    }

    fn is_terminal(&self) -> bool {
        IsTerminal::is_terminal(self)
    }
}

impl Output for Vec<u8> {}

/// An in-memory destination whose clones share one buffer.
///
/// Hand one clone to a console and keep another to read what was written.
///
/// ```
/// use std::io::Write;
/// use rich_console::SharedBuffer;
///
/// let buffer = SharedBuffer::new();
/// let mut writer = buffer.clone();
/// writer.write_all(b"foo").unwrap();
/// assert_eq!(buffer.contents(), "foo");
/// ```
#[derive(Clone, Debug, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        self.bytes.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Everything written so far, decoded lossily as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.lock()).into_owned()
    }

    pub fn bytes(&self) -> Vec<u8> {
        self.lock().clone()
    }

    /// Returns the contents and empties the buffer.
    pub fn take(&self) -> String {
        let bytes = std::mem::take(&mut *self.lock());
        String::from_utf8_lossy(&bytes).into_owned()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Output for SharedBuffer {}
