//! Terminal session: raw mode and alternate screen with Drop-based restore.

use super::output::OutputBuffer;
use crate::buffer::Buffer;
use crossterm::{cursor, event, execute, terminal};
use std::io::{self, Stdout, Write};

/// An interactive terminal session owning stdout.
///
/// Construction enters raw mode, switches to the alternate screen, enables
/// mouse capture, and hides the cursor; dropping the session restores
/// everything, including on panic-unwind paths.
pub struct Terminal {
    stdout: Stdout,
    output: OutputBuffer,
}

impl Terminal {
    /// Enter raw mode and set up the alternate screen.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal refuses raw mode or any of the
    /// setup commands fail.
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            event::EnableMouseCapture,
            cursor::Hide
        )?;
        Ok(Self {
            stdout,
            output: OutputBuffer::new(),
        })
    }

    /// Current terminal size in (columns, rows).
    ///
    /// # Errors
    ///
    /// Returns an error if the size query fails.
    pub fn size() -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Present a full frame in a single write.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to stdout fails.
    pub fn draw(&mut self, buffer: &Buffer) -> io::Result<()> {
        self.output.clear();
        self.output.render_frame(buffer);
        self.output.flush_to(&mut self.stdout)
    }

    /// Write raw bytes straight through, bypassing the frame buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to stdout fails.
    pub fn write_raw(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.stdout.write_all(bytes)?;
        self.stdout.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        // Restore order mirrors setup; failures here are unreportable.
        let _ = execute!(
            self.stdout,
            cursor::Show,
            event::DisableMouseCapture,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
