// ABOUTME: Live-updating terminal region for the display loop.
// ABOUTME: Rewrites its previously printed block in place on each render.

use crossterm::cursor::MoveToPreviousLine;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use crossterm::QueueableCommand;
use std::io::{self, Stdout, Write};

/// A block of terminal lines that is redrawn in place.
///
/// Each [`render`](Self::render) replaces whatever the previous render
/// printed, so periodic output updates a fixed region instead of scrolling.
pub struct LiveRegion {
    out: Stdout,
    rendered_lines: u16,
}

impl LiveRegion {
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            rendered_lines: 0,
        }
    }

    /// Replace the region's content.
    pub fn render(&mut self, content: &str) -> io::Result<()> {
        if self.rendered_lines > 0 {
            self.out.queue(MoveToPreviousLine(self.rendered_lines))?;
            self.out.queue(Clear(ClearType::FromCursorDown))?;
        }

        let mut lines: u16 = 0;
        for line in content.lines() {
            self.out.queue(Print(line))?;
            self.out.queue(Print("\n"))?;
            lines = lines.saturating_add(1);
        }
        self.out.flush()?;

        self.rendered_lines = lines;
        Ok(())
    }

    /// Stop managing the region, leaving the last render on screen.
    pub fn finish(&mut self) {
        self.rendered_lines = 0;
    }
}

impl Default for LiveRegion {
    fn default() -> Self {
        Self::new()
    }
}
