//! Terminal setup and teardown with panic safety.

use std::io::{self, Stdout, Write};
use std::panic;

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute, queue,
    style::{Attribute, Color, Print, SetAttribute, SetForegroundColor},
    terminal::{
        self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};

use crate::frame::{Frame, SpanStyle};

/// Owns the terminal while the TUI runs and restores it on drop.
pub struct TerminalGuard {
    stdout: Stdout,
}

impl TerminalGuard {
    /// Initialize the terminal for TUI rendering.
    pub fn new() -> io::Result<Self> {
        // Restore the terminal before the panic message is printed
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            original_hook(panic_info);
        }));

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture, cursor::Hide)?;

        Ok(Self { stdout })
    }

    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Replace the screen contents with `frame`.
    pub fn draw(&mut self, frame: &Frame) -> io::Result<()> {
        queue!(self.stdout, SetAttribute(Attribute::Reset), Clear(ClearType::All))?;
        for span in frame.spans() {
            queue!(self.stdout, cursor::MoveTo(span.x, span.y))?;
            self.apply_style(span.style)?;
            queue!(self.stdout, Print(&span.text), SetAttribute(Attribute::Reset))?;
        }
        self.stdout.flush()
    }

    fn apply_style(&mut self, style: SpanStyle) -> io::Result<()> {
        if let Some(fg) = style.fg {
            queue!(
                self.stdout,
                SetForegroundColor(Color::Rgb {
                    r: fg.r,
                    g: fg.g,
                    b: fg.b,
                })
            )?;
        }
        if style.bold {
            queue!(self.stdout, SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            queue!(self.stdout, SetAttribute(Attribute::Dim))?;
        }
        if style.reverse {
            queue!(self.stdout, SetAttribute(Attribute::Reverse))?;
        }
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        io::stdout(),
        SetAttribute(Attribute::Reset),
        cursor::Show,
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    Ok(())
}
