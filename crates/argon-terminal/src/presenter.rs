//! Presenter abstraction and crossterm implementation.
//!
//! The presenter is the only component that touches the OS boundary. Its
//! contract is a full-viewport blit: every call re-sends the entire cell
//! grid, trading bandwidth for simplicity over dirty-rect bookkeeping.

use crate::config::SessionConfig;
use crate::glyph::glyph_to_char;
use argon_buffer::Cell;
use argon_core::{Attribute, Color, Error, Intensity, Result};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    style::{Color as CrosstermColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use std::io::{self, IsTerminal, Stdout, Write};

/// Trait for the device end of a session.
///
/// This abstraction keeps the rendering core free of OS concerns and lets
/// tests substitute a headless implementation.
pub trait Presenter {
    /// Applies one-time session setup: title, cursor visibility, raw mode.
    fn setup(&mut self, config: &SessionConfig) -> Result<()>;

    /// Blits a full `width x height` row-major cell region to the screen
    /// in one call.
    ///
    /// Fails with [`Error::Present`] if the device rejects the write. The
    /// presenter performs no diffing and no transformation of cell data
    /// beyond glyph-to-character translation at the device boundary.
    fn write_region(&mut self, cells: &[Cell], width: u16, height: u16) -> Result<()>;

    /// Undoes [`setup`](Presenter::setup), restoring the terminal.
    fn restore(&mut self) -> Result<()>;
}

/// Maps a color/intensity pair to crossterm's 16-color palette.
#[inline]
fn to_crossterm_color(color: Color, intensity: Intensity) -> CrosstermColor {
    match (intensity, color) {
        (Intensity::Normal, Color::Black) => CrosstermColor::Black,
        (Intensity::Normal, Color::Blue) => CrosstermColor::DarkBlue,
        (Intensity::Normal, Color::Green) => CrosstermColor::DarkGreen,
        (Intensity::Normal, Color::Cyan) => CrosstermColor::DarkCyan,
        (Intensity::Normal, Color::Red) => CrosstermColor::DarkRed,
        (Intensity::Normal, Color::Magenta) => CrosstermColor::DarkMagenta,
        (Intensity::Normal, Color::Yellow) => CrosstermColor::DarkYellow,
        (Intensity::Normal, Color::White) => CrosstermColor::Grey,
        (Intensity::Bright, Color::Black) => CrosstermColor::DarkGrey,
        (Intensity::Bright, Color::Blue) => CrosstermColor::Blue,
        (Intensity::Bright, Color::Green) => CrosstermColor::Green,
        (Intensity::Bright, Color::Cyan) => CrosstermColor::Cyan,
        (Intensity::Bright, Color::Red) => CrosstermColor::Red,
        (Intensity::Bright, Color::Magenta) => CrosstermColor::Magenta,
        (Intensity::Bright, Color::Yellow) => CrosstermColor::Yellow,
        (Intensity::Bright, Color::White) => CrosstermColor::White,
    }
}

/// Crossterm-based presenter writing to stdout.
pub struct CrosstermPresenter {
    stdout: Stdout,
    in_raw_mode: bool,
    in_alternate_screen: bool,
    cursor_hidden: bool,
}

impl CrosstermPresenter {
    /// Creates a presenter for the active terminal.
    ///
    /// Fails with [`Error::DeviceUnavailable`] when stdout is not a
    /// terminal (e.g. output redirected to a file or pipe).
    pub fn new() -> Result<Self> {
        let stdout = io::stdout();
        if !stdout.is_terminal() {
            return Err(Error::DeviceUnavailable(io::Error::new(
                io::ErrorKind::Unsupported,
                "stdout is not a terminal",
            )));
        }

        Ok(Self {
            stdout,
            in_raw_mode: false,
            in_alternate_screen: false,
            cursor_hidden: false,
        })
    }
}

impl Presenter for CrosstermPresenter {
    fn setup(&mut self, config: &SessionConfig) -> Result<()> {
        if !self.in_raw_mode {
            enable_raw_mode().map_err(Error::Io)?;
            self.in_raw_mode = true;
        }

        if !self.in_alternate_screen {
            queue!(self.stdout, EnterAlternateScreen).map_err(Error::Io)?;
            self.in_alternate_screen = true;
        }

        queue!(self.stdout, SetTitle(&config.title)).map_err(Error::Io)?;

        if config.hide_cursor && !self.cursor_hidden {
            queue!(self.stdout, Hide).map_err(Error::Io)?;
            self.cursor_hidden = true;
        }

        self.stdout.flush().map_err(Error::Io)
    }

    fn write_region(&mut self, cells: &[Cell], width: u16, height: u16) -> Result<()> {
        if cells.len() != width as usize * height as usize {
            return Err(Error::Present(io::Error::new(
                io::ErrorKind::InvalidInput,
                "cell region does not match its dimensions",
            )));
        }

        // Re-emit colors only when the attribute changes between cells.
        let mut last_attr: Option<Attribute> = None;

        for y in 0..height {
            queue!(self.stdout, MoveTo(0, y)).map_err(Error::Present)?;

            let start = y as usize * width as usize;
            for cell in &cells[start..start + width as usize] {
                if last_attr != Some(cell.attr) {
                    queue!(
                        self.stdout,
                        SetForegroundColor(to_crossterm_color(
                            cell.attr.fg(),
                            cell.attr.fg_intensity()
                        )),
                        SetBackgroundColor(to_crossterm_color(
                            cell.attr.bg(),
                            cell.attr.bg_intensity()
                        ))
                    )
                    .map_err(Error::Present)?;
                    last_attr = Some(cell.attr);
                }
                queue!(self.stdout, Print(glyph_to_char(cell.glyph))).map_err(Error::Present)?;
            }
        }

        queue!(self.stdout, ResetColor).map_err(Error::Present)?;
        self.stdout.flush().map_err(Error::Present)
    }

    fn restore(&mut self) -> Result<()> {
        if self.cursor_hidden {
            queue!(self.stdout, Show).map_err(Error::Io)?;
            self.cursor_hidden = false;
        }

        if self.in_alternate_screen {
            queue!(self.stdout, LeaveAlternateScreen).map_err(Error::Io)?;
            self.in_alternate_screen = false;
        }

        self.stdout.flush().map_err(Error::Io)?;

        if self.in_raw_mode {
            disable_raw_mode().map_err(Error::Io)?;
            self.in_raw_mode = false;
        }

        Ok(())
    }
}

impl Drop for CrosstermPresenter {
    fn drop(&mut self) {
        // Best-effort cleanup on drop
        let _ = self.restore();
    }
}

/// Headless presenter recording the last blit, for tests.
///
/// Captured cells are stored exactly as received, so tests can assert the
/// refresh path performs no transformation.
#[derive(Default)]
pub struct CapturePresenter {
    /// Cells of the most recent blit, row-major.
    last_cells: Vec<Cell>,
    /// Dimensions of the most recent blit.
    last_size: Option<(u16, u16)>,
    /// Number of blits received.
    blit_count: usize,
    /// Whether setup has run.
    set_up: bool,
}

impl CapturePresenter {
    /// Creates an empty capture presenter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cells of the most recent blit.
    pub fn last_cells(&self) -> &[Cell] {
        &self.last_cells
    }

    /// Returns the dimensions of the most recent blit.
    pub fn last_size(&self) -> Option<(u16, u16)> {
        self.last_size
    }

    /// Returns how many blits have been received.
    pub fn blit_count(&self) -> usize {
        self.blit_count
    }

    /// Returns whether setup has run (and restore has not).
    pub fn is_set_up(&self) -> bool {
        self.set_up
    }
}

impl Presenter for CapturePresenter {
    fn setup(&mut self, _config: &SessionConfig) -> Result<()> {
        self.set_up = true;
        Ok(())
    }

    fn write_region(&mut self, cells: &[Cell], width: u16, height: u16) -> Result<()> {
        if cells.len() != width as usize * height as usize {
            return Err(Error::Present(io::Error::new(
                io::ErrorKind::InvalidInput,
                "cell region does not match its dimensions",
            )));
        }
        self.last_cells = cells.to_vec();
        self.last_size = Some((width, height));
        self.blit_count += 1;
        Ok(())
    }

    fn restore(&mut self) -> Result<()> {
        self.set_up = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_mapping_intensity() {
        assert_eq!(
            to_crossterm_color(Color::Red, Intensity::Normal),
            CrosstermColor::DarkRed
        );
        assert_eq!(
            to_crossterm_color(Color::Red, Intensity::Bright),
            CrosstermColor::Red
        );
        assert_eq!(
            to_crossterm_color(Color::White, Intensity::Normal),
            CrosstermColor::Grey
        );
        assert_eq!(
            to_crossterm_color(Color::Black, Intensity::Bright),
            CrosstermColor::DarkGrey
        );
    }

    #[test]
    fn test_capture_presenter_records_blit() {
        let mut presenter = CapturePresenter::new();
        let cells = vec![Cell::default(); 6];

        presenter.write_region(&cells, 3, 2).unwrap();

        assert_eq!(presenter.last_cells(), cells.as_slice());
        assert_eq!(presenter.last_size(), Some((3, 2)));
        assert_eq!(presenter.blit_count(), 1);
    }

    #[test]
    fn test_capture_presenter_rejects_mismatched_region() {
        let mut presenter = CapturePresenter::new();
        let cells = vec![Cell::default(); 5];

        let err = presenter.write_region(&cells, 3, 2).unwrap_err();
        assert!(matches!(err, Error::Present(_)));
    }
}
