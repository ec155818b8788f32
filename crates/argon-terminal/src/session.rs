//! Terminal session owning the frame buffer, color state, and device.
//!
//! A [`Session`] is the explicit owner of everything the renderer needs:
//! the [`FrameBuffer`], the [`ColorState`] read by color-less primitives,
//! the [`Presenter`] at the OS boundary, and the key input source. All
//! drawing happens in memory; nothing reaches the screen until
//! [`refresh`](Session::refresh) blits the whole viewport.

use crate::config::SessionConfig;
use crate::glyph::BoxStyle;
use crate::presenter::{CrosstermPresenter, Presenter};
use argon_buffer::{Cell, FrameBuffer};
use argon_core::{Color, ColorState, Intensity, Result};
use argon_input::KeyPoller;
use std::fmt;
use tracing::{debug, trace};

/// Capacity of the formatted-print scratch buffer.
const FMT_SCRATCH_CAPACITY: usize = 256;

/// A bounded scratch buffer implementing `fmt::Write`.
///
/// Formatting that would exceed the capacity is truncated, never grown.
struct Scratch {
    buf: [u8; FMT_SCRATCH_CAPACITY],
    len: usize,
}

impl Scratch {
    fn new() -> Self {
        Self {
            buf: [0; FMT_SCRATCH_CAPACITY],
            len: 0,
        }
    }

    fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }
}

impl fmt::Write for Scratch {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let remaining = FMT_SCRATCH_CAPACITY - self.len;
        let take = s.len().min(remaining);
        self.buf[self.len..self.len + take].copy_from_slice(&s.as_bytes()[..take]);
        self.len += take;
        Ok(())
    }
}

/// The session's key input source.
enum InputSource {
    /// Each `get_key` blocks until a keypress arrives.
    Blocking,
    /// A background poller holds the latest keypress.
    Polled(KeyPoller),
}

/// A terminal rendering session.
///
/// The session is single-threaded by design: one logical thread owns it
/// and runs every primitive and [`refresh`](Session::refresh) without
/// internal locking. The optional background key poller is the only
/// concurrent component, and it shares nothing but an atomic byte slot.
///
/// The buffer's backing storage is owned exclusively by the session,
/// allocated at init and released when the session is dropped or
/// [`terminate`](Session::terminate)d.
///
/// # Example
///
/// ```no_run
/// use argon_terminal::{BoxStyle, Session, SessionConfig};
/// use argon_core::{Color, Intensity};
///
/// fn main() -> argon_core::Result<()> {
///     let config = SessionConfig::new().with_title("Demo").with_size(80, 25);
///     let mut session = Session::new(config)?;
///
///     session.set_color(Color::Cyan, Intensity::Bright,
///                       Color::Black, Intensity::Normal);
///     session.put_box(0, 0, 80, 25, BoxStyle::Double)?;
///     session.put_str(2, 1, "Hello!")?;
///     session.refresh()?;
///
///     session.get_key()?;
///     session.terminate()
/// }
/// ```
pub struct Session<P: Presenter = CrosstermPresenter> {
    presenter: P,
    buffer: FrameBuffer,
    colors: ColorState,
    input: InputSource,
}

impl Session<CrosstermPresenter> {
    /// Creates a session on the active terminal.
    ///
    /// Acquires the device (fatal [`DeviceUnavailable`] when stdout is not
    /// a terminal), allocates the frame buffer (fatal [`Allocation`] on
    /// overflow), applies the title and cursor configuration, and spawns
    /// the key poller when `blocking_input` is off.
    ///
    /// [`DeviceUnavailable`]: argon_core::Error::DeviceUnavailable
    /// [`Allocation`]: argon_core::Error::Allocation
    pub fn new(config: SessionConfig) -> Result<Self> {
        let presenter = CrosstermPresenter::new()?;
        Self::with_presenter(presenter, config)
    }
}

impl<P: Presenter> Session<P> {
    /// Creates a session with a custom presenter.
    ///
    /// This is the seam tests use to run the full drawing and refresh path
    /// headless.
    pub fn with_presenter(mut presenter: P, config: SessionConfig) -> Result<Self> {
        let buffer = FrameBuffer::new(config.width, config.height)?;
        presenter.setup(&config)?;

        let input = if config.blocking_input {
            InputSource::Blocking
        } else {
            InputSource::Polled(KeyPoller::spawn())
        };

        debug!(
            width = config.width,
            height = config.height,
            blocking = config.blocking_input,
            "session initialized"
        );

        Ok(Self {
            presenter,
            buffer,
            colors: ColorState::default(),
            input,
        })
    }

    /// Returns the viewport width in columns.
    #[inline]
    pub fn width(&self) -> u16 {
        self.buffer.width()
    }

    /// Returns the viewport height in rows.
    #[inline]
    pub fn height(&self) -> u16 {
        self.buffer.height()
    }

    /// Returns a read-only view of the frame buffer.
    #[inline]
    pub fn buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    /// Returns a reference to the presenter.
    #[inline]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Selects the colors used by subsequent drawing primitives.
    ///
    /// Takes effect on the next primitive call; cells already written keep
    /// their attribute.
    pub fn set_color(&mut self, fg: Color, fg_mode: Intensity, bg: Color, bg_mode: Intensity) {
        self.colors.set(fg, fg_mode, bg, bg_mode);
    }

    /// Writes one glyph at `(x, y)` with the current colors.
    ///
    /// Propagates [`OutOfBounds`](argon_core::Error::OutOfBounds); the
    /// buffer is unchanged on failure.
    pub fn put_char(&mut self, x: u16, y: u16, glyph: u8) -> Result<()> {
        self.buffer
            .set_cell(x, y, Cell::new(glyph, self.colors.attribute()))
    }

    /// Writes `text` left-to-right starting at `(x, y)`, one glyph per
    /// column.
    ///
    /// Stops at the first NUL byte. Does not wrap; glyphs past the right
    /// edge fail with [`OutOfBounds`](argon_core::Error::OutOfBounds) -
    /// the caller is responsible for bounds.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str) -> Result<()> {
        for (i, byte) in text.bytes().enumerate() {
            if byte == 0 {
                break;
            }
            self.put_char(x + i as u16, y, byte)?;
        }
        Ok(())
    }

    /// Renders formatted text into a bounded scratch buffer and writes it
    /// at `(x, y)`.
    ///
    /// Output beyond 256 bytes is truncated, not expanded. Call as
    /// `session.put_str_fmt(2, 2, format_args!("Count:{}", n))`.
    pub fn put_str_fmt(&mut self, x: u16, y: u16, args: fmt::Arguments<'_>) -> Result<()> {
        let mut scratch = Scratch::new();
        // Truncation is not an error; the adapter never fails.
        let _ = fmt::Write::write_fmt(&mut scratch, args);

        for (i, &byte) in scratch.as_bytes().iter().enumerate() {
            if byte == 0 {
                break;
            }
            self.put_char(x + i as u16, y, byte)?;
        }
        Ok(())
    }

    /// Draws a rectangle outline with the current colors.
    ///
    /// Paints left/right vertical edges for each row in `[y, y+height)`,
    /// top/bottom horizontal edges for each column in `[x, x+width)`, then
    /// overwrites the four corners with corner glyphs. Corner writes come
    /// after edge painting; the edge loops leave plain edge glyphs in the
    /// corner positions otherwise.
    ///
    /// Degenerate boxes (`width < 2` or `height < 2`) make edge and corner
    /// writes collide; last write wins, intentionally unguarded. Zero
    /// width or height is a no-op. The outline is never filled; see
    /// [`fill_area`](Session::fill_area).
    pub fn put_box(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        style: BoxStyle,
    ) -> Result<()> {
        if width == 0 || height == 0 {
            return Ok(());
        }

        let right = x.saturating_add(width) - 1;
        let bottom = y.saturating_add(height) - 1;
        let glyphs = style.glyphs();

        for row in y..=bottom {
            self.put_char(x, row, glyphs.vertical)?;
            self.put_char(right, row, glyphs.vertical)?;
        }

        for col in x..=right {
            self.put_char(col, y, glyphs.horizontal)?;
            self.put_char(col, bottom, glyphs.horizontal)?;
        }

        self.put_char(x, y, glyphs.top_left)?;
        self.put_char(right, y, glyphs.top_right)?;
        self.put_char(x, bottom, glyphs.bottom_left)?;
        self.put_char(right, bottom, glyphs.bottom_right)?;

        Ok(())
    }

    /// Fills the rectangle `[x, x+w) x [y, y+h)` with one glyph in the
    /// current colors.
    ///
    /// The rectangle is clamped silently to the viewport, matching
    /// [`clear_area`](Session::clear_area).
    pub fn fill_area(&mut self, x: u16, y: u16, w: u16, h: u16, glyph: u8) -> Result<()> {
        let x_end = x.saturating_add(w).min(self.buffer.width());
        let y_end = y.saturating_add(h).min(self.buffer.height());

        for row in y.min(self.buffer.height())..y_end {
            for col in x..x_end {
                self.put_char(col, row, glyph)?;
            }
        }
        Ok(())
    }

    /// Resets every cell to glyph 0 and the default color pair.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Resets cells in the rectangle `[x, x+w) x [y, y+h)`, clamped
    /// silently to the viewport.
    pub fn clear_area(&mut self, x: u16, y: u16, w: u16, h: u16) {
        self.buffer.clear_area(x, y, w, h);
    }

    /// Blits the entire frame buffer to the screen in one call.
    ///
    /// Every refresh re-sends the full viewport; there is no diffing and
    /// no partial write. Failures surface as
    /// [`Present`](argon_core::Error::Present) and are never swallowed; no
    /// retries happen here.
    pub fn refresh(&mut self) -> Result<()> {
        trace!(cells = self.buffer.len(), "refresh");
        self.presenter
            .write_region(self.buffer.cells(), self.buffer.width(), self.buffer.height())
    }

    /// Returns a keypress byte.
    ///
    /// In blocking mode this waits for the next keypress. In polled mode
    /// it returns the latest sampled key immediately (`0` before the first
    /// keypress).
    pub fn get_key(&mut self) -> Result<u8> {
        match &self.input {
            InputSource::Blocking => argon_input::read_key(),
            InputSource::Polled(poller) => Ok(poller.latest()),
        }
    }

    /// Ends the session, joining the key poller and restoring the
    /// terminal.
    ///
    /// Dropping the session performs the same cleanup best-effort; use
    /// this to observe restore errors.
    pub fn terminate(mut self) -> Result<()> {
        if let InputSource::Polled(poller) = &mut self.input {
            poller.shutdown();
        }
        debug!("session terminated");
        self.presenter.restore()
    }
}

impl<P: Presenter> Drop for Session<P> {
    fn drop(&mut self) {
        // Poller shutdown happens in its own Drop; restore is idempotent.
        let _ = self.presenter.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::CapturePresenter;
    use argon_core::{Attribute, Error};
    use pretty_assertions::assert_eq;

    fn test_session(width: u16, height: u16) -> Session<CapturePresenter> {
        let config = SessionConfig::new().with_size(width, height);
        Session::with_presenter(CapturePresenter::new(), config).unwrap()
    }

    #[test]
    fn test_put_char_uses_current_colors() {
        let mut session = test_session(10, 10);

        session.set_color(
            Color::Green,
            Intensity::Bright,
            Color::Blue,
            Intensity::Normal,
        );
        session.put_char(4, 7, b'g').unwrap();

        let cell = session.buffer().get(4, 7).unwrap();
        assert_eq!(cell.glyph, b'g');
        assert_eq!(
            cell.attr,
            Attribute::new(
                Color::Green,
                Intensity::Bright,
                Color::Blue,
                Intensity::Normal
            )
        );
    }

    #[test]
    fn test_put_char_out_of_bounds_leaves_buffer_unchanged() {
        let mut session = test_session(10, 10);

        let err = session.put_char(10, 0, b'x').unwrap_err();
        assert!(matches!(err, Error::OutOfBounds { x: 10, y: 0, .. }));
        let err = session.put_char(0, 10, b'x').unwrap_err();
        assert!(matches!(err, Error::OutOfBounds { x: 0, y: 10, .. }));

        assert!(session.buffer().cells().iter().all(Cell::is_blank));
    }

    #[test]
    fn test_set_color_has_no_retroactive_effect() {
        let mut session = test_session(10, 10);

        session.put_char(0, 0, b'a').unwrap();
        session.set_color(
            Color::Red,
            Intensity::Normal,
            Color::Black,
            Intensity::Normal,
        );
        session.put_char(1, 0, b'b').unwrap();

        assert_eq!(session.buffer().get(0, 0).unwrap().attr, Attribute::DEFAULT);
        assert_eq!(
            session.buffer().get(1, 0).unwrap().attr.fg(),
            Color::Red
        );
    }

    #[test]
    fn test_put_str_matches_sequential_put_char() {
        let mut a = test_session(20, 5);
        let mut b = test_session(20, 5);

        a.put_str(3, 2, "ABC").unwrap();
        b.put_char(3, 2, b'A').unwrap();
        b.put_char(4, 2, b'B').unwrap();
        b.put_char(5, 2, b'C').unwrap();

        assert_eq!(a.buffer().cells(), b.buffer().cells());
    }

    #[test]
    fn test_put_str_stops_at_nul() {
        let mut session = test_session(20, 5);
        session.put_str(0, 0, "AB\0CD").unwrap();

        assert_eq!(session.buffer().get(0, 0).unwrap().glyph, b'A');
        assert_eq!(session.buffer().get(1, 0).unwrap().glyph, b'B');
        assert_eq!(session.buffer().get(2, 0).unwrap().glyph, 0);
        assert_eq!(session.buffer().get(3, 0).unwrap().glyph, 0);
    }

    #[test]
    fn test_put_str_does_not_wrap() {
        let mut session = test_session(5, 2);
        let err = session.put_str(3, 0, "long").unwrap_err();
        assert!(matches!(err, Error::OutOfBounds { x: 5, y: 0, .. }));
        // The in-bounds prefix was written before the failure surfaced.
        assert_eq!(session.buffer().get(3, 0).unwrap().glyph, b'l');
        assert_eq!(session.buffer().get(4, 0).unwrap().glyph, b'o');
    }

    #[test]
    fn test_put_str_fmt_scenario() {
        let mut session = test_session(80, 25);
        session.set_color(
            Color::Red,
            Intensity::Normal,
            Color::Black,
            Intensity::Normal,
        );
        session
            .put_str_fmt(2, 2, format_args!("Count:{}", 42))
            .unwrap();

        let expected = b"Count:42";
        for (i, &glyph) in expected.iter().enumerate() {
            let cell = session.buffer().get(2 + i as u16, 2).unwrap();
            assert_eq!(cell.glyph, glyph);
            assert_eq!(cell.attr.fg(), Color::Red);
            assert_eq!(cell.attr.fg_intensity(), Intensity::Normal);
        }
        // Nothing written past the formatted text.
        assert_eq!(session.buffer().get(10, 2).unwrap().glyph, 0);
    }

    #[test]
    fn test_fmt_scratch_truncates_at_capacity() {
        use std::fmt::Write as _;

        let mut scratch = Scratch::new();
        let long = "x".repeat(500);
        write!(scratch, "{long}").unwrap();

        assert_eq!(scratch.as_bytes().len(), FMT_SCRATCH_CAPACITY);
        assert!(scratch.as_bytes().iter().all(|&b| b == b'x'));
    }

    #[test]
    fn test_put_box_exact_layout() {
        let mut session = test_session(10, 10);
        session.put_box(0, 0, 5, 5, BoxStyle::Single).unwrap();

        let g = BoxStyle::Single.glyphs();
        let cell = |x, y| session.buffer().get(x, y).unwrap().glyph;

        // Corners.
        assert_eq!(cell(0, 0), g.top_left);
        assert_eq!(cell(4, 0), g.top_right);
        assert_eq!(cell(0, 4), g.bottom_left);
        assert_eq!(cell(4, 4), g.bottom_right);

        // Edges.
        for x in 1..4 {
            assert_eq!(cell(x, 0), g.horizontal);
            assert_eq!(cell(x, 4), g.horizontal);
        }
        for y in 1..4 {
            assert_eq!(cell(0, y), g.vertical);
            assert_eq!(cell(4, y), g.vertical);
        }

        // Glyph 0 everywhere else, including the interior.
        for y in 0..10u16 {
            for x in 0..10u16 {
                let on_box = x < 5 && y < 5 && (x == 0 || x == 4 || y == 0 || y == 4);
                if !on_box {
                    assert_eq!(cell(x, y), 0, "unexpected glyph at ({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn test_put_box_full_viewport() {
        let mut session = test_session(120, 30);
        // Covers the whole viewport; the right/bottom edge math must not
        // run out of bounds.
        session.put_box(0, 0, 120, 30, BoxStyle::Single).unwrap();
        let g = BoxStyle::Single.glyphs();
        assert_eq!(session.buffer().get(119, 29).unwrap().glyph, g.bottom_right);
    }

    #[test]
    fn test_put_box_past_edge_propagates() {
        let mut session = test_session(10, 10);
        let err = session.put_box(8, 8, 5, 5, BoxStyle::Single).unwrap_err();
        assert!(matches!(err, Error::OutOfBounds { .. }));
    }

    #[test]
    fn test_put_box_degenerate_last_write_wins() {
        let mut session = test_session(10, 10);
        session.put_box(2, 2, 1, 1, BoxStyle::Double).unwrap();

        // All writes collide on one cell; the final corner wins.
        let g = BoxStyle::Double.glyphs();
        assert_eq!(session.buffer().get(2, 2).unwrap().glyph, g.bottom_right);
    }

    #[test]
    fn test_put_box_zero_size_is_noop() {
        let mut session = test_session(10, 10);
        session.put_box(3, 3, 0, 5, BoxStyle::Single).unwrap();
        session.put_box(3, 3, 5, 0, BoxStyle::Single).unwrap();
        assert!(session.buffer().cells().iter().all(Cell::is_blank));
    }

    #[test]
    fn test_fill_area() {
        let mut session = test_session(10, 10);
        session.set_color(
            Color::Yellow,
            Intensity::Normal,
            Color::Blue,
            Intensity::Normal,
        );
        session.fill_area(2, 2, 3, 2, b'#').unwrap();

        for y in 2..4 {
            for x in 2..5 {
                let cell = session.buffer().get(x, y).unwrap();
                assert_eq!(cell.glyph, b'#');
                assert_eq!(cell.attr.bg(), Color::Blue);
            }
        }
        assert_eq!(session.buffer().get(5, 2).unwrap().glyph, 0);
        assert_eq!(session.buffer().get(2, 4).unwrap().glyph, 0);
    }

    #[test]
    fn test_fill_area_clamps() {
        let mut session = test_session(5, 5);
        session.fill_area(3, 3, 100, 100, b'*').unwrap();
        assert_eq!(session.buffer().get(4, 4).unwrap().glyph, b'*');
        assert_eq!(session.buffer().get(2, 2).unwrap().glyph, 0);
    }

    #[test]
    fn test_clear_resets_glyph_and_attribute() {
        let mut session = test_session(10, 10);
        session.set_color(
            Color::Magenta,
            Intensity::Bright,
            Color::Green,
            Intensity::Bright,
        );
        session.put_str(0, 0, "dirty").unwrap();

        session.clear();

        for cell in session.buffer().cells() {
            assert_eq!(cell.glyph, 0);
            assert_eq!(cell.attr, Attribute::DEFAULT);
        }
    }

    #[test]
    fn test_refresh_round_trip_is_untransformed() {
        let mut session = test_session(12, 4);
        session.set_color(
            Color::Cyan,
            Intensity::Bright,
            Color::Black,
            Intensity::Normal,
        );
        session.put_box(1, 0, 10, 4, BoxStyle::Double).unwrap();
        session.put_str(3, 1, "hi").unwrap();

        session.refresh().unwrap();

        assert_eq!(
            session.presenter().last_cells(),
            session.buffer().cells()
        );
        assert_eq!(session.presenter().last_size(), Some((12, 4)));
        assert_eq!(session.presenter().blit_count(), 1);
    }

    #[test]
    fn test_terminate_restores_presenter() {
        let session = test_session(10, 10);
        assert!(session.presenter().is_set_up());
        session.terminate().unwrap();
    }
}
