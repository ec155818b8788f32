//! Full color palette: every fg/bg pair in both intensities.

use argon_term::{Color, Intensity, Result, Session, SessionConfig};

fn main() -> Result<()> {
    let config = SessionConfig::new().with_title("Palette").with_size(80, 25);
    let mut session = Session::new(config)?;

    for (y, &bg) in Color::ALL.iter().enumerate() {
        for (x, &fg) in Color::ALL.iter().enumerate() {
            session.set_color(fg, Intensity::Normal, bg, Intensity::Normal);
            session.put_char(x as u16, y as u16, b'X')?;
        }
    }

    for (y, &bg) in Color::ALL.iter().enumerate() {
        for (x, &fg) in Color::ALL.iter().enumerate() {
            session.set_color(fg, Intensity::Bright, bg, Intensity::Bright);
            session.put_char(x as u16 + 9, y as u16, b'X')?;
        }
    }

    session.refresh()?;
    session.get_key()?;

    session.terminate()
}
