//! Box outlines in both border styles, plus an area clear.

use argon_term::{BoxStyle, Color, Intensity, Result, Session, SessionConfig};

fn main() -> Result<()> {
    let config = SessionConfig::new().with_title("Boxes").with_size(80, 25);
    let mut session = Session::new(config)?;

    session.set_color(
        Color::Blue,
        Intensity::Bright,
        Color::Black,
        Intensity::Normal,
    );
    session.put_box(0, 0, 10, 10, BoxStyle::Double)?;

    session.set_color(
        Color::Red,
        Intensity::Normal,
        Color::Black,
        Intensity::Normal,
    );
    session.put_box(11, 0, 10, 10, BoxStyle::Single)?;

    session.set_color(
        Color::Green,
        Intensity::Normal,
        Color::Black,
        Intensity::Normal,
    );
    session.put_box(3, 5, 15, 3, BoxStyle::Double)?;

    // Punch a hole through the overlap.
    session.clear_area(5, 6, 4, 1);

    session.refresh()?;
    session.get_key()?;

    session.terminate()
}
