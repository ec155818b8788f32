//! Key/counter loop using the non-blocking background poller.
//!
//! Shows the latest pressed key and a frame counter; press `q` to quit.

use argon_term::{Result, Session, SessionConfig};
use std::thread;
use std::time::Duration;

fn main() -> Result<()> {
    let config = SessionConfig::new()
        .with_title("Counter")
        .with_size(80, 25)
        .with_blocking_input(false);
    let mut session = Session::new(config)?;

    let mut counter: u64 = 0;

    loop {
        session.clear();

        let key = session.get_key()?;
        let shown = if key.is_ascii_graphic() {
            key as char
        } else {
            ' '
        };
        session.put_str_fmt(0, 0, format_args!("Current key: {shown} {key}"))?;
        session.put_str_fmt(0, 1, format_args!("Counter: {counter}"))?;
        counter += 1;

        if key == b'q' {
            break;
        }

        session.refresh()?;
        thread::sleep(Duration::from_millis(33));
    }

    session.terminate()
}
