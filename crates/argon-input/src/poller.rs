//! Blocking key reads and the background key poller.
//!
//! Two input modes are supported. In blocking mode, [`read_key`] waits for
//! the next keypress. In polled mode, a [`KeyPoller`] thread continuously
//! samples the latest keypress into a single shared one-byte slot
//! (last-value-wins, no queue, no backpressure); the slot is the only
//! cross-thread shared state in the system and is a single-word atomic.

use argon_core::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;
use tracing::debug;

/// Interval at which the poller re-checks its stop flag while idle.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Maps a key event to its one-byte representation.
///
/// Printable characters map to their 8-bit code; a handful of control
/// keys map to their ASCII control codes. Other keys (arrows, function
/// keys, modifiers) have no byte representation and yield `None`.
fn key_byte(key: &KeyEvent) -> Option<u8> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Char(c) if (c as u32) < 256 => Some(c as u8),
        KeyCode::Enter => Some(b'\r'),
        KeyCode::Tab => Some(b'\t'),
        KeyCode::Backspace => Some(0x08),
        KeyCode::Esc => Some(0x1B),
        _ => None,
    }
}

/// Blocks until one keypress byte is available and returns it.
///
/// Key events without a byte representation are skipped; non-key events
/// (resize, focus) are ignored.
pub fn read_key() -> Result<u8> {
    loop {
        if let Event::Key(key) = event::read()? {
            if let Some(byte) = key_byte(&key) {
                return Ok(byte);
            }
        }
    }
}

/// Background poller sampling the latest keypress into a shared slot.
///
/// The poller owns a thread that repeatedly polls the terminal for key
/// events and stores the most recent byte in an atomic slot. Reading the
/// slot never blocks and returns `0` until the first keypress arrives.
///
/// Shutdown is cooperative: [`shutdown`](KeyPoller::shutdown) raises a stop
/// flag that the thread observes between bounded polls, then joins it. The
/// poller is never killed abruptly, which would leave the device read
/// handle in an undefined state. Dropping the poller also shuts it down.
pub struct KeyPoller {
    slot: Arc<AtomicU8>,
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl KeyPoller {
    /// Spawns the polling thread.
    pub fn spawn() -> Self {
        let slot = Arc::new(AtomicU8::new(0));
        let stop = Arc::new(AtomicBool::new(false));

        let thread_slot = Arc::clone(&slot);
        let thread_stop = Arc::clone(&stop);

        let handle = std::thread::spawn(move || {
            while !thread_stop.load(Ordering::Acquire) {
                match event::poll(POLL_INTERVAL) {
                    Ok(true) => {
                        if let Ok(Event::Key(key)) = event::read() {
                            if let Some(byte) = key_byte(&key) {
                                thread_slot.store(byte, Ordering::Release);
                            }
                        }
                    }
                    Ok(false) => {}
                    // Device errors end the poller; the slot keeps its
                    // last value.
                    Err(_) => break,
                }
            }
        });

        debug!("key poller spawned");

        Self {
            slot,
            stop,
            handle: Some(handle),
        }
    }

    /// Returns the most recently sampled keypress byte.
    ///
    /// Returns `0` if no key has been pressed since the poller started.
    #[inline]
    pub fn latest(&self) -> u8 {
        self.slot.load(Ordering::Acquire)
    }

    /// Signals the polling thread to stop and joins it.
    pub fn shutdown(&mut self) {
        self.stop.store(true, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
            debug!("key poller joined");
        }
    }

    /// Returns true if the polling thread has been joined.
    #[inline]
    pub fn is_shut_down(&self) -> bool {
        self.handle.is_none()
    }
}

impl Drop for KeyPoller {
    fn drop(&mut self) {
        self.shutdown();
    }
}
