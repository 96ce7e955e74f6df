//! Event plumbing for the UI loop.
//!
//! A dedicated thread polls the terminal for input and feeds a channel;
//! the same channel carries ticks and completed auth requests, so the UI
//! loop has a single thing to block on.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

use crossterm::event::{Event, KeyEvent};

use crate::auth::Credentials;

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
    /// An auth request finished: credentials, or user-facing error text.
    Auth(Result<Credentials, String>),
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        let input_tx = tx.clone();
        thread::spawn(move || loop {
            let event = match crossterm::event::poll(tick_rate) {
                Ok(true) => match crossterm::event::read() {
                    Ok(Event::Key(key)) => AppEvent::Key(key),
                    Ok(Event::Resize(cols, rows)) => AppEvent::Resize(cols, rows),
                    Ok(_) => continue,
                    Err(_) => break,
                },
                Ok(false) => AppEvent::Tick,
                Err(_) => break,
            };
            if input_tx.send(event).is_err() {
                break;
            }
        });

        Self { rx, tx }
    }

    /// A sender for out-of-thread producers (the auth worker).
    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}
