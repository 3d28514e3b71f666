use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

pub enum Event {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Tick,
}

/// Pump thread translating terminal input into game events. Key presses
/// and releases both come through so held movement can stop on release;
/// only left-button mouse downs are interesting.
pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        let (tx, rx) = mpsc::channel();
        let tick_rate = Duration::from_millis(tick_rate_ms);

        thread::spawn(move || loop {
            if event::poll(tick_rate).unwrap_or(false) {
                match event::read() {
                    Ok(event::Event::Key(key))
                        if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Release) =>
                    {
                        if tx.send(Event::Key(key)).is_err() {
                            return;
                        }
                    }
                    Ok(event::Event::Mouse(mouse))
                        if mouse.kind == MouseEventKind::Down(MouseButton::Left) =>
                    {
                        if tx.send(Event::Mouse(mouse)).is_err() {
                            return;
                        }
                    }
                    _ => {}
                }
            } else if tx.send(Event::Tick).is_err() {
                return;
            }
        });

        Self { rx }
    }

    /// Block until the next event.
    pub fn next(&self) -> io::Result<Event> {
        self.rx
            .recv()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
    }

    /// Pop a queued event without blocking. Used to flush the backlog that
    /// piles up while the game is frozen in a respawn pause.
    pub fn try_next(&self) -> Option<Event> {
        self.rx.try_recv().ok()
    }
}
