use std::thread;
use std::time::Duration;

/// Blocking delay, abstracted so the game can freeze for dramatic beats
/// without tests having to wait out real time.
pub trait Sleeper {
    fn sleep(&mut self, duration: Duration);
}

/// Production sleeper backed by the OS clock.
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}
