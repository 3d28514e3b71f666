//! Alien-invasion shooter for the terminal.
//!
//! A lone ship defends the bottom of the screen against a fleet that
//! marches sideways, drops, and speeds up every time it is wiped out.
//! The battlefield is rasterized onto braille cells, so each terminal
//! cell contributes a 2x4 block of pixels.

pub mod clock;
pub mod entities;
pub mod event;
pub mod fleet;
pub mod game;
pub mod scoreboard;
pub mod settings;
pub mod sprites;
pub mod stats;
pub mod ui;
