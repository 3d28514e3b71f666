use std::io;

use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use fleetfall::event::{Event, EventHandler};
use fleetfall::game::Invasion;
use fleetfall::ui;

/// A terminal cell is a 2x4 block of braille dots.
const DOTS_PER_COL: i32 = 2;
const DOTS_PER_ROW: i32 = 4;
/// Chrome around the field: outer border plus the status and help bars.
const CHROME_COLS: i32 = 2;
const CHROME_ROWS: i32 = 4;

fn main() -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle("Fleetfall")
    )?;
    // Key releases arrive only under the kitty keyboard protocol; hold-to-
    // move needs them, so ask for the flags where the terminal offers them.
    let enhanced_keys = matches!(supports_keyboard_enhancement(), Ok(true));
    if enhanced_keys {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // The logical battlefield is sized once, from the terminal we start
    // in. Resizes later rescale the picture, never the game.
    let size = terminal.size()?;
    let mut game = Invasion::new(
        (size.width as i32 - CHROME_COLS).max(0) * DOTS_PER_COL,
        (size.height as i32 - CHROME_ROWS).max(0) * DOTS_PER_ROW,
    );
    let event_handler = EventHandler::new(16); // ~60 FPS

    // Main loop
    loop {
        terminal.draw(|frame| ui::render(frame, &mut game))?;

        // The cursor doubles as the pointer; draw() hides it every frame,
        // so re-show it whenever the play control is up.
        if game.cursor_visible() {
            terminal.show_cursor()?;
        }

        match event_handler.next()? {
            Event::Tick => {
                game.on_tick();
                if game.take_respawn_pause() {
                    // The pump kept queueing during the freeze. Replay the
                    // keys so held movement stays truthful, drop the stale
                    // ticks so the fleet does not leap.
                    while let Some(event) = event_handler.try_next() {
                        match event {
                            Event::Key(key) => game.on_key(key),
                            Event::Mouse(mouse) => game.on_mouse(mouse),
                            Event::Tick => {}
                        }
                    }
                }
            }
            Event::Key(key) => game.on_key(key),
            Event::Mouse(mouse) => game.on_mouse(mouse),
        }

        if game.should_quit() {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    if enhanced_keys {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
