//! Startup keypress gate
//!
//! Blocks until any key is pressed, so an operator attaching a debugger can
//! do so before the server starts accepting. Raw mode makes a single
//! keypress (not a full line) resume startup and is restored on every exit
//! path. Callers treat failure as "no terminal attached" and skip the gate.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;

/// Wait for one key press on the controlling terminal.
pub fn wait_for_keypress() -> Result<()> {
    terminal::enable_raw_mode()?;
    let result = next_key_press();

    // Always try to restore the terminal state.
    let restored = terminal::disable_raw_mode();
    result?;
    restored?;
    Ok(())
}

fn next_key_press() -> Result<()> {
    loop {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => return Ok(()),
            _ => {}
        }
    }
}
