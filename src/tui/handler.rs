//! Event handler for the dashboard
//!
//! Routes keyboard events to the entry form.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::App;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => Ok(()),
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Windows terminals deliver both press and release events
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    // Typing clears any previous status or error line
    if matches!(key.code, KeyCode::Char(_) | KeyCode::Backspace) {
        app.status = None;
        app.form.error_message = None;
    }

    match key.code {
        KeyCode::Esc => {
            app.quit();
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.quit();
        }
        KeyCode::Tab | KeyCode::Down => {
            app.form.focus_next();
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.form.focus_prev();
        }
        KeyCode::Enter => {
            app.submit_form();
        }
        KeyCode::Backspace => {
            app.form.focused_input_mut().backspace();
        }
        KeyCode::Left => {
            app.form.focused_input_mut().move_left();
        }
        KeyCode::Right => {
            app.form.focused_input_mut().move_right();
        }
        KeyCode::Char(c) => {
            app.form.focused_input_mut().insert(c);
        }
        _ => {}
    }

    Ok(())
}
