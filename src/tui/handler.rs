//! Event handler for the TUI
//!
//! Routes keyboard events to the focused element. Every edit is pushed into
//! the ledger right away, so the form session always holds what is on screen.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{App, Focus};
use super::event::Event;
use super::widgets::{CurrencyInput, TextInput};

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
    if key.kind == KeyEventKind::Release {
        return Ok(());
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    if app.show_help {
        app.show_help = false;
        return Ok(());
    }

    app.clear_status();

    // Navigation and submit work from every element
    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            app.focus_next();
            return Ok(());
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.focus_prev();
            return Ok(());
        }
        KeyCode::Enter => {
            app.press(app.focus.section());
            return Ok(());
        }
        _ => {}
    }

    match app.focus {
        Focus::ExpenseButton | Focus::CategoryButton | Focus::GoalButton => {
            handle_button_key(app, key)
        }
        Focus::ExpenseDescription => {
            if handle_text_key(&mut app.expense_description, key) {
                app.commit_inputs();
            } else {
                leave_field(app, key);
            }
        }
        Focus::CategoryName => {
            if handle_text_key(&mut app.category_name, key) {
                app.commit_inputs();
            } else {
                leave_field(app, key);
            }
        }
        Focus::ExpenseAmount => {
            if handle_currency_key(&mut app.expense_amount, key) {
                app.commit_inputs();
            } else {
                leave_field(app, key);
            }
        }
        Focus::GoalAmount => {
            if handle_currency_key(&mut app.goal_amount, key) {
                app.commit_inputs();
            } else {
                leave_field(app, key);
            }
        }
        Focus::ExpenseCategory | Focus::GoalCategory => handle_dropdown_key(app, key),
    }

    Ok(())
}

/// Keys while a button has focus
fn handle_button_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char(' ') => {
            app.press(app.focus.section());
        }
        _ => {}
    }
}

/// Esc jumps from a field back to its section's button
fn leave_field(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Esc {
        app.focus = Focus::button(app.focus.section());
    }
}

/// Plain characters only; Ctrl and Alt chords never type
fn is_typed(key: &KeyEvent) -> bool {
    !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

/// Edit a text field; returns whether the content may have changed
fn handle_text_key(input: &mut TextInput, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        KeyCode::Char(c) if is_typed(&key) => input.insert(c),
        _ => return false,
    }
    true
}

/// Edit a currency field; returns whether the value may have changed
fn handle_currency_key(input: &mut CurrencyInput, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(c) if c.is_ascii_digit() && is_typed(&key) => {
            if let Some(digit) = c.to_digit(10) {
                input.push_digit(digit);
            }
        }
        KeyCode::Char('-') if is_typed(&key) => input.toggle_sign(),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.clear(),
        _ => return false,
    }
    true
}

/// Step the focused dropdown
fn handle_dropdown_key(app: &mut App, key: KeyEvent) {
    let kind = app.focus.section();
    match key.code {
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('j') | KeyCode::Char(' ') => {
            app.cycle_category(kind, true)
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('k') => {
            app.cycle_category(kind, false)
        }
        _ => leave_field(app, key),
    }
}
