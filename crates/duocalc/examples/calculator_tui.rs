//! Calculator TUI Example
//!
//! Run with: cargo run --example calculator_tui --features tui

use std::io;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use duocalc::tui::{render, CalculatorApp, InputHandler, KeyAction};
use ratatui::{backend::CrosstermBackend, Terminal};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
    }

    Ok(())
}

/// Handle a single key action and return whether to quit
fn handle_action(app: &mut CalculatorApp, action: KeyAction) -> bool {
    match action {
        KeyAction::InsertChar(c) => app.insert_char(c),
        KeyAction::Backspace => app.backspace(),
        KeyAction::SwitchField => app.switch_focus(),
        KeyAction::SelectOperation(op) => app.select_operation(op),
        KeyAction::Reset => app.reset(),
        KeyAction::Quit => return true,
        KeyAction::None => {}
    }
    false
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = CalculatorApp::new();
    let input_handler = InputHandler::new();

    loop {
        terminal.draw(|f| render(&app, f))?;

        if let Event::Key(key) = event::read()? {
            let action = input_handler.handle_key(key, app.focused_text());
            if handle_action(&mut app, action) {
                break;
            }
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
