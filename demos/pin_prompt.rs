//! PIN Prompt - interactive code field in the terminal
//!
//! Demonstrates:
//! - Mounting a code field with a comparison target
//! - Routing crossterm keys to the focused cell
//! - Rendering through FrameBuffer and write_frame
//!
//! Keys: type to enter, Backspace to delete, Tab / arrows to move focus,
//! Enter to clear, Esc to quit. The expected code is `2468`.
//!
//! Logs go to stderr: `RUST_LOG=spark_code_field=debug cargo run --example pin_prompt 2>log.txt`

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{cursor, execute, queue};
use tracing_subscriber::EnvFilter;

use spark_code_field::{
    cell_event_for_key, code_field, convert_key_event, tracked_focus, write_frame, CellEvent,
    CodeFieldConfig, CodeFieldProps, FrameBuffer, LayoutPosition, Rgba,
};

const WIDTH: u16 = 40;

/// Leaves raw mode and the alternate screen on drop.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = CodeFieldConfig {
        code_length: 4,
        compare_with_code: Some("2468".to_string()),
        position: LayoutPosition::Center,
        size: 3,
        space: 2,
        active_color: Rgba::GREEN,
        ..Default::default()
    };

    let status = Rc::new(RefCell::new(String::from("Enter the PIN")));
    let (handles, focused) = tracked_focus(config.cell_count());
    let props = CodeFieldProps::new(config)
        .on_code_change({
            let status = status.clone();
            move |code| *status.borrow_mut() = format!("Entered: {code}")
        })
        .on_fulfill({
            let status = status.clone();
            move |done| {
                *status.borrow_mut() = match done.is_matching {
                    Some(true) => format!("{} accepted", done.code),
                    Some(false) => format!("{} rejected, try again", done.code),
                    None => format!("{} entered", done.code),
                }
            }
        });
    let mut field = code_field(props, handles);

    let _guard = TerminalGuard::enter()?;
    let mut stdout = io::stdout();

    loop {
        let mut buffer = FrameBuffer::new(WIDTH, 3);
        if let Err(err) = field.render(&mut buffer, (0, 0), WIDTH) {
            tracing::warn!(%err, "layout failed");
        }
        queue!(stdout, Clear(ClearType::All))?;
        write_frame(&mut stdout, &buffer, (2, 1))?;
        queue!(
            stdout,
            cursor::MoveTo(2, 5),
            Print(status.borrow().as_str()),
            cursor::MoveTo(2, 7),
            Print("Tab/arrows: move  Enter: clear  Esc: quit"),
        )?;
        stdout.flush()?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind == KeyEventKind::Release {
            continue;
        }

        let len = field.cells().len();
        let current = focused.get().unwrap_or_else(|| field.active_index().unwrap_or(0));
        match key.code {
            KeyCode::Esc => break,
            KeyCode::Enter => {
                field.clear();
                *status.borrow_mut() = String::from("Cleared");
            }
            KeyCode::Tab | KeyCode::Right => {
                field.dispatch((current + 1).min(len - 1), CellEvent::Focused);
            }
            KeyCode::BackTab | KeyCode::Left => {
                field.dispatch(current.saturating_sub(1), CellEvent::Focused);
            }
            _ => {
                if let Some(cell_event) = cell_event_for_key(&convert_key_event(key)) {
                    field.dispatch(current, cell_event);
                }
            }
        }
    }

    Ok(())
}
