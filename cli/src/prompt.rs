//! Minimal single-choice terminal prompt for disambiguating tied
//! candidates. Blocks until the user picks an entry or cancels.

use std::io;
use std::io::Write;

use crossterm::cursor::MoveToColumn;
use crossterm::cursor::MoveUp;
use crossterm::event::Event;
use crossterm::event::KeyCode;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use crossterm::event::read;
use crossterm::queue;
use crossterm::terminal;
use crossterm::terminal::Clear;
use crossterm::terminal::ClearType;

/// Outcome of one selection exchange. Cancellation is an ordinary result so
/// callers can abort without executing anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Selected(usize),
    Cancelled,
}

/// Presents `items` under `label` and blocks for a single choice.
///
/// Up/Down (or k/j) move with wrap-around, Enter accepts, and Esc, q, or
/// Ctrl-C cancel. Rendering goes to stderr so stdout stays reserved for the
/// relayed command output.
pub fn select(label: &str, items: &[String]) -> io::Result<Choice> {
    debug_assert!(!items.is_empty());
    let mut stderr = io::stderr();
    writeln!(stderr, "{label}")?;

    terminal::enable_raw_mode()?;
    let result = select_loop(&mut stderr, items);
    terminal::disable_raw_mode()?;
    result
}

fn select_loop(out: &mut impl Write, items: &[String]) -> io::Result<Choice> {
    let mut selected = 0usize;
    render(out, items, selected, true)?;

    loop {
        let Event::Key(key) = read()? else { continue };
        if key.kind == KeyEventKind::Release {
            continue;
        }
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                selected = if selected == 0 {
                    items.len() - 1
                } else {
                    selected - 1
                };
            }
            KeyCode::Down | KeyCode::Char('j') => {
                selected = (selected + 1) % items.len();
            }
            KeyCode::Enter => return Ok(Choice::Selected(selected)),
            KeyCode::Esc | KeyCode::Char('q') => return Ok(Choice::Cancelled),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Ok(Choice::Cancelled);
            }
            _ => {}
        }
        render(out, items, selected, false)?;
    }
}

fn render(out: &mut impl Write, items: &[String], selected: usize, first: bool) -> io::Result<()> {
    if !first {
        queue!(out, MoveUp(items.len() as u16))?;
    }
    for (idx, item) in items.iter().enumerate() {
        queue!(out, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
        let marker = if idx == selected { '>' } else { ' ' };
        // Raw mode needs an explicit carriage return.
        write!(out, "{marker} {item}\r\n")?;
    }
    out.flush()
}
