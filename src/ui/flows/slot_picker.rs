use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, warn};
use ratatui::{prelude::*, widgets::*};

use crate::config::ScreenshotConfig;
use crate::error::Result;
use crate::screen::ScreenDump;
use crate::slots::{Picker, PickerEvent, PickerMode, SessionHooks, Step};
use crate::storage::{DirWatcher, FsStore, SaveStore};
use crate::ui::components::utils::split_vertical;
use crate::ui::components::{
    render_slot_grid, BufferDump, GridCursor, SlotGridView, TerminalBell, TerminalGuard,
};
use crate::ui::styles::{secondary_line, warning_style, ACCENT, LOAD_BORDER};
use crate::utils::{format_save_time, local_now};

/// Upper bound on typed characters; longer names are cut by sanitization anyway.
const MAX_EDIT_CHARS: usize = 120;

/// One-line message under the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub text: String,
    pub warning: bool,
}

impl Status {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            warning: false,
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            warning: true,
        }
    }
}

/// What a key press means for the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Up,
    Down,
    Left,
    Right,
    Choose,
    Cancel,
    Type(char),
    Erase,
    Submit,
    Revert,
    Screenshot,
    Nothing,
}

pub fn key_intent(key: KeyEvent, editing: bool) -> Intent {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Intent::Cancel;
    }
    if key.code == KeyCode::F(12) {
        return Intent::Screenshot;
    }

    if editing {
        return match key.code {
            KeyCode::Enter => Intent::Submit,
            KeyCode::Esc => Intent::Revert,
            KeyCode::Backspace => Intent::Erase,
            KeyCode::Char(ch) => Intent::Type(ch),
            _ => Intent::Nothing,
        };
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Intent::Up,
        KeyCode::Down | KeyCode::Char('j') => Intent::Down,
        KeyCode::Left | KeyCode::Char('h') => Intent::Left,
        KeyCode::Right | KeyCode::Char('l') => Intent::Right,
        KeyCode::Enter => Intent::Choose,
        KeyCode::Esc | KeyCode::Char('q') => Intent::Cancel,
        _ => Intent::Nothing,
    }
}

pub struct PickerView<'a> {
    pub title: &'a str,
    pub mode: PickerMode,
    pub grid: SlotGridView<'a>,
    pub status: Option<&'a Status>,
}

pub fn draw_picker(f: &mut Frame<'_>, view: &PickerView<'_>) {
    let chunks = split_vertical(
        f.size(),
        &[
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ],
    );

    let border = if view.mode.is_load() {
        LOAD_BORDER
    } else {
        ACCENT
    };
    let hint = if view.mode.is_load() {
        "\u{2191}\u{2193}\u{2190}\u{2192}/hjkl move • Enter load • Esc close • F12 screen dump"
    } else {
        "\u{2191}\u{2193}\u{2190}\u{2192}/hjkl move • Enter name slot • Esc close • F12 screen dump"
    };
    let banner = Paragraph::new(secondary_line(hint)).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(view.title.to_string())
            .title_alignment(Alignment::Center),
    );
    f.render_widget(banner, chunks[0]);

    render_slot_grid(f, chunks[1], &view.grid);

    let footer = match view.status {
        Some(status) if status.warning => {
            Paragraph::new(Line::styled(status.text.clone(), warning_style()))
        }
        Some(status) => Paragraph::new(Line::from(status.text.clone())),
        None => Paragraph::new(secondary_line(tooltip(&view.grid))),
    };
    f.render_widget(footer, chunks[2]);
}

fn tooltip(grid: &SlotGridView<'_>) -> String {
    grid.slots
        .get(grid.selected.index())
        .and_then(|slot| slot.save.as_ref())
        .map(|save| format_save_time(save.modified))
        .unwrap_or_default()
}

/// Run a load/save picker until the user picks a slot or backs out.
///
/// Returns the chosen save path, or `None` when cancelled.
pub fn run_slot_picker<S, H>(
    picker: &mut Picker<S, TerminalBell, H>,
    mode: PickerMode,
    title: &str,
    shots: &ScreenshotConfig,
    watcher: Option<&DirWatcher>,
) -> Result<Option<String>>
where
    S: SaveStore,
    H: SessionHooks,
{
    // Protect terminal state while the picker owns the screen.
    let mut guard = TerminalGuard::new()?;
    let mut session = picker.open(mode, title);
    let mut cursor = GridCursor::new(session.slots().len());
    let mut buffer = String::new();
    let mut status: Option<Status> = None;
    let mut dump = ScreenDump::new();
    let mut shot_store = FsStore;

    loop {
        if watcher.is_some_and(DirWatcher::changed) && session.refresh() {
            debug!("save directory changed; slots refreshed");
        }

        let frame = guard.terminal_mut().draw(|f| {
            let view = PickerView {
                title: session.title(),
                mode: session.mode(),
                grid: SlotGridView {
                    slots: session.slots(),
                    selected: cursor.selected(),
                    editing: session.editing().map(|id| (id, buffer.as_str())),
                },
                status: status.as_ref(),
            };
            draw_picker(f, &view);
        })?;

        if dump.is_required() {
            match dump.dump_if_required(&mut BufferDump::new(frame.buffer)) {
                Ok(Some(message)) => status = Some(Status::info(message)),
                Ok(None) => {}
                Err(err) => {
                    warn!("Screen dump failed: {err}");
                    status = Some(Status::warning(format!("Screen dump failed: {err}")));
                }
            }
        }

        if !event::poll(Duration::from_millis(200))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        let editing = session.editing().is_some();
        let step = match key_intent(key, editing) {
            Intent::Up => {
                cursor.up();
                None
            }
            Intent::Down => {
                cursor.down();
                None
            }
            Intent::Left => {
                cursor.left();
                None
            }
            Intent::Right => {
                cursor.right();
                None
            }
            Intent::Choose => Some(session.handle(PickerEvent::Select(cursor.selected()))),
            Intent::Cancel => Some(session.handle(PickerEvent::Cancel)),
            Intent::Type(ch) => {
                if buffer.chars().count() < MAX_EDIT_CHARS {
                    buffer.push(ch);
                }
                None
            }
            Intent::Erase => {
                buffer.pop();
                None
            }
            Intent::Submit => Some(session.handle(PickerEvent::EditFinished {
                text: buffer.clone(),
                submitted: true,
            })),
            Intent::Revert => Some(session.handle(PickerEvent::EditFinished {
                text: buffer.clone(),
                submitted: false,
            })),
            Intent::Screenshot => {
                let path = dump.request(&mut shot_store, shots, session.title(), local_now());
                debug!("screen dump requested: {path}");
                None
            }
            Intent::Nothing => None,
        };

        match step {
            Some(Step::Finished(result)) => {
                drop(session);
                guard.restore()?;
                return Ok(result);
            }
            Some(Step::EditStarted { seed, .. }) => {
                buffer = seed;
                status = Some(Status::info(
                    "Type a name • Enter to save • Esc to go back",
                ));
            }
            Some(Step::EditReverted { .. }) => {
                buffer.clear();
                status = None;
            }
            Some(Step::Rejected { conflicting, .. }) => {
                buffer.clear();
                status = Some(Status::warning(format!(
                    "That name is already used by slot {}",
                    conflicting.index() + 1
                )));
            }
            Some(Step::Ignored) => {
                if mode.is_load() {
                    status = Some(Status::info("Empty slot"));
                }
            }
            None => {
                if !editing {
                    status = None;
                }
            }
        }
    }
}
