use std::borrow::Cow;

use ratatui::prelude::Stylize;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;

/// Accent color used for prompts, highlights, and the save banner.
pub const ACCENT: Color = Color::Indexed(208);

/// Banner border while loading.
pub const LOAD_BORDER: Color = Color::Green;

/// Produce a dimmed line for secondary descriptions and hints.
pub fn secondary_line<'a>(text: impl Into<Cow<'a, str>>) -> Line<'a> {
    let owned = text.into().into_owned();
    Line::from(owned.dim())
}

/// Apply the accent and bold modifiers for the selected slot.
pub fn selection_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// The slot currently being renamed.
pub fn edit_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::REVERSED)
}

/// Status messages reporting a refused action.
pub fn warning_style() -> Style {
    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
}
