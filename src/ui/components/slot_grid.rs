use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem};

use crate::slots::{Slot, SlotId};
use crate::ui::components::utils::equal_columns;
use crate::ui::styles::{edit_style, secondary_line, selection_style};
use crate::utils::fit_caption;

pub const SLOTS_PER_COLUMN: usize = 12;

pub fn column_count(capacity: usize) -> usize {
    capacity.div_ceil(SLOTS_PER_COLUMN).max(1)
}

/// Keyboard position in the slot grid. Slots fill columns top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCursor {
    capacity: usize,
    selected: usize,
}

impl GridCursor {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            selected: 0,
        }
    }

    pub fn selected(&self) -> SlotId {
        SlotId(self.selected)
    }

    fn column(&self) -> usize {
        self.selected / SLOTS_PER_COLUMN
    }

    fn row(&self) -> usize {
        self.selected % SLOTS_PER_COLUMN
    }

    fn column_len(&self, column: usize) -> usize {
        let start = column * SLOTS_PER_COLUMN;
        (self.capacity - start).min(SLOTS_PER_COLUMN)
    }

    pub fn up(&mut self) {
        let column = self.column();
        if self.row() == 0 {
            self.selected = column * SLOTS_PER_COLUMN + self.column_len(column) - 1;
        } else {
            self.selected -= 1;
        }
    }

    pub fn down(&mut self) {
        let column = self.column();
        if self.row() + 1 >= self.column_len(column) {
            self.selected = column * SLOTS_PER_COLUMN;
        } else {
            self.selected += 1;
        }
    }

    pub fn left(&mut self) {
        let columns = column_count(self.capacity);
        let column = (self.column() + columns - 1) % columns;
        self.jump_to(column);
    }

    pub fn right(&mut self) {
        let columns = column_count(self.capacity);
        let column = (self.column() + 1) % columns;
        self.jump_to(column);
    }

    fn jump_to(&mut self, column: usize) {
        let row = self.row().min(self.column_len(column) - 1);
        self.selected = column * SLOTS_PER_COLUMN + row;
    }
}

/// What the grid needs to draw one frame.
pub struct SlotGridView<'a> {
    pub slots: &'a [Slot],
    pub selected: SlotId,
    pub editing: Option<(SlotId, &'a str)>,
}

pub fn render_slot_grid(f: &mut Frame<'_>, area: Rect, view: &SlotGridView<'_>) {
    let columns = equal_columns(area, column_count(view.slots.len()));

    for (column, rect) in columns.into_iter().enumerate() {
        let block = Block::default().borders(Borders::ALL);
        let caption_width = block.inner(rect).width.saturating_sub(3) as usize;

        let start = column * SLOTS_PER_COLUMN;
        let end = (start + SLOTS_PER_COLUMN).min(view.slots.len());
        let items: Vec<ListItem> = view.slots[start..end]
            .iter()
            .map(|slot| slot_item(slot, view, caption_width))
            .collect();

        f.render_widget(List::new(items).block(block), rect);
    }
}

fn slot_item<'a>(slot: &'a Slot, view: &SlotGridView<'a>, width: usize) -> ListItem<'a> {
    let number = slot.id.index() + 1;

    if let Some((_, text)) = view.editing.filter(|(id, _)| *id == slot.id) {
        let mut shown = fit_caption(text, width.saturating_sub(1)).to_string();
        shown.push('_');
        return ListItem::new(Line::from(format!("{number:>2} {shown}"))).style(edit_style());
    }

    let item = match slot.name() {
        Some(name) => ListItem::new(Line::from(format!(
            "{number:>2} {}",
            fit_caption(name, width)
        ))),
        None => ListItem::new(secondary_line(format!("{number:>2} ·"))),
    };
    if slot.id == view.selected {
        item.style(selection_style())
    } else {
        item
    }
}
