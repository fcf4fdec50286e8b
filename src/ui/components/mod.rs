pub mod frame_dump;
pub mod slot_grid;
pub mod terminal;
pub mod utils;

pub use frame_dump::BufferDump;
pub use slot_grid::{render_slot_grid, GridCursor, SlotGridView};
pub use terminal::{TerminalBell, TerminalGuard};
