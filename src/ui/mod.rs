pub mod components;
pub mod flows;
pub mod styles;

pub use flows::run_slot_picker;
