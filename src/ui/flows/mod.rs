pub mod slot_picker;

pub use slot_picker::run_slot_picker;
