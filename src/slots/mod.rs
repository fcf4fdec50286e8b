//! Save slots: name sanitization, collision policy, directory listing and
//! the picker session that ties them together.

pub mod listing;
pub mod mode;
pub mod name;
pub mod namespace;
pub mod resolver;
pub mod session;

pub use listing::{list_slots, ExtensionMatch, SlotListing, DEFAULT_SLOT_CAPACITY};
pub use mode::PickerMode;
pub use name::{sanitize, SlotName, MAX_SLOT_NAME};
pub use namespace::{SlotId, SlotNamespace};
pub use resolver::{PendingRename, Resolution};
pub use session::{Feedback, Picker, PickerEvent, Session, SessionHooks, Slot, Step};
