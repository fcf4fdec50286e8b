pub mod text;
pub mod time;

pub use text::fit_caption;
pub use time::{format_save_time, local_now};
