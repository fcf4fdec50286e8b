pub mod screenshot;

pub use screenshot::{screenshot_path, FrameEncoder, ScreenDump};
