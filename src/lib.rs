pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod screen;
pub mod slots;
pub mod storage;
pub mod ui;
pub mod utils;

pub use error::{AppError, Result};
