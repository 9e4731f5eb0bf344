pub mod app;
pub mod input;
pub mod render;
pub mod session;
pub mod theme;
pub mod undo;

pub use app::{RunOptions, run};
