pub mod menu;
pub mod render;

pub use menu::{Command, Menu};
