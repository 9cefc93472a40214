//! Layout file input.

mod file;

pub use file::{load_layout, parse_layout, LayoutFile, LayoutItem};
