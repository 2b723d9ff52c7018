//! Record renderers: console lines with error boxes, or JSON lines

pub mod console;
pub mod error_box;
pub mod json;
pub mod style;
pub mod terminal;
