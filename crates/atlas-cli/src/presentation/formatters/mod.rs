pub mod text;

pub use text::{chip_rows, terminal_width};
