pub mod buffer;
pub mod rect;
pub mod terminal;
pub mod text;
pub mod types;

pub use buffer::{Buffer, Cell};
pub use rect::Rect;
pub use terminal::Terminal;
pub use types::*;
