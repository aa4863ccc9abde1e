pub mod enums;
pub mod item;

pub use enums::{Focus, InputMode};
pub use item::{Note, Todo};
