pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod keyboard;
pub mod keycodes;
pub mod layouts;
pub mod registry;
// cmd and reports belong to the binary (main.rs).

pub use error::{KsResult, LayoutError};
pub use geometry::{Coord, LayoutGrid, Offset};
pub use input::{InputSnapshot, InputSource};
pub use keyboard::Keyboard;
pub use keycodes::KeyCode;
pub use layouts::LayoutId;
pub use registry::LayoutRegistry;
