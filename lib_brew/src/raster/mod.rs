pub mod canvas;
pub mod color;
pub mod composite;
pub mod shape;

pub use canvas::{Canvas, CanvasError};
pub use color::Rgba8;
pub use composite::blend;
pub use shape::Shape;
