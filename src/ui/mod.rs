//! Read-only projection of a soup onto a drawing surface.

pub mod painter;
pub mod surface;
pub mod terminal;

pub use painter::paint;
pub use surface::{DrawCommand, RecordingSurface, Rgb, Surface};
pub use terminal::TerminalSurface;
