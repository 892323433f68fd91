//! The rendering sink the painter draws into.
//!
//! Coordinates are in soup space (`[0, window_size]` on both axes); a
//! surface maps them onto whatever it actually draws on.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    /// Warm broth colour used for the background and the ring fill.
    pub const BROTH: Rgb = Rgb(255, 240, 200);
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Rgb),
    FillDisc { x: f64, y: f64, radius: f64, color: Rgb },
    StrokeCircle { x: f64, y: f64, radius: f64, color: Rgb },
    Text { x: f64, y: f64, text: String, color: Rgb },
}

pub trait Surface {
    fn clear(&mut self, color: Rgb);
    fn fill_disc(&mut self, x: f64, y: f64, radius: f64, color: Rgb);
    fn stroke_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgb);
    fn text(&mut self, x: f64, y: f64, text: &str, color: Rgb);

    /// Vertical distance between overlay lines, in soup units.
    fn line_height(&self) -> f64 {
        20.0
    }
}

/// Surface that just remembers what it was asked to draw.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, color: Rgb) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_disc(&mut self, x: f64, y: f64, radius: f64, color: Rgb) {
        self.commands.push(DrawCommand::FillDisc { x, y, radius, color });
    }

    fn stroke_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgb) {
        self.commands
            .push(DrawCommand::StrokeCircle { x, y, radius, color });
    }

    fn text(&mut self, x: f64, y: f64, text: &str, color: Rgb) {
        self.commands.push(DrawCommand::Text {
            x,
            y,
            text: text.to_string(),
            color,
        });
    }
}
