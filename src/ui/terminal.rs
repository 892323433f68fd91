use super::surface::{Rgb, Surface};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};

const NUCLEUS: &str = "●";
const RING: &str = "o";

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Rasterises a frame into a character grid, one glyph per cell.
///
/// Rings are drawn as `o` and nuclei as `●`; a nucleus always wins over a
/// ring sharing the same character cell.
pub struct TerminalSurface {
    buf: Buffer,
    background: Rgb,
    units_per_col: f64,
    units_per_row: f64,
}

impl TerminalSurface {
    #[must_use]
    pub fn new(cols: u16, rows: u16, window_size: f64) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            buf: Buffer::empty(Rect::new(0, 0, cols, rows)),
            background: Rgb::BROTH,
            units_per_col: window_size / f64::from(cols),
            units_per_row: window_size / f64::from(rows),
        }
    }

    #[must_use]
    pub fn buffer(&self) -> &Buffer {
        &self.buf
    }

    fn locate(&self, x: f64, y: f64) -> Option<(u16, u16)> {
        if !x.is_finite() || !y.is_finite() || x < 0.0 || y < 0.0 {
            return None;
        }
        let area = self.buf.area;
        // The far edge of the soup belongs to the last column/row.
        let col = ((x / self.units_per_col) as u16).min(area.width - 1);
        let row = ((y / self.units_per_row) as u16).min(area.height - 1);
        Some((col, row))
    }

    /// Plain-text dump of the grid, trailing blanks trimmed per line.
    #[must_use]
    pub fn to_text(&self) -> String {
        let area = self.buf.area;
        let mut out = String::new();
        for row in 0..area.height {
            let mut line = String::new();
            for col in 0..area.width {
                if let Some(cell) = self.buf.cell((col, row)) {
                    line.push_str(cell.symbol());
                }
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }
}

impl Surface for TerminalSurface {
    fn clear(&mut self, color: Rgb) {
        self.background = color;
        self.buf.reset();
        let area = self.buf.area;
        self.buf.set_style(area, Style::default().bg(to_color(color)));
    }

    fn fill_disc(&mut self, x: f64, y: f64, _radius: f64, color: Rgb) {
        if color == self.background {
            return;
        }
        if let Some(pos) = self.locate(x, y) {
            if let Some(cell) = self.buf.cell_mut(pos) {
                cell.set_symbol(NUCLEUS).set_fg(to_color(color));
            }
        }
    }

    fn stroke_circle(&mut self, x: f64, y: f64, _radius: f64, color: Rgb) {
        if let Some(pos) = self.locate(x, y) {
            if let Some(cell) = self.buf.cell_mut(pos) {
                if cell.symbol() != NUCLEUS {
                    cell.set_symbol(RING).set_fg(to_color(color));
                }
            }
        }
    }

    fn text(&mut self, x: f64, y: f64, text: &str, color: Rgb) {
        if let Some((col, row)) = self.locate(x, y) {
            self.buf
                .set_string(col, row, text, Style::default().fg(to_color(color)));
        }
    }

    fn line_height(&self) -> f64 {
        self.units_per_row
    }
}
