//! Painter's-algorithm polygon rasterizer for the terminal
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use nalgebra::Point2;
use platon_core::{is_progressed, Frame};
use std::io::Write;

/// Fill glyphs, cycled by original face index so adjacent faces stay
/// distinguishable as the solid turns.
const FACE_GLYPHS: &[char] = &['.', ':', '-', '=', '+', '*', '#', '%'];

/// Glyph for faces flagged by the progress counter.
const PROGRESSED_GLYPH: char = '@';

/// Rasterizes depth-ordered frames into a character buffer.
///
/// There is no depth buffer: faces arrive back to front and each fill
/// simply overwrites whatever farther faces already painted.
pub struct PolygonRasterizer {
    width: usize,
    height: usize,
    scale: f64,
    char_buffer: Vec<char>,
}

impl PolygonRasterizer {
    pub fn new(width: usize, height: usize, scale: f64) -> Self {
        Self {
            width,
            height,
            scale,
            char_buffer: vec![' '; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn glyph_at(&self, col: usize, row: usize) -> char {
        self.char_buffer[row * self.width + col]
    }

    pub fn clear(&mut self) {
        self.char_buffer.fill(' ');
    }

    /// Fills every face of the frame, in the frame's back-to-front order.
    pub fn render_frame(&mut self, frame: &Frame, progressed: usize) {
        for face in &frame.faces {
            let glyph = if is_progressed(face.index, progressed) {
                PROGRESSED_GLYPH
            } else {
                FACE_GLYPHS[face.index % FACE_GLYPHS.len()]
            };
            self.fill_polygon(&face.points, glyph);
        }
    }

    /// Maps solid coordinates (y up, `[-scale, scale]`) to fractional cell
    /// coordinates (y down, x stretched 2:1 for the cell aspect ratio).
    fn to_cell(&self, p: &Point2<f64>) -> (f64, f64) {
        // Half-extent in rows that keeps the square viewport on screen.
        let extent = (self.width as f64 / 2.0).min(self.height as f64) / 2.0;
        let cx = self.width as f64 / 2.0;
        let cy = self.height as f64 / 2.0;
        (
            cx + (p.x / self.scale) * extent * 2.0,
            cy - (p.y / self.scale) * extent,
        )
    }

    /// Scanline fill of one convex polygon outline.
    fn fill_polygon(&mut self, points: &[Point2<f64>], glyph: char) {
        if points.len() < 3 {
            return;
        }
        let cells: Vec<(f64, f64)> = points.iter().map(|p| self.to_cell(p)).collect();

        let top = cells.iter().map(|c| c.1).fold(f64::INFINITY, f64::min);
        let bottom = cells.iter().map(|c| c.1).fold(f64::NEG_INFINITY, f64::max);
        let first_row = (top.floor() as i64).max(0);
        let last_row = (bottom.ceil() as i64).min(self.height as i64 - 1);

        for row in first_row..=last_row {
            let py = row as f64 + 0.5;

            let mut crossings: Vec<f64> = Vec::new();
            for i in 0..cells.len() {
                let a = cells[i];
                let b = cells[(i + 1) % cells.len()];
                // Half-open span test so a vertex on the scanline is
                // counted by exactly one of its two edges.
                if (a.1 <= py && b.1 > py) || (b.1 <= py && a.1 > py) {
                    let t = (py - a.1) / (b.1 - a.1);
                    crossings.push(a.0 + t * (b.0 - a.0));
                }
            }
            crossings.sort_by(f64::total_cmp);

            for span in crossings.chunks(2) {
                let [start, end] = span else { break };
                let first_col = (start.round() as i64).max(0);
                let last_col = (end.round() as i64).min(self.width as i64 - 1);
                for col in first_col..=last_col {
                    self.char_buffer[row as usize * self.width + col as usize] = glyph;
                }
            }
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for row in 0..self.height {
            for col in 0..self.width {
                let c = self.char_buffer[row * self.width + col];
                writer.queue(SetForegroundColor(glyph_color(c)))?;
                writer.queue(Print(c))?;
            }
            writer.queue(Print("\r\n"))?;
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

fn glyph_color(c: char) -> Color {
    match c {
        '.' | ':' | '-' => Color::DarkGrey,
        '=' | '+' => Color::Grey,
        '*' | '#' | '%' => Color::White,
        PROGRESSED_GLYPH => Color::Cyan,
        _ => Color::Reset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platon_core::FrameFace;

    fn square(half: f64, depth: i64, index: usize) -> FrameFace {
        FrameFace {
            index,
            depth,
            points: vec![
                Point2::new(-half, -half),
                Point2::new(half, -half),
                Point2::new(half, half),
                Point2::new(-half, half),
            ],
        }
    }

    #[test]
    fn test_fill_covers_center() {
        let mut raster = PolygonRasterizer::new(40, 20, 1.0);
        let frame = Frame {
            faces: vec![square(0.9, 0, 0)],
        };
        raster.render_frame(&frame, 0);
        assert_eq!(raster.glyph_at(20, 10), FACE_GLYPHS[0]);
        // Corners stay empty: the square viewport is centered.
        assert_eq!(raster.glyph_at(0, 0), ' ');
    }

    #[test]
    fn test_nearer_face_overwrites_farther() {
        let mut raster = PolygonRasterizer::new(40, 20, 1.0);
        // Back-to-front: the larger face is farther, the nearer small
        // face must win the overlapping cells.
        let frame = Frame {
            faces: vec![square(0.9, -100, 0), square(0.4, 100, 1)],
        };
        raster.render_frame(&frame, 0);
        assert_eq!(raster.glyph_at(20, 10), FACE_GLYPHS[1]);
    }

    #[test]
    fn test_progressed_face_uses_progress_glyph() {
        let mut raster = PolygonRasterizer::new(40, 20, 1.0);
        let frame = Frame {
            faces: vec![square(0.9, 0, 0)],
        };
        raster.render_frame(&frame, 1);
        assert_eq!(raster.glyph_at(20, 10), PROGRESSED_GLYPH);
    }

    #[test]
    fn test_offscreen_polygon_is_clipped() {
        let mut raster = PolygonRasterizer::new(40, 20, 1.0);
        let face = FrameFace {
            index: 0,
            depth: 0,
            points: vec![
                Point2::new(5.0, 5.0),
                Point2::new(6.0, 5.0),
                Point2::new(6.0, 6.0),
            ],
        };
        raster.render_frame(
            &Frame {
                faces: vec![face],
            },
            0,
        );
        for row in 0..20 {
            for col in 0..40 {
                assert_eq!(raster.glyph_at(col, row), ' ');
            }
        }
    }

    #[test]
    fn test_clear_resets_buffer() {
        let mut raster = PolygonRasterizer::new(10, 10, 1.0);
        raster.render_frame(
            &Frame {
                faces: vec![square(0.9, 0, 0)],
            },
            0,
        );
        raster.clear();
        for row in 0..10 {
            for col in 0..10 {
                assert_eq!(raster.glyph_at(col, row), ' ');
            }
        }
    }
}
