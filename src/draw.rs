//! Rendering a solved maze to an [`RgbImage`].
//!
//! Cell fills and grid lines go through [`imageproc`]; step labels are rasterised with a
//! bitmap font through an [`embedded_graphics`] draw target wrapped around the image.

use std::convert::Infallible;

use bitmap_font::{tamzen, TextStyle};
use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::Dimensions,
    pixelcolor::BinaryColor,
    prelude::{Point, Size},
    primitives::Rectangle,
    text::{renderer::TextRenderer, Baseline, Text},
    Drawable, Pixel,
};
use image::{Rgb, RgbImage};
use imageproc::{drawing, rect::Rect};

use crate::maze::{Cell, Coord, Escape, Grid};

const BOX_SEP: usize = 22;

/// Paints lit glyph pixels of [`BinaryColor`] text onto an image in a fixed ink.
struct Ink<'a> {
    canvas: &'a mut RgbImage,
    color: Rgb<u8>,
}

impl Ink<'_> {
    /// Draws `s` centred on `center`.
    fn label(&mut self, s: &str, center: Point) {
        let style = TextStyle::new(&tamzen::FONT_5x9, BinaryColor::On);
        let metrics = style.measure_string(s, center, Baseline::Middle);
        Text::new(s, center - metrics.bounding_box.size / 2, style)
            .draw(self)
            .unwrap_or_else(|never| match never {});
    }
}

impl Dimensions for Ink<'_> {
    fn bounding_box(&self) -> Rectangle {
        Rectangle::new(
            Point::zero(),
            Size::new(self.canvas.width(), self.canvas.height()),
        )
    }
}

impl DrawTarget for Ink<'_> {
    type Color = BinaryColor;

    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let bounds = self.bounding_box();
        for Pixel(at, color) in pixels {
            if color.is_on() && bounds.contains(at) {
                self.canvas.put_pixel(at.x as u32, at.y as u32, self.color);
            }
        }
        Ok(())
    }
}

fn cell_rect(at: Coord) -> Rect {
    Rect::at((BOX_SEP * at.col) as _, (BOX_SEP * at.row) as _).of_size(BOX_SEP as _, BOX_SEP as _)
}

fn cell_center(at: Coord) -> Point {
    Point::new(
        (BOX_SEP * at.col + BOX_SEP / 2) as i32 + 1,
        (BOX_SEP * at.row + BOX_SEP / 2) as i32 + 1,
    )
}

/// Draws `grid` with `escape`'s route tinted and numbered from 1, and the removed wall (if any)
/// highlighted.
pub fn draw_maze(grid: &Grid, escape: &Escape) -> RgbImage {
    let (h, w) = (grid.height(), grid.width());
    let mut img = RgbImage::new((BOX_SEP * w + 1) as u32, (BOX_SEP * h + 1) as u32);

    let line_color = [64, 64, 64].into();
    let text_color = [255, 255, 255].into();

    // Cells.
    for at in grid.coords() {
        let on_route = escape.route.contains(&at);
        let box_color = match (grid.cell(at), on_route) {
            (Cell::Wall, true) => [160, 40, 40],
            (Cell::Wall, false) => [96, 96, 96],
            (Cell::Passable, true) => [0, 70, 100],
            (Cell::Passable, false) => [0, 0, 0],
        };
        drawing::draw_filled_rect_mut(&mut img, cell_rect(at), box_color.into());
    }

    // Step labels.
    let mut ink = Ink {
        canvas: &mut img,
        color: text_color,
    };
    for (i, &at) in escape.route.iter().enumerate() {
        ink.label(&(i + 1).to_string(), cell_center(at));
    }

    // Grid.
    for row in 0..=h {
        let y = (BOX_SEP * row) as f32;
        drawing::draw_line_segment_mut(&mut img, (0.0, y), ((BOX_SEP * w) as f32, y), line_color);
    }
    for col in 0..=w {
        let x = (BOX_SEP * col) as f32;
        drawing::draw_line_segment_mut(&mut img, (x, 0.0), (x, (BOX_SEP * h) as f32), line_color);
    }

    img
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Solver;

    #[test]
    fn image_covers_grid_and_marks_route() {
        let grid: Grid = "0110\n0001\n1100\n1110".parse().unwrap();
        let escape = Solver::new(&grid).solve().unwrap();
        let img = draw_maze(&grid, &escape);
        assert_eq!(img.dimensions(), (89, 89));

        // Corner pixel of each cell, just inside the grid lines.
        let corner = |at: Coord| {
            *img.get_pixel((BOX_SEP * at.col + 1) as u32, (BOX_SEP * at.row + 1) as u32)
        };
        assert_eq!(corner(grid.start()), Rgb([0, 70, 100]));
        assert_eq!(corner(Coord::new(3, 0)), Rgb([96, 96, 96]));
        if let Some(wall) = escape.removed_wall {
            assert_eq!(corner(wall), Rgb([160, 40, 40]));
        }
        assert_eq!(*img.get_pixel(0, 0), Rgb([64, 64, 64]));
    }
}
