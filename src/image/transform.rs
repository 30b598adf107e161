// src/image/transform.rs

//! Mirroring and concatenation.
//!
//! Every transform copies the rows it needs into the new image; no row is
//! ever shared with an operand.

use crate::image::bw_image::Image;
use crate::rle::RleRow;
use crate::utils::instrumentation::Instrumentation;

fn copy_row(row: &RleRow, ctx: &Instrumentation) -> RleRow {
    ctx.pixmem(row.run_count() + 1);
    row.clone()
}

impl Image {
    /// Flips the image top to bottom. Rows are copied unchanged in reverse order.
    pub fn horizontal_mirror(&self, ctx: &Instrumentation) -> Image {
        let rows = self.rows().iter().rev().map(|row| copy_row(row, ctx)).collect();
        Image::from_rows_unchecked(self.width(), self.height(), rows)
    }

    /// Flips the image left to right by reversing the run list of every row.
    pub fn vertical_mirror(&self, ctx: &Instrumentation) -> Image {
        let rows = self
            .rows()
            .iter()
            .map(|row| {
                ctx.pixmem(row.run_count() + 1);
                row.reversed()
            })
            .collect();
        Image::from_rows_unchecked(self.width(), self.height(), rows)
    }

    /// Stacks `other` below `self`. Both must have the same width.
    pub fn replicate_at_bottom(&self, other: &Image, ctx: &Instrumentation) -> Image {
        assert_eq!(self.width(), other.width(), "images must have the same width");
        let Some(height) = self.height().checked_add(other.height()) else {
            panic!("combined height overflows u32");
        };

        let top = self.height() as usize;
        let rows = (0..height as usize)
            .map(|i| {
                let source = if i < top {
                    &self.rows()[i]
                } else {
                    &other.rows()[i - top]
                };
                copy_row(source, ctx)
            })
            .collect();
        Image::from_rows_unchecked(self.width(), height, rows)
    }

    /// Places `other` to the right of `self`. Both must have the same height.
    pub fn replicate_at_right(&self, other: &Image, ctx: &Instrumentation) -> Image {
        assert_eq!(self.height(), other.height(), "images must have the same height");
        let Some(width) = self.width().checked_add(other.width()) else {
            panic!("combined width overflows u32");
        };

        let rows = self
            .rows()
            .iter()
            .zip(other.rows())
            .map(|(left, right)| {
                ctx.pixmem(left.run_count() + right.run_count() + 2);
                left.concat(right)
            })
            .collect();
        Image::from_rows_unchecked(width, self.height(), rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::pixel::Pixel::{self, Black as B, White as W};

    fn image(width: u32, pixels: &[Pixel]) -> Image {
        let ctx = Instrumentation::new();
        Image::from_pixels(width, pixels.len() as u32 / width, pixels, &ctx).unwrap()
    }

    #[test]
    fn test_horizontal_mirror_reverses_rows() {
        let ctx = Instrumentation::new();
        let img = image(2, &[B, B, W, B, W, W]);
        assert_eq!(img.horizontal_mirror(&ctx), image(2, &[W, W, W, B, B, B]));
    }

    #[test]
    fn test_vertical_mirror_reverses_pixels() {
        let ctx = Instrumentation::new();
        let img = image(5, &[B, W, W, B, B, W, W, W, W, B]);
        assert_eq!(
            img.vertical_mirror(&ctx),
            image(5, &[B, B, W, W, B, B, W, W, W, W])
        );
    }

    #[test]
    fn test_mirrors_are_involutions() {
        let ctx = Instrumentation::new();
        let img = image(4, &[B, W, W, W, W, B, B, W, B, B, B, W]);
        assert_eq!(img.vertical_mirror(&ctx).vertical_mirror(&ctx), img);
        assert_eq!(img.horizontal_mirror(&ctx).horizontal_mirror(&ctx), img);
    }

    #[test]
    fn test_replicate_at_bottom() {
        let ctx = Instrumentation::new();
        let a = image(3, &[B, W, B]);
        let b = image(3, &[W, W, W, B, B, B]);
        let stacked = a.replicate_at_bottom(&b, &ctx);
        assert_eq!(stacked.dimensions(), (3, 3));
        assert_eq!(stacked, image(3, &[B, W, B, W, W, W, B, B, B]));
    }

    #[test]
    fn test_replicate_at_right_merges_boundary_runs() {
        let ctx = Instrumentation::new();
        let a = image(2, &[W, B, W, W]);
        let b = image(3, &[B, W, W, B, B, B]);
        let joined = a.replicate_at_right(&b, &ctx);
        assert_eq!(joined.dimensions(), (5, 2));
        assert_eq!(joined, image(5, &[W, B, B, W, W, W, W, B, B, B]));
        assert_eq!(joined.row(0).runs(), &[1, 2, 2]);
    }

    #[test]
    #[should_panic(expected = "same width")]
    fn test_replicate_at_bottom_requires_same_width() {
        let ctx = Instrumentation::new();
        let a = Image::new(3, 1, W).unwrap();
        let b = Image::new(4, 1, W).unwrap();
        let _ = a.replicate_at_bottom(&b, &ctx);
    }
}
