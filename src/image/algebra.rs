// src/image/algebra.rs

//! Pixel-wise boolean operations and comparison.
//!
//! Operand images are left untouched and must be of the same size; each
//! operation returns a new image.

use crate::image::bw_image::Image;
use crate::image::pixel::Pixel;
use crate::rle::{RleRow, codec};
use crate::utils::instrumentation::Instrumentation;

/// Compares two rows element by element, counting every element read.
fn rows_equal(a: &RleRow, b: &RleRow, ctx: &Instrumentation) -> bool {
    ctx.pixmem(1);
    if a.first_value() != b.first_value() || a.run_count() != b.run_count() {
        return false;
    }
    match a.runs().iter().zip(b.runs()).position(|(x, y)| x != y) {
        Some(pos) => {
            ctx.pixmem(pos + 1);
            false
        }
        None => {
            ctx.pixmem(a.run_count());
            true
        }
    }
}

impl Image {
    /// `true` if both images have the same size and the same pixels.
    ///
    /// Rows are compared in compressed form: compression is canonical, so
    /// equal runs are equivalent to equal pixels.
    pub fn is_equal(&self, other: &Image, ctx: &Instrumentation) -> bool {
        if self.dimensions() != other.dimensions() {
            return false;
        }
        self.rows()
            .iter()
            .zip(other.rows())
            .all(|(a, b)| rows_equal(a, b, ctx))
    }

    pub fn is_different(&self, other: &Image, ctx: &Instrumentation) -> bool {
        !self.is_equal(other, ctx)
    }

    /// Swaps black and white. Only the leading value of each row changes.
    pub fn negate(&self, ctx: &Instrumentation) -> Image {
        let rows = self
            .rows()
            .iter()
            .map(|row| {
                ctx.pixmem(row.run_count() + 1);
                row.negated()
            })
            .collect();
        Image::from_rows_unchecked(self.width(), self.height(), rows)
    }

    /// Pixel-wise AND: black where both operands are black.
    pub fn and(&self, other: &Image, ctx: &Instrumentation) -> Image {
        self.combine(other, ctx, |a, b| a & b)
    }

    /// Pixel-wise OR: black where either operand is black.
    pub fn or(&self, other: &Image, ctx: &Instrumentation) -> Image {
        self.combine(other, ctx, |a, b| a | b)
    }

    /// Pixel-wise XOR: black where exactly one operand is black.
    pub fn xor(&self, other: &Image, ctx: &Instrumentation) -> Image {
        self.combine(other, ctx, |a, b| a ^ b)
    }

    /// Decodes each pair of rows, applies `op` per pixel and re-encodes.
    fn combine<F>(&self, other: &Image, ctx: &Instrumentation, op: F) -> Image
    where
        F: Fn(Pixel, Pixel) -> Pixel,
    {
        assert_eq!(
            self.dimensions(),
            other.dimensions(),
            "operands must have the same size"
        );
        let width = self.width();
        let rows = self
            .rows()
            .iter()
            .zip(other.rows())
            .map(|(a, b)| {
                let raw_a = codec::decompress(width, a, ctx);
                let raw_b = codec::decompress(width, b, ctx);
                let raw: Vec<Pixel> = raw_a
                    .iter()
                    .zip(&raw_b)
                    .map(|(&pa, &pb)| op(pa, pb))
                    .collect();
                ctx.pixmem(raw.len());
                codec::compress(&raw, ctx)
            })
            .collect();
        Image::from_rows_unchecked(width, self.height(), rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rle::END_OF_ROW;
    use crate::utils::instrumentation::Counter;
    use Pixel::{Black as B, White as W};

    fn image(width: u32, pixels: &[Pixel]) -> Image {
        let ctx = Instrumentation::new();
        Image::from_pixels(width, pixels.len() as u32 / width, pixels, &ctx).unwrap()
    }

    #[test]
    fn test_negate_white_square() {
        let ctx = Instrumentation::new();
        let white = Image::new(4, 4, W).unwrap();
        let black = white.negate(&ctx);
        assert!(black.is_equal(&Image::new(4, 4, B).unwrap(), &ctx));
        assert_eq!(black.row(0).to_encoded(), vec![1, 4, END_OF_ROW]);
        // the operand is untouched
        assert_eq!(white.row(0).to_encoded(), vec![0, 4, END_OF_ROW]);
    }

    #[test]
    fn test_equality_checks_dimensions_and_every_row() {
        let ctx = Instrumentation::new();
        let a = image(3, &[W, B, W, B, B, B]);
        let b = image(3, &[W, B, W, B, B, W]);
        assert!(a.is_equal(&a.clone(), &ctx));
        assert!(a.is_different(&b, &ctx));
        assert!(a.is_different(&Image::new(2, 3, W).unwrap(), &ctx));
        assert!(ctx.count(Counter::PixMem) > 0);
    }

    #[test]
    fn test_and_or_xor() {
        let ctx = Instrumentation::new();
        let a = image(4, &[B, B, W, W]);
        let b = image(4, &[B, W, B, W]);
        assert_eq!(a.and(&b, &ctx), image(4, &[B, W, W, W]));
        assert_eq!(a.or(&b, &ctx), image(4, &[B, B, B, W]));
        assert_eq!(a.xor(&b, &ctx), image(4, &[W, B, B, W]));
    }

    #[test]
    fn test_xor_with_self_is_white() {
        let ctx = Instrumentation::new();
        let board = Image::chessboard(8, 8, 2, B).unwrap();
        assert_eq!(board.xor(&board, &ctx), Image::new(8, 8, W).unwrap());
    }

    #[test]
    #[should_panic(expected = "same size")]
    fn test_mismatched_operands_panic() {
        let ctx = Instrumentation::new();
        let a = Image::new(4, 4, W).unwrap();
        let b = Image::new(4, 5, W).unwrap();
        let _ = a.and(&b, &ctx);
    }
}
