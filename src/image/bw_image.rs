// src/image/bw_image.rs

//! The black-and-white image entity.
//!
//! An [`Image`] owns its dimensions and one [`RleRow`] per scanline. Images
//! are never modified after construction: every operation in
//! [`algebra`](super::algebra) and [`transform`](super::transform) builds a
//! new image with its own rows, so dropping one image never affects another.

use crate::image::pixel::Pixel;
use crate::pbm::{self, PbmOptions};
use crate::rle::{RleRow, codec};
use crate::utils::error::{ImageError, Result};
use crate::utils::instrumentation::Instrumentation;
use std::path::Path;

/// A run-length encoded black-and-white image.
///
/// [`new`](Image::new) and [`chessboard`](Image::chessboard) take their
/// dimensions from the caller's code and panic on invalid ones. The `from_*`
/// constructors take dimensions that travel with data and report invalid ones
/// as [`ImageError::InvalidDimension`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    rows: Vec<RleRow>,
}

/// Reserves the row index of a `width` x `height` image.
pub(crate) fn allocate_rows(width: u32, height: u32) -> Result<Vec<RleRow>> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut rows = Vec::new();
    rows.try_reserve_exact(height as usize).map_err(|e| {
        ImageError::Allocation(format!("row index of a {}x{} image: {}", width, height, e))
    })?;
    Ok(rows)
}

fn check_positive(field: &'static str, value: u32) -> Result<()> {
    if value == 0 {
        return Err(ImageError::InvalidDimension {
            field,
            reason: "must be positive".to_string(),
        });
    }
    Ok(())
}

impl Image {
    /// Creates an image where every pixel is `value`.
    ///
    /// Panics if either dimension is zero.
    pub fn new(width: u32, height: u32, value: Pixel) -> Result<Self> {
        let mut rows = allocate_rows(width, height)?;
        rows.extend((0..height).map(|_| RleRow::solid(width, value)));
        Ok(Image {
            width,
            height,
            rows,
        })
    }

    /// Creates a chessboard of `square_edge` x `square_edge` squares whose
    /// top-left pixel is `first_value`.
    ///
    /// Panics unless `width == height` and both are positive multiples of
    /// `square_edge`.
    pub fn chessboard(
        width: u32,
        height: u32,
        square_edge: u32,
        first_value: Pixel,
    ) -> Result<Self> {
        assert_eq!(width, height, "a chessboard must be square");
        assert!(square_edge > 0, "square edge must be positive");
        assert!(
            width % square_edge == 0 && height % square_edge == 0,
            "dimensions must be multiples of the square edge"
        );

        let mut rows = allocate_rows(width, height)?;
        let squares = (width / square_edge) as usize;
        for i in 0..height {
            let start = if (i / square_edge) % 2 == 0 {
                first_value
            } else {
                !first_value
            };
            rows.push(RleRow::from_runs_unchecked(start, vec![square_edge; squares]));
        }
        Ok(Image {
            width,
            height,
            rows,
        })
    }

    /// Builds an image from already compressed rows, checking that every row
    /// is exactly `width` pixels wide.
    pub fn from_rows(width: u32, rows: Vec<RleRow>) -> Result<Self> {
        check_positive("width", width)?;
        let height = u32::try_from(rows.len())
            .ok()
            .filter(|&h| h > 0)
            .ok_or_else(|| ImageError::InvalidDimension {
                field: "height",
                reason: format!("{} rows is out of range", rows.len()),
            })?;
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.width() != width) {
            return Err(ImageError::InvalidRow(format!(
                "row {} is {} pixels wide, expected {}",
                i,
                row.width(),
                width
            )));
        }
        Ok(Image {
            width,
            height,
            rows,
        })
    }

    /// Compresses a row-major pixel buffer of `width * height` pixels.
    ///
    /// Zero dimensions and buffers of the wrong length are reported as
    /// [`ImageError::InvalidDimension`].
    pub fn from_pixels(
        width: u32,
        height: u32,
        pixels: &[Pixel],
        ctx: &Instrumentation,
    ) -> Result<Self> {
        check_positive("width", width)?;
        check_positive("height", height)?;
        let expected = width as u64 * height as u64;
        if pixels.len() as u64 != expected {
            return Err(ImageError::InvalidDimension {
                field: "pixel buffer",
                reason: format!("{} pixels for a {}x{} image", pixels.len(), width, height),
            });
        }
        let mut rows = allocate_rows(width, height)?;
        rows.extend(
            pixels
                .chunks_exact(width as usize)
                .map(|raw| codec::compress(raw, ctx)),
        );
        Ok(Image {
            width,
            height,
            rows,
        })
    }

    /// Assembles an image from rows the caller has already validated.
    pub(crate) fn from_rows_unchecked(width: u32, height: u32, rows: Vec<RleRow>) -> Self {
        debug_assert_eq!(rows.len(), height as usize);
        debug_assert!(rows.iter().all(|r| r.width() == width));
        Image {
            width,
            height,
            rows,
        }
    }

    /// Releases the image held in `slot`, leaving `None` behind.
    /// Does nothing if the slot is already empty.
    pub fn destroy(slot: &mut Option<Image>) {
        drop(slot.take());
    }

    /// Loads a binary PBM (`P4`) file.
    pub fn load<P: AsRef<Path>>(path: P, ctx: &Instrumentation) -> Result<Self> {
        pbm::load_with(path, &PbmOptions::default(), ctx)
    }

    /// Saves the image as a binary PBM (`P4`) file.
    pub fn save<P: AsRef<Path>>(&self, path: P, ctx: &Instrumentation) -> Result<()> {
        pbm::save_with(self, path, &PbmOptions::default(), ctx)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the dimensions as a tuple (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// The compressed row `y`. Panics if `y >= height`.
    pub fn row(&self, y: u32) -> &RleRow {
        &self.rows[y as usize]
    }

    pub fn rows(&self) -> &[RleRow] {
        &self.rows
    }

    /// Row `y` expanded to one pixel per column.
    pub fn row_pixels(&self, y: u32, ctx: &Instrumentation) -> Vec<Pixel> {
        codec::decompress(self.width, self.row(y), ctx)
    }

    /// The pixel at column `x` of row `y`.
    pub fn pixel(&self, x: u32, y: u32) -> Pixel {
        assert!(x < self.width && y < self.height, "pixel ({}, {}) is out of bounds", x, y);
        self.row(y).pixel_at(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rle::END_OF_ROW;
    use Pixel::{Black, White};

    #[test]
    fn test_solid_image() {
        let img = Image::new(5, 3, Black).unwrap();
        assert_eq!(img.dimensions(), (5, 3));
        for row in img.rows() {
            assert_eq!(row.to_encoded(), vec![1, 5, END_OF_ROW]);
        }
    }

    #[test]
    #[should_panic]
    fn test_zero_width_is_rejected() {
        let _ = Image::new(0, 3, White);
    }

    #[test]
    fn test_chessboard_rows() {
        let img = Image::chessboard(4, 4, 2, Black).unwrap();
        assert_eq!(img.row(0).to_encoded(), vec![1, 2, 2, END_OF_ROW]);
        assert_eq!(img.row(1).to_encoded(), vec![1, 2, 2, END_OF_ROW]);
        assert_eq!(img.row(2).to_encoded(), vec![0, 2, 2, END_OF_ROW]);
        assert_eq!(img.row(3).to_encoded(), vec![0, 2, 2, END_OF_ROW]);
        assert_eq!(img.pixel(2, 0), White);
        assert_eq!(img.pixel(2, 2), Black);
    }

    #[test]
    fn test_chessboard_single_square() {
        let img = Image::chessboard(3, 3, 3, White).unwrap();
        assert_eq!(img, Image::new(3, 3, White).unwrap());
    }

    #[test]
    #[should_panic]
    fn test_chessboard_requires_multiple_of_edge() {
        let _ = Image::chessboard(5, 5, 2, Black);
    }

    #[test]
    fn test_from_pixels_and_pixel_access() {
        let ctx = Instrumentation::new();
        let pixels = [Black, White, White, White, Black, Black];
        let img = Image::from_pixels(3, 2, &pixels, &ctx).unwrap();
        assert_eq!(img.row_pixels(0, &ctx), pixels[..3].to_vec());
        assert_eq!(img.pixel(0, 1), White);
        assert_eq!(img.pixel(2, 1), Black);
        assert!(Image::from_pixels(3, 3, &pixels, &ctx).is_err());
    }

    #[test]
    fn test_from_pixels_rejects_zero_dimensions() {
        let ctx = Instrumentation::new();
        assert!(matches!(
            Image::from_pixels(0, 3, &[], &ctx),
            Err(ImageError::InvalidDimension { field: "width", .. })
        ));
        assert!(matches!(
            Image::from_pixels(3, 0, &[], &ctx),
            Err(ImageError::InvalidDimension { field: "height", .. })
        ));
        assert!(matches!(
            Image::from_rows(0, vec![]),
            Err(ImageError::InvalidDimension { field: "width", .. })
        ));
    }

    #[test]
    fn test_from_rows_checks_width() {
        let rows = vec![RleRow::solid(4, White), RleRow::solid(3, White)];
        assert!(matches!(Image::from_rows(4, rows), Err(ImageError::InvalidRow(_))));
        assert!(Image::from_rows(4, vec![]).is_err());
        let ok = Image::from_rows(4, vec![RleRow::solid(4, Black)]).unwrap();
        assert_eq!(ok.height(), 1);
    }

    #[test]
    fn test_destroy_is_idempotent() {
        let mut slot = Some(Image::new(2, 2, White).unwrap());
        Image::destroy(&mut slot);
        assert!(slot.is_none());
        Image::destroy(&mut slot);
        assert!(slot.is_none());
    }
}
