// src/rle/codec.rs

//! Conversion between RAW rows (one [`Pixel`] per column) and [`RleRow`]s.
//!
//! `compress` and `decompress` are exact inverses, and `compress` is
//! deterministic, so equal RAW rows always produce equal `RleRow`s.

use crate::image::pixel::Pixel;
use crate::rle::row::RleRow;
use crate::utils::instrumentation::Instrumentation;

/// Number of maximal runs of equal consecutive pixels in `raw`.
///
/// Panics if `raw` is empty.
pub fn run_count(raw: &[Pixel]) -> usize {
    assert!(!raw.is_empty(), "a RAW row must hold at least one pixel");
    1 + raw.windows(2).filter(|w| w[0] != w[1]).count()
}

/// Run-length encodes a RAW row.
///
/// The run vector is allocated with exactly [`run_count`] slots.
pub fn compress(raw: &[Pixel], ctx: &Instrumentation) -> RleRow {
    debug_assert!(raw.len() <= u32::MAX as usize);
    let mut runs = Vec::with_capacity(run_count(raw));

    let first = raw[0];
    let mut current = first;
    let mut len = 0u32;
    for &p in raw {
        if p != current {
            runs.push(len);
            current = p;
            len = 0;
        }
        len += 1;
    }
    runs.push(len);
    ctx.pixmem(raw.len());

    RleRow::from_runs_unchecked(first, runs)
}

/// Expands a row into exactly `width` pixels.
pub fn decompress(width: u32, row: &RleRow, ctx: &Instrumentation) -> Vec<Pixel> {
    debug_assert_eq!(row.width(), width, "row does not match the image width");
    let mut raw = Vec::with_capacity(width as usize);
    for (value, len) in row.iter() {
        raw.extend(std::iter::repeat_n(value, len as usize));
    }
    ctx.pixmem(raw.len());
    raw
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rle::row::END_OF_ROW;
    use crate::utils::instrumentation::Counter;
    use Pixel::{Black as B, White as W};

    #[test]
    fn test_run_count() {
        assert_eq!(run_count(&[W]), 1);
        assert_eq!(run_count(&[W, W, B, B, W]), 3);
        assert_eq!(run_count(&[B, W, B, W]), 4);
    }

    #[test]
    #[should_panic]
    fn test_run_count_rejects_empty_row() {
        run_count(&[]);
    }

    #[test]
    fn test_compress_layout() {
        let ctx = Instrumentation::new();
        let row = compress(&[B, B, W, W, W, B], &ctx);
        assert_eq!(row.to_encoded(), vec![1, 2, 3, 1, END_OF_ROW]);
        assert_eq!(row.encoded_len(), run_count(&[B, B, W, W, W, B]) + 2);
        assert_eq!(ctx.count(Counter::PixMem), 6);
    }

    #[test]
    fn test_compress_is_canonical() {
        let ctx = Instrumentation::new();
        let a = vec![W, B, B, W, W, W, B];
        let b = a.clone();
        assert_eq!(compress(&a, &ctx), compress(&b, &ctx));
    }

    #[test]
    fn test_roundtrip_all_rows_of_width_6() {
        let ctx = Instrumentation::new();
        for bits in 0u32..64 {
            let raw: Vec<Pixel> = (0..6).map(|i| Pixel::from_bit(bits >> i & 1 == 1)).collect();
            let row = compress(&raw, &ctx);
            assert_eq!(row.run_count(), run_count(&raw));
            assert_eq!(decompress(6, &row, &ctx), raw, "bits {:06b}", bits);
        }
    }
}
