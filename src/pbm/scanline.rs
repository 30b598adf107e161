// src/pbm/scanline.rs

//! Bit packing of PBM scanlines.
//!
//! Pixel column 0 is the most significant bit of the first byte; 1 is black.
//! A scanline is padded with white bits up to a whole byte.

use crate::image::pixel::Pixel;
use bitvec::order::Msb0;
use bitvec::prelude::*;

/// Number of bytes in a packed scanline of `width` pixels.
#[inline]
pub fn scanline_len(width: u32) -> usize {
    (width as usize).div_ceil(8)
}

/// Packs a RAW row into `scanline_len(raw.len())` bytes, padding with zeros.
pub fn pack(raw: &[Pixel]) -> Vec<u8> {
    let mut bits: BitVec<u8, Msb0> = raw.iter().map(|p| p.is_black()).collect();
    bits.resize(raw.len().div_ceil(8) * 8, false);
    bits.into_vec()
}

/// Unpacks the first `width` pixels of a scanline into `out`, replacing its
/// contents. Padding bits are ignored.
///
/// `out` keeps its allocation, so a buffer reserved once can serve every row.
pub fn unpack_into(bytes: &[u8], width: u32, out: &mut Vec<Pixel>) {
    let bits = bytes.view_bits::<Msb0>();
    out.clear();
    out.extend(bits[..width as usize].iter().by_vals().map(Pixel::from_bit));
}
