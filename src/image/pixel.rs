// src/image/pixel.rs

//! The two pixel values of a black-and-white image.

use bytemuck::NoUninit;
use std::ops::{BitAnd, BitOr, BitXor, Not};

/// A single black-and-white pixel, stored as one byte (`0` or `1`).
#[repr(u8)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, NoUninit)]
pub enum Pixel {
    #[default]
    White = 0,
    Black = 1,
}

impl Pixel {
    /// `true` maps to black, matching the PBM bit convention.
    #[inline]
    pub fn from_bit(bit: bool) -> Self {
        if bit { Pixel::Black } else { Pixel::White }
    }

    #[inline]
    pub fn is_black(self) -> bool {
        self == Pixel::Black
    }

    #[inline]
    pub fn to_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Pixel {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Pixel::White),
            1 => Ok(Pixel::Black),
            other => Err(other),
        }
    }
}

impl From<Pixel> for bool {
    fn from(p: Pixel) -> bool {
        p.is_black()
    }
}

impl Not for Pixel {
    type Output = Pixel;

    #[inline]
    fn not(self) -> Pixel {
        Pixel::from_bit(!self.is_black())
    }
}

impl BitAnd for Pixel {
    type Output = Pixel;

    #[inline]
    fn bitand(self, rhs: Pixel) -> Pixel {
        Pixel::from_bit(self.is_black() & rhs.is_black())
    }
}

impl BitOr for Pixel {
    type Output = Pixel;

    #[inline]
    fn bitor(self, rhs: Pixel) -> Pixel {
        Pixel::from_bit(self.is_black() | rhs.is_black())
    }
}

impl BitXor for Pixel {
    type Output = Pixel;

    #[inline]
    fn bitxor(self, rhs: Pixel) -> Pixel {
        Pixel::from_bit(self.is_black() ^ rhs.is_black())
    }
}

/// Views a RAW row as its one-byte-per-pixel storage.
pub fn as_bytes(raw: &[Pixel]) -> &[u8] {
    bytemuck::cast_slice(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truth_tables() {
        use Pixel::{Black as B, White as W};
        assert_eq!(B & B, B);
        assert_eq!(B & W, W);
        assert_eq!(W | B, B);
        assert_eq!(W | W, W);
        assert_eq!(B ^ B, W);
        assert_eq!(B ^ W, B);
        assert_eq!(!W, B);
    }

    #[test]
    fn test_byte_values() {
        assert_eq!(Pixel::try_from(1), Ok(Pixel::Black));
        assert_eq!(Pixel::try_from(2), Err(2));
        assert_eq!(as_bytes(&[Pixel::Black, Pixel::White, Pixel::Black]), &[1, 0, 1]);
    }
}
