// src/rle/row.rs

//! The compressed form of one image row.
//!
//! A row is stored as the value of its first run plus the lengths of all
//! runs. Consecutive runs alternate value, so the value of run `i` is the
//! first value flipped `i` times. Every run is at least one pixel long, which
//! makes the representation canonical: two rows hold the same pixels exactly
//! when their `RleRow`s compare equal.

use crate::image::pixel::Pixel;
use crate::utils::error::{ImageError, Result};

/// Terminator of the flat `[value, runs..., END_OF_ROW]` form produced by
/// [`RleRow::to_encoded`] and printed by the RLE dump.
///
/// Elements are `i64` so every `u32` run length stays positive and distinct
/// from the terminator.
pub const END_OF_ROW: i64 = -1;

/// A run-length encoded row.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RleRow {
    first: Pixel,
    runs: Vec<u32>,
}

impl RleRow {
    /// A row made of a single run of `width` pixels of `value`.
    pub fn solid(width: u32, value: Pixel) -> Self {
        assert!(width > 0, "row width must be positive");
        RleRow {
            first: value,
            runs: vec![width],
        }
    }

    /// Builds a row from its first value and run lengths, checking the row
    /// invariants (at least one run, no empty run, width fits in `u32`).
    pub fn from_runs(first: Pixel, runs: Vec<u32>) -> Result<Self> {
        if runs.is_empty() {
            return Err(ImageError::InvalidRow("row has no runs".to_string()));
        }
        if let Some(pos) = runs.iter().position(|&r| r == 0) {
            return Err(ImageError::InvalidRow(format!("run {} has zero length", pos)));
        }
        if runs.iter().try_fold(0u32, |acc, &r| acc.checked_add(r)).is_none() {
            return Err(ImageError::InvalidRow("row width overflows u32".to_string()));
        }
        Ok(RleRow { first, runs })
    }

    /// Builds a row whose invariants are guaranteed by the caller.
    pub(crate) fn from_runs_unchecked(first: Pixel, runs: Vec<u32>) -> Self {
        debug_assert!(!runs.is_empty() && runs.iter().all(|&r| r > 0));
        RleRow { first, runs }
    }

    /// Parses the flat form `[value, r1, ..., rk, END_OF_ROW]`.
    ///
    /// The terminator must appear exactly once, as the last element.
    pub fn from_encoded(encoded: &[i64]) -> Result<Self> {
        let (&value, rest) = encoded
            .split_first()
            .ok_or_else(|| ImageError::InvalidRow("empty encoded row".to_string()))?;
        let first = u8::try_from(value)
            .ok()
            .and_then(|v| Pixel::try_from(v).ok())
            .ok_or_else(|| ImageError::InvalidRow(format!("invalid leading value {}", value)))?;
        let Some((&END_OF_ROW, body)) = rest.split_last() else {
            return Err(ImageError::InvalidRow(
                "encoded row is not terminated".to_string(),
            ));
        };
        let runs = body
            .iter()
            .map(|&r| {
                u32::try_from(r)
                    .map_err(|_| ImageError::InvalidRow(format!("invalid run length {}", r)))
            })
            .collect::<Result<Vec<u32>>>()?;
        Self::from_runs(first, runs)
    }

    /// The flat form `[value, r1, ..., rk, END_OF_ROW]`.
    pub fn to_encoded(&self) -> Vec<i64> {
        let mut out = Vec::with_capacity(self.encoded_len());
        out.push(i64::from(self.first.to_u8()));
        out.extend(self.runs.iter().map(|&r| i64::from(r)));
        out.push(END_OF_ROW);
        out
    }

    #[inline]
    pub fn first_value(&self) -> Pixel {
        self.first
    }

    /// Value of the last run.
    #[inline]
    pub fn last_value(&self) -> Pixel {
        if self.runs.len() % 2 == 1 {
            self.first
        } else {
            !self.first
        }
    }

    #[inline]
    pub fn runs(&self) -> &[u32] {
        &self.runs
    }

    /// Number of runs in the row.
    #[inline]
    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    /// Number of elements of the flat form, leading value and terminator included.
    #[inline]
    pub fn encoded_len(&self) -> usize {
        self.runs.len() + 2
    }

    /// Number of pixels in the row.
    pub fn width(&self) -> u32 {
        self.runs.iter().sum()
    }

    /// Iterates over `(value, length)` for every run, left to right.
    pub fn iter(&self) -> impl Iterator<Item = (Pixel, u32)> + '_ {
        let first = self.first;
        self.runs
            .iter()
            .enumerate()
            .map(move |(i, &len)| (if i % 2 == 0 { first } else { !first }, len))
    }

    /// Value of pixel `x`. Panics if `x` is past the end of the row.
    pub fn pixel_at(&self, x: u32) -> Pixel {
        let mut end = 0u32;
        for (value, len) in self.iter() {
            end += len;
            if x < end {
                return value;
            }
        }
        panic!("pixel {} is outside a row of width {}", x, end);
    }

    /// The same runs with every value flipped.
    pub fn negated(&self) -> Self {
        RleRow {
            first: !self.first,
            runs: self.runs.clone(),
        }
    }

    /// The row read right to left: runs in reverse order, starting with the
    /// value of the current last run.
    pub fn reversed(&self) -> Self {
        RleRow {
            first: self.last_value(),
            runs: self.runs.iter().rev().copied().collect(),
        }
    }

    /// This row followed by `other`. When the boundary runs share a value
    /// they are merged so the result stays canonical.
    ///
    /// The combined width must fit in `u32`; callers check it.
    pub fn concat(&self, other: &RleRow) -> Self {
        let mut runs = Vec::with_capacity(self.runs.len() + other.runs.len());
        runs.extend_from_slice(&self.runs);
        let mut rest = other.runs.as_slice();
        if self.last_value() == other.first {
            if let (Some(last), Some((&head, tail))) = (runs.last_mut(), rest.split_first()) {
                *last += head;
                rest = tail;
            }
        }
        runs.extend_from_slice(rest);
        RleRow {
            first: self.first,
            runs,
        }
    }
}
