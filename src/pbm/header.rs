// src/pbm/header.rs

//! The ASCII header of a binary PBM file:
//!
//! ```text
//! "P4" whitespace, then width and height as decimal numbers separated by
//! whitespace, with "#" comments (to end of line) allowed before each number,
//! then exactly one whitespace byte before the packed scanlines.
//! ```

use crate::pbm::scanline;
use crate::utils::error::{ImageError, Result};
use byteorder::ReadBytesExt;
use log::debug;
use std::io::{self, BufRead, Write};

/// Magic number of binary PBM files.
pub const MAGIC: &[u8; 2] = b"P4";

/// The fields of a PBM header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PbmHeader {
    pub width: u32,
    pub height: u32,
}

/// Whitespace as understood by C's `isspace`.
fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

fn peek<R: BufRead>(reader: &mut R) -> Result<Option<u8>> {
    Ok(reader.fill_buf()?.first().copied())
}

/// Skips any mix of whitespace and `#` comment lines.
/// Returns the number of comments skipped.
fn skip_filler<R: BufRead>(reader: &mut R) -> Result<usize> {
    let mut comments = 0;
    while let Some(b) = peek(reader)? {
        if is_space(b) {
            reader.consume(1);
        } else if b == b'#' {
            let mut text = Vec::new();
            reader.read_until(b'\n', &mut text)?;
            debug!("PBM comment: {}", String::from_utf8_lossy(&text).trim_end());
            comments += 1;
        } else {
            break;
        }
    }
    Ok(comments)
}

fn read_dimension<R: BufRead>(reader: &mut R, field: &'static str) -> Result<u32> {
    let mut value: u64 = 0;
    let mut digits = 0;
    while let Some(b) = peek(reader)? {
        if !b.is_ascii_digit() {
            break;
        }
        reader.consume(1);
        value = value * 10 + u64::from(b - b'0');
        digits += 1;
        if value > u64::from(u32::MAX) {
            return Err(ImageError::InvalidDimension {
                field,
                reason: "value does not fit in 32 bits".to_string(),
            });
        }
    }
    if digits == 0 {
        let found = match peek(reader)? {
            Some(b) => format!("{:?}", b as char),
            None => "end of file".to_string(),
        };
        return Err(ImageError::InvalidDimension {
            field,
            reason: format!("expected a decimal number, found {}", found),
        });
    }
    if value == 0 {
        return Err(ImageError::InvalidDimension {
            field,
            reason: "must be positive".to_string(),
        });
    }
    Ok(value as u32)
}

impl PbmHeader {
    /// Bytes per packed scanline.
    pub fn scanline_len(&self) -> usize {
        scanline::scanline_len(self.width)
    }

    /// Parses a header, leaving `reader` at the first scanline byte.
    pub fn read<R: BufRead>(reader: &mut R) -> Result<Self> {
        let mut magic = [0u8; 2];
        reader.read_exact(&mut magic).map_err(|e| match e.kind() {
            io::ErrorKind::UnexpectedEof => ImageError::BadMagic,
            _ => ImageError::Io(e),
        })?;
        if &magic != MAGIC {
            return Err(ImageError::BadMagic);
        }
        match peek(reader)? {
            Some(b) if is_space(b) || b == b'#' => {}
            _ => return Err(ImageError::BadMagic),
        }

        skip_filler(reader)?;
        let width = read_dimension(reader, "width")?;
        skip_filler(reader)?;
        let height = read_dimension(reader, "height")?;

        match reader.read_u8() {
            Ok(b) if is_space(b) => {}
            Ok(_) => return Err(ImageError::MissingSeparator),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                return Err(ImageError::MissingSeparator);
            }
            Err(e) => return Err(e.into()),
        }

        debug!("PBM header: {}x{}", width, height);
        Ok(PbmHeader { width, height })
    }

    /// Writes `P4`, one `#` line per line of `comment`, then the dimensions.
    pub fn write<W: Write>(&self, writer: &mut W, comment: Option<&str>) -> Result<()> {
        writer.write_all(MAGIC)?;
        writer.write_all(b"\n")?;
        if let Some(comment) = comment {
            for line in comment.lines() {
                writeln!(writer, "# {}", line)?;
            }
        }
        writeln!(writer, "{} {}", self.width, self.height)?;
        Ok(())
    }
}
