// src/pbm/reader.rs

//! Loading binary PBM files into run-length encoded images.

use crate::image::bw_image::allocate_rows;
use crate::image::{Image, Pixel};
use crate::pbm::header::PbmHeader;
use crate::pbm::{PbmOptions, scanline};
use crate::rle::codec;
use crate::utils::error::{ImageError, Result};
use crate::utils::instrumentation::Instrumentation;
use log::debug;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Reads a complete `P4` image from `reader`.
///
/// Bytes following the last scanline are left unread. Images wider than
/// `options.max_width` or larger than `options.max_pixels` are rejected
/// with [`ImageError::TooLarge`] before anything is allocated.
pub fn read_pbm<R: BufRead>(
    reader: &mut R,
    options: &PbmOptions,
    ctx: &Instrumentation,
) -> Result<Image> {
    let header = PbmHeader::read(reader)?;
    let PbmHeader { width, height } = header;
    if width > options.max_width || u64::from(width) * u64::from(height) > options.max_pixels {
        return Err(ImageError::TooLarge { width, height });
    }

    let mut rows = allocate_rows(width, height)?;
    let mut bytes = reserve_buffer::<u8>(header.scanline_len(), "scanline")?;
    bytes.resize(header.scanline_len(), 0);
    let mut raw = reserve_buffer::<Pixel>(width as usize, "pixel row")?;

    for row in 0..height {
        reader.read_exact(&mut bytes).map_err(|e| match e.kind() {
            io::ErrorKind::UnexpectedEof => ImageError::TruncatedPixels { row },
            _ => ImageError::Io(e),
        })?;
        scanline::unpack_into(&bytes, width, &mut raw);
        ctx.pixmem(raw.len());
        rows.push(codec::compress(&raw, ctx));
    }

    Ok(Image::from_rows_unchecked(width, height, rows))
}

fn reserve_buffer<T>(len: usize, what: &str) -> Result<Vec<T>> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|e| ImageError::Allocation(format!("{what} of {len} elements: {e}")))?;
    Ok(buffer)
}

/// Loads a `P4` file from `path`.
pub fn load_with<P: AsRef<Path>>(
    path: P,
    options: &PbmOptions,
    ctx: &Instrumentation,
) -> Result<Image> {
    let path = path.as_ref();
    let mut reader = BufReader::new(File::open(path)?);
    let image = read_pbm(&mut reader, options, ctx)?;
    debug!(
        "loaded {}x{} image from {}",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(image)
}
