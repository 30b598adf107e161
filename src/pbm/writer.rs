// src/pbm/writer.rs

//! Saving images as binary PBM files.

use crate::image::Image;
use crate::pbm::header::PbmHeader;
use crate::pbm::{PbmOptions, scanline};
use crate::rle::codec;
use crate::utils::error::Result;
use crate::utils::instrumentation::Instrumentation;
use log::debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes `image` as a `P4` stream.
pub fn write_pbm<W: Write>(
    image: &Image,
    writer: &mut W,
    options: &PbmOptions,
    ctx: &Instrumentation,
) -> Result<()> {
    let header = PbmHeader {
        width: image.width(),
        height: image.height(),
    };
    header.write(writer, options.comment.as_deref())?;

    for row in image.rows() {
        let raw = codec::decompress(image.width(), row, ctx);
        let bytes = scanline::pack(&raw);
        ctx.pixmem(raw.len());
        writer.write_all(&bytes)?;
    }
    Ok(())
}

/// Saves `image` to `path`, replacing any existing file.
pub fn save_with<P: AsRef<Path>>(
    image: &Image,
    path: P,
    options: &PbmOptions,
    ctx: &Instrumentation,
) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_pbm(image, &mut writer, options, ctx)?;
    writer.flush()?;
    debug!(
        "saved {}x{} image to {}",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::Pixel;

    #[test]
    fn test_unaligned_width_zero_fills_padding() {
        let ctx = Instrumentation::new();
        let img = Image::new(3, 3, Pixel::Black).unwrap();
        let mut out = Vec::new();
        write_pbm(&img, &mut out, &PbmOptions::default(), &ctx).unwrap();
        assert_eq!(out, b"P4\n3 3\n\xe0\xe0\xe0");
    }

    #[test]
    fn test_comment_is_written() {
        let ctx = Instrumentation::new();
        let img = Image::chessboard(8, 8, 4, Pixel::White).unwrap();
        let options = PbmOptions::default().with_comment("chessboard");
        let mut out = Vec::new();
        write_pbm(&img, &mut out, &options, &ctx).unwrap();
        assert!(out.starts_with(b"P4\n# chessboard\n8 8\n"));
        assert_eq!(out.len(), "P4\n# chessboard\n8 8\n".len() + 8);
        assert_eq!(
            &out[out.len() - 8..],
            &[0x0fu8, 0x0f, 0x0f, 0x0f, 0xf0, 0xf0, 0xf0, 0xf0][..]
        );
    }
}
