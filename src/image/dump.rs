// src/image/dump.rs

//! Text dumps of an image for debugging. Not a storage format.

use crate::image::bw_image::Image;
use crate::image::pixel;
use crate::utils::instrumentation::Instrumentation;
use std::io::{self, Write};

impl Image {
    /// Writes one line of `0`/`1` digits per row.
    pub fn write_raw<W: Write>(&self, out: &mut W, ctx: &Instrumentation) -> io::Result<()> {
        writeln!(out, "width = {} height = {}", self.width(), self.height())?;
        writeln!(out, "RAW image:")?;
        for y in 0..self.height() {
            let raw = self.row_pixels(y, ctx);
            let line: Vec<u8> = pixel::as_bytes(&raw).iter().map(|&b| b'0' + b).collect();
            out.write_all(&line)?;
            writeln!(out)?;
        }
        writeln!(out)
    }

    /// Writes every row in its flat RLE form, terminator included.
    pub fn write_rle<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "width = {} height = {}", self.width(), self.height())?;
        writeln!(out, "RLE encoding:")?;
        for row in self.rows() {
            let fields: Vec<String> = row.to_encoded().iter().map(|v| v.to_string()).collect();
            writeln!(out, "{}", fields.join(" "))?;
        }
        writeln!(out)
    }

    pub fn print_raw(&self, ctx: &Instrumentation) -> io::Result<()> {
        self.write_raw(&mut io::stdout().lock(), ctx)
    }

    pub fn print_rle(&self) -> io::Result<()> {
        self.write_rle(&mut io::stdout().lock())
    }
}
