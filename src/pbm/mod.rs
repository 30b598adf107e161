//! Binary PBM (`P4`) persistence.
//!
//! A `P4` file is a short ASCII header followed by one packed scanline per
//! row, `ceil(width / 8)` bytes each, most significant bit first.
//!
//! ## Module Map
//!
//! - `header` - magic number, comments and dimensions
//! - `scanline` - bit packing and unpacking of one row
//! - `reader` - `read_pbm`, `load_with`
//! - `writer` - `write_pbm`, `save_with`

pub mod header;
pub mod reader;
pub mod scanline;
pub mod writer;

pub use header::{MAGIC, PbmHeader};
pub use reader::{load_with, read_pbm};
pub use writer::{save_with, write_pbm};

/// Default upper bound on `width * height` accepted when reading.
pub const DEFAULT_MAX_PIXELS: u64 = 1 << 32;

/// Default upper bound on `width` accepted when reading.
pub const DEFAULT_MAX_WIDTH: u32 = 1 << 24;

/// Options for reading and writing PBM files.
///
/// ```
/// use bw_rle::pbm::PbmOptions;
///
/// let options = PbmOptions::default()
///     .with_comment("generated")
///     .with_max_pixels(4096 * 4096)
///     .with_max_width(4096);
/// assert_eq!(options.comment.as_deref(), Some("generated"));
/// ```
#[derive(Clone, Debug)]
pub struct PbmOptions {
    /// Comment written after the magic number, one `#` line per text line.
    pub comment: Option<String>,
    /// Largest `width * height` the reader will allocate for.
    pub max_pixels: u64,
    /// Widest row the reader will allocate scanline buffers for.
    pub max_width: u32,
}

impl Default for PbmOptions {
    fn default() -> Self {
        PbmOptions {
            comment: None,
            max_pixels: DEFAULT_MAX_PIXELS,
            max_width: DEFAULT_MAX_WIDTH,
        }
    }
}

impl PbmOptions {
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_max_pixels(mut self, max_pixels: u64) -> Self {
        self.max_pixels = max_pixels;
        self
    }

    pub fn with_max_width(mut self, max_width: u32) -> Self {
        self.max_width = max_width;
        self
    }
}
