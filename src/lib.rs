//! Black-and-white raster images stored as run-length encoded rows.
//!
//! Each row of an [`Image`] is kept as the value of its first run plus the
//! lengths of its runs ([`RleRow`]). Boolean operations, mirrors and
//! concatenation all produce new images; operands are never modified.
//! Images are persisted as binary PBM (`P4`) files.
//!
//! # Quick Start
//!
//! ```
//! use bw_rle::{Image, Instrumentation, Pixel};
//!
//! // Create the counting context once per run
//! let ctx = Instrumentation::new();
//!
//! let board = Image::chessboard(8, 8, 2, Pixel::Black)?;
//! let white = Image::new(8, 8, Pixel::White)?;
//!
//! let inverted = board.negate(&ctx);
//! assert!(board.xor(&inverted, &ctx).is_equal(&white.negate(&ctx), &ctx));
//! assert_eq!(board.row(0).runs(), &[2, 2, 2, 2]);
//! # Ok::<(), bw_rle::ImageError>(())
//! ```
//!
//! # Error Handling
//!
//! Only the I/O and allocation edges are fallible and return [`Result`]:
//! the constructors and the PBM reader/writer. The pixel operations are
//! total; calling them with mismatched sizes is a programming error and
//! panics.

// Core modules
pub mod image;
pub mod pbm;
pub mod rle;
pub mod utils;

// Image types
pub use image::{Image, Pixel};
pub use rle::{END_OF_ROW, RleRow};

// PBM configuration
pub use pbm::PbmOptions;

// Instrumentation
pub use utils::instrumentation::{Counter, Instrumentation};

// Error types
pub use utils::error::{ImageError, Result};

// Constants
pub const BW_RLE_VERSION: &str = "0.1.0";
