//! Run-length encoding of image rows.
//!
//! ## Module Map
//!
//! - `row` - `RleRow`, the stored form of a row
//! - `codec` - `compress` / `decompress` between RAW and RLE rows

pub mod codec;
pub mod row;

pub use codec::{compress, decompress, run_count};
pub use row::{END_OF_ROW, RleRow};
