//! Merging of hex-encoded animations into a single `.anim` file.
//!
//! # File Format
//!
//! ```text
//! Header (37 bytes):
//!   Fixed constant block, written verbatim
//!
//! Count (4 bytes):
//!   Number of selected animations: i32, little-endian
//!
//! Payloads (variable):
//!   Each selected animation's payload, from its first 0x6D byte to the end
//!   (after one trailing 00 00 00 00 run is dropped), in database order.
//!   Animations without a payload write nothing but are still counted.
//!
//! Trailer (4 bytes):
//!   00 00 00 00
//! ```

mod database;
mod format;
mod hex;
mod merger;

pub use database::{AnimationDatabase, AnimationRecord, DatabaseError};
pub use format::{
    COUNT_SIZE, HEADER, HEADER_SIZE, MIN_OUTPUT_SIZE, MergedAnimation, PAYLOAD_MARKER, TRAILER,
    TRAILER_SIZE, extract_payload, trim_trailing_zeros,
};
pub use hex::{HexError, decode_hex, try_decode_hex};
pub use merger::{MergeOutput, MergeStats, SkipReason, merge, merge_into, merge_to_file};
