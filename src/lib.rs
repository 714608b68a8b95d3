//! Animation merging - Assemble `.anim` files from a hex animation database.
//!
//! This crate reads a line-oriented text database of named, hex-encoded
//! animation blobs and concatenates the payloads of a caller-selected subset
//! behind a fixed header and animation count.
//!
//! # Architecture
//!
//! The crate is split into two main modules:
//!
//! - `animation`: Database parsing, hex decoding, payload extraction and merging
//! - `schema`: Configuration and requested-name validation
//!
//! # Example
//!
//! ```rust,no_run
//! use anim_merge::{
//!     animation::{AnimationDatabase, merge},
//!     schema::RequestedNames,
//! };
//!
//! let db = AnimationDatabase::open("Data/DataBaseHands.txt")?;
//! let requested = RequestedNames::parse("WaveLeft,WaveRight")?;
//!
//! let output = merge(&db, &requested)?;
//! println!("{} ({} bytes)", output.stats, output.bytes.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod animation;
pub mod schema;

// Re-export commonly used types
pub use animation::{AnimationDatabase, MergeOutput, MergeStats, merge};
pub use schema::{MergeConfig, RequestedNames};
