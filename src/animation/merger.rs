//! Assembles a merged `.anim` file from selected database animations.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use super::database::{AnimationDatabase, AnimationRecord};
use super::format::{extract_payload, write_preamble, write_trailer};
use super::hex::try_decode_hex;
use crate::schema::RequestedNames;

/// Why a selected animation contributed no payload bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Hex data failed to decode.
    InvalidHex,
    /// Decoded data contains no payload marker.
    NoMarker,
}

/// Statistics from one merge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Animations selected from the database (the count field).
    pub selected: usize,
    /// Animations that wrote a payload.
    pub written: usize,
    /// Selected animations that wrote nothing.
    pub skipped: Vec<(String, SkipReason)>,
    /// Total payload bytes written.
    pub payload_bytes: usize,
}

impl fmt::Display for MergeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} selected, {} written, {} skipped, {} payload bytes",
            self.selected,
            self.written,
            self.skipped.len(),
            self.payload_bytes
        )
    }
}

/// A merged file held in memory.
#[derive(Debug, Clone)]
pub struct MergeOutput {
    pub bytes: Vec<u8>,
    pub stats: MergeStats,
}

/// Merge the requested animations into an in-memory buffer.
pub fn merge(db: &AnimationDatabase, requested: &RequestedNames) -> io::Result<MergeOutput> {
    let mut bytes = Vec::new();
    let stats = merge_into(db, requested, &mut bytes)?;
    Ok(MergeOutput { bytes, stats })
}

/// Merge the requested animations and write the result to a file.
pub fn merge_to_file<P: AsRef<Path>>(
    db: &AnimationDatabase,
    requested: &RequestedNames,
    path: P,
) -> io::Result<MergeStats> {
    let mut writer = BufWriter::new(File::create(path)?);
    let stats = merge_into(db, requested, &mut writer)?;
    writer.flush()?;
    Ok(stats)
}

/// Merge the requested animations into `w`.
///
/// Selection follows database order, not request order. The count field
/// always equals the number of selected animations, including those that
/// end up writing no payload. Only writer errors are returned.
pub fn merge_into<W: Write>(
    db: &AnimationDatabase,
    requested: &RequestedNames,
    w: &mut W,
) -> io::Result<MergeStats> {
    let selected: Vec<AnimationRecord<'_>> = db
        .iter()
        .filter(|record| requested.contains(record.name))
        .collect();

    let count = i32::try_from(selected.len()).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Too many animations selected: {}", selected.len()),
        )
    })?;

    write_preamble(w, count)?;
    log::info!("Animations included: {}", count);

    let mut stats = MergeStats {
        selected: selected.len(),
        ..Default::default()
    };

    for record in selected {
        let decoded = match try_decode_hex(record.raw_hex) {
            Ok(decoded) => decoded,
            Err(e) => {
                log::warn!("Skipping payload of {}: {}", record.name, e);
                stats
                    .skipped
                    .push((record.name.to_string(), SkipReason::InvalidHex));
                continue;
            }
        };

        match extract_payload(&decoded) {
            Some(payload) => {
                w.write_all(payload)?;
                stats.written += 1;
                stats.payload_bytes += payload.len();
            }
            None => {
                log::warn!("No payload marker found in {}", record.name);
                stats
                    .skipped
                    .push((record.name.to_string(), SkipReason::NoMarker));
            }
        }
    }

    write_trailer(w)?;
    Ok(stats)
}
