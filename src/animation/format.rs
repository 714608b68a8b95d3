//! Binary layout of merged `.anim` files and payload extraction.

use std::io::{self, Write};

/// Fixed header written at the start of every merged file.
pub const HEADER: [u8; 37] = [
    0x01, 0x00, 0x00, 0x00, 0x05, 0x00, 0x00, 0x00, //
    0xCD, 0xCC, 0xCC, 0x3D, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0xCD, 0xCC, 0xCC, 0x3D, 0x01, 0x00, 0x00, //
    0x00, 0xCD, 0xCC, 0x4C, 0x3F, 0xCD, 0xCC, 0x4C, //
    0x3F, 0x00, 0x00, 0x00, 0x00,
];

/// Fixed trailer closing every merged file.
pub const TRAILER: [u8; 4] = [0x00; 4];

/// Byte marking the start of the meaningful region of a decoded blob (`'m'`).
pub const PAYLOAD_MARKER: u8 = 0x6D;

/// Size of [`HEADER`] in bytes.
pub const HEADER_SIZE: usize = HEADER.len();

/// Size of the animation count field (i32, little-endian).
pub const COUNT_SIZE: usize = 4;

/// Size of [`TRAILER`] in bytes.
pub const TRAILER_SIZE: usize = TRAILER.len();

/// Smallest valid merged file: header, count and trailer with no payloads.
pub const MIN_OUTPUT_SIZE: usize = HEADER_SIZE + COUNT_SIZE + TRAILER_SIZE;

/// Drop exactly one run of four trailing zero bytes, if present.
pub fn trim_trailing_zeros(data: &[u8]) -> &[u8] {
    match data {
        [rest @ .., 0, 0, 0, 0] => rest,
        _ => data,
    }
}

/// Locate the payload region of a decoded blob.
///
/// Trims four trailing zeros once, then returns everything from the first
/// [`PAYLOAD_MARKER`] onward. `None` if the marker never occurs.
pub fn extract_payload(decoded: &[u8]) -> Option<&[u8]> {
    let trimmed = trim_trailing_zeros(decoded);
    let start = trimmed.iter().position(|&b| b == PAYLOAD_MARKER)?;
    Some(&trimmed[start..])
}

/// Write the fixed header followed by the animation count.
pub fn write_preamble<W: Write>(w: &mut W, count: i32) -> io::Result<()> {
    w.write_all(&HEADER)?;
    w.write_all(&count.to_le_bytes())?;
    Ok(())
}

/// Write the fixed trailer.
pub fn write_trailer<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_all(&TRAILER)
}

/// Read-only view over a merged file.
///
/// Payload boundaries are not recorded in the format, so only the
/// concatenated payload region is exposed.
#[derive(Debug, Clone, Copy)]
pub struct MergedAnimation<'a> {
    count: i32,
    payload: &'a [u8],
}

impl<'a> MergedAnimation<'a> {
    /// Validate header and trailer and split out the count and payload region.
    pub fn parse(bytes: &'a [u8]) -> io::Result<Self> {
        if bytes.len() < MIN_OUTPUT_SIZE {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "Merged file too short: {} bytes (min {})",
                    bytes.len(),
                    MIN_OUTPUT_SIZE
                ),
            ));
        }

        let (header, rest) = bytes.split_at(HEADER_SIZE);
        if header != HEADER {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "Invalid merged animation header",
            ));
        }

        let (count, rest) = rest.split_at(COUNT_SIZE);
        let count = i32::from_le_bytes([count[0], count[1], count[2], count[3]]);

        let (payload, trailer) = rest.split_at(rest.len() - TRAILER_SIZE);
        if trailer != TRAILER {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "Invalid merged animation trailer",
            ));
        }

        Ok(Self { count, payload })
    }

    /// Number of selected animations recorded in the file.
    pub fn count(&self) -> i32 {
        self.count
    }

    /// Concatenated payloads between the count field and the trailer.
    pub fn payload(&self) -> &'a [u8] {
        self.payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_header_constant() {
        let expected: [u8; 37] = [
            0x01, 0x00, 0x00, 0x00, 0x05, 0x00, 0x00, 0x00, 0xCD, 0xCC, 0xCC, 0x3D, 0x00, 0x00,
            0x00, 0x00, 0x00, 0xCD, 0xCC, 0xCC, 0x3D, 0x01, 0x00, 0x00, 0x00, 0xCD, 0xCC, 0x4C,
            0x3F, 0xCD, 0xCC, 0x4C, 0x3F, 0x00, 0x00, 0x00, 0x00,
        ];
        assert_eq!(HEADER, expected);
        assert_eq!(HEADER_SIZE, 37);
        assert_eq!(MIN_OUTPUT_SIZE, 45);
    }

    #[test]
    fn test_count_offset() {
        let mut buf = Vec::new();
        write_preamble(&mut buf, 0x0102_0304).unwrap();
        write_trailer(&mut buf).unwrap();

        assert_eq!(buf.len(), 45);
        assert_eq!(&buf[37..41], &[0x04, 0x03, 0x02, 0x01]);
        assert_eq!(&buf[41..], &[0x00; 4]);
    }

    #[test]
    fn test_trim_single_pass() {
        assert_eq!(trim_trailing_zeros(&[1, 0, 0, 0, 0]), &[1]);
        assert_eq!(
            trim_trailing_zeros(&[1, 0, 0, 0, 0, 0, 0, 0, 0]),
            &[1, 0, 0, 0, 0]
        );
        assert_eq!(trim_trailing_zeros(&[0, 0, 0, 0]), &[] as &[u8]);
        assert_eq!(trim_trailing_zeros(&[0, 0, 0]), &[0, 0, 0]);
        assert_eq!(trim_trailing_zeros(&[1, 0, 0, 0]), &[1, 0, 0, 0]);
    }

    #[test]
    fn test_trim_twice_differs_from_once() {
        let data = [0x6D, 0, 0, 0, 0, 0, 0, 0, 0];
        let once = trim_trailing_zeros(&data);
        let twice = trim_trailing_zeros(once);
        assert_eq!(once.len(), 5);
        assert_eq!(twice.len(), 1);
    }

    #[test]
    fn test_extract_marker_offsets() {
        assert_eq!(
            extract_payload(&[0x6D, 0x01, 0x02]),
            Some(&[0x6D, 0x01, 0x02][..])
        );
        assert_eq!(extract_payload(&[0xAA, 0x6D, 0x03]), Some(&[0x6D, 0x03][..]));
        assert_eq!(extract_payload(&[0xAA, 0xBB]), None);
        assert_eq!(extract_payload(&[]), None);
    }

    #[test]
    fn test_extract_trims_before_search() {
        let data = [0x01, 0x6D, 0x02, 0x00, 0x00, 0x00, 0x00];
        assert_eq!(extract_payload(&data), Some(&[0x6D, 0x02][..]));

        let data = [0x01, 0x02, 0x00, 0x00, 0x00, 0x00];
        assert_eq!(extract_payload(&data), None);
    }

    #[test]
    fn test_merged_view() {
        let mut buf = Vec::new();
        write_preamble(&mut buf, 2).unwrap();
        buf.extend_from_slice(&[0x6D, 0x01]);
        write_trailer(&mut buf).unwrap();

        let merged = MergedAnimation::parse(&buf).unwrap();
        assert_eq!(merged.count(), 2);
        assert_eq!(merged.payload(), &[0x6D, 0x01]);
    }

    #[test]
    fn test_merged_view_rejects_garbage() {
        assert!(MergedAnimation::parse(&[0u8; 10]).is_err());

        let mut buf = vec![0xFFu8; MIN_OUTPUT_SIZE];
        assert!(MergedAnimation::parse(&buf).is_err());

        buf[..HEADER_SIZE].copy_from_slice(&HEADER);
        let err = MergedAnimation::parse(&buf).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    proptest! {
        #[test]
        fn prop_extract_starts_with_marker(data in prop::collection::vec(any::<u8>(), 0..128)) {
            if let Some(payload) = extract_payload(&data) {
                prop_assert_eq!(payload[0], PAYLOAD_MARKER);
                prop_assert!(data.windows(payload.len()).any(|w| w == payload));
            } else {
                prop_assert!(!trim_trailing_zeros(&data).contains(&PAYLOAD_MARKER));
            }
        }
    }
}
