//! Hex string decoding for database payloads.

/// Hex decoding failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HexError {
    #[error("Hex string has odd length {len}")]
    OddLength { len: usize },
    #[error("Invalid hex digit at offset {offset}")]
    InvalidDigit { offset: usize },
}

/// Decode a hex string, reporting why it failed.
///
/// Space characters anywhere in the input are removed and surrounding
/// whitespace is trimmed before pairs are read. Digits are case-insensitive.
pub fn try_decode_hex(hex: &str) -> Result<Vec<u8>, HexError> {
    let cleaned = hex.replace(' ', "");
    let digits = cleaned.trim();

    hex::decode(digits).map_err(|e| match e {
        hex::FromHexError::InvalidHexCharacter { index, .. } => {
            HexError::InvalidDigit { offset: index }
        }
        _ => HexError::OddLength { len: digits.len() },
    })
}

/// Decode a hex string, yielding an empty vector on any malformed input.
pub fn decode_hex(hex: &str) -> Vec<u8> {
    try_decode_hex(hex).unwrap_or_default()
}
