//! UTF-8 <-> UTF-16 transcoding at the core's boundary.
//!
//! The core operates on a u16 code-unit sequence and treats transcoding as
//! an external collaborator with a trivial contract. This module is that
//! collaborator: it never inspects
//! JSON structure, only converts between `&str` and `Vec<u16>`.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TranscodeError {
    #[error("output contained an unpaired UTF-16 surrogate (0x{0:04X})")]
    UnpairedSurrogate(u16),
}

/// Encode a UTF-8 string into UTF-16 code units.
pub fn encode(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

/// Decode UTF-16 code units back into a UTF-8 `String`.
///
/// The repair algorithm never manufactures unpaired surrogates from valid
/// input (surrogate pairs from the input pass through opaquely), so this
/// only fails if the caller feeds the core units
/// that did not originate from valid UTF-16.
pub fn decode(units: &[u16]) -> Result<String, TranscodeError> {
    char::decode_utf16(units.iter().copied())
        .collect::<Result<String, _>>()
        .map_err(|e| TranscodeError::UnpairedSurrogate(e.unpaired_surrogate()))
}
