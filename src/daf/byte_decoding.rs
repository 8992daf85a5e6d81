//! Primitive decoders shared by the File Record parser.
//!
//! DAF text fields are plain byte strings: every byte maps to the code point
//! of the same value (ISO-8859-1), so arbitrary bytes such as the `\r\0` and
//! `\x81` found in the FTP validation string survive decoding unchanged.
//! Integer fields are unsigned 32-bit little-endian words, decoded by hand so
//! the result does not depend on the host byte order.

/// Decode up to four bytes as an unsigned little-endian integer.
///
/// Byte `i` contributes `byte[i] << (8 * i)`. Bytes past the fourth are
/// ignored; a shorter slice sums only the bytes present, so an empty slice
/// decodes to `0`.
///
/// Arguments
/// -----------------
/// * `bytes`: raw bytes, least significant first.
///
/// Return
/// ----------
/// * The decoded unsigned value, never sign-extended.
pub fn le_u32_from_bytes(bytes: &[u8]) -> u32 {
    bytes
        .iter()
        .take(4)
        .enumerate()
        .fold(0u32, |acc, (i, &byte)| acc | (u32::from(byte) << (8 * i)))
}

/// Decode bytes as single-byte characters (ISO-8859-1).
pub fn latin1_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&byte| char::from(byte)).collect()
}

/// `true` iff every byte of the region is `0x00`. An empty region is valid.
pub fn is_null_padding(bytes: &[u8]) -> bool {
    bytes.iter().all(|&byte| byte == 0)
}
