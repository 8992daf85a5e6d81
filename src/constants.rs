//! # Layout constants for the DAF File Record
//!
//! The File Record is the first 1024-byte record of every DAF container. Its
//! fields sit at fixed byte offsets, listed here as half-open ranges so that
//! both the record parser and the byte helpers share a single source of truth.
//!
//! ```text
//!   0        8    12   16                 76   80   84   88       96
//!   | IDWORD | ND | NI |     IFNAME      |FWRD|BWRD|FREE| LOCFMT |
//!   96                    699                727                1024
//!   | null padding (603) | FTPSTR (28) | null padding (297) |
//! ```

use std::ops::Range;

// -------------------------------------------------------------------------------------------------
// Record sizes
// -------------------------------------------------------------------------------------------------

/// Length in bytes of the DAF File Record.
pub const FILE_RECORD_LENGTH: usize = 1024;

/// Length in bytes of the identification word.
pub const ID_WORD_LENGTH: usize = 8;

/// Identification word of a binary SPK file. Note the trailing space.
pub const SPK_ID_WORD: &[u8; ID_WORD_LENGTH] = b"DAF/SPK ";

// -------------------------------------------------------------------------------------------------
// Field offsets
// -------------------------------------------------------------------------------------------------

pub const FILE_ARCHITECTURE: Range<usize> = 0..3;
pub const ID_WORD: Range<usize> = 0..8;
pub const ND: Range<usize> = 8..12;
pub const NI: Range<usize> = 12..16;
pub const INTERNAL_FILE_NAME: Range<usize> = 16..76;
pub const FORWARD_RECORD_POINTER: Range<usize> = 76..80;
pub const BACKWARD_RECORD_POINTER: Range<usize> = 80..84;
pub const FIRST_FREE_ADDRESS: Range<usize> = 84..88;
pub const BINARY_FILE_FORMAT: Range<usize> = 88..96;

/// 603 nulls placing the FTP string at byte 699.
pub const PRE_FTP_NULL_PADDING: Range<usize> = 96..699;
pub const FTP_VALIDATION_STRING: Range<usize> = 699..727;

/// 297 nulls completing the 1024-byte record.
pub const POST_FTP_NULL_PADDING: Range<usize> = 727..1024;

// -------------------------------------------------------------------------------------------------
// Tag literals
// -------------------------------------------------------------------------------------------------

pub const DAF_ARCHITECTURE: &str = "DAF";
pub const LTL_IEEE: &str = "LTL-IEEE";
pub const BIG_IEEE: &str = "BIG-IEEE";

pub const FTP_STRING_PREFIX: &str = "FTPSTR:";
pub const FTP_STRING_SUFFIX: &str = "ENDFTP";
