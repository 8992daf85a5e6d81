//! DAF File Record decoding.
//!
//! The File Record is the first 1024-byte record of a DAF container such as a
//! binary SPK kernel. It holds the structural metadata needed before any
//! summary or data record can be located:
//!
//! * **`id_word`**: eight ASCII bytes, `"DAF/SPK "` for SPK kernels. Its first
//!   three bytes are the file architecture (`"DAF"`).
//! * **`nd`** / **`ni`**: number of double-precision / integer components in
//!   each array summary (`2` and `6` for SPK).
//! * **`internal_file_name`**: 60-byte, space-padded description of the file.
//! * **`forward_record_pointer`** / **`backward_record_pointer`**: record
//!   numbers of the first and last summary records.
//! * **`first_free_address`**: first free address, where new data would be
//!   appended.
//! * **`binary_file_format`**: `"LTL-IEEE"` or `"BIG-IEEE"`.
//! * Two null padding blocks surrounding the 28-byte FTP validation string,
//!   reported as validity flags rather than raw bytes.
//!
//! # Decoding rules
//!
//! Integers are unsigned little-endian words whatever `binary_file_format`
//! says; the tag is reported, not acted upon. Text fields map one byte to one
//! character. Nothing is validated: a non-DAF file decodes into a header with
//! meaningless values, and callers wanting a guarantee should run
//! [`is_spk_file`](crate::daf::identification::is_spk_file) first.
//!
//! # Example
//!
//! ```rust, no_run
//! use spice_file_record::daf::file_record::{BinaryFileFormat, SpiceFileHeader};
//!
//! let header = SpiceFileHeader::from_file("kernels/de202.bsp")?;
//! assert_eq!(header.binary_file_format, BinaryFileFormat::LtlIeee);
//! println!("{header}");
//! # Ok::<(), spice_file_record::spice_errors::SpiceError>(())
//! ```

use std::{
    fmt,
    fs::File,
    io::{self, Read},
};

use camino::Utf8Path;
use log::debug;
use nom::{bytes::complete::take, combinator::map, IResult};
use serde::{Serialize, Serializer};

use crate::constants::{
    BIG_IEEE, BINARY_FILE_FORMAT, DAF_ARCHITECTURE, FILE_ARCHITECTURE, FILE_RECORD_LENGTH,
    FTP_STRING_PREFIX, FTP_STRING_SUFFIX, FTP_VALIDATION_STRING, ID_WORD, INTERNAL_FILE_NAME,
    LTL_IEEE, POST_FTP_NULL_PADDING, PRE_FTP_NULL_PADDING,
};
use crate::spice_errors::SpiceError;

use super::byte_decoding::{is_null_padding, latin1_string, le_u32_from_bytes};

/// Architecture tag held by the first three bytes of the identification word.
///
/// Anything other than `"DAF"` is kept verbatim in `Unrecognized`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FileArchitecture {
    Daf,
    Unrecognized(String),
}

impl FileArchitecture {
    pub fn as_str(&self) -> &str {
        match self {
            FileArchitecture::Daf => DAF_ARCHITECTURE,
            FileArchitecture::Unrecognized(tag) => tag,
        }
    }
}

impl From<&str> for FileArchitecture {
    fn from(tag: &str) -> Self {
        match tag {
            DAF_ARCHITECTURE => FileArchitecture::Daf,
            other => FileArchitecture::Unrecognized(other.to_string()),
        }
    }
}

impl fmt::Display for FileArchitecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FileArchitecture {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Platform tag describing how numbers are stored inside the file.
///
/// The decoder never byte-swaps based on this tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BinaryFileFormat {
    LtlIeee,
    BigIeee,
    Unrecognized(String),
}

impl BinaryFileFormat {
    pub fn as_str(&self) -> &str {
        match self {
            BinaryFileFormat::LtlIeee => LTL_IEEE,
            BinaryFileFormat::BigIeee => BIG_IEEE,
            BinaryFileFormat::Unrecognized(tag) => tag,
        }
    }
}

impl From<&str> for BinaryFileFormat {
    fn from(tag: &str) -> Self {
        match tag {
            LTL_IEEE => BinaryFileFormat::LtlIeee,
            BIG_IEEE => BinaryFileFormat::BigIeee,
            other => BinaryFileFormat::Unrecognized(other.to_string()),
        }
    }
}

impl fmt::Display for BinaryFileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for BinaryFileFormat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Decoded DAF File Record.
///
/// `id_word` and `ftp_validation_string` are kept untrimmed, byte for byte;
/// only `internal_file_name` is trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpiceFileHeader {
    /// `"DAF"` for every DAF container.
    pub file_architecture: FileArchitecture,
    /// 8-byte identifier, `"DAF/SPK "` for SPK kernels.
    pub id_word: String,
    /// Number of double-precision components in each array summary (ND).
    pub nd: u32,
    /// Number of integer components in each array summary (NI).
    pub ni: u32,
    /// Internal name of the file, surrounding whitespace removed.
    pub internal_file_name: String,
    /// Record number of the first summary record.
    pub forward_record_pointer: u32,
    /// Record number of the last summary record.
    pub backward_record_pointer: u32,
    /// First free address of the file.
    pub first_free_address: u32,
    /// `"LTL-IEEE"` or `"BIG-IEEE"`.
    pub binary_file_format: BinaryFileFormat,
    /// Bytes `[96, 699)` are all null.
    pub pre_ftp_null_padding_valid: bool,
    /// 28-character FTP transfer sentinel.
    pub ftp_validation_string: String,
    /// Bytes `[727, 1024)` are all null.
    pub post_ftp_null_padding_valid: bool,
}

/// One unsigned little-endian word.
fn le_word(input: &[u8]) -> IResult<&[u8], u32> {
    map(take(4usize), le_u32_from_bytes)(input)
}

/// Read at most [`FILE_RECORD_LENGTH`] bytes into a zeroed record.
///
/// Return
/// ----------
/// * The record and the number of bytes actually read. Bytes past that count
///   stay null.
fn read_file_record<R: Read>(reader: R) -> io::Result<([u8; FILE_RECORD_LENGTH], usize)> {
    let mut bytes = Vec::with_capacity(FILE_RECORD_LENGTH);
    reader
        .take(FILE_RECORD_LENGTH as u64)
        .read_to_end(&mut bytes)?;

    let mut record = [0u8; FILE_RECORD_LENGTH];
    record[..bytes.len()].copy_from_slice(&bytes);
    Ok((record, bytes.len()))
}

impl SpiceFileHeader {
    /// Parse a complete 1024-byte File Record.
    ///
    /// Arguments
    /// -----------------
    /// * `input`: bytes starting at the beginning of the file, at least 1024 long.
    ///
    /// Return
    /// ----------
    /// * An [`IResult`] holding `(remaining, header)`; `remaining` starts right
    ///   after the File Record. Fails only when `input` is shorter than a record.
    ///
    /// See also
    /// ------------
    /// * [`SpiceFileHeader::from_file`] – Reads the record from disk first.
    pub fn parse(input: &[u8]) -> IResult<&[u8], Self> {
        let (input, id_word) = take(ID_WORD.len())(input)?; // "DAF/SPK "
        let (input, nd) = le_word(input)?;
        let (input, ni) = le_word(input)?;
        let (input, ifname) = take(INTERNAL_FILE_NAME.len())(input)?;
        let (input, fward) = le_word(input)?;
        let (input, bward) = le_word(input)?;
        let (input, free) = le_word(input)?;
        let (input, locfmt) = take(BINARY_FILE_FORMAT.len())(input)?;
        let (input, pre_padding) = take(PRE_FTP_NULL_PADDING.len())(input)?;
        let (input, ftpstr) = take(FTP_VALIDATION_STRING.len())(input)?;
        let (input, post_padding) = take(POST_FTP_NULL_PADDING.len())(input)?;

        Ok((
            input,
            SpiceFileHeader {
                file_architecture: latin1_string(&id_word[FILE_ARCHITECTURE])
                    .as_str()
                    .into(),
                id_word: latin1_string(id_word),
                nd,
                ni,
                internal_file_name: latin1_string(ifname).trim().to_string(),
                forward_record_pointer: fward,
                backward_record_pointer: bward,
                first_free_address: free,
                binary_file_format: latin1_string(locfmt).as_str().into(),
                pre_ftp_null_padding_valid: is_null_padding(pre_padding),
                ftp_validation_string: latin1_string(ftpstr),
                post_ftp_null_padding_valid: is_null_padding(post_padding),
            },
        ))
    }

    /// Decode the File Record from any reader positioned at the start of a file.
    ///
    /// At most 1024 bytes are consumed. A reader that ends early is not an
    /// error: the missing tail decodes as null bytes.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SpiceError> {
        let (record, _) = read_file_record(reader)?;
        let (_, header) = Self::parse(&record)?;
        Ok(header)
    }

    /// Open `path` and decode its File Record.
    ///
    /// The file handle is dropped before returning, on success or failure.
    ///
    /// Arguments
    /// -----------------
    /// * `path`: location of the SPICE binary file.
    ///
    /// Return
    /// ----------
    /// * The decoded header, or [`SpiceError::UnableToOpenFile`] /
    ///   [`SpiceError::UnableToReadFile`] when the file cannot be accessed.
    ///   Files shorter than a record still decode, their tail read as nulls.
    pub fn from_file(path: impl AsRef<Utf8Path>) -> Result<Self, SpiceError> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|source| SpiceError::UnableToOpenFile {
            path: path.to_owned(),
            source,
        })?;

        let (record, bytes_read) =
            read_file_record(file).map_err(|source| SpiceError::UnableToReadFile {
                path: path.to_owned(),
                source,
            })?;

        if bytes_read < FILE_RECORD_LENGTH {
            debug!(
                "{path}: file record truncated, read {bytes_read} of {FILE_RECORD_LENGTH} bytes"
            );
        }

        let (_, header) = Self::parse(&record)?;
        debug!("{path}: decoded file record ({})", header.id_word.trim_end());
        Ok(header)
    }

    /// `true` when the FTP string carries its `FTPSTR:` / `ENDFTP` markers.
    ///
    /// Decoding never checks this; it is offered to callers that want to.
    pub fn has_ftp_markers(&self) -> bool {
        self.ftp_validation_string.starts_with(FTP_STRING_PREFIX)
            && self.ftp_validation_string.ends_with(FTP_STRING_SUFFIX)
    }

    /// Size of one array summary in double-precision words: `ND + ceil(NI / 2)`.
    pub fn summary_size(&self) -> u64 {
        u64::from(self.nd) + u64::from(self.ni.div_ceil(2))
    }
}

fn padding_status(valid: bool) -> &'static str {
    if valid {
        "valid"
    } else {
        "invalid"
    }
}

impl fmt::Display for SpiceFileHeader {
    /// Render a fixed-width table of every File Record field.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const LABEL_WIDTH: usize = 18;
        const VALUE_WIDTH: usize = 50;

        let border = format!(
            "+{:-<label$}+{:-<value$}+",
            "",
            "",
            label = LABEL_WIDTH + 1,
            value = VALUE_WIDTH + 1
        );

        let rows = [
            ("Architecture", self.file_architecture.to_string()),
            ("ID Word", format!("{:?}", self.id_word)),
            ("Internal Name", self.internal_file_name.clone()),
            (
                "ND (doubles)",
                format!("{} double precision summary components", self.nd),
            ),
            (
                "NI (integers)",
                format!("{} integer summary components", self.ni),
            ),
            (
                "Forward Ptr",
                format!("Record # of first summary: {}", self.forward_record_pointer),
            ),
            (
                "Backward Ptr",
                format!("Record # of last summary: {}", self.backward_record_pointer),
            ),
            (
                "Free Addr",
                format!("Next free address: {}", self.first_free_address),
            ),
            ("Binary Format", self.binary_file_format.to_string()),
            (
                "Pre-FTP Padding",
                padding_status(self.pre_ftp_null_padding_valid).to_string(),
            ),
            (
                "FTP String",
                self.ftp_validation_string.escape_debug().to_string(),
            ),
            (
                "Post-FTP Padding",
                padding_status(self.post_ftp_null_padding_valid).to_string(),
            ),
        ];

        writeln!(f, "{border}")?;
        writeln!(
            f,
            "| {:<LABEL_WIDTH$}| {:<VALUE_WIDTH$}|",
            "SPICE File Record", ""
        )?;
        writeln!(f, "{border}")?;
        for (label, value) in rows {
            writeln!(f, "| {label:<LABEL_WIDTH$}| {value:<VALUE_WIDTH$}|")?;
        }
        writeln!(f, "{border}")
    }
}
