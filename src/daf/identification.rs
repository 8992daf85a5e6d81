//! Identification check for binary SPK kernels.
//!
//! A properly created binary SPK file starts with the identification word
//! `"DAF/SPK "` (note the trailing space). Checking those eight bytes is
//! enough to tell an SPK kernel from anything else before decoding the full
//! File Record.

use std::{fs::File, io::Read};

use camino::Utf8Path;
use log::{debug, error};

use crate::constants::{ID_WORD_LENGTH, SPK_ID_WORD};
use crate::spice_errors::SpiceError;

/// Read at most [`ID_WORD_LENGTH`] bytes from the start of `path`.
fn read_id_word(path: &Utf8Path) -> Result<Vec<u8>, SpiceError> {
    let file = File::open(path).map_err(|source| SpiceError::UnableToOpenFile {
        path: path.to_owned(),
        source,
    })?;

    let mut id_word = Vec::with_capacity(ID_WORD_LENGTH);
    file.take(ID_WORD_LENGTH as u64)
        .read_to_end(&mut id_word)
        .map_err(|source| SpiceError::UnableToReadFile {
            path: path.to_owned(),
            source,
        })?;
    Ok(id_word)
}

/// Check whether `path` claims to be a binary SPK file.
///
/// Only the first eight bytes are read and compared with `"DAF/SPK "`. The
/// check never fails: an unreadable file is logged at error level and
/// reported as `false`, the same answer as a file with another identifier.
///
/// Arguments
/// -----------------
/// * `path`: location of the candidate file.
///
/// Return
/// ----------
/// * `true` iff the file could be read and starts with `"DAF/SPK "`.
///
/// See also
/// ------------
/// * [`SpiceFileHeader::from_file`](crate::daf::file_record::SpiceFileHeader::from_file) – Decodes the full File Record.
pub fn is_spk_file(path: impl AsRef<Utf8Path>) -> bool {
    let path = path.as_ref();
    match read_id_word(path) {
        Ok(id_word) if id_word.as_slice() == SPK_ID_WORD.as_slice() => true,
        Ok(id_word) => {
            debug!(
                "{path}: identification word {:?} is not a SPK identifier",
                String::from_utf8_lossy(&id_word)
            );
            false
        }
        Err(err) => {
            error!("{err}");
            false
        }
    }
}

#[cfg(test)]
mod test_identification {
    use super::*;
    use std::io::Write;

    use camino::Utf8PathBuf;
    use tempfile::NamedTempFile;

    fn file_with(bytes: &[u8]) -> (NamedTempFile, Utf8PathBuf) {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        file.flush().unwrap();
        let path = Utf8PathBuf::from_path_buf(file.path().to_path_buf()).unwrap();
        (file, path)
    }

    #[test]
    fn test_spk_identifier() {
        let (_file, path) = file_with(b"DAF/SPK \x02\x00\x00\x00");
        assert!(is_spk_file(&path));
    }

    #[test]
    fn test_identifier_is_exact() {
        for bytes in [
            &b"DAF/SPK"[..],
            b"DAF/SPK\0",
            b"DAF/CK  ",
            b"daf/spk ",
            b"NAIF/DAF",
            b"",
        ] {
            let (_file, path) = file_with(bytes);
            assert!(!is_spk_file(&path), "{bytes:?}");
        }
    }

    #[test]
    fn test_read_id_word_short_file() {
        let (_file, path) = file_with(b"DAF");
        assert_eq!(read_id_word(&path).unwrap(), b"DAF");
    }

    #[test]
    fn test_read_id_word_missing_file() {
        let path = Utf8Path::new("kernels/does_not_exist.bsp");
        assert_eq!(
            read_id_word(path),
            Err(SpiceError::UnableToOpenFile {
                path: path.to_owned(),
                source: std::io::ErrorKind::NotFound.into(),
            })
        );
    }
}
