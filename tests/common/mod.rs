#![allow(dead_code)]

use std::{cell::RefCell, io::Write, sync::Once};

use camino::Utf8PathBuf;
use log::{Level, LevelFilter, Log, Metadata, Record};
use spice_file_record::constants::{
    BACKWARD_RECORD_POINTER, BINARY_FILE_FORMAT, FILE_RECORD_LENGTH, FIRST_FREE_ADDRESS,
    FORWARD_RECORD_POINTER, FTP_VALIDATION_STRING, ID_WORD, INTERNAL_FILE_NAME, ND, NI,
};
use tempfile::NamedTempFile;

/// File Record of the DE202 planetary kernel, followed by one comment record.
pub const DE202_PATH: &str = "tests/data/de202_file_record.bsp";

pub const DE202_FTPSTR: &[u8; 28] = b"FTPSTR:\r:\n:\r\n:\r\x00:\x81:\x10\xce:ENDFTP";

// -------------------------------------------------------------------------------------------------
// Log capture
// -------------------------------------------------------------------------------------------------

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

/// Keeps the records emitted by the current thread, so parallel tests do not
/// see each other's logs.
struct CapturingLogger;

impl Log for CapturingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS.with(|records| {
            records
                .borrow_mut()
                .push((record.level(), record.args().to_string()))
        });
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger;
static INIT_LOGGER: Once = Once::new();

/// Install the capturing logger once per test binary and clear this thread's records.
pub fn init_logger() {
    INIT_LOGGER.call_once(|| {
        log::set_logger(&LOGGER).expect("logger already installed");
        log::set_max_level(LevelFilter::Trace);
    });
    RECORDS.with(|records| records.borrow_mut().clear());
}

/// Messages logged at `level` by the current thread since [`init_logger`].
pub fn logged(level: Level) -> Vec<String> {
    RECORDS.with(|records| {
        records
            .borrow()
            .iter()
            .filter(|(record_level, _)| *record_level == level)
            .map(|(_, message)| message.clone())
            .collect()
    })
}

// -------------------------------------------------------------------------------------------------
// Fixtures
// -------------------------------------------------------------------------------------------------

/// Build the DE202 File Record in memory.
pub fn de202_record() -> Vec<u8> {
    let mut record = vec![0u8; FILE_RECORD_LENGTH];
    record[ID_WORD].copy_from_slice(b"DAF/SPK ");
    record[ND].copy_from_slice(&2u32.to_le_bytes());
    record[NI].copy_from_slice(&6u32.to_le_bytes());
    record[INTERNAL_FILE_NAME].copy_from_slice(format!("{:<60}", "NIO2SPK").as_bytes());
    record[FORWARD_RECORD_POINTER].copy_from_slice(&3u32.to_le_bytes());
    record[BACKWARD_RECORD_POINTER].copy_from_slice(&3u32.to_le_bytes());
    record[FIRST_FREE_ADDRESS].copy_from_slice(&1_899_865u32.to_le_bytes());
    record[BINARY_FILE_FORMAT].copy_from_slice(b"LTL-IEEE");
    record[FTP_VALIDATION_STRING].copy_from_slice(DE202_FTPSTR);
    record
}

/// Write `bytes` to a temporary file. Keep the handle alive while using the path.
pub fn temp_file_with(bytes: &[u8]) -> (NamedTempFile, Utf8PathBuf) {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    let path = Utf8PathBuf::from_path_buf(file.path().to_path_buf()).unwrap();
    (file, path)
}
