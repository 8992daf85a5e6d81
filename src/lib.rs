//! Reader for the File Record of SPICE binary DAF/SPK ephemeris files.
//!
//! ```rust, no_run
//! use spice_file_record::daf::{file_record::SpiceFileHeader, identification::is_spk_file};
//!
//! let path = "kernels/de202.bsp";
//! if is_spk_file(path) {
//!     let header = SpiceFileHeader::from_file(path)?;
//!     println!("{header}");
//! }
//! # Ok::<(), spice_file_record::spice_errors::SpiceError>(())
//! ```

pub mod constants;
pub mod daf;
pub mod spice_errors;
