//! Readers for the DAF (Double Precision Array File) container.
//!
//! * [`identification`] – cheap eight-byte check that a file is a binary SPK kernel.
//! * [`file_record`] – decoder for the 1024-byte File Record.
//! * [`byte_decoding`] – integer, text and padding primitives shared by both.

pub mod byte_decoding;
pub mod file_record;
pub mod identification;
