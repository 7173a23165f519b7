//! # pitwall-codec
//!
//! Container codecs for Pitwall profiles: a symmetric zip archive
//! (`pack`/`unpack`) and one-way spreadsheet sheet rendering.

pub mod archive;
pub mod error;
pub mod spreadsheet;

pub use archive::{pack, unpack};
pub use error::CodecError;
pub use spreadsheet::{team_sheet_csv, tim_sheet_csv};
