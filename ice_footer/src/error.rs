//! Error types for ice_footer
//! ice_footer 错误类型

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
  #[error("data len {len} less than footer len {need}")]
  TruncatedFooter { len: usize, need: usize },

  #[error("unsupported version {found}, expected {expected}")]
  UnsupportedVersion { found: u32, expected: u32 },

  #[error("corrupt footer at {field}: {source}")]
  CorruptFooter {
    field: &'static str,
    source: ice_data::Error,
  },

  #[error(
    "invalid offsets: stored {stored}, fields {fields}, doc values {doc_value}, footer {footer}"
  )]
  InvalidOffsets {
    stored: u64,
    fields: u64,
    doc_value: u64,
    footer: u64,
  },

  #[error("checksum mismatch: expected {expected}, got {actual}")]
  ChecksumMismatch { expected: u32, actual: u32 },
}
