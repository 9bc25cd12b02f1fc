//! Error types for ice_data
//! ice_data 错误类型

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
  #[error("io: {0}")]
  Io(#[from] std::io::Error),

  #[error("range {start}..{end} out of bounds (len {len})")]
  OutOfRange { start: usize, end: usize, len: usize },
}
