//! 压缩错误 Compression error

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
  #[error("lz4: {0}")]
  Lz4(#[from] lz4_flex::block::DecompressError),

  #[error("io: {0}")]
  Io(#[from] std::io::Error),

  #[error("unknown codec: {0}")]
  UnknownCodec(u8),
}
