//! 压缩算法 Compression codec

use crate::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Codec {
  None = 0,
  #[default]
  Lz4 = 1,
  Zstd = 2,
  Gzip = 3,
}

impl Codec {
  /// 从 u8 转换 Convert from u8
  #[inline]
  pub fn from_u8(v: u8) -> Result<Self> {
    match v {
      0 => Ok(Self::None),
      1 => Ok(Self::Lz4),
      2 => Ok(Self::Zstd),
      3 => Ok(Self::Gzip),
      _ => Err(Error::UnknownCodec(v)),
    }
  }
}

impl TryFrom<u8> for Codec {
  type Error = Error;

  #[inline]
  fn try_from(v: u8) -> Result<Self> {
    Self::from_u8(v)
  }
}
