//! Codec bound to a configuration
//! 绑定配置的压缩器

use std::io::{Read, Write};

use flate2::{Compression, read::GzDecoder, write::GzEncoder};

use crate::{Codec, Conf, Config, Result};

/// Built once by the segment writer, then shared read-only
/// 由段写入器创建一次，之后只读共享
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Compress {
  config: Config,
}

impl Compress {
  pub fn new(conf_li: &[Conf]) -> Self {
    Self {
      config: Config::from(conf_li),
    }
  }

  #[inline]
  pub fn codec(&self) -> Codec {
    self.config.codec
  }

  #[inline]
  pub fn config(&self) -> &Config {
    &self.config
  }

  /// 压缩 Compress
  pub fn enc(&self, src: &[u8]) -> Result<Vec<u8>> {
    Ok(match self.config.codec {
      Codec::None => src.to_vec(),
      Codec::Lz4 => lz4_flex::compress_prepend_size(src),
      Codec::Zstd => zstd::encode_all(src, self.config.zstd_level)?,
      Codec::Gzip => {
        let mut w = GzEncoder::new(Vec::new(), Compression::new(self.config.gzip_level));
        w.write_all(src)?;
        w.finish()?
      }
    })
  }

  /// 解压 Decompress
  pub fn dec(&self, src: &[u8]) -> Result<Vec<u8>> {
    Ok(match self.config.codec {
      Codec::None => src.to_vec(),
      Codec::Lz4 => lz4_flex::decompress_size_prepended(src)?,
      Codec::Zstd => {
        let mut out = Vec::new();
        zstd::Decoder::new(src)?.read_to_end(&mut out)?;
        out
      }
      Codec::Gzip => {
        let mut out = Vec::new();
        GzDecoder::new(src).read_to_end(&mut out)?;
        out
      }
    })
  }
}

impl From<Config> for Compress {
  #[inline]
  fn from(config: Config) -> Self {
    Self { config }
  }
}
