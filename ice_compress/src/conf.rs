//! Codec configuration
//! 压缩配置

use crate::Codec;

/// Configuration options
/// 配置选项
#[derive(Debug, Clone, Copy)]
pub enum Conf {
  Codec(Codec),

  /// zstd level, clamped to what libzstd accepts
  /// zstd 压缩等级，超出 libzstd 支持范围时截断
  ZstdLevel(i32),

  /// gzip level (0-9)
  /// gzip 压缩等级 (0-9)
  GzipLevel(u32),
}

/// Resolved configuration
/// 解析后的配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
  pub codec: Codec,
  pub zstd_level: i32,
  pub gzip_level: u32,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      codec: Codec::default(),
      zstd_level: default::ZSTD_LEVEL,
      gzip_level: default::GZIP_LEVEL,
    }
  }
}

impl From<&[Conf]> for Config {
  fn from(conf_li: &[Conf]) -> Self {
    let mut config = Self::default();
    for &conf in conf_li {
      match conf {
        Conf::Codec(v) => config.codec = v,
        Conf::ZstdLevel(v) => {
          let range = zstd::compression_level_range();
          config.zstd_level = if range.contains(&v) {
            v
          } else {
            let clamped = v.clamp(*range.start(), *range.end());
            log::warn!("zstd level {v} out of range {range:?}, use {clamped}");
            clamped
          };
        }
        Conf::GzipLevel(v) => {
          config.gzip_level = if v > 9 {
            log::warn!("gzip level {v} out of range (0-9), use 9");
            9
          } else {
            v
          };
        }
      }
    }
    config
  }
}

/// Default values
/// 默认值
pub mod default {
  pub const ZSTD_LEVEL: i32 = 3;
  pub const GZIP_LEVEL: u32 = 6;
}
