//! Format version
//! 格式版本

/// The only on-disk version this crate decodes
/// 本 crate 唯一支持解码的磁盘版本
pub const VERSION: u32 = 1;

/// Known format versions / 已知格式版本
///
/// New layouts get a new variant; anything else stays `Unknown`
/// 新布局新增变体，其余保持 `Unknown`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Ver {
  #[default]
  V1,
  Unknown(u32),
}

impl Ver {
  pub const CURRENT: Self = Self::V1;

  #[inline]
  pub const fn raw(self) -> u32 {
    match self {
      Self::V1 => VERSION,
      Self::Unknown(v) => v,
    }
  }

  #[inline]
  pub const fn is_supported(self) -> bool {
    matches!(self, Self::V1)
  }
}

impl From<u32> for Ver {
  #[inline]
  fn from(v: u32) -> Self {
    match v {
      VERSION => Self::V1,
      _ => Self::Unknown(v),
    }
  }
}

impl From<Ver> for u32 {
  #[inline]
  fn from(v: Ver) -> Self {
    v.raw()
  }
}
