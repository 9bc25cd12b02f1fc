//! Decoded footer value and its on-disk image
//! 解码后的尾部及其磁盘映像

use zerocopy::{
  FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned,
  big_endian::{U32, U64},
};

use crate::{FOOTER_LEN, Ver};

/// Segment footer / 段尾部
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Footer {
  /// Live + deleted docs
  /// 存活 + 已删除文档数
  pub num_docs: u64,
  pub stored_index_offset: u64,
  pub fields_index_offset: u64,
  pub doc_value_offset: u64,
  /// Opaque chunking strategy code
  /// 不透明的分块策略代码
  pub chunk_mode: u32,
  pub doc_time_min: u64,
  pub doc_time_max: u64,
  pub ver: Ver,
  /// Recorded checksum, not verified by `parse`
  /// 记录的校验和，`parse` 不做校验
  pub crc: u32,
}

/// Footer bytes in file order (60 bytes, packed)
/// 按文件顺序排列的尾部字节（60 字节，紧凑）
#[repr(C, packed)]
#[derive(Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned)]
pub(crate) struct Raw {
  num_docs: U64,
  stored_index_offset: U64,
  fields_index_offset: U64,
  doc_value_offset: U64,
  chunk_mode: U32,
  doc_time_min: U64,
  doc_time_max: U64,
  version: U32,
  crc: U32,
}

const _: () = assert!(size_of::<Raw>() == FOOTER_LEN);

impl From<&Footer> for Raw {
  fn from(f: &Footer) -> Self {
    Self {
      num_docs: U64::new(f.num_docs),
      stored_index_offset: U64::new(f.stored_index_offset),
      fields_index_offset: U64::new(f.fields_index_offset),
      doc_value_offset: U64::new(f.doc_value_offset),
      chunk_mode: U32::new(f.chunk_mode),
      doc_time_min: U64::new(f.doc_time_min),
      doc_time_max: U64::new(f.doc_time_max),
      version: U32::new(f.ver.raw()),
      crc: U32::new(f.crc),
    }
  }
}

impl Footer {
  #[inline]
  pub fn version(&self) -> u32 {
    self.ver.raw()
  }

  /// Encode in on-disk layout
  /// 按磁盘布局编码
  pub fn to_bytes(&self) -> [u8; FOOTER_LEN] {
    let mut out = [0u8; FOOTER_LEN];
    out.copy_from_slice(Raw::from(self).as_bytes());
    out
  }

  /// Whether any doc may fall inside `[min, max]`
  /// 是否可能有文档落在 `[min, max]` 内
  #[inline]
  pub fn overlaps(&self, min: u64, max: u64) -> bool {
    self.num_docs > 0 && self.doc_time_min <= max && min <= self.doc_time_max
  }
}
