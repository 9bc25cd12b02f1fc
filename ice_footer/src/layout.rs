//! Footer field table
//! 尾部字段表

use ice_data::Error as DataError;
use zerocopy::{
  FromBytes,
  big_endian::{U32, U64},
};

use crate::{Footer, Ver};

/// One footer field / 单个尾部字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
  Crc,
  Version,
  TimeMax,
  TimeMin,
  ChunkMode,
  DocValueOffset,
  FieldsIndexOffset,
  StoredIndexOffset,
  NumDocs,
}

/// Fields from the end of the file backward
/// 从文件末尾向前的字段顺序
pub const FIELDS: [Field; 9] = [
  Field::Crc,
  Field::Version,
  Field::TimeMax,
  Field::TimeMin,
  Field::ChunkMode,
  Field::DocValueOffset,
  Field::FieldsIndexOffset,
  Field::StoredIndexOffset,
  Field::NumDocs,
];

/// Total footer size in bytes (60)
/// 尾部总字节数（60）
pub const FOOTER_LEN: usize = {
  let mut len = 0;
  let mut i = 0;
  while i < FIELDS.len() {
    len += FIELDS[i].width();
    i += 1;
  }
  len
};

const _: () = assert!(FOOTER_LEN == 60);

impl Field {
  #[inline]
  pub const fn width(self) -> usize {
    match self {
      Self::Crc | Self::Version | Self::ChunkMode => 4,
      Self::TimeMax
      | Self::TimeMin
      | Self::DocValueOffset
      | Self::FieldsIndexOffset
      | Self::StoredIndexOffset
      | Self::NumDocs => 8,
    }
  }

  pub const fn name(self) -> &'static str {
    match self {
      Self::Crc => "crc",
      Self::Version => "version",
      Self::TimeMax => "doc_time_max",
      Self::TimeMin => "doc_time_min",
      Self::ChunkMode => "chunk_mode",
      Self::DocValueOffset => "doc_value_offset",
      Self::FieldsIndexOffset => "fields_index_offset",
      Self::StoredIndexOffset => "stored_index_offset",
      Self::NumDocs => "num_docs",
    }
  }

  /// Distance from the end of the file to the start of this field
  /// 文件末尾到该字段起点的距离
  pub const fn tail(self) -> usize {
    let mut len = 0;
    let mut i = 0;
    while i < FIELDS.len() {
      len += FIELDS[i].width();
      if FIELDS[i] as u8 == self as u8 {
        break;
      }
      i += 1;
    }
    len
  }

  /// Decode big-endian bytes, widened to u64
  /// 解码大端字节并扩展为 u64
  pub(crate) fn decode(self, bytes: &[u8]) -> Result<u64, DataError> {
    let width = self.width();
    let bad = || DataError::OutOfRange {
      start: 0,
      end: width,
      len: bytes.len(),
    };
    if width == 4 {
      U32::read_from_bytes(bytes)
        .map(|v| v.get() as u64)
        .map_err(|_| bad())
    } else {
      U64::read_from_bytes(bytes)
        .map(|v| v.get())
        .map_err(|_| bad())
    }
  }

  /// Store a decoded value into its footer attribute
  /// 将解码值写入对应属性
  pub(crate) fn set(self, footer: &mut Footer, v: u64) {
    match self {
      Self::Crc => footer.crc = v as u32,
      Self::Version => footer.ver = Ver::from(v as u32),
      Self::TimeMax => footer.doc_time_max = v,
      Self::TimeMin => footer.doc_time_min = v,
      Self::ChunkMode => footer.chunk_mode = v as u32,
      Self::DocValueOffset => footer.doc_value_offset = v,
      Self::FieldsIndexOffset => footer.fields_index_offset = v,
      Self::StoredIndexOffset => footer.stored_index_offset = v,
      Self::NumDocs => footer.num_docs = v,
    }
  }
}
