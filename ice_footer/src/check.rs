//! Section bounds derived from footer offsets
//! 由尾部偏移推导的段区间

use std::ops::Range;

use crate::{Error, FOOTER_LEN, Footer, Result};

/// Byte ranges of the sections located by a footer
/// 尾部定位的各段字节区间
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sections {
  pub stored_index: Range<u64>,
  pub fields_index: Range<u64>,
  pub doc_values: Range<u64>,
}

impl Footer {
  /// stored <= fields <= doc values <= footer start
  /// 存储索引 <= 字段索引 <= 文档值 <= 尾部起点
  pub fn check_offsets(&self, len: usize) -> Result<()> {
    if len < FOOTER_LEN {
      return Err(Error::TruncatedFooter {
        len,
        need: FOOTER_LEN,
      });
    }
    let footer = (len - FOOTER_LEN) as u64;
    let (stored, fields, doc_value) = (
      self.stored_index_offset,
      self.fields_index_offset,
      self.doc_value_offset,
    );
    if stored <= fields && fields <= doc_value && doc_value <= footer {
      return Ok(());
    }
    log::warn!("footer offsets out of order for segment of {len} bytes");
    Err(Error::InvalidOffsets {
      stored,
      fields,
      doc_value,
      footer,
    })
  }

  pub fn sections(&self, len: usize) -> Result<Sections> {
    self.check_offsets(len)?;
    let footer = (len - FOOTER_LEN) as u64;
    Ok(Sections {
      stored_index: self.stored_index_offset..self.fields_index_offset,
      fields_index: self.fields_index_offset..self.doc_value_offset,
      doc_values: self.doc_value_offset..footer,
    })
  }
}
