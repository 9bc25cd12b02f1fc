//! Sub-range view over a byte source
//! 字节源的子区间视图

use crate::{Data, Error, Result};

/// `[start, end)` of an inner source, re-based at 0
/// 内部字节源的 `[start, end)`，起点重置为 0
#[derive(Debug, Clone, Copy)]
pub struct Slice<D> {
  data: D,
  start: usize,
  end: usize,
}

impl<D: Data> Slice<D> {
  pub fn new(data: D, start: usize, end: usize) -> Result<Self> {
    if start > end || end > data.len() {
      return Err(Error::OutOfRange {
        start,
        end,
        len: data.len(),
      });
    }
    Ok(Self { data, start, end })
  }

  /// Absolute offset of this view in the inner source
  /// 视图在内部字节源中的绝对偏移
  #[inline]
  pub fn offset(&self) -> usize {
    self.start
  }

  pub fn into_inner(self) -> D {
    self.data
  }
}

impl<D: Data> Data for Slice<D> {
  #[inline(always)]
  fn len(&self) -> usize {
    self.end - self.start
  }

  fn read(&self, start: usize, end: usize) -> Result<&[u8]> {
    let len = self.len();
    if start > end || end > len {
      return Err(Error::OutOfRange { start, end, len });
    }
    self.data.read(self.start + start, self.start + end)
  }
}
