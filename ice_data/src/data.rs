//! Byte source trait
//! 字节源 trait

use std::sync::Arc;

use crate::{Error, Result};

/// Random-access byte source / 随机访问字节源
///
/// `read` borrows `[start, end)` and fails when the range is not inside `[0, len)`
/// `read` 借用 `[start, end)`，范围不在 `[0, len)` 内时返回错误
pub trait Data {
  fn len(&self) -> usize;

  fn read(&self, start: usize, end: usize) -> Result<&[u8]>;

  #[inline(always)]
  fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

/// Bounded slice of `bytes` / `bytes` 的有界切片
#[inline]
pub(crate) fn range(bytes: &[u8], start: usize, end: usize) -> Result<&[u8]> {
  bytes.get(start..end).ok_or(Error::OutOfRange {
    start,
    end,
    len: bytes.len(),
  })
}

macro_rules! impl_data {
  ($($ty:ty),* $(,)?) => {
    $(
      impl Data for $ty {
        #[inline(always)]
        fn len(&self) -> usize {
          AsRef::<[u8]>::as_ref(self).len()
        }

        #[inline(always)]
        fn read(&self, start: usize, end: usize) -> Result<&[u8]> {
          range(AsRef::<[u8]>::as_ref(self), start, end)
        }
      }
    )*
  };
}

impl_data!([u8], Vec<u8>, Box<[u8]>, Arc<[u8]>);

impl<const N: usize> Data for [u8; N] {
  #[inline(always)]
  fn len(&self) -> usize {
    N
  }

  #[inline(always)]
  fn read(&self, start: usize, end: usize) -> Result<&[u8]> {
    range(self, start, end)
  }
}

impl<D: Data + ?Sized> Data for &D {
  #[inline(always)]
  fn len(&self) -> usize {
    (**self).len()
  }

  #[inline(always)]
  fn read(&self, start: usize, end: usize) -> Result<&[u8]> {
    (**self).read(start, end)
  }
}
