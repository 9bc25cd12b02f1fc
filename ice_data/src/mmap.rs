//! Memory-mapped segment file
//! 内存映射的段文件

use std::{fs::File, path::Path};

use memmap2::Mmap;

use crate::{Data, Result, data::range};

/// Read-only mmap of a whole file / 整个文件的只读映射
#[derive(Debug)]
pub struct MmapData {
  mmap: Mmap,
}

impl MmapData {
  pub fn open(path: impl AsRef<Path>) -> Result<Self> {
    let file = File::open(path)?;
    Self::map(&file)
  }

  pub fn map(file: &File) -> Result<Self> {
    // Segment files are immutable once sealed
    // 段文件封存后不可变
    let mmap = unsafe { Mmap::map(file)? };
    Ok(Self { mmap })
  }

  #[inline]
  pub fn as_slice(&self) -> &[u8] {
    &self.mmap
  }
}

impl Data for MmapData {
  #[inline(always)]
  fn len(&self) -> usize {
    self.mmap.len()
  }

  #[inline(always)]
  fn read(&self, start: usize, end: usize) -> Result<&[u8]> {
    range(&self.mmap, start, end)
  }
}
