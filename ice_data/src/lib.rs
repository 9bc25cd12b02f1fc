#![cfg_attr(docsrs, feature(doc_cfg))]

//! Random-access byte source for segment files
//! 段文件的随机访问字节源

mod data;
mod error;
mod mmap;
mod slice;

pub use data::Data;
pub use error::{Error, Result};
pub use mmap::MmapData;
pub use slice::Slice;
