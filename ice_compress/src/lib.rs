#![cfg_attr(docsrs, feature(doc_cfg))]

//! Block codec chosen by configuration, not by a global switch
//! 由配置选择的块压缩，而非全局开关

mod codec;
mod compress;
mod conf;
mod error;

pub use codec::Codec;
pub use compress::Compress;
pub use conf::{Conf, Config, default};
pub use error::{Error, Result};
