#![cfg_attr(docsrs, feature(doc_cfg))]

//! Ice segment footer
//! ice 段尾部
//!
//! ```text
//! |========|========|========|========|====|========|========|====|====|
//! |     D# |     SF |      F |    FDV | CM |  TMIN  |  TMAX  |  V | CC |
//! |========|========|========|========|====|========|========|====|====|
//! ```
//!
//! D# docs, SF stored index, F fields index, FDV doc values, CM chunk mode,
//! TMIN/TMAX doc time range, V version, CC crc32. All big-endian.

mod check;
mod error;
mod footer;
mod layout;
mod parse;
mod ver;
mod write;

pub use check::Sections;
pub use error::{Error, Result};
pub use footer::Footer;
pub use ice_data::{Data, Slice};
pub use layout::{FIELDS, FOOTER_LEN, Field};
pub use parse::{parse, split};
pub use ver::{VERSION, Ver};
pub use write::{CRC_OFFSET, verify_crc, write};
