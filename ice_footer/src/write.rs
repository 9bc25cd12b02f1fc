//! Footer writer and checksum
//! 尾部写入与校验和

use crc32fast::Hasher;
use ice_data::Data;

use crate::{Error, FOOTER_LEN, Field, Footer, Result};

/// Offset of the crc inside the footer
/// crc 在尾部内的偏移
pub const CRC_OFFSET: usize = FOOTER_LEN - Field::Crc.width();

/// Append `footer` to a segment body, crc covering every byte before the crc field
/// 将 `footer` 追加到段内容之后，crc 覆盖 crc 字段之前的所有字节
pub fn write(body: &mut Vec<u8>, mut footer: Footer) -> Footer {
  footer.crc = 0;
  let head = footer.to_bytes();

  let mut hasher = Hasher::new();
  hasher.update(body);
  hasher.update(&head[..CRC_OFFSET]);
  footer.crc = hasher.finalize();

  body.extend_from_slice(&footer.to_bytes());
  footer
}

/// Recompute the crc of a sealed segment; `parse` never calls this
/// 重新计算已封存段的 crc；`parse` 不会调用
pub fn verify_crc<D: Data + ?Sized>(data: &D, footer: &Footer) -> Result<()> {
  let len = data.len();
  if len < FOOTER_LEN {
    return Err(Error::TruncatedFooter {
      len,
      need: FOOTER_LEN,
    });
  }
  let covered = data
    .read(0, len - Field::Crc.width())
    .map_err(|source| Error::CorruptFooter {
      field: Field::Crc.name(),
      source,
    })?;

  let actual = crc32fast::hash(covered);
  if actual != footer.crc {
    return Err(Error::ChecksumMismatch {
      expected: footer.crc,
      actual,
    });
  }
  Ok(())
}
