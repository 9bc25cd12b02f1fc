//! Footer decoder
//! 尾部解码器

use ice_data::{Data, Slice};

use crate::{Error, FIELDS, FOOTER_LEN, Field, Footer, Result, VERSION};

/// Decode the footer at the end of a whole segment
/// 解码整个段末尾的尾部
///
/// Fields are read tail first; nothing after the version is trusted until it matches
/// 从尾部向前读取字段；版本匹配前不信任其后的任何字段
pub fn parse<D: Data + ?Sized>(data: &D) -> Result<Footer> {
  let len = data.len();
  if len < FOOTER_LEN {
    return Err(Error::TruncatedFooter {
      len,
      need: FOOTER_LEN,
    });
  }

  let mut footer = Footer::default();
  let mut end = len;
  for field in FIELDS {
    let start = end - field.width();
    let corrupt = |source: ice_data::Error| Error::CorruptFooter {
      field: field.name(),
      source,
    };
    let bytes = data.read(start, end).map_err(corrupt)?;
    let v = field.decode(bytes).map_err(corrupt)?;
    field.set(&mut footer, v);

    if field == Field::Version && !footer.ver.is_supported() {
      return Err(Error::UnsupportedVersion {
        found: footer.ver.raw(),
        expected: VERSION,
      });
    }
    end = start;
  }

  log::debug!(
    "footer v{}: {} docs, time {}..={}",
    footer.version(),
    footer.num_docs,
    footer.doc_time_min,
    footer.doc_time_max
  );
  Ok(footer)
}

/// Decode the footer and keep a view of the segment body before it
/// 解码尾部，并保留其之前段内容的视图
pub fn split<D: Data>(data: D) -> Result<(Footer, Slice<D>)> {
  let footer = parse(&data)?;
  let end = data.len() - FOOTER_LEN;
  let body = Slice::new(data, 0, end).map_err(|source| Error::CorruptFooter {
    field: Field::NumDocs.name(),
    source,
  })?;
  Ok((footer, body))
}
