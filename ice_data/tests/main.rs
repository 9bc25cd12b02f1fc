use std::{io::Write, sync::Arc};

use aok::{OK, Void};
use ice_data::{Data, Error, MmapData, Slice};
use log::info;

#[static_init::constructor(0)]
extern "C" fn _log_init() {
  log_init::init();
}

#[test]
fn test_vec_read() -> Void {
  let data: Vec<u8> = (0..16).collect();
  assert_eq!(data.read(0, 4)?, &[0, 1, 2, 3]);
  assert_eq!(data.read(12, 16)?, &[12, 13, 14, 15]);
  assert!(data.read(16, 16)?.is_empty());
  OK
}

#[test]
fn test_out_of_range() -> Void {
  let data: Box<[u8]> = vec![0u8; 8].into();
  match data.read(4, 9) {
    Err(Error::OutOfRange { start, end, len }) => {
      assert_eq!((start, end, len), (4, 9, 8));
    }
    other => panic!("unexpected {other:?}"),
  }
  // Reversed range
  // 反向区间
  assert!(matches!(
    data.read(5, 4),
    Err(Error::OutOfRange { .. })
  ));
  OK
}

#[test]
fn test_ref_and_arc() -> Void {
  let data: Arc<[u8]> = Arc::from(&b"segment"[..]);
  let r = &data;
  assert_eq!(Data::len(&r), 7);
  assert_eq!(r.read(0, 3)?, b"seg");

  let arr = *b"abcd";
  assert_eq!(arr.read(2, 4)?, b"cd");
  assert!(!arr.is_empty());
  OK
}

#[test]
fn test_slice_view() -> Void {
  let data: Vec<u8> = (0..32).collect();
  let view = Slice::new(&data, 8, 24)?;
  assert_eq!(view.len(), 16);
  assert_eq!(view.offset(), 8);
  assert_eq!(view.read(0, 2)?, &[8, 9]);
  assert_eq!(view.read(14, 16)?, &[22, 23]);

  // Must not leak past the view even when the inner source is longer
  // 即使内部字节源更长也不能越过视图
  assert!(matches!(
    view.read(15, 17),
    Err(Error::OutOfRange { len: 16, .. })
  ));
  assert!(Slice::new(&data, 10, 33).is_err());
  assert!(Slice::new(&data, 11, 10).is_err());
  OK
}

#[test]
fn test_mmap() -> Void {
  let mut file = tempfile::NamedTempFile::new()?;
  let body: Vec<u8> = (0..=255).collect();
  file.write_all(&body)?;
  file.flush()?;

  let data = MmapData::open(file.path())?;
  assert_eq!(data.len(), 256);
  assert_eq!(data.read(250, 256)?, &body[250..]);
  assert_eq!(data.as_slice(), &body[..]);
  assert!(data.read(250, 257).is_err());
  info!("mmap {} bytes", data.len());
  OK
}

#[test]
fn test_mmap_missing_file() {
  let r = MmapData::open("/nonexistent/ice/segment");
  assert!(matches!(r, Err(Error::Io(_))));
}
