use pngr::{png_crc, ChunkFilter, ChunkReader, ChunkType, PngError, PNG_SIGNATURE};
use walkdir::WalkDir;

const RED_PNG: &[u8] = include_bytes!("red.png");
const RED_TEXT_PNG: &[u8] = include_bytes!("red_text.png");

fn chunk_types(bytes: &[u8], filter: ChunkFilter<'_>) -> Vec<ChunkType> {
  ChunkReader::new(bytes, filter).unwrap().map(|res| res.unwrap().chunk_type()).collect()
}

#[test]
fn test_ChunkReader_red_png() {
  assert_eq!(
    chunk_types(RED_PNG, ChunkFilter::all()),
    vec![ChunkType::IHDR, ChunkType::IDAT, ChunkType::IEND]
  );
  for (filter, expected) in [
    (&["IHDR"][..], 1),
    (&["IDAT"][..], 1),
    (&["IEND"][..], 1),
    (&["tEXt"][..], 0),
    (&["IHDR", "IDAT", "IEND"][..], 3),
  ] {
    assert_eq!(chunk_types(RED_PNG, ChunkFilter::only(filter)).len(), expected, "{filter:?}");
  }

  let ihdr = ChunkReader::new(RED_PNG, ChunkFilter::only(&["IHDR"])).unwrap().next().unwrap().unwrap();
  assert_eq!(ihdr.length(), 13);
  // 1x1, 8-bit RGB
  assert_eq!(ihdr.data(), &[0, 0, 0, 1, 0, 0, 0, 1, 8, 2, 0, 0, 0]);
}

#[test]
fn test_ChunkReader_text_chunk() {
  let filter = ["tEXt"];
  let mut reader = ChunkReader::new(RED_TEXT_PNG, ChunkFilter::only(&filter)).unwrap();
  let text = reader.next_chunk().unwrap().unwrap();
  assert_eq!(text.chunk_type(), ChunkType::tEXt);
  assert_eq!(text.data(), b"Comment\0made by hand");
  assert_eq!(reader.next_chunk(), Ok(None));

  assert_eq!(chunk_types(RED_TEXT_PNG, ChunkFilter::all()).len(), 4);
}

#[test]
fn test_ChunkReader_accessors_on_owned_reader() {
  let filter = ["IDAT"];
  let mut reader = ChunkReader::new(RED_PNG, ChunkFilter::only(&filter)).unwrap();
  assert_eq!(reader.offset(), 8);
  assert_eq!(reader.chunk_filter().allowed(), Some(&filter[..]));
  let idat = reader.next_chunk().unwrap().unwrap();
  assert_eq!(idat.chunk_type(), ChunkType::IDAT);
  // the IEND chunk is all that's left
  assert_eq!(reader.offset(), RED_PNG.len() - 12);
  assert_eq!(reader.remaining(), &RED_PNG[RED_PNG.len() - 12..]);
}

#[test]
fn test_ChunkReader_random_chunks_round_trip() {
  for _ in 0..20 {
    let mut expected: Vec<([u8; 4], Vec<u8>)> = Vec::new();
    let mut png = PNG_SIGNATURE.to_vec();
    for header in super::rand_bytes(6 * 8).chunks_exact(6) {
      let ty: [u8; 4] = header[..4].try_into().unwrap();
      let len = usize::from(u16::from_le_bytes([header[4], header[5]])) % 700;
      let data = super::rand_bytes(len);
      png.extend_from_slice(&(len as u32).to_be_bytes());
      png.extend_from_slice(&ty);
      png.extend_from_slice(&data);
      png.extend_from_slice(&png_crc(&ty, &data).to_be_bytes());
      expected.push((ty, data));
    }
    let got: Vec<([u8; 4], Vec<u8>)> = ChunkReader::new(&png, ChunkFilter::all())
      .unwrap()
      .map(|res| {
        let chunk = res.unwrap();
        assert_eq!(chunk.length() as usize, chunk.data().len());
        (chunk.chunk_type().0, chunk.data().to_vec())
      })
      .collect();
    assert_eq!(got, expected);
  }
}

#[test]
fn test_ChunkReader_flipped_bits_are_caught() {
  // flip a bit in every byte past the signature: each one must either be
  // caught by a crc or change the chunk layout, never pass silently
  for i in PNG_SIGNATURE.len()..RED_PNG.len() {
    let mut bytes = RED_PNG.to_vec();
    bytes[i] ^= 0b0001_0000;
    let results: Vec<_> = ChunkReader::new(&bytes, ChunkFilter::all()).unwrap().collect();
    let all_ok = results.iter().all(Result::is_ok);
    if all_ok {
      // only a damaged length field can do this, making the rest look truncated
      assert!(results.len() < 3, "byte {i} changed without detection");
    } else {
      assert!(matches!(results.last(), Some(Err(PngError::BadChecksum { .. }))));
    }
  }
}

#[test]
fn test_ChunkReader_no_panics() {
  // iter ALL files in the test folder, even non-png files shouldn't panic it.
  for entry in WalkDir::new("tests/").into_iter().filter_map(|e| e.ok()) {
    println!("{}", entry.path().display());
    let v = match std::fs::read(entry.path()) {
      Ok(v) => v,
      Err(e) => {
        println!("Error reading file: {e:?}");
        continue;
      }
    };
    if let Ok(reader) = ChunkReader::new(&v, ChunkFilter::all()) {
      for _ in reader {
        //
      }
    }
  }
  // even totally random data should never panic the reader!
  for _ in 0..10 {
    let mut v = PNG_SIGNATURE.to_vec();
    v.extend(super::rand_bytes(1024));
    for _ in ChunkReader::new(&v, ChunkFilter::all()).unwrap() {
      //
    }
    assert!(ChunkReader::new(&v[1..], ChunkFilter::all()).is_err());
  }
}
