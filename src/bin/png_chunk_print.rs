//! Prints the chunks of each PNG file named on the command line.
//!
//! Usage: `png_chunk_print [--only TYPE]... FILE...`
//!
//! Set `RUST_LOG=trace` to see every chunk the reader reads and skips.

use pngr::{ChunkFilter, ChunkReader, ChunkType};

fn main() {
  env_logger::init();

  let mut only: Vec<String> = Vec::new();
  let mut files: Vec<String> = Vec::new();
  let mut args = std::env::args().skip(1);
  while let Some(arg) = args.next() {
    if arg == "--only" {
      match args.next() {
        Some(ty) => only.push(ty),
        None => {
          eprintln!("`--only` needs a chunk type");
          std::process::exit(2);
        }
      }
    } else {
      files.push(arg);
    }
  }
  let only: Vec<&str> = only.iter().map(String::as_str).collect();
  let filter = ChunkFilter::only(&only);

  let mut failed = false;
  for file_arg in files.iter() {
    let path = std::path::Path::new(file_arg);
    print!("Reading `{}`... ", path.display());
    let bytes = match std::fs::read(path) {
      Ok(bytes) => {
        println!("got {} bytes.", bytes.len());
        bytes
      }
      Err(e) => {
        println!("{e}");
        failed = true;
        continue;
      }
    };
    let reader = match ChunkReader::new(&bytes, filter) {
      Ok(reader) => reader,
      Err(e) => {
        println!("{e}");
        failed = true;
        continue;
      }
    };
    for (n, chunk_res) in reader.enumerate() {
      match chunk_res {
        Ok(chunk) => {
          print!("{n}: Type: {} Len: {}", chunk.chunk_type(), chunk.data().len());
          if chunk.chunk_type() == ChunkType::tEXt {
            print!(" Value: {}", String::from_utf8_lossy(chunk.data()));
          }
          println!();
        }
        Err(e) => {
          println!("{n}: {e}");
          failed = true;
        }
      }
    }
  }
  if failed {
    std::process::exit(1);
  }
}
