//! Positioned reads from a file.
//!
//! Run with:
//!     cargo run --example sync_file -- /path/to/file

use std::env;
use std::fs::File;

use scratchio::{Scratch, ScratchConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "Cargo.toml".to_string());

    println!("Reading file: {}\n", path);

    let file = File::open(&path)?;
    let metadata = file.metadata()?;
    println!("File size: {} bytes\n", metadata.len());

    // Never keep more than 64 KiB of scratch around
    let config = ScratchConfig::new(4 * 1024)?.with_retain_limit(Some(64 * 1024));
    let scratch = Scratch::new(config)?;

    let window = 64;
    let mut offset = 0u64;
    let mut lines = 0;

    while offset < metadata.len() && lines < 10 {
        let (n, text) = scratch.read_at(&file, window, offset)?;
        if n == 0 {
            break;
        }
        println!("{:>8}: {:?}", offset, text);
        offset += n as u64;
        lines += 1;
    }

    println!("\n{:?}", scratch);

    Ok(())
}
