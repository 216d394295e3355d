//! Basic text round-trip through the global scratch pool.
//!
//! Run with:
//!     cargo run --example sync_basic

use std::io::Cursor;

use scratchio::Scratch;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let long = "a".repeat(2049);
    let lines = ["abc 123", "日本語", long.as_str()];

    for line in lines {
        let mut sink: Vec<u8> = Vec::new();
        let written = scratchio::write(&mut sink, line)?;

        let (read, text) = scratchio::read(&mut Cursor::new(sink), written)?;
        assert_eq!(text, line);

        println!(
            "wrote {:>5} bytes, read {:>5} bytes, shared capacity now {:?}",
            written,
            read,
            Scratch::global().capacity()
        );
    }

    println!("\n{:?}", Scratch::global().stats());

    Ok(())
}
