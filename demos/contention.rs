//! Many threads sharing one pool; shows how often the shared buffer was
//! available.
//!
//! Run with:
//!     cargo run --example contention -- 16

use std::env;
use std::io::Cursor;
use std::sync::Arc;
use std::thread;

use scratchio::Scratch;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let threads: usize = env::args()
        .nth(1)
        .map(|s| s.parse())
        .transpose()?
        .unwrap_or(8);

    let scratch = Arc::new(Scratch::default());

    let handles: Vec<_> = (0..threads)
        .map(|id| {
            let scratch = Arc::clone(&scratch);
            thread::spawn(move || -> std::io::Result<()> {
                let text = format!("thread {id} says hello ").repeat(1 + id * 10);
                for _ in 0..10_000 {
                    let mut sink: Vec<u8> = Vec::with_capacity(text.len());
                    scratch.write(&mut sink, &text)?;
                    let (_, back) = scratch.read(&mut Cursor::new(sink), text.len())?;
                    assert_eq!(back, text);
                }
                Ok(())
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker panicked")?;
    }

    let stats = scratch.stats();
    println!("threads:  {}", threads);
    println!("calls:    {}", stats.total());
    println!(
        "shared:   {} ({:.1}%)",
        stats.shared,
        100.0 * stats.shared as f64 / stats.total() as f64
    );
    println!("private:  {}", stats.private);
    println!("grows:    {}", stats.grows);
    println!("capacity: {:?}", scratch.capacity());

    Ok(())
}
