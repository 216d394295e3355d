//! scratchio
//!
//! Text over byte-oriented I/O without per-call allocation.
//!
//! `std::io::Read` and `std::io::Write` speak in byte slices. Moving a
//! `String` through them usually means allocating a temporary buffer for
//! every call. `scratchio` keeps one scratch buffer around and lends it to
//! each call instead:
//!
//! - the buffer grows to the next power of two when a call needs more room,
//!   and never shrinks
//! - it is taken with a try-lock, so concurrent callers never wait on each
//!   other; a caller that finds it busy uses a private buffer for that one
//!   call
//! - results and errors come straight from the underlying endpoint
//!
//! The crate intentionally:
//! - does NOT buffer or queue data between calls
//! - does NOT validate text encodings
//! - does NOT retry short reads or writes
//!
//! # Sequential endpoints
//!
//! ```
//! use std::io::Cursor;
//!
//! let mut sink: Vec<u8> = Vec::new();
//! scratchio::write(&mut sink, "abc 123")?;
//!
//! let (n, text) = scratchio::read(&mut Cursor::new(sink), 7)?;
//! assert_eq!((n, text.as_str()), (7, "abc 123"));
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! # Positioned endpoints
//!
//! ```no_run
//! use std::fs::OpenOptions;
//! use scratchio::{Scratch, ScratchConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut file = OpenOptions::new().read(true).write(true).open("data.bin")?;
//!     let scratch = Scratch::new(ScratchConfig::default().with_retain_limit(Some(1 << 20)))?;
//!
//!     scratch.write_at(&mut file, "header", 0)?;
//!     let (_, text) = scratch.read_at(&file, 6, 0)?;
//!     println!("{text}");
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod positioned;
mod scratch;
mod sizing;

//
// Public surface (intentionally tiny)
//

pub use config::{DEFAULT_INITIAL_CAPACITY, ScratchConfig};
pub use error::ScratchError;
pub use positioned::{ReadAt, WriteAt};
pub use scratch::{Scratch, ScratchStatsSnapshot, read, read_at, write, write_at};
pub use sizing::{WordSize, least_power_of_two};
