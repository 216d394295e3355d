//! Free functions backed by the process-wide pool.
//!
//! These forward to [`Scratch::global`]. Code that wants its own buffer,
//! configuration, or counters should construct a [`Scratch`] instead.

use std::io::{self, Read, Write};

use crate::positioned::{ReadAt, WriteAt};

use super::pool::Scratch;

/// Reads up to `n` bytes from `source` as text using the global pool.
///
/// See [`Scratch::read`].
///
/// # Example
///
/// ```
/// let (n, text) = scratchio::read(&mut "abc 123".as_bytes(), 3)?;
/// assert_eq!((n, text.as_str()), (3, "abc"));
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn read<R: Read + ?Sized>(source: &mut R, n: usize) -> io::Result<(usize, String)> {
    Scratch::global().read(source, n)
}

/// Reads up to `n` bytes from `source` at `offset` as text using the
/// global pool.
///
/// See [`Scratch::read_at`].
pub fn read_at<R: ReadAt + ?Sized>(
    source: &R,
    n: usize,
    offset: u64,
) -> io::Result<(usize, String)> {
    Scratch::global().read_at(source, n, offset)
}

/// Writes `text` to `sink` using the global pool.
///
/// See [`Scratch::write`].
///
/// # Example
///
/// ```
/// let mut sink: Vec<u8> = Vec::new();
/// assert_eq!(scratchio::write(&mut sink, "日本語")?, 9);
/// assert_eq!(String::from_utf8(sink).unwrap(), "日本語");
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn write<W: Write + ?Sized>(sink: &mut W, text: &str) -> io::Result<usize> {
    Scratch::global().write(sink, text)
}

/// Writes `text` to `sink` at `offset` using the global pool.
///
/// See [`Scratch::write_at`].
pub fn write_at<W: WriteAt + ?Sized>(sink: &mut W, text: &str, offset: u64) -> io::Result<usize> {
    Scratch::global().write_at(sink, text, offset)
}
