//! Positioned I/O endpoints.
//!
//! `std::io` has no portable trait for reading or writing at an absolute
//! offset, so this module defines the two the coordinator accepts:
//!
//! - [`ReadAt`] - Read into a buffer starting at an offset
//! - [`WriteAt`] - Write a buffer starting at an offset
//!
//! Both follow `pread`/`pwrite` semantics: one call, possibly short, no
//! cursor involved.

mod impls;

use std::io;

/// A source that can be read at an absolute byte offset.
///
/// Implementations make a single attempt and report how many bytes landed
/// in `buf`. A count shorter than `buf.len()` is not an error; a read at or
/// past the end of the source returns `Ok(0)`.
///
/// # Example
///
/// ```
/// use scratchio::ReadAt;
///
/// let data = b"hello world".to_vec();
/// let mut buf = [0u8; 5];
/// let n = data.read_at(&mut buf, 6)?;
/// assert_eq!(&buf[..n], b"world");
/// # Ok::<(), std::io::Error>(())
/// ```
pub trait ReadAt {
    /// Reads bytes starting at `offset` into `buf`.
    fn read_at(&self, buf: &mut [u8], offset: u64) -> io::Result<usize>;
}

/// A sink that can be written at an absolute byte offset.
///
/// Implementations make a single attempt and report how many bytes of
/// `buf` were accepted. Bytes outside `[offset, offset + n)` are left as
/// they were.
///
/// # Example
///
/// ```
/// use scratchio::WriteAt;
///
/// let mut data = b"hello world".to_vec();
/// data.write_at(b"there", 6)?;
/// assert_eq!(data, b"hello there");
/// # Ok::<(), std::io::Error>(())
/// ```
pub trait WriteAt {
    /// Writes `buf` starting at `offset`.
    fn write_at(&mut self, buf: &[u8], offset: u64) -> io::Result<usize>;
}

impl<R: ReadAt + ?Sized> ReadAt for &R {
    fn read_at(&self, buf: &mut [u8], offset: u64) -> io::Result<usize> {
        (**self).read_at(buf, offset)
    }
}

impl<R: ReadAt + ?Sized> ReadAt for &mut R {
    fn read_at(&self, buf: &mut [u8], offset: u64) -> io::Result<usize> {
        (**self).read_at(buf, offset)
    }
}

impl<W: WriteAt + ?Sized> WriteAt for &mut W {
    fn write_at(&mut self, buf: &[u8], offset: u64) -> io::Result<usize> {
        (**self).write_at(buf, offset)
    }
}
