//! The scratch pool: one shared buffer, borrowed without waiting.
//!
//! Every operation first tries to take the shared buffer. If nobody holds
//! it, the buffer is grown to the next power of two when too small, sliced
//! to exactly the requested length, used, and released. If another call
//! holds it, the operation does not wait: reads allocate a private buffer of
//! exactly the requested size, writes hand the text's bytes to the sink
//! directly. Contention is expected to be rare, so the fallback cost is
//! paid rarely while no caller ever blocks on another.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use scratchio::Scratch;
//!
//! let scratch = Scratch::default();
//!
//! let mut sink: Vec<u8> = Vec::new();
//! let written = scratch.write(&mut sink, "日本語")?;
//! assert_eq!(written, 9);
//!
//! let (n, text) = scratch.read(&mut Cursor::new(sink), written)?;
//! assert_eq!((n, text.as_str()), (9, "日本語"));
//! # Ok::<(), std::io::Error>(())
//! ```

use std::fmt;
use std::io::{self, Read, Write};
use std::sync::LazyLock;

use bytes::Bytes;
use parking_lot::{Mutex, MutexGuard};
use tracing::{Level, event};

use crate::config::ScratchConfig;
use crate::error::ScratchError;
use crate::positioned::{ReadAt, WriteAt};
use crate::sizing::grown_capacity;

use super::stats::{ScratchStats, ScratchStatsSnapshot};

static GLOBAL: LazyLock<Scratch> = LazyLock::new(Scratch::default);

/// A reusable scratch buffer shared by concurrent text reads and writes.
///
/// `Scratch` is `Send + Sync`; share it by reference or behind an `Arc`.
/// It never blocks: a call that finds the shared buffer busy takes a
/// private path and leaves the shared buffer alone.
///
/// Read and write results are passed through from the endpoint unchanged.
/// A short read is not an error; the returned text holds exactly the bytes
/// the endpoint produced. Bytes are decoded as UTF-8 lossily, so invalid
/// sequences (including a multi-byte character split by a short read) come
/// back as U+FFFD rather than as an error. Use [`Scratch::read_bytes`] to
/// get the raw bytes.
pub struct Scratch {
    shared: Mutex<Vec<u8>>,
    config: ScratchConfig,
    stats: ScratchStats,
}

impl Scratch {
    /// Creates a pool with the given configuration.
    ///
    /// The shared buffer is allocated up front at
    /// [`ScratchConfig::initial_capacity`] bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ScratchError::InvalidConfig`] if `config` does not validate.
    ///
    /// # Example
    ///
    /// ```
    /// use scratchio::{Scratch, ScratchConfig};
    ///
    /// let scratch = Scratch::new(ScratchConfig::default().with_initial_capacity(4096))?;
    /// assert_eq!(scratch.capacity(), Some(4096));
    /// # Ok::<(), scratchio::ScratchError>(())
    /// ```
    pub fn new(config: ScratchConfig) -> Result<Self, ScratchError> {
        config.validate()?;
        Ok(Self::with_validated(config))
    }

    fn with_validated(config: ScratchConfig) -> Self {
        Self {
            shared: Mutex::new(vec![0u8; config.initial_capacity()]),
            config,
            stats: ScratchStats::default(),
        }
    }

    /// Returns the process-wide pool used by the crate-level functions.
    ///
    /// Created with the default configuration on first use and kept for the
    /// life of the process.
    pub fn global() -> &'static Scratch {
        &GLOBAL
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ScratchConfig {
        &self.config
    }

    /// Returns the shared buffer's current capacity, or `None` if a call is
    /// using it right now.
    pub fn capacity(&self) -> Option<usize> {
        self.shared.try_lock().map(|shared| shared.len())
    }

    /// Returns a snapshot of the pool's counters.
    pub fn stats(&self) -> ScratchStatsSnapshot {
        self.stats.snapshot()
    }

    /// Reads up to `n` bytes from `source` and returns them as text.
    ///
    /// Makes exactly one [`Read::read`] call. Returns the count the source
    /// reported and the text built from exactly that many bytes; errors
    /// come back as the source produced them.
    ///
    /// # Example
    ///
    /// ```
    /// use std::io::Cursor;
    /// use scratchio::Scratch;
    ///
    /// let scratch = Scratch::default();
    /// let mut source = Cursor::new("abc 123");
    ///
    /// // Asking for more than is there is fine
    /// let (n, text) = scratch.read(&mut source, 100)?;
    /// assert_eq!((n, text.as_str()), (7, "abc 123"));
    ///
    /// // So is asking at end of stream
    /// let (n, text) = scratch.read(&mut source, 100)?;
    /// assert_eq!((n, text.as_str()), (0, ""));
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub fn read<R: Read + ?Sized>(&self, source: &mut R, n: usize) -> io::Result<(usize, String)> {
        self.with_read_buffer(n, |buf| {
            let got = source.read(buf)?;
            Ok((got, decode(&buf[..got])))
        })
    }

    /// Reads up to `n` bytes from `source` starting at `offset` and returns
    /// them as text.
    ///
    /// Same contract as [`Scratch::read`], with one [`ReadAt::read_at`]
    /// call in place of [`Read::read`].
    ///
    /// # Example
    ///
    /// ```
    /// use scratchio::Scratch;
    ///
    /// let scratch = Scratch::default();
    /// let source = b"skip:keep".to_vec();
    ///
    /// let (n, text) = scratch.read_at(&source, 4, 5)?;
    /// assert_eq!((n, text.as_str()), (4, "keep"));
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub fn read_at<R: ReadAt + ?Sized>(
        &self,
        source: &R,
        n: usize,
        offset: u64,
    ) -> io::Result<(usize, String)> {
        self.with_read_buffer(n, |buf| {
            let got = source.read_at(buf, offset)?;
            Ok((got, decode(&buf[..got])))
        })
    }

    /// Reads up to `n` bytes from `source` and returns them undecoded.
    ///
    /// Same contract as [`Scratch::read`]; the count is the returned length.
    pub fn read_bytes<R: Read + ?Sized>(&self, source: &mut R, n: usize) -> io::Result<Bytes> {
        self.with_read_buffer(n, |buf| {
            let got = source.read(buf)?;
            Ok(Bytes::copy_from_slice(&buf[..got]))
        })
    }

    /// Reads up to `n` bytes from `source` at `offset` and returns them
    /// undecoded.
    ///
    /// Same contract as [`Scratch::read_at`]; the count is the returned
    /// length.
    pub fn read_bytes_at<R: ReadAt + ?Sized>(
        &self,
        source: &R,
        n: usize,
        offset: u64,
    ) -> io::Result<Bytes> {
        self.with_read_buffer(n, |buf| {
            let got = source.read_at(buf, offset)?;
            Ok(Bytes::copy_from_slice(&buf[..got]))
        })
    }

    /// Writes the bytes of `text` to `sink`.
    ///
    /// Makes exactly one [`Write::write`] call and returns its result
    /// unchanged, short counts included.
    ///
    /// # Example
    ///
    /// ```
    /// use scratchio::Scratch;
    ///
    /// let scratch = Scratch::default();
    /// let mut sink: Vec<u8> = Vec::new();
    ///
    /// assert_eq!(scratch.write(&mut sink, "abc 123")?, 7);
    /// assert_eq!(sink, b"abc 123");
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub fn write<W: Write + ?Sized>(&self, sink: &mut W, text: &str) -> io::Result<usize> {
        let bytes = text.as_bytes();
        match self.acquire(bytes.len()) {
            Some(mut shared) => {
                let buf = self.fit(&mut shared, bytes.len());
                buf.copy_from_slice(bytes);
                sink.write(buf)
            }
            None => sink.write(bytes),
        }
    }

    /// Writes the bytes of `text` to `sink` starting at `offset`.
    ///
    /// Same contract as [`Scratch::write`], with one [`WriteAt::write_at`]
    /// call in place of [`Write::write`].
    ///
    /// # Example
    ///
    /// ```
    /// use scratchio::Scratch;
    ///
    /// let scratch = Scratch::default();
    /// let mut sink = b"hello world".to_vec();
    ///
    /// scratch.write_at(&mut sink, "there", 6)?;
    /// assert_eq!(sink, b"hello there");
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub fn write_at<W: WriteAt + ?Sized>(
        &self,
        sink: &mut W,
        text: &str,
        offset: u64,
    ) -> io::Result<usize> {
        let bytes = text.as_bytes();
        match self.acquire(bytes.len()) {
            Some(mut shared) => {
                let buf = self.fit(&mut shared, bytes.len());
                buf.copy_from_slice(bytes);
                sink.write_at(buf, offset)
            }
            None => sink.write_at(bytes, offset),
        }
    }

    /// Runs `op` on an `n`-byte buffer: the shared one if it can be taken
    /// now, otherwise a private one sized exactly to `n`.
    ///
    /// The guard, if any, is released when this returns, whatever `op`
    /// returned.
    fn with_read_buffer<T>(&self, n: usize, op: impl FnOnce(&mut [u8]) -> T) -> T {
        match self.acquire(n) {
            Some(mut shared) => op(self.fit(&mut shared, n)),
            None => {
                let mut private = vec![0u8; n];
                op(&mut private[..])
            }
        }
    }

    /// Takes the shared buffer for a request of `n` bytes, if it is free
    /// and `n` is within the retain limit.
    fn acquire(&self, n: usize) -> Option<MutexGuard<'_, Vec<u8>>> {
        if !self.config.admits(n) {
            self.stats.record_bypass();
            self.stats.record_private();
            event!(
                Level::TRACE,
                message = "scratch bypass",
                requested = n,
                limit = ?self.config.retain_limit()
            );
            return None;
        }

        match self.shared.try_lock() {
            Some(shared) => {
                self.stats.record_shared();
                Some(shared)
            }
            None => {
                self.stats.record_private();
                event!(Level::TRACE, message = "scratch busy", requested = n);
                None
            }
        }
    }

    /// Grows the held buffer if it is shorter than `n` and returns its
    /// first `n` bytes.
    fn fit<'a>(&self, shared: &'a mut MutexGuard<'_, Vec<u8>>, n: usize) -> &'a mut [u8] {
        if shared.len() < n {
            let to = grown_capacity(n);
            event!(
                Level::DEBUG,
                message = "scratch grow",
                from = shared.len(),
                to
            );
            **shared = vec![0u8; to];
            self.stats.record_grow();
        }
        &mut shared[..n]
    }
}

impl Default for Scratch {
    fn default() -> Self {
        Self::with_validated(ScratchConfig::default())
    }
}

impl fmt::Debug for Scratch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scratch")
            .field("config", &self.config)
            .field("capacity", &self.capacity())
            .field("stats", &self.stats())
            .finish()
    }
}

/// Builds text from raw bytes without failing.
fn decode(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
