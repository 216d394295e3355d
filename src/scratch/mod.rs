//! Scratch coordination for text I/O.
//!
//! - [`Scratch`] - One shared, growable buffer behind a try-lock
//! - [`ScratchStatsSnapshot`] - Counters describing how calls were served
//!
//! The process-wide pool behind the crate-level [`read`](crate::read) and
//! friends lives in `global`.

mod global;
mod pool;
mod stats;

pub use global::{read, read_at, write, write_at};
pub use pool::Scratch;
pub use stats::ScratchStatsSnapshot;
