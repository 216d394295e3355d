//! Growth policy for the shared scratch buffer.
//!
//! - [`least_power_of_two`] - Smallest power of two not below a size
//! - [`WordSize`] - Native integer width, fixed at compile time
//!
//! The shared buffer is always reallocated to a power of two so that a run
//! of slowly increasing requests triggers only a logarithmic number of
//! reallocations.

mod pow2;
mod word;

pub use pow2::least_power_of_two;
pub use word::WordSize;

/// Returns the capacity the shared buffer takes when it must hold `n` bytes.
///
/// This is [`least_power_of_two`] of `n`, except when no power of two that
/// large fits in a `usize`; then it is `n` itself.
pub(crate) fn grown_capacity(n: usize) -> usize {
    if n as u64 > WordSize::NATIVE.max_power_of_two() {
        return n;
    }
    usize::try_from(least_power_of_two(n as u64)).unwrap_or(n)
}
