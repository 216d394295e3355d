//! Native integer width.

/// Width of the platform's native integer (`usize`).
///
/// Sizes are computed in `u64` regardless of platform; the word size only
/// bounds which results are representable as a buffer length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordSize {
    /// 32-bit `usize`.
    Bits32,
    /// 64-bit `usize`.
    Bits64,
}

impl WordSize {
    /// The word size of the target this crate was compiled for.
    pub const NATIVE: WordSize = match usize::BITS {
        32 => WordSize::Bits32,
        64 => WordSize::Bits64,
        _ => panic!("unsupported pointer width"),
    };

    /// Number of bits in the word.
    pub const fn bits(self) -> u32 {
        match self {
            WordSize::Bits32 => 32,
            WordSize::Bits64 => 64,
        }
    }

    /// Largest power of two a `usize` of this width can hold.
    pub const fn max_power_of_two(self) -> u64 {
        1u64 << (self.bits() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_matches_usize() {
        assert_eq!(WordSize::NATIVE.bits(), usize::BITS);
    }

    #[test]
    fn test_max_power_of_two() {
        let top = WordSize::NATIVE.max_power_of_two();
        assert!(top.is_power_of_two());
        assert_eq!(top, usize::MAX as u64 / 2 + 1);
        assert_eq!(WordSize::Bits32.max_power_of_two(), 1 << 31);
        assert_eq!(WordSize::Bits64.max_power_of_two(), 1 << 63);
    }
}
