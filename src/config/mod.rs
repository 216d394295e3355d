//! Configuration for a scratch pool.
//!
//! - [`ScratchConfig`] - Initial shared capacity and retention bound
//!
//! # Example
//!
//! ```
//! use scratchio::ScratchConfig;
//!
//! // Start larger, and never keep more than 1 MiB around
//! let config = ScratchConfig::new(64 * 1024)?.with_retain_limit(Some(1024 * 1024));
//! config.validate()?;
//!
//! # Ok::<(), scratchio::ScratchError>(())
//! ```

use crate::error::ScratchError;

/// Default capacity of the shared buffer when a pool is created (1 KiB).
pub const DEFAULT_INITIAL_CAPACITY: usize = 1024;

/// Configuration for a [`Scratch`](crate::Scratch) pool.
///
/// - `initial_capacity` - Bytes allocated for the shared buffer up front.
///   Must be zero or a power of two, so later growth stays on the
///   power-of-two ladder.
/// - `retain_limit` - Largest request allowed to grow the shared buffer.
///   Larger requests always use a private, call-local buffer. `None`
///   (the default) lets the shared buffer grow without bound.
///
/// # Example
///
/// ```
/// use scratchio::ScratchConfig;
///
/// let config = ScratchConfig::default();
/// assert_eq!(config.initial_capacity(), 1024);
/// assert_eq!(config.retain_limit(), None);
///
/// let config = ScratchConfig::default()
///     .with_initial_capacity(4096)
///     .with_retain_limit(Some(65536));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScratchConfig {
    /// Initial shared buffer capacity in bytes.
    initial_capacity: usize,

    /// Largest request that may grow the shared buffer.
    retain_limit: Option<usize>,
}

impl ScratchConfig {
    /// Creates a new configuration with the given initial capacity.
    ///
    /// # Errors
    ///
    /// Returns [`ScratchError::InvalidConfig`] if `initial_capacity` is
    /// neither zero nor a power of two.
    ///
    /// # Example
    ///
    /// ```
    /// use scratchio::ScratchConfig;
    ///
    /// assert!(ScratchConfig::new(4096).is_ok());
    /// assert!(ScratchConfig::new(0).is_ok());
    /// assert!(ScratchConfig::new(1000).is_err());
    /// ```
    pub fn new(initial_capacity: usize) -> Result<Self, ScratchError> {
        let config = Self {
            initial_capacity,
            retain_limit: None,
        };
        config.validate()?;
        Ok(config)
    }

    /// Sets the initial shared capacity.
    ///
    /// Note: This does not validate the configuration. Use
    /// [`ScratchConfig::validate`] to check it.
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Sets the retain limit.
    ///
    /// Note: This does not validate the configuration. Use
    /// [`ScratchConfig::validate`] to check it.
    pub fn with_retain_limit(mut self, limit: Option<usize>) -> Self {
        self.retain_limit = limit;
        self
    }

    /// Returns the initial shared capacity.
    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    /// Returns the retain limit, if any.
    pub fn retain_limit(&self) -> Option<usize> {
        self.retain_limit
    }

    /// Returns whether a request of `n` bytes may use the shared buffer.
    pub(crate) fn admits(&self, n: usize) -> bool {
        self.retain_limit.is_none_or(|limit| n <= limit)
    }

    /// Validates the current configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use scratchio::ScratchConfig;
    ///
    /// let config = ScratchConfig::default().with_initial_capacity(3);
    /// assert!(config.validate().is_err());
    ///
    /// let config = ScratchConfig::default().with_retain_limit(Some(512));
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ScratchError> {
        if self.initial_capacity != 0 && !self.initial_capacity.is_power_of_two() {
            return Err(ScratchError::InvalidConfig {
                message: "initial_capacity must be zero or a power of 2",
            });
        }

        if let Some(limit) = self.retain_limit {
            if limit == 0 {
                return Err(ScratchError::InvalidConfig {
                    message: "retain_limit must be non-zero",
                });
            }
            if limit < self.initial_capacity {
                return Err(ScratchError::InvalidConfig {
                    message: "retain_limit cannot be less than initial_capacity",
                });
            }
        }

        Ok(())
    }
}

impl Default for ScratchConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            retain_limit: None,
        }
    }
}
