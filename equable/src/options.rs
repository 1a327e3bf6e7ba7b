//! Ready-made named parameters for [`EqualsWith`](crate::EqualsWith).

use bitflags::bitflags;

bitflags! {
    /// Mode switches for parameterized comparisons.
    pub struct CompareMode: u32 {
        /// Two NaN values compare equal to each other.
        const NANS_EQUAL = 0b01;
        /// `-0.0` and `+0.0` compare equal even under a zero tolerance.
        const SIGNED_ZEROS_EQUAL = 0b10;
    }
}

/// Named parameters for approximate or mode-switched comparisons.
///
/// [`EqualsWith`](crate::EqualsWith) is generic over any parameter type;
/// this one covers the common numeric cases. The default is an exact
/// comparison with no switches set.
///
/// ```
/// use equable::options::{CompareMode, EqualOptions};
///
/// let opts = EqualOptions::new()
///     .with_atol(1e-9)
///     .with_mode(CompareMode::NANS_EQUAL);
/// assert!(opts.mode.contains(CompareMode::NANS_EQUAL));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct EqualOptions {
    /// Absolute tolerance within which two values compare equal.
    pub atol: f64,
    /// Mode switches.
    pub mode: CompareMode,
}

impl EqualOptions {
    /// Exact comparison: zero tolerance, no switches.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            atol: 0.0,
            mode: CompareMode::empty(),
        }
    }

    /// Sets the absolute tolerance.
    #[must_use]
    pub const fn with_atol(mut self, atol: f64) -> Self {
        self.atol = atol;
        self
    }

    /// Sets the mode switches.
    #[must_use]
    pub const fn with_mode(mut self, mode: CompareMode) -> Self {
        self.mode = mode;
        self
    }
}

impl Default for EqualOptions {
    fn default() -> Self {
        Self::new()
    }
}
