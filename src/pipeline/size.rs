//! Validated target edge length.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::image::{DEFAULT_SIZE, MAX_SIZE, RGB_CHANNELS};

/// Edge length of the square output image.
///
/// Always in `1..=MAX_SIZE`, so every buffer sized from it can be allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetSize(NonZeroU32);

impl TargetSize {
    /// Build a size from a raw integer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSize`] if `value` is not positive or is
    /// larger than [`MAX_SIZE`].
    pub fn new(value: i64) -> Result<Self> {
        let invalid = |reason: &str| Error::InvalidSize {
            value: value.to_string(),
            reason: reason.to_string(),
        };

        if value <= 0 {
            return Err(invalid("must be a positive integer"));
        }

        let edge = u32::try_from(value)
            .ok()
            .filter(|edge| *edge <= MAX_SIZE)
            .ok_or_else(|| invalid(&format!("too large (maximum {MAX_SIZE})")))?;
        let edge = NonZeroU32::new(edge).ok_or_else(|| invalid("must be a positive integer"))?;

        Ok(Self(edge))
    }

    /// Edge length in pixels.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Number of bytes in the flattened RGB array, `size * size * 3`.
    #[must_use]
    pub fn array_len(self) -> usize {
        let edge = self.get() as usize;
        edge * edge * RGB_CHANNELS
    }
}

impl Default for TargetSize {
    fn default() -> Self {
        Self(NonZeroU32::new(DEFAULT_SIZE).unwrap_or(NonZeroU32::MIN))
    }
}

impl TryFrom<i64> for TargetSize {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl FromStr for TargetSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let value: i64 = s.trim().parse().map_err(|_| Error::InvalidSize {
            value: s.to_string(),
            reason: "not an integer".to_string(),
        })?;
        Self::new(value)
    }
}

impl fmt::Display for TargetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        assert_eq!(TargetSize::default().get(), 64);
        assert_eq!(TargetSize::default().array_len(), 12_288);
    }

    #[test]
    fn test_rejects_non_positive() {
        for value in [0, -5, i64::MIN] {
            assert!(matches!(
                TargetSize::new(value),
                Err(Error::InvalidSize { .. })
            ));
        }
    }

    #[test]
    fn test_upper_bound() {
        assert_eq!(TargetSize::new(4096).unwrap().array_len(), 4096 * 4096 * 3);

        for value in [4097, 100_000, i64::from(u32::MAX) + 1, i64::MAX] {
            match TargetSize::new(value) {
                Err(Error::InvalidSize { reason, .. }) => {
                    assert!(reason.starts_with("too large"), "{reason}");
                }
                other => panic!("{value} accepted: {other:?}"),
            }
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("1".parse::<TargetSize>().unwrap().array_len(), 3);
        assert_eq!(" 32 ".parse::<TargetSize>().unwrap().get(), 32);
        assert!(matches!(
            "abc".parse::<TargetSize>(),
            Err(Error::InvalidSize { .. })
        ));
        assert!(matches!(
            "2.5".parse::<TargetSize>(),
            Err(Error::InvalidSize { .. })
        ));
        assert!(matches!(
            "-5".parse::<TargetSize>(),
            Err(Error::InvalidSize { .. })
        ));
    }
}
