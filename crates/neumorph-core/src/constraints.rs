//! Size limits passed down during measurement.

use crate::geometry::Size;
use serde::{Deserialize, Serialize};

/// Smallest and largest size a widget may take.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    /// Lower bound
    pub min: Size,
    /// Upper bound, possibly infinite
    pub max: Size,
}

impl Constraints {
    /// Only `size` fits.
    #[must_use]
    pub const fn tight(size: Size) -> Self {
        Self {
            min: size,
            max: size,
        }
    }

    /// Anything from zero up to `max` fits.
    #[must_use]
    pub const fn loose(max: Size) -> Self {
        Self {
            min: Size::ZERO,
            max,
        }
    }

    /// No upper bound.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self::loose(Size::new(f32::INFINITY, f32::INFINITY))
    }

    /// Clamp `size` into range, axis by axis.
    #[must_use]
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            size.width.clamp(self.min.width, self.max.width),
            size.height.clamp(self.min.height, self.max.height),
        )
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self::unbounded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tight_forces_size() {
        let c = Constraints::tight(Size::new(100.0, 50.0));
        assert_eq!(c.constrain(Size::new(10.0, 500.0)), Size::new(100.0, 50.0));
    }

    #[test]
    fn test_loose_caps_size() {
        let c = Constraints::loose(Size::new(100.0, 50.0));
        assert_eq!(c.constrain(Size::new(84.0, 40.0)), Size::new(84.0, 40.0));
        assert_eq!(c.constrain(Size::new(200.0, 80.0)), Size::new(100.0, 50.0));
    }

    #[test]
    fn test_default_is_unbounded() {
        let c = Constraints::default();
        assert_eq!(c, Constraints::unbounded());
        assert_eq!(c.constrain(Size::new(1.0e6, 1.0e6)), Size::new(1.0e6, 1.0e6));
    }
}
