//! Axis locks and device orientation

use serde::{Serialize, Deserialize};

/// Which look axes an input source may move
///
/// Masks are tracked separately for sensor-driven and drag-driven input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisMask {
    /// Neither axis may move
    None,
    /// Only horizontal (yaw) movement
    Horizontal,
    /// Only vertical (pitch) movement
    Vertical,
    /// Free look
    #[default]
    Both,
}

impl AxisMask {
    /// Build a mask from per-axis permissions
    pub fn from_axes(horizontal: bool, vertical: bool) -> Self {
        match (horizontal, vertical) {
            (true, true) => AxisMask::Both,
            (true, false) => AxisMask::Horizontal,
            (false, true) => AxisMask::Vertical,
            (false, false) => AxisMask::None,
        }
    }

    /// Whether the horizontal component may be nonzero
    #[inline]
    pub fn allows_horizontal(self) -> bool {
        matches!(self, AxisMask::Horizontal | AxisMask::Both)
    }

    /// Whether the vertical component may be nonzero
    #[inline]
    pub fn allows_vertical(self) -> bool {
        matches!(self, AxisMask::Vertical | AxisMask::Both)
    }
}

/// How the device is held relative to the displayed interface
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterfaceOrientation {
    #[default]
    Portrait,
    PortraitUpsideDown,
    LandscapeLeft,
    LandscapeRight,
}

impl InterfaceOrientation {
    #[inline]
    pub fn is_landscape(self) -> bool {
        matches!(self, InterfaceOrientation::LandscapeLeft | InterfaceOrientation::LandscapeRight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_permissions() {
        assert!(AxisMask::Both.allows_horizontal());
        assert!(AxisMask::Both.allows_vertical());
        assert!(AxisMask::Horizontal.allows_horizontal());
        assert!(!AxisMask::Horizontal.allows_vertical());
        assert!(!AxisMask::Vertical.allows_horizontal());
        assert!(AxisMask::Vertical.allows_vertical());
        assert!(!AxisMask::None.allows_horizontal());
        assert!(!AxisMask::None.allows_vertical());
    }

    #[test]
    fn test_from_axes_round_trips_permissions() {
        for mask in [AxisMask::None, AxisMask::Horizontal, AxisMask::Vertical, AxisMask::Both] {
            assert_eq!(AxisMask::from_axes(mask.allows_horizontal(), mask.allows_vertical()), mask);
        }
    }

    #[test]
    fn test_default_mask_is_free_look() {
        assert_eq!(AxisMask::default(), AxisMask::Both);
    }

    #[test]
    fn test_landscape_detection() {
        assert!(InterfaceOrientation::LandscapeLeft.is_landscape());
        assert!(InterfaceOrientation::LandscapeRight.is_landscape());
        assert!(!InterfaceOrientation::Portrait.is_landscape());
        assert!(!InterfaceOrientation::PortraitUpsideDown.is_landscape());
    }
}
