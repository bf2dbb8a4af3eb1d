//! Orientation value types

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

/// Look offset from the reference origin, in radians
///
/// `x` is the horizontal offset (unbounded, periodic with period 2π) and
/// `y` the vertical offset, kept within [-π/2, π/2] by every calculation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new Position
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position
    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Rotation angles derived from this position
    ///
    /// Pitch follows the vertical offset, yaw the horizontal one. Roll is
    /// always zero: the camera never banks.
    #[inline]
    pub fn to_angles(self) -> RotationAngles {
        RotationAngles::new(self.y, self.x, 0.0)
    }
}

/// Euler angles for the camera node (radians)
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct RotationAngles {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

impl RotationAngles {
    pub const ZERO: Self = Self { pitch: 0.0, yaw: 0.0, roll: 0.0 };

    /// Create a new set of angles
    #[inline]
    pub const fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch, yaw, roll }
    }

    /// As `[pitch, yaw, roll]`, the layout scene graphs expect for euler angles
    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.pitch, self.yaw, self.roll]
    }
}

/// Angular rate around the device axes (rad/s)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RotationRate {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl RotationRate {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Zero every component whose magnitude is below `threshold`
    ///
    /// Some gyroscopes report a small constant drift on one or more axes,
    /// which would otherwise slowly spin the camera.
    #[inline]
    pub fn filter_noise(self, threshold: f32) -> Self {
        let filter = |v: f32| if v.abs() < threshold { 0.0 } else { v };
        Self::new(filter(self.x), filter(self.y), filter(self.z))
    }
}

/// A point in viewport coordinates (pixels/points)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl ScreenPoint {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Sub for ScreenPoint {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

/// Size of the viewport the video is rendered into
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

impl ViewportSize {
    pub const ZERO: Self = Self { width: 0.0, height: 0.0 };

    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width over height, or `None` when the height is not positive
    #[inline]
    pub fn aspect_ratio(self) -> Option<f32> {
        if self.height > 0.0 {
            Some(self.width / self.height)
        } else {
            None
        }
    }
}
