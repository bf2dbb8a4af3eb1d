//! Controller construction errors

use std::fmt;

/// Error returned by [`OrientationControllerBuilder::build`](crate::OrientationControllerBuilder::build)
#[derive(Debug, Clone, PartialEq)]
pub enum BuildError {
    /// No camera node was supplied
    MissingSceneNode,
    /// A setting is out of range
    InvalidSetting(String),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::MissingSceneNode => {
                write!(f, "Orientation controller requires a scene node")
            }
            BuildError::InvalidSetting(msg) => write!(f, "Invalid controller setting: {}", msg),
        }
    }
}

impl std::error::Error for BuildError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_node_display() {
        let msg = format!("{}", BuildError::MissingSceneNode);
        assert!(msg.contains("scene node"));
    }

    #[test]
    fn test_invalid_setting_display() {
        let err = BuildError::InvalidSetting("noise_threshold must be finite".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("Invalid controller setting"));
        assert!(msg.contains("noise_threshold"));
    }
}
