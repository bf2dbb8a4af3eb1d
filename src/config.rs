//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`R360_SECTION__KEY`)

use std::path::Path;
use std::time::Duration;

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};

use rust360_input::ControllerSettings;
use rust360_math::{AxisMask, InterfaceOrientation, Position, RotationRate, ViewportSize};
use rust360_motion::DEFAULT_UPDATE_INTERVAL;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Viewport configuration
    #[serde(default)]
    pub viewport: ViewportConfig,
    /// Motion sensor configuration
    #[serde(default)]
    pub motion: MotionConfig,
    /// Camera controller configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Scripted demo configuration
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`R360_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // R360_CAMERA__NOISE_THRESHOLD=0.2 -> camera.noise_threshold = 0.2
        figment = figment.merge(Env::prefixed("R360_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Viewport configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Viewport width in points
    pub width: f32,
    /// Viewport height in points
    pub height: f32,
    /// How the device is held
    pub orientation: InterfaceOrientation,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            orientation: InterfaceOrientation::LandscapeRight,
        }
    }
}

impl ViewportConfig {
    pub fn size(&self) -> ViewportSize {
        ViewportSize::new(self.width, self.height)
    }
}

/// Motion sensor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Sensor rate (Hz) used when nobody has requested one
    pub default_update_rate: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            default_update_rate: 60.0,
        }
    }
}

impl MotionConfig {
    /// Fallback sensor cadence; an invalid rate falls back to 60 Hz
    pub fn default_interval(&self) -> Duration {
        interval_from_rate(self.default_update_rate).unwrap_or_else(|| {
            log::warn!(
                "Invalid motion.default_update_rate {}; using {:?}",
                self.default_update_rate,
                DEFAULT_UPDATE_INTERVAL
            );
            DEFAULT_UPDATE_INTERVAL
        })
    }
}

/// Camera controller configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Requested gyroscope rate (Hz)
    pub update_rate: f32,
    /// Gyroscope dead zone (rad/s)
    pub noise_threshold: f32,
    /// Gyroscope travel (radians) that counts as the user moving the camera
    pub initial_movement_threshold: f32,
    /// Horizon reorientation animation length in seconds
    pub reorientation_duration: f32,
    /// Starting yaw in radians
    pub initial_yaw: f32,
    /// Starting pitch in radians
    pub initial_pitch: f32,
    /// Axes the gyroscope may move (none, horizontal, vertical, both)
    pub sensor_axes: AxisMask,
    /// Axes a drag may move (none, horizontal, vertical, both)
    pub drag_axes: AxisMask,
}

impl Default for CameraConfig {
    fn default() -> Self {
        let settings = ControllerSettings::default();
        Self {
            update_rate: 60.0,
            noise_threshold: settings.noise_threshold,
            initial_movement_threshold: settings.initial_movement_threshold,
            reorientation_duration: settings.reorientation_duration.as_secs_f32(),
            initial_yaw: settings.initial_position.x,
            initial_pitch: settings.initial_position.y,
            sensor_axes: settings.allowed_sensor_axes,
            drag_axes: settings.allowed_drag_axes,
        }
    }
}

impl CameraConfig {
    /// Convert to the controller's settings
    ///
    /// Out-of-range rates and durations become zero, which the controller
    /// builder rejects with a descriptive error.
    pub fn to_controller_settings(&self) -> ControllerSettings {
        ControllerSettings::default()
            .with_update_interval(interval_from_rate(self.update_rate).unwrap_or(Duration::ZERO))
            .with_noise_threshold(self.noise_threshold)
            .with_initial_movement_threshold(self.initial_movement_threshold)
            .with_reorientation_duration(
                Duration::try_from_secs_f32(self.reorientation_duration).unwrap_or(Duration::ZERO),
            )
            .with_initial_position(Position::new(self.initial_yaw, self.initial_pitch))
            .with_sensor_axes(self.sensor_axes)
            .with_drag_axes(self.drag_axes)
    }
}

/// Scripted demo configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of frames to run
    pub frames: u32,
    /// Frames per second
    pub frame_rate: f32,
    /// Gyroscope reading fed every frame [x, y, z] in rad/s
    pub gyro_rate: [f32; 3],
    /// Horizontal drag distance in points
    pub drag_distance: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            frames: 240,
            frame_rate: 60.0,
            gyro_rate: [0.6, 0.3, 0.0],
            drag_distance: 200.0,
        }
    }
}

impl SimulationConfig {
    pub fn gyro_rate(&self) -> RotationRate {
        RotationRate::new(self.gyro_rate[0], self.gyro_rate[1], self.gyro_rate[2])
    }

    /// Time per frame; an invalid frame rate falls back to 60 fps
    pub fn frame_interval(&self) -> Duration {
        interval_from_rate(self.frame_rate).unwrap_or(DEFAULT_UPDATE_INTERVAL)
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace); `RUST_LOG` takes precedence
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

fn interval_from_rate(hz: f32) -> Option<Duration> {
    if hz.is_finite() && hz > 0.0 {
        Duration::try_from_secs_f32(1.0 / hz).ok()
    } else {
        None
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
