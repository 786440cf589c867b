//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`HC4D_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use hypercube_core::{PlaneAngles, SliderMapping, DEFAULT_SPEEDS};
use serde::{Serialize, Deserialize};
use std::path::Path;
use std::time::Duration;

/// Largest `w` a vertex of the unit tesseract reaches under rotation
const MAX_ROTATED_W: f32 = 1.5;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Auto-rotation and tick timing
    #[serde(default)]
    pub animation: AnimationConfig,
    /// 4D to 3D projection
    #[serde(default)]
    pub projection: ProjectionConfig,
    /// Keyboard slider controls
    #[serde(default)]
    pub controls: ControlsConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
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
    /// 3. Environment variables (`HC4D_*`)
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

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // HC4D_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("HC4D_").split("__"));

        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the viewer cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.projection.w_distance <= MAX_ROTATED_W {
            return Err(ConfigError::Invalid(format!(
                "projection.w_distance must be greater than {}, got {}",
                MAX_ROTATED_W, self.projection.w_distance
            )));
        }
        if self.animation.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "animation.tick_interval_ms must be at least 1".to_string(),
            ));
        }
        if self.controls.slider_scale <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "controls.slider_scale must be positive, got {}",
                self.controls.slider_scale
            )));
        }
        if self.camera.near <= 0.0 || self.camera.far <= self.camera.near {
            return Err(ConfigError::Invalid(format!(
                "camera clip planes must satisfy 0 < near < far, got near={} far={}",
                self.camera.near, self.camera.far
            )));
        }
        Ok(())
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title prefix
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "4D Cube Simulate in 3D Space".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Orbit camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Distance from the model center
    pub distance: f32,
    /// Starting azimuth in degrees
    pub azimuth: f32,
    /// Starting elevation in degrees
    pub elevation: f32,
    /// Field of view in degrees
    pub fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Radians of orbit per pixel dragged
    pub orbit_sensitivity: f32,
    /// Distance moved per scroll line
    pub zoom_sensitivity: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            distance: 6.0,
            azimuth: 45.0,
            elevation: 30.0,
            fov: 60.0,
            near: 0.1,
            far: 100.0,
            orbit_sensitivity: 0.005,
            zoom_sensitivity: 0.5,
        }
    }
}

/// Auto-rotation and tick timing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Milliseconds between ticks
    pub tick_interval_ms: u64,
    /// Most ticks run to catch up after a stall
    pub max_catch_up: u32,
    /// Radians per tick for XY, XZ, XW, YZ, YW, ZW
    pub speeds: [f32; 6],
    /// Start with auto-rotation enabled on every plane
    pub auto_on_start: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 30,
            max_catch_up: 4,
            speeds: DEFAULT_SPEEDS.0,
            auto_on_start: true,
        }
    }
}

impl AnimationConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn plane_speeds(&self) -> PlaneAngles {
        PlaneAngles(self.speeds)
    }
}

/// 4D to 3D projection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Distance of the 4D eye along the W axis
    pub w_distance: f32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            w_distance: hypercube_math::DEFAULT_W_DISTANCE,
        }
    }
}

/// Keyboard slider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// Largest slider position
    pub slider_max: u32,
    /// Slider positions per radian
    pub slider_scale: f32,
    /// Positions moved per arrow key press
    pub slider_step: u32,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            slider_max: 628,
            slider_scale: 100.0,
            slider_step: 5,
        }
    }
}

impl ControlsConfig {
    pub fn mapping(&self) -> SliderMapping {
        SliderMapping {
            max_position: self.slider_max,
            scale: self.slider_scale,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Edge color [r, g, b, a]
    pub edge_color: [f32; 4],
    /// How strongly edges are tinted by their position along W (0 = off)
    pub w_color_strength: f32,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [0.0, 0.0, 0.0, 1.0],
            edge_color: [1.0, 1.0, 0.0, 1.0],
            w_color_strength: 0.0,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub enum ConfigError {
    /// A source could not be read or parsed
    Load(figment::Error),
    /// Values parsed but cannot be used
    Invalid(String),
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError::Load(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Load(e) => write!(f, "Configuration error: {}", e),
            ConfigError::Invalid(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Load(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}
