//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`AGENT2D_SECTION__KEY`)

use agent2d_core::{KeyBindings, TankSettings};
use agent2d_math::{Point2, Vector2};
use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Tank configuration
    #[serde(default)]
    pub tank: TankConfig,
    /// Headless run configuration
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
    /// 3. Environment variables (`AGENT2D_*`)
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

        // AGENT2D_TANK__SPEED=90 -> tank.speed = 90
        figment = figment.merge(Env::prefixed("AGENT2D_").split("__"));

        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let step = self.simulation.timestep;
        if !(step.is_finite() && step > 0.0) {
            return Err(ConfigError::invalid(format!(
                "simulation.timestep must be a positive number, got {}",
                step
            )));
        }
        if self.tank.speed.is_nan() || self.tank.turn_rate.is_nan() {
            return Err(ConfigError::invalid("tank speed and turn_rate must be numbers"));
        }
        for window in &self.simulation.script {
            if window.from_tick > window.to_tick {
                return Err(ConfigError::invalid(format!(
                    "script window {}..{} ends before it starts",
                    window.from_tick, window.to_tick
                )));
            }
        }
        Ok(())
    }
}

/// Tank configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TankConfig {
    /// Starting position [x, y]
    pub start_position: [f32; 2],
    /// Movement speed (units per second)
    pub speed: f32,
    /// Turret rotation speed (radians per second)
    pub turn_rate: f32,
    /// Body [width, height]
    pub body_size: [f32; 2],
    /// Turret barrel length
    pub turret_length: f32,
    /// Key bindings
    pub keys: KeyBindings,
}

impl Default for TankConfig {
    fn default() -> Self {
        let settings = TankSettings::default();
        Self {
            start_position: [0.0, 0.0],
            speed: settings.speed,
            turn_rate: settings.turn_rate,
            body_size: settings.body_size.into(),
            turret_length: settings.turret_length,
            keys: settings.keys,
        }
    }
}

impl TankConfig {
    /// Convert to the entity's settings
    pub fn to_settings(&self) -> TankSettings {
        TankSettings {
            speed: self.speed,
            turn_rate: self.turn_rate,
            body_size: Vector2::from(self.body_size),
            turret_length: self.turret_length,
            keys: self.keys.clone(),
        }
    }

    pub fn start_point(&self) -> Point2 {
        Point2::from(self.start_position)
    }
}

/// Keys held for a range of ticks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyWindow {
    /// First tick the keys are held
    pub from_tick: u32,
    /// Tick at which the keys are released (exclusive)
    pub to_tick: u32,
    /// Held keys, one character each
    pub keys: String,
}

impl KeyWindow {
    pub fn is_active(&self, tick: u32) -> bool {
        (self.from_tick..self.to_tick).contains(&tick)
    }
}

/// Headless run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of fixed steps to run
    pub ticks: u32,
    /// Seconds per step
    pub timestep: f32,
    /// Scripted key presses
    pub script: Vec<KeyWindow>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            ticks: 60,
            timestep: 1.0 / 60.0,
            script: Vec::new(),
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
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    fn invalid(message: impl Into<String>) -> Self {
        ConfigError {
            message: message.into(),
        }
    }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.tank.speed, 60.0);
        assert_eq!(config.simulation.ticks, 60);
        assert_eq!(config.debug.log_level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("turret_length"));
        assert!(toml.contains("timestep"));
        assert!(toml.contains("[tank.keys]"));
    }

    #[test]
    fn test_partial_sections_fill_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [tank]
            speed = 90.0

            [[simulation.script]]
            from_tick = 0
            to_tick = 30
            keys = "D"
            "#,
        )
        .unwrap();
        assert_eq!(config.tank.speed, 90.0);
        assert_eq!(config.tank.turret_length, TankSettings::default().turret_length);
        assert_eq!(config.tank.keys, KeyBindings::default());
        assert_eq!(config.simulation.ticks, 60);
        assert_eq!(config.simulation.script.len(), 1);
    }

    #[test]
    fn test_to_settings() {
        let mut config = TankConfig::default();
        config.start_position = [5.0, -3.0];
        config.body_size = [10.0, 4.0];
        config.keys.up = 'I';
        let settings = config.to_settings();
        assert_eq!(settings.body_size, Vector2::new(10.0, 4.0));
        assert_eq!(settings.keys.up, 'I');
        assert_eq!(config.start_point(), Point2::new(5.0, -3.0));
    }

    #[test]
    fn test_key_window_is_half_open() {
        let window = KeyWindow {
            from_tick: 2,
            to_tick: 4,
            keys: "W".to_string(),
        };
        assert!(!window.is_active(1));
        assert!(window.is_active(2));
        assert!(window.is_active(3));
        assert!(!window.is_active(4));
    }

    #[test]
    fn test_validate_rejects_bad_timestep() {
        let mut config = AppConfig::default();
        config.simulation.timestep = 0.0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("timestep"));

        config.simulation.timestep = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_reversed_window() {
        let mut config = AppConfig::default();
        config.simulation.script.push(KeyWindow {
            from_tick: 10,
            to_tick: 5,
            keys: "D".to_string(),
        });
        assert!(config.validate().is_err());
    }
}
