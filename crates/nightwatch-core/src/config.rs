//! Configuration System
//!
//! Loads tuning parameters from tuning.toml for easy adjustment without recompiling.
//! Every section is optional; missing values fall back to the reference tuning.

use nightwatch_events::{AgentKind, LocationId, NIGHT_LENGTH_MINUTES};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use crate::components::world::RUNNER_ROUTE;
use crate::schedule::Cadence;

/// Default tuning file path
pub const DEFAULT_TUNING_PATH: &str = "tuning.toml";

/// Power is a percentage; a night never starts above this
pub const MAX_POWER: u32 = 100;

/// Top-level configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub night: NightConfig,
    pub cadence: CadenceConfig,
    pub power: PowerConfig,
    pub movement: MovementConfig,
    pub threat: ThreatConfig,
    /// Agent roster, spawned in order at every night start
    pub agents: Vec<AgentConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            night: NightConfig::default(),
            cadence: CadenceConfig::default(),
            power: PowerConfig::default(),
            movement: MovementConfig::default(),
            threat: ThreatConfig::default(),
            agents: crate::setup::default_roster(),
        }
    }
}

/// Night length
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NightConfig {
    pub length_minutes: u32,
    pub minutes_per_tick: u32,
}

impl Default for NightConfig {
    fn default() -> Self {
        Self {
            length_minutes: NIGHT_LENGTH_MINUTES,
            minutes_per_tick: 1,
        }
    }
}

/// Driver periods in real (or virtual) milliseconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CadenceConfig {
    pub minute_tick_ms: u64,
    pub power_tick_ms: u64,
    pub movement_tick_ms: u64,
    pub threat_tick_ms: u64,
}

impl Default for CadenceConfig {
    fn default() -> Self {
        Self {
            minute_tick_ms: 100,
            power_tick_ms: 1000,
            movement_tick_ms: 1000,
            threat_tick_ms: 1000,
        }
    }
}

impl CadenceConfig {
    pub fn period_ms(&self, cadence: Cadence) -> u64 {
        match cadence {
            Cadence::Minute => self.minute_tick_ms,
            Cadence::Power => self.power_tick_ms,
            Cadence::Movement => self.movement_tick_ms,
            Cadence::Threat => self.threat_tick_ms,
        }
    }

    pub fn period(&self, cadence: Cadence) -> Duration {
        Duration::from_millis(self.period_ms(cadence))
    }
}

/// Power budget and per-subsystem drain weights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerConfig {
    pub max_power: u32,
    pub base_usage: u32,
    pub camera_usage: u32,
    pub door_usage: u32,
    pub light_usage: u32,
}

impl Default for PowerConfig {
    fn default() -> Self {
        Self {
            max_power: 100,
            base_usage: 1,
            camera_usage: 1,
            door_usage: 2,
            light_usage: 1,
        }
    }
}

/// Agent movement tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// An agent may only move once this many ms have passed since its last move
    pub cooldown_ms: u64,
    /// Probability per unit of aggressiveness per night
    pub base_rate: f64,
    /// Probability added per elapsed minute
    pub time_rate: f64,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            cooldown_ms: 5000,
            base_rate: 0.001,
            time_rate: 0.0001,
        }
    }
}

/// Breach resolution tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThreatConfig {
    /// Chance per threat tick that an ongoing breach ends the night
    pub loss_probability: f64,
}

impl Default for ThreatConfig {
    fn default() -> Self {
        Self {
            loss_probability: 0.3,
        }
    }
}

/// One roster entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    pub name: String,
    pub kind: AgentKind,
    pub aggressiveness: f64,
    pub spawn: LocationId,
}

impl AgentConfig {
    pub fn new(
        name: impl Into<String>,
        kind: AgentKind,
        aggressiveness: f64,
        spawn: LocationId,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            aggressiveness,
            spawn,
        }
    }
}

impl Config {
    /// Load and validate configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from default path, or use defaults if not found
    pub fn load_or_default() -> Self {
        Self::load(DEFAULT_TUNING_PATH).unwrap_or_else(|e| {
            tracing::warn!("Could not load {}: {}. Using defaults.", DEFAULT_TUNING_PATH, e);
            Self::default()
        })
    }

    /// Renders this configuration as a TOML document
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Checks ranges the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.night.length_minutes == 0 {
            return Err(ConfigError::invalid("night.length_minutes", "must be positive"));
        }
        if self.night.minutes_per_tick == 0 {
            return Err(ConfigError::invalid("night.minutes_per_tick", "must be positive"));
        }
        for cadence in Cadence::ALL {
            if self.cadence.period_ms(cadence) == 0 {
                return Err(ConfigError::invalid(cadence.config_key(), "must be positive"));
            }
        }
        if self.power.max_power == 0 || self.power.max_power > MAX_POWER {
            return Err(ConfigError::invalid(
                "power.max_power",
                format!("must be between 1 and {} (got {})", MAX_POWER, self.power.max_power),
            ));
        }
        if self.movement.base_rate.is_nan() || self.movement.base_rate < 0.0 {
            return Err(ConfigError::invalid("movement.base_rate", "must not be negative"));
        }
        if self.movement.time_rate.is_nan() || self.movement.time_rate < 0.0 {
            return Err(ConfigError::invalid("movement.time_rate", "must not be negative"));
        }
        if !(0.0..=1.0).contains(&self.threat.loss_probability) {
            return Err(ConfigError::invalid(
                "threat.loss_probability",
                format!("must be between 0 and 1 (got {})", self.threat.loss_probability),
            ));
        }
        if self.agents.is_empty() {
            return Err(ConfigError::invalid("agents", "roster is empty"));
        }
        for agent in &self.agents {
            if !agent.aggressiveness.is_finite() || agent.aggressiveness <= 0.0 {
                return Err(ConfigError::InvalidAgent {
                    name: agent.name.clone(),
                    reason: format!("aggressiveness must be positive (got {})", agent.aggressiveness),
                });
            }
            if agent.kind == AgentKind::Runner && !RUNNER_ROUTE.contains(&agent.spawn) {
                return Err(ConfigError::InvalidAgent {
                    name: agent.name.clone(),
                    reason: format!("runner cannot spawn off its route at {}", agent.spawn),
                });
            }
        }
        Ok(())
    }
}

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{field} {reason}")]
    Invalid { field: &'static str, reason: String },
    #[error("agent '{name}': {reason}")]
    InvalidAgent { name: String, reason: String },
}

impl ConfigError {
    fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.night.length_minutes, 360);
        assert_eq!(config.cadence.minute_tick_ms, 100);
        assert_eq!(config.power.door_usage, 2);
        assert_eq!(config.agents.len(), 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config = Config::from_toml_str(
            r#"
            [threat]
            loss_probability = 0.5

            [cadence]
            minute_tick_ms = 50
            "#,
        )
        .unwrap();
        assert_eq!(config.threat.loss_probability, 0.5);
        assert_eq!(config.cadence.minute_tick_ms, 50);
        assert_eq!(config.cadence.power_tick_ms, 1000);
        assert_eq!(config.agents, crate::setup::default_roster());
    }

    #[test]
    fn test_custom_roster() {
        let config = Config::from_toml_str(
            r#"
            [[agents]]
            name = "Golden"
            kind = "roamer"
            aggressiveness = 4.5
            spawn = "backstage"
            "#,
        )
        .unwrap();
        assert_eq!(config.agents.len(), 1);
        assert_eq!(config.agents[0].spawn, LocationId::Backstage);
    }

    #[test]
    fn test_rejects_bad_probability() {
        let err = Config::from_toml_str("[threat]\nloss_probability = 1.5\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid { field: "threat.loss_probability", .. }
        ));
    }

    #[test]
    fn test_rejects_zero_cadence() {
        let err = Config::from_toml_str("[cadence]\npower_tick_ms = 0\n").unwrap_err();
        assert_eq!(err.to_string(), "cadence.power_tick_ms must be positive");
    }

    #[test]
    fn test_rejects_power_above_100() {
        let err = Config::from_toml_str("[power]\nmax_power = 500\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "power.max_power", .. }));
        assert!(Config::from_toml_str("[power]\nmax_power = 100\n").is_ok());
        assert!(Config::from_toml_str("[power]\nmax_power = 0\n").is_err());
    }

    #[test]
    fn test_rejects_nan_rates() {
        let mut config = Config::default();
        config.movement.time_rate = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.agents[0].aggressiveness = f64::NAN;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidAgent { .. })));
    }

    #[test]
    fn test_rejects_runner_off_route() {
        let mut config = Config::default();
        config.agents = vec![AgentConfig::new("Foxy", AgentKind::Runner, 3.0, LocationId::ShowStage)];
        assert!(matches!(config.validate(), Err(ConfigError::InvalidAgent { .. })));
    }

    #[test]
    fn test_rejects_unknown_location() {
        let result = Config::from_toml_str(
            r#"
            [[agents]]
            name = "Ghost"
            kind = "roamer"
            aggressiveness = 1.0
            spawn = "kitchen"
            "#,
        );
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = Config::default();
        let rendered = config.to_toml().unwrap();
        let parsed = Config::from_toml_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_load_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[movement]\ncooldown_ms = 2500").unwrap();
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.movement.cooldown_ms, 2500);
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load("does/not/exist.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
