//! Configuration types for loading pendulum scenes from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scene. A scenario consists of:
//!
//! - [`PhysicsConfig`]    – gravity, shared pendulum length, initial speed
//! - [`BodyConfig`]       – mass of each of the two bobs
//! - [`ParametersConfig`] – detection tolerance, sub-step, cooldown, playback speed
//! - [`RunConfig`]        – how long and at what frame rate the headless host plays
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! physics:
//!   g: 9.8                  # gravitational acceleration
//!   length: 3.0             # pendulum length (both bobs)
//!   initial_speed: 1.0      # tangential speed of body 1 arriving at the bottom
//!
//! bodies:
//!   - m: 2.0
//!   - m: 1.0
//!
//! parameters:               # optional, every field has a default
//!   eps: 0.02               # proximity tolerance (rad)
//!   h0: 0.004166666666666667  # internal sub-step (1/240)
//!   cooldown: 0.08          # collision debounce
//!   speed: 1.0              # simulated time per wall-clock second
//!
//! run:                      # optional
//!   periods: 2.0            # play this many small-angle periods
//!   fps: 60.0               # host frame rate
//! ```
//!
//! The cooldown is a debounce, not derived from `h0`: too small and one
//! contact can fire twice, too large and genuinely separate close hits merge.

use serde::Deserialize;

use crate::error::SimError;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PhysicsConfig {
    pub g: f64,             // gravitational acceleration
    pub length: f64,        // pendulum length shared by both bodies
    pub initial_speed: f64, // tangential speed of body 1 at t = 0, body 2 at rest
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BodyConfig {
    pub m: f64, // mass of the bob
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ParametersConfig {
    pub eps: f64,
    pub h0: f64,
    pub cooldown: f64,
    pub speed: f64,
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            eps: 2e-2,
            h0: 1.0 / 240.0,
            cooldown: 0.08,
            speed: 1.0,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RunConfig {
    pub periods: f64, // duration in units of the small-angle period
    pub fps: f64,     // frames per wall-clock second
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            periods: 2.0,
            fps: 60.0,
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    pub physics: PhysicsConfig,
    pub bodies: Vec<BodyConfig>, // exactly two: body1, body2
    #[serde(default)]
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub run: RunConfig,
}

impl Default for ScenarioConfig {
    /// Heavy/light pair `m1 = 2m, m2 = m` that returns to its start after two hits
    fn default() -> Self {
        Self {
            physics: PhysicsConfig {
                g: 9.8,
                length: 3.0,
                initial_speed: 1.0,
            },
            bodies: vec![BodyConfig { m: 2.0 }, BodyConfig { m: 1.0 }],
            parameters: ParametersConfig::default(),
            run: RunConfig::default(),
        }
    }
}

impl ScenarioConfig {
    pub fn from_yaml(text: &str) -> Result<Self, SimError> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Check the preconditions the physics core relies on
    pub fn validate(&self) -> Result<(), SimError> {
        if self.bodies.len() != 2 {
            return Err(invalid(format!("expected 2 bodies, got {}", self.bodies.len())));
        }
        for (i, b) in self.bodies.iter().enumerate() {
            positive(&format!("bodies[{i}].m"), b.m)?;
        }

        positive("physics.g", self.physics.g)?;
        positive("physics.length", self.physics.length)?;
        finite("physics.initial_speed", self.physics.initial_speed)?;

        positive("parameters.eps", self.parameters.eps)?;
        positive("parameters.h0", self.parameters.h0)?;
        positive("parameters.speed", self.parameters.speed)?;
        finite("parameters.cooldown", self.parameters.cooldown)?;
        if self.parameters.cooldown < 0.0 {
            return Err(invalid(format!(
                "parameters.cooldown must be non-negative, got {}",
                self.parameters.cooldown
            )));
        }

        positive("run.fps", self.run.fps)?;
        finite("run.periods", self.run.periods)?;
        if self.run.periods < 0.0 {
            return Err(invalid(format!("run.periods must be non-negative, got {}", self.run.periods)));
        }

        Ok(())
    }
}

fn invalid(msg: String) -> SimError {
    SimError::InvalidConfig(msg)
}

fn finite(name: &str, value: f64) -> Result<(), SimError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(format!("{name} must be finite, got {value}")))
    }
}

fn positive(name: &str, value: f64) -> Result<(), SimError> {
    finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(invalid(format!("{name} must be positive, got {value}")))
    }
}
