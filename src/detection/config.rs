// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Detection configuration

use crate::geometry::Tolerances;
use anyhow::{Context, Result};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file looked up by [`DetectionConfig::load`]
pub const CONFIG_FILE: &str = "pocketscan.toml";

/// Coordinate axis along which a ray set travels (always the positive direction)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RayAxis {
    X,
    Y,
    Z,
}

impl RayAxis {
    /// Coordinate index: 0 for x, 1 for y, 2 for z
    pub fn index(self) -> usize {
        match self {
            RayAxis::X => 0,
            RayAxis::Y => 1,
            RayAxis::Z => 2,
        }
    }

    pub fn direction(self) -> Vector3<f64> {
        match self {
            RayAxis::X => Vector3::x(),
            RayAxis::Y => Vector3::y(),
            RayAxis::Z => Vector3::z(),
        }
    }
}

/// How far the segment adjacency closure runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClosureMode {
    /// One in-place sweep in segment index order
    #[default]
    SingleSweep,
    /// Repeat the sweep until no segment changes
    FixedPoint,
}

/// Pocket detection configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Rays with fewer hits than this are ignored
    pub min_hits: usize,
    /// Ray sets to cast, in order
    pub axes: Vec<RayAxis>,
    /// Extra distance beyond the model radius for ray origins
    pub origin_padding: f64,
    /// Cast rays on the rayon thread pool
    pub parallel: bool,
    /// Adjacency closure behavior
    pub closure: ClosureMode,
    /// Numerical tolerances for filtering and intersection
    pub tolerances: Tolerances,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            min_hits: 3,
            axes: vec![RayAxis::X, RayAxis::Z],
            origin_padding: 1e-3,
            parallel: true,
            closure: ClosureMode::SingleSweep,
            tolerances: Tolerances::default(),
        }
    }
}

impl DetectionConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: DetectionConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        Ok(config)
    }

    /// Load `pocketscan.toml` from the working directory if present, then
    /// apply environment variable overrides
    pub fn load() -> Result<Self> {
        let mut config = if PathBuf::from(CONFIG_FILE).exists() {
            Self::from_file(CONFIG_FILE)?
        } else {
            Self::default()
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// `POCKETSCAN_PARALLEL` and `POCKETSCAN_CONTAINMENT_EPSILON`; values
    /// that do not parse are ignored
    pub fn apply_env_overrides(&mut self) {
        if let Ok(parallel) = std::env::var("POCKETSCAN_PARALLEL") {
            if let Ok(parallel) = parallel.parse() {
                self.parallel = parallel;
            }
        }

        if let Ok(epsilon) = std::env::var("POCKETSCAN_CONTAINMENT_EPSILON") {
            if let Ok(epsilon) = epsilon.parse() {
                self.tolerances.containment_epsilon = epsilon;
            }
        }
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }

    /// Set whether rays are cast in parallel.
    #[must_use]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the ray axes.
    #[must_use]
    pub fn axes(mut self, axes: impl Into<Vec<RayAxis>>) -> Self {
        self.axes = axes.into();
        self
    }

    /// Set the closure mode.
    #[must_use]
    pub fn closure(mut self, closure: ClosureMode) -> Self {
        self.closure = closure;
        self
    }

    /// Set the numerical tolerances.
    #[must_use]
    pub fn tolerances(mut self, tolerances: Tolerances) -> Self {
        self.tolerances = tolerances;
        self
    }
}
