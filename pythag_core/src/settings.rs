//! # Solver Settings
//!
//! Knobs that change how the solver judges "close enough" and how results
//! are presented. Settings are plain serde data, so they can come from a
//! TOML file, JSON, or be built in code.
//!
//! ## TOML Example
//!
//! ```toml
//! display_precision = 4
//!
//! [tolerance]
//! mode = "absolute"
//! value = 1e-10
//! ```
//!
//! Missing keys fall back to [`SolverSettings::default`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Default tolerance on the residual `a² + b² − c²`
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default number of decimals shown for results
pub const DEFAULT_DISPLAY_PRECISION: usize = 4;

/// Largest precision worth printing for an f64
pub const MAX_DISPLAY_PRECISION: usize = 15;

/// How the right-angle check compares the residual against zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value", rename_all = "snake_case")]
pub enum Tolerance {
    /// Right iff `|residual| < eps`
    Absolute(f64),
    /// Right iff `|residual| < eps * largest²`
    Relative(f64),
}

impl Tolerance {
    /// The raw epsilon regardless of mode
    pub fn epsilon(&self) -> f64 {
        match self {
            Tolerance::Absolute(eps) | Tolerance::Relative(eps) => *eps,
        }
    }

    /// Bound the residual must stay under, given the candidate hypotenuse.
    pub fn bound(&self, largest: f64) -> f64 {
        match self {
            Tolerance::Absolute(eps) => *eps,
            Tolerance::Relative(eps) => eps * largest * largest,
        }
    }

    /// Whether `residual` counts as zero for a triangle whose longest side is `largest`.
    pub fn accepts(&self, residual: f64, largest: f64) -> bool {
        residual.abs() < self.bound(largest)
    }

    /// Check that the epsilon is usable.
    pub fn validate(&self) -> CalcResult<()> {
        let eps = self.epsilon();
        if !eps.is_finite() || eps <= 0.0 {
            return Err(CalcError::config_error(
                "tolerance.value",
                format!("Tolerance must be a positive finite number, got {}", eps),
            ));
        }
        Ok(())
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance::Absolute(DEFAULT_TOLERANCE)
    }
}

/// Settings shared by the solver and its front-ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverSettings {
    /// Tolerance for the right-triangle check
    pub tolerance: Tolerance,

    /// Decimals used when presenting results (4 matches the classroom tables)
    pub display_precision: usize,
}

impl Default for SolverSettings {
    fn default() -> Self {
        SolverSettings {
            tolerance: Tolerance::default(),
            display_precision: DEFAULT_DISPLAY_PRECISION,
        }
    }
}

impl SolverSettings {
    /// Builder-style tolerance override
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Builder-style precision override
    pub fn with_display_precision(mut self, precision: usize) -> Self {
        self.display_precision = precision;
        self
    }

    /// Validate all settings values.
    pub fn validate(&self) -> CalcResult<()> {
        self.tolerance.validate()?;
        if self.display_precision > MAX_DISPLAY_PRECISION {
            return Err(CalcError::config_error(
                "display_precision",
                format!(
                    "Precision must be at most {}, got {}",
                    MAX_DISPLAY_PRECISION, self.display_precision
                ),
            ));
        }
        Ok(())
    }

    /// Parse and validate settings from TOML text.
    pub fn from_toml_str(text: &str) -> CalcResult<Self> {
        let settings: SolverSettings = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate settings from a TOML file.
    pub fn load(path: &Path) -> CalcResult<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
        let settings = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), ?settings, "loaded solver settings");
        Ok(settings)
    }
}
