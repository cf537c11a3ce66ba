// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seqjump-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seqjump and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Visual-severity bucket assigned to a call by repetition count.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum SeverityTier {
    Normal,
    Warning,
    Critical,
}

impl SeverityTier {
    /// Tier for a tally count. Critical is checked first so the stricter
    /// bucket wins even when the thresholds are inverted.
    pub fn for_count(count: usize, thresholds: &Thresholds) -> Self {
        if count >= thresholds.critical_min() {
            Self::Critical
        } else if count >= thresholds.warning_min() {
            Self::Warning
        } else {
            Self::Normal
        }
    }
}

/// Repetition thresholds supplied by the host configuration.
///
/// Construction is permissive: an out-of-contract pair still classifies
/// (with a degenerate tier ordering). The configuration layer is expected to
/// call [`Thresholds::validate`] or [`Thresholds::clamped`] before a render
/// pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Thresholds {
    #[serde(default = "default_warning_min")]
    warning_min: usize,
    #[serde(default = "default_critical_min")]
    critical_min: usize,
}

fn default_warning_min() -> usize {
    Thresholds::DEFAULT_WARNING_MIN
}

fn default_critical_min() -> usize {
    Thresholds::DEFAULT_CRITICAL_MIN
}

impl Thresholds {
    pub const DEFAULT_WARNING_MIN: usize = 3;
    pub const DEFAULT_CRITICAL_MIN: usize = 10;

    pub fn new(warning_min: usize, critical_min: usize) -> Self {
        Self { warning_min, critical_min }
    }

    pub fn warning_min(&self) -> usize {
        self.warning_min
    }

    pub fn critical_min(&self) -> usize {
        self.critical_min
    }

    /// Checks the configuration contract: both minimums positive and
    /// `warning_min <= critical_min`.
    pub fn validate(&self) -> Result<(), ThresholdsError> {
        if self.warning_min == 0 {
            return Err(ThresholdsError::ZeroWarningMin);
        }
        if self.critical_min == 0 {
            return Err(ThresholdsError::ZeroCriticalMin);
        }
        if self.warning_min > self.critical_min {
            return Err(ThresholdsError::Inverted {
                warning_min: self.warning_min,
                critical_min: self.critical_min,
            });
        }
        Ok(())
    }

    /// Repairs an out-of-contract pair: zero minimums are raised to 1, an
    /// inverted `critical_min` is raised to `warning_min`.
    pub fn clamped(self) -> Self {
        let warning_min = self.warning_min.max(1);
        let critical_min = self.critical_min.max(warning_min);
        Self { warning_min, critical_min }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            warning_min: Self::DEFAULT_WARNING_MIN,
            critical_min: Self::DEFAULT_CRITICAL_MIN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdsError {
    ZeroWarningMin,
    ZeroCriticalMin,
    Inverted { warning_min: usize, critical_min: usize },
}

impl fmt::Display for ThresholdsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWarningMin => f.write_str("warning_min must be a positive integer"),
            Self::ZeroCriticalMin => f.write_str("critical_min must be a positive integer"),
            Self::Inverted { warning_min, critical_min } => write!(
                f,
                "thresholds are inverted (warning_min={warning_min}, critical_min={critical_min})"
            ),
        }
    }
}

impl std::error::Error for ThresholdsError {}
