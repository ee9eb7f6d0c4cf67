// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON overrides for [`PlotConfig`].

use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;

use plotline::{BreakPolicy, PlotConfig, Theme};
use serde::Deserialize;

/// Named color scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ThemeName {
    Dark,
    Light,
}

/// Every field is optional; missing fields keep the defaults.
///
/// ```json
/// { "home_scale": 60, "grid_spacing_px": 100, "max_jump_px": 400, "theme": "light" }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct FileConfig {
    pub(crate) home_scale: Option<f64>,
    pub(crate) min_scale: Option<f64>,
    pub(crate) max_scale: Option<f64>,
    pub(crate) grid_spacing_px: Option<f64>,
    pub(crate) zoom_step: Option<f64>,
    /// Enables [`BreakPolicy::MaxJump`] with this threshold.
    pub(crate) max_jump_px: Option<f64>,
    pub(crate) theme: Option<ThemeName>,
}

/// A config value outside its valid range.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct InvalidValue {
    field: &'static str,
    value: f64,
}

impl fmt::Display for InvalidValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "config field `{}` must be a positive finite number, got {}",
            self.field, self.value
        )
    }
}

impl Error for InvalidValue {}

fn positive(field: &'static str, value: Option<f64>) -> Result<Option<f64>, InvalidValue> {
    match value {
        Some(v) if !(v.is_finite() && v > 0.0) => Err(InvalidValue { field, value: v }),
        other => Ok(other),
    }
}

impl FileConfig {
    pub(crate) fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let content = fs::read_to_string(path)
            .map_err(|err| format!("cannot read config {}: {err}", path.display()))?;
        let config = serde_json::from_str(&content)
            .map_err(|err| format!("invalid config {}: {err}", path.display()))?;
        Ok(config)
    }

    /// Writes every present field into `config`.
    pub(crate) fn apply(&self, config: &mut PlotConfig) -> Result<(), InvalidValue> {
        if let Some(v) = positive("home_scale", self.home_scale)? {
            config.home_scale = v;
        }
        if let Some(v) = positive("min_scale", self.min_scale)? {
            config.min_scale = v;
        }
        if let Some(v) = positive("max_scale", self.max_scale)? {
            config.max_scale = v;
        }
        if let Some(v) = positive("grid_spacing_px", self.grid_spacing_px)? {
            config.grid_spacing_px = v;
        }
        if let Some(v) = positive("zoom_step", self.zoom_step)? {
            config.zoom_step = v;
        }
        if let Some(pixels) = positive("max_jump_px", self.max_jump_px)? {
            config.break_policy = BreakPolicy::MaxJump { pixels };
        }
        match self.theme {
            Some(ThemeName::Dark) => config.theme = Theme::dark(),
            Some(ThemeName::Light) => config.theme = Theme::light(),
            None => {}
        }
        Ok(())
    }
}
