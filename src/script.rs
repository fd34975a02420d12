//! Demo configuration and scripted interaction.
//!
//! A [`DemoScript`] is the JSON-facing description of an offline run: the initial
//! [`DemoConfig`] plus a list of timestamped control actions (style changes, slider moves,
//! button presses, resizes). It is parsed leniently (every config field has a default) but
//! validated strictly before use.

use crate::animate::clock::Millis;
use crate::foundation::core::{Fps, Rgba8, Viewport};
use crate::foundation::error::{WedgeError, WedgeResult};
use crate::geometry::SliceCount;
use crate::style::Style;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// Canvas edge in logical (CSS) pixels.
    pub size: f64,
    pub dpr: f64,
    pub fps: Fps,
    pub style: Style,
    pub slices: SliceCount,
    /// Fixed seed for reproducible textures and crumbs; OS entropy when absent.
    pub seed: Option<u64>,
    pub background: Rgba8,
    /// Cutter icon edge in logical pixels.
    pub cutter_size: f64,
    /// Replacement SVG for the built-in pizza wheel.
    pub cutter_svg: Option<PathBuf>,
    /// Idle time recorded after the last action and animation.
    pub tail_ms: Millis,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            size: 600.0,
            dpr: 1.0,
            fps: Fps::default(),
            style: Style::default(),
            slices: SliceCount::default(),
            seed: None,
            background: Rgba8::rgb(0x1a, 0x1a, 0x2e),
            cutter_size: 48.0,
            cutter_svg: None,
            tail_ms: 600,
        }
    }
}

impl DemoConfig {
    pub fn viewport(&self) -> WedgeResult<Viewport> {
        Viewport::new(self.size, self.dpr)
    }

    pub fn validate(&self) -> WedgeResult<()> {
        self.viewport()?;
        Fps::new(self.fps.num, self.fps.den)?;
        if !self.cutter_size.is_finite() || self.cutter_size <= 0.0 {
            return Err(WedgeError::validation("cutter_size must be finite and > 0"));
        }
        Ok(())
    }
}

/// One control interaction.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    SetStyle { style: Style },
    SetSlices { slices: u32 },
    PressCut,
    Resize { size: f64, dpr: f64 },
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimedAction {
    pub at_ms: Millis,
    #[serde(flatten)]
    pub action: Action,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DemoScript {
    #[serde(default)]
    pub config: DemoConfig,
    #[serde(default)]
    pub actions: Vec<TimedAction>,
}

impl DemoScript {
    /// The default run: press the cut button once, right away.
    pub fn cut_once(config: DemoConfig) -> Self {
        Self {
            config,
            actions: vec![TimedAction {
                at_ms: 0,
                action: Action::PressCut,
            }],
        }
    }

    pub fn from_json_str(s: &str) -> WedgeResult<Self> {
        let script: Self = serde_json::from_str(s)
            .map_err(|e| WedgeError::serde(format!("parse demo script JSON: {e}")))?;
        script.validate()?;
        Ok(script)
    }

    pub fn from_reader<R: std::io::Read>(r: R) -> WedgeResult<Self> {
        let script: Self = serde_json::from_reader(r)
            .map_err(|e| WedgeError::serde(format!("parse demo script JSON: {e}")))?;
        script.validate()?;
        Ok(script)
    }

    pub fn from_path(path: impl AsRef<Path>) -> WedgeResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            WedgeError::validation(format!("open demo script '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> WedgeResult<()> {
        self.config.validate()?;
        if let Some(pair) = self.actions.windows(2).find(|w| w[1].at_ms < w[0].at_ms) {
            return Err(WedgeError::validation(format!(
                "actions must be sorted by at_ms ({} after {})",
                pair[1].at_ms, pair[0].at_ms
            )));
        }
        for (i, a) in self.actions.iter().enumerate() {
            match &a.action {
                Action::SetSlices { slices } => {
                    SliceCount::new(*slices).map_err(|e| {
                        WedgeError::validation(format!("action {i}: {e}"))
                    })?;
                }
                Action::Resize { size, dpr } => {
                    Viewport::new(*size, *dpr).map_err(|e| {
                        WedgeError::validation(format!("action {i}: {e}"))
                    })?;
                }
                Action::SetStyle { .. } | Action::PressCut => {}
            }
        }
        Ok(())
    }

    /// Time of the last scripted action, 0 when there are none.
    pub fn last_action_ms(&self) -> Millis {
        self.actions.last().map_or(0, |a| a.at_ms)
    }
}

#[cfg(test)]
#[path = "../tests/unit/script.rs"]
mod tests;
