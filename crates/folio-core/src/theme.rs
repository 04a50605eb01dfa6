use serde::{Deserialize, Serialize};

use crate::contribution::MAX_LEVEL;

/// GitHub's green scale, lightest (no activity) to darkest.
pub const GREEN_PALETTE: [&str; 5] = ["#ebedf0", "#9be9a8", "#40c463", "#30a14e", "#216e39"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    Light,
    Dark,
}

/// Heatmap colors indexed by level, one sequence per display mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub light: [String; 5],
    pub dark: [String; 5],
}

impl Default for Theme {
    /// The same palette is used for both modes.
    fn default() -> Self {
        Self {
            light: GREEN_PALETTE.map(String::from),
            dark: GREEN_PALETTE.map(String::from),
        }
    }
}

impl Theme {
    pub fn palette(&self, mode: ThemeMode) -> &[String; 5] {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }

    /// Color for a level; levels above the maximum saturate.
    pub fn color(&self, mode: ThemeMode, level: u8) -> &str {
        let idx = usize::from(level.min(MAX_LEVEL));
        &self.palette(mode)[idx]
    }
}
