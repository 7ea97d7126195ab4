//! Volume-to-condition classification.

use crate::config::Thresholds;
use serde::Serialize;
use std::fmt;

/// Reservoir health derived from the latest volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Condition {
    ExceptionalHealth,
    Healthy,
    Normal,
    Drought,
    SevereDrought,
}

/// CSS color used to display a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ConditionColor {
    ForestGreen,
    Green,
    GreenYellow,
    Orange,
    Red,
}

impl Condition {
    pub fn label(&self) -> &'static str {
        match self {
            Condition::ExceptionalHealth => "Exceptional Health",
            Condition::Healthy => "Healthy",
            Condition::Normal => "Normal",
            Condition::Drought => "Drought",
            Condition::SevereDrought => "Severe Drought",
        }
    }

    pub fn color(&self) -> ConditionColor {
        match self {
            Condition::ExceptionalHealth => ConditionColor::ForestGreen,
            Condition::Healthy => ConditionColor::Green,
            Condition::Normal => ConditionColor::GreenYellow,
            Condition::Drought => ConditionColor::Orange,
            Condition::SevereDrought => ConditionColor::Red,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl ConditionColor {
    /// CSS color keyword.
    pub fn css_name(&self) -> &'static str {
        match self {
            ConditionColor::ForestGreen => "ForestGreen",
            ConditionColor::Green => "Green",
            ConditionColor::GreenYellow => "GreenYellow",
            ConditionColor::Orange => "orange",
            ConditionColor::Red => "red",
        }
    }
}

impl fmt::Display for ConditionColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}

/// Maps a volume to a [`Condition`] using fixed cutoffs.
///
/// Cutoffs are checked in order exceptional, healthy, normal, drought and
/// the first one the volume strictly exceeds wins. Anything at or below the
/// drought cutoff is `SevereDrought`. With the default thresholds the
/// drought cutoff equals the normal one, so `Drought` is never returned.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ConditionClassifier {
    thresholds: Thresholds,
}

impl ConditionClassifier {
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn classify(&self, volume: f64) -> Condition {
        let t = &self.thresholds;
        if volume > t.exceptional {
            Condition::ExceptionalHealth
        } else if volume > t.healthy {
            Condition::Healthy
        } else if volume > t.normal {
            Condition::Normal
        } else if volume > t.drought {
            Condition::Drought
        } else {
            Condition::SevereDrought
        }
    }
}
