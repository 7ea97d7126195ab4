//! Current-conditions provider.
//!
//! The home page reads the current water level, its condition and the
//! weather through [`ConditionsProvider`]. [`StaticConditions`] derives the
//! first two from the data source and reports a fixed weather string; a live
//! feed would implement the same trait.

use crate::condition::{Condition, ConditionClassifier};
use crate::data_source::DataSource;
use crate::format::volume::format_with_separators;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentConditions {
    /// Display string, e.g. `304,083 acre-ft`
    pub current_water_level: String,
    pub current_water_state: Condition,
    pub weather: String,
}

pub trait ConditionsProvider {
    fn current_conditions(&self) -> CurrentConditions;
}

/// Conditions computed once from an immutable data source.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticConditions {
    conditions: CurrentConditions,
}

impl StaticConditions {
    pub fn new(data: &DataSource, classifier: &ConditionClassifier, weather: impl Into<String>) -> Self {
        let volume = data.latest().volume;
        Self {
            conditions: CurrentConditions {
                current_water_level: format!("{} acre-ft", format_with_separators(volume)),
                current_water_state: classifier.classify(volume),
                weather: weather.into(),
            },
        }
    }
}

impl ConditionsProvider for StaticConditions {
    fn current_conditions(&self) -> CurrentConditions {
        self.conditions.clone()
    }
}
