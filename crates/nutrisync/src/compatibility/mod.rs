//! Rule cascade scoring how well two foods go together for a given context.

mod context;
mod pairings;
mod policy;
mod rules;

#[cfg(test)]
mod tests;

pub use context::{Context, Season, TimeOfDay};
pub use policy::CompatibilityLevel;
pub use rules::{RuleGroup, ScoreAdjustment, Stance};

use crate::catalog::{FoodCatalog, FoodRecord};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

pub const UNRESOLVED_MESSAGE: &str = "One or both foods not found in Bio-Chemical Database";

/// Either an already-resolved catalog entry or free text to resolve first.
#[derive(Debug, Clone, Copy)]
pub enum FoodInput<'a> {
    Record(&'a FoodRecord),
    Name(&'a str),
}

impl<'a> From<&'a FoodRecord> for FoodInput<'a> {
    fn from(value: &'a FoodRecord) -> Self {
        FoodInput::Record(value)
    }
}

impl<'a> From<&'a str> for FoodInput<'a> {
    fn from(value: &'a str) -> Self {
        FoodInput::Name(value)
    }
}

impl<'a> From<&'a String> for FoodInput<'a> {
    fn from(value: &'a String) -> Self {
        FoodInput::Name(value.as_str())
    }
}

/// Serialized verdict: `level`, `score`, `pros`, `cons`, in that order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompatibilityResult {
    pub level: CompatibilityLevel,
    pub score: f64,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

impl CompatibilityResult {
    /// Fixed answer when either food cannot be resolved.
    pub fn unresolved() -> Self {
        Self {
            level: CompatibilityLevel::Unknown,
            score: 0.0,
            pros: Vec::new(),
            cons: vec![UNRESOLVED_MESSAGE.to_string()],
        }
    }

    pub fn is_unresolved(&self) -> bool {
        self.level == CompatibilityLevel::Unknown
    }
}

/// Result plus every adjustment the cascade applied, in evaluation order.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub result: CompatibilityResult,
    pub adjustments: Vec<ScoreAdjustment>,
}

impl Assessment {
    fn unresolved() -> Self {
        Self {
            result: CompatibilityResult::unresolved(),
            adjustments: Vec::new(),
        }
    }
}

/// Scores pairs of foods against a shared, read-only catalog.
#[derive(Debug, Clone)]
pub struct CompatibilityEngine {
    catalog: Arc<FoodCatalog>,
}

impl CompatibilityEngine {
    pub fn new(catalog: Arc<FoodCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &FoodCatalog {
        &self.catalog
    }

    pub fn analyze<'a>(
        &'a self,
        first: impl Into<FoodInput<'a>>,
        second: impl Into<FoodInput<'a>>,
        context: &Context,
    ) -> CompatibilityResult {
        self.assess(first, second, context).result
    }

    pub fn assess<'a>(
        &'a self,
        first: impl Into<FoodInput<'a>>,
        second: impl Into<FoodInput<'a>>,
        context: &Context,
    ) -> Assessment {
        let first = self.resolve(first.into());
        let second = self.resolve(second.into());

        match (first, second) {
            (Some(first), Some(second)) => evaluate_pair(first, second, context),
            _ => {
                debug!("compatibility requested for an unresolved food");
                Assessment::unresolved()
            }
        }
    }

    fn resolve<'a>(&'a self, input: FoodInput<'a>) -> Option<&'a FoodRecord> {
        match input {
            FoodInput::Record(record) => Some(record),
            FoodInput::Name(name) => self.catalog.resolve(name),
        }
    }
}

/// Runs the full cascade over two resolved foods.
pub fn evaluate_pair(first: &FoodRecord, second: &FoodRecord, context: &Context) -> Assessment {
    let outcome = rules::run_cascade(first, second, context);
    let result = policy::finalize(&outcome);

    debug!(
        first = %first.name,
        second = %second.name,
        age = context.age,
        season = %context.season,
        time = %context.time,
        score = result.score,
        level = %result.level,
        "compatibility assessed"
    );

    Assessment {
        result,
        adjustments: outcome.adjustments,
    }
}
