use crate::catalog::FoodId;
use crate::compatibility::{Assessment, CompatibilityResult, Context, ScoreAdjustment, Season, TimeOfDay};
use serde::{Deserialize, Serialize};

/// Compatibility request keyed by catalog identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityRequest {
    pub food1_id: FoodId,
    pub food2_id: FoodId,
    pub age: u32,
    pub season: Season,
    pub time: TimeOfDay,
}

impl CompatibilityRequest {
    pub fn context(&self) -> Context {
        Context::new(self.age, self.season.clone(), self.time.clone())
    }
}

/// Compatibility request keyed by free-text food names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedCompatibilityRequest {
    pub food1: String,
    pub food2: String,
    pub age: u32,
    pub season: Season,
    pub time: TimeOfDay,
}

impl NamedCompatibilityRequest {
    pub fn context(&self) -> Context {
        Context::new(self.age, self.season.clone(), self.time.clone())
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ExplainQuery {
    #[serde(default)]
    pub explain: bool,
}

/// Response body for the compatibility routes; `adjustments` only appears
/// when an explanation was requested.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompatibilityView {
    #[serde(flatten)]
    pub result: CompatibilityResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjustments: Option<Vec<ScoreAdjustment>>,
}

impl CompatibilityView {
    pub fn from_assessment(assessment: Assessment, explain: bool) -> Self {
        Self {
            result: assessment.result,
            adjustments: explain.then_some(assessment.adjustments),
        }
    }
}
