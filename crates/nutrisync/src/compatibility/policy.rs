use super::rules::CascadeOutcome;
use super::CompatibilityResult;
use serde::Serialize;
use std::fmt;

pub(crate) const MIN_SCORE: f64 = 1.0;
pub(crate) const MAX_SCORE: f64 = 10.0;
pub(crate) const MAX_RATIONALE: usize = 3;

const DEFAULT_PRO: &str = "Foods can be consumed together without major conflicts";
const DEFAULT_CON: &str = "No significant compatibility issues identified";

/// Qualitative band derived from the finished score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum CompatibilityLevel {
    #[serde(rename = "Unknown")]
    Unknown,
    #[serde(rename = "Poor Compatibility")]
    Poor,
    #[serde(rename = "Low Compatibility")]
    Low,
    #[serde(rename = "Fair Compatibility")]
    Fair,
    #[serde(rename = "Moderate Compatibility")]
    Moderate,
    #[serde(rename = "Good Compatibility")]
    Good,
    #[serde(rename = "Very Good Compatibility")]
    VeryGood,
    #[serde(rename = "Excellent Compatibility")]
    Excellent,
}

impl CompatibilityLevel {
    pub fn from_score(score: f64) -> Self {
        if score >= 8.5 {
            Self::Excellent
        } else if score >= 7.5 {
            Self::VeryGood
        } else if score >= 6.5 {
            Self::Good
        } else if score >= 5.5 {
            Self::Moderate
        } else if score >= 4.5 {
            Self::Fair
        } else if score >= 3.5 {
            Self::Low
        } else {
            Self::Poor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Poor => "Poor Compatibility",
            Self::Low => "Low Compatibility",
            Self::Fair => "Fair Compatibility",
            Self::Moderate => "Moderate Compatibility",
            Self::Good => "Good Compatibility",
            Self::VeryGood => "Very Good Compatibility",
            Self::Excellent => "Excellent Compatibility",
        }
    }
}

impl fmt::Display for CompatibilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub(crate) fn finalize(outcome: &CascadeOutcome) -> CompatibilityResult {
    let clamped = outcome.raw_score.clamp(MIN_SCORE, MAX_SCORE);
    let level = CompatibilityLevel::from_score(clamped);

    CompatibilityResult {
        level,
        score: round_to_tenth(clamped),
        pros: visible_rationale(&outcome.pros, DEFAULT_PRO),
        cons: visible_rationale(&outcome.cons, DEFAULT_CON),
    }
}

fn visible_rationale(entries: &[&'static str], fallback: &'static str) -> Vec<String> {
    if entries.is_empty() {
        return vec![fallback.to_string()];
    }

    entries
        .iter()
        .take(MAX_RATIONALE)
        .map(|entry| entry.to_string())
        .collect()
}

fn round_to_tenth(score: f64) -> f64 {
    (score * 10.0).round() / 10.0
}
