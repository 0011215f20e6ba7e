//! Request-facing layer: the service shared by every handler, the HTTP
//! router, and the profile-driven suggestion filter.

pub mod domain;
pub mod router;
pub mod service;
pub mod suggestions;

#[cfg(test)]
mod tests;

pub use domain::{CompatibilityRequest, CompatibilityView, ExplainQuery, NamedCompatibilityRequest};
pub use router::nutrition_router;
pub use service::{NutritionService, ServiceError};
pub use suggestions::{Condition, SuggestionEngine, SuggestionProfile, Suggestions};
