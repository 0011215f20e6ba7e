use std::sync::Arc;

use tracing::debug;

use super::domain::{CompatibilityRequest, NamedCompatibilityRequest};
use super::suggestions::{SuggestionEngine, SuggestionProfile, Suggestions};
use crate::catalog::{FoodCatalog, FoodId, FoodRecord, FoodSummary};
use crate::compatibility::{Assessment, CompatibilityEngine};

/// Service composing the shared catalog with the compatibility and
/// suggestion engines. Built once at startup and shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct NutritionService {
    catalog: Arc<FoodCatalog>,
    compatibility: CompatibilityEngine,
    suggestions: SuggestionEngine,
}

impl NutritionService {
    pub fn new(catalog: Arc<FoodCatalog>) -> Self {
        Self {
            compatibility: CompatibilityEngine::new(catalog.clone()),
            suggestions: SuggestionEngine::new(catalog.clone()),
            catalog,
        }
    }

    pub fn catalog(&self) -> &FoodCatalog {
        &self.catalog
    }

    pub fn foods(&self) -> Vec<FoodSummary> {
        self.catalog.summaries()
    }

    /// Scores two catalog entries. Unknown identifiers are reported as an
    /// error rather than the unresolved sentinel.
    pub fn assess_by_id(
        &self,
        request: &CompatibilityRequest,
    ) -> Result<Assessment, ServiceError> {
        let first = self.food(request.food1_id)?;
        let second = self.food(request.food2_id)?;
        Ok(self
            .compatibility
            .assess(first, second, &request.context()))
    }

    pub fn assess_by_name(&self, request: &NamedCompatibilityRequest) -> Assessment {
        self.compatibility
            .assess(&request.food1, &request.food2, &request.context())
    }

    pub fn suggest(&self, profile: &SuggestionProfile) -> Suggestions {
        let suggestions = self.suggestions.suggest(profile);
        debug!(
            age = profile.age,
            season = %profile.season,
            time = %profile.time,
            count = suggestions.suggestions.len(),
            "suggestions generated"
        );
        suggestions
    }

    fn food(&self, id: FoodId) -> Result<&FoodRecord, ServiceError> {
        self.catalog.by_id(id).ok_or(ServiceError::UnknownFood(id))
    }
}

/// Error raised by the nutrition service.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("food not found: {0}")]
    UnknownFood(FoodId),
}
