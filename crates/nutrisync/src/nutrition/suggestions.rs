use crate::catalog::{FoodCatalog, FoodRecord};
use crate::compatibility::{Season, TimeOfDay};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const MAX_SUGGESTIONS: usize = 8;

/// Who the suggestions are for.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SuggestionProfile {
    pub age: u32,
    pub season: Season,
    pub time: TimeOfDay,
    #[serde(default)]
    pub disease: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestions {
    pub suggestions: Vec<String>,
    pub reason: String,
}

/// Health condition recognised from the free-text `disease` field. The first
/// keyword that matches wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Diabetes,
    BloodPressure,
    Anemia,
    Digestion,
    Heart,
}

impl Condition {
    pub fn detect(raw: &str) -> Option<Self> {
        let lowered = raw.trim().to_lowercase();
        if lowered.is_empty() || lowered == "none" {
            return None;
        }

        if lowered.contains("diabetes") {
            Some(Self::Diabetes)
        } else if lowered.contains("hypertension") || lowered.contains("blood pressure") {
            Some(Self::BloodPressure)
        } else if lowered.contains("anemia") {
            Some(Self::Anemia)
        } else if lowered.contains("digestion") || lowered.contains("gut") {
            Some(Self::Digestion)
        } else if lowered.contains("cholesterol") || lowered.contains("heart") {
            Some(Self::Heart)
        } else {
            None
        }
    }

    fn suits(self, food: &FoodRecord) -> bool {
        match self {
            Self::Diabetes => {
                matches!(food.category.as_str(), "vegetable" | "legume") && !food.has("sweet")
            }
            Self::BloodPressure => food.has("potassium") || food.has("antioxidants"),
            Self::Anemia => food.has("iron") || food.has("vitamin_c"),
            Self::Digestion => food.has("digestive") || food.has("probiotics"),
            Self::Heart => food.has("omega_3") || (food.has("fiber") && !food.has("heavy")),
        }
    }

    fn reason(self) -> &'static str {
        match self {
            Self::Diabetes => "For diabetes management, focus on low-glycemic, high-fiber foods.",
            Self::BloodPressure => "For blood pressure management, potassium-rich and heart-healthy foods are recommended.",
            Self::Anemia => "Iron-rich foods (with Vitamin C for absorption) help combat anemia.",
            Self::Digestion => "For digestive health, prioritize foods with probiotics and digestive aids.",
            Self::Heart => "For heart health and cholesterol management, focus on omega-3s and fiber.",
        }
    }
}

/// Linear filter/union over the catalog driven by a [`SuggestionProfile`].
#[derive(Debug, Clone)]
pub struct SuggestionEngine {
    catalog: Arc<FoodCatalog>,
}

impl SuggestionEngine {
    pub fn new(catalog: Arc<FoodCatalog>) -> Self {
        Self { catalog }
    }

    pub fn suggest(&self, profile: &SuggestionProfile) -> Suggestions {
        let mut pool = Pool::new(&self.catalog);

        if profile.age < 18 {
            pool.add(
                "Growing children need calcium, protein, and energy for development.",
                |food| food.has("calcium") || food.has("protein") || food.has("energy"),
            );
        } else if profile.age > 50 {
            pool.add(
                "Older adults benefit from vitamin D, digestive aids, and antioxidant-rich foods.",
                |food| food.has("vitamin_d") || food.has("digestive") || food.has("antioxidants"),
            );
        }

        match profile.season {
            Season::Summer => pool.add("Summer calls for hydrating and cooling foods.", |food| {
                food.has("cooling") || food.has("hydration")
            }),
            Season::Winter => pool.add("Winter needs immune-boosting and warming foods.", |food| {
                food.has("heating") || food.has("immune_boost")
            }),
            Season::Rainy => pool.add(
                "Light and digestive-friendly foods are recommended during rainy season.",
                |food| food.has("digestive") && food.has("light"),
            ),
            Season::Other(_) => {}
        }

        // every token other than "day" gets the evening filter
        if profile.time == TimeOfDay::Day {
            pool.add(
                "Daytime meals should provide sustained energy and be easy to digest.",
                |food| food.has("energy") || food.has("light"),
            );
        } else {
            pool.add(
                "Evening meals should be light and easily digestible.",
                |food| food.has("digestive") && food.has("light") && !food.has("heating"),
            );
        }

        if let Some(condition) = profile.disease.as_deref().and_then(Condition::detect) {
            pool.add(condition.reason(), |food| condition.suits(food));
        }

        pool.finish()
    }
}

struct Pool<'a> {
    catalog: &'a FoodCatalog,
    names: Vec<&'a str>,
    reasons: Vec<&'static str>,
}

impl<'a> Pool<'a> {
    fn new(catalog: &'a FoodCatalog) -> Self {
        Self {
            catalog,
            names: Vec::new(),
            reasons: Vec::new(),
        }
    }

    fn add(&mut self, reason: &'static str, keep: impl Fn(&FoodRecord) -> bool) {
        let catalog = self.catalog;
        for food in catalog.iter().filter(|food| keep(food)) {
            if !self.names.contains(&food.name.as_str()) {
                self.names.push(food.name.as_str());
            }
        }
        self.reasons.push(reason);
    }

    fn finish(self) -> Suggestions {
        Suggestions {
            suggestions: self
                .names
                .into_iter()
                .take(MAX_SUGGESTIONS)
                .map(str::to_string)
                .collect(),
            reason: self.reasons.join(" "),
        }
    }
}
