use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::catalog::{FoodCatalog, FoodId, FoodRecord};
use crate::compatibility::{Season, TimeOfDay};
use crate::nutrition::{NutritionService, SuggestionProfile};

fn food(id: u32, name: &str, category: &str, properties: &[&str]) -> FoodRecord {
    FoodRecord::new(FoodId(id), name, category, "all", properties.iter().copied())
}

pub(super) fn catalog() -> Arc<FoodCatalog> {
    Arc::new(FoodCatalog::from_records(vec![
        food(
            1,
            "Milk",
            "dairy",
            &[
                "calcium",
                "protein",
                "hydration",
                "heavy",
                "sweet",
                "cooling",
                "mucus_forming",
            ],
        ),
        food(
            2,
            "Fish",
            "protein",
            &["omega_3", "protein", "vitamin_d", "light", "heating"],
        ),
        food(
            3,
            "Spinach",
            "vegetable",
            &["iron", "vitamin_k", "folate", "cooling", "light"],
        ),
        food(
            4,
            "Banana",
            "fruit",
            &["potassium", "energy", "digestive", "sweet", "mucus_forming"],
        ),
        food(
            5,
            "Cucumber",
            "vegetable",
            &["hydration", "cooling", "light", "digestive"],
        ),
        food(
            6,
            "Ginger",
            "spice",
            &["digestive", "heating", "immune_boost", "anti_inflammatory"],
        ),
        food(
            7,
            "Lentils",
            "legume",
            &["protein", "iron", "fiber", "carbs", "heavy", "b_vitamins"],
        ),
        food(
            8,
            "Green Tea",
            "beverage",
            &["antioxidants", "stimulant", "light"],
        ),
        food(
            9,
            "Yogurt",
            "dairy",
            &["calcium", "protein", "probiotics", "digestive", "cooling", "sour"],
        ),
        food(
            10,
            "Orange",
            "fruit",
            &["vitamin_c", "citrus", "sour", "immune_boost", "hydration", "cooling"],
        ),
    ]))
}

pub(super) fn service() -> Arc<NutritionService> {
    Arc::new(NutritionService::new(catalog()))
}

pub(super) fn profile(age: u32, season: &str, time: &str, disease: Option<&str>) -> SuggestionProfile {
    SuggestionProfile {
        age,
        season: Season::from(season),
        time: TimeOfDay::from(time),
        disease: disease.map(str::to_string),
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
