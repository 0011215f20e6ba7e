use std::sync::Arc;

use crate::catalog::{FoodCatalog, FoodId, FoodRecord};
use crate::compatibility::{CompatibilityEngine, Context};

pub(super) fn food(id: u32, name: &str, category: &str, properties: &[&str]) -> FoodRecord {
    FoodRecord::new(FoodId(id), name, category, "all", properties.iter().copied())
}

pub(super) fn milk() -> FoodRecord {
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
    )
}

pub(super) fn fish() -> FoodRecord {
    food(
        2,
        "Fish",
        "protein",
        &["omega_3", "protein", "vitamin_d", "light", "heating"],
    )
}

pub(super) fn spinach() -> FoodRecord {
    food(
        3,
        "Spinach",
        "vegetable",
        &["iron", "vitamin_k", "folate", "cooling", "light"],
    )
}

pub(super) fn tomato() -> FoodRecord {
    food(
        4,
        "Tomato",
        "vegetable",
        &["vitamin_c", "lycopene", "antioxidants", "sour", "heating"],
    )
}

pub(super) fn apple() -> FoodRecord {
    food(
        5,
        "Apple",
        "fruit",
        &["fiber", "vitamin_c", "antioxidants", "light", "energy"],
    )
}

pub(super) fn banana() -> FoodRecord {
    food(
        6,
        "Banana",
        "fruit",
        &["potassium", "energy", "digestive", "sweet", "mucus_forming"],
    )
}

pub(super) fn orange() -> FoodRecord {
    food(
        7,
        "Orange",
        "fruit",
        &["vitamin_c", "citrus", "sour", "immune_boost", "hydration", "cooling"],
    )
}

pub(super) fn potato() -> FoodRecord {
    food(
        8,
        "Potato",
        "vegetable",
        &["carbs", "potassium", "energy", "heavy"],
    )
}

pub(super) fn yogurt() -> FoodRecord {
    food(
        9,
        "Yogurt",
        "dairy",
        &["calcium", "protein", "probiotics", "digestive", "cooling", "sour"],
    )
}

pub(super) fn ginger() -> FoodRecord {
    food(
        10,
        "Ginger",
        "spice",
        &["digestive", "heating", "immune_boost", "anti_inflammatory"],
    )
}

pub(super) fn honey() -> FoodRecord {
    food(
        11,
        "Honey",
        "sweetener",
        &["energy", "heating", "immune_boost", "sweet"],
    )
}

pub(super) fn lentils() -> FoodRecord {
    food(
        12,
        "Lentils",
        "legume",
        &["protein", "iron", "fiber", "carbs", "heavy", "b_vitamins"],
    )
}

pub(super) fn chicken() -> FoodRecord {
    food(
        13,
        "Chicken",
        "protein",
        &["protein", "iron", "b_vitamins", "heating", "heavy"],
    )
}

pub(super) fn cheese() -> FoodRecord {
    food(
        14,
        "Cheese",
        "dairy",
        &["calcium", "protein", "heavy", "mucus_forming"],
    )
}

pub(super) fn cucumber() -> FoodRecord {
    food(
        15,
        "Cucumber",
        "vegetable",
        &["hydration", "cooling", "light", "digestive"],
    )
}

pub(super) fn rice() -> FoodRecord {
    food(
        16,
        "Rice",
        "grain",
        &["carbs", "energy", "fiber", "light", "cooling"],
    )
}

pub(super) fn oats() -> FoodRecord {
    food(
        17,
        "Oats",
        "grain",
        &["fiber", "carbs", "energy", "digestive", "b_vitamins"],
    )
}

pub(super) fn all_foods() -> Vec<FoodRecord> {
    vec![
        milk(),
        fish(),
        spinach(),
        tomato(),
        apple(),
        banana(),
        orange(),
        potato(),
        yogurt(),
        ginger(),
        honey(),
        lentils(),
        chicken(),
        cheese(),
    ]
}

pub(super) fn engine() -> CompatibilityEngine {
    CompatibilityEngine::new(Arc::new(FoodCatalog::from_records(all_foods())))
}

pub(super) fn context(age: u32, season: &str, time: &str) -> Context {
    Context::new(age, season, time)
}

pub(super) fn contexts() -> Vec<Context> {
    let mut contexts = Vec::new();
    for age in [8, 19, 35, 64] {
        for season in ["summer", "winter", "rainy", "any"] {
            for time in ["day", "night", "noon"] {
                contexts.push(context(age, season, time));
            }
        }
    }
    contexts
}
