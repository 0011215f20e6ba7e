use super::context::{Context, Season, TimeOfDay};
use super::pairings::{EXCELLENT_COMPLEMENTS, GOOD_COMPLEMENTS, TRADITIONAL_BAD, TRADITIONAL_GOOD};
use crate::catalog::{fold_name, FoodRecord};
use serde::Serialize;

pub(crate) const BASE_SCORE: f64 = 5.0;

const EXCELLENT_COMPLEMENT: &str =
    "Excellent nutritional complementarity - nutrients enhance each other's absorption";
const GOOD_BALANCE: &str = "Good nutritional balance - complementary nutrients";
const BOTH_HEAVY: &str = "Both foods are heavy and may cause digestive discomfort";
const CURDLES_MILK: &str = "Sour/Acidic foods can curdle milk and cause digestive issues";
const SUMMER_HEATING: &str = "Too much heating foods in summer can cause discomfort";
const TRADITIONAL_MATCH: &str = "Traditional combination proven effective in many cultures";
const TRADITIONAL_CLASH: &str = "Traditionally considered incompatible in many culinary traditions";
const CHILD_CALCIUM_PROTEIN: &str = "Excellent for growing children - provides calcium and protein";
const CHILD_CALCIUM: &str = "Good calcium source for children's bone development";
const OLDER_ADULT: &str = "Beneficial for older adults - vitamin D and fiber support health";
const ADULT_DIVERSITY: &str = "Good nutrient diversity for adult health";
const SUMMER_BOTH_COOLING: &str = "Perfect summer combination - both cooling and hydrating";
const SUMMER_COOLING: &str = "Good summer choice - provides cooling effect";
const WINTER_WARMING: &str = "Excellent winter combination - immune support and warming effect";
const WINTER_IMMUNE: &str = "Good immune support for winter health";
const RAINY_DIGESTIVE: &str = "Good digestive support during rainy season";
const RAINY_MUCUS: &str = "May increase mucus formation during humid rainy season";
const DAY_ENERGY_LIGHT: &str = "Perfect daytime combination - energizing yet easy to digest";
const DAY_ENERGY: &str = "Good energy source for daytime activities";
const DAY_SLUGGISH: &str = "May cause sluggishness during workday";
const NIGHT_BOTH_DIGESTIVE: &str = "Excellent evening combination - promotes good digestion and sleep";
const NIGHT_DIGESTIVE: &str = "Supports digestion before sleep";
const NIGHT_SLEEP: &str = "May interfere with sleep quality";
const IRON_VITAMIN_C: &str = "Scientifically proven: Vitamin C enhances Iron absorption";
const PROTEIN_CARBS: &str = "Balanced nutrition: Protein + Carbohydrates for sustained energy";
const FRUIT_PAIR: &str = "Fruits complement each other well nutritionally";
const VEGETABLE_PAIR: &str = "Vegetables provide complementary nutrients and fiber";
const PROTEIN_PAIR: &str = "Multiple proteins may compete for absorption";
const GRAIN_PAIR: &str = "Multiple grains may cause digestive issues";

const SOUR_TAGS: &[&str] = &["sour", "acidic", "citrus"];
const COOLING_TAGS: &[&str] = &["cooling", "hydration"];
const ADULT_DIVERSITY_THRESHOLD: usize = 6;

/// Rule groups in evaluation order. The order doubles as rationale priority
/// because the finished lists are truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleGroup {
    NutritionalComplementarity,
    Digestive,
    Traditional,
    Age,
    Seasonal,
    TimeOfDay,
    Evidence,
    Category,
}

impl RuleGroup {
    pub fn label(self) -> &'static str {
        match self {
            Self::NutritionalComplementarity => "complementarity",
            Self::Digestive => "digestive",
            Self::Traditional => "traditional",
            Self::Age => "age",
            Self::Seasonal => "seasonal",
            Self::TimeOfDay => "time of day",
            Self::Evidence => "evidence",
            Self::Category => "category",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stance {
    Pro,
    Con,
}

/// One applied rule, kept for audit trails.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreAdjustment {
    pub group: RuleGroup,
    pub stance: Stance,
    pub delta: f64,
    pub rationale: &'static str,
}

/// Rationale topics that more than one rule could speak to.
#[derive(Debug, Default)]
struct Topics {
    complementarity: bool,
    iron_vitamin_c: bool,
    protein_carbs: bool,
}

pub(crate) struct CascadeOutcome {
    pub(crate) raw_score: f64,
    pub(crate) pros: Vec<&'static str>,
    pub(crate) cons: Vec<&'static str>,
    pub(crate) adjustments: Vec<ScoreAdjustment>,
}

pub(crate) fn run_cascade(
    first: &FoodRecord,
    second: &FoodRecord,
    context: &Context,
) -> CascadeOutcome {
    let mut cascade = Cascade::new(first, second, context);

    cascade.nutritional_complementarity();
    cascade.digestive();
    cascade.traditional();
    cascade.age();
    cascade.seasonal();
    cascade.time_of_day();
    cascade.evidence();
    cascade.category();

    cascade.finish()
}

struct Cascade<'a> {
    first: &'a FoodRecord,
    second: &'a FoodRecord,
    first_name: String,
    second_name: String,
    context: &'a Context,
    score: f64,
    pros: Vec<&'static str>,
    cons: Vec<&'static str>,
    adjustments: Vec<ScoreAdjustment>,
    topics: Topics,
}

impl<'a> Cascade<'a> {
    fn new(first: &'a FoodRecord, second: &'a FoodRecord, context: &'a Context) -> Self {
        Self {
            first,
            second,
            first_name: fold_name(&first.name),
            second_name: fold_name(&second.name),
            context,
            score: BASE_SCORE,
            pros: Vec::new(),
            cons: Vec::new(),
            adjustments: Vec::new(),
            topics: Topics::default(),
        }
    }

    fn either(&self, tag: &str) -> bool {
        self.first.has(tag) || self.second.has(tag)
    }

    fn both(&self, tag: &str) -> bool {
        self.first.has(tag) && self.second.has(tag)
    }

    fn credit(&mut self, group: RuleGroup, delta: f64, rationale: &'static str) {
        self.score += delta;
        if !self.pros.contains(&rationale) {
            self.pros.push(rationale);
        }
        self.adjustments.push(ScoreAdjustment {
            group,
            stance: Stance::Pro,
            delta,
            rationale,
        });
    }

    fn penalize(&mut self, group: RuleGroup, delta: f64, rationale: &'static str) {
        self.score -= delta;
        if !self.cons.contains(&rationale) {
            self.cons.push(rationale);
        }
        self.adjustments.push(ScoreAdjustment {
            group,
            stance: Stance::Con,
            delta: -delta,
            rationale,
        });
    }

    fn nutritional_complementarity(&mut self) {
        let (first, second) = (&self.first.properties, &self.second.properties);
        let excellent = EXCELLENT_COMPLEMENTS
            .iter()
            .any(|pair| pair.matches(first, second));
        let good = GOOD_COMPLEMENTS.iter().any(|pair| pair.matches(first, second));

        if excellent {
            self.credit(RuleGroup::NutritionalComplementarity, 2.5, EXCELLENT_COMPLEMENT);
            self.topics.complementarity = true;
        }

        if good && !self.topics.complementarity {
            self.credit(RuleGroup::NutritionalComplementarity, 1.5, GOOD_BALANCE);
        }
    }

    fn digestive(&mut self) {
        if self.both("heavy") {
            self.penalize(RuleGroup::Digestive, 2.0, BOTH_HEAVY);
        }

        let first_milk = self.first_name.contains("milk");
        let second_milk = self.second_name.contains("milk");
        let first_sour = self.first.properties.contains_any(SOUR_TAGS);
        let second_sour = self.second.properties.contains_any(SOUR_TAGS);

        if (first_sour && second_milk) || (first_milk && second_sour) {
            self.penalize(RuleGroup::Digestive, 2.5, CURDLES_MILK);
        }

        if self.both("heating") && self.context.season == Season::Summer {
            self.penalize(RuleGroup::Digestive, 1.5, SUMMER_HEATING);
        }
    }

    fn traditional(&mut self) {
        let (first, second) = (self.first_name.as_str(), self.second_name.as_str());
        let favored = TRADITIONAL_GOOD
            .iter()
            .any(|pair| pair.matches(first, second));
        let disfavored = TRADITIONAL_BAD
            .iter()
            .any(|pair| pair.matches(first, second));

        if favored {
            self.credit(RuleGroup::Traditional, 2.0, TRADITIONAL_MATCH);
        }
        if disfavored {
            self.penalize(RuleGroup::Traditional, 2.0, TRADITIONAL_CLASH);
        }
    }

    fn age(&mut self) {
        let age = self.context.age;

        if age < 18 {
            if self.either("calcium") && self.either("protein") {
                self.credit(RuleGroup::Age, 1.0, CHILD_CALCIUM_PROTEIN);
            } else if self.either("calcium") {
                self.credit(RuleGroup::Age, 0.5, CHILD_CALCIUM);
            }
        } else if age > 50 {
            if self.either("vitamin_d") && self.either("fiber") {
                self.credit(RuleGroup::Age, 1.0, OLDER_ADULT);
            }
        } else if age > 30 {
            let diversity = self.first.properties.union_len(&self.second.properties);
            if diversity >= ADULT_DIVERSITY_THRESHOLD {
                self.credit(RuleGroup::Age, 0.5, ADULT_DIVERSITY);
            }
        }
    }

    fn seasonal(&mut self) {
        match self.context.season {
            Season::Summer => {
                let first_cooling = self.first.properties.contains_any(COOLING_TAGS);
                let second_cooling = self.second.properties.contains_any(COOLING_TAGS);
                let first_heating = self.first.has("heating");
                let second_heating = self.second.has("heating");

                if first_cooling && second_cooling {
                    self.credit(RuleGroup::Seasonal, 1.5, SUMMER_BOTH_COOLING);
                } else if (first_cooling && !second_heating) || (second_cooling && !first_heating)
                {
                    // a cooling food does not offset a heating partner
                    self.credit(RuleGroup::Seasonal, 0.5, SUMMER_COOLING);
                }
            }
            Season::Winter => {
                if self.either("immune_boost") && self.either("heating") {
                    self.credit(RuleGroup::Seasonal, 1.5, WINTER_WARMING);
                } else if self.either("immune_boost") {
                    self.credit(RuleGroup::Seasonal, 0.5, WINTER_IMMUNE);
                }
            }
            Season::Rainy => {
                if self.both("digestive") {
                    self.credit(RuleGroup::Seasonal, 1.0, RAINY_DIGESTIVE);
                }
                if self.either("mucus_forming") {
                    self.penalize(RuleGroup::Seasonal, 1.0, RAINY_MUCUS);
                }
            }
            Season::Other(_) => {}
        }
    }

    fn time_of_day(&mut self) {
        match self.context.time {
            TimeOfDay::Day => {
                if self.either("energy") && self.either("light") {
                    self.credit(RuleGroup::TimeOfDay, 1.0, DAY_ENERGY_LIGHT);
                } else if self.either("energy") {
                    self.credit(RuleGroup::TimeOfDay, 0.5, DAY_ENERGY);
                }

                if self.context.age > 30 && self.both("heavy") {
                    self.penalize(RuleGroup::TimeOfDay, 0.5, DAY_SLUGGISH);
                }
            }
            TimeOfDay::Night => {
                if self.both("digestive") {
                    self.credit(RuleGroup::TimeOfDay, 1.0, NIGHT_BOTH_DIGESTIVE);
                } else if self.either("digestive") {
                    self.credit(RuleGroup::TimeOfDay, 0.5, NIGHT_DIGESTIVE);
                }

                if self.both("heating") || self.either("stimulant") {
                    self.penalize(RuleGroup::TimeOfDay, 1.0, NIGHT_SLEEP);
                }
            }
            TimeOfDay::Other(_) => {}
        }
    }

    fn evidence(&mut self) {
        if self.either("iron") && self.either("vitamin_c") && !self.topics.iron_vitamin_c {
            self.credit(RuleGroup::Evidence, 1.5, IRON_VITAMIN_C);
            self.topics.iron_vitamin_c = true;
        }

        if self.either("protein") && self.either("carbs") && !self.topics.protein_carbs {
            self.credit(RuleGroup::Evidence, 1.0, PROTEIN_CARBS);
            self.topics.protein_carbs = true;
        }
    }

    fn category(&mut self) {
        if self.first.category != self.second.category {
            return;
        }

        match self.first.category.as_str() {
            "fruit" => self.credit(RuleGroup::Category, 0.5, FRUIT_PAIR),
            "vegetable" => self.credit(RuleGroup::Category, 0.5, VEGETABLE_PAIR),
            "protein" => self.penalize(RuleGroup::Category, 0.5, PROTEIN_PAIR),
            "grain" => self.penalize(RuleGroup::Category, 0.5, GRAIN_PAIR),
            _ => {}
        }
    }

    fn finish(self) -> CascadeOutcome {
        CascadeOutcome {
            raw_score: self.score,
            pros: self.pros,
            cons: self.cons,
            adjustments: self.adjustments,
        }
    }
}
