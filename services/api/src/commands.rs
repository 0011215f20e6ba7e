use crate::infra::{catalog_path, current_time_of_day};
use clap::Args;
use nutrisync::catalog::FoodCatalog;
use nutrisync::compatibility::{Assessment, Context, Season, TimeOfDay};
use nutrisync::config::AppConfig;
use nutrisync::error::AppError;
use nutrisync::nutrition::{NamedCompatibilityRequest, NutritionService, SuggestionProfile, Suggestions};
use nutrisync::telemetry;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    /// Food catalog CSV (defaults to APP_FOOD_CATALOG or data/foods.csv)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// First food, matched by name
    pub(crate) food1: String,
    /// Second food, matched by name
    pub(crate) food2: String,
    /// Eater age in years
    #[arg(long, default_value_t = 25)]
    pub(crate) age: u32,
    /// Season: summer, winter, rainy or any
    #[arg(long, default_value = "any")]
    pub(crate) season: String,
    /// Time of day: day or night (defaults from the local clock)
    #[arg(long)]
    pub(crate) time: Option<String>,
    /// Print every score adjustment that was applied
    #[arg(long)]
    pub(crate) explain: bool,
    #[command(flatten)]
    pub(crate) catalog: CatalogArgs,
}

#[derive(Args, Debug)]
pub(crate) struct SuggestArgs {
    /// Eater age in years
    #[arg(long, default_value_t = 25)]
    pub(crate) age: u32,
    /// Season: summer, winter, rainy or any
    #[arg(long, default_value = "any")]
    pub(crate) season: String,
    /// Time of day: day or night (defaults from the local clock)
    #[arg(long)]
    pub(crate) time: Option<String>,
    /// Health condition, e.g. "diabetes" or "high blood pressure"
    #[arg(long)]
    pub(crate) disease: Option<String>,
    #[command(flatten)]
    pub(crate) catalog: CatalogArgs,
}

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let AnalyzeArgs {
        food1,
        food2,
        age,
        season,
        time,
        explain,
        catalog,
    } = args;

    let service = load_service(catalog.catalog)?;
    let request = NamedCompatibilityRequest {
        food1,
        food2,
        age,
        season: Season::from(season),
        time: time.map(TimeOfDay::from).unwrap_or_else(current_time_of_day),
    };

    let assessment = service.assess_by_name(&request);
    println!("{}", render_analysis(&service, &request, &assessment, explain));
    Ok(())
}

pub(crate) fn run_suggest(args: SuggestArgs) -> Result<(), AppError> {
    let SuggestArgs {
        age,
        season,
        time,
        disease,
        catalog,
    } = args;

    let service = load_service(catalog.catalog)?;
    let profile = SuggestionProfile {
        age,
        season: Season::from(season),
        time: time.map(TimeOfDay::from).unwrap_or_else(current_time_of_day),
        disease,
    };

    let suggestions = service.suggest(&profile);
    println!("{}", render_suggestions(&profile, &suggestions));
    Ok(())
}

pub(crate) fn run_foods(args: CatalogArgs) -> Result<(), AppError> {
    let service = load_service(args.catalog)?;
    println!("{}", render_foods(service.catalog()));
    Ok(())
}

fn load_service(flag: Option<PathBuf>) -> Result<NutritionService, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    Ok(catalog_service(&catalog_path(&config.catalog, flag)))
}

/// An unreadable catalog leaves the commands running against an empty one.
pub(crate) fn catalog_service(path: &Path) -> NutritionService {
    NutritionService::new(Arc::new(FoodCatalog::load_or_empty(path)))
}

fn display_name(service: &NutritionService, query: &str) -> String {
    service
        .catalog()
        .resolve(query)
        .map(|food| food.name.clone())
        .unwrap_or_else(|| query.to_string())
}

pub(crate) fn render_analysis(
    service: &NutritionService,
    request: &NamedCompatibilityRequest,
    assessment: &Assessment,
    explain: bool,
) -> String {
    let context: Context = request.context();
    let result = &assessment.result;
    let mut lines = vec![
        format!(
            "{} + {} (age {}, {}, {})",
            display_name(service, &request.food1),
            display_name(service, &request.food2),
            context.age,
            context.season,
            context.time
        ),
        format!("{} ({:.1}/10)", result.level, result.score),
    ];

    if !result.pros.is_empty() {
        lines.push(String::new());
        lines.push("Pros".to_string());
        lines.extend(result.pros.iter().map(|pro| format!("- {pro}")));
    }

    if !result.cons.is_empty() {
        lines.push(String::new());
        lines.push("Cons".to_string());
        lines.extend(result.cons.iter().map(|con| format!("- {con}")));
    }

    if explain && !assessment.adjustments.is_empty() {
        lines.push(String::new());
        lines.push("Adjustments".to_string());
        lines.extend(assessment.adjustments.iter().map(|adjustment| {
            format!(
                "- {} {:+.1}: {}",
                adjustment.group.label(),
                adjustment.delta,
                adjustment.rationale
            )
        }));
    }

    lines.join("\n")
}

pub(crate) fn render_suggestions(profile: &SuggestionProfile, suggestions: &Suggestions) -> String {
    let mut lines = vec![format!(
        "Suggestions (age {}, {}, {})",
        profile.age, profile.season, profile.time
    )];

    if suggestions.suggestions.is_empty() {
        lines.push("- none".to_string());
    } else {
        lines.extend(suggestions.suggestions.iter().map(|name| format!("- {name}")));
    }

    lines.push(String::new());
    lines.push(format!("Reason: {}", suggestions.reason));
    lines.join("\n")
}

pub(crate) fn render_foods(catalog: &FoodCatalog) -> String {
    if catalog.is_empty() {
        return "Food catalog is empty".to_string();
    }

    let mut lines = vec![format!("{} foods", catalog.len())];
    lines.extend(
        catalog
            .iter()
            .map(|food| format!("{:>4}  {} ({})", food.id.0, food.name, food.category)),
    );
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed_service() -> NutritionService {
        let catalog = FoodCatalog::from_reader(include_str!("../../../data/foods.csv").as_bytes())
            .expect("seed catalog parses");
        NutritionService::new(Arc::new(catalog))
    }

    fn named(food1: &str, food2: &str, age: u32, season: &str, time: &str) -> NamedCompatibilityRequest {
        NamedCompatibilityRequest {
            food1: food1.to_string(),
            food2: food2.to_string(),
            age,
            season: Season::from(season),
            time: TimeOfDay::from(time),
        }
    }

    #[test]
    fn analysis_report_lists_level_pros_and_cons() {
        let service = seed_service();
        let request = named("milk", "FISH", 19, "summer", "day");
        let assessment = service.assess_by_name(&request);

        let report = render_analysis(&service, &request, &assessment, false);

        assert_eq!(
            report,
            "Milk + Fish (age 19, summer, day)\n\
             Poor Compatibility (3.0/10)\n\
             \n\
             Pros\n\
             - Foods can be consumed together without major conflicts\n\
             \n\
             Cons\n\
             - Traditionally considered incompatible in many culinary traditions"
        );
    }

    #[test]
    fn explained_report_appends_signed_adjustments() {
        let service = seed_service();
        let request = named("Milk", "Fish", 19, "summer", "day");
        let assessment = service.assess_by_name(&request);

        let report = render_analysis(&service, &request, &assessment, true);

        assert!(report.ends_with(
            "Adjustments\n\
             - traditional -2.0: Traditionally considered incompatible in many culinary traditions"
        ));
    }

    #[test]
    fn unresolved_pair_echoes_the_query() {
        let service = seed_service();
        let request = named("Apple", "Unicornfruit", 25, "any", "day");
        let assessment = service.assess_by_name(&request);

        let report = render_analysis(&service, &request, &assessment, true);

        assert!(report.starts_with("Apple + Unicornfruit (age 25, any, day)\nUnknown (0.0/10)"));
        assert!(report.contains("- One or both foods not found in Bio-Chemical Database"));
        assert!(!report.contains("Adjustments"));
    }

    #[test]
    fn missing_catalog_degrades_to_empty_reports() {
        let service = catalog_service(Path::new("/nonexistent/nutrisync/foods.csv"));
        assert!(service.catalog().is_empty());

        let request = named("Apple", "Milk", 25, "any", "day");
        let assessment = service.assess_by_name(&request);
        assert!(assessment.result.is_unresolved());

        let report = render_analysis(&service, &request, &assessment, false);
        assert!(report.starts_with("Apple + Milk (age 25, any, day)\nUnknown (0.0/10)"));
        assert!(report.contains("- One or both foods not found in Bio-Chemical Database"));

        assert_eq!(render_foods(service.catalog()), "Food catalog is empty");

        let profile = SuggestionProfile {
            age: 25,
            season: Season::Summer,
            time: TimeOfDay::Day,
            disease: None,
        };
        assert!(service.suggest(&profile).suggestions.is_empty());
    }

    #[test]
    fn suggestion_report_lists_names_then_reason() {
        let profile = SuggestionProfile {
            age: 35,
            season: Season::from("any"),
            time: TimeOfDay::Night,
            disease: None,
        };
        let suggestions = Suggestions {
            suggestions: vec!["Cucumber".to_string(), "Yogurt".to_string()],
            reason: "Evening meals should be light and easily digestible.".to_string(),
        };

        assert_eq!(
            render_suggestions(&profile, &suggestions),
            "Suggestions (age 35, any, night)\n\
             - Cucumber\n\
             - Yogurt\n\
             \n\
             Reason: Evening meals should be light and easily digestible."
        );
    }

    #[test]
    fn food_listing_follows_catalog_order() {
        let service = seed_service();

        let listing = render_foods(service.catalog());
        let lines: Vec<&str> = listing.lines().collect();

        assert_eq!(lines[0], format!("{} foods", service.catalog().len()));
        assert_eq!(lines[1], "   1  Milk (dairy)");
        assert_eq!(lines[2], "   2  Fish (protein)");
        assert_eq!(render_foods(&FoodCatalog::default()), "Food catalog is empty");
    }
}
