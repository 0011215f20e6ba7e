use super::domain::FoodRecord;
use super::normalizer::fold_name;
use super::FoodCatalog;

/// Which pass of the resolver produced a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    Substring,
}

#[derive(Debug, Clone, Copy)]
pub struct NameMatch<'a> {
    pub record: &'a FoodRecord,
    pub kind: MatchKind,
}

/// Maps free text onto a catalog entry: exact case-insensitive name first,
/// then the first name containing the query. Ties go to catalog order.
#[derive(Debug, Clone, Copy)]
pub struct NameResolver<'a> {
    foods: &'a [FoodRecord],
}

impl<'a> NameResolver<'a> {
    pub fn new(catalog: &'a FoodCatalog) -> Self {
        Self {
            foods: catalog.records(),
        }
    }

    pub fn resolve(&self, query: &str) -> Option<&'a FoodRecord> {
        self.lookup(query).map(|found| found.record)
    }

    pub fn lookup(&self, query: &str) -> Option<NameMatch<'a>> {
        if query.trim().is_empty() {
            return None;
        }

        // surrounding whitespace is part of the needle

        let needle = fold_name(query);
        let foods = self.foods;

        if let Some(record) = foods.iter().find(|food| fold_name(&food.name) == needle) {
            return Some(NameMatch {
                record,
                kind: MatchKind::Exact,
            });
        }

        foods
            .iter()
            .find(|food| fold_name(&food.name).contains(needle.as_str()))
            .map(|record| NameMatch {
                record,
                kind: MatchKind::Substring,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FoodId;

    fn catalog(names: &[&str]) -> FoodCatalog {
        FoodCatalog::from_records(names.iter().enumerate().map(|(index, name)| {
            FoodRecord::new(
                FoodId(index as u32 + 1),
                name,
                "misc",
                "all",
                std::iter::empty::<&str>(),
            )
        }))
    }

    #[test]
    fn partial_query_falls_through_to_substring_pass() {
        let catalog = catalog(&["Milk", "Fish", "Buttermilk"]);
        let found = catalog.resolver().lookup("mil").expect("milk resolves");

        assert_eq!(found.record.name, "Milk");
        assert_eq!(found.kind, MatchKind::Substring);
    }

    #[test]
    fn exact_match_wins_over_earlier_substring_match() {
        let catalog = catalog(&["Buttermilk", "Milk"]);
        let found = catalog.resolver().lookup("MILK").expect("milk resolves");

        assert_eq!(found.record.name, "Milk");
        assert_eq!(found.kind, MatchKind::Exact);
    }

    #[test]
    fn substring_ties_resolve_to_catalog_order() {
        let catalog = catalog(&["Buttermilk", "Coconut Milk", "Milk"]);
        let found = catalog.resolve("mil").expect("resolves");
        assert_eq!(found.name, "Buttermilk");
    }

    #[test]
    fn blank_and_unknown_queries_resolve_to_nothing() {
        let catalog = catalog(&["Milk", "Green Tea"]);
        assert!(catalog.resolve("").is_none());
        assert!(catalog.resolve("   ").is_none());
        assert!(catalog.resolve("Unicornfruit").is_none());
    }

    #[test]
    fn query_is_matched_literally() {
        let catalog = catalog(&["Milk", "Green Tea"]);
        assert!(catalog.resolve("(").is_none());
        assert!(catalog.resolve(".*").is_none());
        assert_eq!(
            catalog.resolve("green tea").map(|food| food.id),
            Some(FoodId(2))
        );
    }

    #[test]
    fn padded_query_is_not_trimmed_before_matching() {
        let catalog = catalog(&["Milk", "Coconut Milk"]);

        let found = catalog.resolver().lookup(" milk").expect("padded query resolves");
        assert_eq!(found.record.name, "Coconut Milk");
        assert_eq!(found.kind, MatchKind::Substring);

        assert!(catalog.resolve("milk ").is_none());
    }

    #[test]
    fn empty_catalog_never_resolves() {
        let catalog = FoodCatalog::default();
        assert!(catalog.resolve("Milk").is_none());
    }
}
