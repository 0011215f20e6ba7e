//! In-memory food catalog loaded once at startup from a CSV export.

mod domain;
mod normalizer;
mod parser;
mod resolver;

pub use domain::{FoodId, FoodRecord, FoodSummary, PropertySet};
pub use resolver::{MatchKind, NameMatch, NameResolver};

pub(crate) use normalizer::fold_name;

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read food catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid food catalog data: {0}")]
    Csv(#[from] csv::Error),
}

/// Read-only table of foods, kept in source order.
#[derive(Debug, Clone, Default)]
pub struct FoodCatalog {
    foods: Vec<FoodRecord>,
    index: HashMap<FoodId, usize>,
}

impl FoodCatalog {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let parsed = parser::parse_records(reader)?;
        let catalog = Self::from_records(parsed.records);
        if parsed.skipped > 0 {
            warn!(skipped = parsed.skipped, "catalog rows dropped during parsing");
        }
        Ok(catalog)
    }

    /// Loads the catalog, degrading to an empty table when the source cannot
    /// be read so that every lookup simply reports absence.
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::from_path(path) {
            Ok(catalog) => {
                info!(path = %path.display(), foods = catalog.len(), "food catalog loaded");
                catalog
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "food catalog unavailable, continuing with an empty catalog");
                Self::default()
            }
        }
    }

    /// Builds a catalog from already-decoded records. Entries with a zero id,
    /// a blank name, or an id seen earlier are dropped.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = FoodRecord>,
    {
        let mut catalog = Self::default();

        for record in records {
            if record.id.0 == 0 {
                warn!(name = %record.name, "skipping food with non-positive id");
                continue;
            }
            if record.name.is_empty() {
                warn!(id = %record.id, "skipping food without a name");
                continue;
            }
            if catalog.index.contains_key(&record.id) {
                warn!(id = %record.id, name = %record.name, "skipping duplicate food id");
                continue;
            }

            catalog.index.insert(record.id, catalog.foods.len());
            catalog.foods.push(record);
        }

        catalog
    }

    pub fn by_id(&self, id: FoodId) -> Option<&FoodRecord> {
        self.index.get(&id).map(|&position| &self.foods[position])
    }

    pub fn resolver(&self) -> NameResolver<'_> {
        NameResolver::new(self)
    }

    pub fn resolve(&self, query: &str) -> Option<&FoodRecord> {
        self.resolver().resolve(query)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FoodRecord> {
        self.foods.iter()
    }

    pub fn records(&self) -> &[FoodRecord] {
        &self.foods
    }

    pub fn summaries(&self) -> Vec<FoodSummary> {
        self.foods.iter().map(FoodRecord::summary).collect()
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}

impl<'a> IntoIterator for &'a FoodCatalog {
    type Item = &'a FoodRecord;
    type IntoIter = std::slice::Iter<'a, FoodRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
