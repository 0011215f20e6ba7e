use super::domain::{FoodId, FoodRecord};
use super::normalizer::split_tags;
use serde::{Deserialize, Deserializer};
use std::io::Read;
use tracing::warn;

/// Rows decoded from a catalog export, plus the count of rows that could not
/// be used at all.
#[derive(Debug, Default)]
pub(crate) struct ParsedRows {
    pub(crate) records: Vec<FoodRecord>,
    pub(crate) skipped: usize,
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<ParsedRows, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let mut parsed = ParsedRows::default();

    for (index, record) in csv_reader.deserialize::<CatalogRow>().enumerate() {
        let row = match record {
            Ok(row) => row,
            Err(err) if err.is_io_error() => return Err(err),
            Err(err) => {
                warn!(row = index + 1, error = %err, "skipping unreadable catalog row");
                parsed.skipped += 1;
                continue;
            }
        };

        match row.into_record() {
            Some(food) => parsed.records.push(food),
            None => {
                warn!(row = index + 1, "skipping catalog row without a usable id");
                parsed.skipped += 1;
            }
        }
    }

    Ok(parsed)
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    season: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    properties: Option<String>,
}

impl CatalogRow {
    fn into_record(self) -> Option<FoodRecord> {
        let id = self.id.trim().parse::<u32>().ok()?;
        Some(FoodRecord::new(
            FoodId(id),
            &self.name,
            &self.category,
            &self.season,
            split_tags(self.properties.as_deref()),
        ))
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
