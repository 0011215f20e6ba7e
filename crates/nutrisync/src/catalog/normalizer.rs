/// Strips byte-order marks and zero-width spaces, then collapses whitespace.
pub(crate) fn clean_display(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Case-folded form used for every name comparison.
pub(crate) fn fold_name(value: &str) -> String {
    value.to_lowercase()
}

pub(crate) fn normalize_tag(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Splits a raw `properties` cell on commas. A missing cell yields no tags.
pub(crate) fn split_tags(raw: Option<&str>) -> impl Iterator<Item = &str> {
    raw.unwrap_or_default()
        .split(',')
        .filter(|tag| !tag.trim().is_empty())
}
