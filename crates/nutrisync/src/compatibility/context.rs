use serde::{Deserialize, Serialize};
use std::fmt;

/// Season token. Matching is case-sensitive; anything other than the three
/// known tokens disables the seasonal rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Season {
    Summer,
    Winter,
    Rainy,
    Other(String),
}

impl Season {
    pub fn as_str(&self) -> &str {
        match self {
            Season::Summer => "summer",
            Season::Winter => "winter",
            Season::Rainy => "rainy",
            Season::Other(raw) => raw,
        }
    }
}

impl From<&str> for Season {
    fn from(value: &str) -> Self {
        match value {
            "summer" => Season::Summer,
            "winter" => Season::Winter,
            "rainy" => Season::Rainy,
            other => Season::Other(other.to_string()),
        }
    }
}

impl From<String> for Season {
    fn from(value: String) -> Self {
        Season::from(value.as_str())
    }
}

impl From<Season> for String {
    fn from(value: Season) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Time-of-day token, matched case-sensitively like [`Season`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TimeOfDay {
    Day,
    Night,
    Other(String),
}

impl TimeOfDay {
    pub fn as_str(&self) -> &str {
        match self {
            TimeOfDay::Day => "day",
            TimeOfDay::Night => "night",
            TimeOfDay::Other(raw) => raw,
        }
    }
}

impl From<&str> for TimeOfDay {
    fn from(value: &str) -> Self {
        match value {
            "day" => TimeOfDay::Day,
            "night" => TimeOfDay::Night,
            other => TimeOfDay::Other(other.to_string()),
        }
    }
}

impl From<String> for TimeOfDay {
    fn from(value: String) -> Self {
        TimeOfDay::from(value.as_str())
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-request evaluation context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    pub age: u32,
    pub season: Season,
    pub time: TimeOfDay,
}

impl Context {
    pub fn new(age: u32, season: impl Into<Season>, time: impl Into<TimeOfDay>) -> Self {
        Self {
            age,
            season: season.into(),
            time: time.into(),
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new(25, "any", "day")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_case_sensitive() {
        assert_eq!(Season::from("summer"), Season::Summer);
        assert_eq!(Season::from("Summer"), Season::Other("Summer".to_string()));
        assert_eq!(TimeOfDay::from("night"), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from("NIGHT"), TimeOfDay::Other("NIGHT".to_string()));
    }

    #[test]
    fn tokens_round_trip_through_json_strings() {
        let season: Season = serde_json::from_str("\"rainy\"").expect("season parses");
        assert_eq!(season, Season::Rainy);
        let time: TimeOfDay = serde_json::from_str("\"dusk\"").expect("time parses");
        assert_eq!(serde_json::to_string(&time).expect("serializes"), "\"dusk\"");
    }
}
