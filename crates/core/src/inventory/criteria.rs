use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::vehicle::Condition;

/// Lower-cases and whitespace-splits free text into a searchable token set.
/// Empty or absent text normalizes to the empty set.
pub fn normalize_keywords(text: &str) -> HashSet<String> {
    text.split_whitespace().map(|token| token.to_lowercase()).collect()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionFilter {
    New,
    Used,
    #[default]
    Any,
}

impl ConditionFilter {
    /// Case-insensitive parse of the wire value; `None` for strings that
    /// name no known condition (such a filter can never match a record).
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "new" => Some(Self::New),
            "used" => Some(Self::Used),
            "any" | "" => Some(Self::Any),
            _ => None,
        }
    }

    pub fn accepts(self, condition: Condition) -> bool {
        match self {
            Self::Any => true,
            Self::New => condition == Condition::New,
            Self::Used => condition == Condition::Used,
        }
    }
}

/// One search request against the catalog. Constructed per query,
/// discarded after use.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    /// Matched as a case-insensitive substring of the record's type, so
    /// "SUV" still finds a "compact SUV". Empty or "any" matches all.
    pub vehicle_type: Option<String>,
    /// Half-open price interval `[price_min, price_max)`.
    pub price_min: u32,
    pub price_max: u32,
    pub condition: ConditionFilter,
    pub model_keywords: Option<String>,
    pub exclude_keywords: Option<String>,
}

impl SearchCriteria {
    pub fn type_matches(&self, vehicle_type: &str) -> bool {
        match self.vehicle_type.as_deref() {
            None => true,
            Some(wanted) => {
                let wanted = wanted.trim().to_lowercase();
                wanted.is_empty()
                    || wanted == "any"
                    || vehicle_type.to_lowercase().contains(&wanted)
            }
        }
    }

    pub fn price_matches(&self, price: u32) -> bool {
        self.price_min <= price && price < self.price_max
    }

    /// Normalized model keywords; the literal keyword "any" disables
    /// keyword ranking rather than demanding a token match.
    pub fn model_keyword_tokens(&self) -> HashSet<String> {
        let tokens =
            self.model_keywords.as_deref().map(normalize_keywords).unwrap_or_default();
        if tokens.len() == 1 && tokens.contains("any") {
            return HashSet::new();
        }
        tokens
    }

    pub fn exclude_keyword_tokens(&self) -> HashSet<String> {
        self.exclude_keywords.as_deref().map(normalize_keywords).unwrap_or_default()
    }
}
