use tracing::debug;

use crate::domain::vehicle::VehicleRecord;
use crate::inventory::catalog::CatalogStore;
use crate::inventory::criteria::{normalize_keywords, SearchCriteria};

/// The contract is "best single pick": one chosen record with its score,
/// or an explicit negative result. Never a list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchOutcome {
    Match { record: VehicleRecord, overlap_score: usize },
    NoMatch { reason: String },
}

impl MatchOutcome {
    pub fn record(&self) -> Option<&VehicleRecord> {
        match self {
            Self::Match { record, .. } => Some(record),
            Self::NoMatch { .. } => None,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Self::Match { .. })
    }
}

pub trait MatchEngine: Send + Sync {
    fn find_best(&self, criteria: &SearchCriteria, catalog: &CatalogStore) -> MatchOutcome;
}

/// Ranks eligible records by model-keyword overlap, breaking ties by
/// lowest price, then by catalog order (earliest record wins). The scan is
/// a pure function of its inputs.
#[derive(Clone, Copy, Debug, Default)]
pub struct BestOverlapMatcher;

impl MatchEngine for BestOverlapMatcher {
    fn find_best(&self, criteria: &SearchCriteria, catalog: &CatalogStore) -> MatchOutcome {
        find_best_overlap(criteria, catalog)
    }
}

pub fn find_best_overlap(criteria: &SearchCriteria, catalog: &CatalogStore) -> MatchOutcome {
    let model_keywords = criteria.model_keyword_tokens();
    let exclude_keywords = criteria.exclude_keyword_tokens();

    debug!(
        vehicle_type = criteria.vehicle_type.as_deref().unwrap_or("any"),
        price_min = criteria.price_min,
        price_max = criteria.price_max,
        condition = ?criteria.condition,
        keyword_count = model_keywords.len(),
        exclude_count = exclude_keywords.len(),
        catalog_size = catalog.len(),
        "searching inventory"
    );

    let mut best: Option<(usize, &VehicleRecord)> = None;

    for record in catalog.records() {
        if !criteria.type_matches(&record.vehicle_type) {
            continue;
        }
        if !criteria.condition.accepts(record.condition) {
            continue;
        }
        if !criteria.price_matches(record.price) {
            continue;
        }

        let model_tokens = normalize_keywords(&record.model);
        if !exclude_keywords.is_disjoint(&model_tokens) {
            continue;
        }

        let overlap_score = if model_keywords.is_empty() {
            0
        } else {
            let overlap = model_keywords.intersection(&model_tokens).count();
            if overlap == 0 {
                continue;
            }
            overlap
        };

        // Strict comparisons keep the earliest record on residual ties.
        let improves = match best {
            None => true,
            Some((best_score, best_record)) => {
                overlap_score > best_score
                    || (overlap_score == best_score && record.price < best_record.price)
            }
        };
        if improves {
            best = Some((overlap_score, record));
        }
    }

    match best {
        Some((overlap_score, record)) => {
            debug!(model = %record.model, price = record.price, overlap_score, "match chosen");
            MatchOutcome::Match { record: record.clone(), overlap_score }
        }
        None => MatchOutcome::NoMatch {
            reason: format!(
                "no record in a catalog of {} satisfied the search criteria",
                catalog.len()
            ),
        },
    }
}
