use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use lotwise_core::inventory::catalog::CatalogStore;
use lotwise_core::inventory::criteria::{ConditionFilter, SearchCriteria};
use lotwise_core::inventory::matcher::{BestOverlapMatcher, MatchEngine, MatchOutcome};

use crate::registry::Tool;

pub const NO_MATCH_MESSAGE: &str = "No car found matching your criteria.";

#[derive(Debug, Deserialize)]
struct SearchCarsRequest {
    car_type: String,
    min_price: u32,
    max_price: u32,
    new_or_used: String,
    #[serde(default)]
    car_model: Option<String>,
    #[serde(default)]
    exclude_keywords: Option<String>,
}

/// `search_cars` — picks the single best-fit vehicle from the shared
/// catalog, or reports the canonical not-found body.
pub struct SearchCarsTool {
    catalog: Arc<CatalogStore>,
    matcher: BestOverlapMatcher,
}

impl SearchCarsTool {
    pub fn new(catalog: Arc<CatalogStore>) -> Self {
        Self { catalog, matcher: BestOverlapMatcher }
    }
}

#[async_trait]
impl Tool for SearchCarsTool {
    fn name(&self) -> &'static str {
        "search_cars"
    }

    async fn execute(&self, input: Value) -> Result<Value> {
        let request: SearchCarsRequest =
            serde_json::from_value(input).context("invalid search_cars arguments")?;
        debug!(
            car_type = %request.car_type,
            min_price = request.min_price,
            max_price = request.max_price,
            new_or_used = %request.new_or_used,
            "search_cars called"
        );

        // A condition string that names no known condition can never match
        // a record, so it short-circuits to the not-found body.
        let Some(condition) = ConditionFilter::parse(&request.new_or_used) else {
            return Ok(json!({ "error": NO_MATCH_MESSAGE }));
        };

        let criteria = SearchCriteria {
            vehicle_type: Some(request.car_type),
            price_min: request.min_price,
            price_max: request.max_price,
            condition,
            model_keywords: request.car_model,
            exclude_keywords: request.exclude_keywords,
        };

        match self.matcher.find_best(&criteria, &self.catalog) {
            MatchOutcome::Match { record, .. } => Ok(json!({
                "chosen_car_model": record.model,
                "chosen_car_price": record.price,
                "dealer_location": record.dealer_location,
                "features": record.features,
            })),
            MatchOutcome::NoMatch { .. } => Ok(json!({ "error": NO_MATCH_MESSAGE })),
        }
    }
}
