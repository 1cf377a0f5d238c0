pub mod customers;
pub mod financing;
pub mod qualification;
pub mod registry;
pub mod search;

use std::sync::Arc;

use lotwise_core::config::EngineConfig;
use lotwise_core::inventory::catalog::CatalogStore;
use lotwise_core::lending::qualification::TieredQualificationEngine;

pub use customers::{CustomerDirectory, CustomerRecord, GetCustomerProfileTool};
pub use financing::FinancingTool;
pub use qualification::QualificationTool;
pub use registry::{Tool, ToolRegistry};
pub use search::{SearchCarsTool, NO_MATCH_MESSAGE};

/// Registry wired with the four backend tools an agent loop dispatches to.
pub fn tool_registry(
    catalog: Arc<CatalogStore>,
    directory: Arc<CustomerDirectory>,
    config: EngineConfig,
) -> ToolRegistry {
    let mut registry = ToolRegistry::default();
    registry.register(SearchCarsTool::new(catalog));
    registry.register(FinancingTool::new(config.rates.clone()));
    registry.register(QualificationTool::new(TieredQualificationEngine::new(
        config.rates,
        config.policy,
    )));
    registry.register(GetCustomerProfileTool::new(directory));
    registry
}
