pub mod config;
pub mod domain;
pub mod errors;
pub mod inventory;
pub mod lending;

pub use config::{ConfigError, EngineConfig, LendingPolicy, RateSchedule, TermRate, TierBand};
pub use domain::customer::{CreditTier, CustomerProfile};
pub use domain::loan::{LoanOption, LoanQuote, QualificationResult};
pub use domain::vehicle::{Condition, VehicleRecord};
pub use errors::EngineError;
pub use inventory::catalog::CatalogStore;
pub use inventory::criteria::{ConditionFilter, SearchCriteria};
pub use inventory::matcher::{BestOverlapMatcher, MatchEngine, MatchOutcome};
pub use lending::amortization::{compute_payment, quote_loan, LoanQuoteRequest, PaymentSchedule};
pub use lending::qualification::{QualificationEngine, TieredQualificationEngine};
