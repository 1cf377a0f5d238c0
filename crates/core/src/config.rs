use std::fs;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::customer::CreditTier;

/// Annual rate for one supported loan term.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermRate {
    pub term_months: u32,
    pub annual_rate_pct: Decimal,
}

/// Versioned term-to-rate table. Injected into the financing path rather
/// than read from module globals so tests can substitute schedules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateSchedule {
    pub version: String,
    pub term_rates: Vec<TermRate>,
}

impl RateSchedule {
    pub fn rate_for(&self, term_months: u32) -> Option<Decimal> {
        self.term_rates
            .iter()
            .find(|rate| rate.term_months == term_months)
            .map(|rate| rate.annual_rate_pct)
    }

    /// Supported terms, ascending.
    pub fn terms(&self) -> impl Iterator<Item = u32> + '_ {
        self.term_rates.iter().map(|rate| rate.term_months)
    }

    /// Caller-facing rejection text for an unsupported term. Wording is
    /// part of the preserved wire contract.
    pub fn unsupported_term_message(&self) -> String {
        let terms: Vec<String> = self.terms().map(|term| term.to_string()).collect();
        format!("Invalid loan term. Supported terms: [{}] months.", terms.join(", "))
    }
}

impl Default for RateSchedule {
    fn default() -> Self {
        Self {
            version: "demo-2025.1".to_owned(),
            term_rates: vec![
                TermRate { term_months: 36, annual_rate_pct: Decimal::new(45, 1) },
                TermRate { term_months: 48, annual_rate_pct: Decimal::new(50, 1) },
                TermRate { term_months: 60, annual_rate_pct: Decimal::new(55, 1) },
                TermRate { term_months: 72, annual_rate_pct: Decimal::new(60, 1) },
            ],
        }
    }
}

/// One credit-score band and its flat annual rate. Bands are half-open:
/// a score belongs to the first band whose `min_score` it reaches.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierBand {
    pub tier: CreditTier,
    pub min_score: u16,
    pub annual_rate_pct: Decimal,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LendingPolicy {
    /// Ordered by `min_score` descending; the last band must start at 0.
    pub tier_bands: Vec<TierBand>,
    /// Affordability ceiling as a share of annual income.
    pub max_loan_income_share: Decimal,
    /// Per-term cap on debt-to-income after the prospective payment.
    pub max_debt_to_income: Decimal,
    /// Minimum account balance before a down payment is suggested.
    pub suggestion_balance_floor: Decimal,
    /// Suggested down payment: min of these shares of balance and price.
    pub suggestion_balance_share: Decimal,
    pub suggestion_price_share: Decimal,
}

impl LendingPolicy {
    pub fn tier_for(&self, credit_score: u16) -> &TierBand {
        self.tier_bands
            .iter()
            .find(|band| credit_score >= band.min_score)
            .unwrap_or_else(|| &self.tier_bands[self.tier_bands.len() - 1])
    }
}

impl Default for LendingPolicy {
    fn default() -> Self {
        Self {
            tier_bands: vec![
                TierBand {
                    tier: CreditTier::Excellent,
                    min_score: 750,
                    annual_rate_pct: Decimal::new(32, 1),
                },
                TierBand {
                    tier: CreditTier::Good,
                    min_score: 700,
                    annual_rate_pct: Decimal::new(41, 1),
                },
                TierBand {
                    tier: CreditTier::Fair,
                    min_score: 650,
                    annual_rate_pct: Decimal::new(68, 1),
                },
                TierBand {
                    tier: CreditTier::Subprime,
                    min_score: 0,
                    annual_rate_pct: Decimal::new(125, 1),
                },
            ],
            max_loan_income_share: Decimal::new(38, 2),
            max_debt_to_income: Decimal::new(40, 2),
            suggestion_balance_floor: Decimal::from(5000),
            suggestion_balance_share: Decimal::new(5, 1),
            suggestion_price_share: Decimal::new(2, 1),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub rates: RateSchedule,
    pub policy: LendingPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { rates: RateSchedule::default(), policy: LendingPolicy::default() }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

impl EngineConfig {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|source| ConfigError::ReadFile { path: path.to_path_buf(), source })?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.rates.term_rates.is_empty() {
            return Err(ConfigError::Invalid("rate schedule has no terms".to_owned()));
        }
        if !self.rates.term_rates.windows(2).all(|pair| pair[0].term_months < pair[1].term_months)
        {
            return Err(ConfigError::Invalid(
                "rate schedule terms must be strictly ascending".to_owned(),
            ));
        }
        if self.policy.tier_bands.is_empty() {
            return Err(ConfigError::Invalid("lending policy has no tier bands".to_owned()));
        }
        if !self.policy.tier_bands.windows(2).all(|pair| pair[0].min_score > pair[1].min_score) {
            return Err(ConfigError::Invalid(
                "tier bands must be ordered by min_score descending".to_owned(),
            ));
        }
        if self.policy.tier_bands[self.policy.tier_bands.len() - 1].min_score != 0 {
            return Err(ConfigError::Invalid(
                "the lowest tier band must start at score 0".to_owned(),
            ));
        }
        Ok(())
    }
}
