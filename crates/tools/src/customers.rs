use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use crate::registry::Tool;

/// Stored financial profile, keyed by the bank's opaque customer id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub customer_id: String,
    pub credit_score: u16,
    pub annual_income: Decimal,
    pub monthly_debt_payments: Decimal,
    pub account_balance: Decimal,
}

/// In-memory customer lookup. Read-only after construction; an absent id
/// falls back to the default customer (the "logged-in user" of the demo).
pub struct CustomerDirectory {
    customers: HashMap<String, CustomerRecord>,
    default_id: String,
}

impl CustomerDirectory {
    pub fn new(records: Vec<CustomerRecord>, default_id: impl Into<String>) -> Self {
        let customers = records
            .into_iter()
            .map(|record| (record.customer_id.clone(), record))
            .collect();
        Self { customers, default_id: default_id.into() }
    }

    /// The three demo customers the original mock bank shipped with.
    pub fn with_demo_customers() -> Self {
        let record = |id: &str, score: u16, income: i64, debt: i64, balance: i64| {
            CustomerRecord {
                customer_id: id.to_owned(),
                credit_score: score,
                annual_income: Decimal::from(income),
                monthly_debt_payments: Decimal::from(debt),
                account_balance: Decimal::from(balance),
            }
        };

        Self::new(
            vec![
                record("CUST_12345", 720, 85000, 1200, 15000),
                record("CUST_67890", 680, 65000, 800, 8000),
                record("CUST_11111", 760, 95000, 1500, 25000),
            ],
            "CUST_12345",
        )
    }

    pub fn lookup(&self, customer_id: Option<&str>) -> Option<&CustomerRecord> {
        let id = customer_id.unwrap_or(&self.default_id);
        self.customers.get(id)
    }

    pub fn default_id(&self) -> &str {
        &self.default_id
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct CustomerProfileRequest {
    #[serde(default)]
    customer_id: Option<String>,
}

/// `get_customer_profile` — profile lookup for the qualification flow.
pub struct GetCustomerProfileTool {
    directory: Arc<CustomerDirectory>,
}

impl GetCustomerProfileTool {
    pub fn new(directory: Arc<CustomerDirectory>) -> Self {
        Self { directory }
    }
}

#[async_trait]
impl Tool for GetCustomerProfileTool {
    fn name(&self) -> &'static str {
        "get_customer_profile"
    }

    async fn execute(&self, input: Value) -> Result<Value> {
        let request: CustomerProfileRequest =
            serde_json::from_value(input).context("invalid get_customer_profile arguments")?;
        debug!(customer_id = ?request.customer_id, "get_customer_profile called");

        let requested = request.customer_id.as_deref();
        match self.directory.lookup(requested) {
            Some(record) => Ok(serde_json::to_value(record)?),
            None => {
                let id = requested.unwrap_or(self.directory.default_id());
                Ok(json!({ "error": format!("Customer {id} not found") }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CustomerDirectory;

    #[test]
    fn absent_id_falls_back_to_the_default_customer() {
        let directory = CustomerDirectory::with_demo_customers();
        let record = directory.lookup(None).expect("default customer exists");
        assert_eq!(record.customer_id, "CUST_12345");
        assert_eq!(record.credit_score, 720);
    }

    #[test]
    fn unknown_id_is_a_miss() {
        let directory = CustomerDirectory::with_demo_customers();
        assert!(directory.lookup(Some("CUST_99999")).is_none());
        assert_eq!(directory.len(), 3);
    }
}
