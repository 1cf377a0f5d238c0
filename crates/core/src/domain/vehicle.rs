use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    New,
    Used,
}

/// One catalog entry. Immutable after load: the matcher only ever reads
/// these, and the store exposes no mutation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub model: String,
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub price: u32,
    #[serde(rename = "new_or_used")]
    pub condition: Condition,
    pub dealer_location: String,
    #[serde(default)]
    pub features: Vec<String>,
}
