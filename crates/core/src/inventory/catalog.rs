use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::domain::vehicle::{Condition, VehicleRecord};
use crate::errors::EngineError;

/// Immutable vehicle inventory. Loaded once, read-only thereafter, safe to
/// share across any number of concurrent readers.
#[derive(Clone, Debug)]
pub struct CatalogStore {
    records: Vec<VehicleRecord>,
    loaded_at: DateTime<Utc>,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::empty()
    }
}

impl CatalogStore {
    pub fn new(records: Vec<VehicleRecord>) -> Self {
        Self { records, loaded_at: Utc::now() }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Parses a JSON array of catalog records.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, EngineError> {
        let records: Vec<VehicleRecord> = serde_json::from_slice(bytes)
            .map_err(|err| EngineError::CatalogUnavailable { reason: err.to_string() })?;
        Ok(Self::new(records))
    }

    pub fn try_from_path(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|err| EngineError::CatalogUnavailable {
            reason: format!("{}: {err}", path.display()),
        })?;
        Self::from_slice(&bytes)
    }

    /// Loading policy for callers that treat an unreadable source as "no
    /// inventory" rather than a fatal error: log and degrade to empty.
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        match Self::try_from_path(&path) {
            Ok(store) => store,
            Err(error) => {
                warn!(path = %path.as_ref().display(), %error, "catalog unavailable, serving empty inventory");
                Self::empty()
            }
        }
    }

    pub fn records(&self) -> &[VehicleRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Embedded demo inventory used by tests and demo callers.
    pub fn sample() -> Self {
        let record = |model: &str,
                      vehicle_type: &str,
                      price: u32,
                      condition: Condition,
                      dealer_location: &str,
                      features: &[&str]| VehicleRecord {
            model: model.to_owned(),
            vehicle_type: vehicle_type.to_owned(),
            price,
            condition,
            dealer_location: dealer_location.to_owned(),
            features: features.iter().map(|feature| (*feature).to_owned()).collect(),
        };

        Self::new(vec![
            record(
                "Skoda Kamiq",
                "compact SUV",
                27500,
                Condition::New,
                "Riverside Skoda",
                &["adaptive cruise control", "lane assist", "heated seats"],
            ),
            record(
                "Honda Civic",
                "sedan",
                24500,
                Condition::New,
                "Downtown Honda",
                &["rear camera", "apple carplay"],
            ),
            record(
                "Honda Civic",
                "sedan",
                18900,
                Condition::Used,
                "City Motors",
                &["rear camera"],
            ),
            record(
                "Toyota RAV4",
                "compact SUV",
                29800,
                Condition::New,
                "Lakeside Toyota",
                &["all wheel drive", "blind spot monitor"],
            ),
            record(
                "Hyundai Kona Electric",
                "EV",
                33200,
                Condition::New,
                "Green Auto Hub",
                &["fast charging", "heat pump"],
            ),
            record(
                "Ford F-150",
                "pickup truck",
                38500,
                Condition::Used,
                "Westside Ford",
                &["tow package"],
            ),
            record(
                "Mazda CX-30",
                "compact SUV",
                26400,
                Condition::New,
                "Bayview Mazda",
                &["heads-up display"],
            ),
            record(
                "Toyota Corolla",
                "sedan",
                16700,
                Condition::Used,
                "City Motors",
                &[],
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::CatalogStore;
    use crate::errors::EngineError;

    #[test]
    fn parses_a_json_array_of_records() {
        let store = CatalogStore::from_slice(
            br#"[
                {"model": "A", "type": "sedan", "price": 10000, "new_or_used": "used", "dealer_location": "X"},
                {"model": "B", "type": "EV", "price": 30000, "new_or_used": "new", "dealer_location": "Y", "features": ["fast charging"]}
            ]"#,
        )
        .expect("valid catalog");

        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[1].features, vec!["fast charging".to_owned()]);
    }

    #[test]
    fn unparseable_source_is_catalog_unavailable() {
        let error = CatalogStore::from_slice(b"not json").expect_err("bad payload");
        assert!(matches!(error, EngineError::CatalogUnavailable { .. }));
    }

    #[test]
    fn missing_file_degrades_to_empty_inventory() {
        let store = CatalogStore::load_or_empty("/definitely/not/here/cars.json");
        assert!(store.is_empty());
    }

    #[test]
    fn malformed_file_degrades_to_empty_inventory() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"{ this is not a catalog }").expect("write");

        let store = CatalogStore::load_or_empty(file.path());
        assert!(store.is_empty());
    }

    #[test]
    fn loads_from_a_real_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(
            br#"[{"model": "A", "type": "sedan", "price": 1, "new_or_used": "new", "dealer_location": "X"}]"#,
        )
        .expect("write");

        let store = CatalogStore::try_from_path(file.path()).expect("readable catalog");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn sample_inventory_is_nonempty_and_priced() {
        let store = CatalogStore::sample();
        assert!(!store.is_empty());
        assert!(store.records().iter().all(|record| record.price > 0));
    }
}
