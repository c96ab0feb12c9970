//! Public vehicle listing with client-side filters

use std::collections::BTreeSet;

use crate::client::{FleetApi, Transport};
use crate::models::{FuelType, Transmission, Vehicle};
use crate::notify::{report_failure, Notifier};

/// Daily-rate slider bounds
pub const DEFAULT_PRICE_RANGE: (f64, f64) = (0.0, 5000.0);

/// `None` on a select means "all"
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogFilters {
    pub search: String,
    pub segment: Option<String>,
    pub transmission: Option<Transmission>,
    pub fuel_type: Option<FuelType>,
    pub min_rate: f64,
    pub max_rate: f64,
}

impl Default for CatalogFilters {
    fn default() -> Self {
        Self {
            search: String::new(),
            segment: None,
            transmission: None,
            fuel_type: None,
            min_rate: DEFAULT_PRICE_RANGE.0,
            max_rate: DEFAULT_PRICE_RANGE.1,
        }
    }
}

impl CatalogFilters {
    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        let term = self.search.trim().to_lowercase();
        let text = term.is_empty()
            || vehicle.brand.to_lowercase().contains(&term)
            || vehicle.model.to_lowercase().contains(&term);

        text && self
            .segment
            .as_deref()
            .map_or(true, |s| vehicle.segment == s)
            && self.transmission.map_or(true, |t| vehicle.transmission == t)
            && self.fuel_type.map_or(true, |f| vehicle.fuel_type == f)
            && vehicle.daily_rate >= self.min_rate
            && vehicle.daily_rate <= self.max_rate
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogPage {
    pub vehicles: Vec<Vehicle>,
    pub filters: CatalogFilters,
    pub loading: bool,
}

impl CatalogPage {
    pub async fn load<T: Transport>(&mut self, api: &FleetApi<T>, notify: &dyn Notifier) -> bool {
        self.loading = true;
        let result = api.public_vehicles(None, None).await;
        self.loading = false;
        match result {
            Ok(vehicles) => {
                self.vehicles = vehicles;
                true
            }
            Err(e) => {
                report_failure(notify, &e, "Failed to load vehicles");
                false
            }
        }
    }

    pub fn filtered(&self) -> Vec<&Vehicle> {
        self.vehicles
            .iter()
            .filter(|v| self.filters.matches(v))
            .collect()
    }

    /// Distinct segments of the loaded fleet, for the segment select
    pub fn segments(&self) -> Vec<&str> {
        self.vehicles
            .iter()
            .map(|v| v.segment.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn clear_filters(&mut self) {
        self.filters = CatalogFilters::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle(id: &str, brand: &str, segment: &str, transmission: &str, fuel: &str, rate: f64) -> Vehicle {
        serde_json::from_value(serde_json::json!({
            "id": id, "plate": id, "brand": brand, "model": "M", "year": 2023,
            "segment": segment, "transmission": transmission, "fuel_type": fuel,
            "daily_rate": rate, "status": "available"
        }))
        .unwrap()
    }

    fn page() -> CatalogPage {
        CatalogPage {
            vehicles: vec![
                vehicle("v1", "Renault", "Ekonomi", "manuel", "benzin", 750.0),
                vehicle("v2", "BMW", "Lüks", "otomatik", "dizel", 4200.0),
                vehicle("v3", "Toyota", "SUV", "otomatik", "hibrit", 2100.0),
                vehicle("v4", "Mercedes", "Lüks", "otomatik", "benzin", 6500.0),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_default_price_range_hides_expensive() {
        let page = page();
        let ids: Vec<_> = page.filtered().iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["v1", "v2", "v3"]);
    }

    #[test]
    fn test_combined_filters() {
        let mut page = page();
        page.filters.transmission = Some(Transmission::Otomatik);
        page.filters.max_rate = 10_000.0;
        assert_eq!(page.filtered().len(), 3);

        page.filters.segment = Some("Lüks".into());
        page.filters.fuel_type = Some(FuelType::Benzin);
        assert_eq!(page.filtered()[0].id, "v4");

        page.clear_filters();
        assert!(page.filters.is_default());
        page.filters.search = "toy".into();
        assert_eq!(page.filtered()[0].id, "v3");
    }

    #[test]
    fn test_segments_are_distinct() {
        assert_eq!(page().segments(), vec!["Ekonomi", "Lüks", "SUV"]);
    }
}
