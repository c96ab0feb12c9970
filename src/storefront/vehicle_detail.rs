use chrono::{DateTime, SecondsFormat, Utc};

use crate::access::public_paths;
use crate::client::{FleetApi, Transport};
use crate::models::{FormError, Vehicle};
use crate::notify::{report_failure, Notifier};
use crate::quote::{DayRounding, Quote};

/// Link from a vehicle page to the booking form
pub fn booking_url(vehicle_id: &str, pickup: DateTime<Utc>, return_date: DateTime<Utc>) -> String {
    format!(
        "{}?vehicle={}&pickup={}&return={}",
        public_paths::BOOKING,
        urlencoding::encode(vehicle_id),
        urlencoding::encode(&pickup.to_rfc3339_opts(SecondsFormat::Millis, true)),
        urlencoding::encode(&return_date.to_rfc3339_opts(SecondsFormat::Millis, true)),
    )
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VehicleDetailPage {
    pub vehicle: Option<Vehicle>,
    pub pickup: Option<DateTime<Utc>>,
    pub return_date: Option<DateTime<Utc>>,
    pub loading: bool,
    pub not_found: bool,
}

impl VehicleDetailPage {
    pub async fn load<T: Transport>(
        &mut self,
        api: &FleetApi<T>,
        notify: &dyn Notifier,
        id: &str,
    ) -> bool {
        self.loading = true;
        let result = api.public_vehicle(id).await;
        self.loading = false;
        match result {
            Ok(vehicle) => {
                self.vehicle = Some(vehicle);
                self.not_found = false;
                true
            }
            Err(e) => {
                self.not_found = e.is_not_found();
                report_failure(notify, &e, "Failed to load vehicle");
                false
            }
        }
    }

    pub fn quote(&self) -> Option<Quote> {
        let vehicle = self.vehicle.as_ref()?;
        Some(Quote::new(
            self.pickup?,
            self.return_date?,
            vehicle.daily_rate,
            DayRounding::Floor,
        ))
    }

    /// Where "Book now" leads; both dates must be picked first
    pub fn reserve(&self) -> Result<String, FormError> {
        let vehicle = self.vehicle.as_ref().ok_or(FormError::Required("vehicle"))?;
        let pickup = self.pickup.ok_or(FormError::Required("pickup date"))?;
        let return_date = self.return_date.ok_or(FormError::Required("return date"))?;
        Ok(booking_url(&vehicle.id, pickup, return_date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::MockTransport;
    use crate::client::Method;
    use crate::notify::RecordingNotifier;
    use chrono::TimeZone;
    use serde_json::json;

    #[tokio::test]
    async fn test_detail_quote_and_booking_link() {
        let mock = MockTransport::new();
        mock.respond(
            Method::Get,
            "/api/public/vehicles/v1",
            200,
            json!({"id": "v1", "plate": "P", "brand": "Fiat", "model": "Egea", "year": 2024,
                   "segment": "Sedan", "transmission": "manuel", "fuel_type": "dizel",
                   "daily_rate": 1000.0, "status": "available"}),
        );
        let api = FleetApi::new(mock);
        let notify = RecordingNotifier::default();
        let mut page = VehicleDetailPage::default();
        assert!(page.load(&api, &notify, "v1").await);

        assert_eq!(page.reserve(), Err(FormError::Required("pickup date")));

        let pickup = Utc.with_ymd_and_hms(2025, 7, 1, 10, 0, 0).unwrap();
        page.pickup = Some(pickup);
        page.return_date = Some(pickup + chrono::Duration::hours(60));
        assert_eq!(page.quote().unwrap().days, 2);
        assert_eq!(page.quote().unwrap().total, 2000.0);
        assert_eq!(
            page.reserve().unwrap(),
            "/rezervasyon?vehicle=v1&pickup=2025-07-01T10%3A00%3A00.000Z&return=2025-07-03T22%3A00%3A00.000Z"
        );
    }

    #[tokio::test]
    async fn test_missing_vehicle() {
        let api = FleetApi::new(MockTransport::new());
        let notify = RecordingNotifier::default();
        let mut page = VehicleDetailPage::default();

        assert!(!page.load(&api, &notify, "gone").await);
        assert!(page.not_found);
        assert_eq!(notify.errors(), vec!["Not Found"]);
    }
}
