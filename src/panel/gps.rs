//! Live positions of rented vehicles

use std::time::Duration;

use crate::client::{FleetApi, Transport};
use crate::models::VehiclePosition;
use crate::notify::{report_failure, Notifier};

/// How often the tracking page polls while open
pub const GPS_REFRESH_INTERVAL: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GpsPage {
    pub positions: Vec<VehiclePosition>,
    /// Vehicle whose detail card is open
    pub selected: Option<String>,
    pub loading: bool,
}

impl GpsPage {
    /// Fetch positions again. A failed poll keeps the last known positions.
    pub async fn refresh<T: Transport>(&mut self, api: &FleetApi<T>, notify: &dyn Notifier) -> bool {
        self.loading = true;
        let result = api.gps_vehicles().await;
        self.loading = false;
        match result {
            Ok(positions) => {
                self.positions = positions;
                if let Some(id) = &self.selected {
                    if !self.positions.iter().any(|p| &p.vehicle_id == id) {
                        self.selected = None;
                    }
                }
                true
            }
            Err(e) => {
                report_failure(notify, &e, "Failed to load GPS data");
                false
            }
        }
    }

    /// Open the card of `vehicle_id`, or close it when already open
    pub fn toggle(&mut self, vehicle_id: &str) {
        if self.selected.as_deref() == Some(vehicle_id) {
            self.selected = None;
        } else {
            self.selected = Some(vehicle_id.to_string());
        }
    }

    pub fn selected_position(&self) -> Option<&VehiclePosition> {
        let id = self.selected.as_deref()?;
        self.positions.iter().find(|p| p.vehicle_id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::MockTransport;
    use crate::client::Method;
    use crate::notify::RecordingNotifier;
    use serde_json::json;

    fn position(id: &str, plate: &str, speed: u32) -> serde_json::Value {
        json!({"vehicle_id": id, "plate": plate, "lat": 41.0301, "lng": 28.9512,
               "speed": speed, "last_update": "2025-06-10T09:00:00+00:00"})
    }

    #[tokio::test]
    async fn test_refresh_replaces_positions() {
        let mock = MockTransport::new();
        mock.respond(Method::Get, "/api/gps/vehicles", 200, json!([position("v1", "34 ABC 01", 54)]));
        let api = FleetApi::new(mock.clone());
        let notify = RecordingNotifier::default();
        let mut page = GpsPage {
            loading: true,
            ..Default::default()
        };

        assert!(page.refresh(&api, &notify).await);
        assert!(!page.loading);
        assert_eq!(page.positions.len(), 1);
        assert_eq!(page.positions[0].speed, 54.0);
        assert_eq!(page.positions[0].coordinates(), "41.0301, 28.9512");

        mock.respond(
            Method::Get,
            "/api/gps/vehicles",
            200,
            json!([position("v1", "34 ABC 01", 0), position("v2", "06 XYZ 42", 88)]),
        );
        assert!(page.refresh(&api, &notify).await);
        assert_eq!(page.positions.len(), 2);
        assert_eq!(page.positions[0].speed, 0.0);
        assert_eq!(mock.requests_to(Method::Get, "/api/gps/vehicles").len(), 2);
        assert!(notify.errors().is_empty());
    }

    #[tokio::test]
    async fn test_failed_poll_keeps_last_positions() {
        let mock = MockTransport::new();
        mock.respond(Method::Get, "/api/gps/vehicles", 200, json!([position("v1", "34 ABC 01", 54)]));
        let api = FleetApi::new(mock.clone());
        let notify = RecordingNotifier::default();
        let mut page = GpsPage::default();
        page.refresh(&api, &notify).await;

        mock.network_error(Method::Get, "/api/gps/vehicles");
        assert!(!page.refresh(&api, &notify).await);
        assert_eq!(page.positions.len(), 1);
        assert!(!page.loading);
        assert_eq!(notify.errors().len(), 1);
    }

    #[tokio::test]
    async fn test_selection_dropped_when_vehicle_returned() {
        let mock = MockTransport::new();
        mock.respond(
            Method::Get,
            "/api/gps/vehicles",
            200,
            json!([position("v1", "34 ABC 01", 54), position("v2", "06 XYZ 42", 88)]),
        );
        let api = FleetApi::new(mock.clone());
        let notify = RecordingNotifier::default();
        let mut page = GpsPage::default();
        page.refresh(&api, &notify).await;

        page.toggle("v2");
        assert_eq!(page.selected_position().map(|p| p.plate.as_str()), Some("06 XYZ 42"));

        mock.respond(Method::Get, "/api/gps/vehicles", 200, json!([position("v1", "34 ABC 01", 12)]));
        page.refresh(&api, &notify).await;
        assert_eq!(page.selected, None);

        page.toggle("v1");
        page.toggle("v1");
        assert_eq!(page.selected, None);
    }
}
