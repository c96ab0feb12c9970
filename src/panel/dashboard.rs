use crate::client::{ClientError, FleetApi, Transport};
use crate::models::{DashboardStats, Reservation};
use crate::notify::{report_failure, Notifier};

/// Reservations shown in the "recent" card
pub const RECENT_LIMIT: usize = 5;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardPage {
    pub stats: DashboardStats,
    pub recent: Vec<Reservation>,
    pub loading: bool,
}

impl DashboardPage {
    pub async fn load<T: Transport>(&mut self, api: &FleetApi<T>, notify: &dyn Notifier) -> bool {
        self.loading = true;
        let result = async {
            let stats = api.dashboard_stats().await?;
            let reservations = api.reservations(None).await?;
            Ok::<_, ClientError>((stats, reservations))
        }
        .await;
        self.loading = false;

        match result {
            Ok((stats, reservations)) => {
                self.stats = stats;
                self.recent = reservations.into_iter().take(RECENT_LIMIT).collect();
                true
            }
            Err(e) => {
                report_failure(notify, &e, "Failed to load dashboard data");
                false
            }
        }
    }

    /// `(title, value)` pairs for the stat cards
    pub fn cards(&self) -> [(&'static str, String); 4] {
        [
            ("Total vehicles", self.stats.total_vehicles.to_string()),
            ("Available", self.stats.available_vehicles.to_string()),
            ("Rented", self.stats.rented_vehicles.to_string()),
            ("Active reservations", self.stats.active_reservations.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::MockTransport;
    use crate::client::Method;
    use crate::notify::RecordingNotifier;
    use serde_json::json;

    fn reservation(id: usize) -> serde_json::Value {
        json!({
            "id": format!("r{}", id), "vehicle_id": "v1", "customer_id": "c1",
            "start_date": "2025-06-10T09:00:00Z", "end_date": "2025-06-12T09:00:00Z",
            "status": "created", "total_amount": 100.0
        })
    }

    #[tokio::test]
    async fn test_keeps_first_five_reservations() {
        let mock = MockTransport::new();
        mock.respond(
            Method::Get,
            "/api/dashboard/stats",
            200,
            json!({"total_vehicles": 12, "available_vehicles": 7, "rented_vehicles": 4,
                   "service_vehicles": 1, "total_customers": 30, "active_reservations": 5,
                   "total_revenue": 45000.0, "pending_returns": 2}),
        );
        mock.respond(
            Method::Get,
            "/api/reservations",
            200,
            json!((0..8).map(reservation).collect::<Vec<_>>()),
        );
        let api = FleetApi::new(mock);
        let mut page = DashboardPage::default();

        assert!(page.load(&api, &RecordingNotifier::default()).await);
        assert_eq!(page.recent.len(), RECENT_LIMIT);
        assert_eq!(page.recent[0].id, "r0");
        assert_eq!(page.cards()[1], ("Available", "7".to_string()));
    }

    #[tokio::test]
    async fn test_stats_failure_notifies() {
        let mock = MockTransport::new();
        mock.fail(Method::Get, "/api/dashboard/stats", 500, "");
        let api = FleetApi::new(mock);
        let notify = RecordingNotifier::default();
        let mut page = DashboardPage::default();

        assert!(!page.load(&api, &notify).await);
        assert_eq!(notify.errors(), vec!["Failed to load dashboard data"]);
        assert!(!page.loading);
    }
}
