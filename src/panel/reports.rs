//! Business summary built from the dashboard figures

use crate::client::{FleetApi, Transport};
use crate::models::DashboardStats;
use crate::notify::{report_failure, Notifier};

/// One number on the reports page
#[derive(Debug, Clone, PartialEq)]
pub struct ReportFigure {
    pub label: &'static str,
    pub value: f64,
    /// Formatted as money by the view
    pub money: bool,
}

impl ReportFigure {
    fn count(label: &'static str, value: u32) -> Self {
        Self {
            label,
            value: value as f64,
            money: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportsPage {
    pub stats: DashboardStats,
    pub loading: bool,
}

impl ReportsPage {
    pub async fn load<T: Transport>(&mut self, api: &FleetApi<T>, notify: &dyn Notifier) -> bool {
        self.loading = true;
        let result = api.dashboard_stats().await;
        self.loading = false;
        match result {
            Ok(stats) => {
                self.stats = stats;
                true
            }
            Err(e) => {
                report_failure(notify, &e, "Failed to load reports");
                false
            }
        }
    }

    /// Headline row: revenue, fleet size, open reservations, customers
    pub fn summary(&self) -> [ReportFigure; 4] {
        [
            ReportFigure {
                label: "Total revenue",
                value: self.stats.total_revenue,
                money: true,
            },
            ReportFigure::count("Total vehicles", self.stats.total_vehicles),
            ReportFigure::count("Active reservations", self.stats.active_reservations),
            ReportFigure::count("Customers", self.stats.total_customers),
        ]
    }

    /// Fleet state breakdown
    pub fn fleet(&self) -> [ReportFigure; 3] {
        [
            ReportFigure::count("Available", self.stats.available_vehicles),
            ReportFigure::count("Pending returns", self.stats.pending_returns),
            ReportFigure::count("In service", self.stats.service_vehicles),
        ]
    }

    /// Rented share of the fleet, rounded to a whole percent
    pub fn utilization(&self) -> u32 {
        self.stats.utilization_percent().round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::MockTransport;
    use crate::client::Method;
    use crate::notify::RecordingNotifier;
    use serde_json::json;

    #[tokio::test]
    async fn test_load_builds_figures() {
        let mock = MockTransport::new();
        mock.respond(
            Method::Get,
            "/api/dashboard/stats",
            200,
            json!({"total_vehicles": 12, "available_vehicles": 7, "rented_vehicles": 4,
                   "service_vehicles": 1, "total_customers": 30, "active_reservations": 5,
                   "total_revenue": 45000.0, "pending_returns": 2}),
        );
        let api = FleetApi::new(mock);
        let notify = RecordingNotifier::default();
        let mut page = ReportsPage {
            loading: true,
            ..Default::default()
        };

        assert!(page.load(&api, &notify).await);
        assert!(!page.loading);

        let summary = page.summary();
        assert_eq!(summary[0].value, 45000.0);
        assert!(summary[0].money);
        assert_eq!(summary[3].label, "Customers");
        assert_eq!(summary[3].value, 30.0);
        assert_eq!(page.fleet()[1].value, 2.0);
        assert_eq!(page.utilization(), 33);
    }

    #[tokio::test]
    async fn test_failure_reports_and_keeps_zeroes() {
        let mock = MockTransport::new();
        mock.fail(Method::Get, "/api/dashboard/stats", 403, "Insufficient permissions");
        let api = FleetApi::new(mock);
        let notify = RecordingNotifier::default();
        let mut page = ReportsPage::default();

        assert!(!page.load(&api, &notify).await);
        assert_eq!(notify.errors(), vec!["Insufficient permissions"]);
        assert_eq!(page.utilization(), 0);
    }
}
