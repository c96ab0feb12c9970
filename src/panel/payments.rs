//! Payment list, revenue totals and payment recording

use crate::client::{FleetApi, Transport};
use crate::models::{Payment, PaymentDraft, PaymentStatus};
use crate::notify::{report_failure, Notifier};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentsPage {
    pub payments: Vec<Payment>,
    pub search: String,
    pub loading: bool,
}

impl PaymentsPage {
    pub async fn load<T: Transport>(&mut self, api: &FleetApi<T>, notify: &dyn Notifier) -> bool {
        self.loading = true;
        let result = api.payments().await;
        self.loading = false;
        match result {
            Ok(payments) => {
                self.payments = payments;
                true
            }
            Err(e) => {
                report_failure(notify, &e, "Failed to load payments");
                false
            }
        }
    }

    pub fn filtered(&self) -> Vec<&Payment> {
        self.payments
            .iter()
            .filter(|p| p.matches(&self.search))
            .collect()
    }

    fn completed(&self) -> impl Iterator<Item = &Payment> {
        self.payments
            .iter()
            .filter(|p| p.status == PaymentStatus::Completed)
    }

    /// Revenue from completed payments only
    pub fn completed_revenue(&self) -> f64 {
        self.completed().map(|p| p.amount).sum()
    }

    pub fn completed_count(&self) -> usize {
        self.completed().count()
    }

    pub async fn record<T: Transport>(
        &mut self,
        api: &FleetApi<T>,
        notify: &dyn Notifier,
        draft: &PaymentDraft,
    ) -> bool {
        if let Err(e) = draft.validate() {
            notify.error(&e.to_string());
            return false;
        }
        match api.create_payment(draft).await {
            Ok(_) => {
                self.load(api, notify).await;
                notify.success("Payment recorded");
                true
            }
            Err(e) => {
                report_failure(notify, &e, "Failed to record payment");
                false
            }
        }
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
    async fn test_revenue_counts_completed_only() {
        let mock = MockTransport::new();
        mock.respond(
            Method::Get,
            "/api/payments",
            200,
            json!([
                {"id": "p1", "reservation_id": "r1", "amount": 1500.0, "status": "completed", "card_holder": "ALI VELI"},
                {"id": "p2", "reservation_id": "r2", "amount": 900.0, "status": "refunded"},
                {"id": "p3", "reservation_id": "r3", "amount": 250.5}
            ]),
        );
        let api = FleetApi::new(mock);
        let mut page = PaymentsPage::default();
        page.load(&api, &RecordingNotifier::default()).await;

        assert_eq!(page.completed_revenue(), 1750.5);
        assert_eq!(page.completed_count(), 2);

        page.search = "ali".into();
        assert_eq!(page.filtered().len(), 1);
        page.search = "r2".into();
        assert_eq!(page.filtered()[0].id, "p2");
    }

    fn draft() -> PaymentDraft {
        PaymentDraft {
            reservation_id: "r1".into(),
            amount: 2400.0,
            payment_type: "card".into(),
            card_holder: Some("AYSE YILMAZ".into()),
        }
    }

    #[tokio::test]
    async fn test_record_posts_and_reloads() {
        let mock = MockTransport::new();
        mock.respond(Method::Get, "/api/payments", 200, json!([]));
        mock.respond(
            Method::Post,
            "/api/payments",
            200,
            json!({"id": "p9", "reservation_id": "r1", "amount": 2400.0, "status": "completed"}),
        );
        mock.respond(
            Method::Get,
            "/api/payments",
            200,
            json!([{"id": "p9", "reservation_id": "r1", "amount": 2400.0, "status": "completed"}]),
        );
        let api = FleetApi::new(mock.clone());
        let notify = RecordingNotifier::default();
        let mut page = PaymentsPage::default();
        page.load(&api, &notify).await;

        assert!(page.record(&api, &notify, &draft()).await);
        let body = mock.requests_to(Method::Post, "/api/payments")[0]
            .body
            .clone()
            .unwrap();
        assert_eq!(
            body,
            json!({"reservation_id": "r1", "amount": 2400.0, "payment_type": "card", "card_holder": "AYSE YILMAZ"})
        );
        assert_eq!(mock.requests_to(Method::Get, "/api/payments").len(), 2);
        assert_eq!(page.payments.len(), 1);
        assert_eq!(notify.successes(), vec!["Payment recorded"]);
    }

    #[tokio::test]
    async fn test_record_rejects_invalid_amount() {
        let mock = MockTransport::new();
        let api = FleetApi::new(mock.clone());
        let notify = RecordingNotifier::default();
        let mut page = PaymentsPage::default();

        let mut zero = draft();
        zero.amount = 0.0;
        assert!(!page.record(&api, &notify, &zero).await);
        assert_eq!(mock.request_count(), 0);
        assert_eq!(notify.errors(), vec!["amount must be greater than zero"]);
    }

    #[tokio::test]
    async fn test_record_failure_keeps_list() {
        let mock = MockTransport::new();
        mock.respond(
            Method::Get,
            "/api/payments",
            200,
            json!([{"id": "p1", "reservation_id": "r0", "amount": 100.0, "status": "completed"}]),
        );
        mock.fail(Method::Post, "/api/payments", 400, "Reservation not found");
        let api = FleetApi::new(mock.clone());
        let notify = RecordingNotifier::default();
        let mut page = PaymentsPage::default();
        page.load(&api, &notify).await;
        let before = page.clone();

        assert!(!page.record(&api, &notify, &draft()).await);
        assert_eq!(page, before);
        assert_eq!(mock.requests_to(Method::Get, "/api/payments").len(), 1);
        assert_eq!(notify.errors(), vec!["Reservation not found"]);
        assert!(notify.successes().is_empty());
    }
}
