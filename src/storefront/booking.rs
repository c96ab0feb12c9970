//! Public reservation flow
//!
//! The booking form arrives from a vehicle page as
//! `/rezervasyon?vehicle=<id>&pickup=<rfc3339>&return=<rfc3339>`. Submitting
//! creates (or reuses) the customer record, then the reservation.

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::client::{ClientError, FleetApi, Transport};
use crate::models::{CustomerDraft, FormError, ReservationDraft, User, Vehicle};
use crate::notify::{report_failure, Notifier};
use crate::quote::{DayRounding, Quote};

pub const CONSENT_REQUIRED: &str = "Please accept the rental terms and the privacy notice";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BookingStep {
    #[default]
    Details,
    Confirmed,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingPage {
    pub vehicle_id: String,
    pub pickup: Option<DateTime<Utc>>,
    pub return_date: Option<DateTime<Utc>>,
    pub vehicle: Option<Vehicle>,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub tc_no: String,
    pub pickup_location: String,
    pub return_location: String,
    pub notes: String,
    pub terms_accepted: bool,
    pub kvkk_accepted: bool,
    pub loading: bool,
    pub submitting: bool,
    pub step: BookingStep,
}

fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|d| d.with_timezone(&Utc))
        .ok()
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl BookingPage {
    /// Build the form from the query string of the booking URL
    pub fn from_query(query: &str) -> Self {
        let mut page = Self::default();
        for pair in query.trim_start_matches('?').split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            let value = match urlencoding::decode(value) {
                Ok(value) => value.into_owned(),
                Err(_) => continue,
            };
            match key {
                "vehicle" => page.vehicle_id = value,
                "pickup" => page.pickup = parse_date(&value),
                "return" => page.return_date = parse_date(&value),
                _ => {}
            }
        }
        page
    }

    /// Fill contact fields from a signed-in customer
    pub fn prefill(&mut self, user: &User) {
        self.full_name = user.full_name.clone();
        self.email = user.email.clone();
        self.phone = user.phone.clone().unwrap_or_default();
    }

    pub async fn load<T: Transport>(&mut self, api: &FleetApi<T>, notify: &dyn Notifier) -> bool {
        if self.vehicle_id.is_empty() {
            return false;
        }
        self.loading = true;
        let result = api.public_vehicle(&self.vehicle_id).await;
        self.loading = false;
        match result {
            Ok(vehicle) => {
                self.vehicle = Some(vehicle);
                true
            }
            Err(e) => {
                report_failure(notify, &e, "Failed to load vehicle");
                false
            }
        }
    }

    /// Whole days between pickup and return, at least one
    pub fn quote(&self) -> Option<Quote> {
        let vehicle = self.vehicle.as_ref()?;
        Some(Quote::new(
            self.pickup?,
            self.return_date?,
            vehicle.daily_rate,
            DayRounding::Floor,
        ))
    }

    fn customer_draft(&self) -> CustomerDraft {
        CustomerDraft {
            tc_no: self.tc_no.trim().to_string(),
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            ..Default::default()
        }
    }

    /// Vehicle and a pickup strictly before the return
    fn trip(&self) -> Result<(DateTime<Utc>, DateTime<Utc>), FormError> {
        if self.vehicle_id.trim().is_empty() {
            return Err(FormError::Required("vehicle"));
        }
        let start = self.pickup.ok_or(FormError::Required("pickup date"))?;
        let end = self.return_date.ok_or(FormError::Required("return date"))?;
        if end <= start {
            return Err(FormError::Invalid {
                field: "return date",
                reason: "must be after the pickup date".to_string(),
            });
        }
        Ok((start, end))
    }

    fn reservation_draft(
        &self,
        customer_id: String,
        (start_date, end_date): (DateTime<Utc>, DateTime<Utc>),
    ) -> ReservationDraft {
        ReservationDraft {
            vehicle_id: self.vehicle_id.clone(),
            customer_id,
            start_date,
            end_date,
            pickup_location: optional(&self.pickup_location),
            return_location: optional(&self.return_location),
            notes: optional(&self.notes),
        }
    }

    /// Create the customer, or find an existing one by e-mail when the
    /// server refuses the duplicate
    async fn resolve_customer<T: Transport>(
        &self,
        api: &FleetApi<T>,
        draft: &CustomerDraft,
    ) -> Result<String, ClientError> {
        let create_error = match api.create_customer(draft).await {
            Ok(customer) => return Ok(customer.id),
            Err(e) => e,
        };
        warn!(error = %create_error, "Customer create refused, looking up by e-mail");
        let customers = api.customers().await?;
        customers
            .into_iter()
            .find(|c| c.email == draft.email)
            .map(|c| c.id)
            .ok_or(create_error)
    }

    pub async fn submit<T: Transport>(&mut self, api: &FleetApi<T>, notify: &dyn Notifier) -> bool {
        if !self.terms_accepted || !self.kvkk_accepted {
            notify.error(CONSENT_REQUIRED);
            return false;
        }
        let customer = self.customer_draft();
        let trip = match customer.validate().and_then(|_| self.trip()) {
            Ok(trip) => trip,
            Err(e) => {
                notify.error(&e.to_string());
                return false;
            }
        };

        self.submitting = true;
        let result = async {
            let customer_id = self.resolve_customer(api, &customer).await?;
            api.create_reservation(&self.reservation_draft(customer_id, trip))
                .await
        }
        .await;
        self.submitting = false;

        match result {
            Ok(reservation) => {
                info!(reservation = %reservation.id, "Booking created");
                self.step = BookingStep::Confirmed;
                notify.success("Your reservation has been created");
                true
            }
            Err(e) => {
                report_failure(notify, &e, "Reservation could not be created");
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
    use crate::session::sample_user;
    use serde_json::json;

    const QUERY: &str = "?vehicle=v1&pickup=2025-07-01T10%3A00%3A00.000Z&return=2025-07-04T09%3A00%3A00.000Z";

    fn ready(mock: &MockTransport) -> BookingPage {
        mock.respond(
            Method::Get,
            "/api/public/vehicles/v1",
            200,
            json!({"id": "v1", "plate": "P", "brand": "Fiat", "model": "Egea", "year": 2024,
                   "segment": "Sedan", "transmission": "manuel", "fuel_type": "dizel",
                   "daily_rate": 900.0, "status": "available"}),
        );
        let mut page = BookingPage::from_query(QUERY);
        page.full_name = "Ayşe Yılmaz".into();
        page.email = "ayse@example.com".into();
        page.phone = "05551112233".into();
        page.tc_no = "12345678901".into();
        page
    }

    fn reservation() -> serde_json::Value {
        json!({"id": "r1", "vehicle_id": "v1", "customer_id": "c7",
               "start_date": "2025-07-01T10:00:00Z", "end_date": "2025-07-04T09:00:00Z",
               "status": "created", "total_amount": 1800.0})
    }

    #[tokio::test]
    async fn test_query_and_floor_quote() {
        let mock = MockTransport::new();
        let mut page = ready(&mock);
        let api = FleetApi::new(mock);
        page.load(&api, &RecordingNotifier::default()).await;

        assert_eq!(page.vehicle_id, "v1");
        let quote = page.quote().unwrap();
        assert_eq!(quote.days, 2);
        assert_eq!(quote.total, 1800.0);
    }

    #[tokio::test]
    async fn test_consent_required() {
        let mock = MockTransport::new();
        let mut page = ready(&mock);
        let api = FleetApi::new(mock.clone());
        let notify = RecordingNotifier::default();
        page.terms_accepted = true;

        assert!(!page.submit(&api, &notify).await);
        assert_eq!(notify.errors(), vec![CONSENT_REQUIRED]);
        assert_eq!(mock.request_count(), 0);
    }

    #[tokio::test]
    async fn test_new_customer_then_reservation() {
        let mock = MockTransport::new();
        let mut page = ready(&mock);
        mock.respond(
            Method::Post,
            "/api/customers",
            200,
            json!({"id": "c7", "tc_no": "12345678901", "full_name": "Ayşe Yılmaz",
                   "email": "ayse@example.com", "phone": "05551112233"}),
        );
        mock.respond(Method::Post, "/api/reservations", 200, reservation());
        let api = FleetApi::new(mock.clone());
        let notify = RecordingNotifier::default();
        page.terms_accepted = true;
        page.kvkk_accepted = true;

        assert!(page.submit(&api, &notify).await);
        assert_eq!(page.step, BookingStep::Confirmed);
        let body = mock.requests_to(Method::Post, "/api/reservations")[0]
            .body
            .clone()
            .unwrap();
        assert_eq!(body["customer_id"], json!("c7"));
        assert_eq!(body["vehicle_id"], json!("v1"));
    }

    #[tokio::test]
    async fn test_existing_customer_is_reused() {
        let mock = MockTransport::new();
        let mut page = ready(&mock);
        mock.fail(Method::Post, "/api/customers", 400, "Customer with this TC already exists");
        mock.respond(
            Method::Get,
            "/api/customers",
            200,
            json!([{"id": "c3", "tc_no": "12345678901", "full_name": "Ayşe Yılmaz",
                    "email": "ayse@example.com", "phone": "05551112233"}]),
        );
        mock.respond(Method::Post, "/api/reservations", 200, reservation());
        let api = FleetApi::new(mock.clone());
        let notify = RecordingNotifier::default();
        page.terms_accepted = true;
        page.kvkk_accepted = true;

        assert!(page.submit(&api, &notify).await);
        let body = mock.requests_to(Method::Post, "/api/reservations")[0]
            .body
            .clone()
            .unwrap();
        assert_eq!(body["customer_id"], json!("c3"));
    }

    #[tokio::test]
    async fn test_unknown_customer_reports_create_error() {
        let mock = MockTransport::new();
        let mut page = ready(&mock);
        mock.fail(Method::Post, "/api/customers", 400, "Customer with this TC already exists");
        mock.respond(Method::Get, "/api/customers", 200, json!([]));
        let api = FleetApi::new(mock.clone());
        let notify = RecordingNotifier::default();
        page.terms_accepted = true;
        page.kvkk_accepted = true;

        assert!(!page.submit(&api, &notify).await);
        assert_eq!(page.step, BookingStep::Details);
        assert_eq!(notify.errors(), vec!["Customer with this TC already exists"]);
        assert!(mock.requests_to(Method::Post, "/api/reservations").is_empty());
    }

    #[test]
    fn test_prefill_from_customer() {
        let mut user = sample_user(crate::models::Role::Musteri);
        user.phone = Some("05000000000".into());
        let mut page = BookingPage::default();
        page.prefill(&user);
        assert_eq!(page.email, user.email);
        assert_eq!(page.phone, "05000000000");
    }
}
