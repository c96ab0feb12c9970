//! Customers, reservations, payments and dashboard figures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::forms::{require, require_email, FormError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    #[serde(default)]
    pub company_id: Option<String>,
    pub tc_no: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub license_no: Option<String>,
    #[serde(default)]
    pub license_class: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Customer {
    /// Case-insensitive match on name, e-mail, phone or national id
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        term.is_empty()
            || self.full_name.to_lowercase().contains(&term)
            || self.email.to_lowercase().contains(&term)
            || self.phone.contains(&term)
            || self.tc_no.contains(&term)
    }
}

/// Payload for `POST /api/customers`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerDraft {
    pub tc_no: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_class: Option<String>,
}

impl CustomerDraft {
    pub fn validate(&self) -> Result<(), FormError> {
        require("tc_no", &self.tc_no)?;
        let tc = self.tc_no.trim();
        if tc.len() != 11 || !tc.chars().all(|c| c.is_ascii_digit()) {
            return Err(FormError::Invalid {
                field: "tc_no",
                reason: "must be 11 digits".to_string(),
            });
        }
        require("full_name", &self.full_name)?;
        require_email("email", &self.email)?;
        require("phone", &self.phone)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    Created,
    Confirmed,
    Delivered,
    Returned,
    Closed,
    Cancelled,
}

impl ReservationStatus {
    pub const ALL: [ReservationStatus; 6] = [
        ReservationStatus::Created,
        ReservationStatus::Confirmed,
        ReservationStatus::Delivered,
        ReservationStatus::Returned,
        ReservationStatus::Closed,
        ReservationStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Created => "created",
            ReservationStatus::Confirmed => "confirmed",
            ReservationStatus::Delivered => "delivered",
            ReservationStatus::Returned => "returned",
            ReservationStatus::Closed => "closed",
            ReservationStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReservationStatus::Created => "Created",
            ReservationStatus::Confirmed => "Confirmed",
            ReservationStatus::Delivered => "Delivered",
            ReservationStatus::Returned => "Returned",
            ReservationStatus::Closed => "Closed",
            ReservationStatus::Cancelled => "Cancelled",
        }
    }

    /// Still occupying a vehicle
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            ReservationStatus::Created | ReservationStatus::Confirmed | ReservationStatus::Delivered
        )
    }

    /// Status buttons offered on a reservation row
    pub fn next_actions(&self) -> &'static [ReservationStatus] {
        match self {
            ReservationStatus::Created => {
                &[ReservationStatus::Confirmed, ReservationStatus::Cancelled]
            }
            ReservationStatus::Confirmed => {
                &[ReservationStatus::Delivered, ReservationStatus::Cancelled]
            }
            ReservationStatus::Delivered => &[ReservationStatus::Returned],
            ReservationStatus::Returned => &[ReservationStatus::Closed],
            ReservationStatus::Closed | ReservationStatus::Cancelled => &[],
        }
    }
}

impl std::str::FromStr for ReservationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("Unknown reservation status: {}", s))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: String,
    #[serde(default)]
    pub company_id: Option<String>,
    pub vehicle_id: String,
    pub customer_id: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub pickup_location: Option<String>,
    #[serde(default)]
    pub return_location: Option<String>,
    pub status: ReservationStatus,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Embedded vehicle summary, shape owned by the server
    #[serde(default)]
    pub vehicle: Option<serde_json::Value>,
    /// Embedded customer summary, shape owned by the server
    #[serde(default)]
    pub customer: Option<serde_json::Value>,
}

impl Reservation {
    pub fn vehicle_label(&self) -> String {
        self.vehicle
            .as_ref()
            .and_then(|v| {
                let brand = v.get("brand")?.as_str()?;
                let model = v.get("model")?.as_str()?;
                Some(format!("{} {}", brand, model))
            })
            .unwrap_or_else(|| self.vehicle_id.clone())
    }

    pub fn customer_label(&self) -> String {
        self.customer
            .as_ref()
            .and_then(|c| c.get("full_name")?.as_str().map(str::to_string))
            .unwrap_or_else(|| self.customer_id.clone())
    }

    pub fn vehicle_plate(&self) -> Option<&str> {
        self.vehicle.as_ref()?.get("plate")?.as_str()
    }

    /// Search over plate, vehicle and customer labels
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        term.is_empty()
            || self
                .vehicle_plate()
                .map(|p| p.to_lowercase().contains(&term))
                .unwrap_or(false)
            || self.vehicle_label().to_lowercase().contains(&term)
            || self.customer_label().to_lowercase().contains(&term)
    }
}

/// Payload for `POST /api/reservations`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationDraft {
    pub vehicle_id: String,
    pub customer_id: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ReservationDraft {
    pub fn validate(&self) -> Result<(), FormError> {
        require("vehicle_id", &self.vehicle_id)?;
        require("customer_id", &self.customer_id)?;
        if self.end_date <= self.start_date {
            return Err(FormError::Invalid {
                field: "end_date",
                reason: "must be after the pickup date".to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
    Refunded,
    #[serde(other)]
    Unknown,
}

impl PaymentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Completed => "Completed",
            PaymentStatus::Failed => "Failed",
            PaymentStatus::Refunded => "Refunded",
            PaymentStatus::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
    pub reservation_id: String,
    pub amount: f64,
    #[serde(default = "default_payment_type")]
    pub payment_type: String,
    #[serde(default)]
    pub card_holder: Option<String>,
    #[serde(default = "default_payment_status")]
    pub status: PaymentStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Payment {
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        term.is_empty()
            || self.reservation_id.to_lowercase().contains(&term)
            || self
                .card_holder
                .as_deref()
                .map(|h| h.to_lowercase().contains(&term))
                .unwrap_or(false)
    }
}

/// Payload for `POST /api/payments`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentDraft {
    pub reservation_id: String,
    pub amount: f64,
    pub payment_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_holder: Option<String>,
}

impl PaymentDraft {
    pub fn validate(&self) -> Result<(), FormError> {
        require("reservation_id", &self.reservation_id)?;
        if !(self.amount > 0.0) {
            return Err(FormError::Invalid {
                field: "amount",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

/// Headline numbers of `GET /api/dashboard/stats`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_vehicles: u32,
    pub available_vehicles: u32,
    pub rented_vehicles: u32,
    pub service_vehicles: u32,
    pub total_customers: u32,
    pub active_reservations: u32,
    pub total_revenue: f64,
    pub pending_returns: u32,
}

impl DashboardStats {
    /// Share of the fleet currently rented, 0-100
    pub fn utilization_percent(&self) -> f64 {
        if self.total_vehicles == 0 {
            0.0
        } else {
            self.rented_vehicles as f64 * 100.0 / self.total_vehicles as f64
        }
    }
}

fn default_payment_type() -> String {
    "card".to_string()
}

fn default_payment_status() -> PaymentStatus {
    PaymentStatus::Completed
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_customer_draft_validation() {
        let mut draft = CustomerDraft {
            tc_no: "1234567890".into(),
            full_name: "Mehmet Kaya".into(),
            email: "mehmet@example.com".into(),
            phone: "05551112233".into(),
            ..Default::default()
        };
        assert!(matches!(
            draft.validate(),
            Err(FormError::Invalid { field: "tc_no", .. })
        ));

        draft.tc_no = "12345678901".into();
        assert!(draft.validate().is_ok());

        draft.email = "mehmet".into();
        assert_eq!(draft.validate().unwrap_err().field(), "email");
    }

    #[test]
    fn test_reservation_draft_rejects_inverted_dates() {
        let start = Utc.with_ymd_and_hms(2025, 6, 10, 9, 0, 0).unwrap();
        let draft = ReservationDraft {
            vehicle_id: "v1".into(),
            customer_id: "c1".into(),
            start_date: start,
            end_date: start,
            pickup_location: None,
            return_location: None,
            notes: None,
        };
        assert_eq!(draft.validate().unwrap_err().field(), "end_date");
    }

    #[test]
    fn test_reservation_labels_fall_back_to_ids() {
        let json = r#"{
            "id": "r1", "vehicle_id": "v1", "customer_id": "c1",
            "start_date": "2025-06-10T09:00:00Z", "end_date": "2025-06-12T09:00:00Z",
            "status": "confirmed", "total_amount": 1900.0,
            "customer": {"full_name": "Zeynep Demir"}
        }"#;
        let reservation: Reservation = serde_json::from_str(json).unwrap();
        assert_eq!(reservation.vehicle_label(), "v1");
        assert_eq!(reservation.customer_label(), "Zeynep Demir");
        assert!(reservation.matches("zeynep"));
        assert!(reservation.status.is_active());
    }

    #[test]
    fn test_terminal_statuses_offer_no_actions() {
        assert!(ReservationStatus::Closed.next_actions().is_empty());
        assert!(ReservationStatus::Cancelled.next_actions().is_empty());
        assert_eq!(
            ReservationStatus::Delivered.next_actions(),
            &[ReservationStatus::Returned]
        );
    }

    #[test]
    fn test_utilization() {
        let stats = DashboardStats {
            total_vehicles: 8,
            rented_vehicles: 2,
            ..Default::default()
        };
        assert_eq!(stats.utilization_percent(), 25.0);
        assert_eq!(DashboardStats::default().utilization_percent(), 0.0);
    }
}
