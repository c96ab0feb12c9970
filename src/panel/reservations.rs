//! Reservation list, status workflow and the staff booking form

use chrono::{DateTime, Utc};

use crate::client::{ClientError, FleetApi, Transport};
use crate::models::{
    Customer, FormError, Reservation, ReservationDraft, ReservationStatus, Vehicle, VehicleStatus,
};
use crate::notify::{report_failure, Notifier};
use crate::quote::{DayRounding, Quote};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReservationsPage {
    pub reservations: Vec<Reservation>,
    pub status_filter: Option<ReservationStatus>,
    pub search: String,
    pub loading: bool,
}

impl ReservationsPage {
    pub async fn load<T: Transport>(&mut self, api: &FleetApi<T>, notify: &dyn Notifier) -> bool {
        self.loading = true;
        let result = api.reservations(self.status_filter).await;
        self.loading = false;
        match result {
            Ok(reservations) => {
                self.reservations = reservations;
                true
            }
            Err(e) => {
                report_failure(notify, &e, "Failed to load reservations");
                false
            }
        }
    }

    pub async fn set_filter<T: Transport>(
        &mut self,
        api: &FleetApi<T>,
        notify: &dyn Notifier,
        filter: Option<ReservationStatus>,
    ) -> bool {
        self.status_filter = filter;
        self.load(api, notify).await
    }

    pub fn filtered(&self) -> Vec<&Reservation> {
        self.reservations
            .iter()
            .filter(|r| r.matches(&self.search))
            .collect()
    }

    /// Move a reservation along its workflow; the server enforces legal transitions
    pub async fn update_status<T: Transport>(
        &mut self,
        api: &FleetApi<T>,
        notify: &dyn Notifier,
        id: &str,
        status: ReservationStatus,
    ) -> bool {
        match api.set_reservation_status(id, status).await {
            Ok(_) => {
                self.load(api, notify).await;
                notify.success("Reservation status updated");
                true
            }
            Err(e) => {
                report_failure(notify, &e, "Failed to update reservation status");
                false
            }
        }
    }
}

/// Staff-side reservation form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewReservationPage {
    /// Only vehicles currently available
    pub vehicles: Vec<Vehicle>,
    pub customers: Vec<Customer>,
    pub vehicle_id: String,
    pub customer_id: String,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub pickup_location: String,
    pub return_location: String,
    pub notes: String,
    pub loading: bool,
    pub saving: bool,
}

impl NewReservationPage {
    pub async fn load<T: Transport>(&mut self, api: &FleetApi<T>, notify: &dyn Notifier) -> bool {
        self.loading = true;
        let result = async {
            let vehicles = api.vehicles(Some(VehicleStatus::Available)).await?;
            let customers = api.customers().await?;
            Ok::<_, ClientError>((vehicles, customers))
        }
        .await;
        self.loading = false;

        match result {
            Ok((vehicles, customers)) => {
                self.vehicles = vehicles;
                self.customers = customers;
                true
            }
            Err(e) => {
                report_failure(notify, &e, "Failed to load form data");
                false
            }
        }
    }

    pub fn selected_vehicle(&self) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == self.vehicle_id)
    }

    /// Estimate for the summary box; any started day is billed
    pub fn quote(&self) -> Option<Quote> {
        let vehicle = self.selected_vehicle()?;
        Some(Quote::new(
            self.start_date?,
            self.end_date?,
            vehicle.daily_rate,
            DayRounding::Ceil,
        ))
    }

    pub fn draft(&self) -> Result<ReservationDraft, FormError> {
        let start_date = self.start_date.ok_or(FormError::Required("start_date"))?;
        let end_date = self.end_date.ok_or(FormError::Required("end_date"))?;
        let optional = |s: &str| {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        };
        let draft = ReservationDraft {
            vehicle_id: self.vehicle_id.clone(),
            customer_id: self.customer_id.clone(),
            start_date,
            end_date,
            pickup_location: optional(&self.pickup_location),
            return_location: optional(&self.return_location),
            notes: optional(&self.notes),
        };
        draft.validate()?;
        Ok(draft)
    }

    /// Returns `true` once the reservation exists; the caller then leaves the page
    pub async fn submit<T: Transport>(&mut self, api: &FleetApi<T>, notify: &dyn Notifier) -> bool {
        let draft = match self.draft() {
            Ok(draft) => draft,
            Err(e) => {
                notify.error(&e.to_string());
                return false;
            }
        };

        self.saving = true;
        let result = api.create_reservation(&draft).await;
        self.saving = false;
        match result {
            Ok(_) => {
                notify.success("Reservation created");
                true
            }
            Err(e) => {
                report_failure(notify, &e, "Failed to create reservation");
                false
            }
        }
    }
}
