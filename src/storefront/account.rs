use crate::client::{FleetApi, Transport};
use crate::models::Reservation;
use crate::notify::{report_failure, Notifier};

/// "My account" page of a signed-in customer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountPage {
    pub reservations: Vec<Reservation>,
    pub loading: bool,
}

impl AccountPage {
    /// The server scopes `/api/reservations` to the customer's own bookings
    pub async fn load<T: Transport>(&mut self, api: &FleetApi<T>, notify: &dyn Notifier) -> bool {
        self.loading = true;
        let result = api.reservations(None).await;
        self.loading = false;
        match result {
            Ok(reservations) => {
                self.reservations = reservations;
                true
            }
            Err(e) => {
                report_failure(notify, &e, "Failed to load your reservations");
                false
            }
        }
    }

    /// Created, confirmed or currently delivered
    pub fn active(&self) -> Vec<&Reservation> {
        self.reservations
            .iter()
            .filter(|r| r.status.is_active())
            .collect()
    }

    pub fn past(&self) -> Vec<&Reservation> {
        self.reservations
            .iter()
            .filter(|r| !r.status.is_active())
            .collect()
    }
}
