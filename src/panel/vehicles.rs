//! Fleet list, vehicle creation and status changes

use std::collections::HashMap;

use crate::client::{FleetApi, Transport};
use crate::models::{FormError, Vehicle, VehicleDraft, VehicleStatus};
use crate::notify::{report_failure, Notifier};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VehiclesPage {
    pub vehicles: Vec<Vehicle>,
    /// Server-side status filter
    pub status_filter: Option<VehicleStatus>,
    /// Client-side plate/brand/model search
    pub search: String,
    pub loading: bool,
    pub dialog_open: bool,
    pub editing: Option<String>,
    pub draft: VehicleDraft,
    pub form_error: Option<FormError>,
}

impl VehiclesPage {
    pub async fn load<T: Transport>(&mut self, api: &FleetApi<T>, notify: &dyn Notifier) -> bool {
        self.loading = true;
        let result = api.vehicles(self.status_filter).await;
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

    pub async fn set_filter<T: Transport>(
        &mut self,
        api: &FleetApi<T>,
        notify: &dyn Notifier,
        filter: Option<VehicleStatus>,
    ) -> bool {
        self.status_filter = filter;
        self.load(api, notify).await
    }

    pub fn filtered(&self) -> Vec<&Vehicle> {
        let term = self.search.trim().to_lowercase();
        self.vehicles
            .iter()
            .filter(|v| {
                term.is_empty()
                    || v.plate.to_lowercase().contains(&term)
                    || v.brand.to_lowercase().contains(&term)
                    || v.model.to_lowercase().contains(&term)
            })
            .collect()
    }

    pub fn status_counts(&self) -> HashMap<VehicleStatus, usize> {
        let mut counts = HashMap::new();
        for vehicle in &self.vehicles {
            *counts.entry(vehicle.status).or_insert(0) += 1;
        }
        counts
    }

    pub fn open_create(&mut self) {
        self.editing = None;
        self.draft = VehicleDraft::default();
        self.form_error = None;
        self.dialog_open = true;
    }

    pub fn open_edit(&mut self, vehicle: &Vehicle) {
        self.editing = Some(vehicle.id.clone());
        self.draft = VehicleDraft {
            plate: vehicle.plate.clone(),
            brand: vehicle.brand.clone(),
            model: vehicle.model.clone(),
            year: vehicle.year,
            segment: vehicle.segment.clone(),
            transmission: vehicle.transmission,
            fuel_type: vehicle.fuel_type,
            seat_count: vehicle.seat_count,
            door_count: vehicle.door_count,
            daily_rate: vehicle.daily_rate,
            color: vehicle.color.clone(),
            mileage: vehicle.mileage,
            image_url: vehicle.image_url.clone(),
        };
        self.form_error = None;
        self.dialog_open = true;
    }

    pub fn close_dialog(&mut self) {
        self.dialog_open = false;
        self.editing = None;
        self.draft = VehicleDraft::default();
        self.form_error = None;
    }

    pub async fn submit<T: Transport>(&mut self, api: &FleetApi<T>, notify: &dyn Notifier) -> bool {
        if let Err(e) = self.draft.validate() {
            notify.error(&e.to_string());
            self.form_error = Some(e);
            return false;
        }

        let (result, done, failed) = match &self.editing {
            Some(id) => (
                api.update_vehicle(id, &self.draft).await,
                "Vehicle updated",
                "Failed to update vehicle",
            ),
            None => (
                api.create_vehicle(&self.draft).await,
                "Vehicle added",
                "Failed to add vehicle",
            ),
        };

        match result {
            Ok(_) => {
                self.close_dialog();
                self.load(api, notify).await;
                notify.success(done);
                true
            }
            Err(e) => {
                report_failure(notify, &e, failed);
                false
            }
        }
    }

    pub async fn change_status<T: Transport>(
        &mut self,
        api: &FleetApi<T>,
        notify: &dyn Notifier,
        id: &str,
        status: VehicleStatus,
    ) -> bool {
        match api.set_vehicle_status(id, status).await {
            Ok(_) => {
                self.load(api, notify).await;
                notify.success("Vehicle status updated");
                true
            }
            Err(e) => {
                report_failure(notify, &e, "Failed to update vehicle status");
                false
            }
        }
    }
}
