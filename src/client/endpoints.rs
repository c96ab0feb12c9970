//! Typed endpoint wrappers

use serde::Serialize;
use serde_json::Value;

use super::{ClientError, FleetApi, Transport};
use crate::models::{
    Company, Customer, CustomerDraft, DashboardStats, Location, LocationForm, LoginRequest,
    NewTicket, Payment, PaymentDraft, PublicTheme, RegisterRequest, Reservation,
    ReservationDraft, ReservationStatus, SupportTicket, Theme, ThemeSettings, TokenResponse, User,
    Vehicle, VehicleDraft, VehiclePosition, VehicleStatus,
};

fn segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

#[derive(Serialize)]
struct ReplyBody<'a> {
    message: &'a str,
}

impl<T: Transport> FleetApi<T> {
    // ---- auth ----

    pub async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, ClientError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.post("/api/auth/login", &body).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<TokenResponse, ClientError> {
        self.post("/api/auth/register", request).await
    }

    pub async fn me(&self) -> Result<User, ClientError> {
        self.get("/api/auth/me").await
    }

    pub async fn company_info(&self) -> Result<Company, ClientError> {
        self.get("/api/company/info").await
    }

    // ---- locations ----

    /// All locations including inactive ones
    pub async fn admin_locations(&self) -> Result<Vec<Location>, ClientError> {
        self.get("/api/locations/admin").await
    }

    pub async fn create_location(&self, form: &LocationForm) -> Result<Value, ClientError> {
        self.post("/api/locations", form).await
    }

    pub async fn update_location(&self, id: &str, form: &LocationForm) -> Result<Value, ClientError> {
        self.put(&format!("/api/locations/{}", segment(id)), form)
            .await
    }

    pub async fn delete_location(&self, id: &str) -> Result<Value, ClientError> {
        self.delete(&format!("/api/locations/{}", segment(id))).await
    }

    // ---- vehicles ----

    pub async fn vehicles(&self, status: Option<VehicleStatus>) -> Result<Vec<Vehicle>, ClientError> {
        let query = status
            .map(|s| vec![("status".to_string(), s.as_str().to_string())])
            .unwrap_or_default();
        self.get_with("/api/vehicles", query).await
    }

    pub async fn create_vehicle(&self, draft: &VehicleDraft) -> Result<Vehicle, ClientError> {
        self.post("/api/vehicles", draft).await
    }

    pub async fn update_vehicle(&self, id: &str, draft: &VehicleDraft) -> Result<Vehicle, ClientError> {
        self.put(&format!("/api/vehicles/{}", segment(id)), draft)
            .await
    }

    pub async fn set_vehicle_status(
        &self,
        id: &str,
        status: VehicleStatus,
    ) -> Result<Value, ClientError> {
        self.patch_query(
            &format!("/api/vehicles/{}/status", segment(id)),
            vec![("status".to_string(), status.as_str().to_string())],
        )
        .await
    }

    // ---- customers ----

    pub async fn customers(&self) -> Result<Vec<Customer>, ClientError> {
        self.get("/api/customers").await
    }

    pub async fn create_customer(&self, draft: &CustomerDraft) -> Result<Customer, ClientError> {
        self.post("/api/customers", draft).await
    }

    // ---- reservations ----

    pub async fn reservations(
        &self,
        status: Option<ReservationStatus>,
    ) -> Result<Vec<Reservation>, ClientError> {
        let query = status
            .map(|s| vec![("status".to_string(), s.as_str().to_string())])
            .unwrap_or_default();
        self.get_with("/api/reservations", query).await
    }

    pub async fn create_reservation(
        &self,
        draft: &ReservationDraft,
    ) -> Result<Reservation, ClientError> {
        self.post("/api/reservations", draft).await
    }

    pub async fn set_reservation_status(
        &self,
        id: &str,
        status: ReservationStatus,
    ) -> Result<Value, ClientError> {
        self.patch_query(
            &format!("/api/reservations/{}/status", segment(id)),
            vec![("status".to_string(), status.as_str().to_string())],
        )
        .await
    }

    // ---- payments & dashboard ----

    pub async fn payments(&self) -> Result<Vec<Payment>, ClientError> {
        self.get("/api/payments").await
    }

    pub async fn create_payment(&self, draft: &PaymentDraft) -> Result<Value, ClientError> {
        self.post("/api/payments", draft).await
    }

    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ClientError> {
        self.get("/api/dashboard/stats").await
    }

    /// Positions of the vehicles currently out on rent
    pub async fn gps_vehicles(&self) -> Result<Vec<VehiclePosition>, ClientError> {
        self.get("/api/gps/vehicles").await
    }

    // ---- support ----

    pub async fn tickets(&self) -> Result<Vec<SupportTicket>, ClientError> {
        self.get("/api/support/tickets").await
    }

    pub async fn ticket(&self, id: &str) -> Result<SupportTicket, ClientError> {
        self.get(&format!("/api/support/tickets/{}", segment(id)))
            .await
    }

    pub async fn create_ticket(&self, ticket: &NewTicket) -> Result<Value, ClientError> {
        self.post("/api/support/tickets", ticket).await
    }

    pub async fn reply_ticket(&self, id: &str, message: &str) -> Result<Value, ClientError> {
        self.post(
            &format!("/api/support/tickets/{}/reply", segment(id)),
            &ReplyBody { message },
        )
        .await
    }

    // ---- themes ----

    pub async fn themes(&self) -> Result<Vec<Theme>, ClientError> {
        self.get("/api/themes").await
    }

    pub async fn theme_settings(&self) -> Result<ThemeSettings, ClientError> {
        self.get("/api/theme-settings").await
    }

    pub async fn save_theme_settings(&self, settings: &ThemeSettings) -> Result<Value, ClientError> {
        self.put("/api/theme-settings", settings).await
    }

    // ---- public site ----

    pub async fn public_vehicles(
        &self,
        limit: Option<u32>,
        segment_filter: Option<&str>,
    ) -> Result<Vec<Vehicle>, ClientError> {
        let mut query = Vec::new();
        if let Some(limit) = limit {
            query.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(segment_filter) = segment_filter.filter(|s| !s.is_empty()) {
            query.push(("segment".to_string(), segment_filter.to_string()));
        }
        self.get_with("/api/public/vehicles", query).await
    }

    pub async fn public_vehicle(&self, id: &str) -> Result<Vehicle, ClientError> {
        self.get(&format!("/api/public/vehicles/{}", segment(id)))
            .await
    }

    pub async fn public_theme(&self) -> Result<PublicTheme, ClientError> {
        self.get("/api/public/theme-settings").await
    }
}

#[cfg(test)]
mod tests {
    use super::super::mock::MockTransport;
    use super::super::Method;
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_status_changes_use_query() {
        let mock = MockTransport::new();
        mock.respond(Method::Patch, "/api/reservations/r1/status", 200, json!({"message": "ok"}));
        mock.respond(Method::Patch, "/api/vehicles/v1/status", 200, json!({"message": "ok"}));
        let api = FleetApi::new(mock.clone());

        api.set_reservation_status("r1", ReservationStatus::Delivered)
            .await
            .unwrap();
        api.set_vehicle_status("v1", VehicleStatus::Service)
            .await
            .unwrap();

        let requests = mock.requests();
        assert_eq!(
            requests[0].path_and_query(),
            "/api/reservations/r1/status?status=delivered"
        );
        assert_eq!(
            requests[1].path_and_query(),
            "/api/vehicles/v1/status?status=service"
        );
        assert!(requests.iter().all(|r| r.body.is_none()));
    }

    #[tokio::test]
    async fn test_public_vehicles_query() {
        let mock = MockTransport::new();
        mock.respond(Method::Get, "/api/public/vehicles", 200, json!([]));
        let api = FleetApi::new(mock.clone());

        api.public_vehicles(Some(6), Some("")).await.unwrap();
        api.public_vehicles(None, Some("SUV")).await.unwrap();

        let requests = mock.requests();
        assert_eq!(requests[0].path_and_query(), "/api/public/vehicles?limit=6");
        assert_eq!(requests[1].path_and_query(), "/api/public/vehicles?segment=SUV");
    }

    #[tokio::test]
    async fn test_reply_body() {
        let mock = MockTransport::new();
        mock.respond(Method::Post, "/api/support/tickets/t1/reply", 200, json!({}));
        let api = FleetApi::new(mock.clone());

        api.reply_ticket("t1", "Thanks").await.unwrap();
        assert_eq!(mock.requests()[0].body, Some(json!({"message": "Thanks"})));
    }
}
