use tracing::warn;

use crate::client::{FleetApi, Transport};
use crate::models::{PublicTheme, Vehicle};

/// Vehicles shown on the landing page
pub const FEATURED_LIMIT: u32 = 6;

/// Landing page. Both fetches are best-effort: the page renders with the
/// default theme and no featured vehicles rather than an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomePage {
    pub theme: PublicTheme,
    pub featured: Vec<Vehicle>,
    pub loading: bool,
}

impl HomePage {
    pub async fn load<T: Transport>(&mut self, api: &FleetApi<T>) {
        self.loading = true;
        match api.public_theme().await {
            Ok(theme) => self.theme = theme,
            Err(e) => warn!(error = %e, "Public theme unavailable, using defaults"),
        }
        match api.public_vehicles(Some(FEATURED_LIMIT), None).await {
            Ok(vehicles) => self.featured = vehicles,
            Err(e) => warn!(error = %e, "Featured vehicles unavailable"),
        }
        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::MockTransport;
    use crate::client::Method;
    use crate::models::DEFAULT_THEME_ID;
    use serde_json::json;

    #[tokio::test]
    async fn test_home_survives_failures() {
        let mock = MockTransport::new();
        mock.network_error(Method::Get, "/api/public/theme-settings");
        mock.respond(
            Method::Get,
            "/api/public/vehicles",
            200,
            json!([{"id": "v1", "plate": "P", "brand": "Fiat", "model": "Egea", "year": 2024,
                    "segment": "Sedan", "transmission": "manuel", "fuel_type": "dizel",
                    "daily_rate": 950.0, "status": "available"}]),
        );
        let api = FleetApi::new(mock.clone());
        let mut page = HomePage::default();

        page.load(&api).await;
        assert_eq!(page.theme.settings.active_theme_id, DEFAULT_THEME_ID);
        assert_eq!(page.featured.len(), 1);
        assert_eq!(
            mock.requests_to(Method::Get, "/api/public/vehicles")[0].path_and_query(),
            "/api/public/vehicles?limit=6"
        );
    }
}
