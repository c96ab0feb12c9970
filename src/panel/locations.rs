//! Pickup/drop-off location management

use tracing::debug;

use crate::client::{FleetApi, Transport};
use crate::models::{FormError, Location, LocationForm};
use crate::notify::{report_failure, Notifier};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationsPage {
    pub locations: Vec<Location>,
    pub loading: bool,
    pub dialog_open: bool,
    /// Id of the location being edited; `None` while creating
    pub editing: Option<String>,
    pub form: LocationForm,
    pub form_error: Option<FormError>,
}

impl LocationsPage {
    pub async fn load<T: Transport>(&mut self, api: &FleetApi<T>, notify: &dyn Notifier) -> bool {
        self.loading = true;
        let result = api.admin_locations().await;
        self.loading = false;
        match result {
            Ok(locations) => {
                debug!(count = locations.len(), "Locations loaded");
                self.locations = locations;
                true
            }
            Err(e) => {
                report_failure(notify, &e, "Failed to load locations");
                false
            }
        }
    }

    pub fn open_create(&mut self) {
        self.reset_form();
        self.dialog_open = true;
    }

    pub fn open_edit(&mut self, location: &Location) {
        self.editing = Some(location.id.clone());
        self.form = LocationForm::from_location(location);
        self.form_error = None;
        self.dialog_open = true;
    }

    pub fn close_dialog(&mut self) {
        self.dialog_open = false;
        self.reset_form();
    }

    fn reset_form(&mut self) {
        self.editing = None;
        self.form = LocationForm::default();
        self.form_error = None;
    }

    /// Create or update from the dialog.
    ///
    /// An incomplete form never reaches the server. A rejected request
    /// keeps the dialog, form and list exactly as they were.
    pub async fn submit<T: Transport>(&mut self, api: &FleetApi<T>, notify: &dyn Notifier) -> bool {
        if let Err(e) = self.form.validate() {
            notify.error(&e.to_string());
            self.form_error = Some(e);
            return false;
        }

        let (result, done, failed) = match &self.editing {
            Some(id) => (
                api.update_location(id, &self.form).await,
                "Location updated",
                "Failed to update location",
            ),
            None => (
                api.create_location(&self.form).await,
                "Location added",
                "Failed to add location",
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

    /// Delete after the user confirmed
    pub async fn delete<T: Transport>(
        &mut self,
        api: &FleetApi<T>,
        notify: &dyn Notifier,
        id: &str,
    ) -> bool {
        match api.delete_location(id).await {
            Ok(_) => {
                self.load(api, notify).await;
                notify.success("Location deleted");
                true
            }
            Err(e) => {
                report_failure(notify, &e, "Failed to delete location");
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

    fn location(id: &str, name: &str) -> serde_json::Value {
        json!({"id": id, "name": name, "city": "Bitlis"})
    }

    async fn loaded_page(mock: &MockTransport) -> (FleetApi<MockTransport>, LocationsPage) {
        mock.respond(Method::Get, "/api/locations/admin", 200, json!([location("l1", "Center")]));
        let api = FleetApi::new(mock.clone());
        let mut page = LocationsPage::default();
        assert!(page.load(&api, &RecordingNotifier::default()).await);
        (api, page)
    }

    #[tokio::test]
    async fn test_empty_required_fields_issue_no_request() {
        let mock = MockTransport::new();
        let (api, mut page) = loaded_page(&mock).await;
        let before = mock.request_count();
        let notify = RecordingNotifier::default();

        page.open_create();
        page.form.city = "Van".into();
        assert!(!page.submit(&api, &notify).await);
        assert_eq!(page.form_error, Some(FormError::Required("name")));

        page.form.name = "Airport".into();
        page.form.city = "  ".into();
        assert!(!page.submit(&api, &notify).await);
        assert_eq!(page.form_error, Some(FormError::Required("city")));

        assert_eq!(mock.request_count(), before);
        assert!(page.dialog_open);
        assert_eq!(notify.errors().len(), 2);
    }

    #[tokio::test]
    async fn test_create_success_refreshes_and_resets() {
        let mock = MockTransport::new();
        let (api, mut page) = loaded_page(&mock).await;
        mock.respond(Method::Post, "/api/locations", 200, location("l2", "Airport"));
        // second queued list is served on the reload
        mock.respond(
            Method::Get,
            "/api/locations/admin",
            200,
            json!([location("l1", "Center"), location("l2", "Airport")]),
        );
        let notify = RecordingNotifier::default();

        page.open_create();
        page.form.name = "Airport".into();
        page.form.city = "Bitlis".into();
        assert!(page.submit(&api, &notify).await);

        assert!(!page.dialog_open);
        assert_eq!(page.form, LocationForm::default());
        assert_eq!(page.locations.len(), 2);
        assert_eq!(notify.successes(), vec!["Location added"]);
        assert_eq!(mock.requests_to(Method::Get, "/api/locations/admin").len(), 2);

        let sent = &mock.requests_to(Method::Post, "/api/locations")[0];
        assert_eq!(sent.body.as_ref().unwrap()["is_pickup"], json!(true));
    }

    #[tokio::test]
    async fn test_update_targets_edited_location() {
        let mock = MockTransport::new();
        let (api, mut page) = loaded_page(&mock).await;
        mock.respond(Method::Put, "/api/locations/l1", 200, location("l1", "Center 2"));
        let notify = RecordingNotifier::default();

        let existing = page.locations[0].clone();
        page.open_edit(&existing);
        assert_eq!(page.form.name, "Center");
        page.form.name = "Center 2".into();
        assert!(page.submit(&api, &notify).await);

        assert_eq!(notify.successes(), vec!["Location updated"]);
        assert!(page.editing.is_none());
    }

    #[tokio::test]
    async fn test_failure_leaves_state_untouched() {
        let mock = MockTransport::new();
        let (api, mut page) = loaded_page(&mock).await;
        mock.fail(Method::Post, "/api/locations", 403, "Insufficient permissions");
        let notify = RecordingNotifier::default();

        page.open_create();
        page.form.name = "Airport".into();
        page.form.city = "Bitlis".into();
        let snapshot = page.clone();

        assert!(!page.submit(&api, &notify).await);
        assert_eq!(page, snapshot);
        assert_eq!(notify.errors(), vec!["Insufficient permissions"]);
        assert!(notify.successes().is_empty());
        assert_eq!(mock.requests_to(Method::Get, "/api/locations/admin").len(), 1);
    }

    #[tokio::test]
    async fn test_delete_refreshes_or_reports() {
        let mock = MockTransport::new();
        let (api, mut page) = loaded_page(&mock).await;
        mock.respond(Method::Delete, "/api/locations/l1", 200, json!({"message": "deleted"}));
        mock.respond(Method::Get, "/api/locations/admin", 200, json!([]));
        let notify = RecordingNotifier::default();

        assert!(page.delete(&api, &notify, "l1").await);
        assert!(page.locations.is_empty());
        assert_eq!(notify.successes(), vec!["Location deleted"]);

        let notify = RecordingNotifier::default();
        mock.network_error(Method::Delete, "/api/locations/l9");
        let snapshot = page.clone();
        assert!(!page.delete(&api, &notify, "l9").await);
        assert_eq!(page, snapshot);
        assert_eq!(notify.errors(), vec!["Failed to delete location"]);
    }
}
