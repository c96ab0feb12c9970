//! Customer list, search and registration

use crate::client::{FleetApi, Transport};
use crate::models::{Customer, CustomerDraft, FormError};
use crate::notify::{report_failure, Notifier};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomersPage {
    pub customers: Vec<Customer>,
    pub search: String,
    pub loading: bool,
    pub dialog_open: bool,
    pub draft: CustomerDraft,
    pub form_error: Option<FormError>,
}

impl CustomersPage {
    pub async fn load<T: Transport>(&mut self, api: &FleetApi<T>, notify: &dyn Notifier) -> bool {
        self.loading = true;
        let result = api.customers().await;
        self.loading = false;
        match result {
            Ok(customers) => {
                self.customers = customers;
                true
            }
            Err(e) => {
                report_failure(notify, &e, "Failed to load customers");
                false
            }
        }
    }

    pub fn filtered(&self) -> Vec<&Customer> {
        self.customers
            .iter()
            .filter(|c| c.matches(&self.search))
            .collect()
    }

    pub fn open_create(&mut self) {
        self.draft = CustomerDraft::default();
        self.form_error = None;
        self.dialog_open = true;
    }

    pub fn close_dialog(&mut self) {
        self.dialog_open = false;
        self.draft = CustomerDraft::default();
        self.form_error = None;
    }

    pub async fn submit<T: Transport>(&mut self, api: &FleetApi<T>, notify: &dyn Notifier) -> bool {
        if let Err(e) = self.draft.validate() {
            notify.error(&e.to_string());
            self.form_error = Some(e);
            return false;
        }

        match api.create_customer(&self.draft).await {
            Ok(_) => {
                self.close_dialog();
                self.load(api, notify).await;
                notify.success("Customer added");
                true
            }
            Err(e) => {
                report_failure(notify, &e, "Failed to add customer");
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
    async fn test_search_and_create() {
        let mock = MockTransport::new();
        mock.respond(
            Method::Get,
            "/api/customers",
            200,
            json!([{"id": "c1", "tc_no": "11111111111", "full_name": "Zeynep Demir",
                    "email": "zeynep@example.com", "phone": "05321234567"}]),
        );
        mock.fail(Method::Post, "/api/customers", 400, "Customer with this TC already exists");
        let api = FleetApi::new(mock.clone());
        let mut page = CustomersPage::default();
        let notify = RecordingNotifier::default();
        page.load(&api, &notify).await;

        page.search = "0532".into();
        assert_eq!(page.filtered().len(), 1);
        page.search = "ahmet".into();
        assert!(page.filtered().is_empty());

        page.open_create();
        page.draft = CustomerDraft {
            tc_no: "11111111111".into(),
            full_name: "Zeynep Demir".into(),
            email: "zeynep@example.com".into(),
            phone: "05321234567".into(),
            ..Default::default()
        };
        assert!(!page.submit(&api, &notify).await);
        assert!(page.dialog_open);
        assert_eq!(notify.errors(), vec!["Customer with this TC already exists"]);
    }
}
