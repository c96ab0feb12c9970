//! Support tickets from the company side

use crate::client::{FleetApi, Transport};
use crate::models::{NewTicket, SupportTicket};
use crate::notify::{report_failure, Notifier};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SupportPage {
    pub tickets: Vec<SupportTicket>,
    pub loading: bool,
    pub create_open: bool,
    pub new_ticket: NewTicket,
    /// Ticket open in the detail dialog, with its messages
    pub selected: Option<SupportTicket>,
    pub reply: String,
}

impl SupportPage {
    pub async fn load<T: Transport>(&mut self, api: &FleetApi<T>, notify: &dyn Notifier) -> bool {
        self.loading = true;
        let result = api.tickets().await;
        self.loading = false;
        match result {
            Ok(tickets) => {
                self.tickets = tickets;
                true
            }
            Err(e) => {
                report_failure(notify, &e, "Failed to load tickets");
                false
            }
        }
    }

    pub async fn create<T: Transport>(&mut self, api: &FleetApi<T>, notify: &dyn Notifier) -> bool {
        if let Err(e) = self.new_ticket.validate() {
            notify.error(&e.to_string());
            return false;
        }
        match api.create_ticket(&self.new_ticket).await {
            Ok(created) => {
                let number = created
                    .get("ticket_number")
                    .and_then(|n| n.as_str())
                    .map(str::to_string);
                self.create_open = false;
                self.new_ticket = NewTicket::default();
                self.load(api, notify).await;
                match number {
                    Some(number) => notify.success(&format!("Ticket {} created", number)),
                    None => notify.success("Ticket created"),
                }
                true
            }
            Err(e) => {
                report_failure(notify, &e, "Failed to create ticket");
                false
            }
        }
    }

    pub async fn open<T: Transport>(
        &mut self,
        api: &FleetApi<T>,
        notify: &dyn Notifier,
        id: &str,
    ) -> bool {
        match api.ticket(id).await {
            Ok(ticket) => {
                self.selected = Some(ticket);
                self.reply.clear();
                true
            }
            Err(e) => {
                report_failure(notify, &e, "Failed to load ticket");
                false
            }
        }
    }

    pub fn close(&mut self) {
        self.selected = None;
        self.reply.clear();
    }

    /// Send the reply box, then refresh the ticket and the list
    pub async fn send_reply<T: Transport>(
        &mut self,
        api: &FleetApi<T>,
        notify: &dyn Notifier,
    ) -> bool {
        let Some(ticket) = &self.selected else {
            return false;
        };
        let message = self.reply.trim();
        if message.is_empty() {
            return false;
        }
        if !ticket.accepts_replies() {
            notify.error("This ticket is closed");
            return false;
        }

        let id = ticket.id.clone();
        if let Err(e) = api.reply_ticket(&id, message).await {
            report_failure(notify, &e, "Reply could not be sent");
            return false;
        }
        notify.success("Reply sent");
        self.reply.clear();
        match api.ticket(&id).await {
            Ok(ticket) => self.selected = Some(ticket),
            Err(e) => report_failure(notify, &e, "Failed to refresh ticket"),
        }
        self.load(api, notify).await;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::MockTransport;
    use crate::client::Method;
    use crate::notify::RecordingNotifier;
    use serde_json::json;

    fn ticket(status: &str, messages: usize) -> serde_json::Value {
        let messages: Vec<_> = (0..messages)
            .map(|i| json!({"id": format!("m{}", i), "message": "hi", "sender_type": "company"}))
            .collect();
        json!({
            "id": "t1", "ticket_number": "TKT-000001", "subject": "Invoice",
            "category": "billing", "priority": "high", "status": status,
            "messages": messages
        })
    }

    #[tokio::test]
    async fn test_create_requires_subject_and_message() {
        let mock = MockTransport::new();
        let api = FleetApi::new(mock.clone());
        let notify = RecordingNotifier::default();
        let mut page = SupportPage::default();

        page.new_ticket.subject = "Invoice".into();
        assert!(!page.create(&api, &notify).await);
        assert_eq!(notify.errors(), vec!["message is required"]);
        assert_eq!(mock.request_count(), 0);
    }

    #[tokio::test]
    async fn test_create_announces_ticket_number() {
        let mock = MockTransport::new();
        mock.respond(Method::Post, "/api/support/tickets", 200, ticket("open", 1));
        mock.respond(Method::Get, "/api/support/tickets", 200, json!([ticket("open", 1)]));
        let api = FleetApi::new(mock.clone());
        let notify = RecordingNotifier::default();
        let mut page = SupportPage {
            create_open: true,
            ..Default::default()
        };

        page.new_ticket.subject = "Invoice".into();
        page.new_ticket.message = "Please resend".into();
        assert!(page.create(&api, &notify).await);
        assert!(!page.create_open);
        assert_eq!(page.tickets.len(), 1);
        assert_eq!(notify.successes(), vec!["Ticket TKT-000001 created"]);
        let body = mock.requests()[0].body.clone().unwrap();
        assert_eq!(body["category"], json!("general"));
        assert_eq!(body["priority"], json!("medium"));
    }

    #[tokio::test]
    async fn test_reply_refreshes_ticket() {
        let mock = MockTransport::new();
        mock.respond(Method::Get, "/api/support/tickets/t1", 200, ticket("open", 1));
        mock.respond(Method::Post, "/api/support/tickets/t1/reply", 200, json!({}));
        mock.respond(Method::Get, "/api/support/tickets", 200, json!([]));
        let api = FleetApi::new(mock.clone());
        let notify = RecordingNotifier::default();
        let mut page = SupportPage::default();

        page.open(&api, &notify, "t1").await;
        mock.respond(Method::Get, "/api/support/tickets/t1", 200, ticket("open", 2));

        page.reply = "   ".into();
        assert!(!page.send_reply(&api, &notify).await);
        assert!(notify.is_silent());

        page.reply = "Any update?".into();
        assert!(page.send_reply(&api, &notify).await);
        assert_eq!(page.selected.as_ref().unwrap().messages.len(), 2);
        assert!(page.reply.is_empty());
        assert_eq!(
            mock.requests_to(Method::Post, "/api/support/tickets/t1/reply")[0].body,
            Some(json!({"message": "Any update?"}))
        );
    }

    #[tokio::test]
    async fn test_closed_ticket_rejects_reply() {
        let mock = MockTransport::new();
        mock.respond(Method::Get, "/api/support/tickets/t1", 200, ticket("closed", 3));
        let api = FleetApi::new(mock.clone());
        let notify = RecordingNotifier::default();
        let mut page = SupportPage::default();

        page.open(&api, &notify, "t1").await;
        page.reply = "hello?".into();
        assert!(!page.send_reply(&api, &notify).await);
        assert!(mock
            .requests_to(Method::Post, "/api/support/tickets/t1/reply")
            .is_empty());
    }
}
