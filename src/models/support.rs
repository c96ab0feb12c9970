//! Support tickets raised by operators

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::forms::{require, FormError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Open,
    InProgress,
    WaitingCustomer,
    Resolved,
    Closed,
}

impl TicketStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TicketStatus::Open => "Open",
            TicketStatus::InProgress => "In progress",
            TicketStatus::WaitingCustomer => "Awaiting your reply",
            TicketStatus::Resolved => "Resolved",
            TicketStatus::Closed => "Closed",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl TicketPriority {
    pub const ALL: [TicketPriority; 4] = [
        TicketPriority::Low,
        TicketPriority::Medium,
        TicketPriority::High,
        TicketPriority::Urgent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketPriority::Low => "low",
            TicketPriority::Medium => "medium",
            TicketPriority::High => "high",
            TicketPriority::Urgent => "urgent",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TicketPriority::Low => "Low",
            TicketPriority::Medium => "Medium",
            TicketPriority::High => "High",
            TicketPriority::Urgent => "Urgent",
        }
    }
}

impl std::str::FromStr for TicketPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| format!("Unknown priority: {}", s))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketCategory {
    Technical,
    Billing,
    FeatureRequest,
    BugReport,
    Account,
    #[default]
    General,
}

impl TicketCategory {
    pub const ALL: [TicketCategory; 6] = [
        TicketCategory::Technical,
        TicketCategory::Billing,
        TicketCategory::FeatureRequest,
        TicketCategory::BugReport,
        TicketCategory::Account,
        TicketCategory::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketCategory::Technical => "technical",
            TicketCategory::Billing => "billing",
            TicketCategory::FeatureRequest => "feature_request",
            TicketCategory::BugReport => "bug_report",
            TicketCategory::Account => "account",
            TicketCategory::General => "general",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TicketCategory::Technical => "Technical support",
            TicketCategory::Billing => "Billing / payment",
            TicketCategory::FeatureRequest => "Feature request",
            TicketCategory::BugReport => "Bug report",
            TicketCategory::Account => "Account",
            TicketCategory::General => "General",
        }
    }
}

impl std::str::FromStr for TicketCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SenderType {
    Support,
    Company,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketMessage {
    #[serde(default)]
    pub id: Option<String>,
    pub message: String,
    pub sender_type: SenderType,
    #[serde(default)]
    pub sender_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportTicket {
    pub id: String,
    pub ticket_number: String,
    pub subject: String,
    #[serde(default)]
    pub category: TicketCategory,
    #[serde(default)]
    pub priority: TicketPriority,
    pub status: TicketStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub messages: Vec<TicketMessage>,
}

impl SupportTicket {
    pub fn accepts_replies(&self) -> bool {
        self.status != TicketStatus::Closed
    }

    /// The list view counts the opening message even when messages are not embedded
    pub fn message_count(&self) -> usize {
        self.messages.len().max(1)
    }
}

/// Payload for `POST /api/support/tickets`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewTicket {
    pub subject: String,
    pub message: String,
    pub category: TicketCategory,
    pub priority: TicketPriority,
}

impl NewTicket {
    pub fn validate(&self) -> Result<(), FormError> {
        require("subject", &self.subject)?;
        require("message", &self.message)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_from_server_json() {
        let json = r#"{
            "id": "t1", "ticket_number": "TKT-000123", "subject": "Invoice",
            "category": "billing", "priority": "urgent", "status": "waiting_customer",
            "messages": [
                {"id": "m1", "message": "Hello", "sender_type": "company"},
                {"id": "m2", "message": "Hi", "sender_type": "support"}
            ]
        }"#;
        let ticket: SupportTicket = serde_json::from_str(json).unwrap();
        assert_eq!(ticket.priority, TicketPriority::Urgent);
        assert_eq!(ticket.message_count(), 2);
        assert!(ticket.accepts_replies());
    }

    #[test]
    fn test_new_ticket_defaults() {
        let ticket = NewTicket::default();
        assert_eq!(ticket.category, TicketCategory::General);
        assert_eq!(ticket.priority, TicketPriority::Medium);
        assert_eq!(ticket.validate(), Err(FormError::Required("subject")));
    }
}
