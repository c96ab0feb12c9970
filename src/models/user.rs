//! Accounts, roles and tenants

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Permission level attached to a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Superadmin,
    /// Company administrator
    FirmaAdmin,
    /// Operations staff
    Operasyon,
    /// Accounting staff
    Muhasebe,
    /// General staff
    Personel,
    /// End customer of the booking site
    Musteri,
    #[serde(other)]
    Unknown,
}

/// Roles that may enter the admin panel
pub const OPERATOR_ROLES: [Role; 4] = [
    Role::FirmaAdmin,
    Role::Operasyon,
    Role::Muhasebe,
    Role::Personel,
];

impl Role {
    /// Wire name as sent by the server
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Superadmin => "superadmin",
            Role::FirmaAdmin => "firma_admin",
            Role::Operasyon => "operasyon",
            Role::Muhasebe => "muhasebe",
            Role::Personel => "personel",
            Role::Musteri => "musteri",
            Role::Unknown => "unknown",
        }
    }

    /// Human readable name for the sidebar footer
    pub fn label(&self) -> &'static str {
        match self {
            Role::Superadmin => "Super admin",
            Role::FirmaAdmin => "Company admin",
            Role::Operasyon => "Operations",
            Role::Muhasebe => "Accounting",
            Role::Personel => "Staff",
            Role::Musteri => "Customer",
            Role::Unknown => "Unknown",
        }
    }

    pub fn is_operator(&self) -> bool {
        OPERATOR_ROLES.contains(self)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "superadmin" => Ok(Role::Superadmin),
            "firma_admin" => Ok(Role::FirmaAdmin),
            "operasyon" => Ok(Role::Operasyon),
            "muhasebe" => Ok(Role::Muhasebe),
            "personel" => Ok(Role::Personel),
            "musteri" => Ok(Role::Musteri),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}

/// Authenticated account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub role: Role,
    #[serde(default)]
    pub company_id: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Tenant record of the signed-in operator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: String,
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub tax_number: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Body of a successful login or registration
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub user: User,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

pub(crate) fn default_true() -> bool {
    true
}

fn default_token_type() -> String {
    "bearer".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_names() {
        let role: Role = serde_json::from_str("\"firma_admin\"").unwrap();
        assert_eq!(role, Role::FirmaAdmin);
        assert_eq!(serde_json::to_string(&Role::Operasyon).unwrap(), "\"operasyon\"");
    }

    #[test]
    fn test_unknown_role_does_not_fail() {
        let role: Role = serde_json::from_str("\"franchise_owner\"").unwrap();
        assert_eq!(role, Role::Unknown);
        assert!(!role.is_operator());
    }

    #[test]
    fn test_user_defaults() {
        let user: User = serde_json::from_str(
            r#"{"id":"u1","email":"a@b.com","full_name":"Ayse","role":"personel"}"#,
        )
        .unwrap();
        assert!(user.is_active);
        assert!(user.company_id.is_none());
        assert!(user.role.is_operator());
    }
}
