//! Routing gate and role-based menu
//!
//! The same bundle serves two hosts. On `panel.<domain>` the admin panel
//! owns the root (`/dashboard`); everywhere else it sits under `/admin`
//! next to the public booking site.

use crate::auth::AuthState;
use crate::models::{Role, OPERATOR_ROLES};

const ADMIN_PREFIX: &str = "/admin";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteMode {
    /// `panel.` subdomain, admin routes at the root
    Panel,
    /// Main domain, admin routes under `/admin`
    Public,
}

impl SiteMode {
    /// Decide from a host name, with or without port
    pub fn from_host(host: &str) -> Self {
        if host.trim().to_ascii_lowercase().starts_with("panel.") {
            SiteMode::Panel
        } else {
            SiteMode::Public
        }
    }

    pub fn prefix(&self) -> &'static str {
        match self {
            SiteMode::Panel => "",
            SiteMode::Public => ADMIN_PREFIX,
        }
    }

    pub fn path(&self, route: AdminRoute) -> String {
        format!("{}{}", self.prefix(), route.suffix())
    }

    pub fn login_path(&self) -> String {
        format!("{}/login", self.prefix())
    }

    pub fn register_path(&self) -> String {
        format!("{}/register", self.prefix())
    }

    pub fn dashboard_path(&self) -> String {
        self.path(AdminRoute::Dashboard)
    }

    /// Match a browser path against the admin routes of this mode
    pub fn route_for(&self, path: &str) -> Option<AdminRoute> {
        let rest = path.strip_prefix(self.prefix())?;
        let rest = rest.trim_end_matches('/');
        AdminRoute::ALL.into_iter().find(|r| r.suffix() == rest)
    }
}

/// Protected admin pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminRoute {
    Dashboard,
    Vehicles,
    Customers,
    Reservations,
    NewReservation,
    Locations,
    Gps,
    Payments,
    Reports,
    ThemeStore,
    Support,
}

impl AdminRoute {
    pub const ALL: [AdminRoute; 11] = [
        AdminRoute::Dashboard,
        AdminRoute::Vehicles,
        AdminRoute::Customers,
        AdminRoute::Reservations,
        AdminRoute::NewReservation,
        AdminRoute::Locations,
        AdminRoute::Gps,
        AdminRoute::Payments,
        AdminRoute::Reports,
        AdminRoute::ThemeStore,
        AdminRoute::Support,
    ];

    /// Path below the mode prefix
    pub fn suffix(&self) -> &'static str {
        match self {
            AdminRoute::Dashboard => "/dashboard",
            AdminRoute::Vehicles => "/vehicles",
            AdminRoute::Customers => "/customers",
            AdminRoute::Reservations => "/reservations",
            AdminRoute::NewReservation => "/reservations/new",
            AdminRoute::Locations => "/locations",
            AdminRoute::Gps => "/gps",
            AdminRoute::Payments => "/payments",
            AdminRoute::Reports => "/reports",
            AdminRoute::ThemeStore => "/theme-store",
            AdminRoute::Support => "/support",
        }
    }

    /// Roles allowed to open the page.
    ///
    /// The dashboard is where every redirect lands, so any operator may
    /// open it even though its menu entry is narrower.
    pub fn allowed_roles(&self) -> &'static [Role] {
        match self {
            AdminRoute::Dashboard => &OPERATOR_ROLES,
            AdminRoute::NewReservation => MENU[3].roles,
            other => MENU
                .iter()
                .find(|item| item.route == *other)
                .map(|item| item.roles)
                .unwrap_or(&[]),
        }
    }

    pub fn allows(&self, role: Role) -> bool {
        self.allowed_roles().contains(&role)
    }
}

/// Sidebar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub route: AdminRoute,
    pub label: &'static str,
    /// Icon name understood by the UI
    pub icon: &'static str,
    pub roles: &'static [Role],
}

pub static MENU: [MenuItem; 10] = [
    MenuItem {
        route: AdminRoute::Dashboard,
        label: "Dashboard",
        icon: "dashboard",
        roles: &[Role::FirmaAdmin, Role::Operasyon, Role::Muhasebe],
    },
    MenuItem {
        route: AdminRoute::Vehicles,
        label: "Vehicles",
        icon: "car",
        roles: &[Role::FirmaAdmin, Role::Operasyon, Role::Personel],
    },
    MenuItem {
        route: AdminRoute::Customers,
        label: "Customers",
        icon: "users",
        roles: &[Role::FirmaAdmin, Role::Operasyon],
    },
    MenuItem {
        route: AdminRoute::Reservations,
        label: "Reservations",
        icon: "calendar",
        roles: &[Role::FirmaAdmin, Role::Operasyon, Role::Personel],
    },
    MenuItem {
        route: AdminRoute::Locations,
        label: "Locations",
        icon: "map-pin",
        roles: &[Role::FirmaAdmin, Role::Operasyon],
    },
    MenuItem {
        route: AdminRoute::Gps,
        label: "GPS Tracking",
        icon: "navigation",
        roles: &[Role::FirmaAdmin, Role::Operasyon],
    },
    MenuItem {
        route: AdminRoute::Payments,
        label: "Payments",
        icon: "credit-card",
        roles: &[Role::FirmaAdmin, Role::Muhasebe],
    },
    MenuItem {
        route: AdminRoute::Reports,
        label: "Reports",
        icon: "bar-chart",
        roles: &[Role::FirmaAdmin, Role::Muhasebe],
    },
    MenuItem {
        route: AdminRoute::ThemeStore,
        label: "Theme Store",
        icon: "palette",
        roles: &[Role::FirmaAdmin],
    },
    MenuItem {
        route: AdminRoute::Support,
        label: "Support",
        icon: "help-circle",
        roles: &[Role::FirmaAdmin, Role::Operasyon, Role::Personel, Role::Muhasebe],
    },
];

/// Menu entries for a role, paired with their paths in `mode`
pub fn visible_menu(role: Role, mode: SiteMode) -> Vec<(&'static MenuItem, String)> {
    MENU.iter()
        .filter(|item| item.roles.contains(&role))
        .map(|item| (item, mode.path(item.route)))
        .collect()
}

/// Exact match or a sub-path of the item
pub fn is_active_path(current: &str, item_path: &str) -> bool {
    current == item_path
        || current
            .strip_prefix(item_path)
            .map(|rest| rest.starts_with('/'))
            .unwrap_or(false)
}

/// What the router should do with a navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still being restored; show a spinner
    Wait,
    Allow,
    Redirect(String),
    /// Signed in with an account that cannot use the panel at all
    Forbidden,
}

/// Gate for protected admin pages
pub fn guard(route: AdminRoute, auth: &AuthState, mode: SiteMode) -> GuardDecision {
    match auth {
        AuthState::Loading => GuardDecision::Wait,
        AuthState::Anonymous => GuardDecision::Redirect(mode.login_path()),
        AuthState::Authenticated { user, .. } => {
            if route.allows(user.role) {
                GuardDecision::Allow
            } else if route == AdminRoute::Dashboard {
                GuardDecision::Forbidden
            } else {
                GuardDecision::Redirect(mode.dashboard_path())
            }
        }
    }
}

/// Gate for the operator login and register pages
pub fn public_guard(auth: &AuthState, mode: SiteMode) -> GuardDecision {
    match auth {
        AuthState::Loading => GuardDecision::Wait,
        AuthState::Authenticated { user, .. } if user.role.is_operator() => {
            GuardDecision::Redirect(mode.dashboard_path())
        }
        _ => GuardDecision::Allow,
    }
}

/// Booking-site paths
pub mod public_paths {
    pub const HOME: &str = "/";
    pub const VEHICLES: &str = "/araclar";
    pub const BOOKING: &str = "/rezervasyon";
    pub const CUSTOMER_LOGIN: &str = "/musteri/giris";
    pub const CUSTOMER_REGISTER: &str = "/musteri/kayit";
    pub const ACCOUNT: &str = "/hesabim";
    /// Router pattern matched by [`vehicle`]
    pub const VEHICLE_ROUTE: &str = "/arac/:id";

    pub fn vehicle(id: &str) -> String {
        format!("/arac/{}", id)
    }
}

/// Gate for the customer account page
pub fn customer_guard(auth: &AuthState) -> GuardDecision {
    match auth {
        AuthState::Loading => GuardDecision::Wait,
        AuthState::Authenticated { .. } => GuardDecision::Allow,
        AuthState::Anonymous => GuardDecision::Redirect(public_paths::CUSTOMER_LOGIN.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::sample_user;

    fn signed_in(role: Role) -> AuthState {
        AuthState::Authenticated {
            user: sample_user(role),
            company: None,
        }
    }

    #[test]
    fn test_site_mode_from_host() {
        assert_eq!(SiteMode::from_host("panel.fleetease.com"), SiteMode::Panel);
        assert_eq!(SiteMode::from_host("PANEL.localhost:3000"), SiteMode::Panel);
        assert_eq!(SiteMode::from_host("fleetease.com"), SiteMode::Public);
        assert_eq!(SiteMode::from_host("mypanel.com"), SiteMode::Public);

        assert_eq!(SiteMode::Panel.login_path(), "/login");
        assert_eq!(SiteMode::Public.login_path(), "/admin/login");
        assert_eq!(SiteMode::Public.path(AdminRoute::ThemeStore), "/admin/theme-store");
    }

    #[test]
    fn test_route_for_path() {
        assert_eq!(
            SiteMode::Public.route_for("/admin/reservations/new"),
            Some(AdminRoute::NewReservation)
        );
        assert_eq!(SiteMode::Panel.route_for("/locations/"), Some(AdminRoute::Locations));
        assert_eq!(SiteMode::Public.route_for("/admin/gps"), Some(AdminRoute::Gps));
        assert_eq!(SiteMode::Panel.route_for("/reports"), Some(AdminRoute::Reports));
        assert_eq!(SiteMode::Public.route_for("/locations"), None);
    }

    #[test]
    fn test_visible_menu_per_role() {
        let labels = |role| -> Vec<&str> {
            visible_menu(role, SiteMode::Panel)
                .into_iter()
                .map(|(item, _)| item.label)
                .collect()
        };

        assert_eq!(labels(Role::FirmaAdmin).len(), 10);
        assert_eq!(
            labels(Role::Muhasebe),
            vec!["Dashboard", "Payments", "Reports", "Support"]
        );
        assert_eq!(
            labels(Role::Operasyon),
            vec![
                "Dashboard",
                "Vehicles",
                "Customers",
                "Reservations",
                "Locations",
                "GPS Tracking",
                "Support"
            ]
        );
        assert_eq!(
            labels(Role::Personel),
            vec!["Vehicles", "Reservations", "Support"]
        );
        assert!(labels(Role::Musteri).is_empty());
        assert!(labels(Role::Superadmin).is_empty());

        let (_, path) = &visible_menu(Role::Operasyon, SiteMode::Public)[0];
        assert_eq!(path, "/admin/dashboard");
    }

    #[test]
    fn test_active_path_rule() {
        assert!(is_active_path("/admin/vehicles", "/admin/vehicles"));
        assert!(is_active_path("/admin/reservations/new", "/admin/reservations"));
        assert!(!is_active_path("/admin/vehicles-archive", "/admin/vehicles"));
        assert!(!is_active_path("/admin", "/admin/vehicles"));
    }

    #[test]
    fn test_guard_redirects_anonymous_to_login() {
        assert_eq!(
            guard(AdminRoute::Vehicles, &AuthState::Anonymous, SiteMode::Public),
            GuardDecision::Redirect("/admin/login".into())
        );
        assert_eq!(
            guard(AdminRoute::Support, &AuthState::Anonymous, SiteMode::Panel),
            GuardDecision::Redirect("/login".into())
        );
        assert_eq!(
            guard(AdminRoute::Vehicles, &AuthState::Loading, SiteMode::Panel),
            GuardDecision::Wait
        );
    }

    #[test]
    fn test_guard_redirects_wrong_role_to_dashboard() {
        assert_eq!(
            guard(AdminRoute::ThemeStore, &signed_in(Role::Operasyon), SiteMode::Panel),
            GuardDecision::Redirect("/dashboard".into())
        );
        assert_eq!(
            guard(AdminRoute::Payments, &signed_in(Role::Personel), SiteMode::Public),
            GuardDecision::Redirect("/admin/dashboard".into())
        );
        assert_eq!(
            guard(AdminRoute::ThemeStore, &signed_in(Role::FirmaAdmin), SiteMode::Panel),
            GuardDecision::Allow
        );
    }

    #[test]
    fn test_dashboard_does_not_loop() {
        assert_eq!(
            guard(AdminRoute::Dashboard, &signed_in(Role::Personel), SiteMode::Panel),
            GuardDecision::Allow
        );
        assert_eq!(
            guard(AdminRoute::Dashboard, &signed_in(Role::Musteri), SiteMode::Panel),
            GuardDecision::Forbidden
        );
        assert_eq!(
            guard(AdminRoute::Vehicles, &signed_in(Role::Musteri), SiteMode::Panel),
            GuardDecision::Redirect("/dashboard".into())
        );
    }

    #[test]
    fn test_public_guard() {
        assert_eq!(
            public_guard(&signed_in(Role::Muhasebe), SiteMode::Public),
            GuardDecision::Redirect("/admin/dashboard".into())
        );
        assert_eq!(
            public_guard(&AuthState::Anonymous, SiteMode::Public),
            GuardDecision::Allow
        );
        assert_eq!(
            customer_guard(&AuthState::Anonymous),
            GuardDecision::Redirect("/musteri/giris".into())
        );
    }
}
