//! App Root Component
//!
//! Providers and the route table. Admin routes are mounted at the root on
//! the panel host and under `/admin` elsewhere.

use fleetease::access::{public_paths, AdminRoute, SiteMode};
use leptos::*;
use leptos_router::*;

use crate::api::get_api_base;
use crate::components::Toast;
use crate::pages::admin::{
    Customers, Dashboard, Gps, Locations, Login, NewReservation, Payments, Register, Reports,
    Reservations, Support, ThemeStore, Vehicles,
};
use crate::pages::site::{
    Account, Booking, Catalog, CustomerLogin, CustomerRegister, Home, VehicleDetail,
};
use crate::pages::NotFound;
use crate::state::{provide_auth, provide_global_state};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let global = provide_global_state();
    provide_auth(&get_api_base());

    let mode = global.site_mode;
    let dashboard = mode.dashboard_path();

    let root = {
        let dashboard = dashboard.clone();
        move || match mode {
            SiteMode::Panel => view! { <Redirect path=dashboard.clone() /> }.into_view(),
            SiteMode::Public => view! { <Home /> }.into_view(),
        }
    };

    view! {
        <Router>
            <Routes>
                <Route path=public_paths::HOME view=root />

                // Admin panel
                <Route path=mode.login_path() view=Login />
                <Route path=mode.register_path() view=Register />
                <Route path=mode.path(AdminRoute::Dashboard) view=Dashboard />
                <Route path=mode.path(AdminRoute::Vehicles) view=Vehicles />
                <Route path=mode.path(AdminRoute::Customers) view=Customers />
                <Route path=mode.path(AdminRoute::Reservations) view=Reservations />
                <Route path=mode.path(AdminRoute::NewReservation) view=NewReservation />
                <Route path=mode.path(AdminRoute::Locations) view=Locations />
                <Route path=mode.path(AdminRoute::Gps) view=Gps />
                <Route path=mode.path(AdminRoute::Payments) view=Payments />
                <Route path=mode.path(AdminRoute::Reports) view=Reports />
                <Route path=mode.path(AdminRoute::ThemeStore) view=ThemeStore />
                <Route path=mode.path(AdminRoute::Support) view=Support />
                <Route path="/admin" view=move || view! { <Redirect path=dashboard.clone() /> } />

                // Booking site
                <Route path=public_paths::VEHICLES view=Catalog />
                <Route path=public_paths::VEHICLE_ROUTE view=VehicleDetail />
                <Route path=public_paths::BOOKING view=Booking />
                <Route path=public_paths::CUSTOMER_LOGIN view=CustomerLogin />
                <Route path=public_paths::CUSTOMER_REGISTER view=CustomerRegister />
                <Route path=public_paths::ACCOUNT view=Account />

                <Route path="/*any" view=NotFound />
            </Routes>
            <Toast />
        </Router>
    }
}
