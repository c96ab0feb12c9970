//! Public booking site pages

mod account;
mod booking;
mod catalog;
mod customer_auth;
mod home;
mod vehicle_detail;

pub use account::Account;
pub use booking::Booking;
pub use catalog::Catalog;
pub use customer_auth::{CustomerLogin, CustomerRegister};
pub use home::Home;
pub use vehicle_detail::VehicleDetail;

use fleetease::access::public_paths;
use fleetease::models::Vehicle;
use leptos::*;
use leptos_router::*;

use crate::format::format_money;

pub(super) const PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1549317661-bd32c8ce0db2?w=800";

/// Catalog tile linking to the vehicle page
#[component]
fn VehicleCard(vehicle: Vehicle) -> impl IntoView {
    let image = vehicle
        .image_url
        .clone()
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());

    view! {
        <A
            href=public_paths::vehicle(&vehicle.id)
            class="block bg-white rounded-xl shadow-sm overflow-hidden hover:shadow-md transition"
        >
            <img src=image alt=vehicle.display_name() class="w-full h-48 object-cover" />
            <div class="p-4 space-y-2">
                <div class="flex items-center justify-between">
                    <h3 class="font-semibold">{vehicle.display_name()}</h3>
                    <span class="text-xs text-gray-500">{vehicle.year}</span>
                </div>
                <p class="text-sm text-gray-500">
                    {format!("{} · {} · {} · {} seats",
                        vehicle.segment,
                        vehicle.transmission.label(),
                        vehicle.fuel_type.label(),
                        vehicle.seat_count)}
                </p>
                <p class="text-lg font-bold text-theme">
                    {format_money(vehicle.daily_rate)}
                    <span class="text-sm font-normal text-gray-500">" / day"</span>
                </p>
            </div>
        </A>
    }
}
