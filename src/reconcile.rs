//! Folding a finished background call back into live page state
//!
//! A view runs a controller method on a copy of its page while the user
//! keeps typing into the original. When the call completes only the
//! fields the call itself changed are written back; every other field
//! keeps whatever the user entered meanwhile.

/// Three-way merge at field granularity
pub trait Reconcile {
    /// Copy into `self` each field where `after` differs from `before`
    fn reconcile(&mut self, before: &Self, after: Self);
}

macro_rules! reconcile_fields {
    ($page:ty { $($field:ident),+ $(,)? }) => {
        impl $crate::reconcile::Reconcile for $page {
            fn reconcile(&mut self, before: &Self, after: Self) {
                $(
                    if after.$field != before.$field {
                        self.$field = after.$field;
                    }
                )+
            }
        }
    };
}

use crate::panel::{
    CustomersPage, DashboardPage, GpsPage, LocationsPage, NewReservationPage, PaymentsPage,
    ReportsPage, ReservationsPage, SupportPage, ThemeStorePage, VehiclesPage,
};
use crate::storefront::{AccountPage, BookingPage, CatalogPage, HomePage, VehicleDetailPage};

reconcile_fields!(CustomersPage { customers, search, loading, dialog_open, draft, form_error });
reconcile_fields!(DashboardPage { stats, recent, loading });
reconcile_fields!(GpsPage { positions, selected, loading });
reconcile_fields!(LocationsPage { locations, loading, dialog_open, editing, form, form_error });
reconcile_fields!(PaymentsPage { payments, search, loading });
reconcile_fields!(ReportsPage { stats, loading });
reconcile_fields!(ReservationsPage { reservations, status_filter, search, loading });
reconcile_fields!(NewReservationPage {
    vehicles,
    customers,
    vehicle_id,
    customer_id,
    start_date,
    end_date,
    pickup_location,
    return_location,
    notes,
    loading,
    saving,
});
reconcile_fields!(SupportPage { tickets, loading, create_open, new_ticket, selected, reply });
reconcile_fields!(ThemeStorePage { themes, settings, loading, saving });
reconcile_fields!(VehiclesPage {
    vehicles,
    status_filter,
    search,
    loading,
    dialog_open,
    editing,
    draft,
    form_error,
});
reconcile_fields!(AccountPage { reservations, loading });
reconcile_fields!(BookingPage {
    vehicle_id,
    pickup,
    return_date,
    vehicle,
    full_name,
    email,
    phone,
    tc_no,
    pickup_location,
    return_location,
    notes,
    terms_accepted,
    kvkk_accepted,
    loading,
    submitting,
    step,
});
reconcile_fields!(CatalogPage { vehicles, filters, loading });
reconcile_fields!(HomePage { theme, featured, loading });
reconcile_fields!(VehicleDetailPage { vehicle, pickup, return_date, loading, not_found });
