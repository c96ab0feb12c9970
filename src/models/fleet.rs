//! Vehicles and pickup/drop-off locations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::forms::{require, FormError};
use super::user::default_true;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleStatus {
    Available,
    Rented,
    Service,
    Reserved,
}

impl VehicleStatus {
    pub const ALL: [VehicleStatus; 4] = [
        VehicleStatus::Available,
        VehicleStatus::Rented,
        VehicleStatus::Service,
        VehicleStatus::Reserved,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Available => "available",
            VehicleStatus::Rented => "rented",
            VehicleStatus::Service => "service",
            VehicleStatus::Reserved => "reserved",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VehicleStatus::Available => "Available",
            VehicleStatus::Rented => "Rented",
            VehicleStatus::Service => "In service",
            VehicleStatus::Reserved => "Reserved",
        }
    }
}

impl std::str::FromStr for VehicleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("Unknown vehicle status: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transmission {
    Manuel,
    Otomatik,
    YariOtomatik,
}

impl Transmission {
    pub const ALL: [Transmission; 3] = [
        Transmission::Manuel,
        Transmission::Otomatik,
        Transmission::YariOtomatik,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Transmission::Manuel => "manuel",
            Transmission::Otomatik => "otomatik",
            Transmission::YariOtomatik => "yari_otomatik",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Transmission::Manuel => "Manual",
            Transmission::Otomatik => "Automatic",
            Transmission::YariOtomatik => "Semi-automatic",
        }
    }
}

impl std::str::FromStr for Transmission {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Unknown transmission: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuelType {
    Benzin,
    Dizel,
    Elektrik,
    Hibrit,
    Lpg,
}

impl FuelType {
    pub const ALL: [FuelType; 5] = [
        FuelType::Benzin,
        FuelType::Dizel,
        FuelType::Elektrik,
        FuelType::Hibrit,
        FuelType::Lpg,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Benzin => "benzin",
            FuelType::Dizel => "dizel",
            FuelType::Elektrik => "elektrik",
            FuelType::Hibrit => "hibrit",
            FuelType::Lpg => "lpg",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FuelType::Benzin => "Petrol",
            FuelType::Dizel => "Diesel",
            FuelType::Elektrik => "Electric",
            FuelType::Hibrit => "Hybrid",
            FuelType::Lpg => "LPG",
        }
    }
}

impl std::str::FromStr for FuelType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| format!("Unknown fuel type: {}", s))
    }
}

/// A fleet vehicle as listed by the panel and the public catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    #[serde(default)]
    pub company_id: Option<String>,
    pub plate: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub segment: String,
    pub transmission: Transmission,
    pub fuel_type: FuelType,
    #[serde(default = "default_seats")]
    pub seat_count: u32,
    #[serde(default = "default_doors")]
    pub door_count: u32,
    pub daily_rate: f64,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub mileage: u64,
    pub status: VehicleStatus,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Vehicle {
    /// "Brand Model" as shown on cards
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }
}

/// Payload for `POST /api/vehicles`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleDraft {
    pub plate: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub segment: String,
    pub transmission: Transmission,
    pub fuel_type: FuelType,
    pub seat_count: u32,
    pub door_count: u32,
    pub daily_rate: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub mileage: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Default for VehicleDraft {
    fn default() -> Self {
        Self {
            plate: String::new(),
            brand: String::new(),
            model: String::new(),
            year: 2024,
            segment: "Sedan".to_string(),
            transmission: Transmission::Otomatik,
            fuel_type: FuelType::Benzin,
            seat_count: default_seats(),
            door_count: default_doors(),
            daily_rate: 0.0,
            color: None,
            mileage: 0,
            image_url: None,
        }
    }
}

impl VehicleDraft {
    pub fn validate(&self) -> Result<(), FormError> {
        require("plate", &self.plate)?;
        require("brand", &self.brand)?;
        require("model", &self.model)?;
        if !(self.daily_rate > 0.0) {
            return Err(FormError::Invalid {
                field: "daily_rate",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

/// Pickup/drop-off point managed from the panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub city: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub working_hours: Option<String>,
    #[serde(default = "default_true")]
    pub is_pickup: bool,
    #[serde(default = "default_true")]
    pub is_dropoff: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Last reported position of a rented vehicle, from `GET /api/gps/vehicles`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehiclePosition {
    pub vehicle_id: String,
    pub plate: String,
    pub lat: f64,
    pub lng: f64,
    /// km/h
    #[serde(default)]
    pub speed: f64,
    #[serde(default)]
    pub last_update: Option<DateTime<Utc>>,
}

impl VehiclePosition {
    /// `41.0082, 28.9784`
    pub fn coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.lat, self.lng)
    }
}

fn default_seats() -> u32 {
    5
}

fn default_doors() -> u32 {
    4
}
